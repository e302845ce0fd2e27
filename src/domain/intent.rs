// Operator control intent sampled once per tick.

use glam::Vec2;

/// Discrete actions currently requested for the controlled side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlIntent {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub kick: bool,
    pub pass: bool,
    pub shoot: bool,
}

impl ControlIntent {
    pub fn is_idle(&self) -> bool {
        *self == Self::default()
    }

    /// Unit movement direction on the pitch plane, or zero when opposing keys cancel out.
    ///
    /// `up` points along +Y, towards the away goal.
    pub fn direction(&self) -> Vec2 {
        let x = (self.right as i8 - self.left as i8) as f32;
        let y = (self.up as i8 - self.down as i8) as f32;
        Vec2::new(x, y).normalize_or_zero()
    }
}
