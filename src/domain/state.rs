// Domain-level simulation bodies owned by the pitch world.

use super::intent::ControlIntent;
use super::team::TeamSide;
use glam::{Vec2, Vec3};

pub struct SimBall {
    /// Centre of the ball.
    pub position: Vec3,
    pub velocity: Vec3,
}

pub struct SimPlayer {
    pub id: u32,
    pub side: TeamSide,
    pub goalkeeper: bool,
    /// Feet position; Z stays at ground level.
    pub position: Vec3,
    /// Unit direction the player last moved in.
    pub facing: Vec2,

    // Control-only state
    pub last_intent: ControlIntent, // intent applied for the current tick
    pub touch_cooldown: f32,        // seconds until the ball may be played again
}

impl SimPlayer {
    pub fn new(id: u32, side: TeamSide, goalkeeper: bool, position: Vec3) -> Self {
        Self {
            id,
            side,
            goalkeeper,
            position,
            facing: Vec2::new(0.0, side.attack_sign()),
            last_intent: ControlIntent::default(),
            touch_cooldown: 0.0,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.facing.is_finite()
    }
}

impl SimBall {
    pub fn at_rest(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite()
    }
}
