// Pitch geometry in world coordinates.
//
// Origin at the centre spot, X across the pitch, Y along its length, Z up.

use super::team::TeamSide;
use glam::{Vec2, Vec3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pitch {
    /// Goal line to goal line, metres.
    pub length: f32,
    /// Touchline to touchline, metres.
    pub width: f32,
    pub goal_width: f32,
    pub goal_height: f32,
    /// Distance of the penalty spot from the goal line.
    pub penalty_distance: f32,
}

impl Default for Pitch {
    fn default() -> Self {
        Self {
            length: 105.0,
            width: 68.0,
            goal_width: 7.32,
            goal_height: 2.44,
            penalty_distance: 11.0,
        }
    }
}

impl Pitch {
    pub fn half_length(&self) -> f32 {
        self.length * 0.5
    }

    pub fn half_width(&self) -> f32 {
        self.width * 0.5
    }

    pub fn centre_spot(&self) -> Vec3 {
        Vec3::ZERO
    }

    /// Penalty spot in front of the goal at -Y.
    pub fn penalty_spot_bottom(&self) -> Vec3 {
        Vec3::new(0.0, -self.half_length() + self.penalty_distance, 0.0)
    }

    /// Y coordinate of the goal line a side defends.
    pub fn own_goal_line(&self, side: TeamSide) -> f32 {
        -side.attack_sign() * self.half_length()
    }

    /// Maps a formation slot (see `Formation`) onto the side's half of the pitch.
    pub fn slot_to_world(&self, side: TeamSide, slot: Vec2) -> Vec3 {
        let sign = side.attack_sign();
        let x = sign * (slot.x - 0.5) * self.width;
        let y = self.own_goal_line(side) + sign * slot.y * self.half_length();
        Vec3::new(x, y, 0.0)
    }

    /// Goalkeeper start position, a metre off the goal line.
    pub fn goalkeeper_spot(&self, side: TeamSide) -> Vec3 {
        Vec3::new(0.0, self.own_goal_line(side) + side.attack_sign(), 0.0)
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x.abs() <= self.half_width() && p.y.abs() <= self.half_length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_map_into_each_sides_own_half() {
        let pitch = Pitch::default();
        let slot = Vec2::new(0.25, 0.5);

        let home = pitch.slot_to_world(TeamSide::Home, slot);
        let away = pitch.slot_to_world(TeamSide::Away, slot);

        assert!(home.y < 0.0);
        assert!(away.y > 0.0);
        // Mirrored through the centre spot.
        assert!((home + away).length() < 1e-4);
    }

    #[test]
    fn penalty_spot_is_eleven_metres_from_the_goal_line() {
        let pitch = Pitch::default();
        assert_eq!(pitch.penalty_spot_bottom(), Vec3::new(0.0, -41.5, 0.0));
        assert_eq!(pitch.own_goal_line(TeamSide::Home), -52.5);
    }
}
