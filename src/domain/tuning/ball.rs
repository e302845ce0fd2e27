/// Gameplay tuning for the ball.

#[derive(Debug, Clone, Copy)]
pub struct BallTuning {
    /// Radius in metres.
    pub radius: f32,

    /// Downward acceleration in metres per second squared.
    pub gravity: f32,

    /// Fraction of vertical speed kept after hitting the ground.
    pub ground_restitution: f32,

    /// Fraction of horizontal speed kept after hitting a touchline or goal line.
    pub boundary_restitution: f32,

    /// Horizontal deceleration while rolling, metres per second squared.
    pub rolling_friction: f32,

    /// Vertical speeds below this settle onto the ground instead of bouncing.
    pub rest_speed: f32,
}

impl Default for BallTuning {
    fn default() -> Self {
        Self {
            radius: 0.11,
            gravity: 9.81,
            ground_restitution: 0.6,
            boundary_restitution: 0.5,
            rolling_friction: 1.5,
            rest_speed: 0.5,
        }
    }
}
