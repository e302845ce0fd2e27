/// Gameplay tuning for players.

#[derive(Debug, Clone, Copy)]
pub struct PlayerTuning {
    /// Running speed in metres per second.
    pub run_speed: f32,

    /// Body box edge lengths (across, depth, height) in metres.
    pub body: [f32; 3],

    /// Ball must be within this horizontal distance to be played.
    pub reach: f32,

    /// Ball must be lower than this to be played.
    pub reach_height: f32,

    /// Ground speed given to the ball by a kick, metres per second.
    pub kick_speed: f32,

    /// Ground speed given to the ball by a pass.
    pub pass_speed: f32,

    /// Ground speed given to the ball by a shot.
    pub shoot_speed: f32,

    /// Upward speed added by a shot.
    pub shoot_lift: f32,

    /// Seconds between two touches by the controlled player.
    pub touch_cooldown: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            run_speed: 7.0,
            body: [0.5, 0.3, 1.8],
            reach: 0.8,
            reach_height: 0.6,
            kick_speed: 12.0,
            pass_speed: 9.0,
            shoot_speed: 22.0,
            shoot_lift: 4.0,
            touch_cooldown: 0.25,
        }
    }
}
