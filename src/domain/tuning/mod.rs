// Gameplay tuning, kept apart from runtime configuration.

pub mod ball;
pub mod player;

pub use ball::BallTuning;
pub use player::PlayerTuning;
