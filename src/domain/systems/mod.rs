// Per-tick rules applied by the pitch world.

pub mod ball;
pub mod players;
