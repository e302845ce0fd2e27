// Frameworks layer: configuration, the host driver and runtime bootstrap.

pub mod config;
pub mod driver;
pub mod harness;
