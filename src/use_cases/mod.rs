// Use cases layer: the frame loop and what it drives each tick.

pub mod camera;
pub mod diagnostics;
pub mod scheduler;
pub mod types;
pub mod visualizer;

#[cfg(test)]
pub(crate) mod test_support;

pub use camera::{CameraPolicy, HeadingConvention};
pub use diagnostics::Diagnostics;
pub use scheduler::{FrameScheduler, SchedulerSettings};
pub use types::{FatalError, HostCommand, SimulationHost, StartupError, TickReport};
pub use visualizer::DrawOutcome;
