// Use-case level inputs/outputs for the frame loop.

use crate::domain::{AssetError, ControlIntent, SolverError, TeamSide};
use glam::Vec3;
use thiserror::Error;

/// Callbacks the host rendering driver invokes on the loop.
pub trait SimulationHost {
    /// One-time acquisition of presentation resources before the first tick.
    fn start(&mut self) -> Result<(), StartupError>;

    /// One simulate-observe-render iteration.
    fn step(&mut self, pause: bool) -> Result<TickReport, FatalError>;

    /// Single-character operator command.
    fn on_command(&mut self, cmd: char);

    /// Releases presentation resources. Safe to call more than once.
    fn stop(&mut self);
}

/// Operator commands addressed to the host driver rather than the control device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCommand {
    TogglePause,
    Quit,
    /// Forwarded to `SimulationHost::on_command`.
    Char(char),
}

/// What one call to `step` did.
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    pub tick: u64,
    /// False while paused or after stop.
    pub stepped: bool,
    pub simulated_time: f64,
    pub ball: Vec3,
    pub intent: ControlIntent,
    pub controlled: TeamSide,
    pub drawn: usize,
    pub skipped: usize,
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("presentation start-up failed: {0}")]
    Assets(#[from] AssetError),
}

/// Simulation failure that ends the run.
#[derive(Debug, Error)]
#[error("simulation failed at tick {tick} (dt {dt}, last intent {last_intent:?}): {source}")]
pub struct FatalError {
    pub tick: u64,
    pub dt: f32,
    pub last_intent: ControlIntent,
    #[source]
    pub source: SolverError,
}
