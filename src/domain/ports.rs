use crate::domain::errors::{AssetError, RepaintError, SolverError};
use crate::domain::frame::{ClassicFrame, DrawCommand, FrameStamp};
use crate::domain::intent::ControlIntent;
use crate::domain::shape::PhysicalShape;
use crate::domain::team::TeamSide;
use crate::domain::viewpoint::Viewpoint;
use glam::Vec3;

// Port for the rigid-body world driven by the frame scheduler.
pub trait SimulationWorld {
    /// Forwards the operator's intent to one side. Mapping intent to motion is the world's concern.
    fn apply_intent(&mut self, side: TeamSide, intent: &ControlIntent);

    /// Advances the world by `dt` seconds.
    fn step(&mut self, dt: f32) -> Result<(), SolverError>;

    /// Snapshot of every shape as of the last completed step.
    fn geometries(&self) -> Vec<PhysicalShape>;

    fn ball_position(&self) -> Vec3;

    fn place_ball(&mut self, position: Vec3);

    /// Total simulated seconds.
    fn elapsed(&self) -> f64;
}

// Port for the operator's control device.
pub trait IntentSource {
    /// Latest sampled intent. Never blocks waiting for new input.
    fn poll(&mut self) -> ControlIntent;
}

// Port for the 3D debug renderer.
pub trait DrawSurface {
    fn set_viewpoint(&mut self, viewpoint: Viewpoint);
    fn draw(&mut self, command: DrawCommand);
    /// Ends the frame; commands drawn since the previous call belong to `stamp`.
    fn present(&mut self, stamp: FrameStamp);
}

// Port for the auxiliary 2D view. Requests are fire-and-forget.
pub trait RepaintTarget: Send {
    fn request_repaint(&self, frame: ClassicFrame) -> Result<(), RepaintError>;
}

// Port for one-time start-up acquisition of assets and the 2D view.
pub trait ViewLauncher: Send {
    fn launch(&self) -> Result<Box<dyn RepaintTarget>, AssetError>;
}
