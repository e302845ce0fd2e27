// Domain layer: simulation types, boundaries and rules.

pub mod errors;
pub mod frame;
pub mod intent;
pub mod palette;
pub mod pitch;
pub mod ports;
pub mod shape;
pub mod state;
pub mod systems;
pub mod team;
pub mod tuning;
pub mod viewpoint;
pub mod world;

pub use errors::{AssetError, RepaintError, SolverError};
pub use frame::{ClassicFrame, DebugFrame, DrawCommand, FrameStamp, Primitive};
pub use intent::ControlIntent;
pub use palette::{Palette, Rgb};
pub use pitch::Pitch;
pub use ports::{DrawSurface, IntentSource, RepaintTarget, SimulationWorld, ViewLauncher};
pub use shape::{BodyKind, Geometry, PhysicalShape, Pose, ShapeKind};
pub use team::{Formation, TacticsBook, Team, TeamSide};
pub use viewpoint::{Hpr, Viewpoint};
pub use world::PitchWorld;
