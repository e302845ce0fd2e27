// Draw commands and frame snapshots handed to the presentation surfaces.

use super::palette::Rgb;
use super::shape::Pose;
use super::team::TeamSide;
use super::viewpoint::Viewpoint;
use glam::{Vec2, Vec3};

/// Primitive the debug renderer knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Box { lengths: Vec3 },
    Sphere { radius: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub primitive: Primitive,
    pub pose: Pose,
    pub color: Rgb,
}

/// Identifies the frame being presented.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStamp {
    pub tick: u64,
    /// Simulated seconds since start, `tick * dt` while not paused.
    pub simulated_time: f64,
}

/// Everything drawn for one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct DebugFrame {
    pub stamp: FrameStamp,
    pub viewpoint: Option<Viewpoint>,
    pub commands: Vec<DrawCommand>,
}

/// Immutable snapshot for the 2D classic view.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassicFrame {
    pub tick: u64,
    pub ball: Vec3,
    pub players: Vec<(TeamSide, Vec2)>,
}
