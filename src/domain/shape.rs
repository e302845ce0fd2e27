// Physical shapes as the world exposes them after a step.

use super::team::TeamSide;
use glam::{Mat3, Vec3};

/// Position and orientation of a body in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Mat3,
}

impl Pose {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            rotation: Mat3::IDENTITY,
        }
    }

    pub fn identity() -> Self {
        Self::at(Vec3::ZERO)
    }
}

/// Shape-specific dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    /// Full edge lengths along the local axes.
    Box { lengths: Vec3 },
    Sphere { radius: f32 },
    /// Cylinder with hemispherical caps, `length` along local Z excluding caps.
    Capsule { radius: f32, length: f32 },
    /// Infinite plane `normal . p = offset`.
    Plane { normal: Vec3, offset: f32 },
}

/// Variant tag of a `Geometry`, used for logging and dispatch outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Box,
    Sphere,
    Capsule,
    Plane,
}

impl Geometry {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Geometry::Box { .. } => ShapeKind::Box,
            Geometry::Sphere { .. } => ShapeKind::Sphere,
            Geometry::Capsule { .. } => ShapeKind::Capsule,
            Geometry::Plane { .. } => ShapeKind::Plane,
        }
    }
}

/// What a shape belongs to. Drives color selection in the visualizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyKind {
    Ball,
    Player { side: TeamSide, goalkeeper: bool },
    Goal,
    Pitch,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalShape {
    pub body: BodyKind,
    pub pose: Pose,
    pub geometry: Geometry,
}

impl PhysicalShape {
    pub fn kind(&self) -> ShapeKind {
        self.geometry.kind()
    }
}
