// Maps physical shapes onto debug draw primitives.

use crate::domain::{DrawCommand, DrawSurface, Geometry, PhysicalShape, Primitive, Rgb, ShapeKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOutcome {
    Drawn,
    /// No primitive exists for this kind yet; nothing was drawn.
    Skipped(ShapeKind),
}

/// Issues one draw call for `shape` in `color`, or none when the kind has no primitive.
pub fn draw<S>(shape: &PhysicalShape, color: Rgb, surface: &mut S) -> DrawOutcome
where
    S: DrawSurface + ?Sized,
{
    let primitive = match shape.geometry {
        Geometry::Box { lengths } => Primitive::Box { lengths },
        Geometry::Sphere { radius } => Primitive::Sphere { radius },
        other => return DrawOutcome::Skipped(other.kind()),
    };

    surface.draw(DrawCommand {
        primitive,
        pose: shape.pose,
        color,
    });
    DrawOutcome::Drawn
}
