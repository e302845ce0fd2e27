// Camera policy that keeps the ball framed.

use crate::domain::{Hpr, Viewpoint};
use glam::{Vec2, Vec3};

/// How configured headings map onto the renderer's heading axis.
///
/// The heading the renderer receives is `sign * heading + offset_deg`. The default (+1, 0)
/// passes the configured heading through untouched. The renderer's own heading definition is
/// unverified; calibrate with `HARNESS_HEADING_SIGN` and `HARNESS_HEADING_OFFSET_DEG`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadingConvention {
    pub sign: f32,
    pub offset_deg: f32,
}

impl Default for HeadingConvention {
    fn default() -> Self {
        Self {
            sign: 1.0,
            offset_deg: 0.0,
        }
    }
}

impl HeadingConvention {
    pub fn apply(&self, heading: f32) -> f32 {
        self.sign * heading + self.offset_deg
    }
}

/// Fixed offset-and-orientation follow camera. Pure: no state survives between calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPolicy {
    /// Horizontal offset from the point of interest.
    pub offset: Vec2,
    /// Absolute camera height; the camera does not bob with the ball.
    pub elevation: f32,
    pub orientation: Hpr,
    pub heading: HeadingConvention,
}

impl Default for CameraPolicy {
    fn default() -> Self {
        Self {
            offset: Vec2::new(0.0, -5.0),
            elevation: 15.0,
            orientation: Hpr::new(90.0, -70.0, 0.0),
            heading: HeadingConvention::default(),
        }
    }
}

impl CameraPolicy {
    pub fn viewpoint(&self, poi: Vec3) -> Viewpoint {
        Viewpoint {
            xyz: Vec3::new(poi.x + self.offset.x, poi.y + self.offset.y, self.elevation),
            hpr: Hpr {
                heading: self.heading.apply(self.orientation.heading),
                ..self.orientation
            },
        }
    }
}
