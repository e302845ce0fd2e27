// Camera viewpoint recomputed every frame.

use glam::Vec3;

/// Heading, pitch and roll in degrees, in the renderer's convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hpr {
    pub heading: f32,
    pub pitch: f32,
    pub roll: f32,
}

impl Hpr {
    pub const fn new(heading: f32, pitch: f32, roll: f32) -> Self {
        Self {
            heading,
            pitch,
            roll,
        }
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.heading, self.pitch, self.roll]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewpoint {
    pub xyz: Vec3,
    pub hpr: Hpr,
}
