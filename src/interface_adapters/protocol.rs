// Serialized form of debug frames for the JSON-lines frame stream.

use crate::domain::{DebugFrame, DrawCommand, Primitive, Viewpoint};
use serde::{Deserialize, Serialize};

/// One presented frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugFrameDto {
    pub tick: u64,
    pub simulated_time: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewpoint: Option<ViewpointDto>,
    #[serde(default)]
    pub commands: Vec<DrawCommandDto>,
}

impl From<&DebugFrame> for DebugFrameDto {
    fn from(frame: &DebugFrame) -> Self {
        Self {
            tick: frame.stamp.tick,
            simulated_time: frame.stamp.simulated_time,
            viewpoint: frame.viewpoint.map(ViewpointDto::from),
            commands: frame.commands.iter().map(DrawCommandDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ViewpointDto {
    pub xyz: [f32; 3],
    // Degrees.
    pub hpr: [f32; 3],
}

impl From<Viewpoint> for ViewpointDto {
    fn from(view: Viewpoint) -> Self {
        Self {
            xyz: view.xyz.to_array(),
            hpr: view.hpr.to_array(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PrimitiveDto {
    Box { lengths: [f32; 3] },
    Sphere { radius: f32 },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DrawCommandDto {
    pub primitive: PrimitiveDto,
    pub position: [f32; 3],
    /// 3x3 rotation, row-major.
    pub rotation: [f32; 9],
    pub color: [f32; 3],
}

impl From<&DrawCommand> for DrawCommandDto {
    fn from(command: &DrawCommand) -> Self {
        let primitive = match command.primitive {
            Primitive::Box { lengths } => PrimitiveDto::Box {
                lengths: lengths.to_array(),
            },
            Primitive::Sphere { radius } => PrimitiveDto::Sphere { radius },
        };
        Self {
            primitive,
            position: command.pose.position.to_array(),
            // glam stores columns; the stream carries rows.
            rotation: command.pose.rotation.transpose().to_cols_array(),
            color: command.color.to_array(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FrameStamp, Hpr, Pose, Rgb};
    use glam::{Mat3, Vec3};

    #[test]
    fn frame_serializes_with_tagged_primitives_and_row_major_rotation() {
        let rotation = Mat3::from_rotation_z(std::f32::consts::FRAC_PI_2);
        let frame = DebugFrame {
            stamp: FrameStamp {
                tick: 3,
                simulated_time: 0.05,
            },
            viewpoint: Some(Viewpoint {
                xyz: Vec3::new(0.0, -46.5, 15.0),
                hpr: Hpr::new(90.0, -70.0, 0.0),
            }),
            commands: vec![
                DrawCommand {
                    primitive: Primitive::Box {
                        lengths: Vec3::new(0.5, 0.3, 1.8),
                    },
                    pose: Pose {
                        position: Vec3::new(1.0, 2.0, 0.9),
                        rotation,
                    },
                    color: Rgb::RED,
                },
                DrawCommand {
                    primitive: Primitive::Sphere { radius: 0.11 },
                    pose: Pose::at(Vec3::new(0.0, -41.5, 0.11)),
                    color: Rgb::WHITE,
                },
            ],
        };

        let json = serde_json::to_value(DebugFrameDto::from(&frame)).expect("serialize");

        assert_eq!(json["tick"], 3);
        assert_eq!(json["viewpoint"]["hpr"][0], 90.0);
        assert_eq!(json["commands"][0]["primitive"]["type"], "box");
        assert_eq!(json["commands"][1]["primitive"]["type"], "sphere");

        let dto: DebugFrameDto = serde_json::from_value(json).expect("deserialize");
        let rows = dto.commands[0].rotation;
        // First row of a +90 degree rotation about Z is (0, -1, 0).
        assert!(rows[0].abs() < 1e-6);
        assert!((rows[1] + 1.0).abs() < 1e-6);
        assert_eq!(dto.commands[1].color, [1.0, 1.0, 1.0]);
    }

    #[test]
    fn frame_without_viewpoint_omits_the_field() {
        let frame = DebugFrame {
            stamp: FrameStamp {
                tick: 0,
                simulated_time: 0.0,
            },
            viewpoint: None,
            commands: Vec::new(),
        };

        let txt = serde_json::to_string(&DebugFrameDto::from(&frame)).expect("serialize");
        assert!(!txt.contains("viewpoint"));
    }
}
