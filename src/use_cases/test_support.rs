use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use glam::Vec3;

use crate::domain::{
    AssetError, BodyKind, ClassicFrame, ControlIntent, DebugFrame, DrawCommand, DrawSurface,
    FrameStamp, Geometry, IntentSource, PhysicalShape, Pose, RepaintError, RepaintTarget,
    SimulationWorld, SolverError, TeamSide, ViewLauncher, Viewpoint,
};

pub(crate) type RepaintLog = Arc<Mutex<Vec<ClassicFrame>>>;

// Deterministic world: the ball moves at a constant velocity, one player box stands still.
pub(crate) struct ScriptedWorld {
    ball: Vec3,
    velocity: Vec3,
    extra: Vec<PhysicalShape>,
    deltas: Vec<f32>,
    applied: Vec<(TeamSide, ControlIntent)>,
    // 1-based step call that fails.
    fail_at: Option<usize>,
    elapsed: f64,
}

impl ScriptedWorld {
    pub(crate) fn new(ball: Vec3) -> Self {
        Self {
            ball,
            velocity: Vec3::ZERO,
            extra: Vec::new(),
            deltas: Vec::new(),
            applied: Vec::new(),
            fail_at: None,
            elapsed: 0.0,
        }
    }

    pub(crate) fn with_ball_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    pub(crate) fn with_extra_shape(mut self, shape: PhysicalShape) -> Self {
        self.extra.push(shape);
        self
    }

    pub(crate) fn failing_at(mut self, call: usize) -> Self {
        self.fail_at = Some(call);
        self
    }

    pub(crate) fn deltas(&self) -> &[f32] {
        &self.deltas
    }

    pub(crate) fn applied(&self) -> &[(TeamSide, ControlIntent)] {
        &self.applied
    }
}

impl SimulationWorld for ScriptedWorld {
    fn apply_intent(&mut self, side: TeamSide, intent: &ControlIntent) {
        self.applied.push((side, *intent));
    }

    fn step(&mut self, dt: f32) -> Result<(), SolverError> {
        if self.fail_at == Some(self.deltas.len() + 1) {
            return Err(SolverError::Diverged {
                body: BodyKind::Ball,
            });
        }
        self.ball += self.velocity * dt;
        self.deltas.push(dt);
        self.elapsed += f64::from(dt);
        Ok(())
    }

    fn geometries(&self) -> Vec<PhysicalShape> {
        let mut shapes = vec![
            PhysicalShape {
                body: BodyKind::Player {
                    side: TeamSide::Home,
                    goalkeeper: false,
                },
                pose: Pose::at(Vec3::new(1.0, 0.0, 0.9)),
                geometry: Geometry::Box {
                    lengths: Vec3::new(0.5, 0.3, 1.8),
                },
            },
            PhysicalShape {
                body: BodyKind::Ball,
                pose: Pose::at(self.ball),
                geometry: Geometry::Sphere { radius: 0.11 },
            },
        ];
        shapes.extend(self.extra.iter().copied());
        shapes
    }

    fn ball_position(&self) -> Vec3 {
        self.ball
    }

    fn place_ball(&mut self, position: Vec3) {
        self.ball = position;
    }

    fn elapsed(&self) -> f64 {
        self.elapsed
    }
}

// Replays scripted intents, then keeps returning the last one.
pub(crate) struct ScriptedInput {
    script: Vec<ControlIntent>,
    next: usize,
}

impl ScriptedInput {
    pub(crate) fn new(script: Vec<ControlIntent>) -> Self {
        Self { script, next: 0 }
    }

    pub(crate) fn idle() -> Self {
        Self::new(Vec::new())
    }

    pub(crate) fn polls(&self) -> usize {
        self.next
    }
}

impl IntentSource for ScriptedInput {
    fn poll(&mut self) -> ControlIntent {
        let intent = self
            .script
            .get(self.next)
            .or_else(|| self.script.last())
            .copied()
            .unwrap_or_default();
        self.next += 1;
        intent
    }
}

// Collects draw calls; `present` closes them into a frame.
#[derive(Default)]
pub(crate) struct RecordingSurface {
    viewpoint: Option<Viewpoint>,
    pending: Vec<DrawCommand>,
    frames: Vec<DebugFrame>,
}

impl RecordingSurface {
    // Commands drawn since the last present.
    pub(crate) fn commands(&self) -> &[DrawCommand] {
        &self.pending
    }

    pub(crate) fn frames(&self) -> &[DebugFrame] {
        &self.frames
    }
}

impl DrawSurface for RecordingSurface {
    fn set_viewpoint(&mut self, viewpoint: Viewpoint) {
        self.viewpoint = Some(viewpoint);
    }

    fn draw(&mut self, command: DrawCommand) {
        self.pending.push(command);
    }

    fn present(&mut self, stamp: FrameStamp) {
        self.frames.push(DebugFrame {
            stamp,
            viewpoint: self.viewpoint,
            commands: std::mem::take(&mut self.pending),
        });
    }
}

pub(crate) struct FailingLauncher;

impl ViewLauncher for FailingLauncher {
    fn launch(&self) -> Result<Box<dyn RepaintTarget>, AssetError> {
        Err(AssetError::Io {
            path: PathBuf::from("assets/pitch6.png"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        })
    }
}

pub(crate) struct RecordingLauncher {
    repaints: RepaintLog,
    detached: bool,
}

impl RecordingLauncher {
    pub(crate) fn new() -> Self {
        Self {
            repaints: Arc::new(Mutex::new(Vec::new())),
            detached: false,
        }
    }

    // Launches a view that rejects every repaint.
    pub(crate) fn detached() -> Self {
        Self {
            detached: true,
            ..Self::new()
        }
    }

    pub(crate) fn repaints(&self) -> RepaintLog {
        Arc::clone(&self.repaints)
    }
}

impl ViewLauncher for RecordingLauncher {
    fn launch(&self) -> Result<Box<dyn RepaintTarget>, AssetError> {
        Ok(Box::new(RecordingView {
            repaints: Arc::clone(&self.repaints),
            detached: self.detached,
        }))
    }
}

struct RecordingView {
    repaints: RepaintLog,
    detached: bool,
}

impl RepaintTarget for RecordingView {
    fn request_repaint(&self, frame: ClassicFrame) -> Result<(), RepaintError> {
        if self.detached {
            return Err(RepaintError::Detached);
        }
        let mut guard = self.repaints.lock().expect("repaints mutex poisoned");
        guard.push(frame);
        Ok(())
    }
}
