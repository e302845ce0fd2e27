// Frame scheduler: one simulate, observe, render pass per tick.

use super::camera::CameraPolicy;
use super::diagnostics::Diagnostics;
use super::types::{FatalError, SimulationHost, StartupError, TickReport};
use super::visualizer::{self, DrawOutcome};
use crate::domain::{
    BodyKind, ClassicFrame, ControlIntent, DrawSurface, FrameStamp, IntentSource, Palette,
    RepaintTarget, SimulationWorld, TeamSide, ViewLauncher,
};
use glam::Vec3;
use tracing::{debug, error, info};

/// Fixed settings for a scheduler run.
#[derive(Debug, Clone, Copy)]
pub struct SchedulerSettings {
    /// Constant simulation step in seconds.
    pub fixed_dt: f32,
    pub controlled: TeamSide,
    /// Where `'r'` puts the ball back.
    pub ball_start: Vec3,
    pub camera: CameraPolicy,
    pub palette: Palette,
}

pub struct FrameScheduler<W, I, S> {
    world: W,
    input: I,
    surface: S,
    settings: SchedulerSettings,
    diagnostics: Diagnostics,
    // Absent in headless runs.
    launcher: Option<Box<dyn ViewLauncher>>,
    view: Option<Box<dyn RepaintTarget>>,
    controlled: TeamSide,
    tick: u64,
    simulated_time: f64,
    last_intent: ControlIntent,
    stopped: bool,
}

impl<W, I, S> FrameScheduler<W, I, S>
where
    W: SimulationWorld,
    I: IntentSource,
    S: DrawSurface,
{
    pub fn new(
        world: W,
        input: I,
        surface: S,
        settings: SchedulerSettings,
        diagnostics: Diagnostics,
    ) -> Self {
        Self {
            world,
            input,
            surface,
            controlled: settings.controlled,
            settings,
            diagnostics,
            launcher: None,
            view: None,
            tick: 0,
            simulated_time: 0.0,
            last_intent: ControlIntent::default(),
            stopped: false,
        }
    }

    /// Attaches the 2D view launcher run by `start`. Without one the scheduler is headless.
    pub fn with_launcher(mut self, launcher: Box<dyn ViewLauncher>) -> Self {
        self.launcher = Some(launcher);
        self
    }

    pub fn world(&self) -> &W {
        &self.world
    }

    pub fn into_world(self) -> W {
        self.world
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn simulated_time(&self) -> f64 {
        self.simulated_time
    }

    pub fn controlled(&self) -> TeamSide {
        self.controlled
    }

    pub fn has_view(&self) -> bool {
        self.view.is_some()
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    fn render(&mut self, ball: Vec3) -> (usize, usize) {
        let viewpoint = self.settings.camera.viewpoint(ball);
        self.surface.set_viewpoint(viewpoint);

        let shapes = self.world.geometries();
        let (mut drawn, mut skipped) = (0, 0);
        for shape in &shapes {
            let color = self.settings.palette.color_for(shape.body);
            match visualizer::draw(shape, color, &mut self.surface) {
                DrawOutcome::Drawn => drawn += 1,
                DrawOutcome::Skipped(kind) => {
                    skipped += 1;
                    self.diagnostics.unsupported_shape(kind);
                }
            }
        }

        self.surface.present(FrameStamp {
            tick: self.tick,
            simulated_time: self.simulated_time,
        });

        if let Some(view) = &self.view {
            let frame = ClassicFrame {
                tick: self.tick,
                ball,
                players: shapes
                    .iter()
                    .filter_map(|s| match s.body {
                        BodyKind::Player { side, .. } => Some((side, s.pose.position.truncate())),
                        _ => None,
                    })
                    .collect(),
            };
            if let Err(e) = view.request_repaint(frame) {
                self.diagnostics.repaint_failed(self.tick, &e);
            }
        }

        (drawn, skipped)
    }
}

impl<W, I, S> SimulationHost for FrameScheduler<W, I, S>
where
    W: SimulationWorld,
    I: IntentSource,
    S: DrawSurface,
{
    fn start(&mut self) -> Result<(), StartupError> {
        let Some(launcher) = self.launcher.take() else {
            info!("starting headless; no 2D view");
            return Ok(());
        };

        let view = launcher.launch().inspect_err(|e| {
            error!(error = %e, "failed to acquire presentation assets");
        })?;
        self.view = Some(view);
        info!("2D view started");
        Ok(())
    }

    fn step(&mut self, pause: bool) -> Result<TickReport, FatalError> {
        // A stopped scheduler leaves the control device alone.
        if self.stopped {
            return Ok(TickReport {
                tick: self.tick,
                stepped: false,
                simulated_time: self.simulated_time,
                ball: self.world.ball_position(),
                intent: self.last_intent,
                controlled: self.controlled,
                drawn: 0,
                skipped: 0,
            });
        }

        let intent = self.input.poll();
        let dt = self.settings.fixed_dt;
        if !pause {
            self.world.apply_intent(self.controlled, &intent);
            self.last_intent = intent;
            // Ticks are numbered from 1; `self.tick` counts completed ones.
            let tick = self.tick + 1;
            self.world.step(dt).map_err(|source| {
                error!(tick, dt, error = %source, "simulation step failed");
                FatalError {
                    tick,
                    dt,
                    last_intent: self.last_intent,
                    source,
                }
            })?;
            self.tick += 1;
            self.simulated_time += f64::from(dt);
        }

        let ball = self.world.ball_position();
        let (drawn, skipped) = self.render(ball);

        Ok(TickReport {
            tick: self.tick,
            stepped: !pause,
            simulated_time: self.simulated_time,
            ball,
            intent,
            controlled: self.controlled,
            drawn,
            skipped,
        })
    }

    fn on_command(&mut self, cmd: char) {
        match cmd {
            'r' => {
                self.world.place_ball(self.settings.ball_start);
                info!(position = ?self.settings.ball_start, "ball reset");
            }
            's' => {
                self.controlled = self.controlled.opponent();
                info!(side = ?self.controlled, "controlled side switched");
            }
            other => debug!(command = %other, "ignoring command"),
        }
    }

    fn stop(&mut self) {
        if self.stopped {
            return;
        }
        self.stopped = true;
        // Drops the 2D view and any launcher that never ran.
        self.view = None;
        self.launcher = None;
        info!(
            ticks = self.tick,
            simulated_time = self.simulated_time,
            skipped_shapes = self.diagnostics.skipped_shapes(),
            repaint_failures = self.diagnostics.repaint_failures(),
            "frame scheduler stopped"
        );
    }
}
