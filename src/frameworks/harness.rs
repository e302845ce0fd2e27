// Framework bootstrap for the debug harness runtime.

use super::config::{self, HarnessConfig};
use super::driver::{LoopExit, LoopSettings, run_simulation_loop};
use crate::domain::{AssetError, DebugFrame, Pitch, PitchWorld, SimulationWorld, Team, TeamSide};
use crate::interface_adapters::assets::FsAssets;
use crate::interface_adapters::classic::{ClassicLauncher, classic_view_task};
use crate::interface_adapters::frames::{FrameOutput, debug_frame_serializer};
use crate::interface_adapters::input::{KeyBindings, KeyEvent, KeyboardController};
use crate::interface_adapters::surface::BroadcastSurface;
use crate::interface_adapters::terminal::spawn_stdin_reader;
use crate::use_cases::{
    CameraPolicy, Diagnostics, FatalError, FrameScheduler, HostCommand, SchedulerSettings,
    StartupError,
};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{Notify, broadcast, mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error(transparent)]
    Startup(#[from] StartupError),
    #[error(transparent)]
    Fatal(#[from] FatalError),
    #[error("failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<AssetError> for HarnessError {
    fn from(e: AssetError) -> Self {
        HarnessError::Startup(StartupError::Assets(e))
    }
}

/// Outcome of a run that ended without an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub exit: LoopExit,
    pub ticks: u64,
    pub frames_written: u64,
}

fn init_runtime() {
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // Logs go to stderr; stdout may carry the frame stream.
    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run(config: HarnessConfig) -> Result<RunSummary, HarnessError> {
    let assets = FsAssets::new(&config.assets_dir);

    // Setup teams and world
    let tactics = assets.load_tactics()?;
    let home = Team::new(TeamSide::Home, tactics.require(&config.home_formation)?.clone());
    let away = Team::new(TeamSide::Away, tactics.require(&config.away_formation)?.clone());
    let pitch = Pitch::default();
    let ball_start = pitch.penalty_spot_bottom();
    let mut world = PitchWorld::new(&home, &away, pitch);
    world.place_ball(ball_start);
    info!(
        home = home.formation.name(),
        away = away.formation.name(),
        controlled = ?config.controlled,
        dt = config.fixed_dt(),
        "world ready"
    );

    // Setup Channels
    // key_tx/rx: raw key events for the keyboard controller.
    let (key_tx, key_rx) = mpsc::channel::<KeyEvent>(config::KEY_CHANNEL_CAPACITY);
    // command_tx/rx: pause, quit and single-character commands for the driver.
    let (command_tx, command_rx) = mpsc::channel::<HostCommand>(config::COMMAND_CHANNEL_CAPACITY);
    // frames_tx/rx: presented debug frames for the frame stream.
    let (frames_tx, frames_rx) = broadcast::channel::<DebugFrame>(config::FRAME_BROADCAST_CAPACITY);

    if config.operator_stdin {
        spawn_stdin_reader(key_tx, command_tx).map_err(|source| HarnessError::Io {
            path: PathBuf::from("<stdin>"),
            source,
        })?;
    } else {
        drop((key_tx, command_tx));
    }

    let serializer = spawn_frame_serializer(&config.frame_output, frames_rx).await?;

    let settings = SchedulerSettings {
        fixed_dt: config.fixed_dt(),
        controlled: config.controlled,
        ball_start,
        camera: CameraPolicy {
            heading: config.heading,
            ..CameraPolicy::default()
        },
        palette: config.palette,
    };
    let mut scheduler = FrameScheduler::new(
        world,
        KeyboardController::new(KeyBindings::default(), key_rx),
        BroadcastSurface::new(frames_tx),
        settings,
        Diagnostics::new(),
    );

    let mut classic_task = None;
    if !config.headless {
        let (classic_tx, classic_rx) = watch::channel(None);
        classic_task = Some(tokio::spawn(classic_view_task(classic_rx)));
        scheduler = scheduler.with_launcher(Box::new(ClassicLauncher::new(
            assets.clone(),
            config.pitch_index,
            pitch,
            classic_tx,
        )));
    }

    // Ctrl-C requests a stop between ticks.
    let shutdown = Arc::new(Notify::new());
    let ctrl_c = tokio::spawn({
        let shutdown = shutdown.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                shutdown.notify_one();
            }
        }
    });

    let loop_settings = LoopSettings {
        tick_interval: config.tick_interval,
        max_ticks: config.max_ticks,
    };
    let result = run_simulation_loop(&mut scheduler, loop_settings, command_rx, shutdown).await;
    ctrl_c.abort();

    // Dropping the scheduler closes the frame and repaint channels.
    let ticks = scheduler.tick();
    drop(scheduler);
    let frames_written = join_quietly(serializer, "frame serializer").await;
    join_quietly(classic_task, "classic view").await;

    let exit = result?;
    info!(?exit, ticks, frames_written, "harness finished");
    Ok(RunSummary {
        exit,
        ticks,
        frames_written,
    })
}

pub async fn run_with_config() -> Result<RunSummary, HarnessError> {
    init_runtime();
    run(HarnessConfig::from_env())
        .await
        .inspect_err(|e| tracing::error!(error = %e, "harness failed"))
}

async fn spawn_frame_serializer(
    output: &FrameOutput,
    frames_rx: broadcast::Receiver<DebugFrame>,
) -> Result<Option<JoinHandle<u64>>, HarnessError> {
    let task = match output {
        FrameOutput::Off => return Ok(None),
        FrameOutput::Stdout => tokio::spawn(debug_frame_serializer(frames_rx, tokio::io::stdout())),
        FrameOutput::File(path) => {
            let file = tokio::fs::File::create(path)
                .await
                .map_err(|source| HarnessError::Io {
                    path: path.clone(),
                    source,
                })?;
            info!(path = %path.display(), "writing debug frames");
            tokio::spawn(debug_frame_serializer(
                frames_rx,
                tokio::io::BufWriter::new(file),
            ))
        }
    };
    Ok(Some(task))
}

async fn join_quietly(task: Option<JoinHandle<u64>>, name: &str) -> u64 {
    let Some(task) = task else {
        return 0;
    };
    task.await.unwrap_or_else(|e| {
        warn!(task = name, error = %e, "background task failed");
        0
    })
}
