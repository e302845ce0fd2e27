// Host rendering driver: paces the frame loop and feeds it operator commands between ticks.

use super::harness::HarnessError;
use crate::use_cases::{HostCommand, SimulationHost};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Notify, mpsc};
use tracing::{debug, error, info};

#[derive(Debug, Clone, Copy)]
pub struct LoopSettings {
    pub tick_interval: Duration,
    /// Stop after this many simulated ticks.
    pub max_ticks: Option<u64>,
}

/// Why the loop ended without an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    Quit,
    Shutdown,
    MaxTicks,
}

/// Runs `host` until quit, shutdown or the tick limit. `stop` is called on every exit path.
pub async fn run_simulation_loop<H: SimulationHost>(
    host: &mut H,
    settings: LoopSettings,
    mut commands: mpsc::Receiver<HostCommand>,
    shutdown: Arc<Notify>,
) -> Result<LoopExit, HarnessError> {
    if let Err(e) = host.start() {
        host.stop();
        return Err(e.into());
    }

    let mut interval = tokio::time::interval(settings.tick_interval);
    let mut paused = false;

    let exit = loop {
        tokio::select! {
            _ = shutdown.notified() => {
                info!("shutdown requested");
                break LoopExit::Shutdown;
            }
            _ = interval.tick() => {}
        }

        // Commands only take effect between ticks.
        let mut quit = false;
        while let Ok(cmd) = commands.try_recv() {
            match cmd {
                HostCommand::TogglePause => {
                    paused = !paused;
                    info!(paused, "pause toggled");
                }
                HostCommand::Quit => quit = true,
                HostCommand::Char(c) => host.on_command(c),
            }
        }
        if quit {
            info!("quit requested");
            break LoopExit::Quit;
        }

        let report = match host.step(paused) {
            Ok(report) => report,
            Err(e) => {
                error!(error = %e, "frame loop aborted");
                host.stop();
                return Err(e.into());
            }
        };
        debug!(
            tick = report.tick,
            stepped = report.stepped,
            ball = ?report.ball,
            drawn = report.drawn,
            skipped = report.skipped,
            "tick"
        );

        if settings.max_ticks.is_some_and(|max| report.tick >= max) {
            info!(ticks = report.tick, "tick limit reached");
            break LoopExit::MaxTicks;
        }
    };

    host.stop();
    Ok(exit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AssetError, ControlIntent, SolverError, TeamSide};
    use crate::use_cases::{FatalError, StartupError, TickReport};
    use glam::Vec3;

    /// Host that records its callbacks.
    #[derive(Default)]
    struct RecordingHost {
        fail_start: bool,
        fail_at: Option<u64>,
        tick: u64,
        steps: Vec<bool>,
        commands: Vec<char>,
        stops: usize,
    }

    impl SimulationHost for RecordingHost {
        fn start(&mut self) -> Result<(), StartupError> {
            if self.fail_start {
                return Err(StartupError::Assets(AssetError::UnknownFormation("x".into())));
            }
            Ok(())
        }

        fn step(&mut self, pause: bool) -> Result<TickReport, FatalError> {
            self.steps.push(pause);
            if !pause {
                if self.fail_at == Some(self.tick + 1) {
                    return Err(FatalError {
                        tick: self.tick + 1,
                        dt: 1.0 / 60.0,
                        last_intent: ControlIntent::default(),
                        source: SolverError::InvalidDelta(f32::NAN),
                    });
                }
                self.tick += 1;
            }
            Ok(TickReport {
                tick: self.tick,
                stepped: !pause,
                simulated_time: self.tick as f64 / 60.0,
                ball: Vec3::ZERO,
                intent: ControlIntent::default(),
                controlled: TeamSide::Home,
                drawn: 0,
                skipped: 0,
            })
        }

        fn on_command(&mut self, cmd: char) {
            self.commands.push(cmd);
        }

        fn stop(&mut self) {
            self.stops += 1;
        }
    }

    fn settings(max_ticks: Option<u64>) -> LoopSettings {
        LoopSettings {
            tick_interval: Duration::from_millis(1),
            max_ticks,
        }
    }

    #[tokio::test]
    async fn loop_stops_at_the_tick_limit() {
        let mut host = RecordingHost::default();
        let (_tx, rx) = mpsc::channel(4);

        let exit = run_simulation_loop(&mut host, settings(Some(5)), rx, Arc::new(Notify::new()))
            .await
            .expect("loop");

        assert_eq!(exit, LoopExit::MaxTicks);
        assert_eq!(host.tick, 5);
        assert_eq!(host.stops, 1);
    }

    #[tokio::test]
    async fn commands_are_applied_between_ticks() {
        let mut host = RecordingHost::default();
        let (tx, rx) = mpsc::channel(8);
        tx.send(HostCommand::Char('r')).await.expect("send");
        tx.send(HostCommand::TogglePause).await.expect("send");

        // Paused ticks never reach the limit, so quit ends the run.
        let notify = Arc::new(Notify::new());
        let quitter = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            tx.send(HostCommand::Quit).await.expect("send");
        });
        let exit = run_simulation_loop(&mut host, settings(Some(1)), rx, notify)
            .await
            .expect("loop");
        quitter.await.expect("quitter");

        assert_eq!(exit, LoopExit::Quit);
        assert_eq!(host.commands, vec!['r']);
        assert!(!host.steps.is_empty());
        assert!(host.steps.iter().all(|paused| *paused));
        assert_eq!(host.tick, 0);
        assert_eq!(host.stops, 1);
    }

    #[tokio::test]
    async fn shutdown_notification_ends_the_loop() {
        let mut host = RecordingHost::default();
        let (_tx, rx) = mpsc::channel(4);
        let shutdown = Arc::new(Notify::new());
        shutdown.notify_one();

        let exit = run_simulation_loop(&mut host, settings(None), rx, shutdown)
            .await
            .expect("loop");

        assert_eq!(exit, LoopExit::Shutdown);
        assert_eq!(host.stops, 1);
    }

    #[tokio::test]
    async fn startup_failure_still_stops_the_host() {
        let mut host = RecordingHost {
            fail_start: true,
            ..RecordingHost::default()
        };
        let (_tx, rx) = mpsc::channel(4);

        let err = run_simulation_loop(&mut host, settings(Some(5)), rx, Arc::new(Notify::new()))
            .await
            .expect_err("start fails");

        assert!(matches!(err, HarnessError::Startup(_)));
        assert!(host.steps.is_empty());
        assert_eq!(host.stops, 1);
    }

    #[tokio::test]
    async fn solver_failure_is_fatal_and_stops_the_host() {
        let mut host = RecordingHost {
            fail_at: Some(3),
            ..RecordingHost::default()
        };
        let (_tx, rx) = mpsc::channel(4);

        let err = run_simulation_loop(&mut host, settings(None), rx, Arc::new(Notify::new()))
            .await
            .expect_err("solver fails");

        match err {
            HarnessError::Fatal(fatal) => assert_eq!(fatal.tick, 3),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(host.tick, 2);
        assert_eq!(host.stops, 1);
    }
}
