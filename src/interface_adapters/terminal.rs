// Operator line protocol on stdin.
//
//   +key / -key   press / release a key
//                 (up, down, left, right, space, enter, shift, or one character)
//   pause, p      toggle pause
//   quit, q       stop the loop
//   :c            host command c (r resets the ball, s swaps the controlled side)

use crate::interface_adapters::input::{KeyCode, KeyEvent};
use crate::use_cases::HostCommand;
use std::io::BufRead;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalCommand {
    Key(KeyEvent),
    Host(HostCommand),
}

/// Parses one operator line. Blank and unrecognised lines yield `None`.
pub fn parse_line(line: &str) -> Option<TerminalCommand> {
    let line = line.trim();
    if let Some(key) = line.strip_prefix('+') {
        return key
            .parse::<KeyCode>()
            .ok()
            .map(|k| TerminalCommand::Key(KeyEvent::Pressed(k)));
    }
    if let Some(key) = line.strip_prefix('-') {
        return key
            .parse::<KeyCode>()
            .ok()
            .map(|k| TerminalCommand::Key(KeyEvent::Released(k)));
    }
    if let Some(cmd) = line.strip_prefix(':') {
        let mut chars = cmd.chars();
        return match (chars.next(), chars.next()) {
            (Some(c), None) => Some(TerminalCommand::Host(HostCommand::Char(c))),
            _ => None,
        };
    }

    match line.to_ascii_lowercase().as_str() {
        "pause" | "p" => Some(TerminalCommand::Host(HostCommand::TogglePause)),
        "quit" | "q" => Some(TerminalCommand::Host(HostCommand::Quit)),
        _ => None,
    }
}

/// Routes operator lines to the keyboard controller and the host driver until EOF.
///
/// Sends wait for channel space instead of dropping, so a key release is never lost. Must run
/// outside the async runtime. Ends early once either receiver is gone.
pub fn route_operator_lines<R: BufRead>(
    reader: R,
    key_tx: &mpsc::Sender<KeyEvent>,
    command_tx: &mpsc::Sender<HostCommand>,
) {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!(error = %e, "failed to read operator input");
                return;
            }
        };

        let delivered = match parse_line(&line) {
            Some(TerminalCommand::Key(event)) => key_tx.blocking_send(event).is_ok(),
            Some(TerminalCommand::Host(cmd)) => command_tx.blocking_send(cmd).is_ok(),
            None => {
                if !line.trim().is_empty() {
                    debug!(line = %line, "unrecognised operator input");
                }
                true
            }
        };
        if !delivered {
            debug!("operator channel closed; reader exiting");
            return;
        }
    }
    info!("operator input closed");
}

/// Reads stdin on a detached OS thread so a pending read never holds up runtime shutdown.
pub fn spawn_stdin_reader(
    key_tx: mpsc::Sender<KeyEvent>,
    command_tx: mpsc::Sender<HostCommand>,
) -> std::io::Result<std::thread::JoinHandle<()>> {
    std::thread::Builder::new()
        .name("operator-stdin".to_string())
        .spawn(move || route_operator_lines(std::io::stdin().lock(), &key_tx, &command_tx))
}
