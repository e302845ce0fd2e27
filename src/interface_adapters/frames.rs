// JSON-lines sink for presented debug frames.

use crate::domain::DebugFrame;
use crate::interface_adapters::protocol::DebugFrameDto;
use std::path::PathBuf;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::broadcast;
use tracing::{error, info, warn};

/// Where the frame stream goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameOutput {
    Off,
    Stdout,
    File(PathBuf),
}

impl FrameOutput {
    /// `off` or empty, `stdout` or `-`, anything else is a file path.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "" | "off" | "none" => FrameOutput::Off,
            "stdout" | "-" => FrameOutput::Stdout,
            path => FrameOutput::File(PathBuf::from(path)),
        }
    }
}

/// Writes each frame as one JSON line until every surface is dropped. Returns frames written.
pub async fn debug_frame_serializer<W>(
    mut frames_rx: broadcast::Receiver<DebugFrame>,
    mut writer: W,
) -> u64
where
    W: AsyncWrite + Unpin,
{
    let mut written = 0;
    loop {
        match frames_rx.recv().await {
            Ok(frame) => {
                let mut line = match serde_json::to_string(&DebugFrameDto::from(&frame)) {
                    Ok(txt) => txt,
                    Err(e) => {
                        error!(error = ?e, "failed to serialize debug frame");
                        continue;
                    }
                };
                line.push('\n');
                if let Err(e) = writer.write_all(line.as_bytes()).await {
                    error!(error = %e, "failed to write debug frame; serializer exiting");
                    break;
                }
                written += 1;
            }
            Err(broadcast::error::RecvError::Lagged(n)) => {
                warn!(missed = n, "frame serializer lagged; skipping to latest frame");
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }

    if let Err(e) = writer.flush().await {
        warn!(error = %e, "failed to flush frame output");
    }
    info!(frames = written, "frame stream closed");
    written
}
