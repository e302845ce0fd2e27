// Debug draw surface that publishes each presented frame to subscribers.

use crate::domain::{DebugFrame, DrawCommand, DrawSurface, FrameStamp, Viewpoint};
use tokio::sync::broadcast;
use tracing::trace;

/// Collects draw commands and broadcasts them as one `DebugFrame` per `present`.
pub struct BroadcastSurface {
    frames_tx: broadcast::Sender<DebugFrame>,
    viewpoint: Option<Viewpoint>,
    pending: Vec<DrawCommand>,
    presented: u64,
}

impl BroadcastSurface {
    pub fn new(frames_tx: broadcast::Sender<DebugFrame>) -> Self {
        Self {
            frames_tx,
            viewpoint: None,
            pending: Vec::new(),
            presented: 0,
        }
    }

    pub fn presented(&self) -> u64 {
        self.presented
    }
}

impl DrawSurface for BroadcastSurface {
    fn set_viewpoint(&mut self, viewpoint: Viewpoint) {
        self.viewpoint = Some(viewpoint);
    }

    fn draw(&mut self, command: DrawCommand) {
        self.pending.push(command);
    }

    fn present(&mut self, stamp: FrameStamp) {
        let commands = std::mem::take(&mut self.pending);
        self.presented += 1;
        trace!(tick = stamp.tick, commands = commands.len(), "frame presented");
        // No subscribers is fine; the frame is simply not observed.
        let _ = self.frames_tx.send(DebugFrame {
            stamp,
            viewpoint: self.viewpoint,
            commands,
        });
    }
}
