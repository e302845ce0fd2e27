// Diagnostics sink handed to the frame scheduler.

use crate::domain::{RepaintError, ShapeKind};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Counts per-frame problems and keeps the log from flooding.
#[derive(Debug, Default)]
pub struct Diagnostics {
    warned_kinds: HashSet<ShapeKind>,
    skipped_shapes: u64,
    repaint_failures: u64,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a skipped shape. Warns only the first time a kind shows up.
    pub fn unsupported_shape(&mut self, kind: ShapeKind) {
        self.skipped_shapes += 1;
        if self.warned_kinds.insert(kind) {
            warn!(kind = ?kind, "no debug primitive for shape kind; skipping");
        }
    }

    pub fn repaint_failed(&mut self, tick: u64, error: &RepaintError) {
        self.repaint_failures += 1;
        debug!(tick, error = %error, "repaint request dropped");
    }

    pub fn skipped_shapes(&self) -> u64 {
        self.skipped_shapes
    }

    pub fn repaint_failures(&self) -> u64 {
        self.repaint_failures
    }

    /// Distinct shape kinds that have been skipped so far.
    pub fn unsupported_kinds(&self) -> impl Iterator<Item = ShapeKind> + '_ {
        self.warned_kinds.iter().copied()
    }
}
