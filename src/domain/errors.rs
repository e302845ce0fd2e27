// Domain-level errors for the simulation, asset and presentation boundaries.

use super::shape::BodyKind;
use std::path::PathBuf;
use thiserror::Error;

/// Unrecoverable failure inside the simulation world.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolverError {
    #[error("invalid step delta {0}")]
    InvalidDelta(f32),
    #[error("{body:?} state diverged (non-finite value)")]
    Diverged { body: BodyKind },
}

/// Failure to acquire start-up assets.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode image {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("malformed manifest {path}: {source}")]
    Manifest {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("sprite {id} ({x}, {y}, {width}x{height}) lies outside the atlas")]
    SpriteOutOfBounds {
        id: u32,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
    #[error("duplicate sprite id {0}")]
    DuplicateSprite(u32),
    #[error("formation {name} is invalid: {reason}")]
    InvalidFormation { name: String, reason: String },
    #[error("unknown formation {0}")]
    UnknownFormation(String),
}

/// Repaint requests are best-effort; this only says why one was dropped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepaintError {
    #[error("presentation surface detached")]
    Detached,
}
