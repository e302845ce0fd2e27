// Auxiliary 2D view: start-up asset acquisition and fire-and-forget repaint requests.

use crate::domain::{AssetError, ClassicFrame, Pitch, RepaintError, RepaintTarget, ViewLauncher};
use crate::interface_adapters::assets::{FsAssets, RgbaImage, SpriteAtlas};
use glam::Vec2;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{info, trace};

/// Static images the 2D view paints with, loaded once at start-up.
#[derive(Debug)]
pub struct ClassicScene {
    pub background: RgbaImage,
    pub sprites: SpriteAtlas,
    pitch: Pitch,
}

impl ClassicScene {
    pub fn new(background: RgbaImage, sprites: SpriteAtlas, pitch: Pitch) -> Self {
        Self {
            background,
            sprites,
            pitch,
        }
    }

    /// Maps a ground-plane position onto background pixels. Origin top-left; world +Y is image up.
    pub fn to_pixel(&self, world: Vec2) -> Vec2 {
        let u = (world.x + self.pitch.half_width()) / self.pitch.width;
        let v = (self.pitch.half_length() - world.y) / self.pitch.length;
        Vec2::new(
            u * self.background.width as f32,
            v * self.background.height as f32,
        )
    }
}

/// What the painter receives per repaint.
#[derive(Debug, Clone)]
pub struct ClassicSnapshot {
    pub scene: Arc<ClassicScene>,
    pub frame: ClassicFrame,
}

/// Loads the pitch and sprite atlas, then hands out a `ClassicView`.
pub struct ClassicLauncher {
    assets: FsAssets,
    pitch_index: u32,
    pitch: Pitch,
    snapshots_tx: watch::Sender<Option<ClassicSnapshot>>,
}

impl ClassicLauncher {
    pub fn new(
        assets: FsAssets,
        pitch_index: u32,
        pitch: Pitch,
        snapshots_tx: watch::Sender<Option<ClassicSnapshot>>,
    ) -> Self {
        Self {
            assets,
            pitch_index,
            pitch,
            snapshots_tx,
        }
    }
}

impl ViewLauncher for ClassicLauncher {
    fn launch(&self) -> Result<Box<dyn RepaintTarget>, AssetError> {
        let background = self.assets.load_pitch(self.pitch_index)?;
        let sprites = self.assets.load_sprites()?;
        Ok(Box::new(ClassicView {
            snapshots_tx: self.snapshots_tx.clone(),
            scene: Arc::new(ClassicScene::new(background, sprites, self.pitch)),
        }))
    }
}

/// Publishes the latest snapshot; whoever paints picks it up on its own task.
pub struct ClassicView {
    snapshots_tx: watch::Sender<Option<ClassicSnapshot>>,
    scene: Arc<ClassicScene>,
}

impl RepaintTarget for ClassicView {
    fn request_repaint(&self, frame: ClassicFrame) -> Result<(), RepaintError> {
        // Overwrites any snapshot not yet painted; only the latest matters.
        self.snapshots_tx
            .send(Some(ClassicSnapshot {
                scene: self.scene.clone(),
                frame,
            }))
            .map_err(|_| RepaintError::Detached)
    }
}

/// Consumes repaint requests until the view is dropped. Returns how many were observed.
pub async fn classic_view_task(
    mut snapshots_rx: watch::Receiver<Option<ClassicSnapshot>>,
) -> u64 {
    let mut painted = 0;
    while snapshots_rx.changed().await.is_ok() {
        if let Some(snapshot) = snapshots_rx.borrow_and_update().as_ref() {
            painted += 1;
            let ball = snapshot.scene.to_pixel(snapshot.frame.ball.truncate());
            trace!(
                tick = snapshot.frame.tick,
                ball_px = ?ball,
                players = snapshot.frame.players.len(),
                sprites = snapshot.scene.sprites.len(),
                "classic view repaint"
            );
        }
    }
    info!(painted, "classic view closed");
    painted
}
