// Start-up asset loading from an asset directory.
//
//   pitch{index}.png   pitch background
//   sprites.png        sprite atlas image
//   sprites.toml       atlas manifest: [[sprite]] id, x, y, width, height
//   tactics.toml       optional formations: [formations.<name>] slots = [[x, y], ...]

use crate::domain::{AssetError, Formation, TacticsBook};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

pub const SPRITE_ATLAS_FILE: &str = "sprites.png";
pub const SPRITE_MANIFEST_FILE: &str = "sprites.toml";
pub const TACTICS_FILE: &str = "tactics.toml";

/// Decoded RGBA8 image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

pub type SpriteAtlas = HashMap<u32, Arc<RgbaImage>>;

#[derive(Debug, Deserialize)]
struct SpriteManifest {
    #[serde(default, rename = "sprite")]
    sprites: Vec<SpriteRect>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct SpriteRect {
    id: u32,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
}

#[derive(Debug, Deserialize)]
struct TacticsFile {
    #[serde(default)]
    formations: HashMap<String, FormationEntry>,
}

#[derive(Debug, Deserialize)]
struct FormationEntry {
    slots: Vec<[f32; 2]>,
}

/// Loads assets from a directory on disk.
#[derive(Debug, Clone)]
pub struct FsAssets {
    root: PathBuf,
}

impl FsAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn pitch_path(&self, index: u32) -> PathBuf {
        self.root.join(format!("pitch{index}.png"))
    }

    pub fn load_pitch(&self, index: u32) -> Result<RgbaImage, AssetError> {
        let path = self.pitch_path(index);
        let image = decode(&path)?;
        info!(path = %path.display(), width = image.width, height = image.height, "pitch loaded");
        Ok(image)
    }

    pub fn load_sprites(&self) -> Result<SpriteAtlas, AssetError> {
        let manifest_path = self.root.join(SPRITE_MANIFEST_FILE);
        let text = read_text(&manifest_path)?;
        let manifest: SpriteManifest =
            toml::from_str(&text).map_err(|source| AssetError::Manifest {
                path: manifest_path.clone(),
                source,
            })?;

        let atlas_path = self.root.join(SPRITE_ATLAS_FILE);
        let atlas = image::open(&atlas_path)
            .map_err(|e| image_error(&atlas_path, e))?
            .to_rgba8();

        let sprites = cut_sprites(&atlas, &manifest.sprites)?;
        info!(path = %atlas_path.display(), sprites = sprites.len(), "sprite atlas loaded");
        Ok(sprites)
    }

    /// Built-in formations, overridden by `tactics.toml` when it exists.
    pub fn load_tactics(&self) -> Result<TacticsBook, AssetError> {
        let mut book = TacticsBook::builtin();
        let path = self.root.join(TACTICS_FILE);
        if !path.exists() {
            debug!(path = %path.display(), "no tactics file; using built-in formations");
            return Ok(book);
        }

        let text = read_text(&path)?;
        merge_tactics(&mut book, &path, &text)?;
        info!(path = %path.display(), formations = book.len(), "tactics loaded");
        Ok(book)
    }
}

fn read_text(path: &Path) -> Result<String, AssetError> {
    std::fs::read_to_string(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn decode(path: &Path) -> Result<RgbaImage, AssetError> {
    let rgba = image::open(path)
        .map_err(|e| image_error(path, e))?
        .to_rgba8();
    Ok(RgbaImage {
        width: rgba.width(),
        height: rgba.height(),
        pixels: rgba.into_raw(),
    })
}

fn image_error(path: &Path, error: image::ImageError) -> AssetError {
    match error {
        image::ImageError::IoError(source) => AssetError::Io {
            path: path.to_path_buf(),
            source,
        },
        source => AssetError::Image {
            path: path.to_path_buf(),
            source,
        },
    }
}

fn cut_sprites(atlas: &image::RgbaImage, rects: &[SpriteRect]) -> Result<SpriteAtlas, AssetError> {
    let mut sprites = SpriteAtlas::with_capacity(rects.len());
    for rect in rects {
        let fits_x = rect.x.checked_add(rect.width).is_some_and(|r| r <= atlas.width());
        let fits_y = rect.y.checked_add(rect.height).is_some_and(|b| b <= atlas.height());
        if rect.width == 0 || rect.height == 0 || !fits_x || !fits_y {
            return Err(AssetError::SpriteOutOfBounds {
                id: rect.id,
                x: rect.x,
                y: rect.y,
                width: rect.width,
                height: rect.height,
            });
        }
        if sprites.contains_key(&rect.id) {
            return Err(AssetError::DuplicateSprite(rect.id));
        }

        let cut = image::imageops::crop_imm(atlas, rect.x, rect.y, rect.width, rect.height)
            .to_image();
        sprites.insert(
            rect.id,
            Arc::new(RgbaImage {
                width: cut.width(),
                height: cut.height(),
                pixels: cut.into_raw(),
            }),
        );
    }
    Ok(sprites)
}

fn merge_tactics(book: &mut TacticsBook, path: &Path, text: &str) -> Result<(), AssetError> {
    let file: TacticsFile = toml::from_str(text).map_err(|source| AssetError::Manifest {
        path: path.to_path_buf(),
        source,
    })?;
    for (name, entry) in file.formations {
        book.insert(Formation::new(name, &entry.slots)?);
    }
    Ok(())
}
