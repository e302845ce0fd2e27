// Shared helpers for harness integration tests.
use pitch_harness::HarnessConfig;
use std::path::{Path, PathBuf};
use std::time::Duration;

// Fresh directory under the system temp dir, unique per call.
pub fn temp_dir(label: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("pitch-harness-{label}-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

// Fast, bounded run with no stdin reader and no 2D view.
pub fn headless_config(assets_dir: &Path, max_ticks: u64) -> HarnessConfig {
    HarnessConfig {
        tick_interval: Duration::from_millis(1),
        max_ticks: Some(max_ticks),
        assets_dir: assets_dir.to_path_buf(),
        headless: true,
        operator_stdin: false,
        ..HarnessConfig::default()
    }
}

// Pitch image, sprite atlas and manifest for pitch index 6.
pub fn write_assets(dir: &Path) {
    image::RgbaImage::from_pixel(105, 68, image::Rgba([30, 120, 30, 255]))
        .save(dir.join("pitch6.png"))
        .expect("write pitch");
    image::RgbaImage::from_fn(32, 16, |x, _| image::Rgba([x as u8 * 8, 0, 0, 255]))
        .save(dir.join("sprites.png"))
        .expect("write atlas");
    std::fs::write(
        dir.join("sprites.toml"),
        "[[sprite]]\nid = 0\nx = 0\ny = 0\nwidth = 16\nheight = 16\n\n\
         [[sprite]]\nid = 1\nx = 16\ny = 0\nwidth = 16\nheight = 16\n",
    )
    .expect("write manifest");
}
