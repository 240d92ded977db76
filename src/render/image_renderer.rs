//! Wallpaper rendering with the `image` crate

use crate::error::{GuessatronError, Result};
use crate::render::{Background, BackgroundRenderer};
use crate::settings::{Brightness, WallpaperId};
use image::RgbaImage;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Scale the RGB channels of `source` by `brightness`, saturating at 255
///
/// Alpha is left untouched.
pub fn apply_brightness(source: &RgbaImage, brightness: Brightness) -> RgbaImage {
    let factor = brightness.value();
    let mut output = source.clone();
    for pixel in output.pixels_mut() {
        for channel in &mut pixel.0[..3] {
            // Clamped to 0..=255 before the cast
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let scaled = (f32::from(*channel) * factor).clamp(0.0, 255.0) as u8;
            *channel = scaled;
        }
    }
    output
}

/// Renders wallpapers stored as image files under an assets directory
///
/// Decoded originals are cached per wallpaper so brightness changes only
/// re-run the pixel scaling.
pub struct ImageRenderer {
    assets_dir: PathBuf,
    cache: HashMap<WallpaperId, RgbaImage>,
}

impl ImageRenderer {
    /// Create a renderer resolving wallpaper identifiers under `assets_dir`
    pub fn new(assets_dir: impl Into<PathBuf>) -> Self {
        Self {
            assets_dir: assets_dir.into(),
            cache: HashMap::new(),
        }
    }

    /// Directory wallpaper identifiers resolve in
    pub fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }

    fn load(&mut self, wallpaper: &WallpaperId) -> Result<&RgbaImage> {
        if !self.cache.contains_key(wallpaper) {
            let path = self.assets_dir.join(wallpaper.as_str());
            if !path.is_file() {
                return Err(GuessatronError::UnknownWallpaper(
                    wallpaper.as_str().to_string(),
                ));
            }
            let decoded = image::open(&path)?.to_rgba8();
            info!(
                "Loaded wallpaper {} ({}x{})",
                path.display(),
                decoded.width(),
                decoded.height()
            );
            self.cache.insert(wallpaper.clone(), decoded);
        }
        self.cache.get(wallpaper).ok_or_else(|| {
            GuessatronError::UnknownWallpaper(wallpaper.as_str().to_string())
        })
    }
}

impl BackgroundRenderer for ImageRenderer {
    fn render_background(
        &mut self,
        wallpaper: &WallpaperId,
        brightness: Brightness,
    ) -> Result<Background> {
        debug!(
            "Rendering wallpaper {} at brightness {:.1}",
            wallpaper,
            brightness.value()
        );
        let original = self.load(wallpaper)?;
        Ok(Background::new(apply_brightness(original, brightness)))
    }
}
