//! Background rendering module
//!
//! The controller asks a [`BackgroundRenderer`] for a fresh background
//! whenever the wallpaper or brightness changes or a screen is shown.
//! [`ImageRenderer`] is the production implementation: it decodes wallpaper
//! files from the assets directory with the `image` crate and scales every
//! colour channel by the brightness factor.

pub mod image_renderer;

pub use image_renderer::{ImageRenderer, apply_brightness};

use crate::error::Result;
use crate::settings::{Brightness, WallpaperId};
use image::RgbaImage;

/// A rendered, displayable background
#[derive(Debug, Clone, PartialEq)]
pub struct Background {
    image: RgbaImage,
}

impl Background {
    /// Wrap rendered pixels
    pub fn new(image: RgbaImage) -> Self {
        Self { image }
    }

    /// Rendered pixels
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// Rendering collaborator
pub trait BackgroundRenderer {
    /// Render `wallpaper` with `brightness` applied
    fn render_background(
        &mut self,
        wallpaper: &WallpaperId,
        brightness: Brightness,
    ) -> Result<Background>;
}
