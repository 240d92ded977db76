//! Settings data models

use std::fmt;

/// Opaque background-image identifier resolved by the rendering collaborator
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WallpaperId(String);

impl WallpaperId {
    /// Wrap an identifier such as `bg1.jpg`
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Identifier text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WallpaperId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Multiplicative scalar applied to background pixel values, always in `[0.5, 1.5]`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Brightness(f32);

impl Brightness {
    /// Lowest factor
    pub const MIN: f32 = 0.5;
    /// Highest factor
    pub const MAX: f32 = 1.5;
    /// Slider resolution
    pub const STEP: f32 = 0.1;

    /// Create a brightness factor, clamping into `[MIN, MAX]`
    ///
    /// NaN maps to the neutral factor 1.0.
    pub fn new(factor: f32) -> Self {
        if factor.is_nan() {
            return Self::default();
        }
        Self(factor.clamp(Self::MIN, Self::MAX))
    }

    /// Create a brightness factor from a slider position, snapping to `STEP`
    pub fn from_slider(position: f32) -> Self {
        let snapped = (position / Self::STEP).round() * Self::STEP;
        Self::new(snapped)
    }

    /// Factor value
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for Brightness {
    fn default() -> Self {
        Self(1.0)
    }
}

impl From<f32> for Brightness {
    fn from(factor: f32) -> Self {
        Self::new(factor)
    }
}

/// Global settings owned by the application controller
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Current wallpaper
    pub wallpaper_id: WallpaperId,
    /// Current brightness factor
    pub brightness: Brightness,
    /// Whether background music is playing
    pub music_on: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_brightness_clamps() {
        assert!((Brightness::new(0.1).value() - 0.5).abs() < f32::EPSILON);
        assert!((Brightness::new(9.0).value() - 1.5).abs() < f32::EPSILON);
        assert!((Brightness::new(1.2).value() - 1.2).abs() < f32::EPSILON);
    }

    #[test]
    fn test_brightness_nan_is_neutral() {
        assert_eq!(Brightness::new(f32::NAN), Brightness::default());
    }

    #[test]
    fn test_brightness_from_slider_snaps() {
        assert!((Brightness::from_slider(1.26).value() - 1.3).abs() < 1e-6);
        assert!((Brightness::from_slider(0.44).value() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_wallpaper_display() {
        let id = WallpaperId::new("bg3.jpg");
        assert_eq!(id.to_string(), "bg3.jpg");
        assert_eq!(id.as_str(), "bg3.jpg");
    }

    proptest! {
        #[test]
        fn brightness_always_in_range(factor in proptest::num::f32::ANY) {
            let value = Brightness::new(factor).value();
            prop_assert!((Brightness::MIN..=Brightness::MAX).contains(&value));
        }

        #[test]
        fn slider_brightness_always_in_range(position in -10.0f32..10.0) {
            let value = Brightness::from_slider(position).value();
            prop_assert!((Brightness::MIN..=Brightness::MAX).contains(&value));
        }
    }
}
