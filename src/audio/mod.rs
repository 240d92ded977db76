//! Background music module
//!
//! The settings screen's music checkbox drives a [`MusicPlayer`]. With the
//! `audio` feature (on by default) the configured track is decoded from the
//! assets directory with `FFmpeg` and looped on the default output device
//! through `cpal`. Builds without the feature use [`SilentPlayer`], which
//! reports that playback is unavailable so the checkbox falls back to off.

pub mod buffer;
#[cfg(feature = "audio")]
pub mod decode;
#[cfg(feature = "audio")]
pub mod output;

pub use buffer::LoopBuffer;
#[cfg(feature = "audio")]
pub use output::LoopPlayer;

use crate::error::{GuessatronError, Result, StringError};
use std::path::Path;
use tracing::{info, warn};

/// Audio collaborator
pub trait MusicPlayer {
    /// Start playing `track` on repeat, replacing anything already playing
    fn play_loop(&mut self, track: &str) -> Result<()>;

    /// Stop playback; no-op when nothing is playing
    fn stop(&mut self);
}

/// Player used when no audio backend is compiled in
#[derive(Debug, Default)]
pub struct SilentPlayer;

impl MusicPlayer for SilentPlayer {
    fn play_loop(&mut self, track: &str) -> Result<()> {
        warn!(
            "Cannot play {}: built without the `audio` feature",
            track
        );
        Err(GuessatronError::AudioError(StringError::new(
            "audio playback is not available in this build",
        )))
    }

    fn stop(&mut self) {}
}

/// Best available player for this build, resolving tracks under `assets_dir`
#[cfg_attr(
    not(feature = "audio"),
    expect(unused_variables, reason = "Only the cpal player reads track files")
)]
pub fn default_player(assets_dir: &Path) -> Box<dyn MusicPlayer> {
    #[cfg(feature = "audio")]
    {
        info!("Using cpal output for background music from {}", assets_dir.display());
        Box::new(LoopPlayer::new(assets_dir))
    }

    #[cfg(not(feature = "audio"))]
    {
        info!("Background music disabled in this build");
        Box::new(SilentPlayer)
    }
}
