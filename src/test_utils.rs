//! Shared test utilities for Guessatron unit tests.
//!
//! This module provides common test infrastructure used across multiple test modules.
//! It is only compiled during testing (`#[cfg(test)]`).

use crate::audio::MusicPlayer;
use crate::config::manager::HOME_ENV;
use crate::dialog::Dialogs;
use crate::error::{GuessatronError, Result, StringError};
use crate::render::{Background, BackgroundRenderer};
use crate::settings::{Brightness, WallpaperId};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Mutex;
use tempfile::TempDir;

/// Global mutex to serialize tests that modify the `GUESSATRON_HOME` environment variable.
static HOME_LOCK: Mutex<()> = Mutex::new(());

/// Helper function to create a temporary test directory using tempfile.
/// Returns a `TempDir` that automatically cleans up when dropped.
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// RAII guard that points `GUESSATRON_HOME` at a temp directory for a test scope
/// and restores the original value when dropped.
///
/// The `HOME_LOCK` mutex is held for the guard's lifetime so tests touching the
/// variable run one at a time.
pub struct HomeGuard {
    original: Option<String>,
    _lock: std::sync::MutexGuard<'static, ()>,
}

#[expect(
    unsafe_code,
    reason = "Test-only code that modifies environment variables while holding HOME_LOCK"
)]
impl HomeGuard {
    /// Create a new guard that sets `GUESSATRON_HOME` to the given temp directory path.
    pub fn new(temp_dir: &TempDir) -> Self {
        let lock = HOME_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        let original = std::env::var(HOME_ENV).ok();
        // SAFETY: HOME_LOCK serializes every writer of this variable.
        unsafe {
            std::env::set_var(HOME_ENV, temp_dir.path());
        }
        Self {
            original,
            _lock: lock,
        }
    }
}

#[expect(
    unsafe_code,
    reason = "Test-only code that restores environment variables while holding HOME_LOCK"
)]
impl Drop for HomeGuard {
    fn drop(&mut self) {
        // SAFETY: the lock is still held until this struct's fields drop.
        if let Some(ref original) = self.original {
            unsafe {
                std::env::set_var(HOME_ENV, original);
            }
        } else {
            unsafe {
                std::env::remove_var(HOME_ENV);
            }
        }
    }
}

/// Everything the fake collaborators observed, in call order
#[derive(Debug, Default)]
pub struct Recorded {
    pub renders: Vec<(String, f32)>,
    pub music: Vec<Option<String>>,
    pub dialogs: Vec<(String, String)>,
}

/// Shared handle to the recording
pub type Recording = Rc<RefCell<Recorded>>;

/// Renderer that records requests and returns a 1x1 image
pub struct FakeRenderer {
    pub recording: Recording,
    pub fail: bool,
}

impl BackgroundRenderer for FakeRenderer {
    fn render_background(
        &mut self,
        wallpaper: &WallpaperId,
        brightness: Brightness,
    ) -> Result<Background> {
        self.recording
            .borrow_mut()
            .renders
            .push((wallpaper.as_str().to_string(), brightness.value()));
        if self.fail {
            return Err(GuessatronError::RenderError(StringError::new("missing file")));
        }
        Ok(Background::new(image::RgbaImage::new(1, 1)))
    }
}

/// Music player that records play/stop calls; `None` marks a stop
pub struct FakePlayer {
    pub recording: Recording,
    pub fail: bool,
}

impl MusicPlayer for FakePlayer {
    fn play_loop(&mut self, track: &str) -> Result<()> {
        if self.fail {
            return Err(GuessatronError::AudioError(StringError::new("no device")));
        }
        self.recording.borrow_mut().music.push(Some(track.to_string()));
        Ok(())
    }

    fn stop(&mut self) {
        self.recording.borrow_mut().music.push(None);
    }
}

/// Dialog collaborator that records every message
pub struct FakeDialogs {
    pub recording: Recording,
}

impl Dialogs for FakeDialogs {
    fn show_info(&mut self, title: &str, message: &str) {
        self.recording
            .borrow_mut()
            .dialogs
            .push((title.to_string(), message.to_string()));
    }
}

/// Build a fresh recording plus the three fakes sharing it
pub fn fakes() -> (Recording, FakeRenderer, FakePlayer, FakeDialogs) {
    let recording: Recording = Rc::default();
    (
        Rc::clone(&recording),
        FakeRenderer {
            recording: Rc::clone(&recording),
            fail: false,
        },
        FakePlayer {
            recording: Rc::clone(&recording),
            fail: false,
        },
        FakeDialogs {
            recording: Rc::clone(&recording),
        },
    )
}
