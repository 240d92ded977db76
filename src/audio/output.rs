//! Audio output using cpal
//!
//! Plays a track from the assets directory on the system's default output
//! device, looping until stopped. Dropping the stream stops playback.

use crate::audio::MusicPlayer;
use crate::audio::buffer::LoopBuffer;
use crate::audio::decode::decode_track;
use crate::error::{GuessatronError, Result, StringError};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Looping music player on the default output device
pub struct LoopPlayer {
    assets_dir: PathBuf,
    stream: Option<cpal::Stream>,
}

impl LoopPlayer {
    /// Create a player resolving track names under `assets_dir`
    ///
    /// The device is opened on first playback.
    pub fn new(assets_dir: impl Into<PathBuf>) -> Self {
        Self {
            assets_dir: assets_dir.into(),
            stream: None,
        }
    }

    /// Directory track names resolve in
    pub fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }

    /// Whether a stream is currently open
    pub fn is_playing(&self) -> bool {
        self.stream.is_some()
    }

    fn build_stream<T: cpal::SizedSample + cpal::FromSample<f32>>(
        device: &cpal::Device,
        config: &cpal::StreamConfig,
        mut track: LoopBuffer,
    ) -> Result<cpal::Stream> {
        let channels = usize::from(config.channels.max(1));
        let mut scratch = vec![0.0_f32; channels];
        device
            .build_output_stream(
                config,
                move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                    for frame in data.chunks_mut(channels) {
                        track.fill_frame(&mut scratch);
                        for (sample, value) in frame.iter_mut().zip(&scratch) {
                            *sample = T::from_sample(*value);
                        }
                    }
                },
                |err| {
                    error!("Audio output error: {err}");
                },
                None,
            )
            .map_err(|e| GuessatronError::AudioError(Box::new(e)))
    }
}

impl MusicPlayer for LoopPlayer {
    fn play_loop(&mut self, track: &str) -> Result<()> {
        let path = self.assets_dir.join(track);
        if !path.is_file() {
            return Err(GuessatronError::AudioError(StringError::new(format!(
                "Track not found: {}",
                path.display()
            ))));
        }
        self.stop();

        let host = cpal::default_host();
        let device = host.default_output_device().ok_or_else(|| {
            GuessatronError::AudioError(StringError::new("No audio output device found"))
        })?;
        let supported_config = device
            .default_output_config()
            .map_err(|e| GuessatronError::AudioError(Box::new(e)))?;

        let sample_format = supported_config.sample_format();
        let config: cpal::StreamConfig = supported_config.into();

        let samples = decode_track(&path, config.sample_rate.0, config.channels)?;
        let track_channels = if config.channels == 1 { 1 } else { 2 };
        let buffer = LoopBuffer::new(samples, track_channels);
        if buffer.is_empty() {
            return Err(GuessatronError::AudioError(StringError::new(format!(
                "No audio decoded from {}",
                path.display()
            ))));
        }

        let stream = match sample_format {
            cpal::SampleFormat::F32 => Self::build_stream::<f32>(&device, &config, buffer)?,
            cpal::SampleFormat::I16 => Self::build_stream::<i16>(&device, &config, buffer)?,
            cpal::SampleFormat::U16 => Self::build_stream::<u16>(&device, &config, buffer)?,
            other => {
                return Err(GuessatronError::AudioError(StringError::new(format!(
                    "Unsupported audio sample format: {other:?}"
                ))));
            }
        };

        stream
            .play()
            .map_err(|e| GuessatronError::AudioError(Box::new(e)))?;
        info!("Playing {} on loop", path.display());
        self.stream = Some(stream);
        Ok(())
    }

    fn stop(&mut self) {
        if self.stream.take().is_some() {
            info!("Background music stopped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_dir;

    #[test]
    fn test_missing_track_rejected_before_opening_device() {
        let temp_dir = create_test_dir();
        let mut player = LoopPlayer::new(temp_dir.path());

        let error = player.play_loop("feelgood.mp3").unwrap_err();
        assert!(error.to_string().contains("Track not found"));
        assert!(error.to_string().contains("feelgood.mp3"));
        assert!(!player.is_playing());
    }

    #[test]
    fn test_stop_without_playback_is_noop() {
        let temp_dir = create_test_dir();
        let mut player = LoopPlayer::new(temp_dir.path());
        player.stop();
        assert!(!player.is_playing());
        assert_eq!(player.assets_dir(), temp_dir.path());
    }
}
