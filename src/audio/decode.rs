//! Track decoding with `FFmpeg`
//!
//! Decodes a whole audio file and resamples it to packed `f32` at the output
//! device's rate, mono or stereo.

use crate::error::{GuessatronError, Result, StringError};
use std::path::Path;
use std::sync::Once;
use tracing::{debug, info, warn};

static FFMPEG_INIT: Once = Once::new();

fn init_ffmpeg() -> Result<()> {
    let mut init_result = Ok(());
    FFMPEG_INIT.call_once(|| {
        if let Err(e) = ffmpeg_next::init() {
            init_result = Err(GuessatronError::AudioError(Box::new(e)));
        }
    });
    init_result
}

/// Decode `path` into interleaved `f32` samples at `sample_rate`
///
/// The result has one channel when `channels` is 1 and two otherwise.
pub fn decode_track(path: &Path, sample_rate: u32, channels: u16) -> Result<Vec<f32>> {
    init_ffmpeg()?;

    let mut ictx =
        ffmpeg_next::format::input(path).map_err(|e| GuessatronError::AudioError(Box::new(e)))?;

    let input = ictx
        .streams()
        .best(ffmpeg_next::media::Type::Audio)
        .ok_or_else(|| {
            GuessatronError::AudioError(StringError::new(format!(
                "No audio stream in {}",
                path.display()
            )))
        })?;
    let stream_index = input.index();

    let mut decoder = ffmpeg_next::codec::context::Context::from_parameters(input.parameters())
        .and_then(|context| context.decoder().audio())
        .map_err(|e| GuessatronError::AudioError(Box::new(e)))?;

    let (layout, output_channels) = match channels {
        1 => (ffmpeg_next::ChannelLayout::MONO, 1),
        _ => (ffmpeg_next::ChannelLayout::STEREO, 2),
    };

    let mut resampler = ffmpeg_next::software::resampling::Context::get(
        decoder.format(),
        decoder.channel_layout(),
        decoder.rate(),
        ffmpeg_next::format::Sample::F32(ffmpeg_next::format::sample::Type::Packed),
        layout,
        sample_rate,
    )
    .map_err(|e| GuessatronError::AudioError(Box::new(e)))?;

    debug!(
        "Decoding {} ({} Hz -> {} Hz, {} channel(s))",
        path.display(),
        decoder.rate(),
        sample_rate,
        output_channels
    );

    let mut samples = Vec::new();
    for (stream, packet) in ictx.packets() {
        if stream.index() != stream_index {
            continue;
        }
        if let Err(e) = decoder.send_packet(&packet) {
            warn!("Skipping damaged audio packet: {}", e);
            continue;
        }
        drain_frames(&mut decoder, &mut resampler, output_channels, &mut samples);
    }

    if decoder.send_eof().is_ok() {
        drain_frames(&mut decoder, &mut resampler, output_channels, &mut samples);
    }

    info!(
        "Decoded {} ({} samples)",
        path.display(),
        samples.len()
    );
    Ok(samples)
}

fn drain_frames(
    decoder: &mut ffmpeg_next::decoder::Audio,
    resampler: &mut ffmpeg_next::software::resampling::Context,
    channels: usize,
    samples: &mut Vec<f32>,
) {
    let mut decoded = ffmpeg_next::frame::Audio::empty();
    while decoder.receive_frame(&mut decoded).is_ok() {
        let mut resampled = ffmpeg_next::frame::Audio::empty();
        if let Err(e) = resampler.run(&decoded, &mut resampled) {
            warn!("Resampling failed: {}", e);
            continue;
        }
        extract_samples(&resampled, channels, samples);
    }
}

/// Append the packed `f32` samples of `frame` to `samples`
fn extract_samples(frame: &ffmpeg_next::frame::Audio, channels: usize, samples: &mut Vec<f32>) {
    let data = frame.data(0);
    let count = frame.samples() * channels;
    samples.extend(
        data.chunks_exact(4)
            .take(count)
            .map(|bytes| f32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])),
    );
}
