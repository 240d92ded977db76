//! Decoded track held in memory and replayed on a loop

use std::sync::Arc;

/// Interleaved `f32` samples with a play cursor that wraps at the end
#[derive(Debug, Clone)]
pub struct LoopBuffer {
    samples: Arc<Vec<f32>>,
    channels: usize,
    position: usize,
}

impl LoopBuffer {
    /// Wrap interleaved samples with `channels` samples per frame
    pub fn new(samples: Vec<f32>, channels: usize) -> Self {
        Self {
            samples: Arc::new(samples),
            channels: channels.max(1),
            position: 0,
        }
    }

    /// Samples per frame in the buffer
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Number of whole frames in the track
    pub fn frame_count(&self) -> usize {
        self.samples.len() / self.channels
    }

    /// Whether there is nothing to play
    pub fn is_empty(&self) -> bool {
        self.frame_count() == 0
    }

    /// Fill one output frame and advance, wrapping to the start at the end
    ///
    /// Output channels beyond the track's reuse its last channel, so mono
    /// tracks play on every speaker. An empty track writes silence.
    pub fn fill_frame(&mut self, frame: &mut [f32]) {
        if self.is_empty() {
            frame.fill(0.0);
            return;
        }

        let start = self.position * self.channels;
        let source = &self.samples[start..start + self.channels];
        for (index, sample) in frame.iter_mut().enumerate() {
            *sample = source[index.min(self.channels - 1)];
        }

        self.position = (self.position + 1) % self.frame_count();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stereo_track_wraps_around() {
        let mut buffer = LoopBuffer::new(vec![0.1, 0.2, 0.3, 0.4], 2);
        let mut frame = [0.0; 2];

        buffer.fill_frame(&mut frame);
        assert_eq!(frame, [0.1, 0.2]);
        buffer.fill_frame(&mut frame);
        assert_eq!(frame, [0.3, 0.4]);
        buffer.fill_frame(&mut frame);
        assert_eq!(frame, [0.1, 0.2]);
    }

    #[test]
    fn test_mono_track_fills_every_output_channel() {
        let mut buffer = LoopBuffer::new(vec![0.5, -0.5], 1);
        let mut frame = [0.0; 4];

        buffer.fill_frame(&mut frame);
        assert_eq!(frame, [0.5; 4]);
        buffer.fill_frame(&mut frame);
        assert_eq!(frame, [-0.5; 4]);
    }

    #[test]
    fn test_empty_track_is_silent() {
        let mut buffer = LoopBuffer::new(Vec::new(), 2);
        let mut frame = [1.0; 2];

        assert!(buffer.is_empty());
        buffer.fill_frame(&mut frame);
        assert_eq!(frame, [0.0, 0.0]);
    }

    #[test]
    fn test_trailing_partial_frame_ignored() {
        let buffer = LoopBuffer::new(vec![0.1, 0.2, 0.3], 2);
        assert_eq!(buffer.frame_count(), 1);
        assert_eq!(buffer.channels(), 2);
    }
}
