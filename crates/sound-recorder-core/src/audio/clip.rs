/// Sampling rate for all captured recordings, in Hz.
pub const SAMPLE_RATE: u32 = 44_100;

/// Channel count for all captured recordings (mono).
pub const CHANNELS: u16 = 1;

/// Finalized audio payload produced when a capture session stops.
///
/// Samples are interleaved 16-bit signed PCM. A clip with no samples is a
/// valid, silent, zero-duration artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioClip {
    /// Raw audio samples (i16 PCM, interleaved).
    pub samples: Vec<i16>,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of channels.
    pub channels: u16,
}

impl AudioClip {
    /// Concatenate delivered sample blocks into one contiguous clip,
    /// preserving arrival order.
    pub fn from_blocks(blocks: Vec<Vec<i16>>, sample_rate: u32, channels: u16) -> Self {
        let total: usize = blocks.iter().map(Vec::len).sum();
        let mut samples = Vec::with_capacity(total);
        for block in blocks {
            samples.extend(block);
        }

        Self {
            samples,
            sample_rate,
            channels,
        }
    }

    /// Clip duration derived from sample count, rate and channel count.
    pub fn duration_seconds(&self) -> f64 {
        self.samples.len() as f64 / (self.sample_rate as f64 * self.channels as f64)
    }

    /// True when no samples were delivered between start and stop.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
