//! WAV file format parameters.

use crate::buffer::{check_header_limits, AudioBuffer, MAX_CHANNELS};
use crate::error::{BufferError, BufferResult};

/// Bits per sample written by the encoder.
pub const BITS_PER_SAMPLE: u16 = 16;

/// Size of the canonical PCM header in bytes.
pub const HEADER_SIZE: usize = 44;

/// WAV file format parameters.
///
/// A `WavFormat` can only be built with a channel count and sample rate whose
/// derived block align and byte rate fit their header fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    channels: u16,
    sample_rate: u32,
    bits_per_sample: u16,
}

impl WavFormat {
    /// Creates a 16-bit format with the given channel count.
    ///
    /// # Errors
    /// Returns an error for zero channels, more than [`MAX_CHANNELS`], a zero
    /// sample rate, or a byte rate that overflows the 32-bit field.
    pub fn pcm16(channels: u16, sample_rate: u32) -> BufferResult<Self> {
        if channels == 0 {
            return Err(BufferError::NoChannels);
        }
        if channels as usize > MAX_CHANNELS {
            return Err(BufferError::TooManyChannels {
                channels: channels as usize,
                max: MAX_CHANNELS,
            });
        }
        if sample_rate == 0 {
            return Err(BufferError::ZeroSampleRate);
        }
        check_header_limits(sample_rate, channels as usize, 0)?;

        Ok(Self {
            channels,
            sample_rate,
            bits_per_sample: BITS_PER_SAMPLE,
        })
    }

    /// Derives the format for encoding `buffer`.
    pub fn for_buffer(buffer: &AudioBuffer) -> Self {
        // AudioBuffer has already passed the same checks as pcm16
        Self {
            channels: buffer.number_of_channels() as u16,
            sample_rate: buffer.sample_rate(),
            bits_per_sample: BITS_PER_SAMPLE,
        }
    }

    /// Number of interleaved channels.
    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Bits per sample (always 16).
    pub fn bits_per_sample(&self) -> u16 {
        self.bits_per_sample
    }

    /// Bytes per sample (per channel).
    pub fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Block align (bytes per sample frame).
    pub fn block_align(&self) -> u16 {
        self.channels * self.bytes_per_sample()
    }

    /// Byte rate (bytes per second).
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }

    /// Size of the PCM payload for `frames` sample frames.
    pub(crate) fn data_size(&self, frames: usize) -> usize {
        frames * self.block_align() as usize
    }
}
