//! Decoded multi-channel audio, validated for WAV encoding.

use crate::error::{BufferError, BufferResult};

/// Bytes per encoded sample (16-bit PCM).
pub(crate) const BYTES_PER_SAMPLE: u64 = 2;

/// Largest channel count whose block align still fits the 16-bit field.
pub const MAX_CHANNELS: usize = (u16::MAX / 2) as usize;

/// Size of the canonical header minus the 8-byte RIFF preamble.
pub(crate) const RIFF_OVERHEAD: u64 = 36;

/// A decoded, non-interleaved audio buffer.
///
/// Every channel holds exactly [`length`](Self::length) samples. Construction
/// also guarantees that the header fields derived from the buffer fit in their
/// WAV widths, so any `AudioBuffer` can be encoded without error.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    sample_rate: u32,
    channels: Vec<Vec<f32>>,
}

impl AudioBuffer {
    /// Creates a buffer from per-channel sample vectors.
    ///
    /// # Errors
    /// Returns an error if the sample rate is zero, there are no channels or
    /// more than [`MAX_CHANNELS`], the channels differ in length, or the encoded
    /// file would not fit the 32-bit RIFF size fields.
    pub fn new(sample_rate: u32, channels: Vec<Vec<f32>>) -> BufferResult<Self> {
        if sample_rate == 0 {
            return Err(BufferError::ZeroSampleRate);
        }
        if channels.is_empty() {
            return Err(BufferError::NoChannels);
        }
        if channels.len() > MAX_CHANNELS {
            return Err(BufferError::TooManyChannels {
                channels: channels.len(),
                max: MAX_CHANNELS,
            });
        }

        let expected = channels[0].len();
        if let Some((channel, data)) = channels
            .iter()
            .enumerate()
            .find(|(_, data)| data.len() != expected)
        {
            return Err(BufferError::ChannelLengthMismatch {
                channel,
                expected,
                found: data.len(),
            });
        }

        check_header_limits(sample_rate, channels.len(), expected)?;

        Ok(Self {
            sample_rate,
            channels,
        })
    }

    /// Creates a single-channel buffer.
    pub fn mono(sample_rate: u32, samples: Vec<f32>) -> BufferResult<Self> {
        Self::new(sample_rate, vec![samples])
    }

    /// Creates a buffer of `length` zero samples on every channel.
    pub fn silence(sample_rate: u32, channels: usize, length: usize) -> BufferResult<Self> {
        Self::new(sample_rate, vec![vec![0.0; length]; channels])
    }

    /// Splits frame-major interleaved samples into channels.
    ///
    /// # Errors
    /// Returns [`BufferError::PartialFrame`] if `samples.len()` is not a
    /// multiple of `channels`, plus every error [`AudioBuffer::new`] can return.
    pub fn from_interleaved(
        sample_rate: u32,
        channels: usize,
        samples: &[f32],
    ) -> BufferResult<Self> {
        if channels == 0 {
            return Err(BufferError::NoChannels);
        }
        if samples.len() % channels != 0 {
            return Err(BufferError::PartialFrame {
                samples: samples.len(),
                channels,
            });
        }

        let length = samples.len() / channels;
        let mut data = vec![Vec::with_capacity(length); channels];
        for frame in samples.chunks_exact(channels) {
            for (channel, &sample) in data.iter_mut().zip(frame) {
                channel.push(sample);
            }
        }

        Self::new(sample_rate, data)
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of channels (always at least 1).
    pub fn number_of_channels(&self) -> usize {
        self.channels.len()
    }

    /// Number of sample frames per channel.
    pub fn length(&self) -> usize {
        self.channels[0].len()
    }

    /// Returns true if the buffer holds no frames.
    pub fn is_empty(&self) -> bool {
        self.length() == 0
    }

    /// Samples of one channel, or `None` if `channel` is out of range.
    pub fn channel_data(&self, channel: usize) -> Option<&[f32]> {
        self.channels.get(channel).map(Vec::as_slice)
    }

    /// Iterates over all samples in frame-major interleaved order.
    pub fn interleaved(&self) -> impl Iterator<Item = f32> + '_ {
        (0..self.length()).flat_map(move |i| self.channels.iter().map(move |ch| ch[i]))
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.length() as f64 / self.sample_rate as f64
    }

    /// Consumes the buffer, returning the per-channel sample vectors.
    pub fn into_channels(self) -> Vec<Vec<f32>> {
        self.channels
    }
}

pub(crate) fn check_header_limits(sample_rate: u32, channels: usize, length: usize) -> BufferResult<()> {
    let max = u32::MAX as u64;
    let block_align = channels as u64 * BYTES_PER_SAMPLE;

    let byte_rate = sample_rate as u64 * block_align;
    if byte_rate > max {
        return Err(BufferError::TooLarge {
            field: "byte rate",
            value: byte_rate,
            max,
        });
    }

    let data_size = (length as u64).saturating_mul(block_align);
    if data_size > max - RIFF_OVERHEAD {
        return Err(BufferError::TooLarge {
            field: "data size",
            value: data_size,
            max: max - RIFF_OVERHEAD,
        });
    }

    Ok(())
}
