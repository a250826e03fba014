//! Error types for buffer construction and decoding.
//!
//! Encoding itself never fails: every invariant the WAV header depends on is
//! checked when the [`AudioBuffer`](crate::AudioBuffer) is built.

use thiserror::Error;

/// Result type for buffer construction.
pub type BufferResult<T> = Result<T, BufferError>;

/// Result type for decode operations.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Errors that can occur while building an [`AudioBuffer`](crate::AudioBuffer).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    /// Sample rate of zero.
    #[error("invalid sample rate: 0 Hz")]
    ZeroSampleRate,

    /// No channels were supplied.
    #[error("audio buffer must have at least one channel")]
    NoChannels,

    /// More channels than the 16-bit NumChannels field can carry.
    #[error("too many channels: {channels} (maximum {max})")]
    TooManyChannels {
        /// Number of channels supplied.
        channels: usize,
        /// Largest representable channel count.
        max: usize,
    },

    /// A channel does not hold the same number of frames as channel 0.
    #[error("channel {channel} has {found} samples, expected {expected}")]
    ChannelLengthMismatch {
        /// Index of the offending channel.
        channel: usize,
        /// Length of channel 0.
        expected: usize,
        /// Length of the offending channel.
        found: usize,
    },

    /// Interleaved input ends partway through a frame.
    #[error("{samples} interleaved samples do not divide into {channels}-channel frames")]
    PartialFrame {
        /// Total sample count.
        samples: usize,
        /// Channel count.
        channels: usize,
    },

    /// The PCM payload or byte rate would overflow the 32-bit WAV size fields.
    #[error("audio too large for a WAV file: {field} would be {value} (maximum {max})")]
    TooLarge {
        /// Header field that would overflow.
        field: &'static str,
        /// Value it would need to hold.
        value: u64,
        /// Largest value the field can hold.
        max: u64,
    },
}

impl BufferError {
    /// Stable error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            BufferError::ZeroSampleRate => "BUF_001",
            BufferError::NoChannels => "BUF_002",
            BufferError::TooManyChannels { .. } => "BUF_003",
            BufferError::ChannelLengthMismatch { .. } => "BUF_004",
            BufferError::PartialFrame { .. } => "BUF_005",
            BufferError::TooLarge { .. } => "BUF_006",
        }
    }
}

/// Errors that can occur while decoding input audio into a buffer.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The WAV reader rejected the input.
    #[error("failed to read WAV: {0}")]
    Wav(#[from] hound::Error),

    /// Integer PCM with a bit depth the decoder does not handle.
    #[error("unsupported bit depth: {bits} bits (supported: 8, 16, 24, 32)")]
    UnsupportedBitDepth {
        /// Bits per sample declared by the file.
        bits: u16,
    },

    /// Raw float input whose length is not a whole number of `f32` values.
    #[error("raw f32 input is {len} bytes, not a multiple of 4")]
    RawLength {
        /// Byte length of the input.
        len: usize,
    },

    /// The decoded samples do not form a valid buffer.
    #[error("invalid audio buffer: {0}")]
    Buffer(#[from] BufferError),
}

impl DecodeError {
    /// Stable error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            DecodeError::Wav(_) => "DEC_001",
            DecodeError::UnsupportedBitDepth { .. } => "DEC_002",
            DecodeError::RawLength { .. } => "DEC_003",
            DecodeError::Buffer(_) => "DEC_004",
        }
    }
}
