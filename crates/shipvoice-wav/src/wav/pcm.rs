//! Float to 16-bit PCM conversion.

use crate::buffer::AudioBuffer;

/// Scale applied to negative samples.
const NEGATIVE_FULL_SCALE: f64 = 32768.0;

/// Scale applied to zero and positive samples.
const POSITIVE_FULL_SCALE: f64 = 32767.0;

/// Converts one float sample to a 16-bit PCM value.
///
/// The sample is clamped to [-1.0, 1.0], then scaled asymmetrically:
/// negative values by 32768 and the rest by 32767, rounding half away from
/// zero. `-1.0` maps to `i16::MIN` and `1.0` to `i16::MAX`.
///
/// Infinities clamp to the matching boundary. NaN clamps to the boundary on
/// its sign bit.
pub fn sample_to_i16(sample: f32) -> i16 {
    let s = if sample.is_nan() {
        if sample.is_sign_negative() {
            -1.0
        } else {
            1.0
        }
    } else {
        (sample as f64).clamp(-1.0, 1.0)
    };

    let scaled = if s < 0.0 {
        s * NEGATIVE_FULL_SCALE
    } else {
        s * POSITIVE_FULL_SCALE
    };

    scaled.round() as i16
}

/// Converts float samples to little-endian 16-bit PCM bytes.
pub fn samples_to_pcm16(samples: &[f32]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);
    for &sample in samples {
        pcm.extend_from_slice(&sample_to_i16(sample).to_le_bytes());
    }
    pcm
}

/// Converts a buffer to interleaved little-endian 16-bit PCM bytes.
///
/// Frame-major order: for each frame, channel 0 first, then channel 1, and so on.
pub fn buffer_to_pcm16(buffer: &AudioBuffer) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(buffer.length() * buffer.number_of_channels() * 2);
    for sample in buffer.interleaved() {
        pcm.extend_from_slice(&sample_to_i16(sample).to_le_bytes());
    }
    pcm
}

/// Decodes little-endian 16-bit PCM bytes back into integer samples.
///
/// A trailing odd byte is ignored.
pub fn pcm16_to_samples(pcm: &[u8]) -> Vec<i16> {
    pcm.chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect()
}
