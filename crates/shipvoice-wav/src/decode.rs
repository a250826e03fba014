//! Decoding input audio into an [`AudioBuffer`].
//!
//! Recordings reach the encoder either as an existing WAV file in any layout
//! hound understands, or as a raw dump of interleaved little-endian `f32`
//! samples. Both are normalised to floats in [-1.0, 1.0].

use std::io::{Cursor, Read};
use std::path::Path;

use crate::buffer::AudioBuffer;
use crate::error::{DecodeError, DecodeResult};

/// Decodes WAV bytes into a buffer.
///
/// Integer PCM of 8, 16, 24 or 32 bits is scaled by `2^(bits - 1)`; 32-bit
/// float samples are passed through unchanged.
pub fn decode_wav(bytes: &[u8]) -> DecodeResult<AudioBuffer> {
    let reader = hound::WavReader::new(Cursor::new(bytes))?;
    decode_reader(reader)
}

/// Decodes a WAV file from disk into a buffer.
pub fn decode_wav_file(path: &Path) -> DecodeResult<AudioBuffer> {
    let reader = hound::WavReader::open(path)?;
    decode_reader(reader)
}

fn decode_reader<R: Read>(reader: hound::WavReader<R>) -> DecodeResult<AudioBuffer> {
    let spec = reader.spec();

    let samples: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Int => {
            if !matches!(spec.bits_per_sample, 8 | 16 | 24 | 32) {
                return Err(DecodeError::UnsupportedBitDepth {
                    bits: spec.bits_per_sample,
                });
            }
            let max_val = (1i64 << (spec.bits_per_sample - 1)) as f64;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|s| (s as f64 / max_val) as f32))
                .collect::<Result<Vec<f32>, _>>()?
        }
        hound::SampleFormat::Float => reader
            .into_samples::<f32>()
            .collect::<Result<Vec<f32>, _>>()?,
    };

    Ok(AudioBuffer::from_interleaved(
        spec.sample_rate,
        spec.channels as usize,
        &samples,
    )?)
}

/// Decodes raw interleaved little-endian `f32` samples into a buffer.
///
/// # Errors
/// Fails if the byte length is not a multiple of 4, the samples do not
/// divide into whole frames, or the shape is otherwise not a valid buffer.
pub fn decode_raw_f32le(
    bytes: &[u8],
    sample_rate: u32,
    channels: usize,
) -> DecodeResult<AudioBuffer> {
    if bytes.len() % 4 != 0 {
        return Err(DecodeError::RawLength { len: bytes.len() });
    }

    let samples: Vec<f32> = bytes
        .chunks_exact(4)
        .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .collect();

    Ok(AudioBuffer::from_interleaved(
        sample_rate,
        channels,
        &samples,
    )?)
}
