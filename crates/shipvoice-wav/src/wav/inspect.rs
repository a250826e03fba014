//! WAV header inspection, PCM extraction and hashing.

use serde::Serialize;
use thiserror::Error;

use super::format::{BITS_PER_SAMPLE, HEADER_SIZE};

/// Error type for WAV inspection failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{format} error{}: {message}", location(.offset))]
pub struct FormatError {
    /// The format being inspected.
    pub format: &'static str,
    /// Description of what went wrong.
    pub message: String,
    /// Byte offset where the error occurred, if applicable.
    pub offset: Option<usize>,
}

fn location(offset: &Option<usize>) -> String {
    offset
        .map(|offset| format!(" at offset {}", offset))
        .unwrap_or_default()
}

impl FormatError {
    /// Create a new format error.
    pub fn new(format: &'static str, message: impl Into<String>) -> Self {
        Self {
            format,
            message: message.into(),
            offset: None,
        }
    }

    /// Create a format error with a byte offset.
    pub fn at_offset(format: &'static str, message: impl Into<String>, offset: usize) -> Self {
        Self {
            format,
            message: message.into(),
            offset: Some(offset),
        }
    }
}

/// Information extracted from a WAV file header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WavInfo {
    /// RIFF ChunkSize as declared at offset 4.
    pub riff_size: u32,
    /// Audio format code (1 = PCM, 3 = IEEE float).
    pub audio_format: u16,
    /// Number of audio channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Byte rate as declared in the header.
    pub byte_rate: u32,
    /// Block alignment as declared in the header.
    pub block_align: u16,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Number of sample frames in the data chunk.
    pub num_frames: usize,
    /// Offset of the first PCM byte.
    pub data_offset: usize,
    /// Size of the data chunk payload in bytes.
    pub data_size: usize,
    /// Length of the inspected file in bytes.
    pub file_size: usize,
}

impl WavInfo {
    /// Duration in seconds, or 0 for a zero sample rate.
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.num_frames as f64 / self.sample_rate as f64
    }

    /// Returns true if the file has the exact layout the encoder writes:
    /// 16-bit PCM with consistent derived fields, a data chunk of whole frames
    /// directly after a 16-byte fmt chunk, a RIFF size of `36 + data_size`, and
    /// nothing after the data.
    pub fn is_canonical_pcm16(&self) -> bool {
        let block_align = self.channels as usize * 2;
        self.audio_format == 1
            && self.bits_per_sample == BITS_PER_SAMPLE
            && self.channels > 0
            && self.block_align as usize == block_align
            && self.byte_rate as u64 == self.sample_rate as u64 * block_align as u64
            && self.data_offset == HEADER_SIZE
            && self.riff_size as u64 == 36 + self.data_size as u64
            && self.data_size % block_align == 0
            && self.data_offset + self.data_size == self.file_size
    }

    /// The PCM payload of `wav_data`, the file this info was read from.
    pub fn pcm_data<'a>(&self, wav_data: &'a [u8]) -> Option<&'a [u8]> {
        wav_data.get(self.data_offset..self.data_offset + self.data_size)
    }
}

fn read_u16(data: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([data[at], data[at + 1]])
}

fn read_u32(data: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]])
}

/// Parse a WAV file header and locate its data chunk.
///
/// Walks the RIFF chunk list in order, skipping unknown chunks (word-aligned).
///
/// # Errors
/// Returns a [`FormatError`] naming the byte offset of the first problem.
pub fn inspect_wav(data: &[u8]) -> Result<WavInfo, FormatError> {
    if data.len() < HEADER_SIZE {
        return Err(FormatError::new(
            "WAV",
            format!(
                "File too short: {} bytes (minimum {} required)",
                data.len(),
                HEADER_SIZE
            ),
        ));
    }

    if &data[0..4] != b"RIFF" {
        return Err(FormatError::at_offset(
            "WAV",
            format!(
                "Invalid RIFF header: expected 'RIFF', got {:?}",
                &data[0..4]
            ),
            0,
        ));
    }

    if &data[8..12] != b"WAVE" {
        return Err(FormatError::at_offset(
            "WAV",
            format!(
                "Invalid WAVE format: expected 'WAVE', got {:?}",
                &data[8..12]
            ),
            8,
        ));
    }

    let mut offset = 12;
    let mut fmt: Option<[u8; 16]> = None;

    while offset + 8 <= data.len() {
        let chunk_id = &data[offset..offset + 4];
        let chunk_size = read_u32(data, offset + 4) as usize;
        let body = offset + 8;

        if chunk_id == b"fmt " {
            if chunk_size < 16 {
                return Err(FormatError::at_offset(
                    "WAV",
                    format!("fmt chunk too small: {} bytes", chunk_size),
                    offset,
                ));
            }
            if body + 16 > data.len() {
                return Err(FormatError::at_offset("WAV", "Truncated fmt chunk", offset));
            }
            let mut raw = [0u8; 16];
            raw.copy_from_slice(&data[body..body + 16]);
            fmt = Some(raw);
        }

        if chunk_id == b"data" {
            let Some(raw) = fmt else {
                return Err(FormatError::at_offset(
                    "WAV",
                    "data chunk found before fmt chunk",
                    offset,
                ));
            };

            if chunk_size > data.len() - body {
                return Err(FormatError::at_offset(
                    "WAV",
                    format!(
                        "Truncated data chunk: declares {} bytes, {} present",
                        chunk_size,
                        data.len() - body
                    ),
                    offset,
                ));
            }

            let block_align = read_u16(&raw, 12);
            let num_frames = if block_align > 0 {
                chunk_size / block_align as usize
            } else {
                0
            };

            return Ok(WavInfo {
                riff_size: read_u32(data, 4),
                audio_format: read_u16(&raw, 0),
                channels: read_u16(&raw, 2),
                sample_rate: read_u32(&raw, 4),
                byte_rate: read_u32(&raw, 8),
                block_align,
                bits_per_sample: read_u16(&raw, 14),
                num_frames,
                data_offset: body,
                data_size: chunk_size,
                file_size: data.len(),
            });
        }

        // Chunks are word-aligned
        let padded_size = chunk_size.saturating_add(chunk_size & 1);
        offset = match body.checked_add(padded_size) {
            Some(next) => next,
            None => break,
        };
    }

    if fmt.is_none() {
        return Err(FormatError::new("WAV", "Missing fmt chunk"));
    }

    Err(FormatError::new("WAV", "Missing data chunk"))
}

/// Extracts PCM data from a WAV file buffer.
///
/// Used for comparing WAV files by their audio content only.
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    inspect_wav(wav_data).ok()?.pcm_data(wav_data)
}

/// BLAKE3 hex digest of a PCM payload.
pub fn hash_pcm(pcm: &[u8]) -> String {
    blake3::hash(pcm).to_hex().to_string()
}

/// Computes the BLAKE3 hash of a WAV file's PCM payload.
///
/// Returns `None` if the file cannot be parsed.
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    extract_pcm_data(wav_data).map(hash_pcm)
}
