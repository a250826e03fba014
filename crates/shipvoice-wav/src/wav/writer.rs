//! RIFF/WAVE header and file writing.

use std::io::{self, Write};

use super::format::{WavFormat, HEADER_SIZE};

/// Largest PCM payload the 32-bit RIFF size fields can describe.
pub const MAX_DATA_SIZE: u32 = u32::MAX - 36;

/// Appends the 44-byte canonical PCM header to `out`.
///
/// `data_size` must not exceed [`MAX_DATA_SIZE`].
fn push_header(out: &mut Vec<u8>, format: &WavFormat, data_size: u32) {
    let file_size = data_size + 36; // Total file size minus 8 bytes for RIFF header

    // RIFF header
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&file_size.to_le_bytes());
    out.extend_from_slice(b"WAVE");

    // fmt chunk
    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes()); // Chunk size (16 for PCM)
    out.extend_from_slice(&1u16.to_le_bytes()); // Audio format (1 = PCM)
    out.extend_from_slice(&format.channels().to_le_bytes());
    out.extend_from_slice(&format.sample_rate().to_le_bytes());
    out.extend_from_slice(&format.byte_rate().to_le_bytes());
    out.extend_from_slice(&format.block_align().to_le_bytes());
    out.extend_from_slice(&format.bits_per_sample().to_le_bytes());

    // data chunk
    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_size.to_le_bytes());
}

fn too_large(len: usize) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidInput,
        format!(
            "PCM payload of {} bytes exceeds the WAV limit of {} bytes",
            len, MAX_DATA_SIZE
        ),
    )
}

/// Writes the 44-byte canonical PCM header for a payload of `data_size` bytes.
///
/// # Errors
/// Returns [`io::ErrorKind::InvalidInput`] if `data_size` exceeds
/// [`MAX_DATA_SIZE`], plus any error from `writer`.
pub fn write_header<W: Write>(writer: &mut W, format: &WavFormat, data_size: u32) -> io::Result<()> {
    if data_size > MAX_DATA_SIZE {
        return Err(too_large(data_size as usize));
    }

    let mut header = Vec::with_capacity(HEADER_SIZE);
    push_header(&mut header, format, data_size);
    writer.write_all(&header)
}

/// Writes a complete WAV file to a writer.
///
/// # Arguments
/// * `writer` - Output writer
/// * `format` - WAV format parameters
/// * `pcm_data` - Raw PCM samples as bytes
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    let data_size = u32::try_from(pcm_data.len())
        .ok()
        .filter(|&size| size <= MAX_DATA_SIZE)
        .ok_or_else(|| too_large(pcm_data.len()))?;

    write_header(writer, format, data_size)?;
    writer.write_all(pcm_data)
}

/// Writes a WAV file to a byte vector.
///
/// Only called with the payload of a validated [`AudioBuffer`](crate::AudioBuffer),
/// which never exceeds [`MAX_DATA_SIZE`].
pub(crate) fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> Vec<u8> {
    debug_assert!(pcm_data.len() <= MAX_DATA_SIZE as usize);

    let mut wav = Vec::with_capacity(HEADER_SIZE + pcm_data.len());
    push_header(&mut wav, format, pcm_data.len() as u32);
    wav.extend_from_slice(pcm_data);
    wav
}
