//! Buffer to WAV encoding.

use std::io::{self, Write};

use crate::buffer::AudioBuffer;

use super::format::WavFormat;
use super::pcm::{buffer_to_pcm16, sample_to_i16};
use super::result::WavResult;
use super::writer::{write_header, write_wav_to_vec};

/// Bytes of PCM staged on the stack between writes in [`WavEncoder::encode_to`].
const STREAM_CHUNK_SIZE: usize = 8192;

/// Encodes a buffer as a complete 16-bit PCM WAV file.
///
/// The output is exactly `44 + length * channels * 2` bytes. Zero-length
/// buffers produce a bare 44-byte header with a `data` size of 0.
pub fn encode(buffer: &AudioBuffer) -> Vec<u8> {
    let format = WavFormat::for_buffer(buffer);
    let pcm = buffer_to_pcm16(buffer);
    write_wav_to_vec(&format, &pcm)
}

/// Stateless WAV encoder.
///
/// All methods produce byte-identical output for the same buffer.
#[derive(Debug, Clone, Copy, Default)]
pub struct WavEncoder;

impl WavEncoder {
    /// Creates an encoder.
    pub fn new() -> Self {
        Self
    }

    /// Encodes `buffer` into a byte vector.
    pub fn encode(&self, buffer: &AudioBuffer) -> Vec<u8> {
        encode(buffer)
    }

    /// Streams the encoded file into `writer` without building the PCM payload in memory.
    ///
    /// After the header, PCM is written in 8 KiB chunks, so `writer` does not
    /// need to be buffered.
    pub fn encode_to<W: Write>(&self, buffer: &AudioBuffer, writer: &mut W) -> io::Result<()> {
        let format = WavFormat::for_buffer(buffer);
        // Bounded by AudioBuffer construction
        let data_size = format.data_size(buffer.length()) as u32;
        write_header(writer, &format, data_size)?;

        let mut chunk = [0u8; STREAM_CHUNK_SIZE];
        let mut filled = 0;
        for sample in buffer.interleaved() {
            chunk[filled..filled + 2].copy_from_slice(&sample_to_i16(sample).to_le_bytes());
            filled += 2;
            if filled == STREAM_CHUNK_SIZE {
                writer.write_all(&chunk)?;
                filled = 0;
            }
        }
        if filled > 0 {
            writer.write_all(&chunk[..filled])?;
        }

        Ok(())
    }

    /// Encodes `buffer` and records the PCM hash alongside the file bytes.
    pub fn encode_with_hash(&self, buffer: &AudioBuffer) -> WavResult {
        WavResult::from_buffer(buffer)
    }
}
