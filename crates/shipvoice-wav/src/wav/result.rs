//! WAV encoding result with content hash.

use crate::buffer::AudioBuffer;

use super::format::WavFormat;
use super::inspect::hash_pcm;
use super::pcm::buffer_to_pcm16;
use super::writer::write_wav_to_vec;

/// Result of WAV file encoding.
#[derive(Debug, Clone)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of PCM data only.
    pub pcm_hash: String,
    /// Number of interleaved channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of sample frames per channel.
    pub num_frames: usize,
}

impl WavResult {
    /// Encodes a buffer and hashes its PCM payload.
    pub fn from_buffer(buffer: &AudioBuffer) -> Self {
        let format = WavFormat::for_buffer(buffer);
        let pcm = buffer_to_pcm16(buffer);
        let pcm_hash = hash_pcm(&pcm);
        let wav_data = write_wav_to_vec(&format, &pcm);

        Self {
            wav_data,
            pcm_hash,
            channels: format.channels(),
            sample_rate: format.sample_rate(),
            num_frames: buffer.length(),
        }
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_frames as f64 / self.sample_rate as f64
    }
}
