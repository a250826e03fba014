//! Deterministic WAV encoder.
//!
//! This module writes canonical 16-bit PCM WAV files: a fixed 44-byte header
//! followed by interleaved little-endian samples, with no timestamps or other
//! variable metadata. The same buffer always encodes to the same bytes, so the
//! hash of the PCM data identifies a recording by content.

mod encoder;
mod format;
mod inspect;
mod pcm;
mod result;
mod writer;


// Re-export public API
pub use encoder::{encode, WavEncoder};
pub use format::{WavFormat, BITS_PER_SAMPLE, HEADER_SIZE};
pub use inspect::{compute_pcm_hash, extract_pcm_data, hash_pcm, inspect_wav, FormatError, WavInfo};
pub use pcm::{buffer_to_pcm16, pcm16_to_samples, sample_to_i16, samples_to_pcm16};
pub use result::WavResult;
pub use writer::{write_header, write_wav, MAX_DATA_SIZE};
