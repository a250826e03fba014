//! shipvoice WAV encoder
//!
//! Turns decoded voice recordings into canonical 16-bit PCM WAV files for
//! upload or storage.
//!
//! # Overview
//!
//! - An [`AudioBuffer`] holds per-channel `f32` samples and is validated on
//!   construction: every channel has the same length and the derived header
//!   fields fit their WAV widths.
//! - [`encode`] converts a buffer into a 44-byte RIFF/WAVE header followed by
//!   frame-major interleaved little-endian `i16` samples. It never fails.
//! - [`wav::inspect_wav`] reads the header back; [`wav::compute_pcm_hash`]
//!   fingerprints a file by its PCM payload.
//! - [`decode`] produces buffers from existing WAV files or raw `f32` dumps.
//!
//! # Sample conversion
//!
//! Samples are clamped to [-1.0, 1.0] and scaled asymmetrically: negative
//! values by 32768, the rest by 32767, rounding half away from zero. So
//! `-1.0 → -32768`, `1.0 → 32767` and `0.5 → 16384`.
//!
//! # Example
//!
//! ```
//! use shipvoice_wav::{encode, AudioBuffer};
//!
//! let buffer = AudioBuffer::mono(44100, vec![0.5, -0.5]).unwrap();
//! let wav = encode(&buffer);
//!
//! assert_eq!(wav.len(), 44 + 4);
//! assert_eq!(&wav[44..], &[0x00, 0x40, 0x00, 0xC0]);
//! ```

pub mod buffer;
pub mod decode;
pub mod error;
pub mod wav;

// Re-export main types at crate root
pub use buffer::{AudioBuffer, MAX_CHANNELS};
pub use decode::{decode_raw_f32le, decode_wav, decode_wav_file};
pub use error::{BufferError, BufferResult, DecodeError, DecodeResult};
pub use wav::{encode, WavEncoder, WavInfo, WavResult};
