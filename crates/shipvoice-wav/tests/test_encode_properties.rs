//! Property-based tests for the WAV encoder using proptest.
//!
//! These tests check the encoder's size and header guarantees over arbitrary
//! buffer shapes and sample values, including non-finite samples.

use proptest::prelude::*;

use shipvoice_wav::wav::{inspect_wav, pcm16_to_samples, sample_to_i16, HEADER_SIZE};
use shipvoice_wav::{encode, AudioBuffer, WavEncoder};

fn le_u32(wav: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([wav[at], wav[at + 1], wav[at + 2], wav[at + 3]])
}

/// Any f32, weighted towards the nominal range but including NaN and infinities.
fn any_sample() -> impl Strategy<Value = f32> {
    prop_oneof![
        6 => -1.0f32..=1.0f32,
        2 => -4.0f32..=4.0f32,
        1 => Just(f32::NAN),
        1 => Just(f32::INFINITY),
        1 => Just(f32::NEG_INFINITY),
        1 => any::<f32>(),
    ]
}

/// Buffers of 1..=6 channels and 0..=64 frames.
fn any_buffer() -> impl Strategy<Value = AudioBuffer> {
    (1usize..=6, 0usize..=64, prop_oneof![Just(8000u32), Just(44100), Just(48000), 1u32..=192_000])
        .prop_flat_map(|(channels, length, rate)| {
            prop::collection::vec(prop::collection::vec(any_sample(), length), channels)
                .prop_map(move |data| AudioBuffer::new(rate, data).unwrap())
        })
}

proptest! {
    /// Output length is always 44 + frames * channels * 2.
    #[test]
    fn output_length_matches_shape(buffer in any_buffer()) {
        let wav = encode(&buffer);
        prop_assert_eq!(
            wav.len(),
            HEADER_SIZE + buffer.length() * buffer.number_of_channels() * 2
        );
    }

    /// Chunk tags are fixed and the size fields agree with each other.
    #[test]
    fn header_fields_consistent(buffer in any_buffer()) {
        let wav = encode(&buffer);
        let data_size = (buffer.length() * buffer.number_of_channels() * 2) as u32;

        prop_assert_eq!(&wav[0..4], b"RIFF");
        prop_assert_eq!(&wav[8..12], b"WAVE");
        prop_assert_eq!(&wav[12..16], b"fmt ");
        prop_assert_eq!(&wav[36..40], b"data");
        prop_assert_eq!(le_u32(&wav, 4), 36 + data_size);
        prop_assert_eq!(le_u32(&wav, 40), data_size);
    }

    /// The inspector reads back exactly what the encoder wrote.
    #[test]
    fn inspect_agrees_with_buffer(buffer in any_buffer()) {
        let info = inspect_wav(&encode(&buffer)).unwrap();
        prop_assert!(info.is_canonical_pcm16());
        prop_assert_eq!(info.channels as usize, buffer.number_of_channels());
        prop_assert_eq!(info.sample_rate, buffer.sample_rate());
        prop_assert_eq!(info.num_frames, buffer.length());
    }

    /// Each PCM value is the conversion of the matching interleaved sample.
    #[test]
    fn payload_is_interleaved_conversion(buffer in any_buffer()) {
        let wav = encode(&buffer);
        let expected: Vec<i16> = buffer.interleaved().map(sample_to_i16).collect();
        prop_assert_eq!(pcm16_to_samples(&wav[HEADER_SIZE..]), expected);
    }

    /// Streaming and in-memory encoding agree byte for byte.
    #[test]
    fn streaming_matches_in_memory(buffer in any_buffer()) {
        let mut streamed = Vec::new();
        WavEncoder::new().encode_to(&buffer, &mut streamed).unwrap();
        prop_assert_eq!(streamed, encode(&buffer));
    }

    /// Conversion is monotonic over the nominal range.
    #[test]
    fn conversion_is_monotonic(a in -1.0f32..=1.0f32, b in -1.0f32..=1.0f32) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(sample_to_i16(lo) <= sample_to_i16(hi));
    }

    /// Conversion never leaves the sign of its input.
    #[test]
    fn conversion_preserves_sign(s in -1.0f32..=1.0f32) {
        let v = sample_to_i16(s);
        if s > 0.0 {
            prop_assert!(v >= 0);
        } else if s < 0.0 {
            prop_assert!(v <= 0);
        } else {
            prop_assert_eq!(v, 0);
        }
    }
}
