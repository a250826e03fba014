//! Integration tests for the encode → inspect → hash command flow.

use pretty_assertions::assert_eq;
use std::fs;
use std::io::Cursor;
use std::process::ExitCode;

use shipvoice_cli::commands::encode::{self, encode_file, RawLayout};
use shipvoice_cli::commands::hash::hash_file;
use shipvoice_cli::commands::inspect::{self, inspect_file};
use shipvoice_cli::commands::json_output::error_codes;

/// Writes a 32-bit float WAV like the browser recorder would hand over.
fn float_recording(samples: &[f32], sample_rate: u32, channels: u16) -> Vec<u8> {
    let mut buffer = Vec::new();
    {
        let spec = hound::WavSpec {
            channels,
            sample_rate,
            bits_per_sample: 32,
            sample_format: hound::SampleFormat::Float,
        };
        let mut writer = hound::WavWriter::new(Cursor::new(&mut buffer), spec).unwrap();
        for &sample in samples {
            writer.write_sample(sample).unwrap();
        }
        writer.finalize().unwrap();
    }
    buffer
}

#[test]
fn test_encode_then_inspect_float_recording() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("ship-audio-recording.float.wav");
    let output = dir.path().join("ship-audio-recording.wav");
    fs::write(&input, float_recording(&[0.5, -0.5, 0.0, 2.0], 44100, 2)).unwrap();

    let encoded = encode_file(input.to_str().unwrap(), output.to_str().unwrap(), None).unwrap();
    assert_eq!(encoded.channels, 2);
    assert_eq!(encoded.sample_rate, 44100);
    assert_eq!(encoded.num_frames, 2);
    assert_eq!(encoded.file_size, 44 + 8);

    let inspected = inspect_file(output.to_str().unwrap()).unwrap();
    assert!(inspected.canonical_pcm16);
    assert_eq!(inspected.header.bits_per_sample, 16);
    assert_eq!(inspected.header.num_frames, 2);
    assert_eq!(inspected.pcm_hash, encoded.pcm_hash);

    let hashed = hash_file(output.to_str().unwrap()).unwrap();
    assert_eq!(hashed.pcm_hash, encoded.pcm_hash);
}

#[test]
fn test_input_float_file_is_not_canonical() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("float.wav");
    fs::write(&input, float_recording(&[0.1, 0.2], 48000, 1)).unwrap();

    let inspected = inspect_file(input.to_str().unwrap()).unwrap();
    assert_ne!(inspected.header.bits_per_sample, 16);
    assert!(!inspected.canonical_pcm16);
}

#[test]
fn test_encode_empty_raw_recording() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("empty.f32");
    let output = dir.path().join("empty.wav");
    fs::write(&input, b"").unwrap();

    let encoded = encode_file(
        input.to_str().unwrap(),
        output.to_str().unwrap(),
        Some(RawLayout {
            sample_rate: 44100,
            channels: 1,
        }),
    )
    .unwrap();

    assert_eq!(encoded.num_frames, 0);
    assert_eq!(fs::read(&output).unwrap().len(), 44);
}

#[test]
fn test_run_json_reports_failure_exit_code() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.wav");

    let code = inspect::run(missing.to_str().unwrap(), true).unwrap();
    assert_eq!(code, ExitCode::from(1));

    let code = encode::run(
        missing.to_str().unwrap(),
        dir.path().join("out.wav").to_str().unwrap(),
        None,
        true,
    )
    .unwrap();
    assert_eq!(code, ExitCode::from(1));
}

#[test]
fn test_run_human_surfaces_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("garbage.wav");
    fs::write(&input, b"not audio").unwrap();

    let err = encode::run(
        input.to_str().unwrap(),
        dir.path().join("out.wav").to_str().unwrap(),
        None,
        false,
    )
    .unwrap_err();
    assert!(err.to_string().contains("Failed to decode input"));

    let err = hash_file(input.to_str().unwrap()).unwrap_err();
    assert_eq!(err.code, error_codes::INVALID_WAV);
}
