//! Encode command implementation
//!
//! Decodes a recording (any WAV hound can read, or a raw interleaved `f32`
//! dump) and writes it back out as a canonical 16-bit PCM WAV file.

use anyhow::Result;
use colored::Colorize;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use shipvoice_wav::{decode_raw_f32le, decode_wav, AudioBuffer, WavEncoder};

use super::json_output::{error_codes, CommandOutput, EncodeResult, JsonError};

/// Layout of a raw `f32` input stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawLayout {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Interleaved channel count.
    pub channels: usize,
}

/// Run the encode command
///
/// # Arguments
/// * `input` - Path to the recording
/// * `output` - Path of the WAV file to write
/// * `raw` - Layout of the input if it is a raw `f32` dump, `None` for WAV input
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(input: &str, output: &str, raw: Option<RawLayout>, json_output: bool) -> Result<ExitCode> {
    let outcome = encode_file(input, output, raw);

    if json_output {
        return match outcome {
            Ok(result) => {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&CommandOutput::success(result))?
                );
                Ok(ExitCode::SUCCESS)
            }
            Err(error) => {
                let output: CommandOutput<EncodeResult> = CommandOutput::failure(vec![error]);
                println!("{}", serde_json::to_string_pretty(&output)?);
                Ok(ExitCode::from(1))
            }
        };
    }

    let result = outcome.map_err(|e| anyhow::anyhow!(e.message))?;

    println!("{} {}", "Encoded:".cyan().bold(), result.output);
    println!("  {} {}", "From:".dimmed(), result.input);
    println!(
        "  {} {} ch, {} Hz, 16-bit PCM",
        "Format:".dimmed(),
        result.channels,
        result.sample_rate
    );
    println!(
        "  {} {} frames ({:.3} s)",
        "Length:".dimmed(),
        result.num_frames,
        result.duration_seconds
    );
    println!("  {} {} bytes", "Size:".dimmed(), result.file_size);
    println!("  {} {}", "PCM hash:".dimmed(), &result.pcm_hash[..16]);

    if result.num_frames == 0 {
        println!("{}", "warning: recording is empty".yellow());
    }

    Ok(ExitCode::SUCCESS)
}

/// Decodes `input`, encodes it, and writes the WAV file to `output`.
pub fn encode_file(
    input: &str,
    output: &str,
    raw: Option<RawLayout>,
) -> std::result::Result<EncodeResult, JsonError> {
    let bytes = fs::read(input).map_err(|e| {
        JsonError::new(
            error_codes::FILE_READ,
            format!("Failed to read input: {}", e),
        )
        .with_file(input)
    })?;

    let buffer = load_buffer(&bytes, raw).map_err(|e| e.with_file(input))?;

    let wav = WavEncoder::new().encode_with_hash(&buffer);

    if let Some(parent) = Path::new(output).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                JsonError::new(
                    error_codes::FILE_WRITE,
                    format!("Failed to create output directory: {}", e),
                )
                .with_file(output)
            })?;
        }
    }

    fs::write(output, &wav.wav_data).map_err(|e| {
        JsonError::new(
            error_codes::FILE_WRITE,
            format!("Failed to write output: {}", e),
        )
        .with_file(output)
    })?;

    Ok(EncodeResult {
        input: input.to_string(),
        output: output.to_string(),
        channels: wav.channels,
        sample_rate: wav.sample_rate,
        num_frames: wav.num_frames,
        duration_seconds: wav.duration_seconds(),
        file_size: wav.wav_data.len(),
        pcm_hash: wav.pcm_hash,
    })
}

fn load_buffer(bytes: &[u8], raw: Option<RawLayout>) -> std::result::Result<AudioBuffer, JsonError> {
    let decoded = match raw {
        Some(layout) => decode_raw_f32le(bytes, layout.sample_rate, layout.channels),
        None => decode_wav(bytes),
    };

    decoded.map_err(|e| {
        JsonError::new(error_codes::DECODE, format!("Failed to decode input: {}", e))
            .with_cause(e.code())
    })
}
