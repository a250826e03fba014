//! Inspect command implementation
//!
//! Reads a WAV file's header, reports its fields, and flags whether it has the
//! canonical layout the encoder produces.

use anyhow::Result;
use colored::Colorize;
use std::fs;
use std::process::ExitCode;

use shipvoice_wav::wav::{hash_pcm, inspect_wav};

use super::json_output::{error_codes, CommandOutput, InspectResult, JsonError};

/// Run the inspect command
///
/// # Arguments
/// * `input` - Path to the WAV file
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(input: &str, json_output: bool) -> Result<ExitCode> {
    let outcome = inspect_file(input);

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
                let output: CommandOutput<InspectResult> = CommandOutput::failure(vec![error]);
                println!("{}", serde_json::to_string_pretty(&output)?);
                Ok(ExitCode::from(1))
            }
        };
    }

    let result = outcome.map_err(|e| anyhow::anyhow!(e.message))?;
    let header = &result.header;

    println!("{} {}", "Inspecting:".cyan().bold(), result.input);
    println!("  {} {}", "Audio format:".dimmed(), header.audio_format);
    println!("  {} {}", "Channels:".dimmed(), header.channels);
    println!("  {} {} Hz", "Sample rate:".dimmed(), header.sample_rate);
    println!("  {} {}", "Bits per sample:".dimmed(), header.bits_per_sample);
    println!("  {} {} bytes/s", "Byte rate:".dimmed(), header.byte_rate);
    println!("  {} {}", "Block align:".dimmed(), header.block_align);
    println!(
        "  {} {} bytes at offset {}",
        "Data:".dimmed(),
        header.data_size,
        header.data_offset
    );
    println!(
        "  {} {} frames ({:.3} s)",
        "Length:".dimmed(),
        header.num_frames,
        result.duration_seconds
    );
    println!("  {} {}", "PCM hash:".dimmed(), result.pcm_hash);

    if result.canonical_pcm16 {
        println!("{}", "Canonical 16-bit PCM layout".green().bold());
    } else {
        println!("{}", "Not canonical 16-bit PCM; re-encode before upload".yellow());
    }

    Ok(ExitCode::SUCCESS)
}

/// Reads and parses the WAV file at `input`.
pub fn inspect_file(input: &str) -> std::result::Result<InspectResult, JsonError> {
    let data = fs::read(input).map_err(|e| {
        JsonError::new(error_codes::FILE_READ, format!("Failed to read file: {}", e))
            .with_file(input)
    })?;

    let header = inspect_wav(&data).map_err(|e| {
        JsonError::new(error_codes::INVALID_WAV, e.to_string()).with_file(input)
    })?;

    // inspect_wav succeeded, so the data chunk is present and in bounds
    let pcm_hash = header.pcm_data(&data).map(hash_pcm).unwrap_or_default();

    Ok(InspectResult {
        input: input.to_string(),
        file_size: data.len(),
        duration_seconds: header.duration_seconds(),
        canonical_pcm16: header.is_canonical_pcm16(),
        header,
        pcm_hash,
    })
}
