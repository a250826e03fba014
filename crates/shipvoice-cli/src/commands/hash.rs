//! Hash command implementation
//!
//! Prints the BLAKE3 hash of a WAV file's PCM payload, so two recordings can
//! be compared by audio content regardless of header differences.

use anyhow::Result;
use std::fs;
use std::process::ExitCode;

use shipvoice_wav::wav::{hash_pcm, inspect_wav};

use super::json_output::{error_codes, CommandOutput, HashResult, JsonError};

/// Run the hash command
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(input: &str, json_output: bool) -> Result<ExitCode> {
    let outcome = hash_file(input);

    if json_output {
        let output = match outcome {
            Ok(result) => CommandOutput::success(result),
            Err(error) => CommandOutput::failure(vec![error]),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(if output.success {
            ExitCode::SUCCESS
        } else {
            ExitCode::from(1)
        });
    }

    let result = outcome.map_err(|e| anyhow::anyhow!(e.message))?;

    println!("{}  {}", result.pcm_hash, result.input);
    Ok(ExitCode::SUCCESS)
}

/// Hashes the PCM payload of the WAV file at `input`.
pub fn hash_file(input: &str) -> std::result::Result<HashResult, JsonError> {
    let data = fs::read(input).map_err(|e| {
        JsonError::new(error_codes::FILE_READ, format!("Failed to read file: {}", e))
            .with_file(input)
    })?;

    let header = inspect_wav(&data)
        .map_err(|e| JsonError::new(error_codes::INVALID_WAV, e.to_string()).with_file(input))?;
    let pcm = header.pcm_data(&data).ok_or_else(|| {
        JsonError::new(error_codes::INVALID_WAV, "data chunk out of bounds").with_file(input)
    })?;

    Ok(HashResult {
        input: input.to_string(),
        pcm_hash: hash_pcm(pcm),
    })
}
