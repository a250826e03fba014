//! JSON output types for machine-readable CLI output.
//!
//! Every command accepts `--json`. In that mode nothing colored is printed;
//! stdout carries exactly one [`CommandOutput`] object.

use serde::{Deserialize, Serialize};

/// Error codes for CLI operations.
///
/// These codes are stable and can be used for programmatic error handling.
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// File could not be written
    pub const FILE_WRITE: &str = "CLI_002";
    /// Input could not be decoded into an audio buffer
    pub const DECODE: &str = "CLI_003";
    /// Input is not a parseable WAV file
    pub const INVALID_WAV: &str = "CLI_004";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "DEC_001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// Library error code underneath a CLI error (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            file: None,
            cause: None,
        }
    }

    /// Sets the file path for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Records the library error code that caused this error.
    pub fn with_cause(mut self, cause: impl Into<String>) -> Self {
        self.cause = Some(cause.into());
        self
    }
}

/// JSON envelope shared by all commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandOutput<T> {
    /// Whether the command succeeded
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Command result (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
}

impl<T> CommandOutput<T> {
    /// Creates a successful output.
    pub fn success(result: T) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    /// Creates a failed output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}

/// Result of the `encode` command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EncodeResult {
    /// Input file path
    pub input: String,
    /// Output WAV path
    pub output: String,
    /// Number of channels written
    pub channels: u16,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Sample frames per channel
    pub num_frames: usize,
    /// Duration in seconds
    pub duration_seconds: f64,
    /// Size of the written file in bytes
    pub file_size: usize,
    /// BLAKE3 hash of the PCM payload
    pub pcm_hash: String,
}

/// Result of the `inspect` command.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct InspectResult {
    /// Input file path
    pub input: String,
    /// Size of the file in bytes
    pub file_size: usize,
    /// Parsed header fields
    pub header: shipvoice_wav::WavInfo,
    /// Duration in seconds
    pub duration_seconds: f64,
    /// Whether the file has the exact canonical 16-bit PCM layout
    pub canonical_pcm16: bool,
    /// BLAKE3 hash of the PCM payload
    pub pcm_hash: String,
}

/// Result of the `hash` command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HashResult {
    /// Input file path
    pub input: String,
    /// BLAKE3 hash of the PCM payload
    pub pcm_hash: String,
}
