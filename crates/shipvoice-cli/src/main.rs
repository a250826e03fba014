//! shipvoice CLI - encode and inspect ship-assistant voice recordings
//!
//! This binary re-encodes recordings as canonical 16-bit PCM WAV files ready
//! for upload, and inspects existing WAV files.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use shipvoice_cli::commands;
use shipvoice_cli::commands::encode::RawLayout;

/// shipvoice - voice recording encoder
#[derive(Parser)]
#[command(name = "shipvoice")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a recording as a 16-bit PCM WAV file
    Encode {
        /// Path to the input recording (WAV, or raw f32 with --raw-f32)
        #[arg(short, long)]
        input: String,

        /// Path of the WAV file to write
        #[arg(short, long)]
        output: String,

        /// Treat the input as raw interleaved little-endian f32 samples
        #[arg(long, requires = "sample_rate")]
        raw_f32: bool,

        /// Sample rate of raw input in Hz
        #[arg(long, requires = "raw_f32")]
        sample_rate: Option<u32>,

        /// Channel count of raw input [default: 1]
        #[arg(long, requires = "raw_f32")]
        channels: Option<usize>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Show the header fields and PCM hash of a WAV file
    Inspect {
        /// Path to the WAV file
        #[arg(short, long)]
        input: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the BLAKE3 hash of a WAV file's PCM payload
    Hash {
        /// Path to the WAV file
        #[arg(short, long)]
        input: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Encode {
            input,
            output,
            raw_f32,
            sample_rate,
            channels,
            json,
        } => {
            let raw = if raw_f32 {
                sample_rate.map(|sample_rate| RawLayout {
                    sample_rate,
                    channels: channels.unwrap_or(1),
                })
            } else {
                None
            };
            commands::encode::run(&input, &output, raw, json)
        }
        Commands::Inspect { input, json } => commands::inspect::run(&input, json),
        Commands::Hash { input, json } => commands::hash::run(&input, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
