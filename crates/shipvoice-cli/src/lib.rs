//! shipvoice CLI library.
//!
//! This crate provides the command implementations behind the `shipvoice`
//! binary: re-encoding recordings as canonical 16-bit PCM WAV and inspecting
//! existing WAV files.

pub mod commands;
