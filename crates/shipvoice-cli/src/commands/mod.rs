//! CLI command implementations

pub mod encode;
pub mod hash;
pub mod inspect;
pub mod json_output;
