//! CLI command handlers

pub mod commands;

pub use commands::{generate, parse, run_default, validate};
