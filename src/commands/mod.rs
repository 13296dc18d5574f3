//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the `prn`
//! command-line tool. Each subcommand is defined in its own file to keep the
//! logic separated and maintainable.
//!
//! ## Structure
//!
//! Each command module typically contains:
//! - An `Args` struct that defines the command-specific arguments and
//!   options, derived using `clap`.
//! - An `execute` function that takes the parsed `Args` and performs the
//!   command's logic.
//!
//! The `execute` function is the main entry point for the command and is
//! responsible for calling into the `core_prn` library to perform the core
//! logic and for rendering the result in the requested output format.

pub mod completions;
pub mod generate;
pub mod normalize;
pub mod parse;
pub mod scope;
pub mod validate;

use clap::ValueEnum;

/// Output rendering for commands with structured results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text (default).
    Text,
    /// JSON, one document on stdout.
    Json,
    /// YAML, one document on stdout.
    Yaml,
}
