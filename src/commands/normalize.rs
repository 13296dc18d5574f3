//! # Normalize Command Implementation
//!
//! This module implements the `normalize` subcommand, which turns an
//! arbitrary string (typically a source-control branch name) into a safe
//! identifier segment: lowercase, unsafe characters folded to hyphens,
//! capped at 20 characters, trailing hyphens stripped.

use anyhow::Result;
use clap::Args;

use core_prn::slug::normalize;

/// Normalize a string into a safe identifier segment
#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// The string to normalize, e.g. a branch name
    pub name: String,
}

/// Execute the `normalize` command.
pub fn execute(args: NormalizeArgs) -> Result<()> {
    println!("{}", normalize(&args.name));
    Ok(())
}
