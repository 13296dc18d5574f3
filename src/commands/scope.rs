//! # Scope Command Implementation
//!
//! This module implements the `scope` subcommand, which classifies a PRN
//! string by its depth: one to five colons map onto the five ladder scopes,
//! a colon-free string is the out-of-ladder `client` scope, and anything
//! deeper is unclassifiable.

use anyhow::{bail, Result};
use clap::Args;

use core_prn::prn::scope_name_of;

/// Report the scope of a PRN
#[derive(Args, Debug)]
pub struct ScopeArgs {
    /// The PRN string to classify
    pub prn: String,
}

/// Execute the `scope` command.
pub fn execute(args: ScopeArgs) -> Result<()> {
    match scope_name_of(&args.prn) {
        Some(name) => {
            println!("{}", name);
            Ok(())
        }
        None => bail!("{:?} has more segments than any known scope", args.prn),
    }
}
