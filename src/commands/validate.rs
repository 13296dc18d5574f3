//! # Validate Command Implementation
//!
//! This module implements the `validate` subcommand, which checks a PRN
//! string against a declared scope (or against all five scopes when no scope
//! is given) and reports the result.
//!
//! The exit code carries the verdict: 0 for a well-formed PRN, 1 otherwise,
//! so the command can be used directly in shell guard clauses.

use anyhow::Result;
use clap::Args;
use console::style;

use core_prn::scope::Scope;
use core_prn::validate::{is_item_prn, is_valid};

/// Validate a PRN against a scope
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// The PRN string to validate
    pub prn: String,

    /// Scope to validate at; when omitted, the PRN is accepted if it is
    /// well-formed at any of the five scopes
    #[arg(long, value_enum)]
    pub scope: Option<Scope>,

    /// Suppress output; communicate only through the exit code
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the `validate` command.
pub fn execute(args: ValidateArgs) -> Result<()> {
    let valid = match args.scope {
        Some(scope) => is_valid(&args.prn, scope),
        None => is_item_prn(&args.prn),
    };

    if !args.quiet {
        let at = args
            .scope
            .map_or_else(|| "any scope".to_string(), |s| format!("{} scope", s));
        if valid {
            println!("{} {} is valid at {}", style("ok").green(), args.prn, at);
        } else {
            println!(
                "{} {} is not valid at {}",
                style("invalid").red(),
                args.prn,
                at
            );
        }
    }

    if valid {
        Ok(())
    } else {
        std::process::exit(1);
    }
}
