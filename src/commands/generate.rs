//! # Generate Command Implementation
//!
//! This module implements the `generate` subcommand, which composes a PRN
//! from hierarchy fields, truncated at a requested scope.
//!
//! By default the command mirrors the library's legacy leniency: the first
//! missing field halts generation and deeper fields are silently dropped.
//! With `--strict`, a gapped field set is rejected instead, using the
//! hardened constructor.

use anyhow::Result;
use clap::Args;

use core_prn::prn::Prn;
use core_prn::scope::Scope;

/// Generate a PRN from hierarchy fields
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Business application (portfolio) name
    #[arg(long)]
    pub portfolio: Option<String>,

    /// App name
    #[arg(long)]
    pub app: Option<String>,

    /// Branch name (pre-normalized; see `prn normalize`)
    #[arg(long)]
    pub branch: Option<String>,

    /// Build number or commit id
    #[arg(long)]
    pub build: Option<String>,

    /// Component name
    #[arg(long)]
    pub component: Option<String>,

    /// Scope to truncate at
    #[arg(long, value_enum, default_value = "component")]
    pub scope: Scope,

    /// Emit the hyphen-delimited resource-name form instead of the colon form
    #[arg(long)]
    pub hyphen: bool,

    /// Prefix the colon form with the prn scheme token
    #[arg(long, conflicts_with = "hyphen")]
    pub canonical: bool,

    /// Reject gapped field sets instead of silently truncating
    #[arg(long)]
    pub strict: bool,
}

/// Execute the `generate` command.
pub fn execute(args: GenerateArgs) -> Result<()> {
    let prn = if args.strict {
        Prn::new(
            args.portfolio.as_deref(),
            args.app.as_deref(),
            args.branch.as_deref(),
            args.build.as_deref(),
            args.component.as_deref(),
        )?
    } else {
        Prn {
            portfolio: args.portfolio,
            app: args.app,
            branch: args.branch,
            build: args.build,
            component: args.component,
        }
    };

    let out = if args.hyphen {
        prn.hyphen_delimited(args.scope)
    } else if args.canonical {
        prn.canonical(args.scope)
    } else {
        prn.colon_delimited(args.scope)
    };
    println!("{}", out);
    Ok(())
}
