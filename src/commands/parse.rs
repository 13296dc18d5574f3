//! # Parse Command Implementation
//!
//! This module implements the `parse` subcommand, which splits a PRN string
//! into its hierarchy fields and reports the deepest contiguously populated
//! scope.
//!
//! Parsing is total: malformed input degrades to empty fields rather than
//! failing, exactly as the library parser behaves. The command therefore
//! always succeeds; use `prn validate` to gate on well-formedness.

use anyhow::Result;
use clap::Args;
use console::style;
use serde::Serialize;

use core_prn::prn::Prn;
use core_prn::scope::Scope;

use crate::commands::OutputFormat;

/// Parse a PRN into its hierarchy fields
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// The PRN string to parse, e.g. prn:acme:web:main:42:api
    pub prn: String,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct ParseReport<'a> {
    portfolio: Option<&'a str>,
    app: Option<&'a str>,
    branch: Option<&'a str>,
    build: Option<&'a str>,
    component: Option<&'a str>,
    scope: Option<Scope>,
    canonical: String,
}

/// Execute the `parse` command.
pub fn execute(args: ParseArgs) -> Result<()> {
    let prn = Prn::parse(&args.prn);
    let report = ParseReport {
        portfolio: prn.portfolio(),
        app: prn.app(),
        branch: prn.branch(),
        build: prn.build(),
        component: prn.component(),
        scope: prn.scope(),
        canonical: prn.canonical(Scope::Component),
    };

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&report)?),
        OutputFormat::Text => {
            let field = |name: &str, value: Option<&str>| {
                println!(
                    "{:>10}: {}",
                    name,
                    value.map_or_else(|| style("-").dim().to_string(), str::to_string)
                );
            };
            field("portfolio", report.portfolio);
            field("app", report.app);
            field("branch", report.branch);
            field("build", report.build);
            field("component", report.component);
            println!(
                "{:>10}: {}",
                "scope",
                report
                    .scope
                    .map_or_else(|| style("none").dim().to_string(), |s| s.to_string())
            );
            println!("{:>10}: {}", "canonical", style(&report.canonical).bold());
        }
    }
    Ok(())
}
