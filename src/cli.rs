//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::LevelFilter;

use crate::commands;

/// prn - Inspect, generate, and validate Pipeline Reference Numbers
#[derive(Parser, Debug)]
#[command(name = "prn")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse a PRN into its hierarchy fields
    Parse(commands::parse::ParseArgs),

    /// Generate a PRN from hierarchy fields
    Generate(commands::generate::GenerateArgs),

    /// Validate a PRN against a scope
    Validate(commands::validate::ValidateArgs),

    /// Report the scope of a PRN
    Scope(commands::scope::ScopeArgs),

    /// Normalize a string into a safe identifier segment
    Normalize(commands::normalize::NormalizeArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);
        apply_color_flag(&self.color);

        match self.command {
            Commands::Parse(args) => commands::parse::execute(args),
            Commands::Generate(args) => commands::generate::execute(args),
            Commands::Validate(args) => commands::validate::execute(args),
            Commands::Scope(args) => commands::scope::execute(args),
            Commands::Normalize(args) => commands::normalize::execute(args),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}

/// Initialize env_logger from the global --log-level flag. RUST_LOG still
/// wins when set.
fn init_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Warn,
    };
    env_logger::Builder::new()
        .filter_level(filter)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Apply the global --color flag; "auto" defers to console's own detection
/// (TTY, NO_COLOR, CLICOLOR).
fn apply_color_flag(flag: &str) {
    match flag.to_lowercase().as_str() {
        "always" => console::set_colors_enabled(true),
        "never" => console::set_colors_enabled(false),
        _ => {}
    }
}
