//! Command-line interface for layered-config
//!
//! Resolves the configuration, validates it, and prints either the resolved
//! values or every violation found.

use anyhow::{Context, Result};
use clap::builder::BoolishValueParser;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{load_config, CliOverrides};
use crate::render::{render_failure, render_success};
use crate::validate::validate;

pub const NO_CONFIG_NOTICE: &str = "No config file found, using defaults and command line flags";

/// Merge defaults, a config file, EXAMPLE_* environment variables and flags,
/// then validate the result
#[derive(Parser, Debug)]
#[command(name = "layered-config")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Color option (red, green, blue, yellow)
    #[arg(long, value_name = "COLOR")]
    pub color: Option<String>,

    /// Size value (1-100) [default: 10]
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub size: Option<i64>,

    /// Count value (1-1000) [default: 1]
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub count: Option<i64>,

    /// Whether or not to include cupholders [default: false]
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub include_cupholders: Option<bool>,

    /// Read this YAML file instead of searching the working directory
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    pub verbose: bool,
}

impl From<&Cli> for CliOverrides {
    fn from(cli: &Cli) -> Self {
        CliOverrides {
            color: cli.color.clone(),
            size: cli.size,
            count: cli.count,
            include_cupholders: cli.include_cupholders,
        }
    }
}

pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    execute(&cli)
}

fn execute(cli: &Cli) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("Failed to determine working directory")?;
    let overrides = CliOverrides::from(cli);

    let resolved = load_config(&cwd, cli.config.as_deref(), &overrides)
        .context("Failed to load configuration")?;

    match &resolved.source {
        Some(path) => tracing::info!("Using config file {}", path.display()),
        None => println!("{}", NO_CONFIG_NOTICE),
    }

    let config = resolved.config;
    if let Err(errors) = validate(&config) {
        tracing::debug!("{}", errors);
        print!("{}", render_failure(&errors));
        return Ok(ExitCode::FAILURE);
    }

    print!("{}", render_success(&config));
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn unset_flags_do_not_override() {
        let cli = Cli::try_parse_from(["layered-config"]).expect("parse");
        assert!(CliOverrides::from(&cli).is_empty());
    }

    #[test]
    fn parses_explicit_values() {
        let cli = Cli::try_parse_from([
            "layered-config",
            "--color=red",
            "--size",
            "5",
            "--count=-2",
            "--include-cupholders",
        ])
        .expect("parse");
        let overrides = CliOverrides::from(&cli);
        assert_eq!(overrides.color.as_deref(), Some("red"));
        assert_eq!(overrides.size, Some(5));
        assert_eq!(overrides.count, Some(-2));
        assert_eq!(overrides.include_cupholders, Some(true));
    }

    #[test]
    fn bool_flag_accepts_explicit_value() {
        let cli = Cli::try_parse_from(["layered-config", "--include-cupholders=false"])
            .expect("parse");
        assert_eq!(cli.include_cupholders, Some(false));

        let cli =
            Cli::try_parse_from(["layered-config", "--include-cupholders=yes"]).expect("parse");
        assert_eq!(cli.include_cupholders, Some(true));
    }

    #[test]
    fn rejects_non_integer_size() {
        assert!(Cli::try_parse_from(["layered-config", "--size", "big"]).is_err());
    }
}
