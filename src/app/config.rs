//! Application configuration
//!
//! Turns parsed command-line arguments into the settings used by the rest
//! of the program.

use crate::cli::Cli;
use crate::histogram::HistogramConfig;
use anyhow::{Context, Result};

/// Application configuration structure
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Verbosity level for logging
    pub verbose: u8,
    /// Validated histogram settings
    pub histogram: HistogramConfig,
}

impl AppConfig {
    /// Validate the command line before any file is read
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let histogram =
            HistogramConfig::from_config(&cli.field, cli.filter.as_deref(), cli.files.clone())
                .context("Invalid command line")?;

        Ok(Self {
            verbose: cli.verbose,
            histogram,
        })
    }

    /// Get the log level string based on verbosity
    pub fn log_level(&self) -> &'static str {
        log_level(self.verbose)
    }
}

/// Default filter directive for a `-v` count; `RUST_LOG` takes precedence
pub fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}
