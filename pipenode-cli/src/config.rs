//! Configuration module
//!
//! Handles CLI configuration: output format and log filtering.

use clap::ValueEnum;

/// How command results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored, human readable listing
    Pretty,
    /// JSON array on stdout
    Json,
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Output format for command results
    pub format: OutputFormat,

    /// Tracing filter directives (e.g., "pipenode=debug")
    pub log_filter: String,
}

impl Config {
    pub const DEFAULT_LOG_FILTER: &'static str = "pipenode=info,pipenode_core=info";

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.log_filter.trim().is_empty() {
            anyhow::bail!("log_filter cannot be empty");
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::Pretty,
            log_filter: Self::DEFAULT_LOG_FILTER.to_string(),
        }
    }
}
