//! Pipenode CLI
//!
//! Command-line interface for normalizing exported plugin configs, batch
//! exports and hog functions into pipeline nodes.

mod commands;
mod config;
mod input;

use anyhow::{Context, Result};
use clap::Parser;
use commands::{Commands, handle_command};
use config::{Config, OutputFormat};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "pipenode")]
#[command(about = "Pipeline node normalizer", long_about = None)]
struct Cli {
    /// Tracing filter directives
    #[arg(
        long,
        global = true,
        env = "PIPENODE_LOG",
        default_value = Config::DEFAULT_LOG_FILTER
    )]
    log_filter: String,

    /// Output format
    #[arg(
        long,
        global = true,
        value_enum,
        env = "PIPENODE_FORMAT",
        default_value = "pretty"
    )]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config {
        format: cli.format,
        log_filter: cli.log_filter,
    };
    config.validate()?;

    init_tracing(&config)?;

    handle_command(cli.command, &config)
}

/// Install the tracing subscriber, logging to stderr so stdout stays parseable
fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_filter)
        .with_context(|| format!("Invalid log filter: {}", config.log_filter))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    Ok(())
}
