//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod classify;
mod normalize;

use anyhow::Result;
use clap::Subcommand;
use std::path::PathBuf;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Normalize raw records into pipeline nodes of one stage
    Normalize {
        /// Target stage (transformation, destination, data-import, site-app, legacy-source)
        #[arg(short, long, value_parser = normalize::parse_stage)]
        stage: pipenode_core::PipelineStage,

        /// Path to a JSON file of records (reads stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Show which backend each raw record belongs to
    Classify {
        /// Path to a JSON file of records (reads stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Normalize { stage, input } => {
            normalize::handle_normalize(stage, input.as_deref(), config)
        }
        Commands::Classify { input } => classify::handle_classify(input.as_deref(), config),
    }
}
