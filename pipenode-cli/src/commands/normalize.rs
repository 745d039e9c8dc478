//! Normalize command handler
//!
//! Reads raw records, converts them into pipeline nodes of the requested
//! stage and prints them.

use anyhow::{Context, Result};
use colored::*;
use pipenode_core::domain::node::PipelineNode;
use pipenode_core::dto::node::NodeSummary;
use pipenode_core::{NodeError, PipelineStage, normalize_all};
use std::path::Path;
use tracing::info;

use crate::config::{Config, OutputFormat};
use crate::input::{parse_records, read_records};

/// Parse a stage from its wire name
pub fn parse_stage(s: &str) -> Result<PipelineStage, NodeError> {
    s.parse()
}

/// Normalize every record in the input into nodes of `stage`
pub fn handle_normalize(stage: PipelineStage, input: Option<&Path>, config: &Config) -> Result<()> {
    let records = parse_records(read_records(input)?)?;
    let nodes = normalize_all(records, stage)
        .with_context(|| format!("Failed to normalize records as {} nodes", stage))?;

    info!(count = nodes.len(), %stage, "normalized records");

    match config.format {
        OutputFormat::Json => {
            let summaries: Vec<NodeSummary> = nodes.iter().map(NodeSummary::from).collect();
            println!("{}", serde_json::to_string_pretty(&summaries)?);
        }
        OutputFormat::Pretty => print_nodes(stage, &nodes),
    }

    Ok(())
}

fn print_nodes(stage: PipelineStage, nodes: &[PipelineNode]) {
    if nodes.is_empty() {
        println!("{}", "No records found.".yellow());
        return;
    }

    println!(
        "{}",
        format!("Found {} {} node(s):", nodes.len(), stage).bold()
    );
    println!();
    for node in nodes {
        print_node_summary(node);
    }
}

/// Width of the widest label ("Description:") plus one space
const LABEL_WIDTH: usize = 13;

/// Indented, padded field label so values line up in one column
fn label(name: &str) -> String {
    format!("    {:<width$}", format!("{}:", name), width = LABEL_WIDTH)
}

/// Print a node summary
fn print_node_summary(node: &PipelineNode) {
    let status = if node.enabled() {
        "enabled".green()
    } else {
        "disabled".red()
    };

    println!("  {} {} [{}]", "▸".cyan(), node.name().bold(), status);
    println!("{}{}", label("ID"), node.id().to_string().dimmed());
    println!("{}{}", label("Backend"), node.backend().to_string().cyan());
    if let Some(desc) = node.description() {
        println!("{}{}", label("Description"), desc.dimmed());
    }
    if let Some(order) = node.order() {
        println!("{}{}", label("Order"), order);
    }
    if let Some(interval) = node.interval() {
        println!("{}{}", label("Interval"), interval.to_string().yellow());
    }
    if let Some(plugin) = node.plugin_node() {
        println!("{}{}", label("Plugin"), plugin.plugin.name.dimmed());
    }
    println!(
        "{}{}",
        label("Updated"),
        node.updated_at()
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
            .dimmed()
    );
    println!();
}
