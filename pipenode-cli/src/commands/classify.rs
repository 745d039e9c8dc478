//! Classify command handler

use anyhow::Result;
use colored::*;
use pipenode_core::PipelineBackend;
use pipenode_core::dto::classify;
use serde::Serialize;
use serde_json::Value;
use std::path::Path;

use crate::config::{Config, OutputFormat};
use crate::input::read_records;

/// Backend detected for one input record
#[derive(Debug, Serialize)]
struct Classification {
    index: usize,
    backend: PipelineBackend,
    name: Option<String>,
}

fn classify_all(values: &[Value]) -> Vec<Classification> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| Classification {
            index,
            backend: classify(value),
            name: value.get("name").and_then(Value::as_str).map(str::to_string),
        })
        .collect()
}

/// Print the detected backend of every record in the input
pub fn handle_classify(input: Option<&Path>, config: &Config) -> Result<()> {
    let values = read_records(input)?;
    let classified = classify_all(&values);

    match config.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&classified)?),
        OutputFormat::Pretty => {
            for entry in &classified {
                println!(
                    "  #{:<4} {:<14} {}",
                    entry.index,
                    entry.backend.to_string().cyan(),
                    entry.name.as_deref().unwrap_or("<unnamed>").bold()
                );
            }
        }
    }

    Ok(())
}
