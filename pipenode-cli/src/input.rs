//! Record input
//!
//! Reads raw backend records from a file or stdin. Accepts a JSON array of
//! records, a single record object, or a paginated API response with the
//! records under `results`.

use anyhow::{Context, Result, anyhow};
use pipenode_core::dto::SourceRecord;
use serde_json::Value;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Read raw records from `path`, or from stdin when no path is given
pub fn read_records(path: Option<&Path>) -> Result<Vec<Value>> {
    let text = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read records file: {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read records from stdin")?;
            buf
        }
    };

    let records = parse_payload(&text)?;
    debug!(count = records.len(), "read raw records");
    Ok(records)
}

/// Split a JSON payload into individual records
pub fn parse_payload(text: &str) -> Result<Vec<Value>> {
    let payload: Value = serde_json::from_str(text).context("Input is not valid JSON")?;

    match payload {
        Value::Array(records) => Ok(records),
        Value::Object(mut object) => match object.remove("results") {
            Some(Value::Array(records)) => Ok(records),
            Some(_) => Err(anyhow!("`results` must be an array of records")),
            None => Ok(vec![Value::Object(object)]),
        },
        _ => Err(anyhow!("Expected a record object or an array of records")),
    }
}

/// Classify and deserialize every record, naming the failing position
pub fn parse_records(values: Vec<Value>) -> Result<Vec<SourceRecord>> {
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            SourceRecord::from_value(value).with_context(|| format!("Invalid record #{}", index))
        })
        .collect()
}
