//! Data Transfer Objects for backend records
//!
//! This module contains the raw record shapes returned by the three backends
//! that can implement a pipeline node, the classification step that tells
//! them apart, and the flat node summary used for output.

pub mod batch_export;
pub mod hog_function;
pub mod node;
pub mod plugin;
pub mod timestamp;

use serde_json::Value;
use tracing::debug;

use crate::domain::stage::PipelineBackend;
use crate::error::{NodeError, Result};

use self::batch_export::BatchExportRecord;
use self::hog_function::HogFunctionRecord;
use self::plugin::PluginConfigRecord;

/// Key holding the function source on hog function records
const HOG_KEY: &str = "hog";
/// Key holding the plugin descriptor on plugin configuration records
const PLUGIN_INFO_KEY: &str = "plugin_info";
/// Shorthand some payloads use for the plugin descriptor
const PLUGIN_KEY: &str = "plugin";

/// Decide which backend produced a raw record
///
/// Checked in priority order:
/// 1. a `hog` field marks a hog function
/// 2. a plugin descriptor (`plugin_info`, or an object under `plugin`) marks a plugin config
/// 3. anything else is treated as a batch export
pub fn classify(record: &Value) -> PipelineBackend {
    let backend = if record.get(HOG_KEY).is_some() {
        PipelineBackend::HogFunction
    } else if plugin_descriptor_key(record).is_some() {
        PipelineBackend::Plugin
    } else {
        PipelineBackend::BatchExport
    };

    debug!(%backend, "classified record");
    backend
}

fn plugin_descriptor_key(record: &Value) -> Option<&'static str> {
    if record.get(PLUGIN_INFO_KEY).is_some_and(Value::is_object) {
        Some(PLUGIN_INFO_KEY)
    } else if record.get(PLUGIN_KEY).is_some_and(Value::is_object) {
        Some(PLUGIN_KEY)
    } else {
        None
    }
}

/// A raw backend record, tagged by the backend it came from
#[derive(Debug, Clone)]
pub enum SourceRecord {
    Plugin(PluginConfigRecord),
    BatchExport(BatchExportRecord),
    HogFunction(HogFunctionRecord),
}

impl SourceRecord {
    /// Classify a raw JSON record and deserialize it into the matching shape
    pub fn from_value(mut value: Value) -> Result<Self> {
        let kind = classify(&value);
        let invalid = |source: serde_json::Error| NodeError::InvalidRecord { kind, source };

        match kind {
            PipelineBackend::HogFunction => serde_json::from_value(value)
                .map(SourceRecord::HogFunction)
                .map_err(invalid),
            PipelineBackend::Plugin => {
                if plugin_descriptor_key(&value) == Some(PLUGIN_KEY) {
                    if let Some(object) = value.as_object_mut() {
                        if let Some(descriptor) = object.remove(PLUGIN_KEY) {
                            object.insert(PLUGIN_INFO_KEY.to_string(), descriptor);
                        }
                    }
                }
                serde_json::from_value(value)
                    .map(SourceRecord::Plugin)
                    .map_err(invalid)
            }
            PipelineBackend::BatchExport => serde_json::from_value(value)
                .map(SourceRecord::BatchExport)
                .map_err(invalid),
        }
    }

    /// Backend this record belongs to
    pub fn backend(&self) -> PipelineBackend {
        match self {
            SourceRecord::Plugin(_) => PipelineBackend::Plugin,
            SourceRecord::BatchExport(_) => PipelineBackend::BatchExport,
            SourceRecord::HogFunction(_) => PipelineBackend::HogFunction,
        }
    }
}

impl From<PluginConfigRecord> for SourceRecord {
    fn from(record: PluginConfigRecord) -> Self {
        SourceRecord::Plugin(record)
    }
}

impl From<BatchExportRecord> for SourceRecord {
    fn from(record: BatchExportRecord) -> Self {
        SourceRecord::BatchExport(record)
    }
}

impl From<HogFunctionRecord> for SourceRecord {
    fn from(record: HogFunctionRecord) -> Self {
        SourceRecord::HogFunction(record)
    }
}
