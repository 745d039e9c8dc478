//! Batch export configuration records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::descriptor::BatchExportService;
use crate::domain::interval::BatchExportInterval;

/// A batch export configuration as returned by the batch exports API
///
/// Batch exports have no description, no enabled flag (only `paused`) and no
/// update timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchExportRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub paused: bool,
    #[serde(deserialize_with = "super::timestamp::deserialize")]
    pub created_at: DateTime<Utc>,
    pub destination: BatchExportService,
    pub interval: BatchExportInterval,
}
