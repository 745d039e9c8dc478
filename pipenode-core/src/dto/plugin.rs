//! Plugin configuration records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::descriptor::PluginDescriptor;

/// A plugin configuration as returned by the plugin configs API
///
/// There is no creation timestamp on this record, only `updated_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginConfigRecord {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub enabled: bool,
    #[serde(deserialize_with = "super::timestamp::deserialize")]
    pub updated_at: DateTime<Utc>,
    /// Position in the transformation chain
    #[serde(default)]
    pub order: i32,
    pub plugin_info: PluginDescriptor,
    #[serde(default)]
    pub config: HashMap<String, serde_json::Value>,
}
