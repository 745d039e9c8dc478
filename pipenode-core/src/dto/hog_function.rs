//! Hog function records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw hog function id, which may arrive as a string or an integer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HogFunctionId {
    Numeric(i64),
    Text(String),
}

impl std::fmt::Display for HogFunctionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HogFunctionId::Numeric(id) => write!(f, "{}", id),
            HogFunctionId::Text(id) => f.write_str(id),
        }
    }
}

/// A hog function as returned by the hog functions API
///
/// Only a creation timestamp is available.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HogFunctionRecord {
    pub id: HogFunctionId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub enabled: bool,
    #[serde(deserialize_with = "super::timestamp::deserialize")]
    pub created_at: DateTime<Utc>,
    /// Function source; its presence is what marks a hog function record
    pub hog: String,
}
