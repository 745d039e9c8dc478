//! Backend descriptors carried by pipeline nodes

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Plugin metadata attached to a plugin configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginDescriptor {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    /// Where the plugin came from (`local`, `custom`, `repository`, `source`, `inline`)
    #[serde(default)]
    pub plugin_type: Option<String>,
}

/// Destination a batch export writes to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchExportService {
    /// Destination kind, e.g. `S3`, `Snowflake`, `Postgres`, `BigQuery`
    #[serde(rename = "type")]
    pub service_type: String,
    #[serde(default)]
    pub config: HashMap<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_service_type_uses_type_key() {
        let service: BatchExportService = serde_json::from_value(json!({
            "type": "S3",
            "config": { "bucket_name": "events", "region": "us-east-1" }
        }))
        .unwrap();

        assert_eq!(service.service_type, "S3");
        assert_eq!(service.config["bucket_name"], json!("events"));
        assert_eq!(serde_json::to_value(&service).unwrap()["type"], json!("S3"));
    }

    #[test]
    fn test_plugin_descriptor_optional_fields() {
        let plugin: PluginDescriptor =
            serde_json::from_value(json!({ "id": 3, "name": "GeoIP" })).unwrap();
        assert_eq!(plugin.id, 3);
        assert!(plugin.description.is_none());
        assert!(plugin.plugin_type.is_none());
    }
}
