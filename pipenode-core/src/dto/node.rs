//! Flat node summary for output

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::descriptor::{BatchExportService, PluginDescriptor};
use crate::domain::interval::DestinationInterval;
use crate::domain::node::{Destination, NodeId, PipelineNode};
use crate::domain::stage::{PipelineBackend, PipelineStage};

/// Flat view of a pipeline node
///
/// Variant-specific fields are omitted when the node does not have them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeSummary {
    pub backend: PipelineBackend,
    pub stage: PipelineStage,
    pub id: NodeId,
    pub name: String,
    pub description: Option<String>,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<DestinationInterval>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugin: Option<PluginDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<BatchExportService>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<HashMap<String, serde_json::Value>>,
}

impl From<&PipelineNode> for NodeSummary {
    fn from(node: &PipelineNode) -> Self {
        let meta = node.meta();
        let plugin_node = node.plugin_node();
        let service = match node {
            PipelineNode::Destination(Destination::BatchExport(export)) => {
                Some(export.service.clone())
            }
            _ => None,
        };

        Self {
            backend: node.backend(),
            stage: node.stage(),
            id: node.id(),
            name: meta.name.clone(),
            description: meta.description.clone(),
            enabled: meta.enabled,
            created_at: meta.created_at,
            updated_at: meta.updated_at,
            order: node.order(),
            interval: node.interval(),
            plugin: plugin_node.map(|n| n.plugin.clone()),
            service,
            config: plugin_node.map(|n| n.config.clone()),
        }
    }
}
