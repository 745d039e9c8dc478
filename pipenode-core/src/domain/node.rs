//! Pipeline node domain types
//!
//! A node is one configurable step of the data pipeline. Its shape depends on
//! two things: the stage it belongs to and the backend implementing it. The
//! enums below only admit the stage/backend pairs that exist, so a
//! batch-export transformation cannot be represented at all.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::descriptor::{BatchExportService, PluginDescriptor};
use super::interval::{BatchExportInterval, DestinationInterval};
use super::stage::{PipelineBackend, PipelineStage};

/// Identifier of a node
///
/// Plugin configurations are keyed by integer, everything else by string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeId {
    Numeric(i64),
    Text(String),
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeId::Numeric(id) => write!(f, "{}", id),
            NodeId::Text(id) => f.write_str(id),
        }
    }
}

/// Fields shared by every node
#[derive(Debug, Clone, PartialEq)]
pub struct NodeMeta {
    pub name: String,
    pub description: Option<String>,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A node backed by a plugin configuration
#[derive(Debug, Clone, PartialEq)]
pub struct PluginNode {
    pub id: i64,
    pub meta: NodeMeta,
    pub plugin: PluginDescriptor,
    pub config: HashMap<String, serde_json::Value>,
}

/// A plugin node positioned in the transformation chain
#[derive(Debug, Clone, PartialEq)]
pub struct Transformation {
    pub node: PluginNode,
    pub order: i32,
}

/// A destination backed by a batch export
#[derive(Debug, Clone, PartialEq)]
pub struct BatchExportDestination {
    pub id: String,
    pub meta: NodeMeta,
    pub service: BatchExportService,
    pub interval: BatchExportInterval,
}

/// A destination backed by a hog function
#[derive(Debug, Clone, PartialEq)]
pub struct HogFunctionDestination {
    /// Namespaced id, always prefixed with `hog-`
    pub id: String,
    pub meta: NodeMeta,
}

/// Destination variants
#[derive(Debug, Clone, PartialEq)]
pub enum Destination {
    /// Plugin-based webhook, delivered in realtime
    Webhook(PluginNode),
    BatchExport(BatchExportDestination),
    /// Delivered in realtime
    HogFunction(HogFunctionDestination),
}

impl Destination {
    pub fn backend(&self) -> PipelineBackend {
        match self {
            Destination::Webhook(_) => PipelineBackend::Plugin,
            Destination::BatchExport(_) => PipelineBackend::BatchExport,
            Destination::HogFunction(_) => PipelineBackend::HogFunction,
        }
    }

    pub fn interval(&self) -> DestinationInterval {
        match self {
            Destination::Webhook(_) | Destination::HogFunction(_) => DestinationInterval::Realtime,
            Destination::BatchExport(export) => export.interval.clone().into(),
        }
    }

    pub fn meta(&self) -> &NodeMeta {
        match self {
            Destination::Webhook(node) => &node.meta,
            Destination::BatchExport(export) => &export.meta,
            Destination::HogFunction(function) => &function.meta,
        }
    }
}

/// Unified pipeline node
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineNode {
    Transformation(Transformation),
    Destination(Destination),
    DataImport(PluginNode),
    SiteApp(PluginNode),
    ImportApp(PluginNode),
}

impl PipelineNode {
    pub fn stage(&self) -> PipelineStage {
        match self {
            PipelineNode::Transformation(_) => PipelineStage::Transformation,
            PipelineNode::Destination(_) => PipelineStage::Destination,
            PipelineNode::DataImport(_) => PipelineStage::DataImport,
            PipelineNode::SiteApp(_) => PipelineStage::SiteApp,
            PipelineNode::ImportApp(_) => PipelineStage::ImportApp,
        }
    }

    pub fn backend(&self) -> PipelineBackend {
        match self {
            PipelineNode::Destination(destination) => destination.backend(),
            _ => PipelineBackend::Plugin,
        }
    }

    pub fn id(&self) -> NodeId {
        match self {
            PipelineNode::Destination(Destination::BatchExport(export)) => {
                NodeId::Text(export.id.clone())
            }
            PipelineNode::Destination(Destination::HogFunction(function)) => {
                NodeId::Text(function.id.clone())
            }
            PipelineNode::Transformation(transformation) => {
                NodeId::Numeric(transformation.node.id)
            }
            PipelineNode::Destination(Destination::Webhook(node))
            | PipelineNode::DataImport(node)
            | PipelineNode::SiteApp(node)
            | PipelineNode::ImportApp(node) => NodeId::Numeric(node.id),
        }
    }

    /// The underlying plugin node, for plugin-backed variants
    pub fn plugin_node(&self) -> Option<&PluginNode> {
        match self {
            PipelineNode::Transformation(transformation) => Some(&transformation.node),
            PipelineNode::Destination(Destination::Webhook(node))
            | PipelineNode::DataImport(node)
            | PipelineNode::SiteApp(node)
            | PipelineNode::ImportApp(node) => Some(node),
            PipelineNode::Destination(_) => None,
        }
    }

    pub fn meta(&self) -> &NodeMeta {
        match self {
            PipelineNode::Destination(destination) => destination.meta(),
            PipelineNode::Transformation(transformation) => &transformation.node.meta,
            PipelineNode::DataImport(node)
            | PipelineNode::SiteApp(node)
            | PipelineNode::ImportApp(node) => &node.meta,
        }
    }

    pub fn name(&self) -> &str {
        &self.meta().name
    }

    pub fn description(&self) -> Option<&str> {
        self.meta().description.as_deref()
    }

    pub fn enabled(&self) -> bool {
        self.meta().enabled
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.meta().created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.meta().updated_at
    }

    /// Delivery interval, only defined for destinations
    pub fn interval(&self) -> Option<DestinationInterval> {
        match self {
            PipelineNode::Destination(destination) => Some(destination.interval()),
            _ => None,
        }
    }

    /// Position in the transformation chain, only defined for transformations
    pub fn order(&self) -> Option<i32> {
        match self {
            PipelineNode::Transformation(transformation) => Some(transformation.order),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn meta() -> NodeMeta {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        NodeMeta {
            name: "node".to_string(),
            description: None,
            enabled: true,
            created_at: at,
            updated_at: at,
        }
    }

    fn plugin_node() -> PluginNode {
        PluginNode {
            id: 12,
            meta: meta(),
            plugin: PluginDescriptor {
                id: 1,
                name: "Webhook".to_string(),
                description: None,
                url: None,
                icon: None,
                plugin_type: None,
            },
            config: HashMap::new(),
        }
    }

    #[test]
    fn test_node_id_display() {
        assert_eq!(NodeId::Numeric(5).to_string(), "5");
        assert_eq!(NodeId::Text("hog-7".to_string()).to_string(), "hog-7");
    }

    #[test]
    fn test_webhook_destination_is_plugin_backed_and_realtime() {
        let node = PipelineNode::Destination(Destination::Webhook(plugin_node()));
        assert_eq!(node.backend(), PipelineBackend::Plugin);
        assert_eq!(node.stage(), PipelineStage::Destination);
        assert_eq!(node.interval(), Some(DestinationInterval::Realtime));
        assert_eq!(node.id(), NodeId::Numeric(12));
        assert_eq!(node.order(), None);
    }

    #[test]
    fn test_batch_export_destination_keeps_its_interval() {
        let node = PipelineNode::Destination(Destination::BatchExport(BatchExportDestination {
            id: "0190a3c6-0000-0000-0000-000000000000".to_string(),
            meta: meta(),
            service: BatchExportService {
                service_type: "Snowflake".to_string(),
                config: HashMap::new(),
            },
            interval: BatchExportInterval::Day,
        }));

        assert_eq!(node.backend(), PipelineBackend::BatchExport);
        assert_eq!(
            node.interval(),
            Some(DestinationInterval::Batch(BatchExportInterval::Day))
        );
        assert!(node.plugin_node().is_none());
    }

    #[test]
    fn test_site_app_has_no_interval_or_order() {
        let node = PipelineNode::SiteApp(plugin_node());
        assert_eq!(node.stage(), PipelineStage::SiteApp);
        assert_eq!(node.backend(), PipelineBackend::Plugin);
        assert_eq!(node.interval(), None);
        assert_eq!(node.order(), None);
        assert_eq!(node.name(), "node");
    }
}
