//! Node normalizer
//!
//! Converts plugin configurations, batch exports and hog functions into
//! [`PipelineNode`] values for a requested stage.
//!
//! Some fields do not exist on the raw records and are filled in from what
//! is available until the backends provide them:
//! - plugin configs have no `created_at`, so `updated_at` is used for both
//! - batch exports and hog functions have no `updated_at`, so `created_at` is used for both
//! - batch exports have no description, so one is derived from the destination type

use tracing::{debug, warn};

use crate::domain::node::{
    BatchExportDestination, Destination, HogFunctionDestination, NodeMeta, PipelineNode,
    PluginNode, Transformation,
};
use crate::domain::stage::PipelineStage;
use crate::dto::SourceRecord;
use crate::dto::batch_export::BatchExportRecord;
use crate::dto::hog_function::HogFunctionRecord;
use crate::dto::plugin::PluginConfigRecord;
use crate::error::{NodeError, Result};

/// Prefix keeping hog function ids apart from other id spaces
pub const HOG_ID_PREFIX: &str = "hog-";

/// Normalize a backend record into a pipeline node of the given stage
///
/// # Errors
/// Returns [`NodeError::IncompatibleStage`] when the record's backend cannot
/// produce a node of `stage`. Batch exports and hog functions only produce
/// destinations.
///
/// # Example
/// ```
/// use pipenode_core::domain::stage::PipelineStage;
/// use pipenode_core::dto::SourceRecord;
/// use pipenode_core::normalize::normalize;
///
/// let record = SourceRecord::from_value(serde_json::json!({
///     "id": 77,
///     "name": "Filter",
///     "enabled": false,
///     "created_at": "2024-03-01T00:00:00Z",
///     "hog": "return event"
/// }))?;
///
/// let node = normalize(record, PipelineStage::Destination)?;
/// assert_eq!(node.id().to_string(), "hog-77");
/// # Ok::<(), pipenode_core::error::NodeError>(())
/// ```
pub fn normalize(record: SourceRecord, stage: PipelineStage) -> Result<PipelineNode> {
    let backend = record.backend();
    if !stage.accepts(backend) {
        warn!(%backend, %stage, "requested stage is not available for backend");
        return Err(NodeError::incompatible(backend, stage));
    }

    let node = match record {
        SourceRecord::HogFunction(function) => {
            PipelineNode::Destination(Destination::HogFunction(hog_function_destination(function)))
        }
        SourceRecord::Plugin(config) => plugin_based_node(config, stage),
        SourceRecord::BatchExport(export) => {
            PipelineNode::Destination(Destination::BatchExport(batch_export_destination(export)))
        }
    };

    debug!(%backend, %stage, id = %node.id(), "normalized pipeline node");
    Ok(node)
}

/// Normalize a list of records into nodes of the same stage
///
/// Stops at the first incompatible record. Transformations are returned in
/// chain order; equal orders keep their input order.
pub fn normalize_all<I>(records: I, stage: PipelineStage) -> Result<Vec<PipelineNode>>
where
    I: IntoIterator<Item = SourceRecord>,
{
    let mut nodes = records
        .into_iter()
        .map(|record| normalize(record, stage))
        .collect::<Result<Vec<_>>>()?;

    if stage == PipelineStage::Transformation {
        nodes.sort_by_key(|node| node.order());
    }

    Ok(nodes)
}

fn hog_function_destination(function: HogFunctionRecord) -> HogFunctionDestination {
    HogFunctionDestination {
        id: format!("{}{}", HOG_ID_PREFIX, function.id),
        meta: NodeMeta {
            name: function.name,
            description: function.description,
            enabled: function.enabled,
            created_at: function.created_at,
            updated_at: function.created_at,
        },
    }
}

fn plugin_based_node(config: PluginConfigRecord, stage: PipelineStage) -> PipelineNode {
    let order = config.order;
    let node = PluginNode {
        id: config.id,
        meta: NodeMeta {
            name: config.name,
            description: config.description,
            enabled: config.enabled,
            created_at: config.updated_at,
            updated_at: config.updated_at,
        },
        plugin: config.plugin_info,
        config: config.config,
    };

    match stage {
        PipelineStage::Transformation => {
            PipelineNode::Transformation(Transformation { node, order })
        }
        PipelineStage::Destination => PipelineNode::Destination(Destination::Webhook(node)),
        PipelineStage::DataImport => PipelineNode::DataImport(node),
        PipelineStage::SiteApp => PipelineNode::SiteApp(node),
        PipelineStage::ImportApp => PipelineNode::ImportApp(node),
    }
}

fn batch_export_destination(export: BatchExportRecord) -> BatchExportDestination {
    BatchExportDestination {
        id: export.id,
        meta: NodeMeta {
            name: export.name,
            description: Some(format!("{} batch export", export.destination.service_type)),
            enabled: !export.paused,
            created_at: export.created_at,
            updated_at: export.created_at,
        },
        service: export.destination,
        interval: export.interval,
    }
}
