//! Pipeline stage and backend discriminants

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::NodeError;

/// The pipeline phase a node belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PipelineStage {
    #[serde(rename = "transformation")]
    Transformation,
    #[serde(rename = "destination")]
    Destination,
    #[serde(rename = "data-import")]
    DataImport,
    #[serde(rename = "site-app")]
    SiteApp,
    #[serde(rename = "legacy-source")]
    ImportApp,
}

impl PipelineStage {
    pub const ALL: [PipelineStage; 5] = [
        PipelineStage::Transformation,
        PipelineStage::Destination,
        PipelineStage::DataImport,
        PipelineStage::SiteApp,
        PipelineStage::ImportApp,
    ];

    /// Wire name of the stage, also used in URLs
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineStage::Transformation => "transformation",
            PipelineStage::Destination => "destination",
            PipelineStage::DataImport => "data-import",
            PipelineStage::SiteApp => "site-app",
            PipelineStage::ImportApp => "legacy-source",
        }
    }

    /// Whether a node of this stage can be built on the given backend
    ///
    /// Plugins can back every stage; batch exports and hog functions only
    /// ever produce destinations.
    pub fn accepts(&self, backend: PipelineBackend) -> bool {
        match backend {
            PipelineBackend::Plugin => true,
            PipelineBackend::BatchExport | PipelineBackend::HogFunction => {
                *self == PipelineStage::Destination
            }
        }
    }
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PipelineStage {
    type Err = NodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PipelineStage::ALL
            .into_iter()
            .find(|stage| stage.as_str() == s)
            .ok_or_else(|| NodeError::UnknownStage(s.to_string()))
    }
}

/// The mechanism implementing a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineBackend {
    Plugin,
    BatchExport,
    HogFunction,
}

impl PipelineBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineBackend::Plugin => "plugin",
            PipelineBackend::BatchExport => "batch_export",
            PipelineBackend::HogFunction => "hog_function",
        }
    }
}

impl std::fmt::Display for PipelineBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PipelineBackend {
    type Err = NodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plugin" => Ok(PipelineBackend::Plugin),
            "batch_export" => Ok(PipelineBackend::BatchExport),
            "hog_function" => Ok(PipelineBackend::HogFunction),
            other => Err(NodeError::UnknownBackend(other.to_string())),
        }
    }
}
