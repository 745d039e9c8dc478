//! Error types for node normalization

use thiserror::Error;

use crate::domain::stage::{PipelineBackend, PipelineStage};

/// Result type alias for normalization operations
pub type Result<T> = std::result::Result<T, NodeError>;

/// Errors that can occur while classifying or normalizing records
#[derive(Debug, Error)]
pub enum NodeError {
    /// The requested stage cannot be built from a record of this backend
    #[error("cannot build a {stage} node from a {backend} record")]
    IncompatibleStage {
        /// Backend of the record that was supplied
        backend: PipelineBackend,
        /// Stage that was requested
        stage: PipelineStage,
    },

    /// A record was classified but does not match the expected shape
    #[error("invalid {kind} record: {source}")]
    InvalidRecord {
        /// Backend the record was classified as
        kind: PipelineBackend,
        /// Underlying deserialization error
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown pipeline stage: {0}")]
    UnknownStage(String),

    #[error("unknown pipeline backend: {0}")]
    UnknownBackend(String),

    #[error("unknown batch export interval: {0}")]
    UnknownInterval(String),
}

impl NodeError {
    /// Create an incompatible stage error
    pub fn incompatible(backend: PipelineBackend, stage: PipelineStage) -> Self {
        Self::IncompatibleStage { backend, stage }
    }

    /// Check if this error is a stage/backend mismatch
    pub fn is_incompatible_stage(&self) -> bool {
        matches!(self, Self::IncompatibleStage { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incompatible_stage_message() {
        let err = NodeError::incompatible(PipelineBackend::BatchExport, PipelineStage::Transformation);
        assert!(err.is_incompatible_stage());
        assert_eq!(
            err.to_string(),
            "cannot build a transformation node from a batch_export record"
        );
    }

    #[test]
    fn test_unknown_stage_is_not_incompatible() {
        let err = NodeError::UnknownStage("sink".to_string());
        assert!(!err.is_incompatible_stage());
        assert_eq!(err.to_string(), "unknown pipeline stage: sink");
    }
}
