//! Pipenode Core
//!
//! Core types and normalization for pipeline nodes.
//!
//! This crate contains:
//! - Domain types: the unified pipeline node and its stage/backend discriminants
//! - DTOs: raw plugin config, batch export and hog function records
//! - Normalizer: conversion from raw records into pipeline nodes

pub mod domain;
pub mod dto;
pub mod error;
pub mod normalize;

pub use domain::node::PipelineNode;
pub use domain::stage::{PipelineBackend, PipelineStage};
pub use dto::SourceRecord;
pub use error::{NodeError, Result};
pub use normalize::{normalize, normalize_all};
