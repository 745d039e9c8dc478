//! Core domain types
//!
//! This module contains the pipeline node model rendered by the pipeline UI:
//! the stage and backend discriminants, delivery intervals, the descriptors
//! copied from backend records, and the node variants themselves.

pub mod descriptor;
pub mod interval;
pub mod node;
pub mod stage;
