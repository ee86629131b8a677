//! Error types.
//!
//! Layout itself never fails: defunct children are skipped and mismatched
//! axis calls are no-ops. Errors only surface from configuration parsing and
//! from structural edits on the reference scene graph.

use thiserror::Error;

use crate::engine::NodeId;

/// Configuration could not be loaded or failed validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("spacing must be finite and non-negative, got {0}")]
    InvalidSpacing(f32),

    #[error("{side} padding must be finite and non-negative, got {value}")]
    InvalidPadding { side: &'static str, value: f32 },

    #[error("{field} must be finite and non-negative, got {value}")]
    InvalidDuration { field: &'static str, value: f32 },
}

/// Structural edit rejected by the scene graph.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SceneError {
    #[error("node {0} does not exist")]
    UnknownNode(NodeId),

    #[error("node {0} cannot be its own parent")]
    SelfParent(NodeId),

    #[error("parenting {child} under {parent} would create a cycle")]
    Cycle { parent: NodeId, child: NodeId },
}
