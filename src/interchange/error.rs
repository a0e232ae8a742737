//! Error types for interchange operations.

use thiserror::Error;

use crate::base::InvalidDescriptor;

/// Errors that can occur while loading or saving a test plan.
#[derive(Debug, Error)]
pub enum InterchangeError {
    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing or serialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A descriptor that fails validation, or that cannot share the plan.
    #[error(transparent)]
    Descriptor(#[from] InvalidDescriptor),
}
