//! Error types for Kinship Core

use std::path::PathBuf;

use thiserror::Error;

use crate::family::FamilyRole;
use crate::limits::ValidationError;

/// Result type alias using Kinship's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Kinship error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Unknown {role} '{name}': not declared in people")]
    DanglingReference { name: String, role: FamilyRole },

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}
