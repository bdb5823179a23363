//! Error types shared by the extractor and the output writer

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors raised while extracting parameters from a test tree
#[derive(Debug, Error)]
pub enum ExtractError {
    /// A collected test file could not be read (missing, permissions, non UTF-8)
    #[error("Failed to read test file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while rendering or persisting the parameter index
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to serialize parameters to JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to serialize parameters to YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to write output file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Per-line failure while splitting a `key=value` pair
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("missing '=' separator")]
    MissingSeparator,
}
