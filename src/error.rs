//! Error types for layout loading, source reading, serialization and storage.
//!
//! Decoding itself has no error type: short lines and missing tag
//! occurrences degrade to omitted or empty fields instead.

use std::path::PathBuf;
use thiserror::Error;

/// A field layout that cannot be used for extraction.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Failed to read layout file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse layout YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Layout '{0}' defines no fields")]
    Empty(String),

    #[error("Field '{0}' is defined more than once")]
    DuplicateField(String),

    #[error("Field '{0}' has zero width")]
    ZeroWidth(String),

    #[error("Field #{0} has an empty name")]
    UnnamedField(usize),
}

/// Failure to discover or read legacy input files.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure to write or read a JSON record file.
#[derive(Debug, Error)]
pub enum SerializationError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure while talking to the record store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to connect to {url}: {source}")]
    Connection {
        url: String,
        #[source]
        source: r2d2::Error,
    },

    #[error("Failed to get a connection from the pool: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),

    #[error("Query failed: {0}")]
    Query(#[from] diesel::result::Error),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Serialization(#[from] SerializationError),
}
