//! Error types for synchronization.
//!
//! Lookup misses are not errors; they end up in the
//! [`SyncReport`](crate::report::SyncReport). What remains here are failures
//! the engine cannot work around: the host rejecting an operation, the
//! profile text being unreadable, and configuration or snapshot I/O.

use thiserror::Error;

/// Failure reported by the host tree for a single operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// The node was removed from the tree.
    #[error("node {0} is no longer attached")]
    Detached(String),

    /// The node cannot perform the requested operation.
    #[error("node {node} does not support {operation}")]
    Unsupported {
        node: String,
        operation: &'static str,
    },
}

/// Errors that abort a synchronization run.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The host tree rejected an operation.
    #[error("host error: {0}")]
    Host(#[from] HostError),

    /// The profile text could not be read; nothing was parsed or changed.
    #[error("profile text unavailable: {0}")]
    SourceUnavailable(String),

    /// File I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A form snapshot is structurally invalid.
    #[error("invalid form snapshot: {0}")]
    InvalidSnapshot(String),
}

/// Convenience alias for results with [`SyncError`].
pub type Result<T> = std::result::Result<T, SyncError>;
