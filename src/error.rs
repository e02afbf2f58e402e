//! Typed errors for routing and the gesture catalog

use thiserror::Error;

/// Errors raised by the navigation layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    /// No route entry matches the requested path
    #[error("no route matches '{path}'")]
    UnmatchedRoute { path: String },

    /// Two route entries declare the same path
    #[error("route '{path}' is declared more than once")]
    DuplicateRoute { path: String },

    /// A gesture card was requested for a position the catalog does not have
    #[error("gesture catalog has no entry at position {index} (length {len})")]
    MissingCatalogEntry { index: usize, len: usize },
}

/// Errors raised while loading or validating a gesture catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse YAML catalog: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unsupported catalog format '{0}' (expected .json, .yaml or .yml)")]
    UnsupportedFormat(String),

    #[error("gesture catalog is empty")]
    Empty,

    #[error("gesture #{index}: {reason}")]
    InvalidGesture { index: usize, reason: String },
}
