use std::path::PathBuf;

use thiserror::Error;

/// Main error type for facetdex operations
#[derive(Error, Debug)]
pub enum FacetdexError {
    #[error("Invalid configuration: {0}")]
    ConfigInvalid(String),

    #[error("Snapshot not found: {}", .0.display())]
    SnapshotUnavailable(PathBuf),

    #[error("Malformed snapshot {}: {source}", path.display())]
    SnapshotMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unsupported facet: {0}")]
    UnsupportedFacet(String),

    #[error("Search catalog has no snapshot loaded")]
    NotInitialized,

    #[error("No search backend registered")]
    NoBackend,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Index error: {0}")]
    Index(String),

    #[error("Metrics error: {0}")]
    Metrics(#[from] prometheus::Error),
}

/// Result type alias for facetdex operations
pub type Result<T> = std::result::Result<T, FacetdexError>;

impl FacetdexError {
    /// Errors that must keep the query path from being exposed
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            FacetdexError::ConfigInvalid(_)
                | FacetdexError::SnapshotUnavailable(_)
                | FacetdexError::SnapshotMalformed { .. }
        )
    }

    /// Stable label for logs and metrics
    pub fn kind(&self) -> &'static str {
        match self {
            FacetdexError::ConfigInvalid(_) => "config_invalid",
            FacetdexError::SnapshotUnavailable(_) => "snapshot_unavailable",
            FacetdexError::SnapshotMalformed { .. } => "snapshot_malformed",
            FacetdexError::UnsupportedFacet(_) => "unsupported_facet",
            FacetdexError::NotInitialized => "not_initialized",
            FacetdexError::NoBackend => "no_backend",
            FacetdexError::Io(_) => "io_error",
            FacetdexError::Index(_) => "index_error",
            FacetdexError::Metrics(_) => "metrics_error",
        }
    }
}
