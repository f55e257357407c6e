//! Search backends and the registry that dispatches to them.

pub mod registry;

pub use registry::BackendRegistry;

use crate::engine::SearchCatalog;
use crate::error::Result;
use crate::models::{SearchQuery, SearchResponse};
use crate::snapshot::HealthStatus;

/// A catalog search implementation the registry can dispatch to
pub trait SearchBackend: Send + Sync {
    /// Stable name used in logs and health reports
    fn name(&self) -> &str;

    /// Load whatever the backend needs before it can answer queries
    fn initialize(&self) -> Result<()>;

    fn health_check(&self) -> HealthStatus;

    fn search(&self, query: &SearchQuery) -> Result<SearchResponse>;
}

impl SearchBackend for SearchCatalog {
    fn name(&self) -> &str {
        "in_memory_search"
    }

    fn initialize(&self) -> Result<()> {
        SearchCatalog::initialize(self)
    }

    fn health_check(&self) -> HealthStatus {
        SearchCatalog::health_check(self)
    }

    fn search(&self, query: &SearchQuery) -> Result<SearchResponse> {
        SearchCatalog::search(self, query)
    }
}
