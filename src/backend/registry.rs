use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info, warn};

use super::SearchBackend;
use crate::error::{FacetdexError, Result};
use crate::models::{SearchQuery, SearchResponse};

/// Ordered set of search backends.
///
/// Searches go to the first registered backend; initialization and health
/// checks fan out to all of them.
#[derive(Default)]
pub struct BackendRegistry {
    backends: RwLock<Vec<Arc<dyn SearchBackend>>>,
}

impl BackendRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a backend. A backend with the same name is replaced in place.
    pub fn register(&self, backend: Arc<dyn SearchBackend>) {
        let mut backends = self.backends.write();
        let name = backend.name().to_string();
        match backends.iter().position(|b| b.name() == name) {
            Some(pos) => backends[pos] = backend,
            None => backends.push(backend),
        }
        info!(backend = %name, "registered search backend");
    }

    pub fn names(&self) -> Vec<String> {
        self.backends
            .read()
            .iter()
            .map(|b| b.name().to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.backends.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.backends.read().is_empty()
    }

    fn snapshot(&self) -> Vec<Arc<dyn SearchBackend>> {
        self.backends.read().clone()
    }

    /// Initialize every backend, stopping at the first failure
    pub fn initialize_all(&self) -> Result<()> {
        for backend in self.snapshot() {
            debug!(backend = backend.name(), "initializing search backend");
            backend.initialize()?;
        }
        Ok(())
    }

    /// Names of the backends that report unhealthy
    pub fn health_check(&self) -> Vec<String> {
        self.snapshot()
            .iter()
            .filter_map(|backend| {
                let status = backend.health_check();
                if status.is_healthy() {
                    None
                } else {
                    warn!(backend = backend.name(), ?status, "search backend unhealthy");
                    Some(backend.name().to_string())
                }
            })
            .collect()
    }

    /// Dispatch to the first registered backend
    pub fn search(&self, query: &SearchQuery) -> Result<SearchResponse> {
        let backend = self
            .backends
            .read()
            .first()
            .cloned()
            .ok_or(FacetdexError::NoBackend)?;
        backend.search(query)
    }
}
