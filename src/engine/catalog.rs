use std::sync::Arc;

use arc_swap::ArcSwapOption;
use tracing::{debug, info, instrument, warn};

use super::executor::QueryExecutor;
use super::state::CatalogState;
use crate::config::SearchConfig;
use crate::error::{FacetdexError, Result};
use crate::metrics::SearchMetrics;
use crate::models::{FacetFilters, SearchQuery, SearchResponse};
use crate::snapshot::{HealthStatus, SnapshotLoader};
use crate::tokenizer::Tokenizer;

/// In-memory catalog search over a JSON snapshot.
///
/// Queries read the live [`CatalogState`] without locking. Loading builds a
/// new state and swaps it in; queries already running keep the state they
/// started with.
pub struct SearchCatalog {
    config: SearchConfig,
    loader: SnapshotLoader,
    tokenizer: Arc<Tokenizer>,
    state: ArcSwapOption<CatalogState>,
    metrics: Arc<SearchMetrics>,
}

impl SearchCatalog {
    /// Create an empty catalog; call [`SearchCatalog::initialize`] before searching
    pub fn new(config: SearchConfig) -> Result<Self> {
        let metrics = Arc::new(SearchMetrics::new()?);
        Self::with_metrics(config, metrics)
    }

    pub fn with_metrics(config: SearchConfig, metrics: Arc<SearchMetrics>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            loader: SnapshotLoader::from_config(&config),
            tokenizer: Arc::new(Tokenizer::new(&config.tokenizer)),
            state: ArcSwapOption::empty(),
            config,
            metrics,
        })
    }

    /// Create a catalog and load its snapshot
    pub fn open(config: SearchConfig) -> Result<Self> {
        let catalog = Self::new(config)?;
        catalog.initialize()?;
        Ok(catalog)
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn metrics(&self) -> &Arc<SearchMetrics> {
        &self.metrics
    }

    /// Load the snapshot and build its index
    pub fn initialize(&self) -> Result<()> {
        let state = self.build_state()?;
        info!(
            records = state.len(),
            path = %self.loader.path().display(),
            "search catalog initialized"
        );
        self.swap(state);
        Ok(())
    }

    /// Re-read the snapshot and swap it in. On failure the live state is kept.
    pub fn reload(&self) -> Result<()> {
        match self.build_state() {
            Ok(state) => {
                let previous = self.state.load_full().map(|s| s.len());
                info!(records = state.len(), previous, "search catalog reloaded");
                self.swap(state);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, kind = e.kind(), "reload failed, keeping live snapshot");
                Err(e)
            }
        }
    }

    fn build_state(&self) -> Result<CatalogState> {
        let snapshot = self.loader.load()?;
        CatalogState::build(snapshot, self.tokenizer.clone())
    }

    fn swap(&self, state: CatalogState) {
        self.metrics.record_load(state.len());
        self.state.store(Some(Arc::new(state)));
    }

    /// Currently live state, if any
    pub fn state(&self) -> Option<Arc<CatalogState>> {
        self.state.load_full()
    }

    pub fn is_initialized(&self) -> bool {
        self.state.load().is_some()
    }

    /// Check that the snapshot file is still on disk
    pub fn health_check(&self) -> HealthStatus {
        let status = self.loader.check();
        self.metrics.set_healthy(status.is_healthy());
        status
    }

    /// Build facet filters from `(name, value)` pairs. Unknown facet names
    /// fail with `UnsupportedFacet` and count as a rejected search.
    pub fn parse_filters<I, N, V>(&self, pairs: I) -> Result<FacetFilters>
    where
        I: IntoIterator<Item = (N, V)>,
        N: AsRef<str>,
        V: Into<String>,
    {
        let mut filters = FacetFilters::new();
        for (name, value) in pairs {
            if let Err(e) = filters.insert(name.as_ref(), value) {
                warn!(error = %e, "rejected search filter");
                self.metrics.record_search_error(e.kind());
                return Err(e);
            }
        }
        Ok(filters)
    }

    /// Run a search against the live snapshot
    #[instrument(skip_all, fields(q = query.q.as_deref().unwrap_or_default()))]
    pub fn search(&self, query: &SearchQuery) -> Result<SearchResponse> {
        let Some(state) = self.state.load_full() else {
            let err = FacetdexError::NotInitialized;
            self.metrics.record_search_error(err.kind());
            return Err(err);
        };

        let result = QueryExecutor::execute(&state, query);
        let kind = if query.text().is_some() { "text" } else { "browse" };
        self.metrics
            .record_search(kind, result.stats.execution_time_us as f64 / 1_000_000.0);

        debug!(
            kind,
            text_hits = result.stats.text_hits,
            matched = result.stats.docs_matched,
            returned = result.stats.page_len,
            elapsed_us = result.stats.execution_time_us,
            "search complete"
        );
        Ok(result.response)
    }
}
