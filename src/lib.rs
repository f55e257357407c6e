pub mod backend;
pub mod config;
pub mod engine;
pub mod error;
pub mod facets;
pub mod index;
pub mod metrics;
pub mod models;
pub mod snapshot;
pub mod tokenizer;

pub use backend::{BackendRegistry, SearchBackend};
pub use config::{CatalogConfig, SearchConfig, StopwordList, TokenizerConfig};
pub use engine::{CatalogState, SearchCatalog};
pub use error::{FacetdexError, Result};
pub use index::TextIndex;
pub use metrics::SearchMetrics;
pub use models::*;
pub use snapshot::{HealthStatus, Snapshot, SnapshotLoader};
pub use tokenizer::Tokenizer;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
