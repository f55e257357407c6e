//! Facet filtering and summarization over catalog records.

pub mod aggregator;
pub mod matcher;

pub use aggregator::{aggregate, FacetAggregator};
pub use matcher::{facet_matches, matches};
