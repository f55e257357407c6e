pub mod envelope;
pub mod facets;
pub mod query;
pub mod record;

pub use envelope::{SearchResponse, SearchResult, SnapshotBody, SnapshotDocument};
pub use facets::{Facet, FacetCounts, FacetItem, FacetSummary, SearchFacet, SearchFacets};
pub use query::{FacetFilters, SearchQuery};
pub use record::{Group, Organization, Record, RecordId, Resource};
