//! Query engine: text lookup, facet filtering, aggregation and paging over
//! an immutable snapshot, plus the catalog that owns and refreshes it.

pub mod catalog;
pub mod executor;
pub mod state;

pub use catalog::SearchCatalog;
pub use executor::{paginate, QueryExecutor, QueryResult, QueryStats};
pub use state::CatalogState;
