use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::facets::{FacetCounts, SearchFacets};
use super::record::Record;

/// Keys of the result body that the engine owns; copies of them found in a
/// snapshot file are discarded so they cannot shadow computed values.
pub const RESERVED_RESULT_KEYS: [&str; 4] = ["count", "results", "facets", "search_facets"];

/// Snapshot file layout: `{"result": {"results": [...]}, ...}`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SnapshotDocument {
    pub result: SnapshotBody,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SnapshotBody {
    pub results: Vec<Record>,
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of a search response
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchResult {
    /// Matches after filtering, before paging
    pub count: usize,
    /// The requested page
    pub results: Vec<Record>,
    pub facets: FacetCounts,
    pub search_facets: SearchFacets,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Result envelope returned for every query
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub result: SearchResult,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SearchResponse {
    pub fn count(&self) -> usize {
        self.result.count
    }

    pub fn records(&self) -> &[Record] {
        &self.result.results
    }

    pub fn ids(&self) -> Vec<&str> {
        self.result.results.iter().map(|r| r.id.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_snapshot_document_keeps_envelope_fields() {
        let doc: SnapshotDocument = serde_json::from_value(json!({
            "help": "package_search",
            "success": true,
            "result": {
                "count": 1,
                "sort": "score desc",
                "results": [{"id": "a", "title": "A", "groups": [], "resources": []}]
            }
        }))
        .unwrap();

        assert_eq!(doc.result.results.len(), 1);
        assert_eq!(doc.result.count, Some(1));
        assert_eq!(doc.result.extra.get("sort"), Some(&json!("score desc")));
        assert_eq!(doc.extra.get("success"), Some(&json!(true)));
    }

    #[test]
    fn test_missing_results_is_an_error() {
        let parsed = serde_json::from_value::<SnapshotDocument>(json!({"result": {}}));
        assert!(parsed.is_err());
    }
}
