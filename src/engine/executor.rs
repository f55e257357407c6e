//! Query executor for running searches against a catalog state

use std::collections::HashSet;
use std::time::Instant;

use super::state::CatalogState;
use crate::facets::{aggregate, matches};
use crate::models::{Record, SearchQuery, SearchResponse, SearchResult};

/// Execution statistics
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryStats {
    /// Identifiers returned by the text index, duplicates included
    pub text_hits: usize,
    /// Records left after text and facet filtering
    pub docs_matched: usize,
    /// Records in the returned page
    pub page_len: usize,
    /// Query execution time in microseconds
    pub execution_time_us: u64,
}

/// Query execution result
#[derive(Debug)]
pub struct QueryResult {
    pub response: SearchResponse,
    pub stats: QueryStats,
}

/// Stateless executor; every search is a function of the state and query
pub struct QueryExecutor;

impl QueryExecutor {
    /// Execute `query` against `state`
    pub fn execute(state: &CatalogState, query: &SearchQuery) -> QueryResult {
        let start = Instant::now();
        let records = &state.snapshot.records;
        let mut stats = QueryStats::default();

        let candidates: Vec<&Record> = match query.text() {
            Some(text) => {
                let ids = state.index.search(text);
                stats.text_hits = ids.len();
                let hits: HashSet<&str> = ids.iter().map(String::as_str).collect();
                records
                    .iter()
                    .filter(|r| hits.contains(r.id.as_str()))
                    .collect()
            }
            None => records.iter().collect(),
        };

        let filtered: Vec<&Record> = candidates
            .into_iter()
            .filter(|r| matches(r, &query.filters))
            .collect();
        stats.docs_matched = filtered.len();

        let mut summary = aggregate(filtered.iter().copied());
        if let Some(fields) = &query.facet_fields {
            summary.retain_fields(fields);
        }

        let page: Vec<Record> = paginate(&filtered, query.start, query.rows)
            .iter()
            .map(|r| (*r).clone())
            .collect();
        stats.page_len = page.len();
        stats.execution_time_us = start.elapsed().as_micros() as u64;

        let response = SearchResponse {
            result: SearchResult {
                count: filtered.len(),
                results: page,
                facets: summary.facets,
                search_facets: summary.search_facets,
                extra: state.snapshot.body_extra.clone(),
            },
            extra: state.snapshot.extra.clone(),
        };

        QueryResult { response, stats }
    }
}

/// Slice `items` to `[start, start + rows)`, or to the end when `rows` is
/// absent. Offsets past the end give an empty page.
pub fn paginate<T>(items: &[T], start: Option<usize>, rows: Option<usize>) -> &[T] {
    let start = start.unwrap_or(0).min(items.len());
    let end = match rows {
        Some(rows) => start.saturating_add(rows).min(items.len()),
        None => items.len(),
    };
    &items[start..end]
}
