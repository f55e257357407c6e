use std::collections::HashMap;

use crate::models::{Facet, FacetItem, FacetSummary, Record, SearchFacet};

/// Incrementally counts facet values over a result set.
///
/// Every occurrence counts: a record listing the same format on two
/// resources contributes two to that format. Display items keep the order in
/// which values were first seen.
pub struct FacetAggregator {
    summary: FacetSummary,
    /// Per facet: value name -> position in the display item list
    positions: HashMap<Facet, HashMap<String, usize>>,
}

impl Default for FacetAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl FacetAggregator {
    pub fn new() -> Self {
        Self {
            summary: FacetSummary::empty(),
            positions: HashMap::new(),
        }
    }

    fn bump(&mut self, facet: Facet, name: &str, display_name: &str) {
        *self
            .summary
            .facets
            .entry(facet)
            .or_default()
            .entry(name.to_string())
            .or_insert(0) += 1;

        let search_facet = self
            .summary
            .search_facets
            .entry(facet)
            .or_insert_with(|| SearchFacet::empty(facet));
        let positions = self.positions.entry(facet).or_default();
        match positions.get(name) {
            Some(&pos) => search_facet.items[pos].count += 1,
            None => {
                positions.insert(name.to_string(), search_facet.items.len());
                search_facet.items.push(FacetItem {
                    name: name.to_string(),
                    display_name: display_name.to_string(),
                    count: 1,
                });
            }
        }
    }

    /// Count the facet values of one record
    pub fn add(&mut self, record: &Record) {
        for group in &record.groups {
            self.bump(Facet::Groups, &group.name, &group.name);
        }
        for resource in &record.resources {
            self.bump(Facet::ResFormat, &resource.format, &resource.format);
        }
        if let Some(org) = &record.organization {
            self.bump(Facet::Organization, &org.name, org.display_name());
        }
    }

    pub fn finish(self) -> FacetSummary {
        self.summary
    }
}

/// Summarize facet values over `records`
pub fn aggregate<'a, I>(records: I) -> FacetSummary
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut aggregator = FacetAggregator::new();
    for record in records {
        aggregator.add(record);
    }
    aggregator.finish()
}
