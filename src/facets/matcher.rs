use crate::models::{Facet, FacetFilters, Record};

/// Whether `record` carries `value` for `facet`.
///
/// Groups and formats are multi-valued: any member may satisfy the filter.
/// The publisher is single-valued and must be present.
pub fn facet_matches(record: &Record, facet: Facet, value: &str) -> bool {
    match facet {
        Facet::Groups => record.groups.iter().any(|g| g.name == value),
        Facet::ResFormat => record.resources.iter().any(|r| r.format == value),
        Facet::Organization => record
            .organization
            .as_ref()
            .is_some_and(|org| org.name == value),
    }
}

/// Whether `record` satisfies every filter in `filters`
pub fn matches(record: &Record, filters: &FacetFilters) -> bool {
    filters
        .iter()
        .all(|(facet, value)| facet_matches(record, facet, value))
}
