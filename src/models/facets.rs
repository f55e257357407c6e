use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::FacetdexError;

/// Facet dimension a catalog can be filtered and summarized by
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Facet {
    #[serde(rename = "groups", alias = "group")]
    Groups,
    #[serde(rename = "res_format", alias = "resource")]
    ResFormat,
    #[serde(rename = "organization", alias = "publisher")]
    Organization,
}

impl Facet {
    pub const ALL: [Facet; 3] = [Facet::Groups, Facet::ResFormat, Facet::Organization];

    /// Wire name used in filters and result keys
    pub fn as_str(&self) -> &'static str {
        match self {
            Facet::Groups => "groups",
            Facet::ResFormat => "res_format",
            Facet::Organization => "organization",
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Facet {
    type Err = FacetdexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "groups" | "group" => Ok(Facet::Groups),
            "res_format" | "resource" => Ok(Facet::ResFormat),
            "organization" | "publisher" => Ok(Facet::Organization),
            other => Err(FacetdexError::UnsupportedFacet(other.to_string())),
        }
    }
}

/// Occurrence counts per facet value
pub type FacetCounts = BTreeMap<Facet, BTreeMap<String, u64>>;

/// Display facets, keyed by facet
pub type SearchFacets = BTreeMap<Facet, SearchFacet>;

/// One drill-down entry
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetItem {
    pub name: String,
    pub display_name: String,
    pub count: u64,
}

/// Ordered drill-down entries for one facet, in first-seen order
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFacet {
    pub title: String,
    pub items: Vec<FacetItem>,
}

impl SearchFacet {
    pub fn empty(facet: Facet) -> Self {
        Self {
            title: facet.as_str().to_string(),
            items: Vec::new(),
        }
    }

    pub fn item(&self, name: &str) -> Option<&FacetItem> {
        self.items.iter().find(|item| item.name == name)
    }
}

/// Facet counts and display facets computed over one result set
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FacetSummary {
    pub facets: FacetCounts,
    pub search_facets: SearchFacets,
}

impl FacetSummary {
    /// Summary with every facet present and empty
    pub fn empty() -> Self {
        Self {
            facets: Facet::ALL.iter().map(|f| (*f, BTreeMap::new())).collect(),
            search_facets: Facet::ALL
                .iter()
                .map(|f| (*f, SearchFacet::empty(*f)))
                .collect(),
        }
    }

    /// Keep only the facets named in `fields`, by wire name or alias.
    /// Names that are not facets select nothing.
    pub fn retain_fields<S: AsRef<str>>(&mut self, fields: &[S]) {
        let selected: Vec<Facet> = fields
            .iter()
            .filter_map(|f| f.as_ref().parse().ok())
            .collect();
        self.facets.retain(|facet, _| selected.contains(facet));
        self.search_facets.retain(|facet, _| selected.contains(facet));
    }

    pub fn count(&self, facet: Facet, value: &str) -> Option<u64> {
        self.facets.get(&facet)?.get(value).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facet_names_and_aliases() {
        assert_eq!("groups".parse::<Facet>().unwrap(), Facet::Groups);
        assert_eq!("group".parse::<Facet>().unwrap(), Facet::Groups);
        assert_eq!("resource".parse::<Facet>().unwrap(), Facet::ResFormat);
        assert_eq!("publisher".parse::<Facet>().unwrap(), Facet::Organization);
        assert!(matches!(
            "license".parse::<Facet>(),
            Err(FacetdexError::UnsupportedFacet(name)) if name == "license"
        ));
    }

    #[test]
    fn test_counts_serialize_with_wire_keys() {
        let mut summary = FacetSummary::empty();
        summary
            .facets
            .get_mut(&Facet::ResFormat)
            .unwrap()
            .insert("csv".to_string(), 2);

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["facets"]["res_format"]["csv"], 2);
        assert_eq!(json["search_facets"]["organization"]["title"], "organization");
        assert!(json["search_facets"]["groups"]["items"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_retain_fields() {
        let mut summary = FacetSummary::empty();
        summary.retain_fields(&["groups", "unknown"]);
        assert_eq!(summary.facets.keys().collect::<Vec<_>>(), vec![&Facet::Groups]);
        assert_eq!(
            summary.search_facets.keys().collect::<Vec<_>>(),
            vec![&Facet::Groups]
        );
    }

    #[test]
    fn test_retain_fields_accepts_aliases() {
        let mut summary = FacetSummary::empty();
        summary.retain_fields(&["group", "publisher"]);
        assert_eq!(
            summary.facets.keys().collect::<Vec<_>>(),
            vec![&Facet::Groups, &Facet::Organization]
        );
        assert_eq!(
            summary.search_facets.keys().collect::<Vec<_>>(),
            vec![&Facet::Groups, &Facet::Organization]
        );

        let mut summary = FacetSummary::empty();
        summary.retain_fields(&["resource"]);
        assert_eq!(summary.facets.keys().collect::<Vec<_>>(), vec![&Facet::ResFormat]);
    }
}
