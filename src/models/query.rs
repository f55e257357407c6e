use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::facets::Facet;
use crate::error::{FacetdexError, Result};

/// Accepted value per facet.
///
/// A `null` value in the wire form imposes no constraint and is dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, Option<String>>")]
pub struct FacetFilters(BTreeMap<Facet, String>);

impl FacetFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a filter by wire name
    pub fn insert(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        let facet: Facet = name.parse()?;
        self.0.insert(facet, value.into());
        Ok(())
    }

    pub fn set(&mut self, facet: Facet, value: impl Into<String>) {
        self.0.insert(facet, value.into());
    }

    pub fn get(&self, facet: Facet) -> Option<&str> {
        self.0.get(&facet).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Facet, &str)> {
        self.0.iter().map(|(facet, value)| (*facet, value.as_str()))
    }
}

impl TryFrom<BTreeMap<String, Option<String>>> for FacetFilters {
    type Error = FacetdexError;

    fn try_from(raw: BTreeMap<String, Option<String>>) -> Result<Self> {
        let mut filters = FacetFilters::new();
        for (name, value) in raw {
            let facet: Facet = name.parse()?;
            if let Some(value) = value {
                filters.set(facet, value);
            }
        }
        Ok(filters)
    }
}

/// Search request against the catalog
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Free text matched against title and notes
    #[serde(default)]
    pub q: Option<String>,
    /// Facet drill-down
    #[serde(default, rename = "facet")]
    pub filters: FacetFilters,
    /// Restrict returned facets to these wire names
    #[serde(default)]
    pub facet_fields: Option<Vec<String>>,
    /// Offset of the first returned record
    #[serde(default)]
    pub start: Option<usize>,
    /// Maximum number of returned records
    #[serde(default)]
    pub rows: Option<usize>,
}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, q: impl Into<String>) -> Self {
        self.q = Some(q.into());
        self
    }

    /// Add a facet filter; fails for facet names the engine does not know
    pub fn with_filter(mut self, name: &str, value: impl Into<String>) -> Result<Self> {
        self.filters.insert(name, value)?;
        Ok(self)
    }

    pub fn with_facet(mut self, facet: Facet, value: impl Into<String>) -> Self {
        self.filters.set(facet, value);
        self
    }

    pub fn with_facet_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.facet_fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_start(mut self, start: usize) -> Self {
        self.start = Some(start);
        self
    }

    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = Some(rows);
        self
    }

    /// Free text, if present and not blank
    pub fn text(&self) -> Option<&str> {
        self.q.as_deref().filter(|q| !q.trim().is_empty())
    }
}
