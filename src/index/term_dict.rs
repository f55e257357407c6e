//! Term dictionary using FST (Finite State Transducer)
//!
//! The FST maps each term to an index into a parallel postings array.

use std::collections::BTreeMap;

use fst::{Map, MapBuilder};
use roaring::RoaringBitmap;

use crate::error::{FacetdexError, Result};

/// Immutable term -> postings dictionary backed by FST
pub struct TermDictionary {
    /// FST mapping term -> index in postings array
    fst: Map<Vec<u8>>,
    /// Postings for each term (parallel to FST output values)
    postings: Vec<RoaringBitmap>,
}

impl TermDictionary {
    /// Look up a term and return its postings
    pub fn get(&self, term: &str) -> Option<&RoaringBitmap> {
        self.fst
            .get(term.as_bytes())
            .map(|idx| &self.postings[idx as usize])
    }

    /// Get the number of terms
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}

/// Accumulates postings during a build, then freezes into a dictionary
#[derive(Debug, Default)]
pub struct TermDictionaryBuilder {
    /// Kept sorted so the FST can be built in one pass
    terms: BTreeMap<String, RoaringBitmap>,
}

impl TermDictionaryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `ordinal` contains `term`
    pub fn add(&mut self, term: String, ordinal: u32) {
        self.terms.entry(term).or_default().insert(ordinal);
    }

    /// Build the term dictionary
    pub fn build(self) -> Result<TermDictionary> {
        let mut fst_builder = MapBuilder::memory();
        let mut postings = Vec::with_capacity(self.terms.len());

        for (idx, (term, bitmap)) in self.terms.into_iter().enumerate() {
            fst_builder
                .insert(term.as_bytes(), idx as u64)
                .map_err(|e| FacetdexError::Index(e.to_string()))?;
            postings.push(bitmap);
        }

        let fst_data = fst_builder
            .into_inner()
            .map_err(|e| FacetdexError::Index(e.to_string()))?;
        let fst = Map::new(fst_data).map_err(|e| FacetdexError::Index(e.to_string()))?;

        Ok(TermDictionary { fst, postings })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> TermDictionary {
        let mut builder = TermDictionaryBuilder::new();
        builder.add("park".to_string(), 0);
        builder.add("park".to_string(), 2);
        builder.add("parkeer".to_string(), 1);
        builder.add("bike".to_string(), 1);
        builder.build().unwrap()
    }

    #[test]
    fn test_lookup() {
        let dict = dictionary();
        assert_eq!(dict.len(), 3);
        assert!(dict.get("bike").is_some());
        assert!(dict.get("car").is_none());

        let park = dict.get("park").unwrap();
        assert_eq!(park.iter().collect::<Vec<_>>(), vec![0, 2]);
        assert!(dict.get("pa").is_none());
    }

    #[test]
    fn test_empty_builder() {
        let dict = TermDictionaryBuilder::new().build().unwrap();
        assert!(dict.is_empty());
        assert!(dict.get("anything").is_none());
    }
}
