use std::collections::BTreeSet;
use std::sync::Arc;

use roaring::RoaringBitmap;
use tracing::debug;

use super::field_index::{FieldIndex, TextField};
use super::Ordinal;
use crate::error::{FacetdexError, Result};
use crate::models::{Record, RecordId};
use crate::tokenizer::Tokenizer;

/// Inverted index over the title and notes of every record in a snapshot
pub struct TextIndex {
    /// Ordinal -> record identifier, in snapshot order
    ids: Vec<RecordId>,
    title: FieldIndex,
    notes: FieldIndex,
    tokenizer: Arc<Tokenizer>,
}

impl TextIndex {
    /// Build a fresh index over `records`
    pub fn build(records: &[Record], tokenizer: Arc<Tokenizer>) -> Result<Self> {
        if u32::try_from(records.len()).is_err() {
            return Err(FacetdexError::Index(format!(
                "snapshot of {} records exceeds the index capacity",
                records.len()
            )));
        }
        let ordinals = || (0..).zip(records.iter());

        let title = FieldIndex::build(
            TextField::Title,
            &tokenizer,
            ordinals().map(|(ord, r): (Ordinal, &Record)| (ord, r.title.as_str())),
        )?;
        let notes = FieldIndex::build(
            TextField::Notes,
            &tokenizer,
            ordinals().map(|(ord, r): (Ordinal, &Record)| (ord, r.notes_text())),
        )?;

        debug!(
            records = records.len(),
            title_terms = title.term_count(),
            notes_terms = notes.term_count(),
            "text index built"
        );

        Ok(Self {
            ids: records.iter().map(|r| r.id.clone()).collect(),
            title,
            notes,
            tokenizer,
        })
    }

    /// Number of indexed records
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn term_count(&self, field: TextField) -> usize {
        self.field(field).term_count()
    }

    fn field(&self, field: TextField) -> &FieldIndex {
        match field {
            TextField::Title => &self.title,
            TextField::Notes => &self.notes,
        }
    }

    /// Analyze free text into one clause of accepted forms per query word
    fn clauses(&self, text: &str) -> Vec<BTreeSet<String>> {
        self.tokenizer
            .query_terms(text)
            .iter()
            .map(|term| self.tokenizer.expand(term))
            .collect()
    }

    fn ids_of(&self, hits: &RoaringBitmap) -> Vec<RecordId> {
        hits.iter()
            .filter_map(|ord| self.ids.get(ord as usize).cloned())
            .collect()
    }

    /// Records whose `field` matches every word of `text`
    pub fn search_field(&self, field: TextField, text: &str) -> Vec<RecordId> {
        let clauses = self.clauses(text);
        self.ids_of(&self.field(field).all_of(&clauses))
    }

    /// Identifiers matching `text` in the notes, followed by those matching
    /// in the title. A record matching both fields appears twice; callers
    /// filter with set membership.
    pub fn search(&self, text: &str) -> Vec<RecordId> {
        let clauses = self.clauses(text);
        if clauses.is_empty() {
            return Vec::new();
        }
        let mut ids = self.ids_of(&self.notes.all_of(&clauses));
        ids.extend(self.ids_of(&self.title.all_of(&clauses)));
        ids
    }
}
