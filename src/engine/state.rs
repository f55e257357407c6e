use std::sync::Arc;

use crate::error::Result;
use crate::index::TextIndex;
use crate::snapshot::Snapshot;
use crate::tokenizer::Tokenizer;

/// A snapshot and the text index built from it.
///
/// Never mutated after construction; a refresh builds a new value and swaps
/// it in whole.
pub struct CatalogState {
    pub snapshot: Snapshot,
    pub index: TextIndex,
}

impl CatalogState {
    pub fn build(snapshot: Snapshot, tokenizer: Arc<Tokenizer>) -> Result<Self> {
        let index = TextIndex::build(&snapshot.records, tokenizer)?;
        Ok(Self { snapshot, index })
    }

    pub fn len(&self) -> usize {
        self.snapshot.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot.is_empty()
    }
}
