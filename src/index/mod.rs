//! Inverted index over the free-text fields of a snapshot.
//!
//! Records are addressed by their ordinal in the snapshot; postings are
//! roaring bitmaps of ordinals, looked up through an FST term dictionary.
//! An index is built once and never mutated.

pub mod field_index;
pub mod term_dict;
pub mod text_index;

pub use field_index::{FieldIndex, TextField};
pub use term_dict::{TermDictionary, TermDictionaryBuilder};
pub use text_index::TextIndex;

/// Position of a record in the snapshot
pub type Ordinal = u32;
