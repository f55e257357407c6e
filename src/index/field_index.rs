use std::collections::BTreeSet;
use std::fmt;

use roaring::RoaringBitmap;

use super::term_dict::{TermDictionary, TermDictionaryBuilder};
use super::Ordinal;
use crate::error::Result;
use crate::tokenizer::Tokenizer;

/// Free-text fields of a record
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextField {
    Title,
    Notes,
}

impl TextField {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextField::Title => "title",
            TextField::Notes => "notes",
        }
    }
}

impl fmt::Display for TextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Postings for a single field
pub struct FieldIndex {
    field: TextField,
    terms: TermDictionary,
}

impl FieldIndex {
    /// Index `(ordinal, text)` pairs for one field
    pub fn build<'a, I>(field: TextField, tokenizer: &Tokenizer, docs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Ordinal, &'a str)>,
    {
        let mut builder = TermDictionaryBuilder::new();
        for (ordinal, text) in docs {
            for term in tokenizer.unique_terms(text) {
                builder.add(term, ordinal);
            }
        }
        Ok(Self {
            field,
            terms: builder.build()?,
        })
    }

    pub fn field(&self) -> TextField {
        self.field
    }

    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Records containing any of `forms`
    pub fn any_of(&self, forms: &BTreeSet<String>) -> RoaringBitmap {
        let mut hits = RoaringBitmap::new();
        for form in forms {
            if let Some(postings) = self.terms.get(form) {
                hits |= postings;
            }
        }
        hits
    }

    /// Records matching every clause, where a clause matches when any of its
    /// forms is present. No clauses match nothing.
    pub fn all_of(&self, clauses: &[BTreeSet<String>]) -> RoaringBitmap {
        let mut clauses = clauses.iter();
        let Some(first) = clauses.next() else {
            return RoaringBitmap::new();
        };
        let mut hits = self.any_of(first);
        for clause in clauses {
            if hits.is_empty() {
                break;
            }
            hits &= self.any_of(clause);
        }
        hits
    }
}
