use rust_stemmers::{Algorithm, Stemmer};
use std::collections::{BTreeSet, HashSet};
use stop_words::{get, LANGUAGE};
use unicode_segmentation::UnicodeSegmentation;

use super::variations::variations;
use crate::config::{StopwordList, TokenizerConfig};

/// Function words dropped by default. Content words such as "information"
/// or "open" must stay searchable in catalog titles.
pub const COMPACT_STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "by", "can", "for", "from", "have", "if", "in",
    "is", "it", "may", "not", "of", "on", "or", "tbd", "that", "the", "this", "to", "us", "we",
    "when", "will", "with", "yet", "you", "your",
];

/// A query word after normalization, before variant expansion
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryTerm {
    /// Lowercased surface form as typed
    pub surface: String,
    /// Indexed form (stemmed when stemming is enabled)
    pub term: String,
}

/// Text tokenizer with stemming and stopword removal
pub struct Tokenizer {
    config: TokenizerConfig,
    stemmer: Option<Stemmer>,
    stopwords: HashSet<String>,
}

impl Tokenizer {
    /// Create a new tokenizer from configuration
    pub fn new(config: &TokenizerConfig) -> Self {
        let stemmer = if config.stem {
            Some(Stemmer::create(Algorithm::English))
        } else {
            None
        };

        let stopwords = match (config.remove_stopwords, config.stopword_list) {
            (false, _) => HashSet::new(),
            (true, StopwordList::Compact) => {
                COMPACT_STOPWORDS.iter().map(|s| s.to_string()).collect()
            }
            (true, StopwordList::Iso) => get(LANGUAGE::English)
                .into_iter()
                .map(|s| s.to_lowercase())
                .collect(),
        };

        Self {
            config: config.clone(),
            stemmer,
            stopwords,
        }
    }

    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Lowercased words that survive the length and stopword filters
    fn surface_words<'a>(&'a self, text: &'a str) -> impl Iterator<Item = String> + 'a {
        text.unicode_words()
            .map(|word| {
                if self.config.lowercase {
                    word.to_lowercase()
                } else {
                    word.to_string()
                }
            })
            .filter(|token| {
                let len = token.chars().count();
                len >= self.config.min_token_length
                    && len <= self.config.max_token_length
                    && !self.stopwords.contains(token)
            })
    }

    /// Map a surface word to its indexed form
    pub fn normalize(&self, word: &str) -> String {
        match &self.stemmer {
            Some(stemmer) => stemmer.stem(word).to_string(),
            None => word.to_string(),
        }
    }

    /// Tokenize text into a vector of terms
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.surface_words(text)
            .map(|word| self.normalize(&word))
            .collect()
    }

    /// Get unique terms from text
    pub fn unique_terms(&self, text: &str) -> HashSet<String> {
        self.tokenize(text).into_iter().collect()
    }

    /// Analyze a free-text query, keeping the surface form of each word
    pub fn query_terms(&self, text: &str) -> Vec<QueryTerm> {
        let mut seen = HashSet::new();
        self.surface_words(text)
            .filter_map(|surface| {
                let term = self.normalize(&surface);
                seen.insert(term.clone())
                    .then_some(QueryTerm { surface, term })
            })
            .collect()
    }

    /// Indexed forms a query term may match: its own term plus the
    /// normalized morphological variants of both its surface and its stem
    pub fn expand(&self, query_term: &QueryTerm) -> BTreeSet<String> {
        let mut forms = BTreeSet::new();
        forms.insert(query_term.term.clone());
        for word in [&query_term.surface, &query_term.term] {
            for variant in variations(word) {
                forms.insert(self.normalize(&variant));
            }
        }
        forms
    }
}
