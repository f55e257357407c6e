use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{FacetdexError, Result};

/// Default snapshot file name inside the data directory
pub const DEFAULT_SNAPSHOT_FILE: &str = "packages.json";

/// Stopword set removed when `remove_stopwords` is on
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopwordList {
    /// Short list of function words; content words stay searchable
    #[default]
    Compact,
    /// Full ISO English list from the `stop-words` crate
    Iso,
}

/// Tokenizer configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    pub lowercase: bool,
    pub remove_stopwords: bool,
    pub stopword_list: StopwordList,
    pub stem: bool,
    pub min_token_length: usize,
    pub max_token_length: usize,
    pub language: String,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            remove_stopwords: true,
            stopword_list: StopwordList::Compact,
            stem: true,
            min_token_length: 2,
            max_token_length: 50,
            language: "english".to_string(),
        }
    }
}

/// Search section of the catalog configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchConfig {
    /// Base directory holding the snapshot
    pub path: PathBuf,
    /// Snapshot file name, relative to `path`
    pub all_packages: String,
    #[serde(default)]
    pub tokenizer: TokenizerConfig,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./data"),
            all_packages: DEFAULT_SNAPSHOT_FILE.to_string(),
            tokenizer: TokenizerConfig::default(),
        }
    }
}

impl SearchConfig {
    /// Create a new search configuration
    pub fn new(path: impl Into<PathBuf>, all_packages: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            all_packages: all_packages.into(),
            ..Default::default()
        }
    }

    /// Set the tokenizer configuration
    pub fn with_tokenizer(mut self, tokenizer: TokenizerConfig) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Full path of the snapshot file
    pub fn snapshot_path(&self) -> PathBuf {
        self.path.join(&self.all_packages)
    }

    /// Reject configurations the engine cannot serve from
    pub fn validate(&self) -> Result<()> {
        if self.path.as_os_str().is_empty() {
            return Err(FacetdexError::ConfigInvalid(
                "`path` must not be empty".to_string(),
            ));
        }
        if self.all_packages.trim().is_empty() {
            return Err(FacetdexError::ConfigInvalid(
                "`all_packages` must not be empty".to_string(),
            ));
        }
        if self.all_packages.contains('/') || self.all_packages.contains('\\') {
            return Err(FacetdexError::ConfigInvalid(format!(
                "`all_packages` must be a file name, got {:?}",
                self.all_packages
            )));
        }
        let tok = &self.tokenizer;
        if tok.min_token_length == 0 || tok.min_token_length > tok.max_token_length {
            return Err(FacetdexError::ConfigInvalid(format!(
                "invalid token length bounds {}..={}",
                tok.min_token_length, tok.max_token_length
            )));
        }
        if !tok.language.eq_ignore_ascii_case("english") {
            return Err(FacetdexError::ConfigInvalid(format!(
                "unsupported tokenizer language {:?}",
                tok.language
            )));
        }
        Ok(())
    }
}

/// Top-level catalog configuration file
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(rename = "in_memory_search", alias = "inmemorysearch")]
    pub search: SearchConfig,
}

impl CatalogConfig {
    /// Parse and validate a YAML configuration document
    pub fn from_yaml_str(source: &str) -> Result<Self> {
        let config: CatalogConfig = serde_yaml::from_str(source)
            .map_err(|e| FacetdexError::ConfigInvalid(e.to_string()))?;
        config.search.validate()?;
        Ok(config)
    }

    /// Load a YAML configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| {
            FacetdexError::ConfigInvalid(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_yaml_str(&source)
    }
}
