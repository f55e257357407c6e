//! Text analysis shared by index construction and free-text queries.

pub mod tokenizer;
pub mod variations;

pub use tokenizer::{QueryTerm, Tokenizer};
pub use variations::variations;
