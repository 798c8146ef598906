//! Action-text classification into typed sub-queries.

pub mod classifier;
pub mod lexicon;

pub use classifier::QueryEngine;
pub use lexicon::{Lexicon, LexiconEntry};
