//! Text analysis module for Lemmata.
//!
//! This module turns analyzed words into index tokens: word sources supply
//! words with their morphological candidates, the lemma engine expands them
//! into surface, guard and lemma tokens, and token filters post-process the
//! resulting stream.

pub mod analyzer;
pub mod candidate;
pub mod lemma_engine;
pub mod lexicon;
pub mod token;
pub mod token_filter;
pub mod word_source;

// Re-export commonly used types
pub use analyzer::*;
pub use candidate::*;
pub use lemma_engine::*;
pub use lexicon::*;
pub use token::*;
pub use token_filter::*;
pub use word_source::*;
