//! # Lemmata
//!
//! A lemma-expanding token stream for Hebrew full-text indexing.
//!
//! ## Features
//!
//! - Pull-based lemma expansion engine over any morphological analyzer
//! - Guard tokens that keep exact surface forms searchable
//! - Stacked lemma alternatives at a single position
//! - Pluggable lemma token construction
//! - JSON lexicon with grammatical prefix stripping
//! - Niqqud stripping filter

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;

pub mod prelude {
    pub use crate::analysis::analyzer::{Analyzer, HebrewAnalyzer};
    pub use crate::analysis::candidate::{Candidate, ForeignToken, HebrewAnalysis, Word, WordType};
    pub use crate::analysis::lemma_engine::{LemmaExpansionEngine, LemmaTokenFactory};
    pub use crate::analysis::lexicon::Lexicon;
    pub use crate::analysis::token::{Token, TokenType};
    pub use crate::analysis::word_source::{
        AnalyzedWord, LexiconWordSource, ScriptedWordSource, WordSource,
    };
    pub use crate::config::AnalyzerConfig;
    pub use crate::error::{LemmataError, Result};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
