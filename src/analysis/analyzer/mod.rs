//! Analyzer implementations that combine word sources, the lemma engine and filters.

mod analyzer;
mod hebrew;

pub use analyzer::Analyzer;
pub use hebrew::HebrewAnalyzer;
