//! Core analyzer trait definition.
//!
//! Analyzers run the complete pipeline from raw text to index tokens:
//!
//! ```text
//! Raw Text → Word Source → Lemma Engine → Filter 1 … Filter N → Index
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// # Thread Safety
///
/// The trait requires `Send + Sync` so a single analyzer can serve
/// concurrent indexing threads; per-call state lives in the returned stream.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
