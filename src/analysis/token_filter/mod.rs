//! Token filter implementations for token transformation.
//!
//! Filters run after the lemma engine and transform its token stream.
//!
//! # Available Filters
//!
//! - [`niqqud::NiqqudFilter`] - Strips vowel points from Hebrew tokens

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// The trait requires `Send + Sync` so analyzers holding filters can be
/// shared across threads.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod niqqud;

pub use niqqud::NiqqudFilter;
