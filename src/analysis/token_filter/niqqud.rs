//! Niqqud filter implementation.
//!
//! Hebrew text may carry vowel points (niqqud) and cantillation marks. They
//! are stripped from Hebrew tokens so that pointed and unpointed spellings
//! index to the same term.
//!
//! # Examples
//!
//! ```
//! use lemmata::analysis::token_filter::Filter;
//! use lemmata::analysis::token_filter::niqqud::NiqqudFilter;
//! use lemmata::analysis::token::Token;
//!
//! let filter = NiqqudFilter::new();
//! let tokens = vec![Token::new("שָׁלוֹם")];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
//!
//! assert_eq!(filtered[0].text, "שלום");
//! ```

use super::Filter;
use crate::analysis::token::{TokenStream, TokenType};
use crate::error::Result;

/// Whether `c` is a niqqud or cantillation point (U+05AF..=U+05C4).
pub fn is_niqqud(c: char) -> bool {
    matches!(c, '\u{05AF}'..='\u{05C4}')
}

/// Remove all niqqud points from `text`.
pub fn strip_niqqud(text: &str) -> String {
    text.chars().filter(|&c| !is_niqqud(c)).collect()
}

/// A filter that removes niqqud from Hebrew tokens.
///
/// Tokens of any other type pass through untouched.
#[derive(Clone, Debug, Default)]
pub struct NiqqudFilter;

impl NiqqudFilter {
    /// Create a new niqqud filter.
    pub fn new() -> Self {
        NiqqudFilter
    }
}

impl Filter for NiqqudFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(tokens.map(|mut token| {
            if token.token_type == TokenType::Hebrew && token.text.chars().any(is_niqqud) {
                token.text = strip_niqqud(&token.text);
            }
            token
        })))
    }

    fn name(&self) -> &'static str {
        "niqqud"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_niqqud_filter() {
        let filter = NiqqudFilter::new();
        let tokens = vec![
            Token::new("בַּיִת"),
            Token::new("בַּיִת$").with_position_increment(0),
            Token::new("abc\u{05B8}").with_token_type(TokenType::NonHebrew),
        ];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text, "בית");
        assert_eq!(result[1].text, "בית$");
        assert_eq!(result[1].position_increment, 0);
        // Non-Hebrew tokens are not processed
        assert_eq!(result[2].text, "abc\u{05B8}");
    }

    #[test]
    fn test_range_boundaries() {
        assert!(is_niqqud('\u{05AF}'));
        assert!(is_niqqud('\u{05C4}'));
        assert!(!is_niqqud('\u{05AE}'));
        assert!(!is_niqqud('\u{05C5}'));
        assert!(!is_niqqud('א'));
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(NiqqudFilter::new().name(), "niqqud");
    }
}
