//! Token types and utilities for text analysis.
//!
//! This module defines the token emitted by the lemma engine and consumed by
//! token filters and the indexer.
//!
//! # Core Types
//!
//! - [`Token`] - A single emitted token with text, offsets and position data
//! - [`TokenType`] - Classification of the token (Hebrew, non-Hebrew, numeric, ...)
//! - [`TokenMetadata`] - Optional metadata attached by a token factory
//! - [`TokenStream`] - Type alias for boxed iterator of tokens
//!
//! # Stacked Positions
//!
//! Tokens carry a `position_increment`: 1 opens a new slot, 0 stacks the
//! token onto the previous slot so that alternatives (guard form and lemma
//! expansions) are interchangeable matches at a single position:
//!
//! ```text
//! Input: "XYZ" with lemmas "A" and "B"
//!
//!   Position 0: "XYZ$" (pos_inc=0)
//!   Position 0: "A"    (pos_inc=0)
//!   Position 0: "B"    (pos_inc=0)
//! ```
//!
//! # Examples
//!
//! ```
//! use lemmata::analysis::token::{Token, TokenType};
//!
//! let token = Token::with_offsets("world", 6, 11).with_token_type(TokenType::NonHebrew);
//! assert_eq!(token.text, "world");
//! assert_eq!(token.start_offset, 6);
//! assert_eq!(token.token_type.signature(), "<NON_HEBREW>");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LemmataError;

/// Wire signatures of the token types, indexed by [`TokenType::index`].
pub const TOKEN_TYPE_SIGNATURES: [&str; 5] = [
    "<HEBREW>",
    "<NON_HEBREW>",
    "<NUM>",
    "<CONSTRUCT>",
    "<ACRONYM>",
];

/// A token represents a single indexable unit emitted by the analysis pipeline.
///
/// # Fields
///
/// - `text` - The token's text content (surface form, guard form or lemma)
/// - `start_offset` / `end_offset` - Byte offsets of the source word
/// - `position_increment` - 1 for a new slot, 0 to stack on the previous slot
/// - `position` - Absolute slot, assigned by the analyzer
/// - `token_type` - Type tag
/// - `metadata` - Optional additional metadata
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The byte offset where the source word starts in the original text
    pub start_offset: usize,

    /// The byte offset where the source word ends in the original text
    pub end_offset: usize,

    /// Position increment from the previous token (default: 1).
    ///
    /// - 1: next position
    /// - 0: same position as previous token (alternation)
    pub position_increment: usize,

    /// The absolute position of the token in the stream (0-based).
    ///
    /// Left at 0 by the lemma engine; the analyzer accumulates increments
    /// into it.
    pub position: usize,

    /// Token type tag
    pub token_type: TokenType,

    /// Additional metadata that can be attached to tokens
    pub metadata: Option<TokenMetadata>,
}

/// Token type classification.
///
/// `Construct` and `Acronym` are reserved: the lemma engine never produces
/// them, but downstream consumers may rely on the signatures existing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    /// Hebrew surface form, guard form or lemma
    #[serde(rename = "<HEBREW>")]
    Hebrew,
    /// Foreign-script token
    #[serde(rename = "<NON_HEBREW>")]
    NonHebrew,
    /// Numeric token
    #[serde(rename = "<NUM>")]
    Numeric,
    /// Construct state (reserved)
    #[serde(rename = "<CONSTRUCT>")]
    Construct,
    /// Acronym (reserved)
    #[serde(rename = "<ACRONYM>")]
    Acronym,
}

impl TokenType {
    /// All token types in signature-table order.
    pub const ALL: [TokenType; 5] = [
        TokenType::Hebrew,
        TokenType::NonHebrew,
        TokenType::Numeric,
        TokenType::Construct,
        TokenType::Acronym,
    ];

    /// Index of this type in [`TOKEN_TYPE_SIGNATURES`].
    pub fn index(self) -> usize {
        match self {
            TokenType::Hebrew => 0,
            TokenType::NonHebrew => 1,
            TokenType::Numeric => 2,
            TokenType::Construct => 3,
            TokenType::Acronym => 4,
        }
    }

    /// The wire signature of this type, e.g. `"<HEBREW>"`.
    pub fn signature(self) -> &'static str {
        TOKEN_TYPE_SIGNATURES[self.index()]
    }

    /// Parse a wire signature back into a token type.
    pub fn from_signature(signature: &str) -> Option<TokenType> {
        TokenType::ALL
            .into_iter()
            .find(|token_type| token_type.signature() == signature)
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.signature())
    }
}

impl FromStr for TokenType {
    type Err = LemmataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TokenType::from_signature(s)
            .ok_or_else(|| LemmataError::invalid_argument(format!("Unknown token type: {s}")))
    }
}

/// Additional metadata that can be attached to tokens
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenMetadata {
    /// The original surface text the token was derived from
    pub original_text: Option<String>,

    /// Additional custom attributes (e.g. morphological word type)
    pub attributes: std::collections::BTreeMap<String, String>,
}

impl Token {
    /// Create a new Hebrew token with the given text and zero offsets.
    pub fn new<S: Into<String>>(text: S) -> Self {
        Token::with_offsets(text, 0, 0)
    }

    /// Create a new Hebrew token with text and byte offsets.
    pub fn with_offsets<S: Into<String>>(text: S, start_offset: usize, end_offset: usize) -> Self {
        Token {
            text: text.into(),
            start_offset,
            end_offset,
            position_increment: 1,
            position: 0,
            token_type: TokenType::Hebrew,
            metadata: None,
        }
    }

    /// Get the length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Set the token type.
    pub fn with_token_type(mut self, token_type: TokenType) -> Self {
        self.token_type = token_type;
        self
    }

    /// Set the position increment.
    pub fn with_position_increment(mut self, increment: usize) -> Self {
        self.position_increment = increment;
        self
    }

    /// Set metadata for this token.
    pub fn with_metadata(mut self, metadata: TokenMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Set the original text in metadata.
    pub fn with_original_text<S: Into<String>>(mut self, original: S) -> Self {
        let metadata = self.metadata.get_or_insert_with(TokenMetadata::new);
        metadata.original_text = Some(original.into());
        self
    }

    /// Set a custom metadata attribute.
    pub fn with_attribute<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.metadata
            .get_or_insert_with(TokenMetadata::new)
            .set_attribute(key, value);
        self
    }

    /// Get a reference to the metadata.
    pub fn metadata(&self) -> Option<&TokenMetadata> {
        self.metadata.as_ref()
    }

    /// Check whether this token stacks onto the previous slot.
    pub fn is_stacked(&self) -> bool {
        self.position_increment == 0
    }

    /// Clone this token with updated text.
    pub fn with_text<S: Into<String>>(&self, text: S) -> Self {
        let mut token = self.clone();
        token.text = text.into();
        token
    }
}

impl TokenMetadata {
    /// Create a new empty metadata object.
    pub fn new() -> Self {
        TokenMetadata::default()
    }

    /// Set a custom attribute.
    pub fn set_attribute<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.attributes.insert(key.into(), value.into());
    }

    /// Get a custom attribute.
    pub fn get_attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(|s| s.as_str())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

/// Trait for types that can produce a token stream.
pub trait IntoTokenStream {
    /// Convert this type into a token stream.
    fn into_token_stream(self) -> TokenStream;
}

impl IntoTokenStream for Vec<Token> {
    fn into_token_stream(self) -> TokenStream {
        Box::new(self.into_iter())
    }
}
