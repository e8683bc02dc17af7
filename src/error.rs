//! Error types for the Lemmata library.
//!
//! All fallible operations return [`LemmataError`]. Note that none of the
//! word classifications performed by the lemma engine (out-of-vocabulary,
//! ambiguous, foreign) are errors; errors only arise from loading lexicons
//! and configuration, or from a word source that fails to read its input.
//!
//! # Examples
//!
//! ```
//! use lemmata::error::{LemmataError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LemmataError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Lemmata operations.
#[derive(Error, Debug)]
pub enum LemmataError {
    /// I/O errors (reading lexicons, configuration or input text)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Lexicon-related errors (malformed entries, bad prefixes)
    #[error("Lexicon error: {0}")]
    Lexicon(String),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// Failures reported by a word source while producing words
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with LemmataError.
pub type Result<T> = std::result::Result<T, LemmataError>;

impl LemmataError {
    /// Create a new lexicon error.
    pub fn lexicon<S: Into<String>>(msg: S) -> Self {
        LemmataError::Lexicon(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        LemmataError::Config(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        LemmataError::Analysis(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LemmataError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        LemmataError::Other(format!("Invalid argument: {}", msg.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = LemmataError::lexicon("bad entry");
        assert_eq!(error.to_string(), "Lexicon error: bad entry");

        let error = LemmataError::config("missing lexicon");
        assert_eq!(error.to_string(), "Config error: missing lexicon");

        let error = LemmataError::analysis("source failed");
        assert_eq!(error.to_string(), "Analysis error: source failed");

        let error = LemmataError::invalid_argument("empty text");
        assert_eq!(error.to_string(), "Error: Invalid argument: empty text");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = LemmataError::from(io_error);

        match error {
            LemmataError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = LemmataError::from(json_error);
        assert!(matches!(error, LemmataError::Json(_)));
    }
}
