//! Words and their morphological candidates.
//!
//! A word source produces one [`Word`] at a time together with the ordered
//! list of [`Candidate`] analyses for it. The lemma engine buffers those in a
//! [`CandidateList`] and drains distinct lemmas out of it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single word of the input with its byte-offset span.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    /// The literal surface text
    pub text: String,
    /// Byte offset of the first byte of the word
    pub start_offset: usize,
    /// Byte offset one past the last byte of the word
    pub end_offset: usize,
}

impl Word {
    /// Create a new word.
    pub fn new<S: Into<String>>(text: S, start_offset: usize, end_offset: usize) -> Self {
        Word {
            text: text.into(),
            start_offset,
            end_offset,
        }
    }
}

/// How the analyzer recognized a Hebrew word.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordType {
    #[default]
    Hebrew,
    HebrewWithPrefix,
    HebrewTolerated,
    HebrewToleratedWithPrefix,
    NonHebrew,
    Unrecognized,
    Custom,
    CustomWithPrefix,
}

impl WordType {
    /// Whether the analysis involved stripping a grammatical prefix.
    pub fn has_prefix(self) -> bool {
        matches!(
            self,
            WordType::HebrewWithPrefix
                | WordType::HebrewToleratedWithPrefix
                | WordType::CustomWithPrefix
        )
    }

    /// The prefixed counterpart of this word type.
    pub fn with_prefix(self) -> WordType {
        match self {
            WordType::Hebrew => WordType::HebrewWithPrefix,
            WordType::HebrewTolerated => WordType::HebrewToleratedWithPrefix,
            WordType::Custom => WordType::CustomWithPrefix,
            other => other,
        }
    }
}

impl fmt::Display for WordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A morphological analysis of a recognized Hebrew word.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HebrewAnalysis {
    /// The lemma, if the analyzer produced one
    pub lemma: Option<String>,
    /// Length of the grammatical prefix in characters
    pub prefix_length: usize,
    /// The original surface text
    pub text: String,
    /// How the word was recognized
    #[serde(default)]
    pub word_type: WordType,
}

impl HebrewAnalysis {
    /// Create an analysis with a lemma.
    pub fn new<L, T>(lemma: L, prefix_length: usize, text: T) -> Self
    where
        L: Into<String>,
        T: Into<String>,
    {
        HebrewAnalysis {
            lemma: Some(lemma.into()),
            prefix_length,
            text: text.into(),
            word_type: if prefix_length > 0 {
                WordType::HebrewWithPrefix
            } else {
                WordType::Hebrew
            },
        }
    }

    /// Create an analysis without a lemma.
    pub fn without_lemma<T: Into<String>>(prefix_length: usize, text: T) -> Self {
        HebrewAnalysis {
            lemma: None,
            ..HebrewAnalysis::new(String::new(), prefix_length, text)
        }
    }

    /// Set the word type.
    pub fn with_word_type(mut self, word_type: WordType) -> Self {
        self.word_type = word_type;
        self
    }

    /// The original text with the grammatical prefix removed.
    pub fn stripped_text(&self) -> &str {
        strip_prefix_chars(&self.text, self.prefix_length)
    }

    /// The text a lemma token carries: the lemma, or the stripped surface
    /// form when no lemma is known.
    pub fn term_text(&self) -> &str {
        self.lemma.as_deref().unwrap_or_else(|| self.stripped_text())
    }
}

/// A token the analyzer did not analyze morphologically.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignToken {
    /// The token text
    pub text: String,
    /// Whether the token is a number
    pub is_numeric: bool,
}

impl ForeignToken {
    /// Create a new foreign token.
    pub fn new<S: Into<String>>(text: S, is_numeric: bool) -> Self {
        ForeignToken {
            text: text.into(),
            is_numeric,
        }
    }
}

/// One candidate produced by the analyzer for a word.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Candidate {
    Hebrew(HebrewAnalysis),
    Foreign(ForeignToken),
}

impl Candidate {
    /// The Hebrew analysis, if this candidate is one.
    pub fn as_hebrew(&self) -> Option<&HebrewAnalysis> {
        match self {
            Candidate::Hebrew(analysis) => Some(analysis),
            Candidate::Foreign(_) => None,
        }
    }

    /// The foreign token, if this candidate is one.
    pub fn as_foreign(&self) -> Option<&ForeignToken> {
        match self {
            Candidate::Foreign(token) => Some(token),
            Candidate::Hebrew(_) => None,
        }
    }
}

impl From<HebrewAnalysis> for Candidate {
    fn from(analysis: HebrewAnalysis) -> Self {
        Candidate::Hebrew(analysis)
    }
}

impl From<ForeignToken> for Candidate {
    fn from(token: ForeignToken) -> Self {
        Candidate::Foreign(token)
    }
}

/// The candidate buffer of the current word.
///
/// Entries keep the order the analyzer supplied. The buffer is only ever
/// replaced or cleared as a whole; both reset the cursor and the record of
/// the last emitted lemma.
#[derive(Clone, Debug, Default)]
pub struct CandidateList {
    entries: Vec<Candidate>,
    cursor: usize,
    last_lemma: Option<String>,
}

impl CandidateList {
    /// Create an empty candidate list.
    pub fn new() -> Self {
        CandidateList::default()
    }

    /// Replace the buffer with the candidates of a new word.
    pub fn replace(&mut self, entries: Vec<Candidate>) {
        self.entries = entries;
        self.cursor = 0;
        self.last_lemma = None;
    }

    /// Drop all candidates.
    pub fn clear(&mut self) {
        self.replace(Vec::new());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether every entry has been scanned.
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.entries.len()
    }

    /// The candidate at `index`.
    pub fn get(&self, index: usize) -> Option<&Candidate> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.entries.iter()
    }

    /// Advance to the next Hebrew analysis whose lemma differs from the last
    /// one returned, skipping foreign entries and consecutive duplicates.
    pub fn next_distinct_lemma(&mut self) -> Option<&HebrewAnalysis> {
        while self.cursor < self.entries.len() {
            let index = self.cursor;
            self.cursor += 1;

            let Candidate::Hebrew(analysis) = &self.entries[index] else {
                continue;
            };
            if self.last_lemma == analysis.lemma {
                continue;
            }

            self.last_lemma = analysis.lemma.clone();
            return self.entries[index].as_hebrew();
        }
        None
    }
}

/// Remove the first `count` characters of `text`.
pub fn strip_prefix_chars(text: &str, count: usize) -> &str {
    match text.char_indices().nth(count) {
        Some((index, _)) => &text[index..],
        None => "",
    }
}
