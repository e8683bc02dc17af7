//! Word sources feeding the lemma engine.
//!
//! A [`WordSource`] is the seam between the morphological analyzer and the
//! lemma engine: it hands out one analyzed word per pull and can be rebound
//! to a fresh input.
//!
//! # Available Sources
//!
//! - [`ScriptedWordSource`] - Replays words analyzed elsewhere
//! - [`LexiconWordSource`] - Segments text and analyzes it with a [`Lexicon`]

use std::collections::VecDeque;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::candidate::{Candidate, ForeignToken, Word};
use crate::analysis::lexicon::Lexicon;
use crate::error::{LemmataError, Result};

/// A word together with the analyzer's candidates for it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzedWord {
    pub word: Word,
    pub candidates: Vec<Candidate>,
}

impl AnalyzedWord {
    pub fn new(word: Word, candidates: Vec<Candidate>) -> Self {
        AnalyzedWord { word, candidates }
    }
}

/// Trait for pull-based suppliers of analyzed words.
pub trait WordSource {
    /// The input a source can be rebound to.
    type Input;

    /// Pull the next analyzed word, or `None` at end of input.
    ///
    /// The candidate list may be empty for out-of-vocabulary words.
    fn pull_next(&mut self) -> Result<Option<AnalyzedWord>>;

    /// Restart analysis on a fresh input.
    fn rebind(&mut self, input: Self::Input);
}

impl<S: WordSource + ?Sized> WordSource for Box<S> {
    type Input = S::Input;

    fn pull_next(&mut self) -> Result<Option<AnalyzedWord>> {
        (**self).pull_next()
    }

    fn rebind(&mut self, input: Self::Input) {
        (**self).rebind(input)
    }
}

/// A word source replaying a prepared sequence of analyzed words.
///
/// Words analyzed elsewhere are checked as they are pulled: a word whose
/// offsets are reversed, or a Hebrew candidate whose prefix is longer than
/// the word, fails with [`LemmataError::Analysis`].
#[derive(Clone, Debug, Default)]
pub struct ScriptedWordSource {
    words: VecDeque<AnalyzedWord>,
}

impl ScriptedWordSource {
    pub fn new(words: Vec<AnalyzedWord>) -> Self {
        ScriptedWordSource {
            words: words.into(),
        }
    }

    /// Number of words not yet pulled.
    pub fn remaining(&self) -> usize {
        self.words.len()
    }
}

impl WordSource for ScriptedWordSource {
    type Input = Vec<AnalyzedWord>;

    fn pull_next(&mut self) -> Result<Option<AnalyzedWord>> {
        let Some(analyzed) = self.words.pop_front() else {
            return Ok(None);
        };
        validate(&analyzed)?;
        Ok(Some(analyzed))
    }

    fn rebind(&mut self, input: Self::Input) {
        self.words = input.into();
    }
}

fn validate(analyzed: &AnalyzedWord) -> Result<()> {
    let word = &analyzed.word;
    if word.start_offset > word.end_offset {
        return Err(LemmataError::analysis(format!(
            "word '{}' has start offset {} after end offset {}",
            word.text, word.start_offset, word.end_offset
        )));
    }

    let length = word.text.chars().count();
    let overlong = analyzed
        .candidates
        .iter()
        .filter_map(Candidate::as_hebrew)
        .find(|analysis| analysis.prefix_length > length);
    if let Some(analysis) = overlong {
        return Err(LemmataError::analysis(format!(
            "prefix length {} exceeds word '{}'",
            analysis.prefix_length, word.text
        )));
    }
    Ok(())
}

/// A word source that segments text on Unicode word boundaries and
/// analyzes Hebrew words with a [`Lexicon`].
///
/// Segments without any alphanumeric character (whitespace, punctuation)
/// are skipped. Words containing a Hebrew letter are looked up in the
/// lexicon; numbers and other words become a single foreign candidate.
#[derive(Clone, Debug)]
pub struct LexiconWordSource {
    lexicon: Arc<Lexicon>,
    input: String,
    offset: usize,
}

impl LexiconWordSource {
    /// Create a source bound to `input`.
    pub fn new<S: Into<String>>(lexicon: Arc<Lexicon>, input: S) -> Self {
        LexiconWordSource {
            lexicon,
            input: input.into(),
            offset: 0,
        }
    }

    /// The lexicon used for analysis.
    pub fn lexicon(&self) -> &Arc<Lexicon> {
        &self.lexicon
    }

    /// Classify and analyze a single word.
    pub fn analyze_word(&self, text: &str) -> Vec<Candidate> {
        if text.chars().any(is_hebrew_letter) {
            self.lexicon
                .analyze(text)
                .into_iter()
                .map(Candidate::Hebrew)
                .collect()
        } else {
            vec![Candidate::Foreign(ForeignToken::new(text, is_number(text)))]
        }
    }
}

impl WordSource for LexiconWordSource {
    type Input = String;

    fn pull_next(&mut self) -> Result<Option<AnalyzedWord>> {
        let rest = &self.input[self.offset..];
        let next = rest
            .split_word_bound_indices()
            .find(|(_, segment)| segment.chars().any(char::is_alphanumeric));

        let Some((index, segment)) = next else {
            self.offset = self.input.len();
            return Ok(None);
        };

        let start_offset = self.offset + index;
        let end_offset = start_offset + segment.len();
        let word = Word::new(segment, start_offset, end_offset);
        let candidates = self.analyze_word(segment);
        self.offset = end_offset;

        Ok(Some(AnalyzedWord::new(word, candidates)))
    }

    fn rebind(&mut self, input: Self::Input) {
        self.input = input;
        self.offset = 0;
    }
}

/// Whether `c` is a letter of the Hebrew alphabet (including final forms).
pub fn is_hebrew_letter(c: char) -> bool {
    matches!(c, '\u{05D0}'..='\u{05EA}')
}

/// Whether `text` is a number: digits, optionally with internal `.` or `,`.
pub fn is_number(text: &str) -> bool {
    let starts_with_digit = text.chars().next().is_some_and(char::is_numeric);
    let ends_with_digit = text.chars().next_back().is_some_and(char::is_numeric);
    starts_with_digit
        && ends_with_digit
        && text.chars().all(|c| c.is_numeric() || c == '.' || c == ',')
}
