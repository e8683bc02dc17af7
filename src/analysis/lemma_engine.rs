//! Lemma expansion engine.
//!
//! The engine turns analyzed words into index tokens. Each call to
//! [`LemmaExpansionEngine::next_token`] produces at most one token; a single
//! word may take several calls to drain:
//!
//! ```text
//! word "XYZ", candidates [A, B]      word "XYZ", candidate [YZ] (prefix 1)
//!
//!   "XYZ$"  pos_inc=0  (guard)          "YZ"  pos_inc=1  (exact match)
//!   "A"     pos_inc=0
//!   "B"     pos_inc=0
//! ```
//!
//! The guard form (surface text with a trailing `$`) keeps the exact
//! spelling searchable while the stacked lemmas let a query match any valid
//! stem at the same position.
//!
//! # Examples
//!
//! ```
//! use lemmata::analysis::candidate::{HebrewAnalysis, Word};
//! use lemmata::analysis::lemma_engine::LemmaExpansionEngine;
//! use lemmata::analysis::word_source::{AnalyzedWord, ScriptedWordSource};
//!
//! let source = ScriptedWordSource::new(vec![AnalyzedWord::new(
//!     Word::new("XYZ", 0, 3),
//!     vec![HebrewAnalysis::new("W", 1, "XYZ").into()],
//! )]);
//! let mut engine = LemmaExpansionEngine::new(source);
//!
//! let texts: Vec<String> = engine.by_ref().map(|t| t.unwrap().text).collect();
//! assert_eq!(texts, vec!["YZ$", "W"]);
//! ```

use std::fmt;
use std::sync::Arc;

use log::trace;

use crate::analysis::candidate::{
    Candidate, CandidateList, HebrewAnalysis, Word, strip_prefix_chars,
};
use crate::analysis::token::{Token, TokenType};
use crate::analysis::token_filter::niqqud::is_niqqud;
use crate::analysis::word_source::WordSource;
use crate::error::Result;

/// Suffix marking the surface form of an ambiguous or inexact word.
pub const GUARD_SUFFIX: char = '$';

/// Trait for strategies that materialize a lemma token.
///
/// The engine calls the factory for every lemma it emits. Returning `None`
/// declines the analysis; the engine then moves on to the next candidate.
pub trait LemmaTokenFactory: Send + Sync {
    /// Build the token for `analysis` of `word`.
    fn create(&self, analysis: &HebrewAnalysis, word: &Word) -> Option<Token>;

    /// Get the name of this factory.
    fn name(&self) -> &'static str;
}

/// Emits the lemma (or the prefix-stripped surface form when the analysis
/// has no lemma) as a stacked Hebrew token.
#[derive(Clone, Debug, Default)]
pub struct DefaultLemmaTokenFactory;

impl LemmaTokenFactory for DefaultLemmaTokenFactory {
    fn create(&self, analysis: &HebrewAnalysis, word: &Word) -> Option<Token> {
        Some(
            Token::with_offsets(analysis.term_text(), word.start_offset, word.end_offset)
                .with_token_type(TokenType::Hebrew)
                .with_position_increment(0),
        )
    }

    fn name(&self) -> &'static str {
        "default"
    }
}

/// Like [`DefaultLemmaTokenFactory`], and attaches the morphological details
/// of the analysis as token metadata.
#[derive(Clone, Debug, Default)]
pub struct MorphMetadataTokenFactory;

impl LemmaTokenFactory for MorphMetadataTokenFactory {
    fn create(&self, analysis: &HebrewAnalysis, word: &Word) -> Option<Token> {
        DefaultLemmaTokenFactory.create(analysis, word).map(|token| {
            token
                .with_original_text(analysis.text.as_str())
                .with_attribute("word_type", analysis.word_type.to_string())
                .with_attribute("prefix_length", analysis.prefix_length.to_string())
        })
    }

    fn name(&self) -> &'static str {
        "morph_metadata"
    }
}

/// What the engine did on its last call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EngineState {
    /// The candidate buffer is empty; the next call pulls a word.
    NeedWord,
    /// A lemma was drained from the candidate buffer.
    Draining,
    /// An out-of-vocabulary word was emitted as is.
    EmittedOov,
    /// A foreign or numeric word was emitted.
    EmittedForeign,
    /// A word whose single lemma equals its stripped form was emitted.
    EmittedExact,
    /// The guard of a word with a single mismatching lemma was emitted.
    EmittedGuardSingle,
    /// The guard of an ambiguous word was emitted.
    EmittedGuardMulti,
    /// The word source is exhausted.
    Done,
}

/// Pull-based lemma expansion over a [`WordSource`].
///
/// Not safe for concurrent use; the `&mut self` receivers enforce a single
/// caller.
pub struct LemmaExpansionEngine<S: WordSource> {
    source: S,
    factory: Arc<dyn LemmaTokenFactory>,
    candidates: CandidateList,
    current_word: Option<Word>,
    state: EngineState,
}

impl<S: WordSource> LemmaExpansionEngine<S> {
    /// Create an engine over `source` with the default token factory.
    pub fn new(source: S) -> Self {
        LemmaExpansionEngine {
            source,
            factory: Arc::new(DefaultLemmaTokenFactory),
            candidates: CandidateList::new(),
            current_word: None,
            state: EngineState::NeedWord,
        }
    }

    /// Use a custom lemma token factory.
    pub fn with_factory(mut self, factory: Arc<dyn LemmaTokenFactory>) -> Self {
        self.factory = factory;
        self
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// The word whose tokens are currently being emitted.
    pub fn current_word(&self) -> Option<&Word> {
        self.current_word.as_ref()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Discard all per-input state and rebind the source to `input`.
    pub fn reset(&mut self, input: S::Input) {
        self.candidates.clear();
        self.current_word = None;
        self.state = EngineState::NeedWord;
        self.source.rebind(input);
    }

    /// Produce the next token, or `None` once the source is exhausted.
    pub fn next_token(&mut self) -> Result<Option<Token>> {
        if self.state == EngineState::Done {
            return Ok(None);
        }

        loop {
            if let Some(token) = self.drain_next() {
                self.state = EngineState::Draining;
                return Ok(Some(token));
            }

            self.candidates.clear();
            self.current_word = None;
            self.state = EngineState::NeedWord;

            let Some(analyzed) = self.source.pull_next()? else {
                self.state = EngineState::Done;
                return Ok(None);
            };

            self.candidates.replace(analyzed.candidates);
            let word = self.current_word.insert(analyzed.word);
            if let Some((token, state)) = classify(&mut self.candidates, word, &*self.factory) {
                trace!("{:?} '{}' -> '{}'", state, word.text, token.text);
                self.state = state;
                return Ok(Some(token));
            }
        }
    }

    /// Emit the next distinct lemma still buffered for the current word.
    fn drain_next(&mut self) -> Option<Token> {
        let word = self.current_word.as_ref()?;
        while let Some(analysis) = self.candidates.next_distinct_lemma() {
            if let Some(token) = self.factory.create(analysis, word) {
                return Some(token);
            }
        }
        None
    }
}

/// Decide the first token of a freshly pulled word.
///
/// Clears the candidate buffer when the word is fully consumed. Returns
/// `None` only when the factory declines an exact match, in which case the
/// word yields no tokens.
fn classify(
    candidates: &mut CandidateList,
    word: &Word,
    factory: &dyn LemmaTokenFactory,
) -> Option<(Token, EngineState)> {
    let surface = || Token::with_offsets(word.text.as_str(), word.start_offset, word.end_offset);

    if candidates.is_empty() {
        return Some((surface(), EngineState::EmittedOov));
    }

    if candidates.len() > 1 {
        let guard = surface()
            .with_text(format!("{}{GUARD_SUFFIX}", word.text))
            .with_position_increment(0);
        return Some((guard, EngineState::EmittedGuardMulti));
    }

    let (token, state) = match candidates.get(0)? {
        Candidate::Foreign(foreign) => {
            let token = if foreign.is_numeric {
                surface().with_token_type(TokenType::Numeric)
            } else {
                surface()
                    .with_text(word.text.to_ascii_lowercase())
                    .with_token_type(TokenType::NonHebrew)
            };
            (Some(token), EngineState::EmittedForeign)
        }
        Candidate::Hebrew(analysis) => {
            let stripped = strip_prefix_chars(&word.text, analysis.prefix_length);
            if !is_exact_match(analysis.lemma.as_deref(), stripped) {
                // The candidate stays buffered; the next call drains its lemma.
                let guard = surface()
                    .with_text(format!("{stripped}{GUARD_SUFFIX}"))
                    .with_position_increment(0);
                return Some((guard, EngineState::EmittedGuardSingle));
            }
            let token = factory
                .create(analysis, word)
                .map(|token| token.with_position_increment(1));
            (token, EngineState::EmittedExact)
        }
    };

    candidates.clear();
    token.map(|token| (token, state))
}

/// Whether `lemma` spells `stripped` once niqqud points are ignored.
fn is_exact_match(lemma: Option<&str>, stripped: &str) -> bool {
    lemma.is_some_and(|lemma| stripped.chars().filter(|c| !is_niqqud(*c)).eq(lemma.chars()))
}

impl<S: WordSource> Iterator for LemmaExpansionEngine<S> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

impl<S: WordSource> fmt::Debug for LemmaExpansionEngine<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LemmaExpansionEngine")
            .field("factory", &self.factory.name())
            .field("state", &self.state)
            .field("current_word", &self.current_word)
            .field("candidates", &self.candidates.len())
            .field("cursor", &self.candidates.cursor())
            .finish()
    }
}
