//! Surface-form lexicon with grammatical prefix stripping.
//!
//! The lexicon maps niqqud-free surface forms to their lemma analyses and
//! knows the grammatical prefixes (conjunctions, prepositions, the definite
//! article) that may be attached to a word. It is loaded from JSON:
//!
//! ```json
//! {
//!   "prefixes": ["ו", "ה", "וה", "ב"],
//!   "entries": {
//!     "בית": [{ "lemma": "בית" }],
//!     "ספרים": [{ "lemma": "ספר" }, { "lemma": "ספרים", "word_type": "HebrewTolerated" }]
//!   }
//! }
//! ```
//!
//! # Examples
//!
//! ```
//! use lemmata::analysis::lexicon::Lexicon;
//!
//! let mut lexicon = Lexicon::new();
//! lexicon.add_prefix("ו");
//! lexicon.insert("בית", Some("בית"));
//!
//! let analyses = lexicon.analyze("ובית");
//! assert_eq!(analyses.len(), 1);
//! assert_eq!(analyses[0].prefix_length, 1);
//! assert_eq!(analyses[0].lemma.as_deref(), Some("בית"));
//! ```

use std::fs;
use std::path::Path;

use ahash::AHashMap;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::candidate::{HebrewAnalysis, WordType};
use crate::analysis::token_filter::niqqud::{is_niqqud, strip_niqqud};
use crate::error::{LemmataError, Result};

/// Default minimum number of characters left after removing a prefix.
pub const DEFAULT_MIN_STEM_LENGTH: usize = 2;

/// One lexicon analysis of a surface form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconEntry {
    /// The lemma; `None` means the word is known but has no lemma
    pub lemma: Option<String>,
    /// Explicit word type; derived from the lookup when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_type: Option<WordType>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct LexiconFile {
    #[serde(default)]
    prefixes: Vec<String>,
    #[serde(default)]
    entries: std::collections::BTreeMap<String, Vec<LexiconEntry>>,
}

/// A dictionary of surface forms and grammatical prefixes.
#[derive(Clone, Debug)]
pub struct Lexicon {
    entries: AHashMap<String, Vec<LexiconEntry>>,
    prefixes: Vec<String>,
    min_stem_length: usize,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexicon {
    /// Create an empty lexicon.
    pub fn new() -> Self {
        Lexicon {
            entries: AHashMap::new(),
            prefixes: Vec::new(),
            min_stem_length: DEFAULT_MIN_STEM_LENGTH,
        }
    }

    /// Parse a lexicon from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: LexiconFile = serde_json::from_str(json)
            .map_err(|e| LemmataError::lexicon(format!("Failed to parse lexicon: {e}")))?;

        let mut lexicon = Lexicon::new();
        for prefix in file.prefixes {
            if prefix.is_empty() {
                return Err(LemmataError::lexicon("Empty prefix in lexicon"));
            }
            lexicon.add_prefix(prefix);
        }
        for (surface, entries) in file.entries {
            if surface.is_empty() {
                return Err(LemmataError::lexicon("Empty surface form in lexicon"));
            }
            lexicon
                .entries
                .entry(strip_niqqud(&surface))
                .or_default()
                .extend(entries);
        }

        debug!(
            "Loaded lexicon with {} surface forms and {} prefixes",
            lexicon.len(),
            lexicon.prefixes.len()
        );
        Ok(lexicon)
    }

    /// Load a lexicon from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading lexicon from {}", path.display());
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Set the minimum stem length left after prefix removal.
    pub fn with_min_stem_length(mut self, min_stem_length: usize) -> Self {
        self.min_stem_length = min_stem_length;
        self
    }

    /// Register a grammatical prefix. Prefixes are tried in insertion order.
    pub fn add_prefix<S: Into<String>>(&mut self, prefix: S) {
        let prefix = prefix.into();
        if !self.prefixes.contains(&prefix) {
            self.prefixes.push(prefix);
        }
    }

    /// Add an analysis for a surface form.
    pub fn insert<S: AsRef<str>>(&mut self, surface: S, lemma: Option<&str>) {
        self.insert_entry(
            surface,
            LexiconEntry {
                lemma: lemma.map(str::to_string),
                word_type: None,
            },
        );
    }

    /// Add a full entry for a surface form.
    pub fn insert_entry<S: AsRef<str>>(&mut self, surface: S, entry: LexiconEntry) {
        self.entries
            .entry(strip_niqqud(surface.as_ref()))
            .or_default()
            .push(entry);
    }

    /// Number of distinct surface forms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// Analyze a Hebrew word.
    ///
    /// Exact matches come first, then matches after removing each prefix in
    /// registration order. An empty result means the word is out of
    /// vocabulary.
    pub fn analyze(&self, word: &str) -> Vec<HebrewAnalysis> {
        let key = strip_niqqud(word);
        let mut analyses = Vec::new();

        if let Some(entries) = self.entries.get(&key) {
            analyses.extend(entries.iter().map(|entry| Self::to_analysis(entry, word, 0)));
        }

        for prefix in &self.prefixes {
            let Some(stem) = key.strip_prefix(prefix.as_str()) else {
                continue;
            };
            if stem.chars().count() < self.min_stem_length {
                continue;
            }
            if let Some(entries) = self.entries.get(stem) {
                let prefix_length = prefix_length_in(word, prefix);
                analyses.extend(
                    entries
                        .iter()
                        .map(|entry| Self::to_analysis(entry, word, prefix_length)),
                );
            }
        }

        analyses
    }

    fn to_analysis(entry: &LexiconEntry, word: &str, prefix_length: usize) -> HebrewAnalysis {
        let word_type = match entry.word_type {
            Some(word_type) if prefix_length > 0 => word_type.with_prefix(),
            Some(word_type) => word_type,
            None if prefix_length > 0 => WordType::HebrewWithPrefix,
            None => WordType::Hebrew,
        };
        HebrewAnalysis {
            lemma: entry.lemma.clone(),
            prefix_length,
            text: word.to_string(),
            word_type,
        }
    }
}

/// Number of characters of `word` covered by `prefix`, counting niqqud
/// marks interleaved with the prefix letters.
fn prefix_length_in(word: &str, prefix: &str) -> usize {
    let letters = prefix.chars().count();
    let mut seen = 0;
    for (index, c) in word.chars().enumerate() {
        if is_niqqud(c) {
            continue;
        }
        if seen == letters {
            return index;
        }
        seen += 1;
    }
    word.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "prefixes": ["ו", "ה", "וה"],
        "entries": {
            "בית": [{ "lemma": "בית" }],
            "ספרים": [{ "lemma": "ספר" }, { "lemma": "ספרים", "word_type": "HebrewTolerated" }],
            "הבית": [{ "lemma": null }]
        }
    }"#;

    #[test]
    fn test_from_json() {
        let lexicon = Lexicon::from_json(SAMPLE).unwrap();
        assert_eq!(lexicon.len(), 3);
        assert_eq!(lexicon.prefixes(), &["ו", "ה", "וה"]);
    }

    #[test]
    fn test_exact_then_prefixed_order() {
        let lexicon = Lexicon::from_json(SAMPLE).unwrap();

        // "הבית" is an entry itself and also "ה" + "בית".
        let analyses = lexicon.analyze("הבית");
        assert_eq!(analyses.len(), 2);
        assert_eq!(analyses[0].lemma, None);
        assert_eq!(analyses[0].prefix_length, 0);
        assert_eq!(analyses[0].word_type, WordType::Hebrew);
        assert_eq!(analyses[1].lemma.as_deref(), Some("בית"));
        assert_eq!(analyses[1].prefix_length, 1);
        assert_eq!(analyses[1].word_type, WordType::HebrewWithPrefix);
    }

    #[test]
    fn test_multi_letter_prefix() {
        let lexicon = Lexicon::from_json(SAMPLE).unwrap();

        // "והבית": "וה" + "בית" and "ו" + "הבית".
        let analyses = lexicon.analyze("והבית");
        let found: Vec<(Option<&str>, usize)> = analyses
            .iter()
            .map(|a| (a.lemma.as_deref(), a.prefix_length))
            .collect();
        assert_eq!(found, vec![(None, 1), (Some("בית"), 2)]);
        assert_eq!(analyses[1].stripped_text(), "בית");
    }

    #[test]
    fn test_explicit_word_type_gets_prefix_variant() {
        let lexicon = Lexicon::from_json(SAMPLE).unwrap();

        let analyses = lexicon.analyze("וספרים");
        assert_eq!(analyses.len(), 2);
        assert_eq!(analyses[0].word_type, WordType::HebrewWithPrefix);
        assert_eq!(analyses[1].word_type, WordType::HebrewToleratedWithPrefix);
    }

    #[test]
    fn test_min_stem_length() {
        let mut lexicon = Lexicon::new().with_min_stem_length(3);
        lexicon.add_prefix("ו");
        lexicon.insert("של", Some("של"));

        assert!(lexicon.analyze("ושל").is_empty());
        assert_eq!(lexicon.analyze("של").len(), 1);
    }

    #[test]
    fn test_niqqud_insensitive_lookup() {
        let mut lexicon = Lexicon::new();
        lexicon.add_prefix("ו");
        lexicon.insert("בית", Some("בית"));

        // "וּבַיִת" style pointing on the prefix letter is counted into it.
        let word = "ו\u{05BC}בית";
        let analyses = lexicon.analyze(word);
        assert_eq!(analyses.len(), 1);
        assert_eq!(analyses[0].prefix_length, 2);
        assert_eq!(analyses[0].stripped_text(), "בית");
        assert_eq!(analyses[0].text, word);
    }

    #[test]
    fn test_unknown_word_is_oov() {
        let lexicon = Lexicon::from_json(SAMPLE).unwrap();
        assert!(lexicon.analyze("מחשב").is_empty());
    }

    #[test]
    fn test_malformed_json() {
        let error = Lexicon::from_json("{ \"entries\": 3 }").unwrap_err();
        assert!(matches!(error, LemmataError::Lexicon(_)));

        let error = Lexicon::from_json(r#"{ "prefixes": [""] }"#).unwrap_err();
        assert!(matches!(error, LemmataError::Lexicon(_)));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexicon.json");
        std::fs::write(&path, SAMPLE).unwrap();

        let lexicon = Lexicon::from_file(&path).unwrap();
        assert_eq!(lexicon.len(), 3);

        let missing = Lexicon::from_file(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(missing, LemmataError::Io(_)));
    }
}
