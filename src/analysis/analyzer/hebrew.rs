//! Hebrew analyzer built on the lemma expansion engine.
//!
//! # Architecture
//!
//! The HebrewAnalyzer applies processing in this order:
//! 1. Word source: segments the text and analyzes words with the lexicon
//! 2. Lemma engine: emits surface, guard and lemma tokens
//! 3. Positions: accumulates position increments into absolute positions
//! 4. Token filters: applied sequentially in the order they were added
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use lemmata::analysis::analyzer::{Analyzer, HebrewAnalyzer};
//! use lemmata::analysis::lexicon::Lexicon;
//!
//! let mut lexicon = Lexicon::new();
//! lexicon.add_prefix("ה");
//! lexicon.insert("בית", Some("בית"));
//!
//! let analyzer = HebrewAnalyzer::new(Arc::new(lexicon));
//! let tokens: Vec<_> = analyzer.analyze("הבית Hello").unwrap().collect();
//!
//! assert_eq!(tokens[0].text, "בית");
//! assert_eq!(tokens[1].text, "hello");
//! assert_eq!(tokens[1].position, 1);
//! ```

use std::sync::Arc;

use log::debug;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::lemma_engine::{
    DefaultLemmaTokenFactory, LemmaExpansionEngine, LemmaTokenFactory, MorphMetadataTokenFactory,
};
use crate::analysis::lexicon::Lexicon;
use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::{Filter, NiqqudFilter};
use crate::analysis::word_source::LexiconWordSource;
use crate::config::AnalyzerConfig;
use crate::error::Result;

/// An analyzer that expands Hebrew words into their lemmas.
#[derive(Clone)]
pub struct HebrewAnalyzer {
    lexicon: Arc<Lexicon>,
    factory: Arc<dyn LemmaTokenFactory>,
    filters: Vec<Arc<dyn Filter>>,
}

impl HebrewAnalyzer {
    /// Create a new analyzer over `lexicon` with the default token factory
    /// and no filters.
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        HebrewAnalyzer {
            lexicon,
            factory: Arc::new(DefaultLemmaTokenFactory),
            filters: Vec::new(),
        }
    }

    /// Build an analyzer from configuration, loading the configured lexicon.
    pub fn from_config(config: &AnalyzerConfig) -> Result<Self> {
        let lexicon = config.load_lexicon()?;
        Ok(Self::with_lexicon_and_config(Arc::new(lexicon), config))
    }

    /// Build an analyzer over an already loaded lexicon, applying the
    /// filter and factory settings of `config`.
    pub fn with_lexicon_and_config(lexicon: Arc<Lexicon>, config: &AnalyzerConfig) -> Self {
        let mut analyzer = HebrewAnalyzer::new(lexicon);
        if config.morph_metadata {
            analyzer = analyzer.with_factory(Arc::new(MorphMetadataTokenFactory));
        }
        if config.strip_niqqud {
            analyzer = analyzer.add_filter(Arc::new(NiqqudFilter::new()));
        }
        debug!("Built analyzer: {analyzer:?}");
        analyzer
    }

    /// Use a custom lemma token factory.
    pub fn with_factory(mut self, factory: Arc<dyn LemmaTokenFactory>) -> Self {
        self.factory = factory;
        self
    }

    /// Add a filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn lexicon(&self) -> &Arc<Lexicon> {
        &self.lexicon
    }

    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }

    /// Run the lemma engine over `text`, without filters.
    pub fn expand(&self, text: &str) -> Result<Vec<Token>> {
        let source = LexiconWordSource::new(self.lexicon.clone(), text);
        let engine = LemmaExpansionEngine::new(source).with_factory(self.factory.clone());

        let mut tokens = engine.collect::<Result<Vec<Token>>>()?;
        assign_positions(&mut tokens);
        Ok(tokens)
    }
}

/// Accumulate position increments into absolute positions. The first token
/// is at position 0.
fn assign_positions(tokens: &mut [Token]) {
    let mut previous: Option<usize> = None;
    for token in tokens {
        let position = match previous {
            Some(position) => position + token.position_increment,
            None => 0,
        };
        token.position = position;
        previous = Some(position);
    }
}

impl Analyzer for HebrewAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let mut tokens: TokenStream = Box::new(self.expand(text)?.into_iter());

        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }

        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "hebrew"
    }
}

impl std::fmt::Debug for HebrewAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HebrewAnalyzer")
            .field("lexicon_entries", &self.lexicon.len())
            .field("factory", &self.factory.name())
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
