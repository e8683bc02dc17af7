//! Configuration for the Hebrew analyzer.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::lexicon::{DEFAULT_MIN_STEM_LENGTH, Lexicon};
use crate::error::{LemmataError, Result};

/// Configuration for [`HebrewAnalyzer`](crate::analysis::analyzer::HebrewAnalyzer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Path of the JSON lexicon.
    pub lexicon_path: Option<PathBuf>,
    /// Remove niqqud from Hebrew tokens.
    pub strip_niqqud: bool,
    /// Attach morphological metadata to lemma tokens.
    pub morph_metadata: bool,
    /// Minimum number of characters left after removing a prefix.
    pub min_stem_length: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            lexicon_path: None,
            strip_niqqud: true,
            morph_metadata: false,
            min_stem_length: DEFAULT_MIN_STEM_LENGTH,
        }
    }
}

impl AnalyzerConfig {
    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading analyzer config from {}", path.display());
        let json = fs::read_to_string(path)?;
        let config: AnalyzerConfig = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for invalid values.
    pub fn validate(&self) -> Result<()> {
        if self.min_stem_length == 0 {
            return Err(LemmataError::config("min_stem_length must be at least 1"));
        }
        Ok(())
    }

    /// The lexicon path, or an error when none is configured.
    pub fn require_lexicon_path(&self) -> Result<&Path> {
        self.lexicon_path
            .as_deref()
            .ok_or_else(|| LemmataError::config("No lexicon path configured"))
    }

    /// Load the configured lexicon with the configured stem length.
    pub fn load_lexicon(&self) -> Result<Lexicon> {
        self.validate()?;
        Ok(Lexicon::from_file(self.require_lexicon_path()?)?
            .with_min_stem_length(self.min_stem_length))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyzer_config_default() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.lexicon_path, None);
        assert!(config.strip_niqqud);
        assert!(!config.morph_metadata);
        assert_eq!(config.min_stem_length, 2);
        assert!(config.validate().is_ok());
        assert!(config.require_lexicon_path().is_err());
    }

    #[test]
    fn test_from_file_with_partial_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{ "lexicon_path": "lex.json", "morph_metadata": true }"#,
        )
        .unwrap();

        let config = AnalyzerConfig::from_file(&path).unwrap();
        assert_eq!(config.require_lexicon_path().unwrap(), Path::new("lex.json"));
        assert!(config.morph_metadata);
        assert!(config.strip_niqqud);
    }

    #[test]
    fn test_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "min_stem_length": 0 }"#).unwrap();

        let error = AnalyzerConfig::from_file(&path).unwrap_err();
        assert!(matches!(error, LemmataError::Config(_)));

        fs::write(&path, "not json").unwrap();
        let error = AnalyzerConfig::from_file(&path).unwrap_err();
        assert!(matches!(error, LemmataError::Json(_)));
    }
}
