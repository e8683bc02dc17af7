//! Command implementations for the Lemmata CLI.

use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use log::info;

use crate::analysis::analyzer::{Analyzer, HebrewAnalyzer};
use crate::analysis::token::Token;
use crate::analysis::token_filter::Filter;
use crate::analysis::word_source::{LexiconWordSource, WordSource};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::AnalyzerConfig;
use crate::error::{LemmataError, Result};

/// Execute a CLI command.
pub fn execute_command(args: LemmataArgs) -> Result<()> {
    match &args.command {
        Command::Analyze(analyze_args) => analyze_text(analyze_args.clone(), &args),
        Command::Inspect(inspect_args) => inspect_text(inspect_args.clone(), &args),
    }
}

/// Analyze text into index tokens.
fn analyze_text(args: AnalyzeArgs, cli_args: &LemmataArgs) -> Result<()> {
    let config = resolve_config(&args)?;
    let text = read_input(&args.input)?;

    let analyzer = HebrewAnalyzer::from_config(&config)?;
    info!(
        "Analyzing {} bytes with filters {:?}",
        text.len(),
        analyzer.filters().iter().map(|f| f.name()).collect::<Vec<_>>()
    );

    let start = Instant::now();
    let tokens: Vec<Token> = analyzer.analyze(&text)?.collect();
    let duration_ms = start.elapsed().as_millis() as u64;

    output_analysis(&AnalysisResult::new(tokens, duration_ms), cli_args)
}

/// Show the words and candidates produced by the lexicon word source.
fn inspect_text(args: InspectArgs, cli_args: &LemmataArgs) -> Result<()> {
    let config = load_config(args.config.as_deref(), &args.input)?;
    let lexicon = config.load_lexicon()?;
    let text = read_input(&args.input)?;

    let mut source = LexiconWordSource::new(Arc::new(lexicon), text);
    let mut words = Vec::new();
    while let Some(word) = source.pull_next()? {
        words.push(word);
    }

    output_inspection(&InspectionResult::new(words), cli_args)
}

/// Load the configuration file, if any, and apply the lexicon override.
fn load_config(path: Option<&Path>, input: &InputArgs) -> Result<AnalyzerConfig> {
    let mut config = match path {
        Some(path) => AnalyzerConfig::from_file(path)?,
        None => AnalyzerConfig::default(),
    };

    if let Some(lexicon) = &input.lexicon {
        config.lexicon_path = Some(lexicon.clone());
    }
    if config.lexicon_path.is_none() {
        return Err(LemmataError::invalid_argument(
            "--lexicon is required unless the config sets lexicon_path",
        ));
    }
    Ok(config)
}

/// Merge the configuration file with command line overrides.
fn resolve_config(args: &AnalyzeArgs) -> Result<AnalyzerConfig> {
    let mut config = load_config(args.config.as_deref(), &args.input)?;

    if args.strip_niqqud {
        config.strip_niqqud = true;
    }
    if args.keep_niqqud {
        config.strip_niqqud = false;
    }
    if args.morph_metadata {
        config.morph_metadata = true;
    }
    config.validate()?;
    Ok(config)
}

/// Read the text from the argument, a file, or stdin.
fn read_input(input: &InputArgs) -> Result<String> {
    if let Some(text) = &input.text {
        return Ok(text.clone());
    }
    if let Some(path) = &input.input {
        return read_file(path);
    }

    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;
    Ok(text)
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        LemmataError::Io(io::Error::new(
            e.kind(),
            format!("Failed to read {}: {e}", path.display()),
        ))
    })
}
