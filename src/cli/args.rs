//! Command line argument parsing for the Lemmata CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Lemmata - lemma-expanding Hebrew token stream
#[derive(Parser, Debug, Clone)]
#[command(name = "lemmata")]
#[command(about = "Expand Hebrew text into index tokens with lemma alternatives")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LemmataArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LemmataArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Analyze text into index tokens
    Analyze(AnalyzeArgs),

    /// Show the words and candidates the lexicon produces for a text
    Inspect(InspectArgs),
}

/// Where the text to process comes from.
#[derive(Parser, Debug, Clone)]
pub struct InputArgs {
    /// Text to process (reads stdin when neither TEXT nor --input is given)
    #[arg(value_name = "TEXT", conflicts_with = "input")]
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Lexicon file (JSON)
    #[arg(short, long, value_name = "LEXICON", env = "LEMMATA_LEXICON")]
    pub lexicon: Option<PathBuf>,
}

/// Arguments for analyzing text
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Analyzer configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Strip niqqud from Hebrew tokens
    #[arg(long)]
    pub strip_niqqud: bool,

    /// Keep niqqud in Hebrew tokens (overrides configuration)
    #[arg(long, conflicts_with = "strip_niqqud")]
    pub keep_niqqud: bool,

    /// Attach morphological metadata to lemma tokens
    #[arg(long)]
    pub morph_metadata: bool,
}

/// Arguments for inspecting word candidates
#[derive(Parser, Debug, Clone)]
pub struct InspectArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Analyzer configuration file (JSON); its lexicon settings apply
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
