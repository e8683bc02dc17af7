//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::analysis::candidate::Candidate;
use crate::analysis::token::Token;
use crate::analysis::word_source::AnalyzedWord;
use crate::cli::args::{LemmataArgs, OutputFormat};
use crate::error::Result;

/// Result structure for the analyze command.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub tokens: Vec<Token>,
    pub total_tokens: usize,
    pub total_positions: usize,
    pub duration_ms: u64,
}

impl AnalysisResult {
    pub fn new(tokens: Vec<Token>, duration_ms: u64) -> Self {
        let total_positions = tokens.last().map_or(0, |token| token.position + 1);
        AnalysisResult {
            total_tokens: tokens.len(),
            total_positions,
            tokens,
            duration_ms,
        }
    }
}

/// Result structure for the inspect command.
#[derive(Debug, Serialize, Deserialize)]
pub struct InspectionResult {
    pub words: Vec<AnalyzedWord>,
    pub oov_words: usize,
}

impl InspectionResult {
    pub fn new(words: Vec<AnalyzedWord>) -> Self {
        let oov_words = words.iter().filter(|w| w.candidates.is_empty()).count();
        InspectionResult { words, oov_words }
    }
}

/// Output the analyze result in the selected format.
pub fn output_analysis(result: &AnalysisResult, args: &LemmataArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(result, args),
        OutputFormat::Human => {
            println!("{}", format_tokens_human(&result.tokens));
            if args.verbosity() > 1 {
                println!();
                println!(
                    "{} tokens over {} positions in {}ms",
                    result.total_tokens, result.total_positions, result.duration_ms
                );
            }
            Ok(())
        }
    }
}

/// Output the inspect result in the selected format.
pub fn output_inspection(result: &InspectionResult, args: &LemmataArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(result, args),
        OutputFormat::Human => {
            println!("{}", format_words_human(&result.words));
            if args.verbosity() > 1 {
                println!();
                println!(
                    "{} words, {} out of vocabulary",
                    result.words.len(),
                    result.oov_words
                );
            }
            Ok(())
        }
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &LemmataArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

/// Render tokens as an aligned table, one token per line.
pub fn format_tokens_human(tokens: &[Token]) -> String {
    let mut lines = vec![format!(
        "{:>4}  {:>3}  {:<14} {:<12} {}",
        "pos", "inc", "type", "offsets", "text"
    )];
    lines.push("─".repeat(48));
    for token in tokens {
        lines.push(format!(
            "{:>4}  {:>3}  {:<14} {:<12} {}",
            token.position,
            token.position_increment,
            token.token_type.signature(),
            format!("{}..{}", token.start_offset, token.end_offset),
            token.text
        ));
    }
    lines.join("\n")
}

/// Render words with their candidate lists.
pub fn format_words_human(words: &[AnalyzedWord]) -> String {
    let mut lines = Vec::new();
    for analyzed in words {
        let word = &analyzed.word;
        lines.push(format!(
            "{} [{}..{}]",
            word.text, word.start_offset, word.end_offset
        ));
        if analyzed.candidates.is_empty() {
            lines.push("  (out of vocabulary)".to_string());
        }
        for candidate in &analyzed.candidates {
            lines.push(match candidate {
                Candidate::Hebrew(analysis) => format!(
                    "  lemma={} prefix={} type={}",
                    analysis.lemma.as_deref().unwrap_or("-"),
                    analysis.prefix_length,
                    analysis.word_type
                ),
                Candidate::Foreign(foreign) => format!(
                    "  foreign{}",
                    if foreign.is_numeric { " (numeric)" } else { "" }
                ),
            });
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::candidate::{ForeignToken, HebrewAnalysis, Word};
    use crate::analysis::token::TokenType;

    #[test]
    fn test_analysis_result_counts() {
        let mut first = Token::with_offsets("a", 0, 1);
        first.position = 0;
        let mut second = Token::with_offsets("b$", 2, 3).with_position_increment(0);
        second.position = 0;
        let mut third = Token::with_offsets("c", 4, 5);
        third.position = 1;

        let result = AnalysisResult::new(vec![first, second, third], 3);
        assert_eq!(result.total_tokens, 3);
        assert_eq!(result.total_positions, 2);

        let empty = AnalysisResult::new(Vec::new(), 0);
        assert_eq!(empty.total_positions, 0);
    }

    #[test]
    fn test_format_tokens_human() {
        let token = Token::with_offsets("hello", 6, 11).with_token_type(TokenType::NonHebrew);
        let output = format_tokens_human(&[token]);
        let last = output.lines().last().unwrap();
        assert!(last.contains("<NON_HEBREW>"));
        assert!(last.contains("6..11"));
        assert!(last.ends_with("hello"));
    }

    #[test]
    fn test_format_words_human() {
        let words = vec![
            AnalyzedWord::new(
                Word::new("XYZ", 0, 3),
                vec![HebrewAnalysis::new("W", 1, "XYZ").into()],
            ),
            AnalyzedWord::new(Word::new("QR", 4, 6), vec![]),
            AnalyzedWord::new(
                Word::new("42", 7, 9),
                vec![ForeignToken::new("42", true).into()],
            ),
        ];

        let output = format_words_human(&words);
        assert!(output.contains("lemma=W prefix=1 type=HebrewWithPrefix"));
        assert!(output.contains("(out of vocabulary)"));
        assert!(output.contains("foreign (numeric)"));

        let result = InspectionResult::new(words);
        assert_eq!(result.oov_words, 1);
    }
}
