//! Integration tests for lemma expansion over the sample lexicon

use std::sync::Arc;
use std::thread;

use lemmata::analysis::lemma_engine::EngineState;
use lemmata::prelude::*;

const SAMPLE_LEXICON: &str = include_str!("../data/lexicon.sample.json");

fn lexicon() -> Arc<Lexicon> {
    Arc::new(Lexicon::from_json(SAMPLE_LEXICON).unwrap())
}

fn summary(tokens: &[Token]) -> Vec<(String, usize, usize, TokenType)> {
    tokens
        .iter()
        .map(|t| (t.text.clone(), t.position_increment, t.position, t.token_type))
        .collect()
}

fn expected(rows: &[(&str, usize, usize, TokenType)]) -> Vec<(String, usize, usize, TokenType)> {
    rows.iter()
        .map(|(text, inc, pos, token_type)| (text.to_string(), *inc, *pos, *token_type))
        .collect()
}

#[test]
fn test_analyze_sentence() -> Result<()> {
    let analyzer = HebrewAnalyzer::with_lexicon_and_config(lexicon(), &AnalyzerConfig::default());
    let text = "הילדים הלכו לבית הספר 2024 with Friends";
    let tokens: Vec<Token> = analyzer.analyze(text)?.collect();

    use TokenType::*;
    assert_eq!(
        summary(&tokens),
        expected(&[
            ("ילדים$", 0, 0, Hebrew),
            ("ילד", 0, 0, Hebrew),
            ("הלכו", 1, 1, Hebrew),
            ("בית", 1, 2, Hebrew),
            ("הספר$", 0, 2, Hebrew),
            ("ספר", 0, 2, Hebrew),
            ("סיפר", 0, 2, Hebrew),
            ("2024", 1, 3, Numeric),
            ("with", 1, 4, NonHebrew),
            ("friends", 1, 5, NonHebrew),
        ])
    );

    // Every token reports the span of the word it came from.
    let lemma = &tokens[5];
    assert_eq!(&text[lemma.start_offset..lemma.end_offset], "הספר");
    let guard = &tokens[0];
    assert_eq!(&text[guard.start_offset..guard.end_offset], "הילדים");

    Ok(())
}

#[test]
fn test_duplicate_lemmas_are_indexed_once() -> Result<()> {
    let analyzer = HebrewAnalyzer::new(lexicon());
    let texts: Vec<String> = analyzer.analyze("מלך")?.map(|t| t.text).collect();

    assert_eq!(texts, vec!["מלך$", "מלך", "מלכה"]);
    Ok(())
}

#[test]
fn test_acronym_without_lemma() -> Result<()> {
    let analyzer = HebrewAnalyzer::new(lexicon());
    let tokens: Vec<Token> = analyzer.analyze("צה\"ל")?.collect();

    // The missing lemma is never emitted; only the guard remains.
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].text, "צה\"ל$");
    assert_eq!(tokens[0].position_increment, 0);
    assert_eq!(tokens[0].token_type, TokenType::Hebrew);
    Ok(())
}

#[test]
fn test_pointed_input_keeps_positions() -> Result<()> {
    let analyzer = HebrewAnalyzer::new(lexicon());
    let plain: Vec<Token> = analyzer.analyze("ילד בית לבית")?.collect();
    let pointed: Vec<Token> = analyzer.analyze("יֶלֶד בַּיִת לַבַּיִת")?.collect();

    let rows = |tokens: &[Token]| -> Vec<(String, usize, usize)> {
        tokens
            .iter()
            .map(|t| (t.text.clone(), t.position_increment, t.position))
            .collect()
    };
    assert_eq!(rows(&pointed), rows(&plain));
    assert_eq!(
        rows(&pointed),
        vec![
            ("ילד".to_string(), 1, 0),
            ("בית".to_string(), 1, 1),
            ("בית".to_string(), 1, 2),
        ]
    );
    Ok(())
}

#[test]
fn test_reset_isolates_inputs() -> Result<()> {
    let source = LexiconWordSource::new(lexicon(), "מלך ספר");
    let mut engine = LemmaExpansionEngine::new(source);

    // Stop right after the guard of the first ambiguous word.
    let guard = engine.next_token()?.unwrap();
    assert_eq!(guard.text, "מלך$");

    engine.reset("הלך".to_string());
    let texts: Vec<String> = engine
        .by_ref()
        .map(|t| t.map(|t| t.text))
        .collect::<Result<_>>()?;

    assert_eq!(texts, vec!["הלך"]);
    Ok(())
}

#[test]
fn test_end_of_stream_is_sticky() -> Result<()> {
    let source = LexiconWordSource::new(lexicon(), "בבית");
    let mut engine = LemmaExpansionEngine::new(source);

    let token = engine.next_token()?.unwrap();
    assert_eq!(token.text, "בית");
    assert_eq!(token.position_increment, 1);

    for _ in 0..3 {
        assert!(engine.next_token()?.is_none());
    }
    assert_eq!(engine.state(), EngineState::Done);
    Ok(())
}

#[test]
fn test_scripted_source_properties() -> Result<()> {
    let words = vec![
        AnalyzedWord::new(Word::new("XYZ", 0, 3), vec![]),
        AnalyzedWord::new(
            Word::new("ABC123", 4, 10),
            vec![ForeignToken::new("ABC123", true).into()],
        ),
        AnalyzedWord::new(
            Word::new("Hello", 11, 16),
            vec![ForeignToken::new("Hello", false).into()],
        ),
        AnalyzedWord::new(
            Word::new("XYZ", 17, 20),
            vec![HebrewAnalysis::new("YZ", 1, "XYZ").into()],
        ),
        AnalyzedWord::new(
            Word::new("XYZ", 21, 24),
            vec![HebrewAnalysis::new("W", 1, "XYZ").into()],
        ),
        AnalyzedWord::new(
            Word::new("XYZ", 25, 28),
            vec![
                HebrewAnalysis::new("A", 0, "XYZ").into(),
                HebrewAnalysis::new("A", 1, "XYZ").into(),
                HebrewAnalysis::new("B", 0, "XYZ").into(),
            ],
        ),
    ];
    let engine = LemmaExpansionEngine::new(ScriptedWordSource::new(words));
    let tokens = engine.collect::<Result<Vec<Token>>>()?;

    let rows: Vec<(&str, usize, TokenType)> = tokens
        .iter()
        .map(|t| (t.text.as_str(), t.position_increment, t.token_type))
        .collect();

    use TokenType::*;
    assert_eq!(
        rows,
        vec![
            ("XYZ", 1, Hebrew),
            ("ABC123", 1, Numeric),
            ("hello", 1, NonHebrew),
            ("YZ", 1, Hebrew),
            ("YZ$", 0, Hebrew),
            ("W", 0, Hebrew),
            ("XYZ$", 0, Hebrew),
            ("A", 0, Hebrew),
            ("B", 0, Hebrew),
        ]
    );
    assert!(
        tokens
            .iter()
            .all(|t| !matches!(t.token_type, Construct | Acronym))
    );
    Ok(())
}

#[test]
fn test_analyzer_is_shareable_across_threads() {
    let analyzer = Arc::new(HebrewAnalyzer::new(lexicon()));

    let handles: Vec<_> = ["בבית", "הלך", "ספר"]
        .into_iter()
        .map(|text| {
            let analyzer = Arc::clone(&analyzer);
            thread::spawn(move || {
                analyzer
                    .analyze(text)
                    .map(|tokens| tokens.map(|t| t.text).collect::<Vec<_>>())
            })
        })
        .collect();

    let results: Vec<Vec<String>> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap().unwrap())
        .collect();

    assert_eq!(results[0], vec!["בית"]);
    assert_eq!(results[1], vec!["הלך"]);
    assert_eq!(results[2], vec!["ספר$", "ספר", "סיפר"]);
}
