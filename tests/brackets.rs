//! Bracket discipline and alternative expansion through the full pipeline

use ipa_parser::ipa::symbol::{BracketType, SupraCategory};
use ipa_parser::ipa::units::ToneLabel;
use ipa_parser::{IpaError, IpaParser, PhoneticUnit, SyntaxErrorKind, TranscriptionType};
use rstest::rstest;

fn parse(input: &str) -> Result<Vec<ipa_parser::ParseResult>, IpaError> {
    IpaParser::standard().parse(input)
}

fn bases(result: &ipa_parser::ParseResult) -> String {
    result.segments().map(|segment| segment.base).collect()
}

#[rstest]
#[case::none("ab", TranscriptionType::None)]
#[case::phonemic("/ab/", TranscriptionType::Bracketed(BracketType::Phonemic))]
#[case::phonetic("[ab]", TranscriptionType::Bracketed(BracketType::Phonetic))]
#[case::orthographic("⟨ab⟩", TranscriptionType::Bracketed(BracketType::Orthographic))]
#[case::prosodic("{ab}", TranscriptionType::Bracketed(BracketType::Prosodic))]
#[case::obscured("⸨ab⸩", TranscriptionType::Bracketed(BracketType::Obscured))]
fn transcription_type_follows_outer_brackets(
    #[case] input: &str,
    #[case] expected: TranscriptionType,
) {
    let results = parse(input).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].transcription_type, expected);
    assert_eq!(bases(&results[0]), "ab");
}

#[rstest]
#[case::stray_close(")", SyntaxErrorKind::UnmatchedCloseBracket)]
#[case::close_after_data("ab]", SyntaxErrorKind::UnmatchedCloseBracket)]
#[case::open_after_data("ab[", SyntaxErrorKind::UnexpectedOpenBracket)]
#[case::mismatch("/a[b/", SyntaxErrorKind::BracketTypeMismatch)]
#[case::wrong_close("[ab/", SyntaxErrorKind::BracketTypeMismatch)]
#[case::data_after_close("/a/b", SyntaxErrorKind::DataAfterClose)]
#[case::reopen_after_close("/a/[b]", SyntaxErrorKind::UnexpectedOpenBracket)]
#[case::missing_close("/ab", SyntaxErrorKind::MissingClosingBracket)]
#[case::missing_alternative_close("/a(b", SyntaxErrorKind::MissingClosingBracket)]
#[case::nested_alternative("/a((b))/", SyntaxErrorKind::UnexpectedOpenBracket)]
#[case::alternative_closed_by_outer("/a(b/", SyntaxErrorKind::BracketTypeMismatch)]
fn bracket_errors(#[case] input: &str, #[case] kind: SyntaxErrorKind) {
    let err = parse(input).unwrap_err();
    assert_eq!(err.syntax_kind(), Some(kind), "{input}: {err}");
}

#[test]
fn error_reports_offending_character_and_prefix() {
    match parse("/ab/c").unwrap_err() {
        IpaError::Syntax(err) => {
            assert_eq!(err.kind, SyntaxErrorKind::DataAfterClose);
            assert_eq!(err.character, Some('c'));
            assert_eq!(err.parsed, "/ab/c");
        }
        other => panic!("expected a syntax error, got {other:?}"),
    }
}

#[test]
fn unknown_character_is_reported() {
    assert_eq!(
        parse("/aQ/").unwrap_err(),
        IpaError::CharacterNotRecognized { character: 'Q' }
    );
}

#[test]
fn diacritic_without_base_is_reported() {
    let err = parse("/\u{0303}/").unwrap_err();
    assert!(matches!(
        err,
        IpaError::DiacriticWithoutBase { character: '\u{0303}', .. }
    ));
    assert!(matches!(
        parse("\u{0361}a").unwrap_err(),
        IpaError::DiacriticWithoutBase { character: '\u{0361}', .. }
    ));
}

#[test]
fn one_alternative_gives_two_readings() {
    let results = parse("/a(b)c/").unwrap();
    let readings: Vec<String> = results.iter().map(bases).collect();
    assert_eq!(readings, vec!["ac", "abc"]);
    assert!(results.iter().all(|r| r.transcription_type
        == TranscriptionType::Bracketed(BracketType::Phonemic)));
}

#[test]
fn alternatives_multiply_in_order() {
    let results = parse("[(a)b(c)]").unwrap();
    let readings: Vec<String> = results.iter().map(bases).collect();
    assert_eq!(readings, vec!["b", "ab", "bc", "abc"]);
}

#[test]
fn alternative_may_hold_suprasegmentals_and_tones() {
    let results = parse("/a(ː)/").unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].units.len(), 1);
    assert_eq!(
        results[1].units[1],
        PhoneticUnit::supra(SupraCategory::Length, "long")
    );

    let toned = parse("˩(˥)").unwrap();
    let labels: Vec<ToneLabel> = toned
        .iter()
        .flat_map(|r| r.tones().map(|t| t.label).collect::<Vec<_>>())
        .collect();
    assert_eq!(labels, vec![ToneLabel::ExtraLow, ToneLabel::Rising]);
}

#[test]
fn spacing_separates_words() {
    let results = parse("/ab cd/").unwrap();
    assert_eq!(bases(&results[0]), "abcd");
    assert_eq!(results[0].units.len(), 4);

    let hyphenated = parse("˩-˥").unwrap();
    let labels: Vec<ToneLabel> = hyphenated[0].tones().map(|t| t.label).collect();
    assert_eq!(labels, vec![ToneLabel::ExtraLow, ToneLabel::ExtraHigh]);
}

#[test]
fn empty_input_gives_one_empty_result() {
    let results = parse("").unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].transcription_type, TranscriptionType::None);
    assert!(results[0].units.is_empty());
}
