//! Error types for parsing IPA transcriptions
//!
//! Errors are plain data carriers: a kind, the offending character and, where it
//! helps diagnostics, the prefix of the input parsed before the failure.

use crate::ipa::symbol::Symbol;
use std::fmt;
use thiserror::Error;

/// Errors raised by a parse call. The first error aborts the whole call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IpaError {
    /// Input is not text (invalid UTF-8 bytes)
    #[error("input is not a string: {0}")]
    InvalidInputType(String),

    /// No classification entry and not a spacing character
    #[error("character not recognized: '{character}' (U+{code:04X})", code = *.character as u32)]
    CharacterNotRecognized { character: char },

    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    /// A diacritic or tie-bar with no segment to attach to
    #[error("'{character}' has no preceding segment to modify. Parsed: '{parsed}'")]
    DiacriticWithoutBase { character: char, parsed: String },
}

/// Kinds of bracket/structure violations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    UnmatchedCloseBracket,
    UnexpectedOpenBracket,
    BracketTypeMismatch,
    DataAfterClose,
    MissingClosingBracket,
    InconsistentAlternativeExpansion,
}

impl fmt::Display for SyntaxErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SyntaxErrorKind::UnmatchedCloseBracket => "unexpected close bracket without open bracket",
            SyntaxErrorKind::UnexpectedOpenBracket => "unexpected open bracket",
            SyntaxErrorKind::BracketTypeMismatch => "opening bracket does not match ending bracket",
            SyntaxErrorKind::DataAfterClose => "data after closing bracket",
            SyntaxErrorKind::MissingClosingBracket => "closing bracket is missing",
            SyntaxErrorKind::InconsistentAlternativeExpansion => "alternatives parsing failed",
        };
        f.write_str(text)
    }
}

/// A syntax error with its offending character and the parsed prefix
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}{}. Parsed: '{parsed}'", describe_character(.character))]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub character: Option<char>,
    pub parsed: String,
}

impl SyntaxError {
    pub fn new(kind: SyntaxErrorKind, character: Option<char>, parsed: impl Into<String>) -> Self {
        SyntaxError {
            kind,
            character,
            parsed: parsed.into(),
        }
    }
}

fn describe_character(character: &Option<char>) -> String {
    match character {
        Some(c) => format!(": '{}'", c),
        None => String::new(),
    }
}

impl IpaError {
    /// Shorthand used by the state machines
    pub fn syntax(kind: SyntaxErrorKind, character: Option<char>, parsed: impl Into<String>) -> Self {
        IpaError::Syntax(SyntaxError::new(kind, character, parsed))
    }

    /// The syntax error kind, if this is a syntax error
    pub fn syntax_kind(&self) -> Option<SyntaxErrorKind> {
        match self {
            IpaError::Syntax(err) => Some(err.kind),
            _ => None,
        }
    }
}

/// Errors raised while building a classification map
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    #[error("duplicate data for character '{character}' (U+{code:04X}). Previous: {previous:?}", code = *.character as u32)]
    Duplicate { character: char, previous: Symbol },

    /// Spacing characters are resolved before the table is consulted
    #[error("'{character}' is a spacing character and cannot be registered")]
    Spacing { character: char },
}

/// Type alias for parse results
pub type IpaResult<T> = Result<T, IpaError>;
