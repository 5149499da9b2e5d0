//! Alternative expansion
//!
//! Resolves optional sub-strings into every reading of the input. `/a(b)c/`
//! stands for both `/ac/` and `/abc/`: each alternative block is either skipped
//! or kept, and the readings are the ordered Cartesian product over all blocks.
//!
//! The scan is a four-state machine:
//!
//! ```text
//!   INIT ──opener──▶ OPEN ──alt opener──▶ ALTERNATIVE
//!     │               ▲  │                     │
//!     └──data─────────┘  │◀────alt closer──────┘
//!                        └──matching closer──▶ CLOSE
//! ```
//!
//! Bare input (no outer brackets) is valid: data in `INIT` enters `OPEN` with
//! transcription type none. Bracket balance is a property of the whole input,
//! so any violation aborts the expansion.

use crate::ipa::error::{IpaError, IpaResult, SyntaxErrorKind};
use crate::ipa::mapping::ClassificationMap;
use crate::ipa::symbol::{Bracket, BracketType, Symbol};
use crate::ipa::units::TranscriptionType;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Init,
    Open,
    Alternative,
    Close,
}

/// What a character does to the scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transition {
    /// Outer opener: sets the transcription type
    OpenTranscription(BracketType),
    CloseTranscription,
    StartAlternative,
    EndAlternative,
    /// Data (or spacing) in the current literal segment
    Literal,
    /// Data inside an alternative block
    AlternativeData,
}

/// A piece of the scanned input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpansionSegment {
    Literal(String),
    /// The options of one block. The empty option is implicit.
    Alternative(Vec<String>),
}

/// Outcome of scanning one normalized input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scan {
    pub transcription_type: TranscriptionType,
    pub segments: Vec<ExpansionSegment>,
}

impl Scan {
    pub fn alternative_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, ExpansionSegment::Alternative(_)))
            .count()
    }

    /// Ordered Cartesian product of the segments. The reading without a block
    /// always precedes the readings with it.
    ///
    /// Every reading is materialized: `k` blocks allocate `2^k` strings. Use
    /// [`Scan::alternative_count`] to size the result before expanding.
    pub fn expand(&self) -> Vec<String> {
        let mut expansion = vec![String::new()];
        for segment in &self.segments {
            match segment {
                ExpansionSegment::Literal(text) => {
                    for candidate in expansion.iter_mut() {
                        candidate.push_str(text);
                    }
                }
                ExpansionSegment::Alternative(options) => {
                    let mut next = expansion.clone();
                    for option in options {
                        next.extend(expansion.iter().map(|candidate| format!("{candidate}{option}")));
                    }
                    expansion = next;
                }
            }
        }
        expansion
    }
}

/// Expands bracketed alternatives into candidate strings
#[derive(Debug, Clone)]
pub struct AlternativeExpander {
    map: ClassificationMap,
    alternative: BracketType,
}

impl AlternativeExpander {
    /// `alternative` is the bracket type delimiting alternative blocks
    pub fn new(map: ClassificationMap, alternative: BracketType) -> Self {
        AlternativeExpander { map, alternative }
    }

    /// Every reading of `normalized`, in order
    pub fn expand(&self, normalized: &str) -> IpaResult<Vec<String>> {
        let scan = self.scan(normalized)?;
        let candidates = scan.expand();

        if candidates.len() == 1 && candidates[0] != normalized {
            return Err(IpaError::syntax(
                SyntaxErrorKind::InconsistentAlternativeExpansion,
                None,
                candidates[0].clone(),
            ));
        }
        debug!(
            blocks = scan.alternative_count(),
            candidates = candidates.len(),
            "expanded alternatives"
        );
        Ok(candidates)
    }

    /// Run the bracket state machine over `normalized`
    pub fn scan(&self, normalized: &str) -> IpaResult<Scan> {
        let mut state = State::Init;
        let mut transcription_type = TranscriptionType::None;
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut alternative = String::new();

        for (index, c) in normalized.char_indices() {
            let symbol = self.map.classify(c)?;
            let transition = self
                .transition(state, symbol, transcription_type)
                .map_err(|kind| {
                    IpaError::syntax(kind, Some(c), &normalized[..index + c.len_utf8()])
                })?;
            trace!(?state, ?transition, character = %c, "expansion step");

            match transition {
                Transition::OpenTranscription(bracket_type) => {
                    transcription_type = TranscriptionType::Bracketed(bracket_type);
                    literal.push(c);
                    state = State::Open;
                }
                Transition::CloseTranscription => {
                    literal.push(c);
                    state = State::Close;
                }
                Transition::StartAlternative => {
                    if !literal.is_empty() {
                        segments.push(ExpansionSegment::Literal(std::mem::take(&mut literal)));
                    }
                    alternative.clear();
                    state = State::Alternative;
                }
                Transition::EndAlternative => {
                    segments.push(ExpansionSegment::Alternative(vec![std::mem::take(
                        &mut alternative,
                    )]));
                    state = State::Open;
                }
                Transition::Literal => {
                    literal.push(c);
                    state = State::Open;
                }
                Transition::AlternativeData => alternative.push(c),
            }
        }

        let unterminated = match state {
            State::Alternative => true,
            State::Open => !transcription_type.is_none(),
            State::Init | State::Close => false,
        };
        if unterminated {
            return Err(IpaError::syntax(
                SyntaxErrorKind::MissingClosingBracket,
                None,
                normalized,
            ));
        }

        if !literal.is_empty() {
            segments.push(ExpansionSegment::Literal(literal));
        }
        Ok(Scan {
            transcription_type,
            segments,
        })
    }

    fn transition(
        &self,
        state: State,
        symbol: &Symbol,
        transcription_type: TranscriptionType,
    ) -> Result<Transition, SyntaxErrorKind> {
        let bracket = match symbol {
            Symbol::Bracket(bracket) => bracket,
            _ => {
                return match state {
                    State::Init | State::Open => Ok(Transition::Literal),
                    State::Alternative => Ok(Transition::AlternativeData),
                    State::Close => Err(SyntaxErrorKind::DataAfterClose),
                }
            }
        };

        match state {
            State::Init => match bracket.start {
                Some(bracket_type) => Ok(Transition::OpenTranscription(bracket_type)),
                None => Err(SyntaxErrorKind::UnmatchedCloseBracket),
            },
            State::Open => {
                if bracket.opens(self.alternative) {
                    return Ok(Transition::StartAlternative);
                }
                open_state_bracket(bracket, transcription_type)
                    .map(|()| Transition::CloseTranscription)
            }
            State::Alternative => {
                if bracket.closes(self.alternative) {
                    Ok(Transition::EndAlternative)
                } else if bracket.end.is_none() {
                    Err(SyntaxErrorKind::UnexpectedOpenBracket)
                } else {
                    Err(SyntaxErrorKind::BracketTypeMismatch)
                }
            }
            State::Close => {
                if bracket.start.is_some() {
                    Err(SyntaxErrorKind::UnexpectedOpenBracket)
                } else {
                    Err(SyntaxErrorKind::UnmatchedCloseBracket)
                }
            }
        }
    }
}

/// Bracket discipline shared with the parser for the `OPEN` state: `Ok` means
/// the bracket closes the current transcription.
pub(crate) fn open_state_bracket(
    bracket: &Bracket,
    transcription_type: TranscriptionType,
) -> Result<(), SyntaxErrorKind> {
    let open_type = match transcription_type {
        TranscriptionType::Bracketed(bracket_type) => bracket_type,
        TranscriptionType::None => {
            return Err(if bracket.start.is_some() {
                SyntaxErrorKind::UnexpectedOpenBracket
            } else {
                SyntaxErrorKind::UnmatchedCloseBracket
            })
        }
    };

    if bracket.closes(open_type) {
        Ok(())
    } else if bracket.opens(open_type) {
        Err(SyntaxErrorKind::UnexpectedOpenBracket)
    } else {
        Err(SyntaxErrorKind::BracketTypeMismatch)
    }
}
