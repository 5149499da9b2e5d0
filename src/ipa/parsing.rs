//! Candidate parsing
//!
//! Parses one alternative-free candidate into a [`ParseResult`]. The bracket
//! discipline is the expander's without the alternative state:
//!
//! ```text
//!   INIT ──opener──▶ OPEN ──matching closer──▶ CLOSE
//!     └────data───────▲
//! ```
//!
//! Spacing never changes the state, it only closes the unit in progress. Every
//! other non-bracket symbol goes to the [`UnitBuilder`].

use crate::ipa::building::{BuildError, UnitBuilder};
use crate::ipa::error::{IpaError, IpaResult, SyntaxErrorKind};
use crate::ipa::expansion::open_state_bracket;
use crate::ipa::mapping::ClassificationMap;
use crate::ipa::symbol::{BracketType, Symbol};
use crate::ipa::units::{ParseResult, TranscriptionType};
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Init,
    Open,
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Open(BracketType),
    Close,
    Boundary,
    Data,
}

/// Parses alternative-free candidates
#[derive(Debug, Clone)]
pub struct CandidateParser {
    map: ClassificationMap,
}

impl CandidateParser {
    pub fn new(map: ClassificationMap) -> Self {
        CandidateParser { map }
    }

    pub fn parse(&self, candidate: &str) -> IpaResult<ParseResult> {
        let mut builder = UnitBuilder::new();
        let mut state = State::Init;
        let mut transcription_type = TranscriptionType::None;

        for (index, c) in candidate.char_indices() {
            let parsed = &candidate[..index + c.len_utf8()];
            let symbol = self.map.classify(c)?;
            let step = transition(state, symbol, transcription_type)
                .map_err(|kind| IpaError::syntax(kind, Some(c), parsed))?;
            trace!(?state, ?step, character = %c, "parse step");

            match step {
                Step::Open(bracket_type) => {
                    transcription_type = TranscriptionType::Bracketed(bracket_type);
                    state = State::Open;
                }
                Step::Close => state = State::Close,
                Step::Boundary => builder.boundary(),
                Step::Data => {
                    state = State::Open;
                    builder.add(c, symbol).map_err(|err| match err {
                        BuildError::WithoutBase(character) => IpaError::DiacriticWithoutBase {
                            character,
                            parsed: parsed.to_string(),
                        },
                    })?;
                }
            }
        }

        if state == State::Open && !transcription_type.is_none() {
            return Err(IpaError::syntax(
                SyntaxErrorKind::MissingClosingBracket,
                None,
                candidate,
            ));
        }

        Ok(ParseResult {
            transcription_type,
            units: builder.end(),
        })
    }
}

fn transition(
    state: State,
    symbol: &Symbol,
    transcription_type: TranscriptionType,
) -> Result<Step, SyntaxErrorKind> {
    match (state, symbol) {
        (_, Symbol::Spacing) => Ok(Step::Boundary),
        (State::Init, Symbol::Bracket(bracket)) => match bracket.start {
            Some(bracket_type) => Ok(Step::Open(bracket_type)),
            None => Err(SyntaxErrorKind::UnmatchedCloseBracket),
        },
        (State::Open, Symbol::Bracket(bracket)) => {
            open_state_bracket(bracket, transcription_type).map(|()| Step::Close)
        }
        (State::Close, Symbol::Bracket(bracket)) => Err(if bracket.start.is_some() {
            SyntaxErrorKind::UnexpectedOpenBracket
        } else {
            SyntaxErrorKind::UnmatchedCloseBracket
        }),
        (State::Close, _) => Err(SyntaxErrorKind::DataAfterClose),
        (State::Init | State::Open, _) => Ok(Step::Data),
    }
}
