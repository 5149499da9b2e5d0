//! Phonetic unit assembly
//!
//! [`UnitBuilder`] turns the flat stream of classified symbols into units. Its
//! only state is the pending unit, the one that may still grow:
//!
//! - `Segment`: a vowel or consonant that can still take diacritics
//! - `Tied`: a segment followed by a tie-bar, waiting for its partner
//! - `ToneRun`: consecutive tone letters, collected into one tone
//!
//! Anything that cannot extend the pending unit flushes it first. Spacing flushes
//! without producing a unit, so tone runs and tie-bar pairs never cross a word
//! boundary.

pub mod contour;

use crate::ipa::symbol::{Diacritic, SupraCategory, Symbol, ToneHeight};
use crate::ipa::units::{PhoneticUnit, Segment, SegmentKind, Tone};
use std::mem;
use thiserror::Error;
use tracing::trace;

/// Composition failures. The parser attaches the parsed prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("'{0}' has no preceding segment")]
    WithoutBase(char),
}

#[derive(Debug)]
struct PendingSegment {
    segment: Segment,
    tone_heights: Vec<ToneHeight>,
}

impl PendingSegment {
    fn new(segment: Segment) -> Self {
        PendingSegment {
            segment,
            tone_heights: Vec::new(),
        }
    }

    fn attach(&mut self, diacritic: &Diacritic) {
        match diacritic.tone_heights() {
            Some(heights) => self.tone_heights.extend_from_slice(heights),
            None => self.segment.diacritics.push(diacritic.clone()),
        }
    }

    fn finish(self) -> Segment {
        let mut segment = self.segment;
        segment.tone = Tone::from_heights(self.tone_heights);
        segment
    }
}

#[derive(Debug, Default)]
enum Pending {
    #[default]
    Empty,
    Segment(PendingSegment),
    Tied(PendingSegment),
    ToneRun(Vec<ToneHeight>),
}

/// Assembles phonetic units from classified symbols
#[derive(Debug, Default)]
pub struct UnitBuilder {
    units: Vec<PhoneticUnit>,
    pending: Pending,
}

impl UnitBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one classified character
    pub fn add(&mut self, character: char, symbol: &Symbol) -> Result<(), BuildError> {
        match symbol {
            Symbol::Vowel(features) => {
                self.start_segment(Segment::new(character, SegmentKind::Vowel(features.clone())));
            }
            Symbol::Consonant(features) => {
                self.start_segment(Segment::new(
                    character,
                    SegmentKind::Consonant(features.clone()),
                ));
            }
            Symbol::Diacritic(diacritic) => self.attach(character, diacritic)?,
            Symbol::TieBar => self.tie(character)?,
            Symbol::ToneLetter { height } => self.push_tone_letter(*height),
            Symbol::Supra { category, value } => self.push_supra(*category, value),
            Symbol::Spacing | Symbol::Bracket(_) => self.boundary(),
        }
        Ok(())
    }

    /// Close whatever is in progress without emitting a unit of its own
    pub fn boundary(&mut self) {
        self.flush();
    }

    /// Flush and return every unit in input order
    pub fn end(mut self) -> Vec<PhoneticUnit> {
        self.flush();
        self.units
    }

    fn start_segment(&mut self, mut segment: Segment) {
        match mem::take(&mut self.pending) {
            Pending::Tied(mut previous) => {
                previous.segment.tied_to_next = true;
                segment.tied_to_previous = true;
                self.units.push(PhoneticUnit::Segment(previous.finish()));
            }
            other => self.emit(other),
        }
        self.pending = Pending::Segment(PendingSegment::new(segment));
    }

    fn attach(&mut self, character: char, diacritic: &Diacritic) -> Result<(), BuildError> {
        match &mut self.pending {
            Pending::Segment(pending) | Pending::Tied(pending) => {
                pending.attach(diacritic);
                Ok(())
            }
            Pending::Empty | Pending::ToneRun(_) => Err(BuildError::WithoutBase(character)),
        }
    }

    fn tie(&mut self, character: char) -> Result<(), BuildError> {
        match mem::take(&mut self.pending) {
            Pending::Segment(pending) | Pending::Tied(pending) => {
                self.pending = Pending::Tied(pending);
                Ok(())
            }
            other => {
                self.pending = other;
                Err(BuildError::WithoutBase(character))
            }
        }
    }

    fn push_tone_letter(&mut self, height: ToneHeight) {
        if let Pending::ToneRun(heights) = &mut self.pending {
            heights.push(height);
            return;
        }
        self.flush();
        self.pending = Pending::ToneRun(vec![height]);
    }

    fn push_supra(&mut self, category: SupraCategory, value: &str) {
        self.flush();
        self.units.push(PhoneticUnit::supra(category, value));
    }

    fn flush(&mut self) {
        let pending = mem::take(&mut self.pending);
        self.emit(pending);
    }

    fn emit(&mut self, pending: Pending) {
        match pending {
            Pending::Empty => {}
            Pending::Segment(pending) => {
                self.units.push(PhoneticUnit::Segment(pending.finish()));
            }
            Pending::Tied(pending) => {
                trace!(base = %pending.segment.base, "tie-bar without a following segment");
                self.units.push(PhoneticUnit::Segment(pending.finish()));
            }
            Pending::ToneRun(heights) => {
                if let Some(tone) = Tone::from_heights(heights) {
                    self.units.push(PhoneticUnit::Tone(tone));
                }
            }
        }
    }
}
