//! Output types: phonetic units and parse results

use crate::ipa::building::contour;
use crate::ipa::symbol::{
    BracketType, ConsonantFeatures, Diacritic, SupraCategory, ToneHeight, VowelFeatures,
};
use serde::Serialize;
use std::fmt;

/// Tone labels: the five levels plus the contour shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToneLabel {
    ExtraLow,
    Low,
    Mid,
    High,
    ExtraHigh,
    Rising,
    LowRising,
    HighRising,
    Falling,
    LowFalling,
    HighFalling,
    RisingFalling,
    FallingRising,
    Other,
}

impl ToneLabel {
    /// Level label for a single height
    pub fn level(height: ToneHeight) -> Self {
        match height {
            ToneHeight::ExtraLow => ToneLabel::ExtraLow,
            ToneHeight::Low => ToneLabel::Low,
            ToneHeight::Mid => ToneLabel::Mid,
            ToneHeight::High => ToneLabel::High,
            ToneHeight::ExtraHigh => ToneLabel::ExtraHigh,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ToneLabel::ExtraLow => "extra-low",
            ToneLabel::Low => "low",
            ToneLabel::Mid => "mid",
            ToneLabel::High => "high",
            ToneLabel::ExtraHigh => "extra-high",
            ToneLabel::Rising => "rising",
            ToneLabel::LowRising => "low-rising",
            ToneLabel::HighRising => "high-rising",
            ToneLabel::Falling => "falling",
            ToneLabel::LowFalling => "low-falling",
            ToneLabel::HighFalling => "high-falling",
            ToneLabel::RisingFalling => "rising-falling",
            ToneLabel::FallingRising => "falling-rising",
            ToneLabel::Other => "other",
        }
    }

    pub fn is_contour(self) -> bool {
        !matches!(
            self,
            ToneLabel::ExtraLow
                | ToneLabel::Low
                | ToneLabel::Mid
                | ToneLabel::High
                | ToneLabel::ExtraHigh
        )
    }
}

impl fmt::Display for ToneLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A tone with its ordered heights
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tone {
    pub label: ToneLabel,
    pub heights: Vec<ToneHeight>,
}

impl Tone {
    /// Classify `heights` into a tone. Heights are kept as given.
    ///
    /// Returns `None` for an empty height list.
    pub fn from_heights(heights: Vec<ToneHeight>) -> Option<Self> {
        let label = contour::classify(&heights)?;
        Some(Tone { label, heights })
    }

    /// Heights as numeric levels
    pub fn levels(&self) -> Vec<u8> {
        self.heights.iter().map(|h| h.level()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "type")]
pub enum SegmentKind {
    Vowel(VowelFeatures),
    Consonant(ConsonantFeatures),
}

/// A vowel or consonant with everything attached to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub base: char,
    pub kind: SegmentKind,
    pub diacritics: Vec<Diacritic>,
    /// Tone carried by tone-mark diacritics on this segment
    pub tone: Option<Tone>,
    /// Linked to the previous segment by a tie-bar
    pub tied_to_previous: bool,
    /// Linked to the next segment by a tie-bar
    pub tied_to_next: bool,
}

impl Segment {
    pub fn new(base: char, kind: SegmentKind) -> Self {
        Segment {
            base,
            kind,
            diacritics: Vec::new(),
            tone: None,
            tied_to_previous: false,
            tied_to_next: false,
        }
    }

    pub fn is_vowel(&self) -> bool {
        matches!(self.kind, SegmentKind::Vowel(_))
    }

    pub fn is_consonant(&self) -> bool {
        matches!(self.kind, SegmentKind::Consonant(_))
    }

    pub fn has_diacritic(&self, label: &str) -> bool {
        self.diacritics.iter().any(|d| d.label == label)
    }
}

/// One unit of the parsed transcription
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "unit")]
pub enum PhoneticUnit {
    Segment(Segment),
    Supra {
        category: SupraCategory,
        value: String,
    },
    Tone(Tone),
}

impl PhoneticUnit {
    pub fn supra(category: SupraCategory, value: impl Into<String>) -> Self {
        PhoneticUnit::Supra {
            category,
            value: value.into(),
        }
    }

    pub fn is_segment(&self) -> bool {
        matches!(self, PhoneticUnit::Segment(_))
    }

    pub fn as_segment(&self) -> Option<&Segment> {
        match self {
            PhoneticUnit::Segment(segment) => Some(segment),
            _ => None,
        }
    }

    pub fn as_tone(&self) -> Option<&Tone> {
        match self {
            PhoneticUnit::Tone(tone) => Some(tone),
            _ => None,
        }
    }
}

/// The bracket convention of a transcription, or none for bare input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TranscriptionType {
    None,
    Bracketed(BracketType),
}

impl TranscriptionType {
    pub fn name(self) -> &'static str {
        match self {
            TranscriptionType::None => "none",
            TranscriptionType::Bracketed(bracket_type) => bracket_type.name(),
        }
    }

    pub fn is_none(self) -> bool {
        self == TranscriptionType::None
    }
}

impl fmt::Display for TranscriptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for TranscriptionType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// One reading of the input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseResult {
    #[serde(rename = "type")]
    pub transcription_type: TranscriptionType,
    pub units: Vec<PhoneticUnit>,
}

impl ParseResult {
    /// Every tone in order, standalone or attached to a segment
    pub fn tones(&self) -> impl Iterator<Item = &Tone> {
        self.units.iter().filter_map(|unit| match unit {
            PhoneticUnit::Tone(tone) => Some(tone),
            PhoneticUnit::Segment(segment) => segment.tone.as_ref(),
            PhoneticUnit::Supra { .. } => None,
        })
    }

    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.units.iter().filter_map(PhoneticUnit::as_segment)
    }
}

/// Render parse results as pretty JSON
pub fn to_json(results: &[ParseResult]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(results)
}
