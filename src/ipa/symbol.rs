//! Classified symbols
//!
//! Every character of a normalized transcription is classified into exactly one
//! [`Symbol`] by the [`ClassificationMap`](crate::ipa::mapping::ClassificationMap).
//! The variants are closed: the parser and the unit builder match on them
//! exhaustively, so adding a category is a compile-time visible change.

use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;

/// Vowel height, from close to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Height {
    Close,
    NearClose,
    CloseMid,
    Mid,
    OpenMid,
    NearOpen,
    Open,
}

/// Vowel backness, from front to back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Backness {
    Front,
    NearFront,
    Central,
    NearBack,
    Back,
}

/// Consonant manner of articulation.
///
/// Nasal stops are `Plosive` with the `nasal` flag set, the same way laterals are
/// expressed through the `lateral` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Manner {
    Plosive,
    Fricative,
    Approximant,
    Trill,
    Flap,
    Implosive,
    Click,
}

/// Place of articulation. Ordered so place sets have a stable iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Place {
    Bilabial,
    Labiodental,
    Linguolabial,
    Dental,
    Alveolar,
    Postalveolar,
    Retroflex,
    AlveoloPalatal,
    Palatal,
    Velar,
    Uvular,
    Pharyngeal,
    Epiglottal,
    Glottal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VowelFeatures {
    pub height: Height,
    pub backness: Backness,
    pub rounded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConsonantFeatures {
    pub manner: Manner,
    pub places: BTreeSet<Place>,
    pub voiced: bool,
    pub lateral: bool,
    pub nasal: bool,
}

/// One of the five tone levels, 1 (extra-low) to 5 (extra-high).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum ToneHeight {
    ExtraLow = 1,
    Low = 2,
    Mid = 3,
    High = 4,
    ExtraHigh = 5,
}

impl ToneHeight {
    pub const ALL: [ToneHeight; 5] = [
        ToneHeight::ExtraLow,
        ToneHeight::Low,
        ToneHeight::Mid,
        ToneHeight::High,
        ToneHeight::ExtraHigh,
    ];

    /// Numeric level, 1..=5
    pub fn level(self) -> u8 {
        self as u8
    }

    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(ToneHeight::ExtraLow),
            2 => Some(ToneHeight::Low),
            3 => Some(ToneHeight::Mid),
            4 => Some(ToneHeight::High),
            5 => Some(ToneHeight::ExtraHigh),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ToneHeight::ExtraLow => "extra-low",
            ToneHeight::Low => "low",
            ToneHeight::Mid => "mid",
            ToneHeight::High => "high",
            ToneHeight::ExtraHigh => "extra-high",
        }
    }
}

impl fmt::Display for ToneHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level())
    }
}

// Heights serialize as their level so JSON output reads `"heights": [1, 5]`.
impl Serialize for ToneHeight {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.level())
    }
}

/// What a diacritic modifies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "type")]
pub enum DiacriticKind {
    Phonation,
    Articulation,
    Coarticulation,
    Syllabicity,
    Rhoticity,
    Release,
    Airstream,
    /// Combining length marks (the extra-short breve)
    Length,
    /// A tone mark. Level marks carry one height, contour marks carry several.
    Tone { heights: Vec<ToneHeight> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diacritic {
    pub kind: DiacriticKind,
    pub label: String,
}

impl Diacritic {
    pub fn tone_heights(&self) -> Option<&[ToneHeight]> {
        match &self.kind {
            DiacriticKind::Tone { heights } => Some(heights),
            _ => None,
        }
    }
}

/// Bracket conventions. The outer pair sets the transcription type of a parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BracketType {
    Phonemic,
    Phonetic,
    Orthographic,
    Prosodic,
    /// Parentheses: marks an optional (indistinguishable) segment
    Indistinguishable,
    Obscured,
}

impl BracketType {
    pub fn name(self) -> &'static str {
        match self {
            BracketType::Phonemic => "phonemic",
            BracketType::Phonetic => "phonetic",
            BracketType::Orthographic => "orthographic",
            BracketType::Prosodic => "prosodic",
            BracketType::Indistinguishable => "indistinguishable",
            BracketType::Obscured => "obscured",
        }
    }
}

impl fmt::Display for BracketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A bracket character. Self-delimiting brackets (`/`) are both start and end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bracket {
    pub start: Option<BracketType>,
    pub end: Option<BracketType>,
}

impl Bracket {
    pub fn opens(&self, bracket_type: BracketType) -> bool {
        self.start == Some(bracket_type)
    }

    pub fn closes(&self, bracket_type: BracketType) -> bool {
        self.end == Some(bracket_type)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SupraCategory {
    Stress,
    Length,
    Separator,
    ToneStep,
    Intonation,
}

impl SupraCategory {
    pub fn name(self) -> &'static str {
        match self {
            SupraCategory::Stress => "stress",
            SupraCategory::Length => "length",
            SupraCategory::Separator => "separator",
            SupraCategory::ToneStep => "tone-step",
            SupraCategory::Intonation => "intonation",
        }
    }
}

impl fmt::Display for SupraCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classification of a single character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "type")]
pub enum Symbol {
    Vowel(VowelFeatures),
    Consonant(ConsonantFeatures),
    Diacritic(Diacritic),
    TieBar,
    Bracket(Bracket),
    Supra {
        category: SupraCategory,
        value: String,
    },
    ToneLetter {
        height: ToneHeight,
    },
    /// Space or hyphen. Never stored in the map, see [`ClassificationMap::classify`](crate::ipa::mapping::ClassificationMap::classify).
    Spacing,
}

impl Symbol {
    /// Short category name, used in logs and error messages
    pub fn category(&self) -> &'static str {
        match self {
            Symbol::Vowel(_) => "vowel",
            Symbol::Consonant(_) => "consonant",
            Symbol::Diacritic(_) => "diacritic",
            Symbol::TieBar => "tie-bar",
            Symbol::Bracket(_) => "bracket",
            Symbol::Supra { .. } => "supra",
            Symbol::ToneLetter { .. } => "tone-letter",
            Symbol::Spacing => "spacing",
        }
    }

    pub fn is_segment(&self) -> bool {
        matches!(self, Symbol::Vowel(_) | Symbol::Consonant(_))
    }
}
