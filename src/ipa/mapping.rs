//! Character classification
//!
//! The map is built in two phases. A [`MapBuilder`] accepts registrations and
//! rejects any code point registered twice; [`MapBuilder::build`] freezes it into
//! a [`ClassificationMap`], a cheap-to-clone read-only handle that every parser
//! shares.
//!
//! Space and hyphen are never looked up in the table: they always classify as
//! [`Symbol::Spacing`] (hyphens act as word boundaries in dictionary-style
//! transcriptions).

pub mod standard;

use crate::ipa::error::{IpaError, MappingError};
use crate::ipa::symbol::{
    Backness, Bracket, BracketType, ConsonantFeatures, Diacritic, DiacriticKind, Height, Manner,
    Place, Symbol, SupraCategory, ToneHeight, VowelFeatures,
};
use std::collections::HashMap;
use std::sync::Arc;

static SPACING: Symbol = Symbol::Spacing;

/// Returns true for characters that always classify as spacing
pub fn is_spacing(c: char) -> bool {
    c.is_whitespace() || c == '-'
}

/// Mutable registration phase of the classification map
#[derive(Debug, Default)]
pub struct MapBuilder {
    map: HashMap<char, Symbol>,
    brackets: HashMap<BracketType, (char, char)>,
}

impl MapBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn add(&mut self, character: char, symbol: Symbol) -> Result<&mut Self, MappingError> {
        if is_spacing(character) {
            return Err(MappingError::Spacing { character });
        }
        if let Some(previous) = self.map.get(&character) {
            return Err(MappingError::Duplicate {
                character,
                previous: previous.clone(),
            });
        }
        self.map.insert(character, symbol);
        Ok(self)
    }

    pub fn add_vowel(
        &mut self,
        character: char,
        height: Height,
        backness: Backness,
        rounded: bool,
    ) -> Result<&mut Self, MappingError> {
        self.add(
            character,
            Symbol::Vowel(VowelFeatures {
                height,
                backness,
                rounded,
            }),
        )
    }

    pub fn add_consonant(
        &mut self,
        character: char,
        manner: Manner,
        places: &[Place],
        voiced: bool,
        lateral: bool,
        nasal: bool,
    ) -> Result<&mut Self, MappingError> {
        self.add(
            character,
            Symbol::Consonant(ConsonantFeatures {
                manner,
                places: places.iter().copied().collect(),
                voiced,
                lateral,
                nasal,
            }),
        )
    }

    pub fn add_diacritic(
        &mut self,
        character: char,
        kind: DiacriticKind,
        label: impl Into<String>,
    ) -> Result<&mut Self, MappingError> {
        self.add(
            character,
            Symbol::Diacritic(Diacritic {
                kind,
                label: label.into(),
            }),
        )
    }

    pub fn add_supra(
        &mut self,
        character: char,
        category: SupraCategory,
        value: impl Into<String>,
    ) -> Result<&mut Self, MappingError> {
        self.add(
            character,
            Symbol::Supra {
                category,
                value: value.into(),
            },
        )
    }

    pub fn add_tone_letter(
        &mut self,
        character: char,
        height: ToneHeight,
    ) -> Result<&mut Self, MappingError> {
        self.add(character, Symbol::ToneLetter { height })
    }

    pub fn add_tie_bar(&mut self, character: char) -> Result<&mut Self, MappingError> {
        self.add(character, Symbol::TieBar)
    }

    /// Register a matched bracket pair. When `start == end` the character is
    /// registered once, as both the opener and the closer of `bracket_type`.
    pub fn add_brackets(
        &mut self,
        bracket_type: BracketType,
        start: char,
        end: char,
    ) -> Result<&mut Self, MappingError> {
        if start == end {
            self.add(
                start,
                Symbol::Bracket(Bracket {
                    start: Some(bracket_type),
                    end: Some(bracket_type),
                }),
            )?;
        } else {
            self.add(
                start,
                Symbol::Bracket(Bracket {
                    start: Some(bracket_type),
                    end: None,
                }),
            )?;
            self.add(
                end,
                Symbol::Bracket(Bracket {
                    start: None,
                    end: Some(bracket_type),
                }),
            )?;
        }
        self.brackets.insert(bracket_type, (start, end));
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Freeze the registrations into a shareable read-only map
    pub fn build(self) -> ClassificationMap {
        ClassificationMap {
            inner: Arc::new(MapData {
                map: self.map,
                brackets: self.brackets,
            }),
        }
    }
}

#[derive(Debug)]
struct MapData {
    map: HashMap<char, Symbol>,
    brackets: HashMap<BracketType, (char, char)>,
}

/// Read-only character classification, shared across parsers and threads
#[derive(Debug, Clone)]
pub struct ClassificationMap {
    inner: Arc<MapData>,
}

impl ClassificationMap {
    /// Classify a single character.
    ///
    /// Spacing characters resolve to [`Symbol::Spacing`] without consulting the table.
    pub fn classify(&self, character: char) -> Result<&Symbol, IpaError> {
        if is_spacing(character) {
            return Ok(&SPACING);
        }
        self.inner
            .map
            .get(&character)
            .ok_or(IpaError::CharacterNotRecognized { character })
    }

    /// The registered (start, end) characters for a bracket type
    pub fn brackets(&self, bracket_type: BracketType) -> Option<(char, char)> {
        self.inner.brackets.get(&bracket_type).copied()
    }

    pub fn contains(&self, character: char) -> bool {
        self.inner.map.contains_key(&character)
    }

    pub fn len(&self) -> usize {
        self.inner.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.map.is_empty()
    }

    /// Iterate over every registered character and its classification
    pub fn iter(&self) -> impl Iterator<Item = (char, &Symbol)> {
        self.inner.map.iter().map(|(c, s)| (*c, s))
    }
}
