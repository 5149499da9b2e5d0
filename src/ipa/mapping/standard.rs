//! Standard IPA inventory
//!
//! The classification map used by [`IpaParser::standard`](crate::ipa::parser::IpaParser::standard).
//! Only base forms are registered: precomposed letters with diacritics are split
//! by NFD during normalization and never reach the table, with the single
//! exception of `ç`, which is its own consonant.

use crate::ipa::error::MappingError;
use crate::ipa::mapping::{ClassificationMap, MapBuilder};
use crate::ipa::symbol::{
    Backness as B, BracketType, DiacriticKind, Height as H, Manner as M, Place as P,
    SupraCategory, ToneHeight,
};
use once_cell::sync::Lazy;

/// The standard inventory, built on first use and shared afterwards
pub static STANDARD: Lazy<ClassificationMap> = Lazy::new(|| {
    standard_map().expect("standard inventory must not register a character twice")
});

// (character, manner, places, voiced, lateral, nasal)
type ConsonantEntry = (char, M, &'static [P], bool, bool, bool);

const CONSONANTS: &[ConsonantEntry] = &[
    // Plosives
    ('p', M::Plosive, &[P::Bilabial], false, false, false),
    ('b', M::Plosive, &[P::Bilabial], true, false, false),
    ('t', M::Plosive, &[P::Alveolar], false, false, false),
    ('d', M::Plosive, &[P::Alveolar], true, false, false),
    ('ʈ', M::Plosive, &[P::Retroflex], false, false, false),
    ('ɖ', M::Plosive, &[P::Retroflex], true, false, false),
    ('c', M::Plosive, &[P::Palatal], false, false, false),
    ('ɟ', M::Plosive, &[P::Palatal], true, false, false),
    ('k', M::Plosive, &[P::Velar], false, false, false),
    ('ɡ', M::Plosive, &[P::Velar], true, false, false),
    ('q', M::Plosive, &[P::Uvular], false, false, false),
    ('ɢ', M::Plosive, &[P::Uvular], true, false, false),
    ('ʡ', M::Plosive, &[P::Epiglottal], false, false, false),
    ('ʔ', M::Plosive, &[P::Glottal], false, false, false),
    // Nasals
    ('m', M::Plosive, &[P::Bilabial], true, false, true),
    ('ɱ', M::Plosive, &[P::Labiodental], true, false, true),
    ('n', M::Plosive, &[P::Alveolar], true, false, true),
    ('ɳ', M::Plosive, &[P::Retroflex], true, false, true),
    ('ɲ', M::Plosive, &[P::Palatal], true, false, true),
    ('ŋ', M::Plosive, &[P::Velar], true, false, true),
    ('ɴ', M::Plosive, &[P::Uvular], true, false, true),
    // Trills
    ('ʙ', M::Trill, &[P::Bilabial], true, false, false),
    ('r', M::Trill, &[P::Alveolar], true, false, false),
    ('ʀ', M::Trill, &[P::Uvular], true, false, false),
    // Taps and flaps
    ('ⱱ', M::Flap, &[P::Labiodental], true, false, false),
    ('ɾ', M::Flap, &[P::Alveolar], true, false, false),
    ('ɽ', M::Flap, &[P::Retroflex], true, false, false),
    ('ɺ', M::Flap, &[P::Alveolar], true, true, false),
    // Fricatives
    ('ɸ', M::Fricative, &[P::Bilabial], false, false, false),
    ('β', M::Fricative, &[P::Bilabial], true, false, false),
    ('f', M::Fricative, &[P::Labiodental], false, false, false),
    ('v', M::Fricative, &[P::Labiodental], true, false, false),
    ('θ', M::Fricative, &[P::Dental], false, false, false),
    ('ð', M::Fricative, &[P::Dental], true, false, false),
    ('s', M::Fricative, &[P::Alveolar], false, false, false),
    ('z', M::Fricative, &[P::Alveolar], true, false, false),
    ('ʃ', M::Fricative, &[P::Postalveolar], false, false, false),
    ('ʒ', M::Fricative, &[P::Postalveolar], true, false, false),
    ('ʂ', M::Fricative, &[P::Retroflex], false, false, false),
    ('ʐ', M::Fricative, &[P::Retroflex], true, false, false),
    ('ɕ', M::Fricative, &[P::AlveoloPalatal], false, false, false),
    ('ʑ', M::Fricative, &[P::AlveoloPalatal], true, false, false),
    ('ç', M::Fricative, &[P::Palatal], false, false, false),
    ('ʝ', M::Fricative, &[P::Palatal], true, false, false),
    ('x', M::Fricative, &[P::Velar], false, false, false),
    ('ɣ', M::Fricative, &[P::Velar], true, false, false),
    ('χ', M::Fricative, &[P::Uvular], false, false, false),
    ('ʁ', M::Fricative, &[P::Uvular], true, false, false),
    ('ħ', M::Fricative, &[P::Pharyngeal], false, false, false),
    ('ʕ', M::Fricative, &[P::Pharyngeal], true, false, false),
    ('ʜ', M::Fricative, &[P::Epiglottal], false, false, false),
    ('ʢ', M::Fricative, &[P::Epiglottal], true, false, false),
    ('h', M::Fricative, &[P::Glottal], false, false, false),
    ('ɦ', M::Fricative, &[P::Glottal], true, false, false),
    ('ɧ', M::Fricative, &[P::Postalveolar, P::Velar], false, false, false),
    ('ʍ', M::Fricative, &[P::Bilabial, P::Velar], false, false, false),
    ('ɬ', M::Fricative, &[P::Alveolar], false, true, false),
    ('ɮ', M::Fricative, &[P::Alveolar], true, true, false),
    // Approximants
    ('ʋ', M::Approximant, &[P::Labiodental], true, false, false),
    ('ɹ', M::Approximant, &[P::Alveolar], true, false, false),
    ('ɻ', M::Approximant, &[P::Retroflex], true, false, false),
    ('j', M::Approximant, &[P::Palatal], true, false, false),
    ('ɰ', M::Approximant, &[P::Velar], true, false, false),
    ('w', M::Approximant, &[P::Bilabial, P::Velar], true, false, false),
    ('ɥ', M::Approximant, &[P::Bilabial, P::Palatal], true, false, false),
    ('l', M::Approximant, &[P::Alveolar], true, true, false),
    ('ɭ', M::Approximant, &[P::Retroflex], true, true, false),
    ('ʎ', M::Approximant, &[P::Palatal], true, true, false),
    ('ʟ', M::Approximant, &[P::Velar], true, true, false),
    ('ɫ', M::Approximant, &[P::Alveolar, P::Velar], true, true, false),
    // Implosives
    ('ɓ', M::Implosive, &[P::Bilabial], true, false, false),
    ('ɗ', M::Implosive, &[P::Alveolar], true, false, false),
    ('ʄ', M::Implosive, &[P::Palatal], true, false, false),
    ('ɠ', M::Implosive, &[P::Velar], true, false, false),
    ('ʛ', M::Implosive, &[P::Uvular], true, false, false),
    // Clicks
    ('ʘ', M::Click, &[P::Bilabial], false, false, false),
    ('ǀ', M::Click, &[P::Dental], false, false, false),
    ('ǃ', M::Click, &[P::Alveolar], false, false, false),
    ('ǂ', M::Click, &[P::Palatal], false, false, false),
    ('ǁ', M::Click, &[P::Alveolar], false, true, false),
];

const VOWELS: &[(char, H, B, bool)] = &[
    ('i', H::Close, B::Front, false),
    ('y', H::Close, B::Front, true),
    ('ɨ', H::Close, B::Central, false),
    ('ʉ', H::Close, B::Central, true),
    ('ɯ', H::Close, B::Back, false),
    ('u', H::Close, B::Back, true),
    ('ɪ', H::NearClose, B::NearFront, false),
    ('ʏ', H::NearClose, B::NearFront, true),
    ('ʊ', H::NearClose, B::NearBack, true),
    ('e', H::CloseMid, B::Front, false),
    ('ø', H::CloseMid, B::Front, true),
    ('ɘ', H::CloseMid, B::Central, false),
    ('ɵ', H::CloseMid, B::Central, true),
    ('ɤ', H::CloseMid, B::Back, false),
    ('o', H::CloseMid, B::Back, true),
    ('ə', H::Mid, B::Central, false),
    ('ɛ', H::OpenMid, B::Front, false),
    ('œ', H::OpenMid, B::Front, true),
    ('ɜ', H::OpenMid, B::Central, false),
    ('ɞ', H::OpenMid, B::Central, true),
    ('ʌ', H::OpenMid, B::Back, false),
    ('ɔ', H::OpenMid, B::Back, true),
    ('æ', H::NearOpen, B::Front, false),
    ('ɐ', H::NearOpen, B::Central, false),
    ('a', H::Open, B::Front, false),
    ('ɶ', H::Open, B::Front, true),
    ('ɑ', H::Open, B::Back, false),
    ('ɒ', H::Open, B::Back, true),
];

fn non_tone_diacritics() -> Vec<(char, DiacriticKind, &'static str)> {
    use DiacriticKind::*;
    vec![
        ('\u{0325}', Phonation, "voiceless"),
        ('\u{030A}', Phonation, "voiceless"),
        ('\u{032C}', Phonation, "voiced"),
        ('\u{0324}', Phonation, "breathy-voiced"),
        ('\u{0330}', Phonation, "creaky-voiced"),
        ('ʰ', Release, "aspirated"),
        ('ⁿ', Release, "nasal-release"),
        ('ˡ', Release, "lateral-release"),
        ('\u{031A}', Release, "no-audible-release"),
        ('\u{0339}', Articulation, "more-rounded"),
        ('\u{031C}', Articulation, "less-rounded"),
        ('\u{031F}', Articulation, "advanced"),
        ('\u{0320}', Articulation, "retracted"),
        ('\u{0308}', Articulation, "centralized"),
        ('\u{033D}', Articulation, "mid-centralized"),
        ('\u{031D}', Articulation, "raised"),
        ('\u{031E}', Articulation, "lowered"),
        ('\u{0318}', Articulation, "advanced-tongue-root"),
        ('\u{0319}', Articulation, "retracted-tongue-root"),
        ('\u{032A}', Articulation, "dental"),
        ('\u{033A}', Articulation, "apical"),
        ('\u{033B}', Articulation, "laminal"),
        ('\u{033C}', Articulation, "linguolabial"),
        ('\u{0329}', Syllabicity, "syllabic"),
        ('\u{030D}', Syllabicity, "syllabic"),
        ('\u{032F}', Syllabicity, "non-syllabic"),
        ('\u{0311}', Syllabicity, "non-syllabic"),
        ('˞', Rhoticity, "rhoticity"),
        ('ʷ', Coarticulation, "labialized"),
        ('ʲ', Coarticulation, "palatalized"),
        ('ˠ', Coarticulation, "velarized"),
        ('ˤ', Coarticulation, "pharyngealized"),
        ('\u{0334}', Coarticulation, "velarized-or-pharyngealized"),
        ('\u{0303}', Coarticulation, "nasalized"),
        ('ʼ', Airstream, "ejective"),
        ('\u{0306}', Length, "extra-short"),
    ]
}

// Level marks carry one height, contour marks spell out their heights.
const TONE_MARKS: &[(char, &[u8], &str)] = &[
    ('\u{030F}', &[1], "extra-low"),
    ('\u{0300}', &[2], "low"),
    ('\u{0304}', &[3], "mid"),
    ('\u{0301}', &[4], "high"),
    ('\u{030B}', &[5], "extra-high"),
    ('\u{030C}', &[1, 5], "rising"),
    ('\u{0302}', &[5, 1], "falling"),
    ('\u{1DC4}', &[4, 5], "high-rising"),
    ('\u{1DC5}', &[1, 2], "low-rising"),
    ('\u{1DC6}', &[2, 1], "low-falling"),
    ('\u{1DC7}', &[5, 4], "high-falling"),
    ('\u{1DC8}', &[3, 4, 3], "rising-falling"),
    ('\u{1DC9}', &[3, 2, 3], "falling-rising"),
];

const SUPRAS: &[(char, SupraCategory, &str)] = &[
    ('ˈ', SupraCategory::Stress, "primary-stress"),
    ('ˌ', SupraCategory::Stress, "secondary-stress"),
    ('ː', SupraCategory::Length, "long"),
    ('ˑ', SupraCategory::Length, "half-long"),
    ('.', SupraCategory::Separator, "syllable-break"),
    ('|', SupraCategory::Separator, "minor-group"),
    ('‖', SupraCategory::Separator, "major-group"),
    ('‿', SupraCategory::Separator, "linking"),
    ('ꜜ', SupraCategory::ToneStep, "downstep"),
    ('ꜛ', SupraCategory::ToneStep, "upstep"),
    ('↗', SupraCategory::Intonation, "global-rise"),
    ('↘', SupraCategory::Intonation, "global-fall"),
];

const TONE_LETTERS: &[(char, ToneHeight)] = &[
    ('˩', ToneHeight::ExtraLow),
    ('˨', ToneHeight::Low),
    ('˧', ToneHeight::Mid),
    ('˦', ToneHeight::High),
    ('˥', ToneHeight::ExtraHigh),
];

const BRACKETS: &[(BracketType, char, char)] = &[
    (BracketType::Phonemic, '/', '/'),
    (BracketType::Phonetic, '[', ']'),
    (BracketType::Orthographic, '⟨', '⟩'),
    (BracketType::Prosodic, '{', '}'),
    (BracketType::Indistinguishable, '(', ')'),
    (BracketType::Obscured, '⸨', '⸩'),
];

/// Register the whole standard inventory into `builder`
pub fn register_standard(builder: &mut MapBuilder) -> Result<(), MappingError> {
    for &(c, manner, places, voiced, lateral, nasal) in CONSONANTS {
        builder.add_consonant(c, manner, places, voiced, lateral, nasal)?;
    }
    for &(c, height, backness, rounded) in VOWELS {
        builder.add_vowel(c, height, backness, rounded)?;
    }
    for (c, kind, label) in non_tone_diacritics() {
        builder.add_diacritic(c, kind, label)?;
    }
    for &(c, levels, label) in TONE_MARKS {
        let heights = levels
            .iter()
            .filter_map(|level| ToneHeight::from_level(*level))
            .collect();
        builder.add_diacritic(c, DiacriticKind::Tone { heights }, label)?;
    }
    for &(c, category, value) in SUPRAS {
        builder.add_supra(c, category, value)?;
    }
    for &(c, height) in TONE_LETTERS {
        builder.add_tone_letter(c, height)?;
    }
    builder.add_tie_bar('\u{0361}')?.add_tie_bar('\u{035C}')?;
    for &(bracket_type, start, end) in BRACKETS {
        builder.add_brackets(bracket_type, start, end)?;
    }
    Ok(())
}

/// Build a fresh map holding the standard inventory
pub fn standard_map() -> Result<ClassificationMap, MappingError> {
    let mut builder = MapBuilder::new();
    register_standard(&mut builder)?;
    Ok(builder.build())
}
