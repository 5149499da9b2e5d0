//! # ipa-parser
//!
//! A parser for International Phonetic Alphabet transcriptions.
//!
//! Turns strings such as `/ˈtʃeɪ(n)dʒ/` or `˧˥` into structured phonetic units:
//! segments (vowels and consonants with their diacritics and tie-bar links),
//! tones (with contour classification) and suprasegmental markers.
//!
//! File Layout
//!
//! The processing is a short pipeline, one module per stage:
//! src/ipa
//!   ├── mapping         Character classification table (and the standard inventory)
//!   ├── normalization   Literal/pattern substitutions + NFD
//!   ├── expansion       Bracket checking and alternative block expansion
//!   ├── parsing         Per-candidate bracket state machine
//!   ├── building        Phonetic unit assembly (tone contours live here)
//!   ├── transforms      Runnable stages chained into the full pipeline
//!   ├── parser          IpaParser, the entry point
//!   └── config          Embedded defaults and layered TOML loading
//!
//! Most callers only need [`IpaParser`]:
//!
//! ```rust,ignore
//! use ipa_parser::IpaParser;
//!
//! let parser = IpaParser::standard();
//! let results = parser.parse("/a(b)/")?;
//! assert_eq!(results.len(), 2);
//! ```

pub mod ipa;

pub use ipa::error::{IpaError, SyntaxError, SyntaxErrorKind};
pub use ipa::parser::IpaParser;
pub use ipa::units::{ParseResult, PhoneticUnit, TranscriptionType};
