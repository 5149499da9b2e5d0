//! Parser entry point
//!
//! [`IpaParser`] owns a read-only classification map and the three-stage pipeline
//! built on it:
//!
//! ```text
//!   input ─▶ Normalization ─▶ Expansion ─▶ Parsing ─▶ Vec<ParseResult>
//! ```
//!
//! A parser holds no per-call state, so one instance can serve any number of
//! threads. The map is shared, never copied, between the stages.

use crate::ipa::config::IpaConfig;
use crate::ipa::error::{IpaError, IpaResult};
use crate::ipa::expansion::AlternativeExpander;
use crate::ipa::mapping::standard::STANDARD;
use crate::ipa::mapping::ClassificationMap;
use crate::ipa::normalization::{Normalizer, RuleError};
use crate::ipa::parsing::CandidateParser;
use crate::ipa::symbol::BracketType;
use crate::ipa::transforms::stages::{Expansion, Normalization, Parsing};
use crate::ipa::transforms::Transform;
use crate::ipa::units::ParseResult;
use tracing::debug;

/// Bracket type delimiting alternative blocks unless configured otherwise
pub const DEFAULT_ALTERNATIVE_BRACKET: BracketType = BracketType::Indistinguishable;

#[derive(Debug)]
pub struct IpaParser {
    map: ClassificationMap,
    alternative: BracketType,
    normalizer: Normalizer,
    expander: AlternativeExpander,
    pipeline: Transform<String, Vec<ParseResult>>,
}

impl IpaParser {
    /// Parser over `map`, with `( )` delimiting alternatives
    pub fn new(map: ClassificationMap, normalizer: Normalizer) -> Self {
        Self::with_alternative(map, normalizer, DEFAULT_ALTERNATIVE_BRACKET)
    }

    pub fn with_alternative(
        map: ClassificationMap,
        normalizer: Normalizer,
        alternative: BracketType,
    ) -> Self {
        let expander = AlternativeExpander::new(map.clone(), alternative);
        let pipeline = Transform::from_fn(Ok)
            .then(Normalization::new(normalizer.clone()))
            .then(Expansion::new(expander.clone()))
            .then(Parsing::new(CandidateParser::new(map.clone())));
        IpaParser {
            map,
            alternative,
            normalizer,
            expander,
            pipeline,
        }
    }

    /// The standard inventory with the standard normalization rules
    pub fn standard() -> Self {
        Self::new(STANDARD.clone(), Normalizer::standard())
    }

    /// The standard inventory set up from a loaded configuration
    pub fn from_config(config: &IpaConfig) -> Result<Self, RuleError> {
        let normalizer = Normalizer::from_config(&config.normalization)?;
        Ok(Self::with_alternative(
            STANDARD.clone(),
            normalizer,
            config.parser.alternative_bracket,
        ))
    }

    pub fn map(&self) -> &ClassificationMap {
        &self.map
    }

    pub fn alternative_bracket(&self) -> BracketType {
        self.alternative
    }

    /// Parse `input` into one result per reading.
    ///
    /// Results come in the order alternatives expand: the reading without a
    /// block precedes the one with it. Any error aborts the whole call.
    ///
    /// Each alternative block doubles the work: `k` blocks yield `2^k` readings,
    /// all built before the first one is parsed. Callers taking untrusted input
    /// should bound `k` first with [`IpaParser::count_alternatives`].
    pub fn parse(&self, input: &str) -> IpaResult<Vec<ParseResult>> {
        debug!(input, "parsing transcription");
        let results = self.pipeline.run(input.to_string())?;
        debug!(results = results.len(), "parsed transcription");
        Ok(results)
    }

    /// Number of alternative blocks in `input`, found without expanding them
    pub fn count_alternatives(&self, input: &str) -> IpaResult<usize> {
        let normalized = self.normalizer.normalize(input);
        Ok(self.expander.scan(&normalized)?.alternative_count())
    }

    /// Parse raw bytes. Bytes that are not valid UTF-8 are rejected.
    pub fn parse_bytes(&self, input: &[u8]) -> IpaResult<Vec<ParseResult>> {
        let text =
            std::str::from_utf8(input).map_err(|err| IpaError::InvalidInputType(err.to_string()))?;
        self.parse(text)
    }
}

impl Default for IpaParser {
    fn default() -> Self {
        Self::standard()
    }
}
