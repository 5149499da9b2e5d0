//! Input normalization
//!
//! Two ordered steps:
//! 1. The configured substitution rules, in order. They collapse ligatures, legacy
//!    glyphs and typographic variants onto the single form the classification map
//!    knows (`ʧ` -> `t͡ʃ`, ASCII `:` -> `ː`, ...).
//! 2. Unicode canonical decomposition (NFD), so `é` becomes `e` + U+0301 and the
//!    diacritic can be classified on its own. `c` + combining cedilla is recomposed
//!    into `ç` right after, since `ç` is a consonant in its own right.

use crate::ipa::config::NormalizationConfig;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use thiserror::Error;
use tracing::trace;
use unicode_normalization::UnicodeNormalization;

const C_CEDILLA_DECOMPOSED: &str = "c\u{0327}";
const C_CEDILLA: &str = "\u{00E7}";

/// A single substitution, literal unless `regex` is set
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NormalizationRule {
    pub pattern: String,
    pub replacement: String,
    #[serde(default)]
    pub regex: bool,
}

impl NormalizationRule {
    pub fn literal(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        NormalizationRule {
            pattern: pattern.into(),
            replacement: replacement.into(),
            regex: false,
        }
    }

    pub fn pattern(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        NormalizationRule {
            pattern: pattern.into(),
            replacement: replacement.into(),
            regex: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum RuleError {
    #[error("invalid normalization pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("normalization rule with an empty pattern")]
    EmptyPattern,
}

#[derive(Debug, Clone)]
enum CompiledRule {
    Literal { from: String, to: String },
    Pattern { regex: Regex, replacement: String },
}

impl CompiledRule {
    fn compile(rule: &NormalizationRule) -> Result<Self, RuleError> {
        if rule.pattern.is_empty() {
            return Err(RuleError::EmptyPattern);
        }
        if !rule.regex {
            return Ok(CompiledRule::Literal {
                from: rule.pattern.clone(),
                to: rule.replacement.clone(),
            });
        }
        let regex = Regex::new(&rule.pattern).map_err(|source| RuleError::InvalidPattern {
            pattern: rule.pattern.clone(),
            source,
        })?;
        Ok(CompiledRule::Pattern {
            regex,
            replacement: rule.replacement.clone(),
        })
    }

    fn apply(&self, text: &str) -> String {
        match self {
            CompiledRule::Literal { from, to } => text.replace(from.as_str(), to),
            CompiledRule::Pattern { regex, replacement } => {
                regex.replace_all(text, replacement.as_str()).into_owned()
            }
        }
    }
}

/// The substitutions applied before decomposition when standard rules are enabled
pub fn standard_rules() -> Vec<NormalizationRule> {
    vec![
        // Affricate ligatures
        NormalizationRule::literal("ʦ", "t\u{0361}s"),
        NormalizationRule::literal("ʣ", "d\u{0361}z"),
        NormalizationRule::literal("ʧ", "t\u{0361}ʃ"),
        NormalizationRule::literal("ʤ", "d\u{0361}ʒ"),
        NormalizationRule::literal("ʨ", "t\u{0361}ɕ"),
        NormalizationRule::literal("ʥ", "d\u{0361}ʑ"),
        // Rhotic vowel ligatures
        NormalizationRule::literal("ɚ", "ə˞"),
        NormalizationRule::literal("ɝ", "ɜ˞"),
        // Typographic stand-ins
        NormalizationRule::literal("g", "ɡ"),
        NormalizationRule::literal(":", "ː"),
        NormalizationRule::literal("'", "ˈ"),
    ]
}

/// The standard rules, compiled once
static STANDARD_NORMALIZER: Lazy<Normalizer> = Lazy::new(|| {
    Normalizer::new(&standard_rules()).expect("standard normalization rules must compile")
});

/// Canonicalizes raw transcriptions before classification
#[derive(Debug, Clone)]
pub struct Normalizer {
    rules: Vec<CompiledRule>,
}

impl Normalizer {
    /// Compile `rules`, preserving their order
    pub fn new(rules: &[NormalizationRule]) -> Result<Self, RuleError> {
        let rules = rules
            .iter()
            .map(CompiledRule::compile)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Normalizer { rules })
    }

    /// A normalizer with the standard rules
    pub fn standard() -> Self {
        STANDARD_NORMALIZER.clone()
    }

    /// Standard rules (if enabled) followed by the configured ones
    pub fn from_config(config: &NormalizationConfig) -> Result<Self, RuleError> {
        let mut rules = if config.use_standard_rules {
            standard_rules()
        } else {
            Vec::new()
        };
        rules.extend(config.rules.iter().cloned());
        Self::new(&rules)
    }

    /// Only NFD (plus the `ç` recomposition), no substitutions
    pub fn without_rules() -> Self {
        Normalizer { rules: Vec::new() }
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    pub fn normalize(&self, input: &str) -> String {
        let substituted = self
            .rules
            .iter()
            .fold(input.to_string(), |text, rule| rule.apply(&text));

        let decomposed: String = substituted.nfd().collect();
        let normalized = decomposed.replace(C_CEDILLA_DECOMPOSED, C_CEDILLA);
        trace!(input, normalized = normalized.as_str(), "normalized");
        normalized
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::standard()
    }
}
