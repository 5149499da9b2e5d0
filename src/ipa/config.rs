//! Configuration loading
//!
//! `defaults/ipa.default.toml` is embedded into the library so the documented
//! defaults and the runtime behavior cannot drift apart. Callers layer their own
//! files or key overrides on top through [`Loader`] before deserializing into
//! [`IpaConfig`].

use crate::ipa::normalization::NormalizationRule;
use crate::ipa::symbol::BracketType;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/ipa.default.toml");

/// Top-level parser configuration
#[derive(Debug, Clone, Deserialize)]
pub struct IpaConfig {
    pub normalization: NormalizationConfig,
    pub parser: ParserConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NormalizationConfig {
    pub use_standard_rules: bool,
    /// Applied in order, after the standard rules when those are enabled
    #[serde(default)]
    pub rules: Vec<NormalizationRule>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParserConfig {
    pub alternative_bracket: BracketType,
}

/// Stacks configuration sources; later sources win key by key
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Only `defaults/ipa.default.toml` so far
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Add a TOML file that must exist
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Add a TOML file, skipped when the path does not exist
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer inline TOML text
    pub fn with_toml(mut self, toml: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(toml, FileFormat::Toml));
        self
    }

    /// Pin one dotted key, e.g. `parser.alternative_bracket`, above every file
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge the sources and deserialize. Unknown enum values are errors.
    pub fn build(self) -> Result<IpaConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The embedded defaults with nothing layered on top
pub fn load_defaults() -> Result<IpaConfig, ConfigError> {
    Loader::new().build()
}
