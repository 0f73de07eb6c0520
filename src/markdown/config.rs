//! Configuration loading
//!
//!     `defaults/mdtags.default.toml` is embedded into the crate so that documented and
//!     runtime defaults stay in sync. The CLI layers an optional user file and its own
//!     flags on top with [`Loader`]; the result is checked before any scan uses it.

use super::formats::OutputFormat;
use super::parser::{MarkdownParser, ParserKind};
use super::scanning::ScanOptions;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/mdtags.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct MdTagsConfig {
    pub parser: ParserConfig,
    pub scanner: ScanOptions,
    pub output: OutputConfig,
}

impl MdTagsConfig {
    /// The configured backend, ready to scan.
    pub fn build_parser(&self) -> Box<dyn MarkdownParser> {
        self.parser.backend.build(self.scanner.clone())
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.scanner.max_nesting_depth == 0 {
            return Err(ConfigError::Message(
                "scanner.max_nesting_depth must be at least 1".to_string(),
            ));
        }
        if self.scanner.list_indent_width == 0 {
            return Err(ConfigError::Message(
                "scanner.list_indent_width must be at least 1".to_string(),
            ));
        }
        Ok(self)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParserConfig {
    pub backend: ParserKind,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// Defaults, then a user file, then command-line choices.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a TOML file. A missing file is an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    pub fn with_backend(self, backend: ParserKind) -> Result<Self, ConfigError> {
        self.with_override("parser.backend", backend.name())
    }

    pub fn with_format(self, format: OutputFormat) -> Result<Self, ConfigError> {
        self.with_override("output.format", format.name())
    }

    fn with_override(mut self, key: &str, value: &str) -> Result<Self, ConfigError> {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Deserialize the layers and reject settings the scanner can't honor.
    pub fn build(self) -> Result<MdTagsConfig, ConfigError> {
        let config: MdTagsConfig = self.builder.build()?.try_deserialize()?;
        config.validate()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
