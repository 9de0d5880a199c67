//! Configuration for the pgsl tools.
//!
//! The built-in values live in `defaults/pgsl.default.toml`, compiled in with
//! `include_str!`. The CLI stacks either `--config <file>` or an optional
//! `./pgsl.toml` on top, then `--format`, and deserializes the result into
//! [`PgslConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/pgsl.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PgslConfig {
    pub source: SourceConfig,
    pub output: OutputConfig,
}

/// How schema names map to files.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SourceConfig {
    pub extension: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig {
            extension: crate::pgsl::source::DEFAULT_EXTENSION.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: String,
}

/// Builds a [`PgslConfig`] from the defaults plus any number of layers.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Only the built-in defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Add a TOML file that must exist (`--config`).
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Add a TOML file that is skipped when absent (`./pgsl.toml`).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Override one key, e.g. `output.format` from `--format`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<PgslConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
