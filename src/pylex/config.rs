//! Configuration loading
//!
//! `defaults/pylex.default.toml` is embedded into every binary so that docs and runtime behavior
//! stay in sync. Applications layer user-specific files and single-key overrides on top of those
//! defaults via [`Loader`] before deserializing into [`PylexConfig`].

use crate::pylex::error::Result;
use crate::pylex::lexing::LeadingSpaceMethod;
use crate::pylex::tab_info::{TabInfo, DEFAULT_TAB_SIZE};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/pylex.default.toml");

/// Top-level configuration consumed by pylex hosts.
#[derive(Debug, Clone, Deserialize)]
pub struct PylexConfig {
    pub tabs: TabsConfig,
    pub reader: ReaderConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TabsConfig {
    pub size: TabSize,
    pub hard: bool,
}

/// Tab size as written by the user: a number, or free text such as "auto".
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TabSize {
    Number(i64),
    Text(String),
}

impl TabSize {
    /// The configured width, or the default when it is not a positive integer.
    pub fn resolve(&self) -> usize {
        let size = match self {
            TabSize::Number(n) => usize::try_from(*n).ok(),
            TabSize::Text(text) => text.trim().parse::<usize>().ok(),
        };
        size.filter(|n| *n > 0).unwrap_or(DEFAULT_TAB_SIZE)
    }
}

impl TabsConfig {
    pub fn tab_info(&self) -> TabInfo {
        TabInfo::new(self.size.resolve(), self.hard)
    }
}

/// Settings for the reader queries (cursor window, leading-space counting).
#[derive(Debug, Clone, Deserialize)]
pub struct ReaderConfig {
    pub context_window: usize,
    pub leading_spaces: LeadingSpaceMethod,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<PylexConfig> {
        Ok(self.builder.build()?.try_deserialize()?)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<PylexConfig> {
    Loader::new().build()
}
