//! Tree configuration with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. TOML file or string handed to the loader

use std::path::Path;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat};
use serde::Deserialize;
use tracing::instrument;

use crate::errors::{TreeError, TreeResult};

/// Validated tree settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeConfig {
    /// Joins names in full names and splits lookup paths
    pub path_separator: char,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            path_separator: Self::DEFAULT_PATH_SEPARATOR,
        }
    }
}

/// Raw settings for intermediate parsing (`None` means not specified).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawTreeConfig {
    pub path_separator: Option<String>,
}

impl TreeConfig {
    pub const DEFAULT_PATH_SEPARATOR: char = '/';

    /// Loads defaults overlaid with an optional TOML file.
    ///
    /// A given file must exist.
    #[instrument(level = "debug")]
    pub fn load(path: Option<&Path>) -> TreeResult<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }
        Self::from_builder(builder)
    }

    /// Loads defaults overlaid with TOML `content`.
    #[instrument(level = "debug", skip(content))]
    pub fn from_toml_str(content: &str) -> TreeResult<Self> {
        let builder = Config::builder().add_source(File::from_str(content, FileFormat::Toml));
        Self::from_builder(builder)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> TreeResult<Self> {
        let raw: RawTreeConfig = builder.build()?.try_deserialize()?;
        Self::default().merge(&raw)
    }

    /// Overlay wins where specified, otherwise keep self.
    pub fn merge(&self, overlay: &RawTreeConfig) -> TreeResult<Self> {
        let path_separator = match &overlay.path_separator {
            Some(value) => parse_separator(value)?,
            None => self.path_separator,
        };
        Ok(Self { path_separator })
    }
}

fn parse_separator(value: &str) -> TreeResult<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(separator), None) => Ok(separator),
        _ => Err(TreeError::InvalidSeparator(value.to_string())),
    }
}
