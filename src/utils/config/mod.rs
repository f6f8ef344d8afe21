//! # Randstr Configuration
//!
//! Configuration for generating random strings. Values are read from a YAML
//! file and can be overridden with `RANDSTR_` environment variables.
//!
//! ## Example
//!
//! ```yaml
//! generator:
//!   length: 32
//!   count: 5
//!   max_length: 4096
//! ```
//!

use figment::{Figment, providers::Serialized};
use std::path::PathBuf;

mod config;
mod generator;

/// Default length of generated strings
pub const DEFAULT_LENGTH: usize = 32;

/// Application Configuration
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct Config {
    #[serde(skip)]
    path: PathBuf,

    /// Generator Configuration
    #[serde(default)]
    pub generator: GeneratorConfig,
}

/// Generator Configuration
///
/// Settings are loaded from the `RANDSTR_GENERATOR_` environment variables.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GeneratorConfig {
    /// Length of each generated string
    ///
    /// Env: `RANDSTR_GENERATOR_LENGTH`
    #[serde(default = "default_length")]
    pub length: usize,

    /// Number of strings to generate
    ///
    /// Env: `RANDSTR_GENERATOR_COUNT`
    #[serde(default = "default_count")]
    pub count: usize,

    /// Largest length callers are allowed to request
    ///
    /// The generator itself has no limit, this is only checked when
    /// validating the configuration.
    ///
    /// Env: `RANDSTR_GENERATOR_MAX_LENGTH`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
}

fn default_length() -> usize {
    DEFAULT_LENGTH
}

fn default_count() -> usize {
    1
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            count: 1,
            max_length: None,
        }
    }
}

impl GeneratorConfig {
    /// Get the Generator Configuration
    pub(crate) fn figment(base: &Self) -> Figment {
        Figment::from(Serialized::defaults(base))
            .merge(figment::providers::Env::prefixed("RANDSTR_GENERATOR_"))
    }
}
