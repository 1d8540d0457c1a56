//! # CLI Configuration
//!
//! Optional YAML file supplying defaults for the hashing subcommands:
//!
//! ```yaml
//! algorithm: sha1
//! chunk_size: 8192
//! mode: oneshot
//! format: json
//! ```
//!
//! Every field is optional. Precedence is command-line flag, then config
//! file, then the built-in default.

use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use mdhash_core::DigestAlgorithm;

/// Default number of bytes passed to each `update` call.
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Largest accepted chunk size. The read buffer is allocated up front.
pub const MAX_CHUNK_SIZE: usize = 64 * 1024 * 1024;

/// How input is fed to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Stream through a `DigestContext` in fixed-size chunks.
    #[default]
    Incremental,
    /// Read the whole input, then hash it in one call.
    Oneshot,
}

/// Output rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<hex>  <name>` lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Contents of the `--config` file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Default digest algorithm.
    pub algorithm: Option<DigestAlgorithm>,
    /// Default incremental chunk size in bytes.
    pub chunk_size: Option<usize>,
    /// Default input mode.
    pub mode: Option<Mode>,
    /// Default output format.
    pub format: Option<OutputFormat>,
}

impl CliConfig {
    /// Load the config file at `path`, or the empty config when `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }
}

/// Fully resolved settings for one hashing run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Digest algorithm.
    pub algorithm: DigestAlgorithm,
    /// Bytes per `update` call in incremental mode.
    pub chunk_size: usize,
    /// Input mode.
    pub mode: Mode,
    /// Output format.
    pub format: OutputFormat,
}

/// Per-invocation overrides taken from command-line flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    /// `--algorithm`.
    pub algorithm: Option<DigestAlgorithm>,
    /// `--chunk-size`.
    pub chunk_size: Option<usize>,
    /// `--mode`.
    pub mode: Option<Mode>,
    /// `--format`.
    pub format: Option<OutputFormat>,
}

impl Settings {
    /// Merge flags over the config file over built-in defaults.
    pub fn resolve(overrides: Overrides, config: &CliConfig) -> Result<Self> {
        let chunk_size = overrides
            .chunk_size
            .or(config.chunk_size)
            .unwrap_or(DEFAULT_CHUNK_SIZE);
        if chunk_size == 0 {
            bail!("chunk size must be at least 1 byte");
        }
        if chunk_size > MAX_CHUNK_SIZE {
            bail!("chunk size {chunk_size} exceeds the maximum of {MAX_CHUNK_SIZE} bytes");
        }
        Ok(Self {
            algorithm: overrides
                .algorithm
                .or(config.algorithm)
                .unwrap_or(DigestAlgorithm::Sha256),
            chunk_size,
            mode: overrides.mode.or(config.mode).unwrap_or_default(),
            format: overrides.format.or(config.format).unwrap_or_default(),
        })
    }
}
