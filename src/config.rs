//! TOML configuration.
//!
//! ```toml
//! [chunking]
//! min_chunk_size = 500
//! max_chunk_size = 1500
//!
//! [output]
//! format = "text"   # or "json"
//! ```
//!
//! Every section and key is optional. Command-line flags override values
//! read from the file.

use anyhow::{Context, Result};
use learnkit_core::models::{ChunkBounds, DEFAULT_MAX_CHUNK_SIZE, DEFAULT_MIN_CHUNK_SIZE};
use serde::Deserialize;
use std::path::Path;

/// Config file consulted when `--config` is not given. A missing file at
/// this path is not an error.
pub const DEFAULT_CONFIG_PATH: &str = "./config/learn.toml";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub chunking: ChunkingConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChunkingConfig {
    #[serde(default = "default_min_chunk_size")]
    pub min_chunk_size: usize,
    #[serde(default = "default_max_chunk_size")]
    pub max_chunk_size: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            min_chunk_size: DEFAULT_MIN_CHUNK_SIZE,
            max_chunk_size: DEFAULT_MAX_CHUNK_SIZE,
        }
    }
}

fn default_min_chunk_size() -> usize {
    DEFAULT_MIN_CHUNK_SIZE
}
fn default_max_chunk_size() -> usize {
    DEFAULT_MAX_CHUNK_SIZE
}

impl ChunkingConfig {
    /// Resolve bounds, letting `min`/`max` flags override the file values.
    pub fn bounds(&self, min: Option<usize>, max: Option<usize>) -> Result<ChunkBounds> {
        let min = min.unwrap_or(self.min_chunk_size);
        let max = max.unwrap_or(self.max_chunk_size);
        ChunkBounds::new(min, max).with_context(|| "Invalid chunk size bounds")
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Rendering for commands that print results to stdout.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Config {
    /// Built-in defaults, used when no config file is present.
    pub fn minimal() -> Self {
        Self::default()
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    // Validate chunking
    if config.chunking.min_chunk_size == 0 || config.chunking.max_chunk_size == 0 {
        anyhow::bail!("chunking.min_chunk_size and chunking.max_chunk_size must be > 0");
    }
    if config.chunking.min_chunk_size > config.chunking.max_chunk_size {
        anyhow::bail!(
            "chunking.min_chunk_size ({}) must not exceed chunking.max_chunk_size ({})",
            config.chunking.min_chunk_size,
            config.chunking.max_chunk_size
        );
    }

    Ok(config)
}

/// Load `explicit` if given; otherwise the default path if it exists;
/// otherwise [`Config::minimal`].
pub fn resolve_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => load_config(path),
        None => {
            let default = Path::new(DEFAULT_CONFIG_PATH);
            if default.exists() {
                load_config(default)
            } else {
                tracing::debug!("no config file at {}, using defaults", DEFAULT_CONFIG_PATH);
                Ok(Config::minimal())
            }
        }
    }
}
