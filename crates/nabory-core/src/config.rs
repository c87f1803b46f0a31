//! Configuration types for nabory.
//!
//! [`Config::load`] reads `~/.config/nabory/config.toml` (or an explicit
//! path), layered on top of the built-in defaults. [`Config::defaults`]
//! returns the same defaults without touching the filesystem (useful in
//! tests).

use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[normalizer]
net_to_gross_factor = 1.37

[output]
format          = "tsv"
on_unrecognized = "fail"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub normalizer: NormalizerConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[normalizer]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct NormalizerConfig {
    /// Multiplier applied to net salaries to estimate gross.
    #[serde(default = "default_net_to_gross_factor")]
    pub net_to_gross_factor: f64,
}

fn default_net_to_gross_factor() -> f64 { crate::normalizer::DEFAULT_NET_TO_GROSS }

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self { net_to_gross_factor: default_net_to_gross_factor() }
    }
}

/// `[output]` section of `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub on_unrecognized: UnrecognizedPolicy,
}

/// Report format written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Tsv,
    Jsonl,
}

/// What to do with a row whose salary matches no known shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnrecognizedPolicy {
    /// Abort the whole batch.
    #[default]
    Fail,
    /// Drop the row and log it.
    Skip,
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/nabory/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_or_create(&config_path())
    }

    /// Load `path`, writing the defaults there first when it is missing.
    ///
    /// Only a file that cannot be created falls back to [`Config::defaults`];
    /// an existing file that fails to parse or validate is an error, exactly
    /// as with [`Config::load_from`].
    pub fn load_or_create(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            if let Err(err) = write_defaults(path) {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "config: cannot create file, using built-in defaults"
                );
                return Ok(Self::defaults());
            }
        }
        Self::load_from(path)
    }

    /// Load an explicit config file on top of the built-in defaults. The file
    /// must exist.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let cfg: Config = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(true))
            .build()
            .with_context(|| format!("reading config {}", path.display()))?
            .try_deserialize()
            .with_context(|| format!("parsing config {}", path.display()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    fn validate(&self) -> anyhow::Result<()> {
        let factor = self.normalizer.net_to_gross_factor;
        if !factor.is_finite() || factor <= 0.0 {
            anyhow::bail!("normalizer.net_to_gross_factor must be a positive number, got {factor}");
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn write_defaults(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, DEFAULT_CONFIG.trim_start())
}

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("nabory")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
