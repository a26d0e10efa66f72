use anyhow::{Context, Result};
use confyg::Confygery;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::round::DEFAULT_CHORD_COUNT;
use scalequiz_theory::scale::DEGREES;

const ENV_CHORD_COUNT: &str = "SCALEQUIZ_CHORD_COUNT";
const ENV_SEED: &str = "SCALEQUIZ_SEED";
const ENV_LOG_LEVEL: &str = "SCALEQUIZ_LOG_LEVEL";

/// Configuration for scalequiz.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (SCALEQUIZ_* prefix)
/// 3. Config file (~/.config/scalequiz/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of chords shown per round (at most 7).
    ///
    /// Can be set via:
    /// - CLI: --chords 5
    /// - ENV: SCALEQUIZ_CHORD_COUNT
    /// - Config: chord_count = 5
    /// - Default: 4
    pub chord_count: usize,

    /// Seed for the random number generator. Unset means a fresh seed from
    /// the operating system on every run.
    ///
    /// Can be set via:
    /// - CLI: --seed 42
    /// - ENV: SCALEQUIZ_SEED
    /// - Config: seed = 42
    pub seed: Option<u64>,

    /// Log filter used when RUST_LOG is not set (e.g. "warn", "debug").
    ///
    /// Logs go to stderr, never to the quiz output.
    ///
    /// Can be set via:
    /// - ENV: SCALEQUIZ_LOG_LEVEL
    /// - Config: log_level = "debug"
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chord_count: DEFAULT_CHORD_COUNT,
            seed: None,
            log_level: String::from("warn"),
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Searches for config file at: ~/.config/scalequiz/config.toml
    /// Reads environment variables with SCALEQUIZ_ prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_file_path())
    }

    /// Load configuration from a specific file plus the environment.
    ///
    /// A missing file is not an error; defaults fill in whatever is absent.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        Self::load_with_env(config_path, |key| std::env::var(key).ok())
    }

    /// Load configuration from a file, then layer variables from `lookup` on top.
    ///
    /// `lookup` is called with full variable names such as
    /// `SCALEQUIZ_CHORD_COUNT`.
    pub fn load_with_env<F>(config_path: &Path, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            let mut builder = Confygery::new().context("Failed to create config builder")?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
            builder.build().context("Failed to build configuration")?
        } else {
            Self::default()
        };

        config.apply_env(lookup)?;
        log::debug!("loaded configuration: {config:?}");

        Ok(config)
    }

    /// Override fields from `SCALEQUIZ_*` variables.
    ///
    /// Values are parsed here rather than by the config builder, which only
    /// understands string values in the environment.
    fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_CHORD_COUNT) {
            self.chord_count = value
                .trim()
                .parse()
                .with_context(|| format!("Invalid {ENV_CHORD_COUNT}: {value:?}"))?;
        }
        if let Some(value) = lookup(ENV_SEED) {
            self.seed = Some(
                value
                    .trim()
                    .parse()
                    .with_context(|| format!("Invalid {ENV_SEED}: {value:?}"))?,
            );
        }
        if let Some(value) = lookup(ENV_LOG_LEVEL) {
            self.log_level = value;
        }
        Ok(())
    }

    /// Apply CLI overrides on top of the loaded configuration.
    #[must_use]
    pub fn with_overrides(mut self, seed: Option<u64>, chord_count: Option<usize>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        if let Some(chord_count) = chord_count {
            self.chord_count = chord_count;
        }
        self
    }

    /// Check values that deserialize fine but cannot be played.
    pub fn validate(&self) -> Result<()> {
        if self.chord_count > DEGREES {
            anyhow::bail!(
                "chord_count must be between 0 and {DEGREES}, got {}",
                self.chord_count
            );
        }
        Ok(())
    }
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/scalequiz/config.toml
/// - macOS: ~/Library/Application Support/scalequiz/config.toml
/// - Windows: %APPDATA%\scalequiz\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("scalequiz")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Scalequiz Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (SCALEQUIZ_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Number of chords shown for each scale (0-7)
#
# Can also be set via:
# - CLI: scalequiz --chords 5
# - Environment: SCALEQUIZ_CHORD_COUNT=5
chord_count = 4

# Fixed seed for the random number generator
#
# Leave unset to get different scales every run. A fixed seed replays the
# same sequence of rounds, which is handy for practising a set.
#
# Can also be set via:
# - CLI: scalequiz --seed 42
# - Environment: SCALEQUIZ_SEED=42
#seed = 42

# Log filter for diagnostics written to stderr
#
# RUST_LOG takes precedence when set.
log_level = "warn"
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    ensure_config_file_at(&config_file_path())
}

/// Create a config file at `config_path` if it doesn't exist.
pub fn ensure_config_file_at(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(config_path, example_config()).context("Failed to write config file")?;

    Ok(true)
}
