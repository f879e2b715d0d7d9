//! Configuration management for the application.
//!
//! This module handles loading and validating game configuration in TOML
//! format with platform-specific directory resolution. Configuration is read
//! once at startup; the game never writes it back.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{CONFIG_DIR_NAME, DEFAULT_CHOICE_COUNT, MAX_CHOICE_COUNT, MIN_CHOICE_COUNT};
use crate::game::GameOptions;
use crate::models::{Difficulty, Mode, Timings};

/// Memorization durations in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Easy difficulty duration
    pub easy_ms: u64,
    /// Normal difficulty duration
    pub normal_ms: u64,
    /// Hard difficulty duration
    pub hard_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            easy_ms: Difficulty::Easy.default_duration_ms(),
            normal_ms: Difficulty::Normal.default_duration_ms(),
            hard_ms: Difficulty::Hard.default_duration_ms(),
        }
    }
}

impl TimingConfig {
    /// Converts to the timing table used by the game.
    #[must_use]
    pub const fn to_timings(&self) -> Timings {
        Timings::from_millis(self.easy_ms, self.normal_ms, self.hard_ms)
    }
}

/// Round settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Names offered in the name-picking mode, answer included
    pub choice_count: usize,
    /// Fixed RNG seed for reproducible rounds
    pub seed: Option<u64>,
    /// Difficulty used when none is given on the command line
    pub default_difficulty: Difficulty,
    /// Mode used when none is given on the command line
    pub default_mode: Mode,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            choice_count: DEFAULT_CHOICE_COUNT,
            seed: None,
            default_difficulty: Difficulty::default(),
            default_mode: Mode::default(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/ColorRecall/config.toml`
/// - macOS: `~/Library/Application Support/ColorRecall/config.toml`
/// - Windows: `%APPDATA%\ColorRecall\config.toml`
///
/// # Validation
///
/// - every duration must be greater than zero
/// - `choice_count` must be between 2 and 16
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Memorization durations
    pub timings: TimingConfig,
    /// Round settings
    pub game: GameConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the platform config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from a specific file.
    ///
    /// A missing file yields the defaults; an unreadable or invalid one is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&content)
            .context(format!("Failed to load config file: {}", path.display()))
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        let timings = [
            ("easy_ms", self.timings.easy_ms),
            ("normal_ms", self.timings.normal_ms),
            ("hard_ms", self.timings.hard_ms),
        ];
        for (name, value) in timings {
            if value == 0 {
                anyhow::bail!("timings.{name} must be greater than zero");
            }
        }

        let count = self.game.choice_count;
        if !(MIN_CHOICE_COUNT..=MAX_CHOICE_COUNT).contains(&count) {
            anyhow::bail!(
                "game.choice_count must be between {MIN_CHOICE_COUNT} and {MAX_CHOICE_COUNT}, got {count}"
            );
        }

        Ok(())
    }

    /// Options for constructing a [`GameMachine`](crate::game::GameMachine).
    #[must_use]
    pub const fn game_options(&self) -> GameOptions {
        GameOptions {
            timings: self.timings.to_timings(),
            choice_count: self.game.choice_count,
        }
    }
}
