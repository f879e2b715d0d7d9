//! Difficulty levels and their memorization durations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// How long the target stays visible before it is hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum Difficulty {
    /// Five seconds to memorize
    Easy,
    /// Three seconds to memorize
    #[default]
    Normal,
    /// One and a half seconds to memorize
    Hard,
}

impl Difficulty {
    /// All difficulties, easiest first.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Normal, Self::Hard];

    /// Built-in memorization duration in milliseconds.
    #[must_use]
    pub const fn default_duration_ms(self) -> u64 {
        match self {
            Self::Easy => 5000,
            Self::Normal => 3000,
            Self::Hard => 1500,
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Normal => "Normal",
            Self::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Memorization durations per difficulty.
///
/// Fixed once the game is constructed; configuration can only replace the
/// table at process start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    easy: Duration,
    normal: Duration,
    hard: Duration,
}

impl Timings {
    /// Creates a timing table from millisecond values.
    #[must_use]
    pub const fn from_millis(easy_ms: u64, normal_ms: u64, hard_ms: u64) -> Self {
        Self {
            easy: Duration::from_millis(easy_ms),
            normal: Duration::from_millis(normal_ms),
            hard: Duration::from_millis(hard_ms),
        }
    }

    /// Duration the target stays visible at the given difficulty.
    #[must_use]
    pub const fn duration(&self, difficulty: Difficulty) -> Duration {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Normal => self.normal,
            Difficulty::Hard => self.hard,
        }
    }
}

impl Default for Timings {
    fn default() -> Self {
        Self::from_millis(
            Difficulty::Easy.default_duration_ms(),
            Difficulty::Normal.default_duration_ms(),
            Difficulty::Hard.default_duration_ms(),
        )
    }
}
