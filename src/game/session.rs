//! Per-round game state.
//!
//! A [`Session`] is plain data. Only the state machine mutates it, and only
//! inside its transition functions.

use serde::Serialize;
use std::fmt;

use crate::models::{Difficulty, Mode, NamedColor, RgbColor};
use crate::scoring::{ScoreRating, MAX_SCORE};

/// Lifecycle phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    /// Waiting for the player to choose difficulty and mode
    #[default]
    Start,
    /// Target drawn, waiting for a guess
    Playing,
    /// Guess scored
    Result,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Start => "start",
            Self::Playing => "playing",
            Self::Result => "result",
        })
    }
}

/// A target supplied by the caller instead of being sampled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A bare color
    Color(RgbColor),
    /// A catalog entry
    Named(NamedColor),
}

/// What the player submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "kebab-case")]
pub enum Guess {
    /// A color, for the color-answer modes
    Color(RgbColor),
    /// A catalog name, for the name-picking mode
    Name(String),
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color(color) => write!(f, "{color}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

/// Settings and target for the round in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    /// Chosen difficulty
    pub difficulty: Difficulty,
    /// Chosen mode
    pub mode: Mode,
    /// The color to reproduce or identify
    pub target: RgbColor,
    /// Catalog entry behind `target`, for the naming modes
    pub named_target: Option<NamedColor>,
    /// Shuffled choices including the answer, for the name-picking mode
    pub choices: Vec<NamedColor>,
    /// Set once the memorization time has run out
    pub target_hidden: bool,
}

/// A scored guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundResult {
    /// The submitted guess
    pub guess: Guess,
    /// Score in `0..=100`; name guesses score 0 or 100
    pub score: u8,
}

impl RoundResult {
    /// True for an exact color or the right name.
    #[must_use]
    pub const fn is_correct(&self) -> bool {
        self.score == MAX_SCORE
    }

    /// Verdict for the score.
    #[must_use]
    pub const fn rating(&self) -> ScoreRating {
        ScoreRating::from_score(self.score)
    }
}

/// State of one game session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    phase: Phase,
    round: Option<Round>,
    result: Option<RoundResult>,
}

impl Session {
    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// The round in progress or just scored; `None` at Start.
    #[must_use]
    pub const fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// The scored guess; only present in Result.
    #[must_use]
    pub const fn result(&self) -> Option<&RoundResult> {
        self.result.as_ref()
    }

    /// True when nothing has been chosen, drawn or scored.
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        *self == Self::default()
    }

    pub(crate) fn begin(&mut self, round: Round) -> &Round {
        self.phase = Phase::Playing;
        self.result = None;
        self.round.insert(round)
    }

    pub(crate) fn finish(&mut self, result: RoundResult) -> &RoundResult {
        self.phase = Phase::Result;
        self.result.insert(result)
    }

    pub(crate) fn round_mut(&mut self) -> Option<&mut Round> {
        self.round.as_mut()
    }
}
