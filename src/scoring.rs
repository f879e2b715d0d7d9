//! Scoring: color distance to a 0-100 score, and exact name matching.
//!
//! All functions here are total and side-effect free. Input that cannot be
//! parsed scores 0 instead of failing.

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use std::fmt;

use crate::models::{NamedColor, RgbColor};

/// Highest score a guess can earn.
pub const MAX_SCORE: u8 = 100;

/// Largest possible RGB distance, black to white: `sqrt(3 * 255^2)`.
pub const MAX_DISTANCE: f64 = 441.672_955_930_063_7;

/// Tie-breaking rule applied when a raw score falls exactly on `.5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rounding {
    /// 49.5 -> 50, 50.5 -> 51
    HalfAwayFromZero,
    /// 49.5 -> 50, 50.5 -> 50
    HalfToEven,
}

impl Rounding {
    fn apply(self, value: f64) -> f64 {
        match self {
            Self::HalfAwayFromZero => value.round(),
            Self::HalfToEven => value.round_ties_even(),
        }
    }
}

/// Rounding rule used by [`color_score`].
pub const SCORE_ROUNDING: Rounding = Rounding::HalfAwayFromZero;

/// Similarity of two colors, 100 for identical and 0 for black vs white.
///
/// The score is `100 * (1 - d / d_max)` where `d` is the Euclidean RGB
/// distance, rounded with [`SCORE_ROUNDING`] and clamped to `0..=100`.
///
/// # Examples
///
/// ```
/// use color_recall::models::RgbColor;
/// use color_recall::scoring::color_score;
///
/// assert_eq!(color_score(&RgbColor::BLACK, &RgbColor::WHITE), 0);
/// assert_eq!(color_score(&RgbColor::new(51, 102, 153), &RgbColor::new(51, 102, 153)), 100);
/// ```
#[must_use]
pub fn color_score(target: &RgbColor, guess: &RgbColor) -> u8 {
    score_from_distance(target.distance(guess))
}

fn score_from_distance(distance: f64) -> u8 {
    let raw = f64::from(MAX_SCORE) * (1.0 - distance / MAX_DISTANCE);
    SCORE_ROUNDING
        .apply(raw)
        .clamp(0.0, f64::from(MAX_SCORE)) as u8
}

/// [`color_score`] over hex strings; either string failing to parse scores 0.
#[must_use]
pub fn hex_score(target_hex: &str, guess_hex: &str) -> u8 {
    match (RgbColor::from_hex(target_hex), RgbColor::from_hex(guess_hex)) {
        (Ok(target), Ok(guess)) => color_score(&target, &guess),
        _ => 0,
    }
}

/// 100 if `guessed_name` equals the target's name exactly (case-sensitive), else 0.
#[must_use]
pub fn name_match_score(target: &NamedColor, guessed_name: &str) -> u8 {
    if target.name == guessed_name {
        MAX_SCORE
    } else {
        0
    }
}

/// Verdict shown with a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ScoreRating {
    /// Below 50
    TryAgain,
    /// 50 and up
    Close,
    /// 75 and up
    Good,
    /// 90 and up
    Excellent,
    /// 98 and up
    Perfect,
}

impl ScoreRating {
    /// Rating for a score.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            98.. => Self::Perfect,
            90..=97 => Self::Excellent,
            75..=89 => Self::Good,
            50..=74 => Self::Close,
            _ => Self::TryAgain,
        }
    }

    /// Short message for the result screen.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Perfect => "Perfect!",
            Self::Excellent => "Excellent!",
            Self::Good => "Nicely done!",
            Self::Close => "So close!",
            Self::TryAgain => "Try again!",
        }
    }
}

impl fmt::Display for ScoreRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Coarse band used to color a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    /// 90 and up
    High,
    /// 75 to 89
    Mid,
    /// Below 75
    Low,
}

impl ScoreTier {
    /// Tier for a score.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            90.. => Self::High,
            75..=89 => Self::Mid,
            _ => Self::Low,
        }
    }

    /// Display color for the tier.
    #[must_use]
    pub const fn color(self) -> RgbColor {
        match self {
            Self::High => RgbColor::new(0x4A, 0xDE, 0x80),
            Self::Mid => RgbColor::new(0xFA, 0xCC, 0x15),
            Self::Low => RgbColor::new(0xF8, 0x71, 0x71),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(s: &str) -> RgbColor {
        RgbColor::from_hex(s).unwrap()
    }

    #[test]
    fn test_max_distance_constant() {
        let computed = (3.0_f64 * 255.0 * 255.0).sqrt();
        assert!((MAX_DISTANCE - computed).abs() < 1e-9);
        assert!((RgbColor::BLACK.distance(&RgbColor::WHITE) - MAX_DISTANCE).abs() < 1e-9);
    }

    #[test]
    fn test_identical_is_perfect() {
        for s in ["#000000", "#FFFFFF", "#336699", "#DC143C", "#010203"] {
            assert_eq!(color_score(&hex(s), &hex(s)), 100, "{s}");
        }
    }

    #[test]
    fn test_black_white_is_zero() {
        assert_eq!(color_score(&RgbColor::BLACK, &RgbColor::WHITE), 0);
        assert_eq!(color_score(&RgbColor::WHITE, &RgbColor::BLACK), 0);
    }

    #[test]
    fn test_known_values() {
        // one channel fully off: 255 / 441.67 = 57.7% off
        assert_eq!(color_score(&hex("#000000"), &hex("#FF0000")), 42);
        // two channels fully off: 360.62 / 441.67 = 81.6% off
        assert_eq!(color_score(&hex("#000000"), &hex("#FFFF00")), 18);
        // mid grey against black: half the diagonal
        assert_eq!(color_score(&hex("#000000"), &hex("#808080")), 50);
        // small miss
        assert_eq!(color_score(&hex("#336699"), &hex("#336698")), 100);
        assert_eq!(color_score(&hex("#336699"), &hex("#3A6699")), 98);
    }

    #[test]
    fn test_symmetric_and_bounded() {
        let samples: Vec<RgbColor> = (0u32..64)
            .map(|i| RgbColor::from_u24(i.wrapping_mul(2_654_435_761) & 0xFF_FFFF))
            .collect();
        for a in &samples {
            for b in &samples {
                let ab = color_score(a, b);
                assert_eq!(ab, color_score(b, a));
                assert!(ab <= 100);
            }
        }
    }

    #[test]
    fn test_rounding_rule() {
        // ties round away from zero under the configured rule
        assert_eq!(SCORE_ROUNDING, Rounding::HalfAwayFromZero);
        assert_eq!(Rounding::HalfAwayFromZero.apply(50.5), 51.0);
        assert_eq!(Rounding::HalfAwayFromZero.apply(49.5), 50.0);
        assert_eq!(Rounding::HalfToEven.apply(50.5), 50.0);
        assert_eq!(Rounding::HalfToEven.apply(49.5), 50.0);
        assert_eq!(score_from_distance(0.0), 100);
        assert_eq!(score_from_distance(MAX_DISTANCE), 0);
        assert_eq!(score_from_distance(MAX_DISTANCE * 2.0), 0);
    }

    #[test]
    fn test_hex_score_silent_zero() {
        assert_eq!(hex_score("#336699", "#336699"), 100);
        assert_eq!(hex_score("336699", "#336699"), 100);
        assert_eq!(hex_score("#336699", "not a color"), 0);
        assert_eq!(hex_score("", "#336699"), 0);
    }

    #[test]
    fn test_name_match() {
        let crimson = NamedColor::new("Crimson", hex("#DC143C"));
        assert_eq!(name_match_score(&crimson, "Crimson"), 100);
        assert_eq!(name_match_score(&crimson, "Azure"), 0);
        assert_eq!(name_match_score(&crimson, "crimson"), 0);
        assert_eq!(name_match_score(&crimson, "Crimson "), 0);
        assert_eq!(name_match_score(&crimson, ""), 0);
    }

    #[test]
    fn test_rating_thresholds() {
        assert_eq!(ScoreRating::from_score(100), ScoreRating::Perfect);
        assert_eq!(ScoreRating::from_score(98), ScoreRating::Perfect);
        assert_eq!(ScoreRating::from_score(97), ScoreRating::Excellent);
        assert_eq!(ScoreRating::from_score(90), ScoreRating::Excellent);
        assert_eq!(ScoreRating::from_score(89), ScoreRating::Good);
        assert_eq!(ScoreRating::from_score(75), ScoreRating::Good);
        assert_eq!(ScoreRating::from_score(74), ScoreRating::Close);
        assert_eq!(ScoreRating::from_score(50), ScoreRating::Close);
        assert_eq!(ScoreRating::from_score(49), ScoreRating::TryAgain);
        assert_eq!(ScoreRating::from_score(0), ScoreRating::TryAgain);
    }

    #[test]
    fn test_tiers() {
        assert_eq!(ScoreTier::from_score(90), ScoreTier::High);
        assert_eq!(ScoreTier::from_score(89), ScoreTier::Mid);
        assert_eq!(ScoreTier::from_score(75), ScoreTier::Mid);
        assert_eq!(ScoreTier::from_score(74), ScoreTier::Low);
    }
}
