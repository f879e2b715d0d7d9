//! RGB color handling with hex parsing and serialization.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{GameError, GameResult};

/// Number of distinct colors representable with 8 bits per channel.
pub const COLOR_SPACE_SIZE: u32 = 1 << 24;

/// RGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
/// The canonical textual form is `#RRGGBB` with uppercase digits; parsing
/// accepts either case and an optional leading `#`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Pure black, `#000000`.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Pure white, `#FFFFFF`.
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Mid grey the guess input starts from, `#808080`.
    pub const NEUTRAL_GREY: Self = Self::new(128, 128, 128);

    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates a color from integer channel input such as a numeric text field.
    ///
    /// # Examples
    ///
    /// ```
    /// use color_recall::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::from_channels(51, 102, 153).unwrap(), RgbColor::new(51, 102, 153));
    /// assert!(RgbColor::from_channels(256, 0, 0).is_err());
    /// ```
    pub fn from_channels(r: i64, g: i64, b: i64) -> GameResult<Self> {
        let channel = |v: i64| {
            u8::try_from(v).map_err(|_| GameError::invalid_format(format!("rgb({r}, {g}, {b})")))
        };
        Ok(Self::new(channel(r)?, channel(g)?, channel(b)?))
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Supports formats: "#RRGGBB", "RRGGBB", "#rrggbb", "rrggbb".
    /// Surrounding whitespace is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use color_recall::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#FF0000").unwrap();
    /// assert_eq!(color, RgbColor::new(255, 0, 0));
    ///
    /// let color = RgbColor::from_hex("00ff00").unwrap();
    /// assert_eq!(color, RgbColor::new(0, 255, 0));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidFormat`] if the string is not exactly six hex
    /// digits after the optional `#`.
    pub fn from_hex(input: &str) -> GameResult<Self> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        // from_str_radix tolerates a leading '+', so check the digits up front
        if digits.len() != 6 || !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
            return Err(GameError::invalid_format(input));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| GameError::invalid_format(input))
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Converts the color to a hex string in the format "#RRGGBB" (uppercase).
    ///
    /// # Examples
    ///
    /// ```
    /// use color_recall::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::new(0, 128, 255).to_hex(), "#0080FF");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Packs the channels into a 24-bit integer, red in the high byte.
    #[must_use]
    #[allow(clippy::cast_lossless)]
    pub const fn to_u24(&self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Unpacks a 24-bit integer into channels. Bits above 24 are ignored.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_u24(value: u32) -> Self {
        Self::new((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }

    /// Euclidean distance to another color in RGB space.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        let dr = f64::from(self.r) - f64::from(other.r);
        let dg = f64::from(self.g) - f64::from(other.g);
        let db = f64::from(self.b) - f64::from(other.b);
        (dr * dr + dg * dg + db * db).sqrt()
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for RgbColor {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Default for RgbColor {
    /// Default color is the neutral grey the guess input starts from.
    fn default() -> Self {
        Self::NEUTRAL_GREY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_valid() {
        let color = RgbColor::from_hex("#FF0000").unwrap();
        assert_eq!(color, RgbColor::new(255, 0, 0));

        let color = RgbColor::from_hex("00FF00").unwrap();
        assert_eq!(color, RgbColor::new(0, 255, 0));

        let color = RgbColor::from_hex("#0000ff").unwrap();
        assert_eq!(color, RgbColor::new(0, 0, 255));

        let color = RgbColor::from_hex("  #FFFFFF  ").unwrap();
        assert_eq!(color, RgbColor::new(255, 255, 255));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(RgbColor::from_hex("#FFF").is_err());
        assert!(RgbColor::from_hex("#FFFFFFF").is_err());
        assert!(RgbColor::from_hex("GGGGGG").is_err());
        assert!(RgbColor::from_hex("").is_err());
        assert!(RgbColor::from_hex("#").is_err());
        assert!(RgbColor::from_hex("##FFFFFF").is_err());
        assert!(RgbColor::from_hex("+F+F+F").is_err());
        assert!(RgbColor::from_hex("#FF FF FF").is_err());
        // multi-byte input must not panic on slicing
        assert!(RgbColor::from_hex("#ÿÿÿ").is_err());
    }

    #[test]
    fn test_from_hex_error_keeps_input() {
        let err = RgbColor::from_hex("#12345G").unwrap_err();
        assert_eq!(err, GameError::invalid_format("#12345G"));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(RgbColor::new(255, 0, 0).to_hex(), "#FF0000");
        assert_eq!(RgbColor::new(0, 128, 255).to_hex(), "#0080FF");
        assert_eq!(RgbColor::new(0, 0, 0).to_hex(), "#000000");
        assert_eq!(RgbColor::new(1, 2, 3).to_hex(), "#010203");
    }

    #[test]
    fn test_roundtrip_entire_color_space() {
        for value in 0..COLOR_SPACE_SIZE {
            let color = RgbColor::from_u24(value);
            assert_eq!(color.to_u24(), value);
            let parsed = RgbColor::from_hex(&color.to_hex()).unwrap();
            assert_eq!(parsed, color, "round-trip failed for {value:#08X}");
        }
    }

    #[test]
    fn test_hex_canonical_form_ignores_case() {
        for input in ["#336699", "#abcdef", "#AbCdEf", "#00ff7f", "#DC143C"] {
            let canonical = RgbColor::from_hex(input).unwrap().to_hex();
            assert!(canonical.eq_ignore_ascii_case(input), "{input} -> {canonical}");
        }
        let canonical = RgbColor::from_hex("a0b1c2").unwrap().to_hex();
        assert_eq!(canonical, "#A0B1C2");
    }

    #[test]
    fn test_from_channels() {
        assert_eq!(
            RgbColor::from_channels(0, 128, 255).unwrap(),
            RgbColor::new(0, 128, 255)
        );
        assert!(RgbColor::from_channels(-1, 0, 0).is_err());
        assert!(RgbColor::from_channels(0, 256, 0).is_err());
    }

    #[test]
    fn test_from_str_and_display() {
        let color: RgbColor = "#336699".parse().unwrap();
        assert_eq!(color.to_string(), "#336699");
    }

    #[test]
    fn test_distance() {
        assert_eq!(RgbColor::BLACK.distance(&RgbColor::BLACK), 0.0);
        let max = RgbColor::BLACK.distance(&RgbColor::WHITE);
        assert!((max - (3.0_f64 * 255.0 * 255.0).sqrt()).abs() < 1e-9);
        assert!((RgbColor::new(3, 4, 0).distance(&RgbColor::BLACK) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_default() {
        assert_eq!(RgbColor::default(), RgbColor::new(128, 128, 128));
    }
}
