//! Game modes and the guess shapes they imply.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What the player is shown and how they answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Random color shown, answered with a color picker
    #[default]
    #[cfg_attr(feature = "cli", value(alias = "picker"))]
    FreeColorPicker,
    /// Random color shown, answered by typing RGB or HEX
    #[cfg_attr(feature = "cli", value(alias = "input"))]
    FreeColorInput,
    /// Color name shown, answered with a color
    #[cfg_attr(feature = "cli", value(alias = "name-to-color"))]
    NameGivenPickColor,
    /// Named color shown, answered by choosing its name
    #[cfg_attr(feature = "cli", value(alias = "color-to-name"))]
    ColorGivenPickName,
}

/// Shape of the value a player submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessKind {
    /// A color, scored by distance
    Color,
    /// A catalog name, scored by exact match
    Name,
}

/// Shape of the target a round draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    /// Any of the 2^24 colors
    AnyColor,
    /// A catalog entry
    Named,
    /// A catalog entry presented among decoys
    NamedWithChoices,
}

impl Mode {
    /// All modes in menu order.
    pub const ALL: [Self; 4] = [
        Self::FreeColorPicker,
        Self::FreeColorInput,
        Self::NameGivenPickColor,
        Self::ColorGivenPickName,
    ];

    /// How the player answers in this mode.
    #[must_use]
    pub const fn guess_kind(self) -> GuessKind {
        match self {
            Self::FreeColorPicker | Self::FreeColorInput | Self::NameGivenPickColor => {
                GuessKind::Color
            }
            Self::ColorGivenPickName => GuessKind::Name,
        }
    }

    /// What kind of target a round in this mode draws.
    #[must_use]
    pub const fn target_kind(self) -> TargetKind {
        match self {
            Self::FreeColorPicker | Self::FreeColorInput => TargetKind::AnyColor,
            Self::NameGivenPickColor => TargetKind::Named,
            Self::ColorGivenPickName => TargetKind::NamedWithChoices,
        }
    }

    /// Menu label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FreeColorPicker => "Color picker",
            Self::FreeColorInput => "RGB / HEX input",
            Self::NameGivenPickColor => "Name to color",
            Self::ColorGivenPickName => "Color to name",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_name_picking_takes_names() {
        for mode in Mode::ALL {
            let expected = if mode == Mode::ColorGivenPickName {
                GuessKind::Name
            } else {
                GuessKind::Color
            };
            assert_eq!(mode.guess_kind(), expected, "{mode:?}");
        }
    }

    #[test]
    fn test_target_kinds() {
        assert_eq!(Mode::FreeColorPicker.target_kind(), TargetKind::AnyColor);
        assert_eq!(Mode::FreeColorInput.target_kind(), TargetKind::AnyColor);
        assert_eq!(Mode::NameGivenPickColor.target_kind(), TargetKind::Named);
        assert_eq!(
            Mode::ColorGivenPickName.target_kind(),
            TargetKind::NamedWithChoices
        );
    }

    #[test]
    fn test_serde_names() {
        let mode: Mode = serde_json::from_str("\"color-given-pick-name\"").unwrap();
        assert_eq!(mode, Mode::ColorGivenPickName);
        assert_eq!(
            serde_json::to_string(&Mode::FreeColorInput).unwrap(),
            "\"free-color-input\""
        );
    }
}
