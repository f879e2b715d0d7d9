//! Application-wide constants.

/// The display name of the application.
pub const APP_NAME: &str = "Color Recall";

/// Directory name under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "ColorRecall";

/// Names offered in the name-picking mode, the answer included.
pub const DEFAULT_CHOICE_COUNT: usize = 4;

/// Smallest choice count that still offers a decoy.
pub const MIN_CHOICE_COUNT: usize = 2;

/// Largest configurable choice count.
pub const MAX_CHOICE_COUNT: usize = 16;
