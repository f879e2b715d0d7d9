//! Data models for colors, the named-color catalog, difficulties and modes.
//!
//! Models are independent of game flow and presentation.

pub mod color_catalog;
pub mod difficulty;
pub mod mode;
pub mod named_color;
pub mod rgb;

// Re-export all model types
pub use color_catalog::{Catalog, ColorCatalog};
pub use difficulty::{Difficulty, Timings};
pub use mode::{GuessKind, Mode, TargetKind};
pub use named_color::NamedColor;
pub use rgb::RgbColor;
