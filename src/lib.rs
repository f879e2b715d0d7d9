//! Color Recall Library
//!
//! Core of a color memory game: the player sees a target color (or color name)
//! for a short time, then reproduces it or picks its name. This library holds
//! the hex codec, the named-color catalog, random sampling, the scoring engine
//! and the Start -> Playing -> Result state machine. Rendering is left to the
//! caller.

// Module declarations
pub mod config;
pub mod constants;
pub mod error;
pub mod game;
pub mod models;
pub mod sampler;
pub mod scoring;

pub use error::{GameError, GameResult};
pub use game::{GameMachine, GameOptions, Phase};
pub use models::{Catalog, ColorCatalog, Difficulty, Mode, NamedColor, RgbColor};
pub use sampler::ColorSampler;
