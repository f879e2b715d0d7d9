//! CLI command handlers for Color Recall.

pub mod catalog;
pub mod play;
pub mod score;

pub use catalog::CatalogArgs;
pub use play::PlayArgs;
pub use score::ScoreArgs;
