//! Score command: compare two colors without playing a round.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use color_recall::models::RgbColor;
use color_recall::scoring::{color_score, ScoreRating};

/// Score a guess against a target color
#[derive(Debug, Clone, Args)]
pub struct ScoreArgs {
    /// Target color (#RRGGBB)
    #[arg(value_name = "TARGET")]
    pub target: String,

    /// Guessed color (#RRGGBB)
    #[arg(value_name = "GUESS")]
    pub guess: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ScoreReport {
    target: String,
    guess: String,
    score: u8,
    rating: String,
}

impl ScoreArgs {
    /// Execute the score command
    pub fn execute(&self) -> Result<()> {
        let target = RgbColor::from_hex(&self.target).context("Invalid target color")?;
        let guess = RgbColor::from_hex(&self.guess).context("Invalid guess color")?;
        let score = color_score(&target, &guess);

        let report = ScoreReport {
            target: target.to_hex(),
            guess: guess.to_hex(),
            score,
            rating: ScoreRating::from_score(score).message().to_string(),
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&report).context("Failed to serialize JSON")?
            );
        } else {
            println!("Target: {}", report.target);
            println!("Guess:  {}", report.guess);
            println!("Score:  {} ({})", report.score, report.rating);
        }

        Ok(())
    }
}
