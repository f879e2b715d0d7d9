//! Color Recall - terminal color memory game
//!
//! Shows a color for a few seconds, hides it, and scores how closely the
//! player can reproduce it.

mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use color_recall::config::Config;

/// Color Recall - memorize a color, then reproduce it
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a config file (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Play one round
    Play(cli::PlayArgs),
    /// Score a guess against a target color
    Score(cli::ScoreArgs),
    /// List the named colors
    Catalog(cli::CatalogArgs),
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(Commands::Play(args)) => args.execute(&load_config(cli.config.as_deref())?),
        Some(Commands::Score(args)) => args.execute(),
        Some(Commands::Catalog(args)) => args.execute(),
        None => cli::PlayArgs::default().execute(&load_config(cli.config.as_deref())?),
    }
}

/// Only `play` reads settings; the other commands never touch the config file.
fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}
