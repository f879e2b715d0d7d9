//! Play command: one round of the game in the terminal.

use anyhow::{Context, Result};
use clap::Args;
use crossterm::{
    cursor::MoveTo,
    execute,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::{Duration, Instant};

use color_recall::config::Config;
use color_recall::constants::APP_NAME;
use color_recall::game::{GameMachine, Guess, Round, RoundResult};
use color_recall::models::{ColorCatalog, Difficulty, GuessKind, Mode, RgbColor};
use color_recall::scoring::ScoreTier;
use color_recall::{ColorSampler, GameError};

const SWATCH_ROWS: usize = 5;
const SWATCH_WIDTH: usize = 20;
const TICK: Duration = Duration::from_millis(50);

/// Play one round
#[derive(Debug, Clone, Default, Args)]
pub struct PlayArgs {
    /// Memorization time (defaults to the configured difficulty)
    #[arg(short, long, value_enum)]
    pub difficulty: Option<Difficulty>,

    /// Game mode (defaults to the configured mode)
    #[arg(short, long, value_enum)]
    pub mode: Option<Mode>,

    /// RNG seed for a reproducible target
    #[arg(long)]
    pub seed: Option<u64>,
}

impl PlayArgs {
    /// Execute the play command
    pub fn execute(&self, config: &Config) -> Result<()> {
        let catalog = ColorCatalog::builtin().context("Failed to load color catalog")?;
        let sampler = match self.seed.or(config.game.seed) {
            Some(seed) => ColorSampler::seeded(catalog, seed),
            None => ColorSampler::from_os_rng(catalog),
        };
        let mut game = GameMachine::with_options(sampler, config.game_options());

        let difficulty = self.difficulty.unwrap_or(config.game.default_difficulty);
        let mode = self.mode.unwrap_or(config.game.default_mode);

        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut out = io::stdout();

        let round = game.start(difficulty, mode)?.clone();
        show_target(&mut out, &round)?;

        while game.time_remaining(Instant::now()).is_some() {
            if game.tick(Instant::now()).is_some() {
                break;
            }
            thread::sleep(TICK);
        }
        execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;

        prompt(&mut out, &round)?;
        let result = loop {
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                anyhow::bail!("No guess entered");
            }
            let guess = normalize_guess(line.trim(), &round);
            match game.submit_guess(&guess) {
                Ok(result) => break result.clone(),
                Err(err @ GameError::InvalidFormat { .. }) => {
                    writeln!(out, "{err}. Try again:")?;
                }
                Err(err) => return Err(err.into()),
            }
        };

        show_result(&mut out, &round, &result)?;
        game.reset()?;
        Ok(())
    }
}

/// Turns "51 102 153" or a choice number into the value the game expects.
///
/// An empty color guess submits the starting grey unchanged.
fn normalize_guess(raw: &str, round: &Round) -> String {
    match round.mode.guess_kind() {
        GuessKind::Color if raw.is_empty() => RgbColor::default().to_hex(),
        GuessKind::Color => {
            let channels: Vec<i64> = raw
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|part| !part.is_empty())
                .map_while(|part| part.parse().ok())
                .collect();
            match channels[..] {
                [r, g, b] => RgbColor::from_channels(r, g, b)
                    .map_or_else(|_| raw.to_string(), |color| color.to_hex()),
                _ => raw.to_string(),
            }
        }
        GuessKind::Name => raw
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| round.choices.get(i))
            .map_or_else(|| raw.to_string(), |choice| choice.name.clone()),
    }
}

fn swatch(out: &mut impl Write, color: RgbColor) -> io::Result<()> {
    let bg = Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    };
    for _ in 0..SWATCH_ROWS {
        execute!(
            out,
            SetBackgroundColor(bg),
            Print(" ".repeat(SWATCH_WIDTH)),
            ResetColor,
            Print("\n")
        )?;
    }
    Ok(())
}

fn show_target(out: &mut impl Write, round: &Round) -> io::Result<()> {
    writeln!(out, "{APP_NAME}: {} - {}", round.mode, round.difficulty)?;
    match (round.mode, &round.named_target) {
        (Mode::NameGivenPickColor, Some(named)) => {
            writeln!(out, "Remember this color name: {}", named.name)?;
        }
        _ => {
            writeln!(out, "Remember this color...")?;
            swatch(out, round.target)?;
        }
    }
    out.flush()
}

fn prompt(out: &mut impl Write, round: &Round) -> io::Result<()> {
    match round.mode.guess_kind() {
        GuessKind::Color => {
            writeln!(
                out,
                "Enter the color as #RRGGBB or \"R G B\" (empty keeps {}):",
                RgbColor::default()
            )?;
        }
        GuessKind::Name => {
            writeln!(out, "Which name was it?")?;
            for (i, choice) in round.choices.iter().enumerate() {
                writeln!(out, "  {}. {}", i + 1, choice.name)?;
            }
        }
    }
    out.flush()
}

fn show_result(out: &mut impl Write, round: &Round, result: &RoundResult) -> io::Result<()> {
    let tier = ScoreTier::from_score(result.score).color();
    writeln!(out)?;
    writeln!(out, "{}", result.rating())?;
    execute!(
        out,
        Print("Score: "),
        SetForegroundColor(Color::Rgb {
            r: tier.r,
            g: tier.g,
            b: tier.b
        }),
        Print(result.score),
        ResetColor,
        Print("\n")
    )?;

    match &round.named_target {
        Some(named) => writeln!(out, "Answer: {} ({})", named.name, named.hex())?,
        None => writeln!(out, "Answer: {}", round.target)?,
    }
    swatch(out, round.target)?;
    writeln!(out, "You:    {}", result.guess)?;
    if let Guess::Color(color) = &result.guess {
        swatch(out, *color)?;
    }
    out.flush()
}
