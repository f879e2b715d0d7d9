//! The game state machine: Start -> Playing -> Result -> Start.
//!
//! Out-of-order calls are rejected with [`GameError::InvalidTransition`],
//! logged at warn level, and leave the session untouched.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, info, warn};

use super::session::{Guess, Phase, Round, RoundResult, Session, Target};
use super::timer::{MemorizeTimer, TimerEvent};
use crate::constants::DEFAULT_CHOICE_COUNT;
use crate::error::{GameError, GameResult};
use crate::models::{
    Catalog, Difficulty, GuessKind, Mode, NamedColor, RgbColor, TargetKind, Timings,
};
use crate::sampler::ColorSampler;
use crate::scoring::{color_score, name_match_score};

/// Settings fixed for the lifetime of a machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Memorization duration per difficulty
    pub timings: Timings,
    /// Number of names offered in the name-picking mode, answer included
    pub choice_count: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            timings: Timings::default(),
            choice_count: DEFAULT_CHOICE_COUNT,
        }
    }
}

/// Owns the session and drives it through its phases.
#[derive(Debug)]
pub struct GameMachine<C, R = StdRng> {
    sampler: ColorSampler<C, R>,
    options: GameOptions,
    session: Session,
    timer: Option<MemorizeTimer>,
}

impl<C: Catalog, R: Rng> GameMachine<C, R> {
    /// Creates a machine in the Start phase with default options.
    pub fn new(sampler: ColorSampler<C, R>) -> Self {
        Self::with_options(sampler, GameOptions::default())
    }

    /// Creates a machine in the Start phase.
    pub fn with_options(sampler: ColorSampler<C, R>, options: GameOptions) -> Self {
        Self {
            sampler,
            options,
            session: Session::default(),
            timer: None,
        }
    }

    /// Options the machine was built with.
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// The catalog used by the naming modes.
    pub fn catalog(&self) -> &C {
        self.sampler.catalog()
    }

    /// Starts a round with a sampled target.
    pub fn start(&mut self, difficulty: Difficulty, mode: Mode) -> GameResult<&Round> {
        self.expect_phase(Phase::Start, "start")?;

        let round = match mode.target_kind() {
            TargetKind::AnyColor => {
                let target = self.sampler.random_color();
                self.build_round(difficulty, mode, target, None)
            }
            TargetKind::Named | TargetKind::NamedWithChoices => {
                let named = self.sampler.random_named_color()?;
                self.build_round(difficulty, mode, named.color, Some(named))
            }
        };

        Ok(self.enter_playing(round))
    }

    /// Starts a round with a caller-chosen target instead of a sampled one.
    ///
    /// Naming modes need a catalog entry: a bare color is resolved to the
    /// first entry with that value. Decoys are still sampled.
    pub fn start_with_target(
        &mut self,
        difficulty: Difficulty,
        mode: Mode,
        target: Target,
    ) -> GameResult<&Round> {
        self.expect_phase(Phase::Start, "start")?;

        let round = match (mode.target_kind(), target) {
            (TargetKind::AnyColor, Target::Color(color)) => {
                self.build_round(difficulty, mode, color, None)
            }
            (TargetKind::AnyColor, Target::Named(named)) => {
                self.build_round(difficulty, mode, named.color, None)
            }
            (_, Target::Named(named)) => {
                self.build_round(difficulty, mode, named.color, Some(named))
            }
            (_, Target::Color(color)) => {
                let named = self
                    .catalog()
                    .all()
                    .iter()
                    .find(|entry| entry.color == color)
                    .cloned()
                    .ok_or_else(|| {
                        GameError::Catalog(format!("no catalog entry with color {color}"))
                    })?;
                self.build_round(difficulty, mode, color, Some(named))
            }
        };

        Ok(self.enter_playing(round))
    }

    /// Scores a guess and moves to Result.
    ///
    /// Color modes expect a hex string; a malformed one returns
    /// [`GameError::InvalidFormat`] and the round stays in Playing so the
    /// player can try again. The name-picking mode compares names exactly.
    pub fn submit_guess(&mut self, value: &str) -> GameResult<&RoundResult> {
        self.expect_phase(Phase::Playing, "submit a guess")?;
        let Some(round) = self.session.round() else {
            return Err(self.reject("submit a guess"));
        };

        let result = match round.mode.guess_kind() {
            GuessKind::Color => {
                let guess = RgbColor::from_hex(value).inspect_err(|e| debug!("{e}"))?;
                RoundResult {
                    guess: Guess::Color(guess),
                    score: color_score(&round.target, &guess),
                }
            }
            GuessKind::Name => RoundResult {
                score: round
                    .named_target
                    .as_ref()
                    .map_or(0, |target| name_match_score(target, value)),
                guess: Guess::Name(value.to_string()),
            },
        };

        info!(
            mode = ?round.mode,
            target = %round.target,
            guess = %result.guess,
            score = result.score,
            "round scored"
        );

        self.timer = None;
        Ok(self.session.finish(result))
    }

    /// Discards the finished session and returns to Start.
    pub fn reset(&mut self) -> GameResult<()> {
        self.expect_phase(Phase::Result, "reset")?;
        self.clear();
        debug!("session reset");
        Ok(())
    }

    /// Leaves a round in progress without scoring it.
    pub fn abandon(&mut self) -> GameResult<()> {
        self.expect_phase(Phase::Playing, "abandon the round")?;
        self.clear();
        debug!("round abandoned");
        Ok(())
    }

    /// Advances the memorization timer, hiding the target once it is due.
    pub fn tick(&mut self, now: Instant) -> Option<TimerEvent> {
        let event = self.timer.as_mut()?.poll(now)?;
        if let Some(round) = self.session.round_mut() {
            round.target_hidden = true;
        }
        debug!("memorization time over");
        Some(event)
    }

    /// Current phase.
    pub const fn current_phase(&self) -> Phase {
        self.session.phase()
    }

    /// Target color of the current round.
    pub fn current_target(&self) -> Option<RgbColor> {
        self.session.round().map(|round| round.target)
    }

    /// Catalog entry behind the target, in the naming modes.
    pub fn current_named_target(&self) -> Option<&NamedColor> {
        self.session.round()?.named_target.as_ref()
    }

    /// The scored guess, in Result.
    pub const fn current_result(&self) -> Option<&RoundResult> {
        self.session.result()
    }

    /// Names offered in the name-picking mode; empty otherwise.
    pub fn choices(&self) -> &[NamedColor] {
        self.session
            .round()
            .map_or(&[][..], |round| round.choices.as_slice())
    }

    /// Whether the target should still be displayed.
    pub fn is_target_visible(&self) -> bool {
        self.session
            .round()
            .is_some_and(|round| self.current_phase() == Phase::Playing && !round.target_hidden)
    }

    /// Memorization time left, while the timer is pending.
    pub fn time_remaining(&self, now: Instant) -> Option<Duration> {
        self.timer
            .as_ref()
            .filter(|timer| timer.is_pending())
            .map(|timer| timer.remaining(now))
    }

    /// The whole session, read-only.
    pub const fn session(&self) -> &Session {
        &self.session
    }

    fn build_round(
        &mut self,
        difficulty: Difficulty,
        mode: Mode,
        target: RgbColor,
        named_target: Option<NamedColor>,
    ) -> Round {
        let choices = match (mode.target_kind(), &named_target) {
            (TargetKind::NamedWithChoices, Some(named)) => self
                .sampler
                .random_choice_set(named, self.options.choice_count),
            _ => Vec::new(),
        };

        Round {
            difficulty,
            mode,
            target,
            named_target,
            choices,
            target_hidden: false,
        }
    }

    fn enter_playing(&mut self, round: Round) -> &Round {
        let duration = self.options.timings.duration(round.difficulty);
        debug!(
            difficulty = %round.difficulty,
            mode = ?round.mode,
            target = %round.target,
            ?duration,
            "round started"
        );

        self.timer = Some(MemorizeTimer::schedule(Instant::now(), duration));
        self.session.begin(round)
    }

    fn clear(&mut self) {
        self.timer = None;
        self.session = Session::default();
    }

    fn expect_phase(&self, phase: Phase, action: &'static str) -> GameResult<()> {
        if self.current_phase() == phase {
            Ok(())
        } else {
            Err(self.reject(action))
        }
    }

    fn reject(&self, action: &'static str) -> GameError {
        let error = GameError::InvalidTransition {
            phase: self.current_phase(),
            action,
        };
        warn!("ignored invalid transition: {error}");
        error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ColorCatalog;

    fn machine() -> GameMachine<ColorCatalog> {
        let catalog = ColorCatalog::builtin().unwrap();
        GameMachine::new(ColorSampler::seeded(catalog, 11))
    }

    fn crimson() -> NamedColor {
        NamedColor::new("Crimson", RgbColor::new(0xDC, 0x14, 0x3C))
    }

    #[test]
    fn test_start_draws_per_mode() {
        let mut game = machine();
        let round = game.start(Difficulty::Easy, Mode::FreeColorInput).unwrap();
        assert!(round.named_target.is_none());
        assert!(round.choices.is_empty());
        game.abandon().unwrap();

        let round = game.start(Difficulty::Easy, Mode::NameGivenPickColor).unwrap();
        let named = round.named_target.clone().unwrap();
        assert_eq!(round.target, named.color);
        assert!(round.choices.is_empty());
        game.abandon().unwrap();

        let round = game.start(Difficulty::Easy, Mode::ColorGivenPickName).unwrap();
        let named = round.named_target.clone().unwrap();
        assert_eq!(round.choices.len(), 4);
        assert!(round.choices.contains(&named));
    }

    #[test]
    fn test_invalid_transitions_leave_state_alone() {
        let mut game = machine();

        let err = game.submit_guess("#000000").unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidTransition {
                phase: Phase::Start,
                action: "submit a guess"
            }
        );
        assert!(game.reset().is_err());
        assert!(game.abandon().is_err());
        assert!(game.session().is_cleared());

        game.start(Difficulty::Normal, Mode::FreeColorPicker).unwrap();
        let before = game.session().clone();
        assert!(game.start(Difficulty::Hard, Mode::FreeColorInput).is_err());
        assert!(game.reset().is_err());
        assert_eq!(game.session(), &before);

        game.submit_guess("#123456").unwrap();
        let before = game.session().clone();
        assert!(game.submit_guess("#654321").is_err());
        assert!(game.start(Difficulty::Easy, Mode::FreeColorPicker).is_err());
        assert_eq!(game.session(), &before);
    }

    #[test]
    fn test_malformed_guess_stays_playing() {
        let mut game = machine();
        game.start_with_target(
            Difficulty::Normal,
            Mode::FreeColorInput,
            Target::Color(RgbColor::new(0x33, 0x66, 0x99)),
        )
        .unwrap();

        let err = game.submit_guess("#33669").unwrap_err();
        assert!(err.is_recoverable());
        assert_eq!(game.current_phase(), Phase::Playing);
        assert!(game.current_result().is_none());

        assert_eq!(game.submit_guess("336699").unwrap().score, 100);
    }

    #[test]
    fn test_bare_color_resolves_to_catalog_entry() {
        let mut game = machine();
        let round = game
            .start_with_target(
                Difficulty::Normal,
                Mode::ColorGivenPickName,
                Target::Color(crimson().color),
            )
            .unwrap();
        assert_eq!(round.named_target.as_ref(), Some(&crimson()));
    }

    #[test]
    fn test_bare_color_outside_catalog_rejected_for_naming_modes() {
        let mut game = machine();
        let err = game
            .start_with_target(
                Difficulty::Normal,
                Mode::NameGivenPickColor,
                Target::Color(RgbColor::new(1, 2, 3)),
            )
            .unwrap_err();
        assert!(matches!(err, GameError::Catalog(_)));
        assert_eq!(game.current_phase(), Phase::Start);
    }

    #[test]
    fn test_timer_hides_target_once() {
        let mut game = machine();
        game.start(Difficulty::Hard, Mode::FreeColorPicker).unwrap();
        assert!(game.is_target_visible());

        let remaining = game.time_remaining(Instant::now()).unwrap();
        assert!(remaining <= Duration::from_millis(1500));

        let later = Instant::now() + Duration::from_millis(1500);
        assert_eq!(game.tick(later), Some(TimerEvent::TargetHidden));
        assert!(!game.is_target_visible());
        assert_eq!(game.tick(later), None);
        assert!(game.time_remaining(later).is_none());
    }

    #[test]
    fn test_timer_cancelled_on_exit_from_playing() {
        let mut game = machine();
        game.start(Difficulty::Easy, Mode::FreeColorPicker).unwrap();
        game.submit_guess("#000000").unwrap();
        let later = Instant::now() + Duration::from_secs(60);
        assert_eq!(game.tick(later), None);

        game.reset().unwrap();
        game.start(Difficulty::Easy, Mode::FreeColorPicker).unwrap();
        game.abandon().unwrap();
        assert_eq!(game.tick(later), None);
        assert!(game.session().is_cleared());
    }

    #[test]
    fn test_custom_options() {
        let catalog = ColorCatalog::builtin().unwrap();
        let options = GameOptions {
            timings: Timings::from_millis(10, 20, 30),
            choice_count: 6,
        };
        let mut game = GameMachine::with_options(ColorSampler::seeded(catalog, 2), options);
        let round = game.start(Difficulty::Hard, Mode::ColorGivenPickName).unwrap();
        assert_eq!(round.choices.len(), 6);
        assert!(game.time_remaining(Instant::now()).unwrap() <= Duration::from_millis(30));
    }
}
