//! Random target and decoy selection.
//!
//! The sampler is generic over its random source so tests and seeded games get
//! reproducible draws from a `StdRng`.

use rand::rngs::StdRng;
use rand::seq::{index, SliceRandom};
use rand::{Rng, SeedableRng};

use crate::error::{GameError, GameResult};
use crate::models::rgb::COLOR_SPACE_SIZE;
use crate::models::{Catalog, NamedColor, RgbColor};

/// Draws random colors, named colors and choice sets from a catalog.
#[derive(Debug, Clone)]
pub struct ColorSampler<C, R = StdRng> {
    catalog: C,
    rng: R,
}

impl<C: Catalog> ColorSampler<C, StdRng> {
    /// Sampler seeded from the operating system.
    pub fn from_os_rng(catalog: C) -> Self {
        Self::new(catalog, StdRng::from_os_rng())
    }

    /// Sampler with a fixed seed; identical seeds yield identical draws.
    pub fn seeded(catalog: C, seed: u64) -> Self {
        Self::new(catalog, StdRng::seed_from_u64(seed))
    }
}

impl<C: Catalog, R: Rng> ColorSampler<C, R> {
    /// Creates a sampler over `catalog` drawing from `rng`.
    pub fn new(catalog: C, rng: R) -> Self {
        Self { catalog, rng }
    }

    /// The catalog names are drawn from.
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// A color drawn uniformly from all 2^24 values.
    pub fn random_color(&mut self) -> RgbColor {
        RgbColor::from_u24(self.rng.random_range(0..COLOR_SPACE_SIZE))
    }

    /// A catalog entry drawn uniformly.
    ///
    /// # Errors
    /// Fails only if the catalog breaks its non-empty contract.
    pub fn random_named_color(&mut self) -> GameResult<NamedColor> {
        let size = self.catalog.size();
        if size == 0 {
            return Err(GameError::Catalog("catalog has no entries".to_string()));
        }
        let index = self.rng.random_range(0..size);
        self.catalog
            .get(index)
            .cloned()
            .ok_or_else(|| GameError::Catalog(format!("catalog index {index} out of range")))
    }

    /// `correct` plus up to `size - 1` distinct decoys, in random order.
    ///
    /// Decoys are drawn without replacement from catalog entries whose name
    /// differs from `correct`. A catalog with too few entries yields a smaller
    /// set. The set always holds at least `correct`.
    pub fn random_choice_set(&mut self, correct: &NamedColor, size: usize) -> Vec<NamedColor> {
        let decoys: Vec<&NamedColor> = self
            .catalog
            .all()
            .iter()
            .filter(|entry| entry.name != correct.name)
            .collect();

        let wanted = size.saturating_sub(1).min(decoys.len());
        let mut choices = Vec::with_capacity(wanted + 1);
        choices.push(correct.clone());
        choices.extend(
            index::sample(&mut self.rng, decoys.len(), wanted)
                .into_iter()
                .map(|i| decoys[i].clone()),
        );

        choices.shuffle(&mut self.rng);
        choices
    }
}
