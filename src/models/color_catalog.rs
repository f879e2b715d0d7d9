//! Named-color catalog used by the naming modes.
//!
//! The built-in catalog is the list of HTML/CSS named colors, embedded as JSON.
//! Catalogs are immutable once built and guarantee unique names.

use serde::Deserialize;
use std::collections::HashSet;

use super::NamedColor;
use crate::error::{GameError, GameResult};

/// Read-only access to a list of named colors.
///
/// Implementations must be non-empty and must not repeat names.
pub trait Catalog {
    /// Number of entries.
    fn size(&self) -> usize;

    /// Entry at `index`, or `None` past the end.
    fn get(&self, index: usize) -> Option<&NamedColor>;

    /// Every entry, in catalog order.
    fn all(&self) -> &[NamedColor];

    /// Looks an entry up by its exact name.
    fn find(&self, name: &str) -> Option<&NamedColor> {
        self.all().iter().find(|entry| entry.name == name)
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    colors: Vec<NamedColor>,
}

/// The standard catalog implementation backed by a vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorCatalog {
    colors: Vec<NamedColor>,
}

impl ColorCatalog {
    /// Loads the built-in HTML color catalog from embedded JSON data.
    ///
    /// # Errors
    /// Returns an error if the embedded data cannot be parsed or breaks the
    /// catalog contract.
    pub fn builtin() -> GameResult<Self> {
        Self::from_json(include_str!("../data/color_names.json"))
    }

    /// Parses a catalog from JSON of the form `{"colors": [{"name", "hex"}]}`.
    pub fn from_json(json: &str) -> GameResult<Self> {
        let file: CatalogFile =
            serde_json::from_str(json).map_err(|e| GameError::Catalog(e.to_string()))?;
        Self::from_entries(file.colors)
    }

    /// Builds a catalog from entries, checking it is non-empty with unique names.
    pub fn from_entries(colors: Vec<NamedColor>) -> GameResult<Self> {
        if colors.is_empty() {
            return Err(GameError::Catalog("catalog has no entries".to_string()));
        }

        let mut seen = HashSet::with_capacity(colors.len());
        for entry in &colors {
            if entry.name.is_empty() {
                return Err(GameError::Catalog("entry with empty name".to_string()));
            }
            if !seen.insert(entry.name.as_str()) {
                return Err(GameError::Catalog(format!(
                    "duplicate color name '{}'",
                    entry.name
                )));
            }
        }

        Ok(Self { colors })
    }
}

impl Catalog for ColorCatalog {
    fn size(&self) -> usize {
        self.colors.len()
    }

    fn get(&self, index: usize) -> Option<&NamedColor> {
        self.colors.get(index)
    }

    fn all(&self) -> &[NamedColor] {
        &self.colors
    }
}
