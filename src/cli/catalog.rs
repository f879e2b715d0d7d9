//! Catalog command: list the named colors used by the naming modes.

use anyhow::{Context, Result};
use clap::Args;

use color_recall::models::{Catalog, ColorCatalog};

/// List the named colors
#[derive(Debug, Clone, Args)]
pub struct CatalogArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl CatalogArgs {
    /// Execute the catalog command
    pub fn execute(&self) -> Result<()> {
        let catalog = ColorCatalog::builtin().context("Failed to load color catalog")?;

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(catalog.all()).context("Failed to serialize JSON")?
            );
        } else {
            for entry in catalog.all() {
                println!("{:<22} {}", entry.name, entry.hex());
            }
            println!();
            println!("{} colors", catalog.size());
        }

        Ok(())
    }
}
