use crate::core::config::SeedConfig;
use crate::models::club::{Club, SeedClub};
use anyhow::{Context, Result};

/// Bundled seed roster, used on first run when the `clubs` slot is absent.
const BUNDLED_CLUBS: &str = include_str!("clubs.json");

/// Load the seed dataset, from the configured file when one is set, else
/// from the bundled roster. Every seeded club starts with an empty roster.
pub fn load(config: &SeedConfig) -> Result<Vec<Club>> {
    let raw = match &config.path {
        Some(path) => std::fs::read_to_string(path)
            .context(format!("Failed to read seed file: {}", path.display()))?,
        None => BUNDLED_CLUBS.to_string(),
    };

    let seeds: Vec<SeedClub> =
        serde_json::from_str(&raw).context("Failed to parse seed dataset")?;

    Ok(seeds.into_iter().map(Club::from).collect())
}
