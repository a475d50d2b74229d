use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use tracing::info;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    pub game: GameConfig,
    pub display: DisplayConfig,
    pub species: SpeciesConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub narration_delay_ms: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DisplayConfig {
    pub color_enabled: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SpeciesConfig {
    pub catalog_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            game: GameConfig {
                narration_delay_ms: 800,
            },
            display: DisplayConfig {
                color_enabled: true,
            },
            species: SpeciesConfig {
                catalog_path: "resources/species.json".to_string(),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        // Load .env file if available
        dotenv::dotenv().ok();

        let mut config = Config::default();

        // Game config
        if let Ok(delay) = env::var("NARRATION_DELAY_MS") {
            if let Ok(delay) = delay.parse::<u64>() {
                config.game.narration_delay_ms = delay;
            }
        }

        // Display config
        if let Ok(color) = env::var("COLOR_ENABLED") {
            if let Ok(color) = color.parse::<bool>() {
                config.display.color_enabled = color;
            }
        }

        // Species config
        if let Ok(catalog_path) = env::var("SPECIES_CATALOG_PATH") {
            config.species.catalog_path = catalog_path;
        }

        info!("Configuration loaded: {:?}", config);
        config
    }

    /// Pause inserted between narration lines.
    pub fn narration_delay(&self) -> Duration {
        Duration::from_millis(self.game.narration_delay_ms)
    }
}
