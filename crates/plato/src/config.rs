//! Application configuration with layered loading
//!
//! Configuration is loaded from multiple sources (lowest to highest priority):
//! 1. Compiled defaults
//! 2. `plato.ron` file (if exists)
//! 3. Environment variables prefixed with `PLATO_`
//!
//! Example environment variable: `PLATO_WORLD__MAP_SIZE=21`

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use plato_core::world::WorldParams;
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub world: WorldConfig,

    #[serde(default)]
    pub generation: GenerationConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

/// World and window dimensions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Side length of the square world, in cells
    pub world_size: usize,
    /// Side length of the rendered window, in cells
    pub map_size: usize,
    /// Render-space size of one cell
    pub unit: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            world_size: 150,
            map_size: 17,
            unit: 5.0,
        }
    }
}

impl From<&WorldConfig> for WorldParams {
    fn from(config: &WorldConfig) -> Self {
        WorldParams {
            world_size: config.world_size,
            map_size: config.map_size,
            unit: config.unit,
        }
    }
}

/// Terrain generation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Built-in preset: default, meadow, forest, dry
    pub preset: String,
    /// Fixed seed; a random one is drawn when unset
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            preset: "default".to_string(),
            seed: None,
        }
    }
}

/// Terminal output settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DisplayConfig {
    /// Print the window after every scripted step instead of only at the end
    pub print_every_step: bool,
}

impl AppConfig {
    /// Load configuration with layered priority:
    /// 1. Compiled defaults (lowest priority)
    /// 2. `plato.ron` file (if exists)
    /// 3. Environment variables prefixed with `PLATO_` (highest priority)
    pub fn load() -> Result<Self> {
        let builder = Config::builder()
            // Layer 1: Compiled defaults
            .set_default("world.world_size", 150_i64)?
            .set_default("world.map_size", 17_i64)?
            .set_default("world.unit", 5.0)?
            .set_default("generation.preset", "default")?
            .set_default("display.print_every_step", false)?
            // Layer 2: Config file (optional, won't error if missing)
            .add_source(
                File::with_name("plato")
                    .format(config::FileFormat::Ron)
                    .required(false),
            )
            // Layer 3: Environment variables (PLATO_WORLD__MAP_SIZE, etc.)
            .add_source(
                Environment::with_prefix("PLATO")
                    .prefix_separator("_")
                    .separator("__"),
            );

        let config = builder.build().context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.world.world_size, 150);
        assert_eq!(config.world.map_size, 17);
        assert_eq!(config.world.unit, 5.0);
        assert_eq!(config.generation.preset, "default");
        assert!(config.generation.seed.is_none());
        assert!(!config.display.print_every_step);
    }

    #[test]
    fn test_load_config_with_defaults() {
        // Should load defaults when no config file exists
        let config = AppConfig::load().expect("Failed to load config");
        assert_eq!(config.world.world_size, 150);
        assert_eq!(config.generation.preset, "default");
    }

    #[test]
    fn test_environment_overrides_defaults() {
        // Only this test touches PLATO_WORLD__MAP_SIZE
        unsafe { std::env::set_var("PLATO_WORLD__MAP_SIZE", "21") };
        let config = AppConfig::load();
        unsafe { std::env::remove_var("PLATO_WORLD__MAP_SIZE") };

        let config = config.expect("Failed to load config");
        assert_eq!(config.world.map_size, 21);
        assert_eq!(config.world.world_size, 150);
    }

    #[test]
    fn test_world_params_conversion() {
        let params = WorldParams::from(&WorldConfig::default());
        assert!(params.validate().is_ok());
        assert_eq!(params.map_size, 17);
    }
}
