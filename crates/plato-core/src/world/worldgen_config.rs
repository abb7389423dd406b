//! World generation configuration - serializable parameters for world generation
//!
//! Everything needed to build a world and its render window. Serializable to
//! RON so presets can live next to the binary. The seed is NOT part of the
//! config - same config + different seed = different world.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Complete world generation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldGenConfig {
    /// Display name for this configuration
    #[serde(default = "default_name")]
    pub name: String,

    /// World and window dimensions
    #[serde(default)]
    pub world: WorldParams,

    /// Per-cell placement probabilities
    #[serde(default)]
    pub probabilities: Probabilities,

    /// Height field synthesis
    #[serde(default)]
    pub terrain: TerrainParams,

    /// Lake carving shape
    #[serde(default)]
    pub lake: LakeParams,
}

/// World and window dimensions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldParams {
    /// Side of the square world grid in cells (default: 150)
    pub world_size: usize,
    /// Side of the rendered window in cells, odd so a center cell exists (default: 17)
    pub map_size: usize,
    /// Render-space edge length of one cell (default: 5.0)
    pub unit: f32,
}

/// Independent per-cell probabilities, applied in order grass → tree → rock
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Probabilities {
    /// Chance a cell starts as grass instead of bare ground (default: 0.7)
    pub grass: f32,
    /// Chance a cell is overwritten by a tree (default: 0.2)
    pub tree: f32,
    /// Chance a cell is overwritten by a rock (default: 0.1)
    pub rock: f32,
    /// Carve the meandering lake (default: true)
    pub lake: bool,
}

/// Height field parameters.
///
/// `height = jitter·rand + base + amplitude·(sin(f·π·i/N) + cos(f·π·j/N))`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerrainParams {
    /// Constant elevation offset (default: 1.0)
    pub base_height: f32,
    /// Scale of the per-cell uniform noise (default: 1.0)
    pub jitter: f32,
    /// Amplitude of the sine/cosine ridges (default: 2.25)
    pub ridge_amplitude: f32,
    /// Ridge half-periods across the world (default: 25.0)
    pub ridge_frequency: f32,
}

/// Lake carving parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LakeParams {
    /// Cells closer than this to the centerline become water (default: 3.0)
    pub water_radius: f32,
    /// Height forced onto water cells (default: -0.5)
    pub bed_height: f32,
    /// Shoreline elevation bands, checked in order after the water radius
    pub shore_bands: Vec<ShoreBand>,
    /// Upper bound of the random per-row phase angle (default: π/2)
    pub max_phase: f32,
}

/// Cells closer than `max_distance` (and outside earlier bands) get `height`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShoreBand {
    pub max_distance: f32,
    pub height: f32,
}

fn default_name() -> String {
    "Default".to_string()
}

impl Default for WorldGenConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            world: WorldParams::default(),
            probabilities: Probabilities::default(),
            terrain: TerrainParams::default(),
            lake: LakeParams::default(),
        }
    }
}

impl Default for WorldParams {
    fn default() -> Self {
        Self {
            world_size: 150,
            map_size: 17,
            unit: 5.0,
        }
    }
}

impl Default for Probabilities {
    fn default() -> Self {
        Self {
            grass: 0.7,
            tree: 0.2,
            rock: 0.1,
            lake: true,
        }
    }
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            base_height: 1.0,
            jitter: 1.0,
            ridge_amplitude: 2.25,
            ridge_frequency: 25.0,
        }
    }
}

impl Default for LakeParams {
    fn default() -> Self {
        Self {
            water_radius: 3.0,
            bed_height: -0.5,
            shore_bands: vec![
                ShoreBand {
                    max_distance: 4.0,
                    height: 1.0,
                },
                ShoreBand {
                    max_distance: 5.0,
                    height: 1.5,
                },
                ShoreBand {
                    max_distance: 6.0,
                    height: 2.0,
                },
            ],
            max_phase: std::f32::consts::FRAC_PI_2,
        }
    }
}

impl WorldGenConfig {
    /// Check every constant the generator and streamer rely on
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.world.validate()?;
        self.probabilities.validate()?;
        self.terrain.validate()?;
        self.lake.validate()
    }

    /// Parse a RON document
    pub fn from_ron(source: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(source)
    }

    /// Serialize to pretty RON
    pub fn to_ron(&self) -> Result<String, ron::Error> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
    }

    /// Look up a preset by its lowercase name
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "default" => Some(Self::default()),
            "meadow" => Some(Self::preset_meadow()),
            "forest" => Some(Self::preset_forest()),
            "dry" => Some(Self::preset_dry()),
            _ => None,
        }
    }

    /// Grass everywhere, nothing else
    pub fn preset_meadow() -> Self {
        Self {
            name: "Meadow".to_string(),
            probabilities: Probabilities {
                grass: 1.0,
                tree: 0.0,
                rock: 0.0,
                lake: false,
            },
            ..Self::default()
        }
    }

    /// Dense woodland around the lake
    pub fn preset_forest() -> Self {
        Self {
            name: "Forest".to_string(),
            probabilities: Probabilities {
                grass: 0.5,
                tree: 0.55,
                rock: 0.05,
                lake: true,
            },
            ..Self::default()
        }
    }

    /// Sparse rocky land with no lake
    pub fn preset_dry() -> Self {
        Self {
            name: "Dry".to_string(),
            probabilities: Probabilities {
                grass: 0.2,
                tree: 0.05,
                rock: 0.25,
                lake: false,
            },
            ..Self::default()
        }
    }
}

impl WorldParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.world_size == 0 {
            return Err(ConfigError::ZeroWorldSize);
        }
        if self.map_size == 0 {
            return Err(ConfigError::ZeroMapSize);
        }
        if self.map_size > self.world_size {
            return Err(ConfigError::MapLargerThanWorld {
                map_size: self.map_size,
                world_size: self.world_size,
            });
        }
        if !(self.unit.is_finite() && self.unit > 0.0) {
            return Err(ConfigError::InvalidUnit(self.unit));
        }
        Ok(())
    }
}

impl Probabilities {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("grass", self.grass),
            ("tree", self.tree),
            ("rock", self.rock),
        ] {
            // NaN fails the range check too
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ProbabilityOutOfRange { name, value });
            }
        }
        Ok(())
    }
}

impl TerrainParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("base_height", self.base_height),
            ("jitter", self.jitter),
            ("ridge_amplitude", self.ridge_amplitude),
            ("ridge_frequency", self.ridge_frequency),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name, value });
            }
        }
        Ok(())
    }
}

impl LakeParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let distance = |name, value: f32| {
            if value.is_finite() && value >= 0.0 {
                Ok(())
            } else {
                Err(ConfigError::InvalidDistance { name, value })
            }
        };
        distance("water_radius", self.water_radius)?;
        distance("max_phase", self.max_phase)?;
        if !self.bed_height.is_finite() {
            return Err(ConfigError::NonFinite {
                name: "bed_height",
                value: self.bed_height,
            });
        }

        // Bands are searched in order, so each must reach past the previous one
        let mut reach = self.water_radius;
        for (index, band) in self.shore_bands.iter().enumerate() {
            distance("shore_bands.max_distance", band.max_distance)?;
            if !band.height.is_finite() {
                return Err(ConfigError::NonFinite {
                    name: "shore_bands.height",
                    value: band.height,
                });
            }
            if band.max_distance <= reach {
                return Err(ConfigError::ShoreBandsUnordered { index });
            }
            reach = band.max_distance;
        }
        Ok(())
    }
}
