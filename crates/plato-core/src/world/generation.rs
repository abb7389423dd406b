use std::f32::consts::PI;

use crate::error::ConfigError;
use crate::world::cell::CellType;
use crate::world::grid::WorldGrid;
use crate::world::rng_trait::WorldRng;
use crate::world::worldgen_config::WorldGenConfig;

/// Lake centerline: `f(x, y) = -5 + x + 5·cos(x/7) + 3·cos(y)`.
///
/// `x` is the row index and `y` a per-row phase angle; the result is the
/// (fractional) column the lake passes through on that row.
pub fn lake_centerline(x: f32, phase: f32) -> f32 {
    -5.0 + x + 5.0 * (x / 7.0).cos() + 3.0 * phase.cos()
}

/// World generator: biome placement, tree/rock overlays, lake carving and a
/// ridged height field, all driven by an injected RNG.
///
/// The whole world is produced in one call; nothing is generated lazily.
pub struct WorldGenerator {
    config: WorldGenConfig,
}

impl WorldGenerator {
    /// Create a generator with the default configuration
    pub fn new() -> Self {
        Self {
            config: WorldGenConfig::default(),
        }
    }

    /// Create a generator from a configuration, rejecting invalid constants
    pub fn from_config(config: WorldGenConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Replace the configuration (used when switching presets)
    pub fn update_config(&mut self, config: WorldGenConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Get the current configuration
    pub fn config(&self) -> &WorldGenConfig {
        &self.config
    }

    /// Generate a complete world grid
    pub fn generate<R: WorldRng + ?Sized>(&self, rng: &mut R) -> WorldGrid {
        let size = self.config.world.world_size;
        let mut grid = WorldGrid::new(size);

        self.synthesize_heights(&mut grid, rng);

        let probabilities = &self.config.probabilities;
        for i in 0..size {
            let row = grid.row_mut(i);

            // Step 1: biome pass
            for cell in row.iter_mut() {
                cell.kind = if rng.check_probability(probabilities.grass) {
                    CellType::Grass
                } else {
                    CellType::Ground
                };
            }

            // Step 2: trees overwrite the biome
            for cell in row.iter_mut() {
                if rng.check_probability(probabilities.tree) {
                    cell.kind = CellType::Tree;
                }
            }

            // Step 3: rocks overwrite trees
            for cell in row.iter_mut() {
                if rng.check_probability(probabilities.rock) {
                    cell.kind = CellType::Rock;
                }
            }

            // Step 4: water wins over everything
            if probabilities.lake {
                self.carve_lake_row(&mut grid, i, rng);
            }
        }

        log::info!(
            "Generated {}x{} world '{}': {} ground, {} grass, {} trees, {} rocks, {} water",
            size,
            size,
            self.config.name,
            grid.count(CellType::Ground),
            grid.count(CellType::Grass),
            grid.count(CellType::Tree),
            grid.count(CellType::Rock),
            grid.count(CellType::Water),
        );

        grid
    }

    /// Uniform jitter on top of a low-frequency sine/cosine ridge pattern
    fn synthesize_heights<R: WorldRng + ?Sized>(&self, grid: &mut WorldGrid, rng: &mut R) {
        let terrain = &self.config.terrain;
        let size = grid.size();
        let scale = terrain.ridge_frequency * PI / size as f32;

        for i in 0..size {
            let ridge_i = (scale * i as f32).sin();
            for (j, cell) in grid.row_mut(i).iter_mut().enumerate() {
                let ridge_j = (scale * j as f32).cos();
                cell.height = terrain.jitter * rng.gen_f32()
                    + terrain.base_height
                    + terrain.ridge_amplitude * (ridge_i + ridge_j);
            }
        }
    }

    /// Turn cells near this row's lake centerline into water and raise the shore
    fn carve_lake_row<R: WorldRng + ?Sized>(&self, grid: &mut WorldGrid, i: usize, rng: &mut R) {
        let lake = &self.config.lake;
        let phase = rng.gen_range_f32(0.0, lake.max_phase);
        let center = lake_centerline(i as f32, phase).ceil();

        for (j, cell) in grid.row_mut(i).iter_mut().enumerate() {
            let distance = (center - j as f32).abs();
            if distance < lake.water_radius {
                cell.kind = CellType::Water;
                cell.height = lake.bed_height;
            } else if let Some(band) = lake
                .shore_bands
                .iter()
                .find(|band| distance < band.max_distance)
            {
                cell.height = band.height;
            }
        }
    }
}

impl Default for WorldGenerator {
    fn default() -> Self {
        Self::new()
    }
}
