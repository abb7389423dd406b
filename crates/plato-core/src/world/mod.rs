//! World management - generation, the cell grid and the streamed window

mod cell;
mod coords;
pub mod generation;
mod grid;
pub mod rng_trait;
mod streamer;
mod window;
pub mod worldgen_config;

pub use cell::{Cell, CellType};
pub use coords::CoordinateMapper;
pub use generation::{WorldGenerator, lake_centerline};
pub use grid::WorldGrid;
pub use rng_trait::WorldRng;
pub use streamer::{EditOutcome, WindowStreamer};
pub use window::{Direction, Window};
pub use worldgen_config::{
    LakeParams, Probabilities, ShoreBand, TerrainParams, WorldGenConfig, WorldParams,
};
