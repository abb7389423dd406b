//! # Plato core
//!
//! Procedural terrain generation and the sliding render window that streams
//! a small square of the world to an external renderer.

pub mod entity;
pub mod error;
pub mod render;
pub mod world;

/// Common imports for internal use
pub mod prelude {
    pub use crate::entity::{ClearTool, InputState, InteractTool, PlaceTool, Tool};
    pub use crate::error::{ConfigError, StreamError};
    pub use crate::render::RenderGateway;
    pub use crate::world::{
        Cell, CellType, CoordinateMapper, Direction, EditOutcome, Window, WindowStreamer,
        WorldGenConfig, WorldGenerator, WorldGrid,
    };
    pub use glam::{IVec2, Vec2, Vec3};
}
