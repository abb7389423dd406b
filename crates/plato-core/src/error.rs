//! Error types for world configuration and window streaming

use thiserror::Error;

/// Invalid construction parameters. These are programmer errors and are
/// reported before any world is generated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A probability lies outside `[0, 1]` (or is NaN).
    #[error("probability `{name}` must be within [0, 1], got {value}")]
    ProbabilityOutOfRange {
        /// Which probability was rejected.
        name: &'static str,
        /// The offending value.
        value: f32,
    },

    #[error("world size must be greater than zero")]
    ZeroWorldSize,

    #[error("map size must be greater than zero")]
    ZeroMapSize,

    /// The window cannot be larger than the world it slides over.
    #[error("map size {map_size} exceeds world size {world_size}")]
    MapLargerThanWorld { map_size: usize, world_size: usize },

    #[error("cell unit must be positive and finite, got {0}")]
    InvalidUnit(f32),

    /// A terrain or lake value is NaN or infinite.
    #[error("`{name}` must be finite, got {value}")]
    NonFinite { name: &'static str, value: f32 },

    /// A lake distance or angle is negative or not finite.
    #[error("`{name}` must be a finite non-negative value, got {value}")]
    InvalidDistance { name: &'static str, value: f32 },

    /// Shore bands must reach strictly further out than the water and the band before them.
    #[error("shore band {index} does not extend past the one before it")]
    ShoreBandsUnordered { index: usize },

    /// The requested window center would put part of the window outside the world.
    #[error("window centered at ({x}, {y}) does not fit in a world of size {world_size}")]
    CenterOutOfBounds { x: i32, y: i32, world_size: usize },

    /// The world grid handed to the streamer does not match the config.
    #[error("world grid has size {actual}, config expects {expected}")]
    WorldSizeMismatch { expected: usize, actual: usize },
}

/// Failures while resolving or mutating cells through the streamer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StreamError {
    /// Grid indices outside `[0, world_size)`. Callers clamp render positions
    /// before editing, so this indicates a bug in the input layer.
    #[error("cell ({x}, {y}) is outside the world (size {world_size})")]
    IndexOutOfRange { x: i32, y: i32, world_size: usize },

    /// A render position with a NaN or infinite coordinate maps to no cell.
    #[error("render position is not finite")]
    NonFinitePosition,
}

/// Result type for streaming operations.
pub type StreamResult<T> = Result<T, StreamError>;
