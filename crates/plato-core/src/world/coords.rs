//! Conversions between render space and world grid indices

use glam::{IVec2, Vec3};

use crate::error::{StreamError, StreamResult};

/// Stateless mapping between render-space positions and global grid indices.
///
/// Render `x` follows the grid's second index (`y`, columns) and render `z`
/// follows the first index (`x`, rows). The world is laid out so that cell
/// `(map_size/2, map_size/2)` sits at the render origin; the renderer keeps
/// the window centered by translating its world container instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    map_size: usize,
    unit: f32,
}

impl CoordinateMapper {
    pub fn new(map_size: usize, unit: f32) -> Self {
        Self { map_size, unit }
    }

    pub fn unit(&self) -> f32 {
        self.unit
    }

    /// Real-valued half window size
    fn half(&self) -> f32 {
        self.map_size as f32 / 2.0
    }

    /// Render position of the center of cell `pos`, lifted to `height`
    pub fn world_index_to_render_position(&self, pos: IVec2, height: f32) -> Vec3 {
        let half = self.half();
        let offset = self.unit / 2.0;
        Vec3::new(
            (pos.y as f32 - half) * self.unit + offset,
            height,
            (pos.x as f32 - half) * self.unit + offset,
        )
    }

    /// Grid indices of the cell containing `position` (height is ignored).
    ///
    /// The result may lie outside the world; the grid checks it on access.
    /// Non-finite coordinates have no cell and are rejected.
    pub fn render_position_to_world_index(&self, position: Vec3) -> StreamResult<IVec2> {
        if !(position.x.is_finite() && position.z.is_finite()) {
            return Err(StreamError::NonFinitePosition);
        }
        let half = self.half();
        Ok(IVec2::new(
            (half + position.z / self.unit).floor() as i32,
            (half + position.x / self.unit).floor() as i32,
        ))
    }

    /// Clamp a render position onto the world's footprint, snapping anything
    /// beyond an edge to the center line of the outermost cells
    pub fn clamp_to_world(&self, position: Vec3, world_size: usize) -> Vec3 {
        let last = world_size.saturating_sub(1) as i32;
        let min = self.world_index_to_render_position(IVec2::ZERO, 0.0);
        let max = self.world_index_to_render_position(IVec2::splat(last), 0.0);
        Vec3::new(
            position.x.clamp(min.x, max.x),
            position.y,
            position.z.clamp(min.z, max.z),
        )
    }
}
