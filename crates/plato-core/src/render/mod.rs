//! Renderer boundary
//!
//! Geometry, materials and animated uniforms live outside this crate. The
//! streamer only talks to a [`RenderGateway`], which hands back opaque
//! handles for everything it draws.

mod recording;

pub use recording::{GatewayStats, RecordingGateway, RenderHandle, Renderable};

use glam::{Vec2, Vec3};

use crate::world::CellType;

/// Contract the window streamer consumes from the renderer
pub trait RenderGateway {
    /// Opaque token for one renderable; returned to [`RenderGateway::destroy`] by value
    type Handle;

    /// Build the foreground object of a cell. Only called for types with an object.
    fn render_cell(&mut self, kind: CellType, position: Vec3) -> Self::Handle;

    /// Build the decorative ground mound beneath a cell
    fn render_ground(&mut self, position: Vec3) -> Self::Handle;

    /// Release everything tied to `handle`
    fn destroy(&mut self, handle: Self::Handle);

    /// Offset the world container by `delta` (render `x`, `z`) after a slide
    fn translate_world_origin(&mut self, delta: Vec2);
}
