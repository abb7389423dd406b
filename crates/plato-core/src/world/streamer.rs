//! Window streaming - renders a square of the world and slides it cell by cell

use glam::{IVec2, Vec2, Vec3};

use super::cell::{Cell, CellType};
use super::coords::CoordinateMapper;
use super::grid::WorldGrid;
use super::window::{Direction, Window};
use super::worldgen_config::WorldParams;
use crate::error::{ConfigError, StreamResult};
use crate::render::RenderGateway;

/// Handles currently drawn for one cell
struct RenderSlot<H> {
    object: Option<H>,
    ground: Option<H>,
}

impl<H> RenderSlot<H> {
    fn empty() -> Self {
        Self {
            object: None,
            ground: None,
        }
    }

    fn is_empty(&self) -> bool {
        self.object.is_none() && self.ground.is_none()
    }
}

/// Result of an edit that did not fail outright
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditOutcome {
    /// The cell changed; `previous` is what it held before
    Applied { previous: CellType },
    /// The required current type did not match; nothing changed
    Rejected { found: CellType },
}

impl EditOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, EditOutcome::Applied { .. })
    }
}

/// Owns the world grid and the window over it, and keeps the renderer's view
/// of that window in step with the grid.
///
/// Render slots form a flat arena parallel to the grid. A slot is non-empty
/// only while its cell is inside the window, and its object handle always
/// matches the cell's current type.
pub struct WindowStreamer<G: RenderGateway> {
    world: WorldGrid,
    slots: Vec<RenderSlot<G::Handle>>,
    window: Window,
    mapper: CoordinateMapper,
    gateway: G,
}

impl<G: RenderGateway> WindowStreamer<G> {
    /// Create a streamer whose window is centered on the middle of the world.
    ///
    /// Nothing is rendered until [`WindowStreamer::populate`] is called.
    pub fn new(world: WorldGrid, params: &WorldParams, gateway: G) -> Result<Self, ConfigError> {
        let center = IVec2::splat(world.size() as i32 / 2);
        Self::with_center(world, params, gateway, center)
    }

    /// Create a streamer with the window centered on `center`
    pub fn with_center(
        world: WorldGrid,
        params: &WorldParams,
        gateway: G,
        center: IVec2,
    ) -> Result<Self, ConfigError> {
        params.validate()?;
        if world.size() != params.world_size {
            return Err(ConfigError::WorldSizeMismatch {
                expected: params.world_size,
                actual: world.size(),
            });
        }

        let window = Window::centered(center, params.map_size);
        if !window.fits(world.size()) {
            return Err(ConfigError::CenterOutOfBounds {
                x: center.x,
                y: center.y,
                world_size: world.size(),
            });
        }

        let slots = std::iter::repeat_with(RenderSlot::empty)
            .take(world.cells().len())
            .collect();

        Ok(Self {
            world,
            slots,
            window,
            mapper: CoordinateMapper::new(params.map_size, params.unit),
            gateway,
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn world(&self) -> &WorldGrid {
        &self.world
    }

    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn gateway_mut(&mut self) -> &mut G {
        &mut self.gateway
    }

    /// Render every cell of the window. Cells that were already drawn are
    /// released and drawn again.
    pub fn populate(&mut self) {
        for pos in self.window.cells() {
            self.evict(pos, false);
            self.render(pos, false);
        }
        log::info!(
            "Populated window around ({}, {}): {} cells",
            self.window.center.x,
            self.window.center.y,
            self.window.extent().x * self.window.extent().y
        );
    }

    /// Slide the window one cell towards `direction`.
    ///
    /// Returns the world-origin translation applied through the gateway, or
    /// `None` when the window is already at the world edge (nothing changes).
    pub fn slide(&mut self, direction: Direction) -> Option<Vec2> {
        let next = self.window.shifted(direction);
        if !next.fits(self.world.size()) {
            log::debug!(
                "Slide {:?} blocked at world edge (window {}..{} x {}..{})",
                direction,
                self.window.low_x,
                self.window.high_x,
                self.window.low_y,
                self.window.high_y
            );
            return None;
        }

        // 1. Release the strip that falls out behind
        for pos in self.window.edge(direction.opposite()) {
            self.evict(pos, false);
        }

        // 2. Move
        self.window = next;

        // 3. Draw the strip that comes into view
        for pos in self.window.edge(direction) {
            self.render(pos, false);
        }

        let delta = direction.origin_delta(self.mapper.unit());
        self.gateway.translate_world_origin(delta);

        log::debug!(
            "Slid {:?}, window center now ({}, {})",
            direction,
            self.window.center.x,
            self.window.center.y
        );
        Some(delta)
    }

    /// Change the cell under a render-space position.
    ///
    /// With `required` set, the edit only happens when the cell currently
    /// holds that type. A `soft` edit swaps the foreground object and keeps
    /// the ground mound.
    pub fn edit(
        &mut self,
        position: Vec3,
        kind: CellType,
        required: Option<CellType>,
        soft: bool,
    ) -> StreamResult<EditOutcome> {
        let pos = self.mapper.render_position_to_world_index(position)?;
        self.edit_cell(pos, kind, required, soft)
    }

    /// [`WindowStreamer::edit`] addressed by grid indices
    pub fn edit_cell(
        &mut self,
        pos: IVec2,
        kind: CellType,
        required: Option<CellType>,
        soft: bool,
    ) -> StreamResult<EditOutcome> {
        let current = self.world.kind_at(pos)?;
        if let Some(required) = required
            && current != required
        {
            log::debug!(
                "Edit at ({}, {}) rejected: wanted {}, found {}",
                pos.x,
                pos.y,
                required.name(),
                current.name()
            );
            return Ok(EditOutcome::Rejected { found: current });
        }

        if self.window.contains(pos) {
            self.evict(pos, soft);
            self.world.set_kind(pos, kind)?;
            self.render(pos, soft);
        } else {
            // Off-screen cells are picked up from the grid when they scroll in
            self.world.set_kind(pos, kind)?;
        }

        log::debug!(
            "Cell ({}, {}) changed from {} to {}",
            pos.x,
            pos.y,
            current.name(),
            kind.name()
        );
        Ok(EditOutcome::Applied { previous: current })
    }

    /// The cell under a render-space position
    pub fn cell_at(&self, position: Vec3) -> StreamResult<Cell> {
        self.world
            .get(self.mapper.render_position_to_world_index(position)?)
    }

    /// Center of the cell under `position`, lifted to its terrain height.
    /// Used to place a pointer marker on the terrain.
    pub fn pointer_position(&self, position: Vec3) -> StreamResult<Vec3> {
        let pos = self.mapper.render_position_to_world_index(position)?;
        let cell = self.world.get(pos)?;
        Ok(self.mapper.world_index_to_render_position(pos, cell.height))
    }

    /// Render position of the window's center cell
    pub fn center_position(&self) -> Vec3 {
        let center = self.window.center;
        let height = self.world.height_at(center).unwrap_or_default();
        self.mapper.world_index_to_render_position(center, height)
    }

    pub fn object_handle(&self, pos: IVec2) -> Option<&G::Handle> {
        let index = self.world.index_of(pos).ok()?;
        self.slots[index].object.as_ref()
    }

    pub fn ground_handle(&self, pos: IVec2) -> Option<&G::Handle> {
        let index = self.world.index_of(pos).ok()?;
        self.slots[index].ground.as_ref()
    }

    /// Grid positions that currently hold at least one handle
    pub fn rendered_cells(&self) -> impl Iterator<Item = IVec2> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| !slot.is_empty())
            .map(move |(index, _)| self.world.pos_of(index))
    }

    /// Release every handle in the window
    pub fn clear(&mut self) {
        for pos in self.window.cells() {
            self.evict(pos, false);
        }
    }

    /// Slot index of a windowed cell. The window always lies inside the world.
    fn slot_index(&self, pos: IVec2) -> usize {
        debug_assert!(self.window.contains(pos) && self.world.contains(pos));
        pos.x as usize * self.world.size() + pos.y as usize
    }

    /// Destroy the handles of a cell, keeping the ground when `keep_ground`
    fn evict(&mut self, pos: IVec2, keep_ground: bool) {
        let index = self.slot_index(pos);
        let slot = &mut self.slots[index];
        if let Some(handle) = slot.object.take() {
            self.gateway.destroy(handle);
        }
        if !keep_ground && let Some(handle) = slot.ground.take() {
            self.gateway.destroy(handle);
        }
    }

    /// Draw a cell from the grid, skipping the ground mound when `keep_ground`
    fn render(&mut self, pos: IVec2, keep_ground: bool) {
        let index = self.slot_index(pos);
        let cell = self.world.cells()[index];
        let position = self.mapper.world_index_to_render_position(pos, cell.height);
        let slot = &mut self.slots[index];

        if cell.kind.has_object() {
            let handle = self.gateway.render_cell(cell.kind, position);
            if let Some(stale) = slot.object.replace(handle) {
                self.gateway.destroy(stale);
            }
        }
        if !keep_ground {
            let handle = self.gateway.render_ground(position);
            if let Some(stale) = slot.ground.replace(handle) {
                self.gateway.destroy(stale);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StreamError;
    use crate::render::{RecordingGateway, Renderable};

    fn params(world_size: usize, map_size: usize) -> WorldParams {
        WorldParams {
            world_size,
            map_size,
            unit: 5.0,
        }
    }

    /// Small world with a checkerboard of trees and rocks on row 0
    fn sample_world(size: usize) -> WorldGrid {
        let mut world = WorldGrid::new(size);
        for y in 0..size as i32 {
            let kind = if y % 2 == 0 {
                CellType::Tree
            } else {
                CellType::Rock
            };
            world.set_kind(IVec2::new(0, y), kind).unwrap();
        }
        world
    }

    fn streamer(size: usize, map: usize) -> WindowStreamer<RecordingGateway> {
        WindowStreamer::new(sample_world(size), &params(size, map), RecordingGateway::new())
            .expect("valid streamer")
    }

    #[test]
    fn test_new_centers_window() {
        let streamer = streamer(20, 5);
        assert_eq!(streamer.window().center, IVec2::new(10, 10));
        assert_eq!(streamer.window().low(), IVec2::new(8, 8));
        assert_eq!(streamer.gateway().stats().calls(), 0);
    }

    #[test]
    fn test_new_rejects_bad_setup() {
        let result =
            WindowStreamer::new(WorldGrid::new(10), &params(12, 5), RecordingGateway::new());
        assert!(matches!(
            result,
            Err(ConfigError::WorldSizeMismatch {
                expected: 12,
                actual: 10
            })
        ));

        let result = WindowStreamer::with_center(
            WorldGrid::new(10),
            &params(10, 5),
            RecordingGateway::new(),
            IVec2::new(1, 5),
        );
        assert!(matches!(result, Err(ConfigError::CenterOutOfBounds { .. })));

        let result =
            WindowStreamer::new(WorldGrid::new(10), &params(10, 11), RecordingGateway::new());
        assert!(matches!(result, Err(ConfigError::MapLargerThanWorld { .. })));
    }

    #[test]
    fn test_populate_renders_window() {
        let mut streamer = streamer(20, 5);
        streamer.populate();

        let stats = streamer.gateway().stats();
        assert_eq!(stats.grounds_rendered, 25);
        assert_eq!(stats.objects_rendered, 0); // row 0 is outside the window
        assert_eq!(streamer.rendered_cells().count(), 25);
        assert!(streamer.rendered_cells().all(|p| streamer.window().contains(p)));
    }

    #[test]
    fn test_populate_twice_does_not_leak() {
        let mut streamer = streamer(20, 5);
        streamer.populate();
        streamer.populate();
        assert_eq!(streamer.gateway().live_count(), 25);
        assert_eq!(streamer.gateway().stats().destroyed, 25);
    }

    #[test]
    fn test_slide_swaps_edge_strips() {
        let mut streamer = streamer(20, 5);
        streamer.populate();

        let delta = streamer.slide(Direction::Right);
        assert_eq!(delta, Some(Vec2::new(-5.0, 0.0)));
        assert_eq!(streamer.window().low(), IVec2::new(8, 9));

        let stats = streamer.gateway().stats();
        assert_eq!(stats.destroyed, 5);
        assert_eq!(stats.grounds_rendered, 30);
        assert_eq!(stats.translations, 1);
        assert_eq!(streamer.gateway().live_count(), 25);
        assert!(streamer.ground_handle(IVec2::new(8, 8)).is_none());
        assert!(streamer.ground_handle(IVec2::new(8, 13)).is_some());
    }

    #[test]
    fn test_slide_into_objects_renders_them() {
        let mut streamer = WindowStreamer::with_center(
            sample_world(20),
            &params(20, 5),
            RecordingGateway::new(),
            IVec2::new(3, 10),
        )
        .unwrap();
        streamer.populate();
        assert_eq!(streamer.gateway().stats().objects_rendered, 0);

        streamer.slide(Direction::Up);
        // Row 0 columns 8..13 scrolled in: trees at 8, 10, 12 and rocks at 9, 11
        assert_eq!(streamer.gateway().live_objects(CellType::Tree), 3);
        assert_eq!(streamer.gateway().live_objects(CellType::Rock), 2);

        let handle = streamer.object_handle(IVec2::new(0, 10)).unwrap();
        let (renderable, position) = streamer.gateway().lookup(handle).unwrap();
        assert_eq!(renderable, Renderable::Object(CellType::Tree));
        assert_eq!(
            streamer.mapper().render_position_to_world_index(position),
            Ok(IVec2::new(0, 10))
        );
    }

    #[test]
    fn test_blocked_slide_is_noop() {
        let mut streamer = WindowStreamer::with_center(
            sample_world(20),
            &params(20, 5),
            RecordingGateway::new(),
            IVec2::new(2, 2),
        )
        .unwrap();
        streamer.populate();
        let before = *streamer.window();
        let calls = streamer.gateway().stats().calls();

        assert_eq!(streamer.slide(Direction::Up), None);
        assert_eq!(streamer.slide(Direction::Left), None);
        assert_eq!(*streamer.window(), before);
        assert_eq!(streamer.gateway().stats().calls(), calls);
    }

    #[test]
    fn test_edit_hard_replaces_ground() {
        let mut streamer = streamer(20, 5);
        streamer.populate();
        let pos = IVec2::new(10, 10);
        let position = streamer.mapper().world_index_to_render_position(pos, 0.0);
        let ground_before = streamer.ground_handle(pos).unwrap().id();

        let outcome = streamer
            .edit(position, CellType::Rock, None, false)
            .unwrap();
        assert_eq!(
            outcome,
            EditOutcome::Applied {
                previous: CellType::Ground
            }
        );
        assert_eq!(streamer.world().kind_at(pos), Ok(CellType::Rock));
        assert_ne!(streamer.ground_handle(pos).unwrap().id(), ground_before);
        assert_eq!(streamer.gateway().live_objects(CellType::Rock), 1);
    }

    #[test]
    fn test_edit_soft_keeps_ground() {
        let mut streamer = streamer(20, 5);
        streamer.populate();
        let pos = IVec2::new(9, 11);
        let ground_before = streamer.ground_handle(pos).unwrap().id();

        streamer
            .edit_cell(pos, CellType::Tree, Some(CellType::Ground), true)
            .unwrap();
        assert_eq!(streamer.ground_handle(pos).unwrap().id(), ground_before);
        assert!(streamer.object_handle(pos).is_some());

        // Clearing back to ground drops the object only
        streamer
            .edit_cell(pos, CellType::Ground, None, true)
            .unwrap();
        assert!(streamer.object_handle(pos).is_none());
        assert_eq!(streamer.ground_handle(pos).unwrap().id(), ground_before);
        assert_eq!(streamer.gateway().live_count(), 25);
    }

    #[test]
    fn test_edit_rejected_makes_no_calls() {
        let mut streamer = streamer(20, 5);
        streamer.populate();
        let calls = streamer.gateway().stats().calls();

        let outcome = streamer
            .edit_cell(IVec2::new(0, 0), CellType::Tree, Some(CellType::Ground), true)
            .unwrap();
        assert_eq!(
            outcome,
            EditOutcome::Rejected {
                found: CellType::Tree
            }
        );
        assert_eq!(streamer.gateway().stats().calls(), calls);
    }

    #[test]
    fn test_edit_outside_window_only_touches_grid() {
        let mut streamer = streamer(20, 5);
        streamer.populate();
        let calls = streamer.gateway().stats().calls();

        let outcome = streamer
            .edit_cell(IVec2::new(0, 1), CellType::Water, None, false)
            .unwrap();
        assert!(outcome.is_applied());
        assert_eq!(streamer.world().kind_at(IVec2::new(0, 1)), Ok(CellType::Water));
        assert_eq!(streamer.gateway().stats().calls(), calls);
        assert!(streamer.object_handle(IVec2::new(0, 1)).is_none());
    }

    #[test]
    fn test_edit_out_of_world_fails() {
        let mut streamer = streamer(20, 5);
        let result = streamer.edit(Vec3::new(-1000.0, 0.0, 0.0), CellType::Tree, None, false);
        assert!(result.is_err());
    }

    #[test]
    fn test_edit_at_nan_position_fails() {
        let mut streamer = streamer(20, 5);
        streamer.populate();
        let world = streamer.world().clone();
        let calls = streamer.gateway().stats().calls();

        let result = streamer.edit(
            Vec3::new(f32::NAN, 0.0, f32::NAN),
            CellType::Rock,
            None,
            false,
        );
        assert_eq!(result, Err(StreamError::NonFinitePosition));
        assert_eq!(*streamer.world(), world);
        assert_eq!(streamer.world().kind_at(IVec2::ZERO), Ok(CellType::Tree));
        assert_eq!(streamer.gateway().stats().calls(), calls);
        assert!(streamer.cell_at(Vec3::splat(f32::NAN)).is_err());
        assert!(streamer.pointer_position(Vec3::splat(f32::INFINITY)).is_err());
    }

    #[test]
    fn test_pointer_position_snaps_to_cell_center() {
        let mut world = WorldGrid::new(20);
        world.row_mut(9)[10].height = 2.5;
        let streamer =
            WindowStreamer::new(world, &params(20, 5), RecordingGateway::new()).unwrap();

        // Cell (9, 10) centers at x = (10 - 2.5) * 5 + 2.5, z = (9 - 2.5) * 5 + 2.5
        let pointer = streamer
            .pointer_position(Vec3::new(39.0, 0.0, 34.0))
            .unwrap();
        assert_eq!(pointer, Vec3::new(40.0, 2.5, 35.0));
        assert_eq!(
            streamer.cell_at(Vec3::new(39.0, 0.0, 34.0)).unwrap().height,
            2.5
        );
    }

    #[test]
    fn test_clear_releases_everything() {
        let mut streamer = streamer(20, 5);
        streamer.populate();
        streamer.clear();
        assert_eq!(streamer.gateway().live_count(), 0);
        assert_eq!(streamer.rendered_cells().count(), 0);
    }
}
