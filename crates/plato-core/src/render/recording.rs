//! A gateway that keeps track of what would be on screen

use std::collections::HashMap;

use glam::{Vec2, Vec3};

use super::RenderGateway;
use crate::world::CellType;

/// Handle issued by [`RecordingGateway`]. Deliberately not `Clone`.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct RenderHandle(u64);

impl RenderHandle {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// What a live handle stands for
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Renderable {
    Object(CellType),
    Ground,
}

/// Call counters
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GatewayStats {
    pub objects_rendered: usize,
    pub grounds_rendered: usize,
    pub destroyed: usize,
    pub translations: usize,
}

impl GatewayStats {
    /// Total number of gateway calls
    pub fn calls(&self) -> usize {
        self.objects_rendered + self.grounds_rendered + self.destroyed + self.translations
    }
}

/// Headless renderer: tracks live renderables, their positions and the
/// world origin without building any geometry
#[derive(Debug, Default)]
pub struct RecordingGateway {
    next_id: u64,
    live: HashMap<u64, (Renderable, Vec3)>,
    origin: Vec2,
    stats: GatewayStats,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// What a handle currently draws, if it is still alive
    pub fn lookup(&self, handle: &RenderHandle) -> Option<(Renderable, Vec3)> {
        self.live.get(&handle.0).copied()
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Number of live foreground objects of the given type
    pub fn live_objects(&self, kind: CellType) -> usize {
        self.live
            .values()
            .filter(|(renderable, _)| *renderable == Renderable::Object(kind))
            .count()
    }

    /// Every live renderable with its render position, in no particular order
    pub fn live(&self) -> impl Iterator<Item = (Renderable, Vec3)> + '_ {
        self.live.values().copied()
    }

    /// Accumulated world container offset
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn stats(&self) -> GatewayStats {
        self.stats
    }

    fn issue(&mut self, renderable: Renderable, position: Vec3) -> RenderHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.live.insert(id, (renderable, position));
        RenderHandle(id)
    }
}

impl RenderGateway for RecordingGateway {
    type Handle = RenderHandle;

    fn render_cell(&mut self, kind: CellType, position: Vec3) -> RenderHandle {
        log::trace!("render {} at {}", kind.name(), position);
        self.stats.objects_rendered += 1;
        self.issue(Renderable::Object(kind), position)
    }

    fn render_ground(&mut self, position: Vec3) -> RenderHandle {
        self.stats.grounds_rendered += 1;
        self.issue(Renderable::Ground, position)
    }

    fn destroy(&mut self, handle: RenderHandle) {
        self.stats.destroyed += 1;
        if self.live.remove(&handle.0).is_none() {
            log::warn!("destroy called for unknown handle {}", handle.0);
        }
    }

    fn translate_world_origin(&mut self, delta: Vec2) {
        self.stats.translations += 1;
        self.origin += delta;
    }
}
