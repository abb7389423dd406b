//! Point-edit tools driven by pointer clicks

use glam::Vec3;

use crate::error::StreamResult;
use crate::render::RenderGateway;
use crate::world::{CellType, EditOutcome, WindowStreamer};

/// An action applied to the cell under the pointer
pub trait Tool {
    /// Tool display name
    fn name(&self) -> &str;

    /// Apply the tool at a render-space position
    fn apply<G: RenderGateway>(
        &self,
        streamer: &mut WindowStreamer<G>,
        position: Vec3,
    ) -> StreamResult<EditOutcome>;
}

/// Places an object, optionally only on cells of a given type.
/// Placement is a soft edit: the ground mound stays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceTool {
    pub kind: CellType,
    pub requires: Option<CellType>,
}

impl PlaceTool {
    pub fn new(kind: CellType, requires: Option<CellType>) -> Self {
        Self { kind, requires }
    }

    /// Plant a tree, only on bare ground
    pub fn tree() -> Self {
        Self::new(CellType::Tree, Some(CellType::Ground))
    }
}

impl Tool for PlaceTool {
    fn name(&self) -> &str {
        "Place"
    }

    fn apply<G: RenderGateway>(
        &self,
        streamer: &mut WindowStreamer<G>,
        position: Vec3,
    ) -> StreamResult<EditOutcome> {
        streamer.edit(position, self.kind, self.requires, true)
    }
}

/// Removes whatever stands on a cell, leaving bare ground
#[derive(Debug, Clone, Copy, Default)]
pub struct ClearTool;

impl Tool for ClearTool {
    fn name(&self) -> &str {
        "Clear"
    }

    fn apply<G: RenderGateway>(
        &self,
        streamer: &mut WindowStreamer<G>,
        position: Vec3,
    ) -> StreamResult<EditOutcome> {
        streamer.edit(position, CellType::Ground, None, true)
    }
}

/// Click behaviour: plant a tree on bare ground, clear anything else
#[derive(Debug, Clone, Copy, Default)]
pub struct InteractTool;

impl Tool for InteractTool {
    fn name(&self) -> &str {
        "Interact"
    }

    fn apply<G: RenderGateway>(
        &self,
        streamer: &mut WindowStreamer<G>,
        position: Vec3,
    ) -> StreamResult<EditOutcome> {
        match streamer.cell_at(position)?.kind {
            CellType::Ground => PlaceTool::tree().apply(streamer, position),
            _ => ClearTool.apply(streamer, position),
        }
    }
}
