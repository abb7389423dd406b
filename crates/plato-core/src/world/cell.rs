//! Cell types and the per-cell record stored in the world grid

use serde::{Deserialize, Serialize};

/// What occupies a cell. Every type except `Ground` has a foreground object.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellType {
    /// Bare terrain, only the ground mound is drawn
    #[default]
    Ground,
    Tree,
    Water,
    Rock,
    Grass,
}

impl CellType {
    /// All cell types in declaration order
    pub const ALL: [CellType; 5] = [
        CellType::Ground,
        CellType::Tree,
        CellType::Water,
        CellType::Rock,
        CellType::Grass,
    ];

    /// Whether the renderer needs a foreground object for this cell
    pub fn has_object(self) -> bool {
        !matches!(self, CellType::Ground)
    }

    /// Single-character glyph used by text renderers and debug dumps
    pub fn glyph(self) -> char {
        match self {
            CellType::Ground => '.',
            CellType::Tree => 'T',
            CellType::Water => '~',
            CellType::Rock => 'o',
            CellType::Grass => '"',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CellType::Ground => "ground",
            CellType::Tree => "tree",
            CellType::Water => "water",
            CellType::Rock => "rock",
            CellType::Grass => "grass",
        }
    }
}

/// One arena record: the cell's type and its terrain height
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub kind: CellType,
    pub height: f32,
}

impl Cell {
    pub fn new(kind: CellType, height: f32) -> Self {
        Self { kind, height }
    }
}
