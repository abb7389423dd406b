//! World grid - a flat, row-major arena of cells

use glam::IVec2;

use super::cell::{Cell, CellType};
use crate::error::{StreamError, StreamResult};

/// The authoritative world: `size × size` cells, row-major.
///
/// Row index is `x` (first grid index), column index is `y`. Heights are
/// written once by the generator; cell types change only through edits.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldGrid {
    size: usize,
    cells: Vec<Cell>,
}

impl WorldGrid {
    /// Create a flat grid of bare ground
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::default(); size * size],
        }
    }

    /// Side length of the grid
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `pos` addresses a cell of this grid
    pub fn contains(&self, pos: IVec2) -> bool {
        let size = self.size as i64;
        (0..size).contains(&(pos.x as i64)) && (0..size).contains(&(pos.y as i64))
    }

    /// Flat index of `pos`, or `IndexOutOfRange`
    pub fn index_of(&self, pos: IVec2) -> StreamResult<usize> {
        if !self.contains(pos) {
            return Err(StreamError::IndexOutOfRange {
                x: pos.x,
                y: pos.y,
                world_size: self.size,
            });
        }
        Ok(pos.x as usize * self.size + pos.y as usize)
    }

    /// Grid position of a flat index
    pub fn pos_of(&self, index: usize) -> IVec2 {
        IVec2::new((index / self.size) as i32, (index % self.size) as i32)
    }

    pub fn get(&self, pos: IVec2) -> StreamResult<Cell> {
        self.index_of(pos).map(|i| self.cells[i])
    }

    pub fn kind_at(&self, pos: IVec2) -> StreamResult<CellType> {
        self.get(pos).map(|cell| cell.kind)
    }

    pub fn height_at(&self, pos: IVec2) -> StreamResult<f32> {
        self.get(pos).map(|cell| cell.height)
    }

    /// Overwrite the type of a cell, returning the previous type
    pub fn set_kind(&mut self, pos: IVec2, kind: CellType) -> StreamResult<CellType> {
        let index = self.index_of(pos)?;
        Ok(std::mem::replace(&mut self.cells[index].kind, kind))
    }

    /// Cells of row `x`
    pub fn row(&self, x: usize) -> &[Cell] {
        &self.cells[x * self.size..(x + 1) * self.size]
    }

    /// Mutable cells of row `x` (generation only)
    pub(crate) fn row_mut(&mut self, x: usize) -> &mut [Cell] {
        &mut self.cells[x * self.size..(x + 1) * self.size]
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells of the given type
    pub fn count(&self, kind: CellType) -> usize {
        self.cells.iter().filter(|c| c.kind == kind).count()
    }
}
