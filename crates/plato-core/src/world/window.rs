//! The rendered window and the cardinal directions it slides in

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

/// A cardinal move of the window by one cell.
///
/// Grid deltas are `(Δx, Δy)` over (rows, columns). Diagonal moves cannot be
/// expressed; the input layer resolves held keys to one of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step in grid indices
    pub fn grid_delta(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(-1, 0),
            Direction::Down => IVec2::new(1, 0),
            Direction::Left => IVec2::new(0, -1),
            Direction::Right => IVec2::new(0, 1),
        }
    }

    /// Inverse of [`Direction::grid_delta`]; `None` for zero or diagonal deltas
    pub fn from_grid_delta(delta: IVec2) -> Option<Self> {
        match (delta.x, delta.y) {
            (-1, 0) => Some(Direction::Up),
            (1, 0) => Some(Direction::Down),
            (0, -1) => Some(Direction::Left),
            (0, 1) => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Render-space `(x, z)` translation of the world container that keeps
    /// the window visually centered after sliding this way
    pub fn origin_delta(self, unit: f32) -> Vec2 {
        let delta = self.grid_delta();
        Vec2::new(-unit * delta.y as f32, -unit * delta.x as f32)
    }
}

/// Axis-aligned square of the world grid that is currently rendered.
///
/// `x` bounds rows, `y` bounds columns; both ranges are half-open.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    pub low_x: i32,
    pub high_x: i32,
    pub low_y: i32,
    pub high_y: i32,
    pub center: IVec2,
}

impl Window {
    /// Window of side `map_size` around `center`
    pub fn centered(center: IVec2, map_size: usize) -> Self {
        let low = center - IVec2::splat(map_size as i32 / 2);
        let high = low + IVec2::splat(map_size as i32);
        Self {
            low_x: low.x,
            high_x: high.x,
            low_y: low.y,
            high_y: high.y,
            center,
        }
    }

    /// Side length along rows and along columns
    pub fn extent(&self) -> IVec2 {
        IVec2::new(self.high_x - self.low_x, self.high_y - self.low_y)
    }

    /// Top-left cell of the window
    pub fn low(&self) -> IVec2 {
        IVec2::new(self.low_x, self.low_y)
    }

    pub fn contains(&self, pos: IVec2) -> bool {
        (self.low_x..self.high_x).contains(&pos.x) && (self.low_y..self.high_y).contains(&pos.y)
    }

    /// Whether every bound lies within `[0, world_size]`
    pub fn fits(&self, world_size: usize) -> bool {
        let world_size = world_size as i64;
        let within = |v: i32| (0..=world_size).contains(&(v as i64));
        within(self.low_x) && within(self.high_x) && within(self.low_y) && within(self.high_y)
    }

    /// The window translated one cell towards `direction`
    pub fn shifted(&self, direction: Direction) -> Self {
        let delta = direction.grid_delta();
        Self {
            low_x: self.low_x + delta.x,
            high_x: self.high_x + delta.x,
            low_y: self.low_y + delta.y,
            high_y: self.high_y + delta.y,
            center: self.center + delta,
        }
    }

    /// Every cell of the window, row by row
    pub fn cells(&self) -> impl Iterator<Item = IVec2> + use<> {
        let (low_y, high_y) = (self.low_y, self.high_y);
        (self.low_x..self.high_x).flat_map(move |x| (low_y..high_y).map(move |y| IVec2::new(x, y)))
    }

    /// The row or column of cells on the window's `side` edge
    pub fn edge(&self, side: Direction) -> impl Iterator<Item = IVec2> + use<> {
        let (rows, cols) = match side {
            Direction::Up => (self.low_x..self.low_x + 1, self.low_y..self.high_y),
            Direction::Down => (self.high_x - 1..self.high_x, self.low_y..self.high_y),
            Direction::Left => (self.low_x..self.high_x, self.low_y..self.low_y + 1),
            Direction::Right => (self.low_x..self.high_x, self.high_y - 1..self.high_y),
        };
        rows.flat_map(move |x| cols.clone().map(move |y| IVec2::new(x, y)))
    }
}
