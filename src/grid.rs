use serde::{Deserialize, Serialize};

use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the neighbouring cell one step along `direction`.
    #[must_use]
    pub fn offset(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Square playing field of `dimension` x `dimension` cells.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSpace {
    dimension: u16,
}

impl GridSpace {
    #[must_use]
    pub const fn new(dimension: u16) -> Self {
        Self { dimension }
    }

    /// Number of cells along each axis.
    #[must_use]
    pub fn dimension(self) -> u16 {
        self.dimension
    }

    /// Returns true when `0 <= x < N` and `0 <= y < N`.
    #[must_use]
    pub fn in_bounds(self, cell: Cell) -> bool {
        let upper = i32::from(self.dimension);
        cell.x >= 0 && cell.y >= 0 && cell.x < upper && cell.y < upper
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.dimension) * usize::from(self.dimension)
    }
}

#[cfg(test)]
mod tests {
    use crate::input::Direction;

    use super::{Cell, GridSpace};

    #[test]
    fn in_bounds_accepts_corners_and_rejects_edges_past_them() {
        let grid = GridSpace::new(25);

        assert!(grid.in_bounds(Cell::new(0, 0)));
        assert!(grid.in_bounds(Cell::new(24, 24)));
        assert!(!grid.in_bounds(Cell::new(25, 0)));
        assert!(!grid.in_bounds(Cell::new(0, 25)));
        assert!(!grid.in_bounds(Cell::new(-1, 3)));
        assert!(!grid.in_bounds(Cell::new(3, -1)));
    }

    #[test]
    fn offset_moves_one_cell_along_heading() {
        let origin = Cell::new(5, 5);

        assert_eq!(origin.offset(Direction::Up), Cell::new(5, 4));
        assert_eq!(origin.offset(Direction::Down), Cell::new(5, 6));
        assert_eq!(origin.offset(Direction::Left), Cell::new(4, 5));
        assert_eq!(origin.offset(Direction::Right), Cell::new(6, 5));
    }

    #[test]
    fn total_cells_is_dimension_squared() {
        assert_eq!(GridSpace::new(25).total_cells(), 625);
    }
}
