//! Toroidal 2-D container shared by terrain, memory, and value fields.
//!
//! [`Grid`] is a plain owned array with wraparound addressing: every accessor
//! normalises its [`Cell`] onto the torus first, so there is no out-of-bounds
//! failure mode. It carries no game rules; the layers built on top decide what
//! the stored values mean.

use crate::env::MapDimensions;
use crate::state::{Cell, Direction};

/// Fixed-size toroidal grid stored in row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    dimensions: MapDimensions,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Creates a grid where every cell holds a clone of `fill`.
    pub fn new(dimensions: MapDimensions, fill: T) -> Self {
        Self {
            dimensions,
            cells: vec![fill; dimensions.area()],
        }
    }
}

impl<T> Grid<T> {
    /// Builds a grid by evaluating `init` for every cell in scan order.
    pub fn from_fn(dimensions: MapDimensions, mut init: impl FnMut(Cell) -> T) -> Self {
        let cells = dimensions.cells().map(&mut init).collect();
        Self { dimensions, cells }
    }

    pub fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    pub fn get(&self, cell: Cell) -> &T {
        &self.cells[self.index_of(cell)]
    }

    pub fn get_mut(&mut self, cell: Cell) -> &mut T {
        let index = self.index_of(cell);
        &mut self.cells[index]
    }

    pub fn set(&mut self, cell: Cell, value: T) {
        let index = self.index_of(cell);
        self.cells[index] = value;
    }

    /// Row-major index of the (wrapped) cell.
    pub fn index_of(&self, cell: Cell) -> usize {
        let wrapped = self.dimensions.wrap(cell);
        wrapped.y as usize * self.dimensions.width as usize + wrapped.x as usize
    }

    /// The four orthogonal neighbours in up, down, left, right order, wrapped.
    pub fn neighbors(&self, cell: Cell) -> [Cell; 4] {
        self.dimensions.neighbors(cell)
    }

    /// Cells paired with their values, in scan order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, &T)> {
        self.dimensions.cells().zip(self.cells.iter())
    }
}

impl MapDimensions {
    /// Normalises any coordinate pair onto the torus.
    pub fn wrap(&self, cell: Cell) -> Cell {
        Cell::new(
            cell.x.rem_euclid(self.width as i32),
            cell.y.rem_euclid(self.height as i32),
        )
    }

    /// Steps one cell in `direction`, re-entering on the opposite edge.
    pub fn step(&self, cell: Cell, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        self.wrap(cell.offset(dx, dy))
    }

    pub fn neighbors(&self, cell: Cell) -> [Cell; 4] {
        Direction::ALL.map(|direction| self.step(cell, direction))
    }

    /// All cells in scan order (y outer, x inner).
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        let width = self.width as i32;
        let height = self.height as i32;
        (0..height).flat_map(move |y| (0..width).map(move |x| Cell::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_and_set_wrap_around() {
        let mut grid = Grid::new(MapDimensions::new(4, 3), 0);
        grid.set(Cell::new(-1, 0), 7);
        assert_eq!(*grid.get(Cell::new(3, 0)), 7);

        grid.set(Cell::new(1, 3), 9);
        assert_eq!(*grid.get(Cell::new(1, 0)), 9);
        assert_eq!(*grid.get(Cell::new(5, -3)), 9);
    }

    #[test]
    fn neighbors_are_up_down_left_right() {
        let grid = Grid::new(MapDimensions::new(5, 5), ());
        assert_eq!(
            grid.neighbors(Cell::new(2, 2)),
            [
                Cell::new(2, 1),
                Cell::new(2, 3),
                Cell::new(1, 2),
                Cell::new(3, 2)
            ]
        );
    }

    #[test]
    fn neighbors_wrap_at_corner() {
        let grid = Grid::new(MapDimensions::new(5, 4), ());
        assert_eq!(
            grid.neighbors(Cell::ORIGIN),
            [
                Cell::new(0, 3),
                Cell::new(0, 1),
                Cell::new(4, 0),
                Cell::new(1, 0)
            ]
        );
    }

    #[test]
    fn scan_order_is_row_major() {
        let grid = Grid::from_fn(MapDimensions::new(3, 2), |cell| cell.x + 10 * cell.y);
        let values: Vec<i32> = grid.iter().map(|(_, v)| *v).collect();
        assert_eq!(values, vec![0, 1, 2, 10, 11, 12]);
        assert_eq!(grid.index_of(Cell::new(1, 1)), 4);
    }
}
