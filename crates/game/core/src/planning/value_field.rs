//! Breadth-first flood fill producing score and distance fields.
//!
//! Starting from an origin, the fill expands one ring (all cells at the same
//! hop count) at a time, so the first time a cell is reached is its shortest
//! distance. Each newly reached cell takes its parent's cumulative score plus
//! its own memory value plus the configured step cost: paths that brush past
//! agents keep carrying that penalty, paths over items keep the reward.
//!
//! Walls are never entered. The fill stops once the origin's connected
//! component is exhausted, which bounds it by the number of cells.

use crate::env::TerrainGrid;
use crate::grid::Grid;
use crate::memory::MemoryField;
use crate::state::Cell;

/// Cumulative scores and hop distances from one origin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValueField {
    origin: Cell,
    scores: Grid<i32>,
    distances: Grid<Option<u32>>,
    visited: usize,
}

impl ValueField {
    /// Floods the component containing `origin`.
    ///
    /// The origin has score 0 and distance 0. Neighbours are expanded in grid
    /// order (up, down, left, right) and rings in discovery order, so the
    /// parent chosen for each cell is deterministic.
    pub fn build(
        origin: Cell,
        terrain: &TerrainGrid,
        memory: &MemoryField,
        step_cost: i32,
    ) -> Self {
        let dimensions = terrain.dimensions();
        let origin = dimensions.wrap(origin);

        let mut scores = Grid::new(dimensions, 0);
        let mut distances = Grid::new(dimensions, None);
        distances.set(origin, Some(0));

        let mut ring = vec![origin];
        let mut next = Vec::new();
        let mut depth = 0;
        let mut visited = 1;

        while !ring.is_empty() {
            depth += 1;
            for &cell in &ring {
                let parent_score = *scores.get(cell);
                for neighbor in terrain.passable_neighbors(cell) {
                    if distances.get(neighbor).is_some() {
                        continue;
                    }
                    distances.set(neighbor, Some(depth));
                    scores.set(neighbor, parent_score + memory.value(neighbor) + step_cost);
                    next.push(neighbor);
                    visited += 1;
                }
            }
            std::mem::swap(&mut ring, &mut next);
            next.clear();
        }

        Self {
            origin,
            scores,
            distances,
            visited,
        }
    }

    pub fn origin(&self) -> Cell {
        self.origin
    }

    /// Cumulative score, or `None` if the cell was not reached.
    pub fn score(&self, cell: Cell) -> Option<i32> {
        self.distance(cell).map(|_| *self.scores.get(cell))
    }

    /// Hop distance from the origin, or `None` if the cell was not reached.
    pub fn distance(&self, cell: Cell) -> Option<u32> {
        *self.distances.get(cell)
    }

    pub fn is_reachable(&self, cell: Cell) -> bool {
        self.distance(cell).is_some()
    }

    /// Number of cells reached, origin included.
    pub fn visited_count(&self) -> usize {
        self.visited
    }

    /// Reached cells with their score and distance, in scan order.
    pub fn reachable(&self) -> impl Iterator<Item = (Cell, i32, u32)> + '_ {
        self.distances.iter().filter_map(|(cell, distance)| {
            distance.map(|distance| (cell, *self.scores.get(cell), distance))
        })
    }
}
