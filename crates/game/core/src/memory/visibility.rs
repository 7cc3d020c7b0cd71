use crate::env::TerrainGrid;
use crate::state::{Cell, Direction};

/// Cells seen from `origin` along the four axis rays, excluding `origin` itself.
///
/// Each ray runs until it hits a wall (the wall itself is not returned) and
/// follows the torus, stopping before it would come back around to `origin`.
/// Cells are returned ray by ray in up, down, left, right order.
pub fn line_of_sight(terrain: &TerrainGrid, origin: Cell) -> Vec<Cell> {
    let dimensions = terrain.dimensions();
    let mut visible = Vec::new();

    for direction in Direction::ALL {
        let lap = match direction {
            Direction::Up | Direction::Down => dimensions.height,
            Direction::Left | Direction::Right => dimensions.width,
        };
        let mut cell = dimensions.wrap(origin);
        for _ in 1..lap {
            cell = dimensions.step(cell, direction);
            if terrain.is_wall(cell) {
                break;
            }
            visible.push(cell);
        }
    }

    visible
}
