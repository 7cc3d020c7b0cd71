use arrayvec::ArrayVec;

use crate::error::MapError;
use crate::grid::Grid;
use crate::state::Cell;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < self.width as i32 && cell.y < self.height as i32
    }

    pub const fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Canonical terrain classes for static map tiles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerrainKind {
    #[default]
    Floor,
    Wall,
}

impl TerrainKind {
    pub const WALL_GLYPH: char = '#';
    pub const FLOOR_GLYPH: char = ' ';

    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            Self::WALL_GLYPH => Some(TerrainKind::Wall),
            Self::FLOOR_GLYPH => Some(TerrainKind::Floor),
            _ => None,
        }
    }

    pub fn is_passable(self) -> bool {
        matches!(self, TerrainKind::Floor)
    }
}

/// Static wall/floor layout of the arena.
///
/// Walls never change after the layout is read, so this is the one piece of
/// fully known truth the planner has. Everything else is belief.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TerrainGrid {
    tiles: Grid<TerrainKind>,
}

impl TerrainGrid {
    /// Parses `height` rows of `width` glyphs (`#` wall, space floor).
    ///
    /// A trailing carriage return on a row is ignored.
    pub fn from_rows<S: AsRef<str>>(
        dimensions: MapDimensions,
        rows: &[S],
    ) -> Result<Self, MapError> {
        if dimensions.width == 0 || dimensions.height == 0 {
            return Err(MapError::EmptyDimensions {
                width: dimensions.width,
                height: dimensions.height,
            });
        }
        if rows.len() != dimensions.height as usize {
            return Err(MapError::RowCountMismatch {
                expected: dimensions.height,
                actual: rows.len(),
            });
        }

        let mut tiles = Grid::new(dimensions, TerrainKind::Floor);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref().trim_end_matches('\r');
            let width = row.chars().count();
            if width != dimensions.width as usize {
                return Err(MapError::RowWidthMismatch {
                    row: y,
                    expected: dimensions.width,
                    actual: width,
                });
            }
            for (x, glyph) in row.chars().enumerate() {
                let terrain = TerrainKind::from_glyph(glyph).ok_or(MapError::UnknownGlyph {
                    glyph,
                    x,
                    y,
                })?;
                tiles.set(Cell::new(x as i32, y as i32), terrain);
            }
        }

        Ok(Self { tiles })
    }

    /// Builds a layout with no walls at all.
    pub fn open(dimensions: MapDimensions) -> Self {
        Self {
            tiles: Grid::new(dimensions, TerrainKind::Floor),
        }
    }

    pub fn dimensions(&self) -> MapDimensions {
        self.tiles.dimensions()
    }

    pub fn terrain(&self, cell: Cell) -> TerrainKind {
        *self.tiles.get(cell)
    }

    pub fn is_wall(&self, cell: Cell) -> bool {
        !self.terrain(cell).is_passable()
    }

    /// Neighbours of `cell` that can be stepped onto, in grid neighbour order.
    pub fn passable_neighbors(&self, cell: Cell) -> ArrayVec<Cell, 4> {
        self.tiles
            .neighbors(cell)
            .into_iter()
            .filter(|neighbor| !self.is_wall(*neighbor))
            .collect()
    }

    pub fn floor_count(&self) -> usize {
        self.tiles
            .iter()
            .filter(|(_, terrain)| terrain.is_passable())
            .count()
    }
}
