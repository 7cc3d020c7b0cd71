//! Persistent belief about what every cell is worth.
//!
//! The arena only reports what friendly agents can currently see, so the
//! planner keeps a [`MemoryField`]: visible cells are overwritten with fresh
//! truth each turn, unseen cells keep their last known value.
//!
//! # Value scale
//!
//! | Content | Value |
//! |---------|-------|
//! | wall | [`WALL_SENTINEL`] |
//! | agent (either team) | [`OCCUPANCY_PENALTY`] |
//! | confirmed empty floor | [`NEUTRAL_BASELINE`] |
//! | never confirmed floor | [`UNSEEN_BELIEF`] |
//! | common item | [`COMMON_ITEM_VALUE`] |
//! | rare item | [`RARE_ITEM_VALUE`] |
mod merger;
mod visibility;

pub use merger::MergeSummary;
pub use visibility::line_of_sight;

use crate::env::TerrainGrid;
use crate::grid::Grid;
use crate::state::{Cell, ItemTier};

/// Value held by wall cells on every turn.
pub const WALL_SENTINEL: i32 = -1000;
/// Value written onto cells occupied by any visible agent.
pub const OCCUPANCY_PENALTY: i32 = -50;
/// Value of floor confirmed to hold nothing.
pub const NEUTRAL_BASELINE: i32 = 0;
/// Initial value of floor never seen; every floor cell starts with a common item.
pub const UNSEEN_BELIEF: i32 = 1;
pub const COMMON_ITEM_VALUE: i32 = 2;
pub const RARE_ITEM_VALUE: i32 = 10;

pub const fn item_value(tier: ItemTier) -> i32 {
    match tier {
        ItemTier::Common => COMMON_ITEM_VALUE,
        ItemTier::Rare => RARE_ITEM_VALUE,
    }
}

/// What a cell was classified as during the most recent merge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellContent {
    Wall,
    #[default]
    Empty,
    Item(ItemTier),
    Friendly,
    Enemy,
}

impl CellContent {
    pub const fn glyph(self) -> char {
        match self {
            CellContent::Wall => '#',
            CellContent::Empty => ' ',
            CellContent::Item(ItemTier::Common) => 'o',
            CellContent::Item(ItemTier::Rare) => 'O',
            CellContent::Friendly => 'P',
            CellContent::Enemy => 'E',
        }
    }
}

/// Cell values persisted across turns plus this turn's classification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryField {
    values: Grid<i32>,
    contents: Grid<CellContent>,
}

impl MemoryField {
    /// Fresh memory: walls hold the sentinel, all floor the unseen belief.
    pub fn new(terrain: &TerrainGrid) -> Self {
        let dimensions = terrain.dimensions();
        Self {
            values: Grid::from_fn(dimensions, |cell| {
                if terrain.is_wall(cell) {
                    WALL_SENTINEL
                } else {
                    UNSEEN_BELIEF
                }
            }),
            contents: Grid::from_fn(dimensions, |cell| {
                if terrain.is_wall(cell) {
                    CellContent::Wall
                } else {
                    CellContent::Empty
                }
            }),
        }
    }

    pub fn value(&self, cell: Cell) -> i32 {
        *self.values.get(cell)
    }

    pub fn content(&self, cell: Cell) -> CellContent {
        *self.contents.get(cell)
    }

    /// Classification grid as text, one row per line.
    pub fn render(&self) -> String {
        let dimensions = self.contents.dimensions();
        let mut out = String::with_capacity(dimensions.area() + dimensions.height as usize);
        for (cell, content) in self.contents.iter() {
            out.push(content.glyph());
            if cell.x + 1 == dimensions.width as i32 {
                out.push('\n');
            }
        }
        out
    }
}
