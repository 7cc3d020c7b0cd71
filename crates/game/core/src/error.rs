//! Error types for the input boundary of pursuit-core.
//!
//! The planner itself has no failure modes: once a layout and a snapshot have
//! been validated, every operation runs to completion. Errors only exist where
//! raw data enters the crate.

use crate::env::MapDimensions;
use crate::state::{AgentId, Cell};

/// Errors raised while building a [`TerrainGrid`](crate::env::TerrainGrid).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    #[error("map dimensions must be non-zero (got {width}x{height})")]
    EmptyDimensions { width: u32, height: u32 },

    #[error("expected {expected} map rows, got {actual}")]
    RowCountMismatch { expected: u32, actual: usize },

    #[error("map row {row} has width {actual}, expected {expected}")]
    RowWidthMismatch {
        row: usize,
        expected: u32,
        actual: usize,
    },

    #[error("unknown map glyph {glyph:?} at ({x}, {y})")]
    UnknownGlyph { glyph: char, x: usize, y: usize },
}

/// Errors raised when a turn snapshot does not fit the known layout.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ObservationError {
    #[error("agent {id} at {cell} is outside the {}x{} map", .dimensions.width, .dimensions.height)]
    AgentOutOfBounds {
        id: AgentId,
        cell: Cell,
        dimensions: MapDimensions,
    },

    #[error("item at {cell} is outside the {}x{} map", .dimensions.width, .dimensions.height)]
    ItemOutOfBounds {
        cell: Cell,
        dimensions: MapDimensions,
    },

    #[error("agent {id} reported inside a wall at {cell}")]
    AgentInWall { id: AgentId, cell: Cell },

    #[error("item reported inside a wall at {0}")]
    ItemInWall(Cell),

    #[error("agent {0} reported twice for the same team")]
    DuplicateAgent(AgentId),
}

/// Errors raised when planner parameters are unusable.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("distance_discount must be finite and non-negative (got {0})")]
    InvalidDistanceDiscount(f64),

    #[error("retarget_margin must be finite and non-negative (got {0})")]
    InvalidRetargetMargin(f64),
}
