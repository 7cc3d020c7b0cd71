//! Spatial reasoning for a turn-based, partially observable grid collection game.
//!
//! `pursuit-core` is pure and I/O-free. Each turn the [`engine::TurnEngine`]
//! folds a [`TurnSnapshot`] into a persistent [`MemoryField`], floods a
//! [`ValueField`] from every living friendly agent, and picks one destination
//! per agent with the [`TargetSelector`]. Reading the arena protocol and
//! writing commands belongs to the bot binary.
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod grid;
pub mod memory;
pub mod planning;
pub mod state;

pub use config::PlannerConfig;
pub use engine::{MoveCommand, TurnEngine};
pub use env::{MapDimensions, TerrainGrid, TerrainKind};
pub use error::{ConfigError, MapError, ObservationError};
pub use grid::Grid;
pub use memory::{CellContent, MemoryField, MergeSummary};
pub use planning::{Candidate, Target, TargetSelector, ValueField, rank_candidates};
pub use state::{
    AgentId, AgentKind, AgentObservation, AgentRecord, Cell, Direction, ItemObservation,
    ItemTier, Roster, Team, TurnSnapshot,
};
