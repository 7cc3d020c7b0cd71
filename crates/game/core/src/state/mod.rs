//! Identities, positions, and what the planner knows about agents and items.
//!
//! [`observation`] holds the validated per-turn records produced at the input
//! boundary; [`roster`] folds them into liveness that persists across turns.
mod common;
pub mod observation;
pub mod roster;

pub use common::{AgentId, Cell, Direction};
pub use observation::{
    AgentKind, AgentObservation, ItemObservation, ItemTier, Team, TurnSnapshot,
};
pub use roster::{AgentRecord, Roster};
