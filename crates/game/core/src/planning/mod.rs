//! Per-agent spatial reasoning: flood fill, then destination choice.
//!
//! 1. [`ValueField::build`] floods the agent's connected component and
//!    records a cumulative score and hop distance for every reached cell.
//! 2. [`TargetSelector::select`] ranks those cells by distance-discounted
//!    score and applies hysteresis against the agent's current target.
//!
//! Fields only borrow the terrain and memory, so fills for different agents
//! are independent of each other.
mod selector;
mod value_field;

pub use selector::{Candidate, Target, TargetSelector, rank_candidates};
pub use value_field::ValueField;
