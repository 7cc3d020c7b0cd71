//! Static arena data read once at startup.
//!
//! The terrain is the only fully known truth the planner gets; everything
//! observed per turn lives in [`crate::state`] and [`crate::memory`].
mod map;

pub use map::{MapDimensions, TerrainGrid, TerrainKind};
