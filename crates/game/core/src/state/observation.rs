//! Per-turn observation records.
//!
//! These are the fixed-field shapes the input boundary produces. They are
//! validated once against the layout via [`TurnSnapshot::validate`]; the
//! planner assumes well-formed data afterwards.

use std::collections::HashSet;

use crate::env::{MapDimensions, TerrainGrid};
use crate::error::ObservationError;
use crate::state::{AgentId, Cell};

/// Which side an observed agent plays for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Team {
    Friendly,
    Enemy,
}

/// Form tag reported for each agent.
///
/// The planner does not reason about forms; only `Dead` matters, because the
/// arena keeps reporting eliminated agents under that tag.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum AgentKind {
    #[default]
    Rock,
    Paper,
    Scissors,
    Dead,
}

/// Collectible value tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ItemTier {
    Common,
    Rare,
}

impl ItemTier {
    /// Raw point value at or above which an item counts as rare.
    pub const RARE_THRESHOLD: u32 = 10;

    pub fn from_points(points: u32) -> Self {
        if points >= Self::RARE_THRESHOLD {
            ItemTier::Rare
        } else {
            ItemTier::Common
        }
    }
}

/// One visible agent as reported this turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentObservation {
    pub id: AgentId,
    pub team: Team,
    pub cell: Cell,
    pub kind: AgentKind,
    pub speed_turns_left: u32,
    pub ability_cooldown: u32,
}

impl AgentObservation {
    pub fn new(id: AgentId, team: Team, cell: Cell) -> Self {
        Self {
            id,
            team,
            cell,
            kind: AgentKind::default(),
            speed_turns_left: 0,
            ability_cooldown: 0,
        }
    }

    pub fn friendly(id: u32, cell: Cell) -> Self {
        Self::new(AgentId(id), Team::Friendly, cell)
    }

    pub fn enemy(id: u32, cell: Cell) -> Self {
        Self::new(AgentId(id), Team::Enemy, cell)
    }

    pub fn with_kind(mut self, kind: AgentKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_timers(mut self, speed_turns_left: u32, ability_cooldown: u32) -> Self {
        self.speed_turns_left = speed_turns_left;
        self.ability_cooldown = ability_cooldown;
        self
    }

    pub fn is_friendly(&self) -> bool {
        self.team == Team::Friendly
    }

    /// Eliminated agents are still reported, tagged `Dead`.
    pub fn is_eliminated(&self) -> bool {
        self.kind == AgentKind::Dead
    }
}

/// One visible collectible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemObservation {
    pub cell: Cell,
    pub tier: ItemTier,
}

impl ItemObservation {
    pub fn new(cell: Cell, tier: ItemTier) -> Self {
        Self { cell, tier }
    }

    pub fn common(cell: Cell) -> Self {
        Self::new(cell, ItemTier::Common)
    }

    pub fn rare(cell: Cell) -> Self {
        Self::new(cell, ItemTier::Rare)
    }
}

/// Everything the arena reports for a single turn.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnSnapshot {
    pub my_score: u32,
    pub opponent_score: u32,
    pub agents: Vec<AgentObservation>,
    pub items: Vec<ItemObservation>,
}

impl TurnSnapshot {
    pub fn new(agents: Vec<AgentObservation>, items: Vec<ItemObservation>) -> Self {
        Self {
            my_score: 0,
            opponent_score: 0,
            agents,
            items,
        }
    }

    pub fn with_scores(mut self, my_score: u32, opponent_score: u32) -> Self {
        self.my_score = my_score;
        self.opponent_score = opponent_score;
        self
    }

    pub fn friendly(&self) -> impl Iterator<Item = &AgentObservation> {
        self.agents.iter().filter(|agent| agent.is_friendly())
    }

    pub fn enemies(&self) -> impl Iterator<Item = &AgentObservation> {
        self.agents.iter().filter(|agent| !agent.is_friendly())
    }

    /// Checks that every record fits the layout.
    ///
    /// Agents and items must lie inside the map and off the walls, and ids
    /// must be unique within a team.
    pub fn validate(&self, terrain: &TerrainGrid) -> Result<(), ObservationError> {
        let dimensions: MapDimensions = terrain.dimensions();
        let mut seen = HashSet::new();

        for agent in &self.agents {
            if !dimensions.contains(agent.cell) {
                return Err(ObservationError::AgentOutOfBounds {
                    id: agent.id,
                    cell: agent.cell,
                    dimensions,
                });
            }
            if terrain.is_wall(agent.cell) {
                return Err(ObservationError::AgentInWall {
                    id: agent.id,
                    cell: agent.cell,
                });
            }
            if !seen.insert((agent.team, agent.id)) {
                return Err(ObservationError::DuplicateAgent(agent.id));
            }
        }

        for item in &self.items {
            if !dimensions.contains(item.cell) {
                return Err(ObservationError::ItemOutOfBounds {
                    cell: item.cell,
                    dimensions,
                });
            }
            if terrain.is_wall(item.cell) {
                return Err(ObservationError::ItemInWall(item.cell));
            }
        }

        Ok(())
    }
}
