//! Per-turn orchestration.
//!
//! The [`TurnEngine`] owns everything that persists across turns (terrain,
//! memory, roster, retained targets) and turns each snapshot into one
//! [`MoveCommand`] per living friendly agent:
//!
//! 1. roster update (deaths are detected here),
//! 2. memory merge (exclusive access to the memory field),
//! 3. per-agent value field over a shared read-only view of memory,
//! 4. target selection with hysteresis.

use crate::config::PlannerConfig;
use crate::env::TerrainGrid;
use crate::memory::MemoryField;
use crate::planning::{TargetSelector, ValueField};
use crate::state::{AgentId, Cell, Roster, TurnSnapshot};

/// Destination for one agent this turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveCommand {
    pub agent: AgentId,
    pub target: Cell,
}

impl MoveCommand {
    pub const fn new(agent: AgentId, target: Cell) -> Self {
        Self { agent, target }
    }
}

pub struct TurnEngine {
    terrain: TerrainGrid,
    memory: MemoryField,
    roster: Roster,
    selector: TargetSelector,
    config: PlannerConfig,
}

impl TurnEngine {
    pub fn new(terrain: TerrainGrid, config: PlannerConfig) -> Self {
        let memory = MemoryField::new(&terrain);
        Self {
            memory,
            roster: Roster::new(),
            selector: TargetSelector::new(&config),
            terrain,
            config,
        }
    }

    /// Plans one turn. Commands are ordered by ascending agent id; dead agents
    /// get none.
    ///
    /// The snapshot is expected to have passed [`TurnSnapshot::validate`].
    pub fn play_turn(&mut self, snapshot: &TurnSnapshot) -> Vec<MoveCommand> {
        for id in self.roster.update(snapshot) {
            tracing::info!("agent {} eliminated on turn {}", id, self.roster.turn());
            self.selector.forget(id);
        }

        let summary = self.memory.merge(&self.terrain, snapshot);
        tracing::trace!("memory after merge:\n{}", self.memory.render());

        let mut commands = Vec::new();
        for agent in self.roster.living() {
            let field =
                ValueField::build(agent.cell, &self.terrain, &self.memory, self.config.step_cost);
            let target = self.selector.select(agent.id, agent.cell, &field);
            tracing::trace!(
                "agent {} at {} flooded {} cell(s)",
                agent.id,
                agent.cell,
                field.visited_count()
            );
            commands.push(MoveCommand::new(agent.id, target));
        }

        tracing::debug!(
            turn = self.roster.turn(),
            items = summary.items,
            occupied = summary.occupied,
            cleared = summary.cleared,
            commands = commands.len(),
            "turn planned"
        );

        commands
    }

    pub fn terrain(&self) -> &TerrainGrid {
        &self.terrain
    }

    pub fn memory(&self) -> &MemoryField {
        &self.memory
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn selector(&self) -> &TargetSelector {
        &self.selector
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }
}
