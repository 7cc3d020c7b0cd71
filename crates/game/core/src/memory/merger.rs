//! Folds one turn's visible truth into the persistent memory.

use super::{
    CellContent, MemoryField, NEUTRAL_BASELINE, OCCUPANCY_PENALTY, item_value, line_of_sight,
};
use crate::env::TerrainGrid;
use crate::state::{Team, TurnSnapshot};

/// Counts reported by a merge, for logging.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MergeSummary {
    pub items: usize,
    pub occupied: usize,
    pub cleared: usize,
}

impl MemoryField {
    /// Reconciles `snapshot` into memory. Runs once per turn, before scoring.
    ///
    /// Order matters: items are written before agents so a cell reported with
    /// both ends up holding the occupancy penalty (the item was just eaten),
    /// and sight lines only clear cells nothing else claimed this turn.
    /// Values of cells no friendly agent sees are left as they were, including
    /// the penalty of an agent that has since moved out of sight. Wall cells
    /// are never written.
    ///
    /// Merging the same snapshot twice leaves memory unchanged.
    pub fn merge(&mut self, terrain: &TerrainGrid, snapshot: &TurnSnapshot) -> MergeSummary {
        let mut summary = MergeSummary::default();
        let dimensions = terrain.dimensions();

        for cell in dimensions.cells() {
            let content = self.contents.get_mut(cell);
            if *content != CellContent::Wall {
                *content = CellContent::Empty;
            }
        }

        for item in &snapshot.items {
            if self.content(item.cell) == CellContent::Wall {
                continue;
            }
            self.values.set(item.cell, item_value(item.tier));
            self.contents.set(item.cell, CellContent::Item(item.tier));
            summary.items += 1;
        }

        for agent in snapshot.agents.iter().filter(|a| !a.is_eliminated()) {
            if self.content(agent.cell) == CellContent::Wall {
                continue;
            }
            let content = match agent.team {
                Team::Friendly => CellContent::Friendly,
                Team::Enemy => CellContent::Enemy,
            };
            self.values.set(agent.cell, OCCUPANCY_PENALTY);
            self.contents.set(agent.cell, content);
            summary.occupied += 1;
        }

        for agent in snapshot
            .friendly()
            .filter(|agent| !agent.is_eliminated())
        {
            for cell in line_of_sight(terrain, agent.cell) {
                if self.content(cell) == CellContent::Empty {
                    if self.value(cell) != NEUTRAL_BASELINE {
                        summary.cleared += 1;
                    }
                    self.values.set(cell, NEUTRAL_BASELINE);
                }
            }
        }

        tracing::trace!(
            items = summary.items,
            occupied = summary.occupied,
            cleared = summary.cleared,
            "memory merged"
        );

        summary
    }
}
