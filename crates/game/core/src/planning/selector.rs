//! Destination selection on top of a [`ValueField`].
//!
//! # Desirability
//!
//! ```text
//! desirability = cumulative_score - distance * distance_discount
//! ```
//!
//! Every reachable cell other than the origin is a candidate. Candidates are
//! ranked by desirability, highest first, and ties keep scan order, so the
//! same field always yields the same pick.
//!
//! # Hysteresis
//!
//! Each agent keeps its target (and the desirability it had when adopted)
//! until it stands on it. A new top candidate only replaces a retained target
//! when it beats the recorded desirability by more than `retarget_margin`.

use std::collections::HashMap;

use super::ValueField;
use crate::config::PlannerConfig;
use crate::state::{AgentId, Cell};

/// A ranked destination.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate {
    pub cell: Cell,
    pub score: i32,
    pub distance: u32,
    pub desirability: f64,
}

/// An agent's committed destination.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Target {
    pub cell: Cell,
    /// Desirability at the time the target was adopted.
    pub score: f64,
}

/// Ranks every reachable non-origin cell, best first.
pub fn rank_candidates(field: &ValueField, distance_discount: f64) -> Vec<Candidate> {
    let origin = field.origin();
    let mut candidates: Vec<Candidate> = field
        .reachable()
        .filter(|(cell, _, _)| *cell != origin)
        .map(|(cell, score, distance)| Candidate {
            cell,
            score,
            distance,
            desirability: f64::from(score) - f64::from(distance) * distance_discount,
        })
        .collect();

    // Stable sort: equal desirability keeps scan order.
    candidates.sort_by(|a, b| b.desirability.total_cmp(&a.desirability));
    candidates
}

/// Per-agent target bookkeeping with hysteresis.
#[derive(Clone, Debug)]
pub struct TargetSelector {
    distance_discount: f64,
    retarget_margin: f64,
    targets: HashMap<AgentId, Target>,
}

impl TargetSelector {
    pub fn new(config: &PlannerConfig) -> Self {
        Self {
            distance_discount: config.distance_discount,
            retarget_margin: config.retarget_margin,
            targets: HashMap::new(),
        }
    }

    /// Picks the destination for `agent` standing at `position`.
    ///
    /// Falls back to `position` when nothing else is reachable.
    pub fn select(&mut self, agent: AgentId, position: Cell, field: &ValueField) -> Cell {
        if self
            .targets
            .get(&agent)
            .is_some_and(|target| target.cell == position)
        {
            tracing::debug!("agent {} reached its target {}", agent, position);
            self.targets.remove(&agent);
        }

        let ranked = rank_candidates(field, self.distance_discount);
        let Some(best) = ranked.first() else {
            tracing::debug!("agent {} has no reachable cell, holding {}", agent, position);
            self.targets.remove(&agent);
            return position;
        };

        if let Some(current) = self.targets.get(&agent) {
            let reachable = field.is_reachable(current.cell);
            let improvement = best.desirability - current.score;
            if reachable && improvement <= self.retarget_margin {
                tracing::trace!(
                    "agent {} keeps {} (best {} improves by {:.2})",
                    agent,
                    current.cell,
                    best.cell,
                    improvement
                );
                return current.cell;
            }
        }

        tracing::debug!(
            "agent {} targets {} (score={}, distance={}, desirability={:.2})",
            agent,
            best.cell,
            best.score,
            best.distance,
            best.desirability
        );
        self.targets.insert(
            agent,
            Target {
                cell: best.cell,
                score: best.desirability,
            },
        );
        best.cell
    }

    pub fn target(&self, agent: AgentId) -> Option<&Target> {
        self.targets.get(&agent)
    }

    /// Drops any retained target, e.g. when the agent dies.
    pub fn forget(&mut self, agent: AgentId) {
        self.targets.remove(&agent);
    }
}
