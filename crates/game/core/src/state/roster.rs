//! Agent liveness bookkeeping across turns.
//!
//! Friendly agents are always visible to their own team, so a friendly id that
//! was reported last turn and is missing now has been eliminated. Enemies can
//! simply walk out of sight, so their absence proves nothing and they are only
//! marked dead when the arena reports them with the `Dead` tag.

use std::collections::BTreeMap;

use crate::state::{AgentId, AgentKind, AgentObservation, Cell, Team, TurnSnapshot};

/// Last known facts about one agent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AgentRecord {
    pub id: AgentId,
    pub team: Team,
    pub cell: Cell,
    pub kind: AgentKind,
    pub speed_turns_left: u32,
    pub ability_cooldown: u32,
    pub alive: bool,
    /// Turn index at which this agent was last reported.
    pub last_seen: u32,
}

impl AgentRecord {
    fn observe(observation: &AgentObservation, turn: u32) -> Self {
        Self {
            id: observation.id,
            team: observation.team,
            cell: observation.cell,
            kind: observation.kind,
            speed_turns_left: observation.speed_turns_left,
            ability_cooldown: observation.ability_cooldown,
            alive: !observation.is_eliminated(),
            last_seen: turn,
        }
    }
}

/// Both teams' agents keyed by id; iteration is in ascending id order.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    turn: u32,
    friendly: BTreeMap<AgentId, AgentRecord>,
    enemies: BTreeMap<AgentId, AgentRecord>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of snapshots applied so far.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Applies one turn's snapshot and returns the friendly ids that died this turn.
    ///
    /// Dead agents stay dead: a later report under the same id is ignored.
    pub fn update(&mut self, snapshot: &TurnSnapshot) -> Vec<AgentId> {
        self.turn += 1;
        let turn = self.turn;
        let mut newly_dead = Vec::new();

        for observation in snapshot.friendly() {
            match self.friendly.get_mut(&observation.id) {
                Some(record) if !record.alive => {}
                Some(record) => {
                    *record = AgentRecord::observe(observation, turn);
                    if !record.alive {
                        newly_dead.push(record.id);
                    }
                }
                None => {
                    let record = AgentRecord::observe(observation, turn);
                    if !record.alive {
                        newly_dead.push(record.id);
                    }
                    self.friendly.insert(record.id, record);
                }
            }
        }

        for record in self.friendly.values_mut() {
            if record.alive && record.last_seen != turn {
                record.alive = false;
                newly_dead.push(record.id);
            }
        }

        for observation in snapshot.enemies() {
            let record = self
                .enemies
                .entry(observation.id)
                .or_insert_with(|| AgentRecord::observe(observation, turn));
            if record.alive {
                *record = AgentRecord::observe(observation, turn);
            }
        }

        newly_dead.sort();
        newly_dead
    }

    pub fn friendly(&self, id: AgentId) -> Option<&AgentRecord> {
        self.friendly.get(&id)
    }

    pub fn enemy(&self, id: AgentId) -> Option<&AgentRecord> {
        self.enemies.get(&id)
    }

    pub fn is_alive(&self, id: AgentId) -> bool {
        self.friendly.get(&id).is_some_and(|record| record.alive)
    }

    /// Living friendly agents in ascending id order.
    pub fn living(&self) -> impl Iterator<Item = &AgentRecord> {
        self.friendly.values().filter(|record| record.alive)
    }
}
