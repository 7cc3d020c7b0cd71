//! Arena line protocol.
//!
//! The layout block arrives once:
//!
//! ```text
//! <width> <height>
//! <row>                     (× height, '#' wall, ' ' floor)
//! ```
//!
//! followed by one block per turn:
//!
//! ```text
//! <my_score> <opponent_score>
//! <visible_agent_count>
//! <id> <mine> <x> <y> <type> <speed_turns_left> <ability_cooldown>
//! <visible_item_count>
//! <x> <y> <value>
//! ```
//!
//! Replies are a single line of `MOVE <id> <x> <y>` commands joined by `|`.
use std::io::BufRead;
use std::str::FromStr;

use pursuit_core::{
    AgentId, AgentKind, AgentObservation, Cell, ItemObservation, ItemTier, MapDimensions,
    MapError, MoveCommand, Team, TerrainGrid, TurnSnapshot,
};

#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: unexpected end of input, expected {expected}")]
    UnexpectedEof { line: usize, expected: &'static str },

    #[error("line {line}: expected {expected} fields, found {actual}")]
    FieldCount {
        line: usize,
        expected: usize,
        actual: usize,
    },

    #[error("line {line}: invalid {field} {value:?}")]
    InvalidField {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("line {line}: invalid layout: {source}")]
    Layout {
        line: usize,
        #[source]
        source: MapError,
    },
}

/// Reads protocol blocks from a line source, tracking line numbers for errors.
pub struct ProtocolReader<R> {
    reader: R,
    line: usize,
    buffer: String,
}

impl<R: BufRead> ProtocolReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            buffer: String::new(),
        }
    }

    /// Number of lines consumed so far.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Reads the layout block sent before the first turn.
    pub fn read_layout(&mut self) -> Result<TerrainGrid, ProtocolError> {
        let header = self.expect_line("layout header")?;
        let [width, height] = self.fields(&header)?;
        let width: u32 = self.parse("width", width)?;
        let height: u32 = self.parse("height", height)?;

        let first_row = self.line + 1;
        let mut rows = Vec::new();
        for _ in 0..height {
            rows.push(self.expect_line("layout row")?);
        }

        TerrainGrid::from_rows(MapDimensions::new(width, height), &rows).map_err(|source| {
            let line = match &source {
                MapError::RowWidthMismatch { row, .. } | MapError::UnknownGlyph { y: row, .. } => {
                    first_row + *row
                }
                _ => first_row.saturating_sub(1),
            };
            ProtocolError::Layout { line, source }
        })
    }

    /// Reads one turn block. `Ok(None)` means the input ended cleanly.
    pub fn read_turn(&mut self) -> Result<Option<TurnSnapshot>, ProtocolError> {
        let Some(header) = self.next_line()? else {
            return Ok(None);
        };
        let [my_score, opponent_score] = self.fields(&header)?;
        let my_score: u32 = self.parse("score", my_score)?;
        let opponent_score: u32 = self.parse("score", opponent_score)?;

        let count = self.read_count("agent count")?;
        let mut agents = Vec::new();
        for _ in 0..count {
            let row = self.expect_line("agent row")?;
            agents.push(self.parse_agent(&row)?);
        }

        let count = self.read_count("item count")?;
        let mut items = Vec::new();
        for _ in 0..count {
            let row = self.expect_line("item row")?;
            items.push(self.parse_item(&row)?);
        }

        Ok(Some(
            TurnSnapshot::new(agents, items).with_scores(my_score, opponent_score),
        ))
    }

    fn parse_agent(&self, row: &str) -> Result<AgentObservation, ProtocolError> {
        let [id, mine, x, y, kind, speed, cooldown] = self.fields(row)?;
        let team = match mine {
            "1" => Team::Friendly,
            "0" => Team::Enemy,
            other => return Err(self.invalid("ownership flag", other)),
        };
        let kind: AgentKind = self.parse("agent type", kind)?;

        Ok(AgentObservation::new(
            AgentId(self.parse("agent id", id)?),
            team,
            Cell::new(self.parse("x", x)?, self.parse("y", y)?),
        )
        .with_kind(kind)
        .with_timers(
            self.parse("speed turns", speed)?,
            self.parse("ability cooldown", cooldown)?,
        ))
    }

    fn parse_item(&self, row: &str) -> Result<ItemObservation, ProtocolError> {
        let [x, y, value] = self.fields(row)?;
        let points: u32 = self.parse("item value", value)?;
        Ok(ItemObservation::new(
            Cell::new(self.parse("x", x)?, self.parse("y", y)?),
            ItemTier::from_points(points),
        ))
    }

    fn read_count(&mut self, what: &'static str) -> Result<usize, ProtocolError> {
        let line = self.expect_line(what)?;
        self.parse(what, line.trim())
    }

    fn next_line(&mut self) -> Result<Option<String>, ProtocolError> {
        self.buffer.clear();
        if self.reader.read_line(&mut self.buffer)? == 0 {
            return Ok(None);
        }
        self.line += 1;
        let line = self.buffer.trim_end_matches(['\n', '\r']);
        Ok(Some(line.to_owned()))
    }

    fn expect_line(&mut self, expected: &'static str) -> Result<String, ProtocolError> {
        self.next_line()?.ok_or(ProtocolError::UnexpectedEof {
            line: self.line + 1,
            expected,
        })
    }

    fn fields<'a, const N: usize>(&self, line: &'a str) -> Result<[&'a str; N], ProtocolError> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let actual = fields.len();
        fields.try_into().map_err(|_| ProtocolError::FieldCount {
            line: self.line,
            expected: N,
            actual,
        })
    }

    fn parse<T: FromStr>(&self, field: &'static str, value: &str) -> Result<T, ProtocolError> {
        value.parse().map_err(|_| self.invalid(field, value))
    }

    fn invalid(&self, field: &'static str, value: &str) -> ProtocolError {
        ProtocolError::InvalidField {
            line: self.line,
            field,
            value: value.to_owned(),
        }
    }
}

/// Formats one turn's reply line (without the trailing newline).
pub fn format_commands(commands: &[MoveCommand]) -> String {
    commands
        .iter()
        .map(|command| {
            format!(
                "MOVE {} {} {}",
                command.agent.0, command.target.x, command.target.y
            )
        })
        .collect::<Vec<_>>()
        .join("|")
}
