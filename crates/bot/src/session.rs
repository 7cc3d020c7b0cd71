//! The turn loop tying the protocol to the planner.
use std::io::{BufRead, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use pursuit_core::TurnEngine;

use crate::config::BotConfig;
use crate::protocol::{ProtocolReader, format_commands};

/// Totals reported when the input ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub turns: u32,
    pub slow_turns: u32,
}

/// Plays a whole game: one layout block, then turns until end of input.
///
/// Every turn produces exactly one flushed output line, except turns with no
/// living friendly agent, which produce nothing.
pub fn run<R, W>(input: R, mut output: W, config: &BotConfig) -> Result<SessionSummary>
where
    R: BufRead,
    W: Write,
{
    let mut reader = ProtocolReader::new(input);
    let terrain = reader.read_layout().context("failed to read layout")?;
    let dimensions = terrain.dimensions();
    tracing::info!(
        "Layout {}x{} with {} floor cells",
        dimensions.width,
        dimensions.height,
        terrain.floor_count()
    );

    let mut engine = TurnEngine::new(terrain, config.planner);
    let mut summary = SessionSummary::default();

    while let Some(snapshot) = reader.read_turn()? {
        let started = Instant::now();
        summary.turns += 1;

        snapshot
            .validate(engine.terrain())
            .with_context(|| format!("invalid observation on turn {}", summary.turns))?;

        let commands = engine.play_turn(&snapshot);
        if !commands.is_empty() {
            writeln!(output, "{}", format_commands(&commands))?;
            output.flush()?;
        }

        let elapsed = started.elapsed();
        if elapsed > config.turn_budget {
            summary.slow_turns += 1;
            tracing::warn!(
                "turn {} took {:?} (budget {:?})",
                summary.turns,
                elapsed,
                config.turn_budget
            );
        } else {
            tracing::debug!("turn {} took {:?}", summary.turns, elapsed);
        }
    }

    tracing::info!(
        "Input closed after {} turn(s), {} over budget",
        summary.turns,
        summary.slow_turns
    );
    Ok(summary)
}
