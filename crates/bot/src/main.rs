//! `pursuit` binary.
//!
//! Speaks the arena protocol on stdin/stdout; logs go to stderr.
//!
//! ```bash
//! RUST_LOG=pursuit_core=debug pursuit < game.txt
//! ```

use anyhow::Result;
use pursuit_bot::{BotConfig, logging, session};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = BotConfig::from_env()?;
    logging::setup_logging(config.log_dir.as_deref())?;

    tracing::info!("Starting pursuit bot");
    tracing::info!(
        "Planner: distance_discount={}, retarget_margin={}, step_cost={}",
        config.planner.distance_discount,
        config.planner.retarget_margin,
        config.planner.step_cost
    );

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    session::run(stdin, stdout, &config)?;

    tracing::info!("Bot shutdown complete");
    Ok(())
}
