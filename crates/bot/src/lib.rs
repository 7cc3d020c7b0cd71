//! Arena driver for the pursuit planner.
//!
//! Reads the layout and per-turn observations from a line protocol, feeds them
//! to [`pursuit_core::TurnEngine`], and writes one command line per turn.
pub mod config;
pub mod logging;
pub mod protocol;
pub mod session;

pub use config::{BotConfig, ConfigError};
pub use protocol::{ProtocolError, ProtocolReader, format_commands};
pub use session::{SessionSummary, run};
