//! Commonly used types and utilities for ease of import.

pub use crate::{
    Board, Coordinate, GameSession, GameState, PlayerId, ShotResult, BOARD_SIZE, SHIPS,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, run_game, Console, ScriptedConsole, StdConsole};
