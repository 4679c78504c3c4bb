//! Fatal error conditions
//!
//! Everything here ends the process with exit code 1. Lost balls, destroyed
//! bricks and expiring drops are game state, not errors.

use std::collections::TryReserveError;

use thiserror::Error;

/// Crate result alias
pub type Result<T> = std::result::Result<T, GameError>;

#[derive(Debug, Error)]
pub enum GameError {
    /// The terminal cannot hold the play field
    #[error(
        "terminal size is too small: got {cols}x{rows}, the required size is {required_cols}x{required_rows}"
    )]
    TerminalTooSmall {
        cols: u16,
        rows: u16,
        required_cols: u16,
        required_rows: u16,
    },

    /// Growing the ball collection failed
    #[error("could not allocate ball: {0}")]
    Allocation(#[from] TryReserveError),

    /// Terminal or stdout failure
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
}
