//! Error types for the game binary and library.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    /// Terminal I/O failed (raw mode, alternate screen, writes, event reads).
    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),

    /// The terminal cannot fit even a minimal playfield.
    #[error("terminal too small: {cols}x{rows} (need at least {min_cols}x{min_rows})")]
    TerminalTooSmall {
        cols: u16,
        rows: u16,
        min_cols: u16,
        min_rows: u16,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, GameError>;
