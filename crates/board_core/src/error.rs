//! Error types for board state operations

use thiserror::Error;

/// Errors surfaced while mutating board state
#[derive(Error, Debug)]
pub enum BoardError {
    #[error("player not found: {id}")]
    PlayerNotFound { id: String },

    #[error("shirt number {number} is already worn by {holder}")]
    NumberTaken { number: u8, holder: String },

    #[error("shirt number {number} is outside the allowed range 1-99")]
    NumberOutOfRange { number: u8 },
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, BoardError>;
