//! CSV readers for the club and player datasets

mod clubs;
mod players;

pub use clubs::read_clubs;
pub use players::{read_player_pool, PlayerRecord};

use thiserror::Error;

/// Errors raised while loading external datasets.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
