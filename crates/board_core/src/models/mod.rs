//! Domain model types shared across the board

pub mod club;
pub mod player;
pub mod team;

pub use club::ClubRecord;
pub use player::{Player, Role};
pub use team::{DisplayMode, Phase, Side, Team};
