//! # board_core - Interactive Soccer Tactics Board
//!
//! State management core for a two-team tactics board. Everything here is
//! plain data and synchronous calls; rendering, input handling and timers
//! live in the embedding application.
//!
//! ## Features
//! - Dual-team board state with side-aware movement limits
//! - Formation presets, user-captured formations and slot-index mapping
//! - Starting lineup selection from CSV club and player datasets
//! - Player editing with shirt number conflict checks and renumbering
//! - Layered persistence: quick save, snapshot history and JSON export

pub mod data;
pub mod error;
pub mod formation;
pub mod models;
pub mod mutation;
pub mod pitch;
pub mod roster;
pub mod save;
pub mod store;

// Core state
pub use store::TacticsBoard;

// Domain types
pub use models::{ClubRecord, DisplayMode, Phase, Player, Role, Side, Team};
pub use pitch::{PitchGeometry, Point, ViewportTransform};

// Formations
pub use formation::{Formation, FormationCatalog, FormationSet};

// Lineups and datasets
pub use data::{read_clubs, read_player_pool, DataError, PlayerRecord};
pub use roster::{select_starting_eleven, LINEUP_SIZE};

// Mutations
pub use mutation::{resolve_drag, Highlight, NumberingPolicy, PlayerEdit};

// Persistence
pub use save::{SaveDocument, SaveError, SaveManager};

// Errors
pub use error::{BoardError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // One full session: pick a club, build a lineup, arrange it, swap,
    // quick save, then resume from disk in a fresh board.
    #[test]
    fn full_session_survives_a_quick_save_cycle() {
        let dir = TempDir::new().unwrap();
        let mut board = TacticsBoard::new();
        let mut manager = SaveManager::new(dir.path());

        let club = ClubRecord {
            id: "57".to_string(),
            name: "Arsenal FC".to_string(),
            short_name: "Arsenal".to_string(),
            tla: "ARS".to_string(),
            ..ClubRecord::default()
        };
        let pool = vec![
            PlayerRecord {
                name: "David Raya".to_string(),
                position: "Goalkeeper".to_string(),
                team_id: "57".to_string(),
                shirt_number: Some(22),
                priority: Some(1),
                ..PlayerRecord::default()
            },
            PlayerRecord {
                name: "Bukayo Saka".to_string(),
                position: "Right Winger".to_string(),
                team_id: "57".to_string(),
                shirt_number: Some(7),
                priority: Some(2),
                ..PlayerRecord::default()
            },
        ];

        board.select_club(Side::Home, Some(club.clone()));
        let geometry = *board.geometry();
        let lineup = select_starting_eleven(&pool, &club, Side::Home, &geometry);
        board.load_players(Side::Home, lineup);
        board.apply_formation(Side::Home, "4-3-3");
        board.swap_sides();

        manager.quick_save(&board.to_document()).unwrap();
        manager.push_snapshot(board.to_document());

        let mut resumed = TacticsBoard::new();
        resumed.restore_document(manager.quick_load().unwrap());

        // The selected club now plays away, keeper leading the roster.
        assert_eq!(resumed.away().name, "Arsenal");
        assert_eq!(resumed.away().players[0].name, "David Raya");
        assert_eq!(resumed.away().players[0].id, "away-0");
        assert!(resumed.away().players.iter().any(|p| p.name == "Bukayo Saka"));
        assert_eq!(resumed.club(Side::Away).map(|c| c.tla.as_str()), Some("ARS"));
        assert_eq!(resumed.home().name, "Home Team");
        assert_eq!(manager.history_len(), 1);
    }
}
