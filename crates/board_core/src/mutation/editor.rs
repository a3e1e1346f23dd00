//! Player attribute editing with conflict checks

use crate::error::{BoardError, Result};
use crate::models::{Role, Team};

/// Partial update for a player. Unset fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct PlayerEdit {
    pub name: Option<String>,
    pub number: Option<u8>,
    pub role: Option<Role>,
}

impl PlayerEdit {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn number(number: u8) -> Self {
        Self {
            number: Some(number),
            ..Self::default()
        }
    }

    pub fn role(role: Role) -> Self {
        Self {
            role: Some(role),
            ..Self::default()
        }
    }
}

/// Apply an edit to one player of a team.
///
/// A requested shirt number must lie in 1..=99 and not be worn by any
/// other player on the same team; on conflict nothing is changed.
/// Re-asserting the player's current number is always allowed.
pub fn apply_edit(team: &mut Team, player_id: &str, edit: &PlayerEdit) -> Result<()> {
    if !team.contains_player(player_id) {
        return Err(BoardError::PlayerNotFound {
            id: player_id.to_string(),
        });
    }

    if let Some(number) = edit.number {
        if !(1..=99).contains(&number) {
            return Err(BoardError::NumberOutOfRange { number });
        }
        if let Some(holder) = team
            .players
            .iter()
            .find(|p| p.id != player_id && p.number == number)
        {
            return Err(BoardError::NumberTaken {
                number,
                holder: holder.name.clone(),
            });
        }
    }

    // Checks passed, commit every requested field at once.
    if let Some(player) = team.player_mut(player_id) {
        if let Some(name) = &edit.name {
            player.name = name.clone();
        }
        if let Some(number) = edit.number {
            player.number = number;
        }
        if let Some(role) = edit.role {
            player.role = role;
        }
        log::debug!("updated player {player_id}");
    }
    Ok(())
}
