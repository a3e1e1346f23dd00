//! Bundled fallback data
//!
//! Used whenever the API is unavailable: a fixed Premier League club list
//! and synthetic eleven-man squads in a 1-4-3-3 split.

use chrono::NaiveDate;

use board_core::Role;

use crate::{derive_priority, PlayerRow, TeamRow};

/// (id, name, short name, tla, colors, venue)
const FALLBACK_CLUBS: &[(&str, &str, &str, &str, &str, &str)] = &[
    ("57", "Arsenal FC", "Arsenal", "ARS", "Red / White", "Emirates Stadium"),
    ("58", "Aston Villa FC", "Aston Villa", "AVL", "Claret / Sky Blue", "Villa Park"),
    ("61", "Chelsea FC", "Chelsea", "CHE", "Royal Blue / White", "Stamford Bridge"),
    ("62", "Everton FC", "Everton", "EVE", "Blue / White", "Goodison Park"),
    ("64", "Liverpool FC", "Liverpool", "LIV", "Red / White", "Anfield"),
    ("65", "Manchester City FC", "Man City", "MCI", "Sky Blue / White", "Etihad Stadium"),
    ("66", "Manchester United FC", "Man United", "MUN", "Red / White / Black", "Old Trafford"),
    ("73", "Tottenham Hotspur FC", "Tottenham", "TOT", "White / Navy Blue", "Tottenham Hotspur Stadium"),
    ("76", "Wolverhampton Wanderers FC", "Wolverhampton", "WOL", "Gold / Black", "Molineux Stadium"),
    ("328", "Burnley FC", "Burnley", "BUR", "Claret / Sky Blue", "Turf Moor"),
    ("346", "Watford FC", "Watford", "WAT", "Yellow / Black", "Vicarage Road"),
    ("351", "Nottingham Forest FC", "Nottingham", "NFO", "Red / White", "The City Ground"),
    ("354", "Crystal Palace FC", "Crystal Palace", "CRY", "Red / Blue", "Selhurst Park"),
    ("355", "Southampton FC", "Southampton", "SOU", "Red / White", "St. Mary's Stadium"),
    ("356", "Sheffield United FC", "Sheffield Utd", "SHU", "Red / White / Black", "Bramall Lane"),
    ("397", "Brighton & Hove Albion FC", "Brighton Hove", "BHA", "Blue / White", "Falmer Stadium"),
    ("402", "Brentford FC", "Brentford", "BRE", "Red / White / Black", "Brentford Community Stadium"),
    ("563", "West Ham United FC", "West Ham", "WHU", "Claret / Blue", "London Stadium"),
    ("715", "Leicester City FC", "Leicester City", "LEI", "Blue / White", "King Power Stadium"),
    ("1044", "Fulham FC", "Fulham", "FUL", "White / Black", "Craven Cottage"),
];

/// Synthetic squads cover one keeper, four defenders, three midfielders
/// and three forwards, matching the lineup quotas.
const SYNTHETIC_ROLES: [Role; 11] = [
    Role::GK,
    Role::DF,
    Role::DF,
    Role::DF,
    Role::DF,
    Role::MF,
    Role::MF,
    Role::MF,
    Role::FW,
    Role::FW,
    Role::FW,
];

/// The bundled club list as CSV rows.
pub fn fallback_clubs() -> Vec<TeamRow> {
    FALLBACK_CLUBS
        .iter()
        .map(|(id, name, short_name, tla, colors, venue)| TeamRow {
            id: id.to_string(),
            name: name.to_string(),
            short_name: short_name.to_string(),
            tla: tla.to_string(),
            crest: String::new(),
            address: String::new(),
            website: String::new(),
            founded: String::new(),
            club_colors: colors.to_string(),
            venue: venue.to_string(),
        })
        .collect()
}

/// A generic eleven-man squad for one club. Shirt numbers run 1..=11 in
/// slot order, so the derived priorities favor them as starters.
pub fn synthetic_squad(team_id: &str, team_name: &str, today: NaiveDate) -> Vec<PlayerRow> {
    SYNTHETIC_ROLES
        .iter()
        .enumerate()
        .map(|(slot, role)| {
            let shirt = (slot + 1) as u32;
            PlayerRow {
                id: format!("{}-{}", team_id, slot + 1),
                name: format!("Player {}", slot + 1),
                position: role.code().to_string(),
                shirt_number: shirt.to_string(),
                date_of_birth: String::new(),
                nationality: String::new(),
                team_id: team_id.to_string(),
                team_name: team_name.to_string(),
                priority: derive_priority(*role, Some(shirt), None, today),
                role: role.code().to_string(),
                original_position: role.code().to_string(),
            }
        })
        .collect()
}
