//! Player identity and positional role

use serde::{Deserialize, Serialize};

use super::team::{DisplayMode, Side};
use crate::pitch::Point;

/// Broad positional role of a player.
///
/// Serialized as the two-letter code ("GK", "DF", "MF", "FW").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    GK,
    DF,
    MF,
    FW,
}

impl Role {
    /// All roles in pitch order, goalkeeper first.
    pub fn all() -> [Role; 4] {
        [Role::GK, Role::DF, Role::MF, Role::FW]
    }

    /// Sort rank, goalkeeper lowest.
    pub fn rank(&self) -> u8 {
        match self {
            Role::GK => 1,
            Role::DF => 2,
            Role::MF => 3,
            Role::FW => 4,
        }
    }

    /// Role assigned to a roster slot when building a default lineup:
    /// slot 0 keeps goal, 1-4 defend, 5-7 hold midfield, the rest attack.
    pub fn for_slot(slot: usize) -> Role {
        match slot {
            0 => Role::GK,
            1..=4 => Role::DF,
            5..=7 => Role::MF,
            _ => Role::FW,
        }
    }

    /// Two-letter code.
    pub fn code(&self) -> &'static str {
        match self {
            Role::GK => "GK",
            Role::DF => "DF",
            Role::MF => "MF",
            Role::FW => "FW",
        }
    }

    /// Map a position label to a role. Accepts the two-letter codes as
    /// well as the spelled-out labels found in external squad data.
    /// Unknown labels fall back to midfield.
    pub fn from_label(label: &str) -> Role {
        match label.trim() {
            "GK" | "Goalkeeper" => Role::GK,
            "DF" | "Defence" | "Centre-Back" | "Left-Back" | "Right-Back" => Role::DF,
            "FW" | "Offence" | "Left Winger" | "Right Winger" | "Centre-Forward" => Role::FW,
            _ => Role::MF,
        }
    }
}

/// A single player token on the board.
///
/// The JSON field names match the document layout produced by
/// [`crate::save::SaveDocument`], so a player serializes the same whether
/// it is embedded in a team or inside an exported file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Stable id of the form `home-0` .. `home-10` / `away-0` .. `away-10`.
    pub id: String,
    pub name: String,
    /// Shirt number, kept in 1..=99.
    pub number: u8,
    /// Current canvas position.
    pub position: Point,
    #[serde(rename = "playerPosition")]
    pub role: Role,
    #[serde(rename = "team")]
    pub side: Side,
}

impl Player {
    /// Text shown inside the player token for the given display mode.
    pub fn display_label(&self, mode: DisplayMode) -> String {
        match mode {
            DisplayMode::Number => self.number.to_string(),
            DisplayMode::Initial => initials(&self.name),
        }
    }
}

/// Up to two uppercase initials taken from the first words of a name.
fn initials(name: &str) -> String {
    let picked: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect();
    if picked.is_empty() {
        "?".to_string()
    } else {
        picked.to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_player() -> Player {
        Player {
            id: "home-0".to_string(),
            name: "David Raya".to_string(),
            number: 22,
            position: Point::new(400.0, 560.0),
            role: Role::GK,
            side: Side::Home,
        }
    }

    #[test]
    fn slot_roles_follow_the_default_lineup_shape() {
        let roles: Vec<Role> = (0..11).map(Role::for_slot).collect();
        assert_eq!(roles[0], Role::GK);
        assert!(roles[1..5].iter().all(|r| *r == Role::DF));
        assert!(roles[5..8].iter().all(|r| *r == Role::MF));
        assert!(roles[8..11].iter().all(|r| *r == Role::FW));
    }

    #[test]
    fn labels_map_to_roles_with_midfield_fallback() {
        assert_eq!(Role::from_label("Goalkeeper"), Role::GK);
        assert_eq!(Role::from_label("Centre-Back"), Role::DF);
        assert_eq!(Role::from_label("Attacking Midfield"), Role::MF);
        assert_eq!(Role::from_label("Centre-Forward"), Role::FW);
        assert_eq!(Role::from_label(" FW "), Role::FW);
        assert_eq!(Role::from_label("Sweeper Keeper"), Role::MF);
        assert_eq!(Role::from_label(""), Role::MF);
    }

    #[test]
    fn roles_serialize_as_two_letter_codes() {
        let json = serde_json::to_string(&Role::GK).unwrap();
        assert_eq!(json, "\"GK\"");
        let role: Role = serde_json::from_str("\"FW\"").unwrap();
        assert_eq!(role, Role::FW);
    }

    #[test]
    fn player_json_uses_the_document_field_names() {
        let json = serde_json::to_value(sample_player()).unwrap();
        assert_eq!(json["playerPosition"], "GK");
        assert_eq!(json["team"], "home");
        assert_eq!(json["position"]["x"], 400.0);
    }

    #[test]
    fn display_label_switches_between_number_and_initials() {
        let player = sample_player();
        assert_eq!(player.display_label(DisplayMode::Number), "22");
        assert_eq!(player.display_label(DisplayMode::Initial), "DR");

        let mut nameless = player;
        nameless.name = "  ".to_string();
        assert_eq!(nameless.display_label(DisplayMode::Initial), "?");
    }
}
