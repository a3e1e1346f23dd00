//! Team aggregate and the small enums describing board-wide modes

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::player::Player;
use crate::formation::FormationSet;

/// Key of the formation set every team starts with.
pub const DEFAULT_FORMATION_KEY: &str = "default";

/// Which half of the board a team occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Home,
    Away,
}

impl Side {
    pub fn opposite(&self) -> Side {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }

    /// Lowercase tag used in player ids and serialized documents.
    pub fn label(&self) -> &'static str {
        match self {
            Side::Home => "home",
            Side::Away => "away",
        }
    }
}

/// Tactical phase a team is displayed in. Phases beyond `Basic` reuse the
/// basic arrangement unless a formation set provides a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Basic,
    Attack,
    Defense,
}

/// What the player tokens render inside their circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Number,
    Initial,
}

/// One team's full board state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    /// Serialized as `id` to keep documents readable as plain team tags.
    #[serde(rename = "id")]
    pub side: Side,
    pub name: String,
    pub players: Vec<Player>,
    pub formations: HashMap<String, FormationSet>,
    pub current_formation: String,
    pub current_phase: Phase,
}

impl Team {
    pub fn new(side: Side, name: impl Into<String>, players: Vec<Player>, default_set: FormationSet) -> Self {
        let mut formations = HashMap::new();
        formations.insert(DEFAULT_FORMATION_KEY.to_string(), default_set);
        Self {
            side,
            name: name.into(),
            players,
            formations,
            current_formation: DEFAULT_FORMATION_KEY.to_string(),
            current_phase: Phase::default(),
        }
    }

    pub fn player(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn player_mut(&mut self, id: &str) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    pub fn contains_player(&self, id: &str) -> bool {
        self.players.iter().any(|p| p.id == id)
    }

    /// Shirt numbers worn by more than one player, ascending.
    pub fn duplicate_numbers(&self) -> Vec<u8> {
        let mut counts: HashMap<u8, u32> = HashMap::new();
        for p in &self.players {
            *counts.entry(p.number).or_insert(0) += 1;
        }
        let mut dupes: Vec<u8> = counts
            .into_iter()
            .filter(|(_, n)| *n > 1)
            .map(|(number, _)| number)
            .collect();
        dupes.sort_unstable();
        dupes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formation::Formation;
    use crate::models::Role;
    use crate::pitch::Point;

    fn player(id: &str, number: u8) -> Player {
        Player {
            id: id.to_string(),
            name: format!("Player {number}"),
            number,
            position: Point::new(400.0, 400.0),
            role: Role::MF,
            side: Side::Home,
        }
    }

    fn sample_team() -> Team {
        let formation = Formation {
            id: "4-4-2".to_string(),
            name: "4-4-2".to_string(),
            description: None,
            positions: vec![Point::new(400.0, 560.0)],
        };
        Team::new(
            Side::Home,
            "Home Team",
            vec![player("home-0", 1), player("home-1", 7)],
            FormationSet::basic_only(formation),
        )
    }

    #[test]
    fn sides_serialize_lowercase_and_flip() {
        assert_eq!(serde_json::to_string(&Side::Away).unwrap(), "\"away\"");
        assert_eq!(Side::Home.opposite(), Side::Away);
        assert_eq!(Side::Away.opposite().label(), "home");
    }

    #[test]
    fn new_team_starts_on_the_default_set_in_basic_phase() {
        let team = sample_team();
        assert_eq!(team.current_formation, DEFAULT_FORMATION_KEY);
        assert_eq!(team.current_phase, Phase::Basic);
        assert!(team.formations.contains_key(DEFAULT_FORMATION_KEY));
    }

    #[test]
    fn team_json_keeps_the_side_under_the_id_key() {
        let json = serde_json::to_value(sample_team()).unwrap();
        assert_eq!(json["id"], "home");
        assert_eq!(json["currentFormation"], "default");
        assert_eq!(json["currentPhase"], "basic");
    }

    #[test]
    fn duplicate_numbers_reports_each_repeated_number_once() {
        let mut team = sample_team();
        team.players.push(player("home-2", 7));
        team.players.push(player("home-3", 7));
        team.players.push(player("home-4", 1));
        assert_eq!(team.duplicate_numbers(), vec![1, 7]);
    }

    #[test]
    fn player_lookup_finds_by_id() {
        let mut team = sample_team();
        assert!(team.contains_player("home-1"));
        assert!(team.player("away-0").is_none());
        if let Some(p) = team.player_mut("home-0") {
            p.number = 13;
        }
        assert_eq!(team.player("home-0").map(|p| p.number), Some(13));
    }
}
