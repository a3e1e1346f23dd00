//! Central board state
//!
//! `TacticsBoard` owns both teams, the formation catalog, club metadata
//! and the transient highlight. It is a plain value with no global
//! instance; embedders construct one per board and decide how to share
//! it. All player-addressed operations route by looking the id up in
//! both rosters, never by parsing the id string.

use std::time::Instant;

use chrono::Utc;

use crate::error::{BoardError, Result};
use crate::formation::{self, FormationCatalog, FormationSet};
use crate::models::{ClubRecord, DisplayMode, Phase, Player, Role, Side, Team};
use crate::mutation::{self, Highlight, NumberingPolicy, PlayerEdit};
use crate::pitch::{PitchGeometry, Point};
use crate::save::SaveDocument;

const DEFAULT_HOME_NAME: &str = "Home Team";
const DEFAULT_AWAY_NAME: &str = "Away Team";

#[derive(Debug)]
pub struct TacticsBoard {
    geometry: PitchGeometry,
    home: Team,
    away: Team,
    catalog: FormationCatalog,
    home_formation_id: String,
    away_formation_id: String,
    home_club: Option<ClubRecord>,
    away_club: Option<ClubRecord>,
    display_mode: DisplayMode,
    highlight: Highlight,
}

impl Default for TacticsBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl TacticsBoard {
    /// A fresh board on the default pitch: both teams in the default
    /// preset, facing each other.
    pub fn new() -> Self {
        Self::with_geometry(PitchGeometry::default())
    }

    pub fn with_geometry(geometry: PitchGeometry) -> Self {
        let preset = &FormationCatalog::presets()[0];
        let default_id = FormationCatalog::default_formation_id().to_string();
        Self {
            geometry,
            home: default_team(Side::Home, DEFAULT_HOME_NAME, preset, &geometry),
            away: default_team(Side::Away, DEFAULT_AWAY_NAME, preset, &geometry),
            catalog: FormationCatalog::new(),
            home_formation_id: default_id.clone(),
            away_formation_id: default_id,
            home_club: None,
            away_club: None,
            display_mode: DisplayMode::default(),
            highlight: Highlight::new(),
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn geometry(&self) -> &PitchGeometry {
        &self.geometry
    }

    pub fn home(&self) -> &Team {
        &self.home
    }

    pub fn away(&self) -> &Team {
        &self.away
    }

    pub fn team(&self, side: Side) -> &Team {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    pub fn catalog(&self) -> &FormationCatalog {
        &self.catalog
    }

    pub fn selected_formation_id(&self, side: Side) -> &str {
        match side {
            Side::Home => &self.home_formation_id,
            Side::Away => &self.away_formation_id,
        }
    }

    pub fn club(&self, side: Side) -> Option<&ClubRecord> {
        match side {
            Side::Home => self.home_club.as_ref(),
            Side::Away => self.away_club.as_ref(),
        }
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    /// Which board half holds the player with this id.
    pub fn side_of(&self, player_id: &str) -> Option<Side> {
        if self.home.contains_player(player_id) {
            Some(Side::Home)
        } else if self.away.contains_player(player_id) {
            Some(Side::Away)
        } else {
            None
        }
    }

    fn team_mut(&mut self, side: Side) -> &mut Team {
        match side {
            Side::Home => &mut self.home,
            Side::Away => &mut self.away,
        }
    }

    // ========================================================================
    // Team setup
    // ========================================================================

    /// Attach (or detach) club metadata to a side. Attaching also renames
    /// the team after the club.
    pub fn select_club(&mut self, side: Side, club: Option<ClubRecord>) {
        if let Some(club) = &club {
            let name = if club.short_name.is_empty() {
                club.name.clone()
            } else {
                club.short_name.clone()
            };
            log::info!("{} side is now {}", side.label(), name);
            self.team_mut(side).name = name;
        }
        match side {
            Side::Home => self.home_club = club,
            Side::Away => self.away_club = club,
        }
    }

    pub fn rename_team(&mut self, side: Side, name: impl Into<String>) {
        self.team_mut(side).name = name.into();
    }

    /// Replace a side's roster wholesale. Duplicate shirt numbers are
    /// accepted here and only logged; automatic renumbering is the repair
    /// path.
    pub fn load_players(&mut self, side: Side, players: Vec<Player>) {
        let team = self.team_mut(side);
        team.players = players;
        let dupes = team.duplicate_numbers();
        if !dupes.is_empty() {
            log::warn!(
                "{} roster loaded with duplicate shirt numbers {:?}",
                side.label(),
                dupes
            );
        }
    }

    pub fn set_phase(&mut self, side: Side, phase: Phase) {
        self.team_mut(side).current_phase = phase;
    }

    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        self.display_mode = mode;
    }

    // ========================================================================
    // Formations
    // ========================================================================

    /// Select and apply a formation to one side. An id that resolves to
    /// nothing leaves both the selection and the players untouched.
    pub fn apply_formation(&mut self, side: Side, formation_id: &str) {
        let Some(found) = self.catalog.get(formation_id) else {
            log::warn!("formation {formation_id} not found, selection unchanged");
            return;
        };
        let found = found.clone();
        let geometry = self.geometry;
        formation::apply_formation(self.team_mut(side), &found, &geometry);
        match side {
            Side::Home => self.home_formation_id = formation_id.to_string(),
            Side::Away => self.away_formation_id = formation_id.to_string(),
        }
        log::info!("applied formation {} to {}", found.name, side.label());
    }

    /// Capture a side's current arrangement as a custom formation and
    /// return its id. Away arrangements are stored in home orientation.
    pub fn capture_custom_formation(
        &mut self,
        side: Side,
        name: &str,
        description: Option<&str>,
    ) -> Option<String> {
        let template = formation::current_template_positions(self.team(side), &self.geometry);
        self.catalog.add_custom(name, description, template)
    }

    /// Delete a custom formation. A side whose selection pointed at it
    /// falls back to the default preset; player positions stay put.
    pub fn remove_custom_formation(&mut self, formation_id: &str) {
        if !self.catalog.remove_custom(formation_id) {
            return;
        }
        let default_id = FormationCatalog::default_formation_id();
        if self.home_formation_id == formation_id {
            self.home_formation_id = default_id.to_string();
        }
        if self.away_formation_id == formation_id {
            self.away_formation_id = default_id.to_string();
        }
        log::info!("removed custom formation {formation_id}");
    }

    // ========================================================================
    // Player mutations
    // ========================================================================

    /// Move a player to a canvas position, clamped into the band of the
    /// half the player currently stands on. Unknown ids are ignored so a
    /// drag that outlives a roster change cannot corrupt anything.
    pub fn drag_player(&mut self, player_id: &str, target: Point) {
        let geometry = self.geometry;
        let Some(side) = self.side_of(player_id) else {
            log::debug!("drag ignored, no player {player_id}");
            return;
        };
        if let Some(player) = self.team_mut(side).player_mut(player_id) {
            player.position = geometry.clamp_to_side(side, target);
        }
    }

    /// Edit a player's attributes, rejecting shirt number conflicts
    /// within the same team.
    pub fn update_player(&mut self, player_id: &str, edit: &PlayerEdit) -> Result<()> {
        match self.side_of(player_id) {
            Some(side) => mutation::apply_edit(self.team_mut(side), player_id, edit),
            None => Err(BoardError::PlayerNotFound {
                id: player_id.to_string(),
            }),
        }
    }

    /// Renumber one side's whole roster.
    pub fn auto_number(&mut self, side: Side, policy: NumberingPolicy) {
        mutation::apply_numbering(self.team_mut(side), policy);
    }

    // ========================================================================
    // Highlight
    // ========================================================================

    /// Highlight a player until the expiry deadline passes. Ids that are
    /// not on the board are ignored.
    pub fn focus_player(&mut self, player_id: &str, now: Instant) {
        if self.side_of(player_id).is_none() {
            log::debug!("highlight ignored, no player {player_id}");
            return;
        }
        self.highlight.focus(player_id, now);
    }

    pub fn clear_highlight(&mut self) {
        self.highlight.clear();
    }

    /// Advance time-based state; call once per frame or timer tick.
    pub fn tick(&mut self, now: Instant) {
        self.highlight.tick(now);
    }

    pub fn highlighted(&self) -> Option<&str> {
        self.highlight.active()
    }

    // ========================================================================
    // Swap
    // ========================================================================

    /// Exchange the two teams. Rosters, names, formation sets, phases and
    /// club metadata all cross over; ids, side tags and positions are
    /// rewritten for the new half. Formation selections stay with their
    /// side of the board.
    pub fn swap_sides(&mut self) {
        std::mem::swap(&mut self.home, &mut self.away);
        std::mem::swap(&mut self.home_club, &mut self.away_club);
        let geometry = self.geometry;
        reside(&mut self.home, Side::Home, &geometry);
        reside(&mut self.away, Side::Away, &geometry);
        self.highlight.clear();
        log::info!("swapped home and away");
    }

    // ========================================================================
    // Documents
    // ========================================================================

    /// Snapshot the full board into a serializable document.
    pub fn to_document(&self) -> SaveDocument {
        SaveDocument {
            home_team: self.home.clone(),
            away_team: self.away.clone(),
            display_mode: self.display_mode,
            custom_formations: self.catalog.customs().to_vec(),
            home_selected_formation: self.home_formation_id.clone(),
            away_selected_formation: self.away_formation_id.clone(),
            selected_home_team_metadata: self.home_club.clone(),
            selected_away_team_metadata: self.away_club.clone(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    /// Replace the whole board state from a document. Fields a document
    /// does not carry fall back to defaults; an unrecorded formation
    /// selection becomes the default preset. The highlight never
    /// survives a restore.
    pub fn restore_document(&mut self, doc: SaveDocument) {
        let default_id = FormationCatalog::default_formation_id();
        self.home = doc.home_team;
        self.away = doc.away_team;
        self.display_mode = doc.display_mode;
        self.catalog.set_customs(doc.custom_formations);
        self.home_formation_id = fallback_if_empty(doc.home_selected_formation, default_id);
        self.away_formation_id = fallback_if_empty(doc.away_selected_formation, default_id);
        self.home_club = doc.selected_home_team_metadata;
        self.away_club = doc.selected_away_team_metadata;
        self.highlight.clear();
        log::info!("restored board state");
    }
}

/// Build one default team on the given preset, mirrored for the away half.
fn default_team(side: Side, name: &str, preset: &formation::Formation, geometry: &PitchGeometry) -> Team {
    let players = preset
        .positions
        .iter()
        .enumerate()
        .map(|(slot, base)| Player {
            id: format!("{}-{}", side.label(), slot),
            name: format!("Player {}", slot + 1),
            number: (slot + 1) as u8,
            position: match side {
                Side::Home => *base,
                Side::Away => geometry.mirror_point(*base),
            },
            role: Role::for_slot(slot),
            side,
        })
        .collect();
    Team::new(side, name, players, FormationSet::basic_only(preset.clone()))
}

/// Rewrite a team for the half it just moved to: new ids and side tags,
/// positions mirrored across the halfway line and clamped into the new
/// band.
fn reside(team: &mut Team, new_side: Side, geometry: &PitchGeometry) {
    team.side = new_side;
    for (slot, player) in team.players.iter_mut().enumerate() {
        player.id = format!("{}-{}", new_side.label(), slot);
        player.side = new_side;
        player.position = geometry.clamp_to_side(new_side, geometry.mirror_point(player.position));
    }
}

fn fallback_if_empty(id: String, default_id: &str) -> String {
    if id.is_empty() {
        default_id.to_string()
    } else {
        id
    }
}
