//! The serialized board document
//!
//! One flat JSON object captures everything a session needs to resume.
//! Both teams are required; every other field carries a serde default so
//! documents written by older builds, or trimmed by hand, still load.
//! Unknown fields are ignored for the same reason.

use serde::{Deserialize, Serialize};

use crate::formation::Formation;
use crate::models::{ClubRecord, DisplayMode, Team};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveDocument {
    pub home_team: Team,
    pub away_team: Team,
    #[serde(default)]
    pub display_mode: DisplayMode,
    #[serde(default)]
    pub custom_formations: Vec<Formation>,
    /// Selected formation ids; empty strings mean "not recorded" and are
    /// replaced with the default preset on restore.
    #[serde(default)]
    pub home_selected_formation: String,
    #[serde(default)]
    pub away_selected_formation: String,
    #[serde(default)]
    pub selected_home_team_metadata: Option<ClubRecord>,
    #[serde(default)]
    pub selected_away_team_metadata: Option<ClubRecord>,
    /// RFC 3339 creation time, informational only.
    #[serde(default)]
    pub timestamp: String,
}
