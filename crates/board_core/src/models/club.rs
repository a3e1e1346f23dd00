//! Club metadata attached to a board side after team selection

use serde::{Deserialize, Serialize};

/// Descriptive record for a real club, as delivered by the club dataset.
///
/// Every field is kept as text so partially filled rows survive both CSV
/// and JSON round trips. `founded` stays a string for the same reason.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClubRecord {
    pub id: String,
    pub name: String,
    pub short_name: String,
    /// Three letter abbreviation.
    pub tla: String,
    pub crest: String,
    pub address: String,
    pub website: String,
    pub founded: String,
    pub club_colors: String,
    pub venue: String,
}
