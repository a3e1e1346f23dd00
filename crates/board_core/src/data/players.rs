//! Player pool CSV loading

use std::path::Path;

use serde::{Deserialize, Deserializer};

use super::DataError;
use crate::models::Role;

/// Priority assigned when a record carries none.
pub const DEFAULT_PRIORITY: i32 = 1000;

/// One row of the player dataset.
///
/// The reader accepts both the original eight-column layout and the
/// extended layout that appends `priority`, `role` and `originalPosition`.
/// Numeric fields parse leniently; a garbled shirt number or priority
/// keeps the row and falls back to a default instead of dropping it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerRecord {
    pub id: String,
    pub name: String,
    /// Position label as delivered, either spelled out or a role code.
    pub position: String,
    #[serde(deserialize_with = "lenient_u32")]
    pub shirt_number: Option<u32>,
    pub date_of_birth: String,
    pub nationality: String,
    pub team_id: String,
    pub team_name: String,
    #[serde(deserialize_with = "lenient_i32")]
    pub priority: Option<i32>,
    /// Pre-mapped role code, present only in the extended layout.
    pub role: String,
    pub original_position: String,
}

impl PlayerRecord {
    /// Role of this record, favoring the pre-mapped `role` column and
    /// otherwise mapping the raw position label.
    pub fn resolved_role(&self) -> Role {
        if self.role.trim().is_empty() {
            Role::from_label(&self.position)
        } else {
            Role::from_label(&self.role)
        }
    }

    /// Shirt number forced into 1..=99, defaulting to 1.
    pub fn shirt_or_default(&self) -> u8 {
        self.shirt_number
            .and_then(|n| u8::try_from(n).ok())
            .filter(|n| (1..=99).contains(n))
            .unwrap_or(1)
    }

    /// Selection priority, lower is better.
    pub fn priority_or_default(&self) -> i32 {
        self.priority.unwrap_or(DEFAULT_PRIORITY)
    }
}

fn lenient_u32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().parse().ok())
}

fn lenient_i32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i32>, D::Error> {
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().parse().ok())
}

/// Read the player dataset, dropping rows that lack a name, position or
/// team id and rows that do not parse at all.
pub fn read_player_pool(path: &Path) -> Result<Vec<PlayerRecord>, DataError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut pool = Vec::new();
    let mut skipped = 0usize;
    for (row, result) in reader.deserialize::<PlayerRecord>().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(err) => {
                skipped += 1;
                log::warn!("skipping player row {}: {}", row + 2, err);
                continue;
            }
        };
        if record.name.is_empty() || record.position.is_empty() || record.team_id.is_empty() {
            skipped += 1;
            continue;
        }
        pool.push(record);
    }

    log::info!(
        "loaded {} player records from {} ({} skipped)",
        pool.len(),
        path.display(),
        skipped
    );
    Ok(pool)
}
