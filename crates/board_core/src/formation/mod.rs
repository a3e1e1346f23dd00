//! Formation templates and the catalog that manages them
//!
//! A formation stores eleven template positions in home orientation
//! (high-y half of the canvas). The catalog combines the built-in presets
//! with user-captured custom formations; presets are immutable, customs
//! can be added and removed at runtime.

mod mapper;
mod presets;

pub use mapper::{apply_formation, current_template_positions};

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::models::Phase;
use crate::pitch::Point;

/// Id prefix that marks user-captured formations.
pub const CUSTOM_ID_PREFIX: &str = "custom-";

const MAX_NAME_CHARS: usize = 50;
const MAX_DESCRIPTION_CHARS: usize = 200;

/// Eleven template positions with an id and display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Formation {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Slot-ordered positions in home orientation.
    pub positions: Vec<Point>,
}

impl Formation {
    pub fn is_custom(&self) -> bool {
        self.id.starts_with(CUSTOM_ID_PREFIX)
    }
}

/// Per-phase variants of a formation. Only `basic` is required; missing
/// phases fall back to the basic arrangement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormationSet {
    pub basic: Formation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attack: Option<Formation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defense: Option<Formation>,
}

impl FormationSet {
    pub fn basic_only(basic: Formation) -> Self {
        Self {
            basic,
            attack: None,
            defense: None,
        }
    }

    pub fn for_phase(&self, phase: Phase) -> &Formation {
        match phase {
            Phase::Basic => &self.basic,
            Phase::Attack => self.attack.as_ref().unwrap_or(&self.basic),
            Phase::Defense => self.defense.as_ref().unwrap_or(&self.basic),
        }
    }
}

/// Lookup table over presets and custom formations.
///
/// Presets always come first, so a custom formation can never shadow a
/// preset id.
#[derive(Debug, Clone, Default)]
pub struct FormationCatalog {
    customs: Vec<Formation>,
}

impl FormationCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in presets, in display order.
    pub fn presets() -> &'static [Formation] {
        presets::presets()
    }

    /// Id of the preset selected by default and used as a fallback
    /// whenever a selection cannot be resolved.
    pub fn default_formation_id() -> &'static str {
        presets::default_preset_id()
    }

    pub fn customs(&self) -> &[Formation] {
        &self.customs
    }

    /// Replace all custom formations, used when restoring a document.
    pub fn set_customs(&mut self, customs: Vec<Formation>) {
        self.customs = customs;
    }

    /// Presets followed by customs.
    pub fn all(&self) -> impl Iterator<Item = &Formation> {
        Self::presets().iter().chain(self.customs.iter())
    }

    pub fn get(&self, id: &str) -> Option<&Formation> {
        self.all().find(|f| f.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Store the given arrangement as a new custom formation and return
    /// its generated id. Returns `None` when the name is blank.
    pub fn add_custom(
        &mut self,
        name: &str,
        description: Option<&str>,
        positions: Vec<Point>,
    ) -> Option<String> {
        let name = name.trim();
        if name.is_empty() {
            log::warn!("ignoring custom formation with a blank name");
            return None;
        }
        let id = self.custom_id(Utc::now().timestamp_millis());
        let formation = Formation {
            id: id.clone(),
            name: truncate_chars(name, MAX_NAME_CHARS),
            description: description
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(|d| truncate_chars(d, MAX_DESCRIPTION_CHARS)),
            positions,
        };
        log::info!("captured custom formation '{}' as {}", formation.name, id);
        self.customs.push(formation);
        Some(id)
    }

    /// Remove a custom formation. Presets and unknown ids are left alone
    /// and reported as `false`.
    pub fn remove_custom(&mut self, id: &str) -> bool {
        let before = self.customs.len();
        self.customs.retain(|f| f.id != id);
        before != self.customs.len()
    }

    /// Millisecond-timestamp id with a numeric suffix when the same
    /// millisecond already produced one.
    fn custom_id(&self, millis: i64) -> String {
        let base = format!("{CUSTOM_ID_PREFIX}{millis}");
        let mut id = base.clone();
        let mut suffix = 2;
        while self.contains(&id) {
            id = format!("{base}-{suffix}");
            suffix += 1;
        }
        id
    }
}

fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
