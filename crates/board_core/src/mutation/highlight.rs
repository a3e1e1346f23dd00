//! Transient player highlight with deadline-based expiry
//!
//! The highlight clears itself a fixed time after it was set. Expiry is
//! driven by `tick`, not by a timer thread, and re-highlighting moves the
//! deadline forward so a pending expiry from an earlier highlight can
//! never clear a newer one.

use std::time::{Duration, Instant};

/// How long a highlight stays visible without being refreshed.
pub const HIGHLIGHT_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Default)]
pub struct Highlight {
    current: Option<(String, Instant)>,
}

impl Highlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Highlight a player until `now + HIGHLIGHT_DURATION`. Replaces any
    /// existing highlight, including one for the same player.
    pub fn focus(&mut self, player_id: impl Into<String>, now: Instant) {
        self.current = Some((player_id.into(), now + HIGHLIGHT_DURATION));
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Drop the highlight once its deadline has passed.
    pub fn tick(&mut self, now: Instant) {
        if let Some((_, deadline)) = &self.current {
            if *deadline <= now {
                self.current = None;
            }
        }
    }

    /// Id of the highlighted player, if any.
    pub fn active(&self) -> Option<&str> {
        self.current.as_ref().map(|(id, _)| id.as_str())
    }
}
