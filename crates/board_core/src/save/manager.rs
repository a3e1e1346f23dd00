//! Durable storage for board documents
//!
//! Three layers with different lifetimes:
//! - quick save: a single JSON file, overwritten in place, survives restarts
//! - snapshot history: a bounded in-memory ring, newest first, lost on exit
//! - export/import: user-visible JSON files at caller-chosen paths
//!
//! All writes go through a temp file in the same directory followed by a
//! rename, so a crash mid-write never leaves a truncated document behind.

use std::collections::VecDeque;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use super::document::SaveDocument;
use super::error::SaveError;

/// Snapshots kept when no explicit capacity is given.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// File name of the quick save slot inside the store directory.
pub const QUICK_SAVE_FILE: &str = "quick_save.json";

const EXPORT_FILE_PREFIX: &str = "soccer-tactical-board";

#[derive(Debug)]
pub struct SaveManager {
    store_dir: PathBuf,
    history: VecDeque<SaveDocument>,
    history_capacity: usize,
}

impl SaveManager {
    pub fn new(store_dir: impl Into<PathBuf>) -> Self {
        Self::with_history_capacity(store_dir, DEFAULT_HISTORY_CAPACITY)
    }

    pub fn with_history_capacity(store_dir: impl Into<PathBuf>, capacity: usize) -> Self {
        Self {
            store_dir: store_dir.into(),
            history: VecDeque::with_capacity(capacity),
            history_capacity: capacity,
        }
    }

    fn quick_path(&self) -> PathBuf {
        self.store_dir.join(QUICK_SAVE_FILE)
    }

    // ========================================================================
    // Quick save slot
    // ========================================================================

    /// Overwrite the quick save slot with the given document.
    pub fn quick_save(&self, doc: &SaveDocument) -> Result<(), SaveError> {
        fs::create_dir_all(&self.store_dir)?;
        let bytes = serde_json::to_vec(doc).map_err(SaveError::Serialization)?;
        let path = self.quick_path();
        write_atomic(&path, &bytes)?;
        log::info!("quick saved board to {}", path.display());
        Ok(())
    }

    /// Load the quick save slot. The slot being empty is a [`SaveError::NotFound`].
    pub fn quick_load(&self) -> Result<SaveDocument, SaveError> {
        let path = self.quick_path();
        if !path.exists() {
            return Err(SaveError::NotFound {
                path: path.display().to_string(),
            });
        }
        let bytes = fs::read(&path)?;
        let doc = serde_json::from_slice(&bytes).map_err(SaveError::Malformed)?;
        log::info!("loaded quick save from {}", path.display());
        Ok(doc)
    }

    pub fn quick_save_exists(&self) -> bool {
        self.quick_path().exists()
    }

    // ========================================================================
    // Snapshot history
    // ========================================================================

    /// Record a snapshot at the front of the history ring. The oldest
    /// snapshot falls out once the ring is full.
    pub fn push_snapshot(&mut self, doc: SaveDocument) {
        self.history.push_front(doc);
        self.history.truncate(self.history_capacity);
        log::debug!("snapshot recorded, history depth {}", self.history.len());
    }

    /// Snapshots, newest first.
    pub fn history(&self) -> impl Iterator<Item = &SaveDocument> {
        self.history.iter()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn latest_snapshot(&self) -> Option<&SaveDocument> {
        self.history.front()
    }

    /// Snapshot by history index, 0 being the newest.
    pub fn snapshot_at(&self, index: usize) -> Option<&SaveDocument> {
        self.history.get(index)
    }

    // ========================================================================
    // Export / import
    // ========================================================================

    /// Write a pretty-printed document to an arbitrary path.
    pub fn export_to(&self, path: &Path, doc: &SaveDocument) -> Result<(), SaveError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let bytes = serde_json::to_vec_pretty(doc).map_err(SaveError::Serialization)?;
        write_atomic(path, &bytes)?;
        log::info!("exported board to {}", path.display());
        Ok(())
    }

    /// Read a document from an arbitrary path.
    pub fn import_from(&self, path: &Path) -> Result<SaveDocument, SaveError> {
        if !path.exists() {
            return Err(SaveError::NotFound {
                path: path.display().to_string(),
            });
        }
        let bytes = fs::read(path)?;
        let doc = serde_json::from_slice(&bytes).map_err(SaveError::Malformed)?;
        log::info!("imported board from {}", path.display());
        Ok(doc)
    }

    /// Suggested export file name for today.
    pub fn export_file_name() -> String {
        Self::export_file_name_for(chrono::Utc::now().date_naive())
    }

    /// Suggested export file name for a given day.
    pub fn export_file_name_for(date: NaiveDate) -> String {
        format!("{}-{}.json", EXPORT_FILE_PREFIX, date.format("%Y-%m-%d"))
    }

    // ========================================================================
    // Reset
    // ========================================================================

    /// Delete the quick save slot and drop the whole snapshot history.
    pub fn reset(&mut self) -> Result<(), SaveError> {
        let path = self.quick_path();
        match fs::remove_file(&path) {
            Ok(()) => log::info!("removed quick save at {}", path.display()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => return Err(SaveError::Io(err)),
        }
        self.history.clear();
        Ok(())
    }
}

/// Write through a sibling temp file and rename over the target.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), SaveError> {
    let tmp_path = path.with_extension("tmp");
    {
        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(bytes)?;
        file.flush()?;
        file.sync_all()?;
    }
    fs::rename(&tmp_path, path)?;
    Ok(())
}
