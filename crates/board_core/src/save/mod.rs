//! Board persistence: quick save, snapshot history, export/import

mod document;
mod error;
mod manager;

pub use document::SaveDocument;
pub use error::SaveError;
pub use manager::{SaveManager, DEFAULT_HISTORY_CAPACITY, QUICK_SAVE_FILE};
