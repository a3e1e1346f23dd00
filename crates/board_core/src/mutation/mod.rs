//! Player mutation operations: dragging, editing, renumbering, highlight

mod drag;
mod editor;
mod highlight;
mod numbering;

pub use drag::resolve_drag;
pub use editor::{apply_edit, PlayerEdit};
pub use highlight::{Highlight, HIGHLIGHT_DURATION};
pub use numbering::{apply_numbering, plan_numbering, NumberingPolicy};
