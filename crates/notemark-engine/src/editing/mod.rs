//! # Editing
//!
//! The one edit the engine performs: flipping a checklist marker. Edits are
//! whole-text replacements; nothing about a parse survives an edit except
//! source line indices.

pub mod note;
pub mod toggle;

pub use note::Note;
pub use toggle::{ChecklistToggle, toggle_checklist};
