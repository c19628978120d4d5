//! Note files and the local image store.

pub mod images;
pub mod notes;

pub use images::{DirImageStore, ImageSource, ImageStore, NoImages, resolve as resolve_image};
pub use notes::{read_note, validate_notes_dir, write_note};
