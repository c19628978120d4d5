use std::path::PathBuf;

/// The only failure a render request can surface.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("document has {chars} characters, over the limit of {limit}")]
    DocumentTooLarge { chars: usize, limit: usize },
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ToggleError {
    #[error("line {line} is out of range (document has {line_count} lines)")]
    LineOutOfRange { line: usize, line_count: usize },
    #[error("line {0} is not a checklist item")]
    NotAChecklist(usize),
}

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid notes directory: {0}")]
    InvalidNotesDir(String),
}

/// A local image reference that could not be loaded.
///
/// Renderers turn this into a placeholder; it never stops a render.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("image not found: {0}")]
    NotFound(String),
    #[error("image IO error: {0}")]
    Io(#[from] std::io::Error),
}
