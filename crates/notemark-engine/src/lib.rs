pub mod editing;
pub mod error;
pub mod io;
pub mod options;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use editing::{ChecklistToggle, Note, toggle_checklist};
pub use error::{EngineError, ImageError, IoError, ToggleError};
pub use io::{DirImageStore, ImageSource, ImageStore, NoImages, read_note, write_note};
pub use options::{DEFAULT_MAX_DOCUMENT_CHARS, EngineOptions, RenderFlags};
pub use parsing::{
    ParseOptions, ParsedDoc,
    blocks::{Block, BlockNode, ListKind},
    inline::Span,
    lines::LineRange,
    parse_document,
};
pub use render::{
    DocumentSnapshot, Rendered,
    interactive::{
        Element, ElementKind, InteractiveRenderer, InteractiveView, LinkHandler, LinkTarget,
        Marker,
    },
    print::{PrintDocument, PrintRenderer, PrintSettings, measure::Rgb},
    render,
    worker::RenderWorker,
};
