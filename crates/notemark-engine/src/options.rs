/// Documented default for the host-enforced size ceiling, in characters.
pub const DEFAULT_MAX_DOCUMENT_CHARS: usize = 1_000_000;

/// Feature flags consumed by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderFlags {
    /// Off bypasses the engine entirely; the note is shown as raw text.
    pub markdown_enabled: bool,
    /// Off suppresses heading counter labels. List numbering is unaffected.
    pub chapter_numbering_enabled: bool,
}

impl Default for RenderFlags {
    fn default() -> Self {
        Self {
            markdown_enabled: true,
            chapter_numbering_enabled: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    pub flags: RenderFlags,
    /// Documents longer than this many characters are rejected.
    pub max_document_chars: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            flags: RenderFlags::default(),
            max_document_chars: DEFAULT_MAX_DOCUMENT_CHARS,
        }
    }
}
