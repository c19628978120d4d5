use serde::Serialize;

use crate::parsing::{inline::Span, lines::LineRange};

/// What kind of list item a line is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ListKind {
    Bullet,
    /// `number` is the displayed number after counter resolution, not the literal.
    Ordered { number: u32 },
    Checklist { checked: bool },
}

impl ListKind {
    pub const BULLET_LABEL: &'static str = "•";
    pub const UNCHECKED_LABEL: &'static str = "☐";
    pub const CHECKED_LABEL: &'static str = "☑";
}

/// One structural unit of the parsed document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Block {
    Heading {
        /// 1..=6
        level: u8,
        spans: Vec<Span>,
        /// `"2.1."` style chapter label, only with chapter numbering on.
        counter_label: Option<String>,
        /// Unique within the document; target of `#id` links.
        anchor_id: String,
    },
    ListItem {
        indent_level: usize,
        kind: ListKind,
        display_label: String,
        spans: Vec<Span>,
    },
    Blockquote {
        spans: Vec<Span>,
    },
    CodeBlock {
        language: Option<String>,
        lines: Vec<String>,
    },
    /// First row is the header. Every row has the header's cell count.
    Table {
        rows: Vec<Vec<Vec<Span>>>,
    },
    Image {
        alt_text: String,
        target: String,
    },
    HorizontalRule,
    Paragraph {
        spans: Vec<Span>,
    },
    Blank,
}

impl Block {
    /// Checked state, if this block is a checklist item.
    pub fn checklist_state(&self) -> Option<bool> {
        match self {
            Block::ListItem {
                kind: ListKind::Checklist { checked },
                ..
            } => Some(*checked),
            _ => None,
        }
    }
}

/// A block with the source lines it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockNode {
    pub lines: LineRange,
    pub block: Block,
}
