use std::fmt::Write;

use serde::Serialize;

use crate::parsing::{
    ParsedDoc,
    blocks::{Block, ListKind},
    inline::Span,
};

/// Compact per-block shape, for structural YAML snapshots.
#[derive(Debug, Serialize)]
pub struct Shape {
    pub kind: &'static str,
    pub start: usize,
    pub end: usize,
}

pub fn shapes(doc: &ParsedDoc) -> Vec<Shape> {
    doc.blocks
        .iter()
        .map(|b| Shape {
            kind: kind_name(&b.block),
            start: b.lines.start,
            end: b.lines.end,
        })
        .collect()
}

pub fn kind_name(b: &Block) -> &'static str {
    match b {
        Block::Heading { .. } => "Heading",
        Block::ListItem { .. } => "ListItem",
        Block::Blockquote { .. } => "Blockquote",
        Block::CodeBlock { .. } => "CodeBlock",
        Block::Table { .. } => "Table",
        Block::Image { .. } => "Image",
        Block::HorizontalRule => "HorizontalRule",
        Block::Paragraph { .. } => "Paragraph",
        Block::Blank => "Blank",
    }
}

/// Renders spans with tag-like markers: `<b>`, `<i>`, `<s>`, `<code>`, `<a>`.
pub fn spans_text(spans: &[Span]) -> String {
    let mut out = String::new();
    for s in spans {
        match s {
            Span::Text(t) => out.push_str(t),
            Span::Bold(c) => {
                let _ = write!(out, "<b>{}</b>", spans_text(c));
            }
            Span::Italic(c) => {
                let _ = write!(out, "<i>{}</i>", spans_text(c));
            }
            Span::Strikethrough(c) => {
                let _ = write!(out, "<s>{}</s>", spans_text(c));
            }
            Span::Code(c) => {
                let _ = write!(out, "<code>{c}</code>");
            }
            Span::Link { label, target, .. } => {
                let _ = write!(out, "<a {target}>{label}</a>");
            }
        }
    }
    out
}

/// One line per block (plus indented rows for code and tables), stable
/// across runs, for `insta::assert_snapshot!`.
pub fn outline(doc: &ParsedDoc) -> String {
    let mut out = String::new();
    for b in &doc.blocks {
        let _ = write!(out, "{}..{} ", b.lines.start, b.lines.end);
        let _ = match &b.block {
            Block::Heading {
                level,
                spans,
                counter_label,
                anchor_id,
            } => writeln!(
                out,
                "h{level} [{}] #{anchor_id} {}",
                counter_label.as_deref().unwrap_or("-"),
                spans_text(spans)
            ),
            Block::ListItem {
                indent_level,
                kind,
                display_label,
                spans,
            } => {
                let kind = match kind {
                    ListKind::Bullet => "bullet".to_string(),
                    ListKind::Ordered { number } => format!("ordered({number})"),
                    ListKind::Checklist { checked } => format!("check({checked})"),
                };
                writeln!(
                    out,
                    "item L{indent_level} {kind} {display_label} {}",
                    spans_text(spans)
                )
            }
            Block::Blockquote { spans } => writeln!(out, "quote {}", spans_text(spans)),
            Block::CodeBlock { language, lines } => {
                let _ = writeln!(out, "code {}", language.as_deref().unwrap_or("-"));
                for l in lines {
                    let _ = writeln!(out, "    |{l}");
                }
                Ok(())
            }
            Block::Table { rows } => {
                let _ = writeln!(out, "table");
                for row in rows {
                    let cells: Vec<String> = row.iter().map(|c| spans_text(c)).collect();
                    let _ = writeln!(out, "    |{}|", cells.join("|"));
                }
                Ok(())
            }
            Block::Image { alt_text, target } => writeln!(out, "image [{alt_text}] {target}"),
            Block::HorizontalRule => writeln!(out, "rule"),
            Block::Paragraph { spans } => writeln!(out, "para {}", spans_text(spans)),
            Block::Blank => writeln!(out, "blank"),
        };
    }
    out
}
