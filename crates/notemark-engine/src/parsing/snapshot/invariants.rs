use std::collections::HashSet;

use crate::parsing::{
    ParsedDoc,
    blocks::{Block, ListKind},
};

/// Validates parser output invariants.
///
/// Asserts that:
/// - Line ranges are non-empty, contiguous and cover `0..line_count`
/// - Heading levels are 1..=6 and anchor ids are unique
/// - Every table row has the header's width
/// - Consecutive ordered items at one level count up by exactly 1
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(doc: &ParsedDoc) {
    let mut next_line = 0;
    for b in &doc.blocks {
        assert!(!b.lines.is_empty(), "empty line range: {:?}", b.lines);
        assert_eq!(
            b.lines.start, next_line,
            "line ranges not contiguous at {:?}",
            b.lines
        );
        next_line = b.lines.end;
    }
    assert_eq!(
        next_line, doc.line_count,
        "blocks cover {next_line} of {} lines",
        doc.line_count
    );

    let mut anchors = HashSet::new();
    let mut prev_ordered: Option<(usize, u32)> = None;
    for b in &doc.blocks {
        match &b.block {
            Block::Heading {
                level, anchor_id, ..
            } => {
                assert!((1..=6).contains(level), "heading level {level}");
                assert!(
                    anchors.insert(anchor_id.clone()),
                    "duplicate anchor id {anchor_id}"
                );
            }
            Block::Table { rows } => {
                if let Some(header) = rows.first() {
                    for row in rows {
                        assert_eq!(row.len(), header.len(), "ragged table at {:?}", b.lines);
                    }
                }
            }
            _ => {}
        }

        prev_ordered = match &b.block {
            Block::ListItem {
                indent_level,
                kind: ListKind::Ordered { number },
                ..
            } => {
                if let Some((level, prev)) = prev_ordered
                    && level == *indent_level
                {
                    assert_eq!(
                        *number,
                        prev + 1,
                        "ordered run broken at {:?}",
                        b.lines
                    );
                }
                Some((*indent_level, *number))
            }
            _ => None,
        };
    }
}
