use crate::parsing::{
    classify::{ClassifierState, LineClass, LineKind},
    counters::{HeadingCounters, OrderedItem, OrderedListCounters},
    inline::{parse_inline, plain_text},
    lines::LineRange,
};

use super::{
    anchors::AnchorRegistry,
    table::resolve_rows,
    types::{Block, BlockNode, ListKind},
};

/// An open fenced code block.
#[derive(Debug)]
struct FenceRun {
    start: usize,
    end: usize,
    language: Option<String>,
    lines: Vec<String>,
}

/// Consecutive table lines awaiting resolution.
#[derive(Debug)]
struct TableRun {
    start: usize,
    end: usize,
    lines: Vec<String>,
}

/// Single forward pass from classified lines to blocks.
///
/// Holds the fence and table accumulators plus both counter machines;
/// counters are threaded forward, never recomputed.
pub struct BlockBuilder {
    state: ClassifierState,
    chapter_numbering: bool,
    fence: Option<FenceRun>,
    table: Option<TableRun>,
    ordered: OrderedListCounters,
    headings: HeadingCounters,
    anchors: AnchorRegistry,
    /// Indent level of the previous block, when it was an ordered item.
    prev_ordered_level: Option<usize>,
    out: Vec<BlockNode>,
}

impl BlockBuilder {
    pub fn new(chapter_numbering: bool) -> Self {
        Self {
            state: ClassifierState::default(),
            chapter_numbering,
            fence: None,
            table: None,
            ordered: OrderedListCounters::default(),
            headings: HeadingCounters::default(),
            anchors: AnchorRegistry::default(),
            prev_ordered_level: None,
            out: vec![],
        }
    }

    /// State the classifier needs for the next line.
    pub fn state(&self) -> ClassifierState {
        self.state
    }

    pub fn push(&mut self, c: &LineClass<'_>) {
        match c.kind {
            LineKind::Fence { info } => {
                if self.state.inside_fence {
                    self.close_fence(c.index);
                } else {
                    self.flush_table();
                    self.prev_ordered_level = None;
                    self.fence = Some(FenceRun {
                        start: c.index,
                        end: c.index + 1,
                        language: info.map(str::to_string),
                        lines: vec![],
                    });
                    self.state.inside_fence = true;
                }
            }
            LineKind::Code => {
                if let Some(run) = self.fence.as_mut() {
                    run.lines.push(c.raw.to_string());
                    run.end = c.index + 1;
                }
            }
            LineKind::TableRow => {
                self.prev_ordered_level = None;
                let run = self.table.get_or_insert_with(|| TableRun {
                    start: c.index,
                    end: c.index,
                    lines: vec![],
                });
                run.lines.push(c.raw.to_string());
                run.end = c.index + 1;
                self.state.inside_table_run = true;
            }
            _ => {
                self.flush_table();
                let block = self.line_block(&c.kind);
                self.out.push(BlockNode {
                    lines: LineRange::single(c.index),
                    block,
                });
            }
        }
    }

    pub fn finish(mut self) -> Vec<BlockNode> {
        // EOF flush
        self.flush_table();
        if let Some(run) = self.fence.take() {
            log::warn!(
                "unterminated code fence opened on line {}; treating the rest as code",
                run.start + 1
            );
            self.emit_fence(run);
        }
        self.out
    }

    /// Builds a single-line block, advancing the counters it touches.
    fn line_block(&mut self, kind: &LineKind<'_>) -> Block {
        let prev_ordered = self.prev_ordered_level.take();
        match *kind {
            LineKind::Heading { level, text } => {
                let (counter_label, counters) =
                    self.headings.advance(level, self.chapter_numbering);
                self.headings = counters;
                let spans = parse_inline(text);
                let anchor_id = self.anchors.claim(&plain_text(&spans));
                Block::Heading {
                    level,
                    spans,
                    counter_label,
                    anchor_id,
                }
            }
            LineKind::Ordered {
                indent,
                number,
                text,
            } => {
                let item = OrderedItem {
                    level: indent,
                    literal: number,
                    continues_run: prev_ordered == Some(indent),
                };
                let (label, counters) = std::mem::take(&mut self.ordered).advance(item);
                self.ordered = counters;
                self.prev_ordered_level = Some(indent);
                Block::ListItem {
                    indent_level: indent,
                    kind: ListKind::Ordered {
                        number: label.number,
                    },
                    display_label: label.text,
                    spans: parse_inline(text),
                }
            }
            LineKind::Checklist {
                indent,
                checked,
                text,
            } => Block::ListItem {
                indent_level: indent,
                kind: ListKind::Checklist { checked },
                display_label: if checked {
                    ListKind::CHECKED_LABEL
                } else {
                    ListKind::UNCHECKED_LABEL
                }
                .to_string(),
                spans: parse_inline(text),
            },
            LineKind::Bullet { indent, text } => Block::ListItem {
                indent_level: indent,
                kind: ListKind::Bullet,
                display_label: ListKind::BULLET_LABEL.to_string(),
                spans: parse_inline(text),
            },
            LineKind::Blockquote { text } => Block::Blockquote {
                spans: parse_inline(text),
            },
            LineKind::Rule => Block::HorizontalRule,
            LineKind::Image { alt, target } => Block::Image {
                alt_text: alt.to_string(),
                target: target.to_string(),
            },
            LineKind::Blank => Block::Blank,
            LineKind::Paragraph { text } => Block::Paragraph {
                spans: parse_inline(text),
            },
            // routed by `push` before reaching here
            LineKind::Fence { .. } | LineKind::Code | LineKind::TableRow => Block::Blank,
        }
    }

    fn close_fence(&mut self, closing_line: usize) {
        if let Some(mut run) = self.fence.take() {
            run.end = closing_line + 1;
            self.emit_fence(run);
        }
        self.state.inside_fence = false;
    }

    fn emit_fence(&mut self, run: FenceRun) {
        self.out.push(BlockNode {
            lines: LineRange {
                start: run.start,
                end: run.end,
            },
            block: Block::CodeBlock {
                language: run.language,
                lines: run.lines,
            },
        });
    }

    fn flush_table(&mut self) {
        self.state.inside_table_run = false;
        if let Some(run) = self.table.take() {
            self.out.push(BlockNode {
                lines: LineRange {
                    start: run.start,
                    end: run.end,
                },
                block: Block::Table {
                    rows: resolve_rows(&run.lines),
                },
            });
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new(false)
    }
}
