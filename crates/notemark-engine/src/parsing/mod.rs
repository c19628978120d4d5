pub mod blocks;
pub mod classify;
pub mod counters;
pub mod indent;
pub mod inline;
pub mod kinds;
pub mod lines;
pub mod snapshot;

#[cfg(test)]
mod tests;

use serde::Serialize;

use blocks::{BlockBuilder, BlockNode};
use classify::MarkdownLineClassifier;
use lines::lines_with_spans;

/// Options that change what the parser produces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Emit `"2.1."` style labels on headings of level 2 and deeper.
    pub chapter_numbering: bool,
}

/// The shared snapshot both renderers consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedDoc {
    pub blocks: Vec<BlockNode>,
    /// Number of source lines the blocks cover.
    pub line_count: usize,
}

impl ParsedDoc {
    /// The block built from source line `line`.
    pub fn block_at_line(&self, line: usize) -> Option<&BlockNode> {
        self.blocks.iter().find(|b| b.lines.contains(line))
    }
}

/// Parses a whole document in one forward pass.
pub fn parse_document(text: &str, opts: &ParseOptions) -> ParsedDoc {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new(opts.chapter_numbering);
    let mut line_count = 0;

    for lr in lines_with_spans(text) {
        let lc = classifier.classify(&lr, &builder.state());
        builder.push(&lc);
        line_count = lr.index + 1;
    }

    let blocks = builder.finish();
    log::debug!("parsed {line_count} lines into {} blocks", blocks.len());
    ParsedDoc { blocks, line_count }
}
