use super::{
    indent::IndentResolver,
    kinds::{
        AtxHeading, BlockQuote, CodeFence, ImageRef, ListMarker, OrderedMarker, TableRow,
        ThematicBreak,
    },
    lines::LineRef,
};

/// Running state threaded through classification by the builder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassifierState {
    /// Between an opening and a closing fence.
    pub inside_fence: bool,
    /// The previous line was a table row.
    pub inside_table_run: bool,
}

/// The shape of one line, with the residual content each shape carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Opening or closing ```` ``` ````.
    Fence { info: Option<&'a str> },
    /// Raw content between fences.
    Code,
    TableRow,
    Heading {
        level: u8,
        text: &'a str,
    },
    Checklist {
        indent: usize,
        checked: bool,
        text: &'a str,
    },
    Ordered {
        indent: usize,
        number: u32,
        text: &'a str,
    },
    Bullet {
        indent: usize,
        text: &'a str,
    },
    Blockquote {
        text: &'a str,
    },
    Rule,
    Image {
        alt: &'a str,
        target: &'a str,
    },
    Blank,
    Paragraph {
        text: &'a str,
    },
}

/// Classification of a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClass<'a> {
    /// Zero-based source line index.
    pub index: usize,
    /// The line as written, without terminator.
    pub raw: &'a str,
    pub kind: LineKind<'a>,
}

/// Classifies individual lines for the block building phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line, checking shapes in fixed precedence.
    ///
    /// Never fails: anything unrecognised is a paragraph.
    pub fn classify<'a>(&self, lr: &LineRef<'a>, state: &ClassifierState) -> LineClass<'a> {
        let kind = Self::kind_of(lr.text, state);
        log::trace!("line {}: {:?}", lr.index, kind);
        LineClass {
            index: lr.index,
            raw: lr.text,
            kind,
        }
    }

    fn kind_of<'a>(line: &'a str, state: &ClassifierState) -> LineKind<'a> {
        if CodeFence::is_delimiter(line) {
            return LineKind::Fence {
                info: CodeFence::info(line),
            };
        }
        if state.inside_fence {
            return LineKind::Code;
        }

        if TableRow::is_row(line) || (state.inside_table_run && TableRow::continues(line)) {
            return LineKind::TableRow;
        }

        let (ws, body) = IndentResolver::split(line);

        if let Some((level, text)) = AtxHeading::parse(body) {
            return LineKind::Heading { level, text };
        }

        let indent = IndentResolver::level(ws);
        if let Some((checked, text)) = ListMarker::checklist(body) {
            return LineKind::Checklist {
                indent,
                checked,
                text,
            };
        }
        if let Some((number, text)) = OrderedMarker::parse(body) {
            return LineKind::Ordered {
                indent,
                number,
                text,
            };
        }
        if let Some(text) = ListMarker::bullet(body) {
            return LineKind::Bullet {
                indent,
                text: text.trim(),
            };
        }

        if let Some(text) = BlockQuote::strip_prefix(body) {
            return LineKind::Blockquote { text };
        }
        if ThematicBreak::matches(line) {
            return LineKind::Rule;
        }
        if let Some(img) = ImageRef::find(line) {
            return LineKind::Image {
                alt: img.alt,
                target: img.target,
            };
        }
        if line.trim().is_empty() {
            return LineKind::Blank;
        }
        LineKind::Paragraph { text: line.trim() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::lines::ByteSpan;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn kind(line: &str, state: ClassifierState) -> LineKind<'_> {
        let lr = LineRef {
            index: 0,
            span: ByteSpan {
                start: 0,
                end: line.len(),
            },
            text: line,
        };
        MarkdownLineClassifier.classify(&lr, &state).kind
    }

    fn plain(line: &str) -> LineKind<'_> {
        kind(line, ClassifierState::default())
    }

    #[rstest]
    #[case("```rust", LineKind::Fence { info: Some("rust") })]
    #[case("|a|b|", LineKind::TableRow)]
    #[case("## Title", LineKind::Heading { level: 2, text: "Title" })]
    #[case("- [x] done", LineKind::Checklist { indent: 0, checked: true, text: "done" })]
    #[case("    1. first", LineKind::Ordered { indent: 2, number: 1, text: "first" })]
    #[case("\t* item", LineKind::Bullet { indent: 1, text: "item" })]
    #[case("> quoted", LineKind::Blockquote { text: "quoted" })]
    #[case("---", LineKind::Rule)]
    #[case("***", LineKind::Rule)]
    #[case("![cat](cat.png)", LineKind::Image { alt: "cat", target: "cat.png" })]
    #[case("   ", LineKind::Blank)]
    #[case("", LineKind::Blank)]
    #[case("  just text  ", LineKind::Paragraph { text: "just text" })]
    #[case("#hashtag", LineKind::Paragraph { text: "#hashtag" })]
    fn classifies_shapes(#[case] line: &'static str, #[case] expected: LineKind<'static>) {
        assert_eq!(plain(line), expected);
    }

    #[test]
    fn inside_fence_everything_is_code() {
        let state = ClassifierState {
            inside_fence: true,
            inside_table_run: false,
        };
        assert_eq!(kind("# not a heading", state), LineKind::Code);
        assert_eq!(kind("- [ ] nope", state), LineKind::Code);
        assert_eq!(kind("```", state), LineKind::Fence { info: None });
    }

    #[test]
    fn table_run_extends_to_rows_missing_the_closing_pipe() {
        let state = ClassifierState {
            inside_fence: false,
            inside_table_run: true,
        };
        assert_eq!(kind("| half row", state), LineKind::TableRow);
        assert_eq!(
            plain("| half row"),
            LineKind::Paragraph { text: "| half row" }
        );
    }

    #[test]
    fn checklist_beats_bullet() {
        assert!(matches!(plain("- [ ] a"), LineKind::Checklist { .. }));
        assert!(matches!(plain("- [a] a"), LineKind::Bullet { .. }));
    }
}
