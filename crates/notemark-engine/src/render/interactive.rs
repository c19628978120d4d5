use crate::{
    editing::ChecklistToggle,
    io::images::{ImageSource, ImageStore, resolve},
    parsing::{
        blocks::{Block, ListKind},
        inline::Span,
        lines::LineRange,
    },
};

use super::DocumentSnapshot;

/// Where a link points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// Heading anchor in the same note, without the leading `#`.
    Anchor(String),
    External(String),
}

impl LinkTarget {
    /// The target of a link span; `None` for anything else.
    pub fn from_span(span: &Span) -> Option<Self> {
        match span {
            Span::Link {
                target, internal, ..
            } => Some(if *internal {
                LinkTarget::Anchor(target.trim_start_matches('#').to_string())
            } else {
                LinkTarget::External(target.clone())
            }),
            _ => None,
        }
    }
}

/// Host callbacks for link activation.
pub trait LinkHandler {
    fn navigate_to_anchor(&mut self, anchor_id: &str);
    fn open_url(&mut self, url: &str);
}

/// What sits before a list item's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Marker {
    Label(String),
    Checkbox {
        checked: bool,
        toggle: ChecklistToggle,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementKind {
    Heading {
        level: u8,
        label: Option<String>,
        spans: Vec<Span>,
        anchor_id: String,
    },
    ListItem {
        indent_level: usize,
        marker: Marker,
        spans: Vec<Span>,
    },
    Quote {
        spans: Vec<Span>,
    },
    Code {
        language: Option<String>,
        lines: Vec<String>,
    },
    Table {
        header: Vec<Vec<Span>>,
        rows: Vec<Vec<Vec<Span>>>,
    },
    Image {
        alt_text: String,
        source: ImageSource,
    },
    Rule,
    Paragraph {
        spans: Vec<Span>,
    },
    Spacer,
}

impl ElementKind {
    /// Inline spans the element shows, in reading order.
    pub fn spans(&self) -> Vec<&Span> {
        match self {
            ElementKind::Heading { spans, .. }
            | ElementKind::ListItem { spans, .. }
            | ElementKind::Quote { spans }
            | ElementKind::Paragraph { spans } => spans.iter().collect(),
            ElementKind::Table { header, rows } => header
                .iter()
                .chain(rows.iter().flatten())
                .flatten()
                .collect(),
            ElementKind::Code { .. }
            | ElementKind::Image { .. }
            | ElementKind::Rule
            | ElementKind::Spacer => vec![],
        }
    }
}

/// One display element, tied to the source lines it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub lines: LineRange,
    pub kind: ElementKind,
}

impl Element {
    pub fn toggle(&self) -> Option<ChecklistToggle> {
        match &self.kind {
            ElementKind::ListItem {
                marker: Marker::Checkbox { toggle, .. },
                ..
            } => Some(*toggle),
            _ => None,
        }
    }

    /// Link targets in the element, in reading order.
    pub fn links(&self) -> Vec<LinkTarget> {
        fn collect(spans: &[&Span], out: &mut Vec<LinkTarget>) {
            for span in spans {
                match span {
                    Span::Bold(c) | Span::Italic(c) | Span::Strikethrough(c) => {
                        collect(&c.iter().collect::<Vec<_>>(), out)
                    }
                    other => out.extend(LinkTarget::from_span(other)),
                }
            }
        }
        let mut out = vec![];
        collect(&self.kind.spans(), &mut out);
        out
    }
}

/// Output of the interactive projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractiveView {
    /// Markdown disabled: the note verbatim.
    Raw(String),
    Elements(Vec<Element>),
}

impl InteractiveView {
    pub fn elements(&self) -> &[Element] {
        match self {
            InteractiveView::Raw(_) => &[],
            InteractiveView::Elements(e) => e,
        }
    }

    /// Element index and source line of the heading with `anchor_id`.
    pub fn find_anchor(&self, anchor_id: &str) -> Option<(usize, usize)> {
        let id = anchor_id.trim_start_matches('#');
        self.elements()
            .iter()
            .enumerate()
            .find_map(|(i, e)| match &e.kind {
                ElementKind::Heading { anchor_id, .. } if anchor_id == id => {
                    Some((i, e.lines.start))
                }
                _ => None,
            })
    }

    /// Hands a link to the host: anchors navigate, everything else opens as a URL.
    pub fn follow(&self, target: &LinkTarget, handler: &mut dyn LinkHandler) {
        match target {
            LinkTarget::Anchor(id) => {
                if self.find_anchor(id).is_none() {
                    log::debug!("anchor #{id} has no matching heading");
                }
                handler.navigate_to_anchor(id);
            }
            LinkTarget::External(url) => handler.open_url(url),
        }
    }
}

/// Stateless projection of a snapshot into display elements.
#[derive(Debug, Clone, Copy, Default)]
pub struct InteractiveRenderer;

impl InteractiveRenderer {
    pub fn render(&self, snapshot: &DocumentSnapshot, images: &dyn ImageStore) -> InteractiveView {
        let doc = match snapshot {
            DocumentSnapshot::Raw(text) => return InteractiveView::Raw(text.to_string()),
            DocumentSnapshot::Markdown(doc) => doc,
        };
        let elements = doc
            .blocks
            .iter()
            .map(|b| Element {
                lines: b.lines,
                kind: Self::element(&b.block, b.lines, images),
            })
            .collect();
        InteractiveView::Elements(elements)
    }

    fn element(block: &Block, lines: LineRange, images: &dyn ImageStore) -> ElementKind {
        match block {
            Block::Heading {
                level,
                spans,
                counter_label,
                anchor_id,
            } => ElementKind::Heading {
                level: *level,
                label: counter_label.clone(),
                spans: spans.clone(),
                anchor_id: anchor_id.clone(),
            },
            Block::ListItem {
                indent_level,
                kind,
                display_label,
                spans,
            } => ElementKind::ListItem {
                indent_level: *indent_level,
                marker: match kind {
                    ListKind::Checklist { checked } => Marker::Checkbox {
                        checked: *checked,
                        toggle: ChecklistToggle::new(lines.start),
                    },
                    ListKind::Bullet | ListKind::Ordered { .. } => {
                        Marker::Label(display_label.clone())
                    }
                },
                spans: spans.clone(),
            },
            Block::Blockquote { spans } => ElementKind::Quote {
                spans: spans.clone(),
            },
            Block::CodeBlock { language, lines } => ElementKind::Code {
                language: language.clone(),
                lines: lines.clone(),
            },
            Block::Table { rows } => {
                let mut rows = rows.iter().cloned();
                ElementKind::Table {
                    header: rows.next().unwrap_or_default(),
                    rows: rows.collect(),
                }
            }
            Block::Image { alt_text, target } => ElementKind::Image {
                alt_text: alt_text.clone(),
                source: resolve(images, alt_text, target),
            },
            Block::HorizontalRule => ElementKind::Rule,
            Block::Paragraph { spans } => ElementKind::Paragraph {
                spans: spans.clone(),
            },
            Block::Blank => ElementKind::Spacer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        io::images::NoImages,
        parsing::{ParseOptions, parse_document},
    };
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn view(text: &str) -> InteractiveView {
        let doc = parse_document(text, &ParseOptions::default());
        InteractiveRenderer.render(&DocumentSnapshot::Markdown(Arc::new(doc)), &NoImages)
    }

    #[derive(Default)]
    struct Recorder {
        anchors: Vec<String>,
        urls: Vec<String>,
    }

    impl LinkHandler for Recorder {
        fn navigate_to_anchor(&mut self, anchor_id: &str) {
            self.anchors.push(anchor_id.to_string());
        }

        fn open_url(&mut self, url: &str) {
            self.urls.push(url.to_string());
        }
    }

    #[test]
    fn checklist_exposes_toggle_for_its_line() {
        let v = view("# T\n\n- [ ] buy milk");
        let toggle = v.elements()[2].toggle().unwrap();
        assert_eq!(toggle, ChecklistToggle::new(2));
        assert_eq!(
            toggle.apply("# T\n\n- [ ] buy milk").unwrap(),
            "# T\n\n- [x] buy milk"
        );
        assert!(v.elements()[0].toggle().is_none());
    }

    #[test]
    fn links_dispatch_to_handler() {
        let v = view("# Top\nsee **[up](#top)** or [docs](https://d.example)");
        let links = v.elements()[1].links();
        assert_eq!(
            links,
            vec![
                LinkTarget::Anchor("top".into()),
                LinkTarget::External("https://d.example".into())
            ]
        );
        let mut rec = Recorder::default();
        for l in &links {
            v.follow(l, &mut rec);
        }
        assert_eq!(rec.anchors, vec!["top"]);
        assert_eq!(rec.urls, vec!["https://d.example"]);
    }

    #[test]
    fn find_anchor_returns_element_and_line() {
        let v = view("intro\n\n## Details\n## Details");
        assert_eq!(v.find_anchor("details"), Some((2, 2)));
        assert_eq!(v.find_anchor("#details-1"), Some((3, 3)));
        assert_eq!(v.find_anchor("missing"), None);
    }

    #[test]
    fn table_splits_header_from_rows() {
        let v = view("|A|B|\n|---|---|\n|1|2|");
        match &v.elements()[0].kind {
            ElementKind::Table { header, rows } => {
                assert_eq!(header.len(), 2);
                assert_eq!(rows.len(), 1);
            }
            other => panic!("expected table, got {other:?}"),
        }
    }

    #[test]
    fn raw_snapshot_is_passed_through() {
        let v = InteractiveRenderer.render(&DocumentSnapshot::Raw("# not parsed".into()), &NoImages);
        assert_eq!(v, InteractiveView::Raw("# not parsed".into()));
        assert!(v.elements().is_empty());
    }
}
