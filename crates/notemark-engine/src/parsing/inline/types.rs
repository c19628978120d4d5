use serde::Serialize;

/// One styled run of inline text.
///
/// Styled variants hold child spans, but children are never styled
/// themselves: only `Text`, `Code` and `Link` appear inside them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Span {
    Text(String),
    Bold(Vec<Span>),
    Italic(Vec<Span>),
    Strikethrough(Vec<Span>),
    Code(String),
    Link {
        label: String,
        target: String,
        internal: bool,
    },
}

impl Span {
    /// The text a reader sees, markup removed.
    pub fn plain_text(&self) -> String {
        match self {
            Span::Text(s) | Span::Code(s) => s.clone(),
            Span::Bold(c) | Span::Italic(c) | Span::Strikethrough(c) => plain_text(c),
            Span::Link { label, target, .. } => {
                if label.is_empty() {
                    target.clone()
                } else {
                    label.clone()
                }
            }
        }
    }
}

/// Concatenated plain text of a span list.
pub fn plain_text(spans: &[Span]) -> String {
    spans.iter().map(Span::plain_text).collect()
}
