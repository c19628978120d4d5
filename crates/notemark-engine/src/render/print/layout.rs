use textwrap::{WordSeparator, core::Fragment, wrap_algorithms::wrap_first_fit};

use crate::parsing::inline::Span;

use super::measure::{Face, Rgb, TextStyle, text_width};

/// One positioned drawing operation. Coordinates grow right and down from
/// the owner's top-left corner; `y` of text is its baseline.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text {
        x: f32,
        y: f32,
        text: String,
        face: Face,
        size: f32,
        color: Rgb,
    },
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        fill: Rgb,
    },
    StrokeRect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        width: f32,
        color: Rgb,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        width: f32,
        color: Rgb,
    },
}

impl DrawOp {
    /// The same op moved by `(dx, dy)`.
    pub fn translated(self, dx: f32, dy: f32) -> Self {
        match self {
            DrawOp::Text {
                x,
                y,
                text,
                face,
                size,
                color,
            } => DrawOp::Text {
                x: x + dx,
                y: y + dy,
                text,
                face,
                size,
                color,
            },
            DrawOp::Rect { x, y, w, h, fill } => DrawOp::Rect {
                x: x + dx,
                y: y + dy,
                w,
                h,
                fill,
            },
            DrawOp::StrokeRect {
                x,
                y,
                w,
                h,
                width,
                color,
            } => DrawOp::StrokeRect {
                x: x + dx,
                y: y + dy,
                w,
                h,
                width,
                color,
            },
            DrawOp::Line {
                x1,
                y1,
                x2,
                y2,
                width,
                color,
            } => DrawOp::Line {
                x1: x1 + dx,
                y1: y1 + dy,
                x2: x2 + dx,
                y2: y2 + dy,
                width,
                color,
            },
        }
    }
}

/// A contiguous run of text in one style.
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    pub text: String,
    pub style: TextStyle,
}

/// Flattens spans into styled runs on top of `base`.
pub fn runs(spans: &[Span], base: TextStyle, link_color: Rgb) -> Vec<Run> {
    let mut out = vec![];
    push_runs(spans, base, link_color, &mut out);
    out
}

fn push_runs(spans: &[Span], base: TextStyle, link_color: Rgb, out: &mut Vec<Run>) {
    for span in spans {
        match span {
            Span::Text(t) => out.push(Run {
                text: t.clone(),
                style: base,
            }),
            Span::Bold(c) => {
                let style = TextStyle {
                    face: base.face.bold(),
                    ..base
                };
                push_runs(c, style, link_color, out);
            }
            Span::Italic(c) => {
                let style = TextStyle {
                    face: base.face.italic(),
                    ..base
                };
                push_runs(c, style, link_color, out);
            }
            Span::Strikethrough(c) => {
                let style = TextStyle {
                    strike: true,
                    ..base
                };
                push_runs(c, style, link_color, out);
            }
            Span::Code(t) => out.push(Run {
                text: t.clone(),
                style: TextStyle {
                    face: Face::Mono,
                    ..base
                },
            }),
            Span::Link { .. } => out.push(Run {
                text: span.plain_text(),
                style: TextStyle {
                    color: link_color,
                    underline: true,
                    ..base
                },
            }),
        }
    }
}

#[derive(Debug)]
struct Word<'a> {
    text: &'a str,
    style: TextStyle,
    width: f64,
    whitespace_width: f64,
}

impl Fragment for Word<'_> {
    fn width(&self) -> f64 {
        self.width
    }

    fn whitespace_width(&self) -> f64 {
        self.whitespace_width
    }

    fn penalty_width(&self) -> f64 {
        0.0
    }
}

/// A styled piece of text at an x offset within its line.
#[derive(Debug, Clone, PartialEq)]
pub struct Placed {
    pub x: f32,
    pub width: f32,
    pub text: String,
    pub style: TextStyle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub pieces: Vec<Placed>,
    pub width: f32,
    pub height: f32,
}

/// Wraps styled runs into lines no wider than `max_width` (first fit).
///
/// A single word wider than the line gets a line of its own.
pub fn wrap_runs(runs: &[Run], max_width: f32) -> Vec<TextLine> {
    let mut words = vec![];
    for run in runs {
        let face = run.style.face;
        let size = run.style.size;
        for w in WordSeparator::AsciiSpace.find_words(&run.text) {
            words.push(Word {
                text: w.word,
                style: run.style,
                width: f64::from(text_width(w.word, face, size)),
                whitespace_width: f64::from(text_width(w.whitespace, face, size)),
            });
        }
    }
    if words.is_empty() {
        return vec![];
    }

    wrap_first_fit(&words, &[f64::from(max_width.max(1.0))])
        .into_iter()
        .map(|line| {
            let mut pieces = vec![];
            let mut x = 0.0f32;
            let mut height = 0.0f32;
            for (i, w) in line.iter().enumerate() {
                if !w.text.is_empty() {
                    pieces.push(Placed {
                        x,
                        width: w.width as f32,
                        text: w.text.to_string(),
                        style: w.style,
                    });
                    height = height.max(w.style.line_height());
                }
                x += w.width as f32;
                if i + 1 < line.len() {
                    x += w.whitespace_width as f32;
                }
            }
            TextLine {
                pieces,
                width: x,
                height,
            }
        })
        .collect()
}

/// Widest line of a wrapped paragraph.
pub fn max_line_width(lines: &[TextLine]) -> f32 {
    lines.iter().map(|l| l.width).fold(0.0, f32::max)
}

/// Total height of wrapped lines; an empty paragraph still takes one line.
pub fn lines_height(lines: &[TextLine], fallback_line: f32) -> f32 {
    if lines.is_empty() {
        return fallback_line;
    }
    lines.iter().map(|l| l.height.max(fallback_line)).sum()
}

/// One block laid out at fixed width, positioned relative to its top-left.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PrintFragment {
    pub height: f32,
    pub ops: Vec<DrawOp>,
}

impl PrintFragment {
    pub fn spacer(height: f32) -> Self {
        Self {
            height,
            ops: vec![],
        }
    }

    /// Draws wrapped lines starting at `(x, y)`, with line height at least
    /// `min_line`. Returns the height used.
    pub fn push_lines(&mut self, lines: &[TextLine], x: f32, y: f32, min_line: f32) -> f32 {
        let mut top = y;
        for line in lines {
            let h = line.height.max(min_line);
            let baseline = top + h * 0.78;
            for p in &line.pieces {
                let s = p.style;
                self.ops.push(DrawOp::Text {
                    x: x + p.x,
                    y: baseline,
                    text: p.text.clone(),
                    face: s.face,
                    size: s.size,
                    color: s.color,
                });
                if s.underline {
                    self.push_rule(x + p.x, baseline + s.size * 0.12, p.width, s, 0.06);
                }
                if s.strike {
                    self.push_rule(x + p.x, baseline - s.size * 0.3, p.width, s, 0.06);
                }
            }
            top += h;
        }
        top - y
    }

    fn push_rule(&mut self, x: f32, y: f32, w: f32, s: TextStyle, weight: f32) {
        self.ops.push(DrawOp::Line {
            x1: x,
            y1: y,
            x2: x + w,
            y2: y,
            width: (s.size * weight).max(0.5),
            color: s.color,
        });
    }
}
