use crate::{
    io::images::{ImageSource, ImageStore, is_available},
    parsing::blocks::{Block, ListKind},
};

use super::{
    PrintSettings,
    headings::HeadingStyle,
    layout::{DrawOp, PrintFragment, Run, lines_height, runs, wrap_runs},
    measure::{Face, Rgb, TextStyle, text_width},
    table::layout_table,
};

/// Horizontal step per list indent level.
pub const INDENT_STEP: f32 = 18.0;
const QUOTE_INSET: f32 = 14.0;
const CODE_PADDING: f32 = 6.0;
const TAB: &str = "    ";

/// Lays out one block at the content width.
pub struct BlockLayout<'a> {
    pub settings: &'a PrintSettings,
    pub images: &'a dyn ImageStore,
}

impl BlockLayout<'_> {
    fn body(&self, face: Face) -> TextStyle {
        TextStyle::plain(face, self.settings.font_size)
    }

    fn gap(&self) -> f32 {
        self.settings.font_size * 0.35
    }

    pub fn layout(&self, block: &Block) -> PrintFragment {
        let width = self.settings.content_width();
        match block {
            Block::Heading {
                level,
                spans,
                counter_label,
                ..
            } => {
                let hs = HeadingStyle::for_level(*level, self.settings.font_size);
                let style = TextStyle::plain(Face::Bold, hs.size);
                let mut all = vec![];
                if let Some(label) = counter_label {
                    all.push(Run {
                        text: format!("{label} "),
                        style,
                    });
                }
                all.extend(runs(spans, style, self.settings.link_color));
                self.heading(&all, hs, width)
            }
            Block::ListItem {
                indent_level,
                kind,
                display_label,
                spans,
            } => {
                let text = runs(spans, self.body(Face::Regular), self.settings.link_color);
                self.list_item(*indent_level, *kind, display_label, &text, width)
            }
            Block::Blockquote { spans } => {
                let text = runs(spans, self.body(Face::Italic), self.settings.link_color);
                let mut frag = self.text_at(&text, QUOTE_INSET, width - QUOTE_INSET);
                frag.ops.push(DrawOp::Rect {
                    x: 4.0,
                    y: 0.0,
                    w: 3.0,
                    h: frag.height - self.gap(),
                    fill: Rgb::grey(0.7),
                });
                frag
            }
            Block::CodeBlock { language, lines } => {
                self.code(language.as_deref(), lines, width)
            }
            Block::Table { rows } => layout_table(rows, self.settings),
            Block::Image { alt_text, target } => {
                let found = is_available(self.images, target);
                self.image(alt_text, target, found, width)
            }
            Block::HorizontalRule => {
                let h = self.settings.font_size * 1.2;
                PrintFragment {
                    height: h,
                    ops: vec![DrawOp::Line {
                        x1: 0.0,
                        y1: h / 2.0,
                        x2: width,
                        y2: h / 2.0,
                        width: 0.75,
                        color: Rgb::GREY,
                    }],
                }
            }
            Block::Paragraph { spans } => {
                let text = runs(spans, self.body(Face::Regular), self.settings.link_color);
                self.text_at(&text, 0.0, width)
            }
            Block::Blank => PrintFragment::spacer(self.settings.font_size * 0.6),
        }
    }

    /// Wrapped text at `x`, followed by the paragraph gap.
    fn text_at(&self, text: &[Run], x: f32, width: f32) -> PrintFragment {
        let line_h = self.body(Face::Regular).line_height();
        let lines = wrap_runs(text, width);
        let mut frag = PrintFragment::default();
        frag.push_lines(&lines, x, 0.0, line_h);
        frag.height = lines_height(&lines, line_h) + self.gap();
        frag
    }

    fn heading(&self, text: &[Run], hs: HeadingStyle, width: f32) -> PrintFragment {
        let line_h = hs.size * 1.25;
        let inset = hs.border.map_or(0.0, |b| b + 6.0);
        let avail = width - inset;
        let lines = wrap_runs(text, avail);
        let top = hs.size * 0.4;

        let mut frag = PrintFragment::default();
        let mut y = top;
        for line in &lines {
            let x = if hs.centered {
                inset + ((avail - line.width) / 2.0).max(0.0)
            } else {
                inset
            };
            y += frag.push_lines(std::slice::from_ref(line), x, y, line_h);
        }
        let text_h = lines_height(&lines, line_h);

        if let Some(border) = hs.border {
            frag.ops.push(DrawOp::Rect {
                x: 0.0,
                y: top,
                w: border,
                h: text_h,
                fill: Rgb::GREY,
            });
        }
        let mut bottom = top + text_h;
        if let Some(thickness) = hs.underline {
            bottom += 2.0 + thickness / 2.0;
            frag.ops.push(DrawOp::Line {
                x1: 0.0,
                y1: bottom,
                x2: width,
                y2: bottom,
                width: thickness,
                color: Rgb::BLACK,
            });
            bottom += thickness / 2.0;
        }
        frag.height = bottom + hs.size * 0.3;
        frag
    }

    fn list_item(
        &self,
        indent_level: usize,
        kind: ListKind,
        label: &str,
        text: &[Run],
        width: f32,
    ) -> PrintFragment {
        let size = self.settings.font_size;
        let line_h = self.body(Face::Regular).line_height();
        let x = (indent_level as f32 * INDENT_STEP).min(width / 2.0);
        let space = text_width(" ", Face::Regular, size);

        let mut frag = PrintFragment::default();
        let marker_w = match kind {
            ListKind::Checklist { checked } => {
                let side = size * 0.75;
                let top = (line_h - side) / 2.0;
                frag.ops.push(DrawOp::StrokeRect {
                    x,
                    y: top,
                    w: side,
                    h: side,
                    width: 0.75,
                    color: Rgb::BLACK,
                });
                if checked {
                    let tick = |x1: f32, y1: f32, x2: f32, y2: f32| DrawOp::Line {
                        x1: x + x1 * side,
                        y1: top + y1 * side,
                        x2: x + x2 * side,
                        y2: top + y2 * side,
                        width: 1.0,
                        color: Rgb::BLACK,
                    };
                    frag.ops.push(tick(0.2, 0.55, 0.45, 0.8));
                    frag.ops.push(tick(0.45, 0.8, 0.85, 0.2));
                }
                side + space
            }
            ListKind::Bullet | ListKind::Ordered { .. } => {
                let marker = vec![Run {
                    text: label.to_string(),
                    style: self.body(Face::Regular),
                }];
                let lines = wrap_runs(&marker, width);
                frag.push_lines(&lines, x, 0.0, line_h);
                text_width(label, Face::Regular, size) + space
            }
        };

        let text_x = x + marker_w;
        let lines = wrap_runs(text, width - text_x);
        frag.push_lines(&lines, text_x, 0.0, line_h);
        frag.height = lines_height(&lines, line_h) + self.gap() / 2.0;
        frag
    }

    fn code(&self, language: Option<&str>, lines: &[String], width: f32) -> PrintFragment {
        let size = self.settings.font_size * 0.9;
        let style = TextStyle::plain(Face::Mono, size);
        let line_h = style.line_height();
        let column = text_width("m", Face::Mono, size);
        let cols = (((width - 2.0 * CODE_PADDING) / column).floor() as usize).max(1);

        let mut frag = PrintFragment::default();
        let mut y = CODE_PADDING;
        if let Some(lang) = language {
            let small = TextStyle {
                color: Rgb::GREY,
                ..TextStyle::plain(Face::Italic, size * 0.8)
            };
            let caption = wrap_runs(
                &[Run {
                    text: lang.to_string(),
                    style: small,
                }],
                width,
            );
            y += frag.push_lines(&caption, CODE_PADDING, y, small.line_height());
        }
        for line in lines {
            let line = line.replace('\t', TAB);
            for piece in textwrap::wrap(&line, textwrap::Options::new(cols).break_words(true)) {
                if !piece.trim().is_empty() {
                    frag.ops.push(DrawOp::Text {
                        x: CODE_PADDING,
                        y: y + line_h * 0.78,
                        text: piece.into_owned(),
                        face: Face::Mono,
                        size,
                        color: Rgb::BLACK,
                    });
                }
                y += line_h;
            }
        }
        let box_h = y + CODE_PADDING;
        frag.ops.insert(
            0,
            DrawOp::Rect {
                x: 0.0,
                y: 0.0,
                w: width,
                h: box_h,
                fill: Rgb::grey(0.95),
            },
        );
        frag.height = box_h + self.gap();
        frag
    }

    fn image(&self, alt_text: &str, target: &str, found: bool, width: f32) -> PrintFragment {
        let size = self.settings.font_size;
        let caption = ImageSource::caption(alt_text, target);
        let color = if found { Rgb::BLACK } else { Rgb::GREY };
        let box_w = (width / 2.0).max(size * 4.0).min(width);
        let box_h = size * 5.0;
        let style = TextStyle {
            color,
            ..TextStyle::plain(Face::Italic, size)
        };
        let lines = wrap_runs(
            &[Run {
                text: caption,
                style,
            }],
            box_w - 2.0 * CODE_PADDING,
        );
        let text_h = lines_height(&lines, style.line_height());

        let mut frag = PrintFragment::default();
        frag.ops.push(DrawOp::StrokeRect {
            x: 0.0,
            y: 0.0,
            w: box_w,
            h: box_h,
            width: 0.75,
            color,
        });
        let mut y = ((box_h - text_h) / 2.0).max(0.0);
        for line in &lines {
            let x = ((box_w - line.width) / 2.0).max(CODE_PADDING);
            y += frag.push_lines(std::slice::from_ref(line), x, y, style.line_height());
        }
        frag.height = box_h + self.gap();
        frag
    }

    /// One raw source line in the monospace face.
    pub fn raw_line(&self, line: &str) -> PrintFragment {
        let width = self.settings.content_width();
        let style = self.body(Face::Mono);
        let line_h = style.line_height();
        let cols = ((width / text_width("m", Face::Mono, style.size)).floor() as usize).max(1);
        let line = line.replace('\t', TAB);

        let mut frag = PrintFragment::default();
        let mut y = 0.0;
        for piece in textwrap::wrap(&line, textwrap::Options::new(cols).break_words(true)) {
            if !piece.trim().is_empty() {
                frag.ops.push(DrawOp::Text {
                    x: 0.0,
                    y: y + line_h * 0.78,
                    text: piece.into_owned(),
                    face: Face::Mono,
                    size: style.size,
                    color: Rgb::BLACK,
                });
            }
            y += line_h;
        }
        frag.height = y.max(line_h);
        frag
    }
}
