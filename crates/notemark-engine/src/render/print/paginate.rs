use super::{
    PrintSettings,
    layout::{DrawOp, PrintFragment},
    measure::{Face, Rgb, text_width},
};

/// One fixed-size page of draw ops in page coordinates (origin top-left).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Page {
    pub ops: Vec<DrawOp>,
}

/// Stacks fragments top to bottom into pages.
///
/// A fragment that would overflow the current page starts a new one unless
/// it is already first on its page; fragments are never split.
pub fn paginate(fragments: Vec<PrintFragment>, s: &PrintSettings) -> Vec<Page> {
    let footer = if s.page_numbers {
        s.font_size * 2.0
    } else {
        0.0
    };
    let bottom = s.page_height - s.margin - footer;
    let mut pages = vec![Page::default()];
    let mut y = s.margin;

    for frag in fragments {
        if y + frag.height > bottom && y > s.margin {
            pages.push(Page::default());
            y = s.margin;
        }
        if frag.height > bottom - s.margin {
            log::warn!(
                "fragment of {:.0}pt is taller than the page body; it will overflow",
                frag.height
            );
        }
        if let Some(page) = pages.last_mut() {
            page.ops
                .extend(frag.ops.into_iter().map(|op| op.translated(s.margin, y)));
        }
        y += frag.height;
    }

    if s.page_numbers {
        let count = pages.len();
        let size = s.font_size * 0.85;
        for (i, page) in pages.iter_mut().enumerate() {
            let text = format!("{} / {count}", i + 1);
            let w = text_width(&text, Face::Regular, size);
            page.ops.push(DrawOp::Text {
                x: (s.page_width - w) / 2.0,
                y: s.page_height - s.margin - footer * 0.25,
                text,
                face: Face::Regular,
                size,
                color: Rgb::GREY,
            });
        }
    }
    pages
}
