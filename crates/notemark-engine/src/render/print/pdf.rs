use std::collections::BTreeSet;

use pdf_writer::{
    Content, Finish, Name, Pdf, Rect, Ref, Str, TextStr,
    types::{CidFontType, FontFlags, SystemInfo, UnicodeCmap},
};

use super::{
    PrintDocument,
    fonts::{
        CIRCLED_COUNT, CIRCLED_RESOURCE, FontSlot, UNICODE_BASE_FONT, UNICODE_CMAP,
        UNICODE_RESOURCE, circled_glyph, circled_glyph_width, encode_runs,
    },
    layout::DrawOp,
    measure::Face,
    paginate::Page,
};
use crate::parsing::counters::numbering::circled;

const IDENTITY: SystemInfo<'static> = SystemInfo {
    registry: Str(b"Adobe"),
    ordering: Str(b"Identity"),
    supplement: 0,
};

/// Fonts beyond the standard five that a document needs.
#[derive(Debug, Default)]
struct FontUsage {
    circled: bool,
    unicode: BTreeSet<char>,
}

impl FontUsage {
    fn scan(doc: &PrintDocument) -> Self {
        let mut usage = FontUsage::default();
        for op in doc.pages.iter().flat_map(|p| &p.ops) {
            if let DrawOp::Text { text, face, .. } = op {
                for run in encode_runs(text, *face) {
                    match run.slot {
                        FontSlot::Circled => usage.circled = true,
                        FontSlot::Unicode => usage.unicode.extend(run.text.chars()),
                        FontSlot::Standard(_) => {}
                    }
                }
            }
        }
        usage
    }
}

struct CircledFont {
    font: Ref,
    to_unicode: Ref,
    glyphs: Vec<Ref>,
}

struct UnicodeFont {
    font: Ref,
    cid_font: Ref,
    descriptor: Ref,
    to_unicode: Ref,
}

/// Serializes a laid-out document. Output is deterministic for equal input.
///
/// WinAnsi text uses the standard fonts. Circled numerals come from a small
/// drawn font. Everything else goes through a composite font addressed by
/// UTF-16, with a ToUnicode map so extracted text matches the source.
pub fn write_pdf(doc: &PrintDocument) -> Vec<u8> {
    let mut pdf = Pdf::new();
    let mut next_id = 1;
    let mut alloc = || {
        let id = Ref::new(next_id);
        next_id += 1;
        id
    };

    let usage = FontUsage::scan(doc);
    let catalog_id = alloc();
    let tree_id = alloc();
    let fonts: Vec<(Face, Ref)> = Face::ALL.iter().map(|&face| (face, alloc())).collect();
    let circled_font = usage.circled.then(|| CircledFont {
        font: alloc(),
        to_unicode: alloc(),
        glyphs: (0..CIRCLED_COUNT).map(|_| alloc()).collect(),
    });
    let unicode_font = (!usage.unicode.is_empty()).then(|| UnicodeFont {
        font: alloc(),
        cid_font: alloc(),
        descriptor: alloc(),
        to_unicode: alloc(),
    });
    let page_ids: Vec<(Ref, Ref)> = doc.pages.iter().map(|_| (alloc(), alloc())).collect();

    pdf.catalog(catalog_id).pages(tree_id);
    pdf.pages(tree_id)
        .kids(page_ids.iter().map(|(page, _)| *page))
        .count(page_ids.len() as i32);

    for (face, id) in &fonts {
        pdf.type1_font(*id)
            .base_font(Name(face.base_font()))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
    }
    if let Some(refs) = &circled_font {
        write_circled_font(&mut pdf, refs);
    }
    if let Some(refs) = &unicode_font {
        write_unicode_font(&mut pdf, refs, &usage.unicode);
    }

    for (page, (page_id, content_id)) in doc.pages.iter().zip(&page_ids) {
        let mut writer = pdf.page(*page_id);
        writer.media_box(Rect::new(0.0, 0.0, doc.page_width, doc.page_height));
        writer.parent(tree_id);
        writer.contents(*content_id);
        {
            let mut resources = writer.resources();
            let mut dict = resources.fonts();
            for (face, id) in &fonts {
                dict.pair(Name(face.resource_name()), *id);
            }
            if let Some(refs) = &circled_font {
                dict.pair(Name(CIRCLED_RESOURCE), refs.font);
            }
            if let Some(refs) = &unicode_font {
                dict.pair(Name(UNICODE_RESOURCE), refs.font);
            }
        }
        writer.finish();

        let content = page_content(page, doc.page_height);
        pdf.stream(*content_id, &content);
    }

    pdf.finish()
}

/// Type 3 font whose code `n` draws circled numeral `n`.
fn write_circled_font(pdf: &mut Pdf, refs: &CircledFont) {
    let names: Vec<String> = (1..=CIRCLED_COUNT).map(|n| format!("c{n}")).collect();

    let mut font = pdf.type3_font(refs.font);
    font.name(Name(CIRCLED_RESOURCE))
        .bbox(Rect::new(0.0, -150.0, circled_glyph_width(), 750.0))
        .matrix([0.001, 0.0, 0.0, 0.001, 0.0, 0.0])
        .first_char(1)
        .last_char(CIRCLED_COUNT)
        .widths(std::iter::repeat_n(circled_glyph_width(), names.len()))
        .to_unicode(refs.to_unicode);
    {
        let mut procs = font.char_procs();
        for (name, id) in names.iter().zip(&refs.glyphs) {
            procs.pair(Name(name.as_bytes()), *id);
        }
    }
    font.encoding_custom()
        .differences()
        .consecutive(1, names.iter().map(|n| Name(n.as_bytes())));
    font.finish();

    for (n, id) in (1..=CIRCLED_COUNT).zip(&refs.glyphs) {
        pdf.stream(*id, &circled_glyph(n));
    }

    let mut cmap = UnicodeCmap::<u8>::new(Name(b"Custom"), IDENTITY);
    for n in 1..=CIRCLED_COUNT {
        if let Some(c) = circled(u32::from(n)) {
            cmap.pair(n, c);
        }
    }
    pdf.stream(refs.to_unicode, &cmap.finish());
}

/// Composite font over a predefined UTF-16 CMap; viewers supply the glyphs.
fn write_unicode_font(pdf: &mut Pdf, refs: &UnicodeFont, chars: &BTreeSet<char>) {
    pdf.type0_font(refs.font)
        .base_font(Name(UNICODE_BASE_FONT))
        .encoding_predefined(Name(UNICODE_CMAP))
        .descendant_font(refs.cid_font)
        .to_unicode(refs.to_unicode);
    pdf.cid_font(refs.cid_font)
        .subtype(CidFontType::Type0)
        .base_font(Name(UNICODE_BASE_FONT))
        .system_info(SystemInfo {
            registry: Str(b"Adobe"),
            ordering: Str(b"Japan1"),
            supplement: 6,
        })
        .font_descriptor(refs.descriptor)
        .default_width(1000.0);
    pdf.font_descriptor(refs.descriptor)
        .name(Name(UNICODE_BASE_FONT))
        .flags(FontFlags::SYMBOLIC)
        .bbox(Rect::new(-200.0, -300.0, 1200.0, 1000.0))
        .italic_angle(0.0)
        .ascent(880.0)
        .descent(-120.0)
        .cap_height(700.0)
        .stem_v(80.0);

    // characters past the BMP carry ActualText instead
    let mut cmap = UnicodeCmap::<u16>::new(Name(b"Custom"), IDENTITY);
    for &c in chars {
        if let Ok(code) = u16::try_from(u32::from(c)) {
            cmap.pair(code, c);
        }
    }
    pdf.stream(refs.to_unicode, &cmap.finish());
}

/// Page ops flipped into PDF's bottom-left origin.
fn page_content(page: &Page, height: f32) -> Vec<u8> {
    let mut c = Content::new();
    for op in &page.ops {
        match op {
            DrawOp::Text {
                x,
                y,
                text,
                face,
                size,
                color,
            } => {
                // drawn circled glyphs stroke, so both colours follow the text
                c.set_fill_rgb(color.0, color.1, color.2);
                c.set_stroke_rgb(color.0, color.1, color.2);
                c.begin_text();
                c.next_line(*x, height - *y);
                for run in encode_runs(text, *face) {
                    c.set_font(Name(run.slot.resource_name()), *size);
                    let beyond_bmp = run.text.chars().any(|ch| u32::from(ch) > 0xFFFF);
                    if beyond_bmp {
                        c.begin_marked_content_with_properties(Name(b"Span"))
                            .properties()
                            .actual_text(TextStr(&run.text));
                    }
                    c.show(Str(&run.bytes));
                    if beyond_bmp {
                        c.end_marked_content();
                    }
                }
                c.end_text();
            }
            DrawOp::Rect { x, y, w, h, fill } => {
                c.set_fill_rgb(fill.0, fill.1, fill.2);
                c.rect(*x, height - *y - *h, *w, *h);
                c.fill_nonzero();
            }
            DrawOp::StrokeRect {
                x,
                y,
                w,
                h,
                width,
                color,
            } => {
                c.set_stroke_rgb(color.0, color.1, color.2);
                c.set_line_width(*width);
                c.rect(*x, height - *y - *h, *w, *h);
                c.stroke();
            }
            DrawOp::Line {
                x1,
                y1,
                x2,
                y2,
                width,
                color,
            } => {
                c.set_stroke_rgb(color.0, color.1, color.2);
                c.set_line_width(*width);
                c.move_to(*x1, height - *y1);
                c.line_to(*x2, height - *y2);
                c.stroke();
            }
        }
    }
    c.finish()
}
