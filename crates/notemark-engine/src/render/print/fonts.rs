use pdf_writer::Content;

use super::measure::{CIRCLED_ADVANCE, Face};
use crate::parsing::counters::numbering::circled_value;

/// Resource name of the drawn circled-numeral font.
pub const CIRCLED_RESOURCE: &[u8] = b"F6";
/// Resource name of the composite font used for text outside WinAnsi.
pub const UNICODE_RESOURCE: &[u8] = b"F7";

/// Highest circled numeral.
pub const CIRCLED_COUNT: u8 = 50;

/// A standard CJK font every PDF viewer can substitute; it is not embedded.
pub const UNICODE_BASE_FONT: &[u8] = b"KozGoPr6N-Medium";
/// Predefined CMap: character codes are the UTF-16BE code units of the text.
pub const UNICODE_CMAP: &[u8] = b"UniJIS-UTF16-H";

/// Glyph space units per em for the drawn font.
const UNITS: f32 = 1000.0;

/// The PDF font a piece of text is written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSlot {
    Standard(Face),
    Circled,
    Unicode,
}

impl FontSlot {
    fn of(c: char, face: Face) -> Self {
        if win_ansi_byte(c).is_some() {
            FontSlot::Standard(face)
        } else if circled_value(c).is_some() {
            FontSlot::Circled
        } else {
            FontSlot::Unicode
        }
    }

    pub fn resource_name(self) -> &'static [u8] {
        match self {
            FontSlot::Standard(face) => face.resource_name(),
            FontSlot::Circled => CIRCLED_RESOURCE,
            FontSlot::Unicode => UNICODE_RESOURCE,
        }
    }

    fn encode(self, c: char, out: &mut Vec<u8>) {
        match self {
            FontSlot::Standard(_) => out.extend(win_ansi_byte(c)),
            FontSlot::Circled => out.extend(circled_value(c).and_then(|n| u8::try_from(n).ok())),
            FontSlot::Unicode => {
                for unit in c.encode_utf16(&mut [0; 2]) {
                    out.extend(unit.to_be_bytes());
                }
            }
        }
    }
}

/// A stretch of text that shares one PDF font.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedRun {
    pub slot: FontSlot,
    pub text: String,
    pub bytes: Vec<u8>,
}

/// Splits `text` into runs by the font each character needs.
pub fn encode_runs(text: &str, face: Face) -> Vec<EncodedRun> {
    let mut runs: Vec<EncodedRun> = vec![];
    for c in text.chars() {
        let slot = FontSlot::of(c, face);
        match runs.last_mut() {
            Some(run) if run.slot == slot => {
                run.text.push(c);
                slot.encode(c, &mut run.bytes);
            }
            _ => {
                let mut bytes = vec![];
                slot.encode(c, &mut bytes);
                runs.push(EncodedRun {
                    slot,
                    text: c.to_string(),
                    bytes,
                });
            }
        }
    }
    runs
}

/// The byte for `c` in the standard fonts' WinAnsi encoding.
pub fn win_ansi_byte(c: char) -> Option<u8> {
    Some(match c {
        ' '..='~' => c as u8,
        '\u{A0}'..='\u{FF}' => c as u32 as u8,
        '€' => 0x80,
        '…' => 0x85,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '™' => 0x99,
        _ => return None,
    })
}

/// Advance of every circled glyph, in glyph units.
pub fn circled_glyph_width() -> f32 {
    CIRCLED_ADVANCE * UNITS
}

const CENTER: (f32, f32) = (450.0, 300.0);
const RADIUS: f32 = 390.0;
const RING_STROKE: f32 = 50.0;
const DIGIT_STROKE: f32 = 55.0;
/// Bezier handle length for a quarter circle.
const KAPPA: f32 = 0.552_284_8;

type Stroke = &'static [(f32, f32)];

/// Seven-segment style digit outlines in a unit cell.
const DIGITS: [&[Stroke]; 10] = [
    &[&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)]],
    &[&[(0.5, 0.0), (0.5, 1.0), (0.2, 0.8)]],
    &[&[(0.0, 1.0), (1.0, 1.0), (1.0, 0.5), (0.0, 0.5), (0.0, 0.0), (1.0, 0.0)]],
    &[&[(0.0, 1.0), (1.0, 1.0), (1.0, 0.0), (0.0, 0.0)], &[(0.2, 0.5), (1.0, 0.5)]],
    &[&[(0.0, 1.0), (0.0, 0.5), (1.0, 0.5)], &[(1.0, 1.0), (1.0, 0.0)]],
    &[&[(1.0, 1.0), (0.0, 1.0), (0.0, 0.5), (1.0, 0.5), (1.0, 0.0), (0.0, 0.0)]],
    &[&[(1.0, 1.0), (0.0, 1.0), (0.0, 0.0), (1.0, 0.0), (1.0, 0.5), (0.0, 0.5)]],
    &[&[(0.0, 1.0), (1.0, 1.0), (0.4, 0.0)]],
    &[&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)], &[(0.0, 0.5), (1.0, 0.5)]],
    &[&[(1.0, 0.5), (0.0, 0.5), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0), (0.0, 0.0)]],
];

/// Glyph program for circled numeral `n`: a ring with the number drawn inside.
pub fn circled_glyph(n: u8) -> Vec<u8> {
    let (cx, cy) = CENTER;
    let reach = RADIUS + RING_STROKE;
    let mut c = Content::new();
    c.start_shape_glyph(
        circled_glyph_width(),
        cx - reach,
        cy - reach,
        cx + reach,
        cy + reach,
    );

    c.set_line_width(RING_STROKE);
    let (r, k) = (RADIUS, RADIUS * KAPPA);
    c.move_to(cx + r, cy);
    c.cubic_to(cx + r, cy + k, cx + k, cy + r, cx, cy + r);
    c.cubic_to(cx - k, cy + r, cx - r, cy + k, cx - r, cy);
    c.cubic_to(cx - r, cy - k, cx - k, cy - r, cx, cy - r);
    c.cubic_to(cx + k, cy - r, cx + r, cy - k, cx + r, cy);
    c.close_path();
    c.stroke();

    let digits: Vec<usize> = n
        .to_string()
        .bytes()
        .map(|b| usize::from(b - b'0'))
        .collect();
    let (w, h, gap) = if digits.len() == 1 {
        (220.0, 380.0, 0.0)
    } else {
        (180.0, 340.0, 60.0)
    };
    let total = digits.len() as f32 * (w + gap) - gap;
    let mut x = cx - total / 2.0;
    let y = cy - h / 2.0;

    c.set_line_width(DIGIT_STROKE);
    for digit in digits {
        for stroke in DIGITS[digit] {
            let mut points = stroke.iter();
            if let Some(&(px, py)) = points.next() {
                c.move_to(x + px * w, y + py * h);
            }
            for &(px, py) in points {
                c.line_to(x + px * w, y + py * h);
            }
        }
        x += w + gap;
    }
    c.stroke();
    c.finish()
}
