use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::parsing::counters::numbering::circled_value;

/// Multiplier from font size to line height.
pub const LINE_SPACING: f32 = 1.3;

/// Advance of a drawn circled numeral, in ems.
pub const CIRCLED_ADVANCE: f32 = 0.9;

/// An RGB colour with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb(pub f32, pub f32, pub f32);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0.0, 0.0, 0.0);
    pub const GREY: Rgb = Rgb(0.45, 0.45, 0.45);

    pub fn grey(level: f32) -> Self {
        Rgb(level, level, level)
    }

    /// Parses `#rrggbb`.
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .ok()
                .map(|v| f32::from(v) / 255.0)
        };
        Some(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

/// The standard PDF faces the print renderer uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Face {
    Regular,
    Bold,
    Italic,
    BoldItalic,
    Mono,
}

impl Face {
    pub const ALL: [Face; 5] = [
        Face::Regular,
        Face::Bold,
        Face::Italic,
        Face::BoldItalic,
        Face::Mono,
    ];

    /// Resource name inside each page.
    pub fn resource_name(self) -> &'static [u8] {
        match self {
            Face::Regular => b"F1",
            Face::Bold => b"F2",
            Face::Italic => b"F3",
            Face::BoldItalic => b"F4",
            Face::Mono => b"F5",
        }
    }

    pub fn base_font(self) -> &'static [u8] {
        match self {
            Face::Regular => b"Helvetica",
            Face::Bold => b"Helvetica-Bold",
            Face::Italic => b"Helvetica-Oblique",
            Face::BoldItalic => b"Helvetica-BoldOblique",
            Face::Mono => b"Courier",
        }
    }

    pub fn bold(self) -> Self {
        match self {
            Face::Regular => Face::Bold,
            Face::Italic => Face::BoldItalic,
            other => other,
        }
    }

    pub fn italic(self) -> Self {
        match self {
            Face::Regular => Face::Italic,
            Face::Bold => Face::BoldItalic,
            other => other,
        }
    }

    /// Average advance per display column, in ems.
    fn em_per_column(self) -> f32 {
        match self {
            Face::Regular | Face::Italic => 0.52,
            Face::Bold | Face::BoldItalic => 0.56,
            Face::Mono => 0.6,
        }
    }
}

/// Everything that decides how a run of text is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub face: Face,
    pub size: f32,
    pub color: Rgb,
    pub underline: bool,
    pub strike: bool,
}

impl TextStyle {
    pub fn plain(face: Face, size: f32) -> Self {
        Self {
            face,
            size,
            color: Rgb::BLACK,
            underline: false,
            strike: false,
        }
    }

    pub fn line_height(&self) -> f32 {
        self.size * LINE_SPACING
    }
}

/// Estimated advance width of `s`, from its display width in columns.
///
/// Circled numerals are drawn rather than taken from a font, so they use
/// their exact advance.
pub fn text_width(s: &str, face: Face, size: f32) -> f32 {
    let em = face.em_per_column();
    if !s.chars().any(|c| circled_value(c).is_some()) {
        return s.width() as f32 * em * size;
    }
    s.chars()
        .map(|c| match circled_value(c) {
            Some(_) => CIRCLED_ADVANCE,
            None => c.width().unwrap_or(0) as f32 * em,
        })
        .sum::<f32>()
        * size
}
