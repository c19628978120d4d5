/// Display format of an ordered list number, chosen by indent level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberFormat {
    /// `1.`
    Arabic,
    /// `①`, values 1-50.
    Circled,
    /// `iv.`, values 1-50.
    LowerRoman,
    /// `c.`, values 1-26.
    LowerAlpha,
}

impl NumberFormat {
    /// Levels past 3 stay arabic; the sequence does not wrap around.
    pub fn for_level(level: usize) -> Self {
        match level {
            1 => Self::Circled,
            2 => Self::LowerRoman,
            3 => Self::LowerAlpha,
            _ => Self::Arabic,
        }
    }

    /// Formats `n`, falling back to arabic outside the format's range.
    pub fn label(self, n: u32) -> String {
        match self {
            Self::Arabic => arabic(n),
            Self::Circled => circled(n).map_or_else(|| arabic(n), String::from),
            Self::LowerRoman => roman(n).map_or_else(|| arabic(n), |r| format!("{r}.")),
            Self::LowerAlpha => letter(n).map_or_else(|| arabic(n), |c| format!("{c}.")),
        }
    }
}

fn arabic(n: u32) -> String {
    format!("{n}.")
}

/// ① (1) through ㊿ (50), spread over three Unicode blocks.
pub fn circled(n: u32) -> Option<char> {
    let code = match n {
        1..=20 => 0x2460 + (n - 1),
        21..=35 => 0x3251 + (n - 21),
        36..=50 => 0x32B1 + (n - 36),
        _ => return None,
    };
    char::from_u32(code)
}

/// Inverse of [`circled`].
pub fn circled_value(c: char) -> Option<u32> {
    let code = c as u32;
    match code {
        0x2460..=0x2473 => Some(code - 0x2460 + 1),
        0x3251..=0x325F => Some(code - 0x3251 + 21),
        0x32B1..=0x32BF => Some(code - 0x32B1 + 36),
        _ => None,
    }
}

const ROMAN_ONES: [&str; 10] = ["", "i", "ii", "iii", "iv", "v", "vi", "vii", "viii", "ix"];
const ROMAN_TENS: [&str; 6] = ["", "x", "xx", "xxx", "xl", "l"];

/// Lowercase roman numeral for 1-50.
pub fn roman(n: u32) -> Option<String> {
    if !(1..=50).contains(&n) {
        return None;
    }
    let tens = ROMAN_TENS[(n / 10) as usize];
    let ones = ROMAN_ONES[(n % 10) as usize];
    Some(format!("{tens}{ones}"))
}

/// `a` through `z`.
pub fn letter(n: u32) -> Option<char> {
    if !(1..=26).contains(&n) {
        return None;
    }
    char::from_u32('a' as u32 + n - 1)
}
