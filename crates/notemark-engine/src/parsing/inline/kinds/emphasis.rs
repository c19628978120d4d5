/// Paired emphasis delimiters, in the order the passes run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiter(pub &'static str);

impl Delimiter {
    pub const STRIKE: Delimiter = Delimiter("~~");
    pub const STRONG: Delimiter = Delimiter("**");
    pub const STAR: Delimiter = Delimiter("*");
    pub const UNDERSCORE: Delimiter = Delimiter("_");

    pub fn len(self) -> usize {
        self.0.len()
    }

    pub fn is_empty(self) -> bool {
        self.0.is_empty()
    }

    pub fn bytes(self) -> &'static [u8] {
        self.0.as_bytes()
    }

    /// Underscores only count at word boundaries, so `snake_case_name` stays text.
    pub fn needs_word_boundary(self) -> bool {
        self == Self::UNDERSCORE
    }
}
