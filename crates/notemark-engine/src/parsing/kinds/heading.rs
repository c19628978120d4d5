/// ATX heading (`#` through `######`).
pub struct AtxHeading;

impl AtxHeading {
    pub const MARK: char = '#';
    pub const MAX_LEVEL: u8 = 6;

    /// Parses `body` (indentation removed) into `(level, text)`.
    ///
    /// One to six markers followed by a space; the text is trimmed.
    pub fn parse(body: &str) -> Option<(u8, &str)> {
        let hashes = body.chars().take_while(|&c| c == Self::MARK).count();
        if hashes == 0 || hashes > Self::MAX_LEVEL as usize {
            return None;
        }
        let rest = body[hashes..].strip_prefix(' ')?;
        Some((hashes as u8, rest.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Title", Some((1, "Title")))]
    #[case("###### Deep", Some((6, "Deep")))]
    #[case("####### Seven", None)]
    #[case("#NoSpace", None)]
    #[case("## ", Some((2, "")))]
    #[case("#", None)]
    #[case("##  padded  ", Some((2, "padded")))]
    #[case("text # not", None)]
    fn parses_headings(#[case] body: &str, #[case] expected: Option<(u8, &str)>) {
        assert_eq!(AtxHeading::parse(body), expected);
    }
}
