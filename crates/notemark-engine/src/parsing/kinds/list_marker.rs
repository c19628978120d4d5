use std::sync::OnceLock;

use regex::Regex;

/// Bullet and checklist markers.
pub struct ListMarker;

impl ListMarker {
    pub const BULLETS: [char; 3] = ['-', '+', '*'];
    pub const UNCHECKED: &'static str = "[ ]";
    pub const CHECKED: [&'static str; 2] = ["[x]", "[X]"];

    /// `- [ ] text` → `(checked, text)`. `body` has its indentation removed.
    pub fn checklist(body: &str) -> Option<(bool, &str)> {
        let rest = Self::bullet(body)?;
        let checked = if rest.starts_with(Self::UNCHECKED) {
            false
        } else if Self::CHECKED.iter().any(|m| rest.starts_with(m)) {
            true
        } else {
            return None;
        };
        let text = rest[Self::UNCHECKED.len()..].strip_prefix(' ')?;
        Some((checked, text.trim()))
    }

    /// `- text` → `text`.
    pub fn bullet(body: &str) -> Option<&str> {
        let mut chars = body.chars();
        let marker = chars.next()?;
        if !Self::BULLETS.contains(&marker) {
            return None;
        }
        body[marker.len_utf8()..].strip_prefix(' ')
    }

    /// Byte offset, within `body`, of the character between the checklist brackets.
    pub fn check_char_offset(body: &str) -> Option<usize> {
        Self::checklist(body)?;
        // marker, space, '['
        Some(3)
    }
}

/// Ordered list marker (`12. text`).
pub struct OrderedMarker;

impl OrderedMarker {
    /// Fallback when the literal number does not fit.
    pub const DEFAULT_START: u32 = 1;

    fn regex() -> Option<&'static Regex> {
        static ORDERED: OnceLock<Option<Regex>> = OnceLock::new();
        ORDERED
            .get_or_init(|| match Regex::new(r"^(\d+)\.\s(.*)$") {
                Ok(re) => Some(re),
                Err(e) => {
                    log::warn!("ordered list pattern unavailable: {e}");
                    None
                }
            })
            .as_ref()
    }

    /// `3. text` → `(3, text)`.
    pub fn parse(body: &str) -> Option<(u32, &str)> {
        let caps = Self::regex()?.captures(body)?;
        let number = caps
            .get(1)
            .and_then(|m| m.as_str().parse::<u32>().ok())
            .unwrap_or(Self::DEFAULT_START);
        let text = caps.get(2).map_or("", |m| m.as_str().trim());
        Some((number, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("- [ ] buy milk", Some((false, "buy milk")))]
    #[case("* [x] done", Some((true, "done")))]
    #[case("+ [X] shouted", Some((true, "shouted")))]
    #[case("- [ ]no space", None)]
    #[case("- [y] other", None)]
    #[case("- plain", None)]
    #[case("-[ ] tight", None)]
    fn checklist_shapes(#[case] body: &str, #[case] expected: Option<(bool, &str)>) {
        assert_eq!(ListMarker::checklist(body), expected);
    }

    #[rstest]
    #[case("- item", Some("item"))]
    #[case("+ item", Some("item"))]
    #[case("* item", Some("item"))]
    #[case("-item", None)]
    #[case("• item", None)]
    fn bullet_shapes(#[case] body: &str, #[case] expected: Option<&str>) {
        assert_eq!(ListMarker::bullet(body), expected);
    }

    #[rstest]
    #[case("1. one", Some((1, "one")))]
    #[case("42. answer", Some((42, "answer")))]
    #[case("7.\ttabbed", Some((7, "tabbed")))]
    #[case("99999999999. huge", Some((1, "huge")))]
    #[case("1.no space", None)]
    #[case("a. letter", None)]
    #[case("1) paren", None)]
    fn ordered_shapes(#[case] body: &str, #[case] expected: Option<(u32, &str)>) {
        assert_eq!(OrderedMarker::parse(body), expected);
    }

    #[test]
    fn check_char_offset_points_inside_brackets() {
        let body = "- [ ] task";
        let at = ListMarker::check_char_offset(body).unwrap();
        assert_eq!(&body[at..at + 1], " ");
        assert_eq!(ListMarker::check_char_offset("- task"), None);
    }
}
