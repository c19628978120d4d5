/// Blockquote block type with owned delimiter constant.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix, marker plus its mandatory space.
    pub const PREFIX: &'static str = "> ";

    /// Returns the quoted text if `body` (indentation already removed) is a quote line.
    pub fn strip_prefix(body: &str) -> Option<&str> {
        body.strip_prefix(Self::PREFIX).map(str::trim)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_no_quote() {
        assert_eq!(BlockQuote::strip_prefix("hello"), None);
    }

    #[test]
    fn strip_single_quote() {
        assert_eq!(BlockQuote::strip_prefix("> hello"), Some("hello"));
    }

    #[test]
    fn marker_without_space_is_not_a_quote() {
        assert_eq!(BlockQuote::strip_prefix(">hello"), None);
    }

    #[test]
    fn nested_marker_stays_in_text() {
        assert_eq!(BlockQuote::strip_prefix("> > hello"), Some("> hello"));
    }
}
