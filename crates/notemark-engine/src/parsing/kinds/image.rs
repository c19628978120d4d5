use std::sync::OnceLock;

use regex::Regex;

/// An `![alt](target)` reference found on a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef<'a> {
    pub alt: &'a str,
    pub target: &'a str,
}

impl<'a> ImageRef<'a> {
    fn regex() -> Option<&'static Regex> {
        static IMAGE: OnceLock<Option<Regex>> = OnceLock::new();
        IMAGE
            .get_or_init(|| match Regex::new(r"!\[([^\]]*)\]\(([^)]*)\)") {
                Ok(re) => Some(re),
                Err(e) => {
                    log::warn!("image pattern unavailable: {e}");
                    None
                }
            })
            .as_ref()
    }

    /// First image reference on the line, if any.
    pub fn find(line: &'a str) -> Option<Self> {
        let caps = Self::regex()?.captures(line)?;
        Some(Self {
            alt: caps.get(1).map_or("", |m| m.as_str().trim()),
            target: caps.get(2).map_or("", |m| m.as_str().trim()),
        })
    }
}
