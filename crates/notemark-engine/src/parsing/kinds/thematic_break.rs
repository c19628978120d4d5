/// Horizontal rule.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const MARKERS: [&'static str; 3] = ["---", "***", "___"];

    pub fn matches(line: &str) -> bool {
        let trimmed = line.trim();
        Self::MARKERS.contains(&trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_markers_only() {
        assert!(ThematicBreak::matches("---"));
        assert!(ThematicBreak::matches("  ***  "));
        assert!(ThematicBreak::matches("___"));
        assert!(!ThematicBreak::matches("----"));
        assert!(!ThematicBreak::matches("- - -"));
    }
}
