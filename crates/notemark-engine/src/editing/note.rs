use crate::error::ToggleError;

use super::toggle::ChecklistToggle;

/// A note's text plus an edit counter.
///
/// Hosts hand the text to the engine and take back a full replacement after
/// a checklist toggle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Note {
    text: String,
    version: u64,
}

impl Note {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            version: 0,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Bumped on every successful change.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.version += 1;
    }

    /// Applies a toggle in place and returns the new text.
    ///
    /// On error the note is left untouched.
    pub fn apply_toggle(&mut self, toggle: ChecklistToggle) -> Result<&str, ToggleError> {
        let next = toggle.apply(&self.text)?;
        self.set_text(next);
        Ok(&self.text)
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_updates_text_and_version() {
        let mut note = Note::new("- [ ] a\n- [ ] b");
        let text = note.apply_toggle(ChecklistToggle::new(1)).unwrap().to_string();
        assert_eq!(text, "- [ ] a\n- [x] b");
        assert_eq!(note.version(), 1);
    }

    #[test]
    fn failed_toggle_leaves_note_alone() {
        let mut note = Note::new("plain");
        assert!(note.apply_toggle(ChecklistToggle::new(0)).is_err());
        assert_eq!(note.text(), "plain");
        assert_eq!(note.version(), 0);
    }
}
