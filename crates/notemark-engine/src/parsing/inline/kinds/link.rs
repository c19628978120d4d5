/// `[label](target)` links.
pub struct Link;

impl Link {
    pub const OPEN: u8 = b'[';
    pub const LABEL_CLOSE: &'static [u8; 2] = b"](";
    pub const CLOSE: u8 = b')';
    /// Targets starting with this are anchors inside the same note.
    pub const INTERNAL_PREFIX: char = '#';

    pub fn is_internal(target: &str) -> bool {
        target.starts_with(Self::INTERNAL_PREFIX)
    }
}
