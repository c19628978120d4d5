use crate::{
    error::ToggleError,
    parsing::{ParseOptions, indent::IndentResolver, kinds::ListMarker, parse_document},
};

/// Handle for flipping one checklist item, keyed by its source line.
///
/// Valid only against the text the element was rendered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChecklistToggle {
    pub line: usize,
}

impl ChecklistToggle {
    pub fn new(line: usize) -> Self {
        Self { line }
    }

    /// Returns the full document with this item's marker flipped.
    pub fn apply(&self, text: &str) -> Result<String, ToggleError> {
        toggle_checklist(text, self.line)
    }
}

/// Flips the checklist marker on `line`: `[ ]` becomes `[x]`, `[x]` and
/// `[X]` become `[ ]`. Every other byte of `text` is kept, line endings
/// included.
///
/// The line must parse as a checklist item in the context of the whole
/// document, so a look-alike inside a code fence is refused.
pub fn toggle_checklist(text: &str, line: usize) -> Result<String, ToggleError> {
    let (start, content) = text
        .split_inclusive('\n')
        .scan(0usize, |offset, l| {
            let start = *offset;
            *offset += l.len();
            Some((start, l))
        })
        .nth(line)
        .ok_or_else(|| ToggleError::LineOutOfRange {
            line,
            line_count: text.split_inclusive('\n').count(),
        })?;

    let doc = parse_document(text, &ParseOptions::default());
    let is_checklist = doc
        .block_at_line(line)
        .is_some_and(|b| b.block.checklist_state().is_some());
    if !is_checklist {
        return Err(ToggleError::NotAChecklist(line));
    }

    let (ws, body) = IndentResolver::split(content);
    let offset = ListMarker::check_char_offset(body).ok_or(ToggleError::NotAChecklist(line))?;
    let pos = start + ws.len() + offset;
    let flipped = match text.as_bytes().get(pos) {
        Some(b' ') => "x",
        Some(b'x' | b'X') => " ",
        _ => return Err(ToggleError::NotAChecklist(line)),
    };

    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..pos]);
    out.push_str(flipped);
    out.push_str(&text[pos + 1..]);
    log::debug!("toggled checklist on line {line}");
    Ok(out)
}
