use serde::Serialize;

/// A byte range `[start, end)` into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ByteSpan {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl ByteSpan {
    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }
}

/// A half-open range of source line indices `[start, end)`.
///
/// Every block remembers the lines it was built from; this is the only
/// identity that survives into the rendered output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    /// Range covering exactly one line.
    pub fn single(line: usize) -> Self {
        Self {
            start: line,
            end: line + 1,
        }
    }

    /// Number of source lines covered.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    pub fn contains(self, line: usize) -> bool {
        line >= self.start && line < self.end
    }
}

/// A single source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRef<'a> {
    /// Zero-based line index.
    pub index: usize,
    /// Byte span of the line including its terminator.
    pub span: ByteSpan,
    /// Line text without `\n` / `\r\n`.
    pub text: &'a str,
}

/// Returns an iterator over the lines of `text` with their indices and spans.
///
/// A trailing newline does not start an extra empty line, and an empty input
/// yields no lines at all.
pub fn lines_with_spans(text: &str) -> impl Iterator<Item = LineRef<'_>> + '_ {
    let mut offset = 0usize;
    text.split_inclusive('\n')
        .enumerate()
        .map(move |(index, raw)| {
            let start = offset;
            offset += raw.len();
            let body = raw.strip_suffix('\n').unwrap_or(raw);
            let body = body.strip_suffix('\r').unwrap_or(body);
            LineRef {
                index,
                span: ByteSpan { start, end: offset },
                text: body,
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_input_has_no_lines() {
        assert_eq!(lines_with_spans("").count(), 0);
    }

    #[test]
    fn trailing_newline_does_not_add_line() {
        let lines: Vec<_> = lines_with_spans("a\nb\n").map(|l| l.text).collect();
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[test]
    fn crlf_is_stripped_but_span_keeps_it() {
        let lines: Vec<_> = lines_with_spans("one\r\ntwo").collect();
        assert_eq!(lines[0].text, "one");
        assert_eq!(lines[0].span, ByteSpan { start: 0, end: 5 });
        assert_eq!(lines[1].text, "two");
        assert_eq!(lines[1].span, ByteSpan { start: 5, end: 8 });
    }

    #[test]
    fn blank_lines_are_kept() {
        let lines: Vec<_> = lines_with_spans("a\n\n\nb").map(|l| l.index).collect();
        assert_eq!(lines, vec![0, 1, 2, 3]);
    }

    #[test]
    fn line_range_helpers() {
        let r = LineRange { start: 2, end: 5 };
        assert_eq!(r.len(), 3);
        assert!(r.contains(4));
        assert!(!r.contains(5));
        assert_eq!(LineRange::single(7), LineRange { start: 7, end: 8 });
    }
}
