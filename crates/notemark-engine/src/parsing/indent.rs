/// Maps a line's leading whitespace to a nesting level.
///
/// A tab counts as one level. A run of two or more spaces counts
/// `run / 2` levels, so a lone space counts nothing. Scanning stops at the
/// first character that is neither a space nor a tab.
pub struct IndentResolver;

impl IndentResolver {
    pub fn level(line: &str) -> usize {
        let mut level = 0usize;
        let mut spaces = 0usize;
        for c in line.chars() {
            match c {
                ' ' => spaces += 1,
                '\t' => {
                    level += spaces / 2 + 1;
                    spaces = 0;
                }
                _ => break,
            }
        }
        level + spaces / 2
    }

    /// Splits a line into its leading whitespace and the remainder.
    pub fn split(line: &str) -> (&str, &str) {
        let body = line.trim_start_matches([' ', '\t']);
        line.split_at(line.len() - body.len())
    }
}
