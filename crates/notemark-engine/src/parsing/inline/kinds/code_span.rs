/// Code span inline type with owned delimiter constant.
///
/// Code spans are raw zones: no other pass looks for delimiters inside them.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';

    /// Byte ranges `[start, end)` of closed, non-empty code spans in `s`,
    /// backticks included.
    pub fn regions(s: &str) -> Vec<(usize, usize)> {
        let b = s.as_bytes();
        let mut out = vec![];
        let mut i = 0;
        while i < b.len() {
            if b[i] != Self::TICK {
                i += 1;
                continue;
            }
            match b[i + 1..].iter().position(|&c| c == Self::TICK) {
                Some(0) => i += 1,
                Some(off) => {
                    let end = i + 1 + off + 1;
                    out.push((i, end));
                    i = end;
                }
                None => break,
            }
        }
        out
    }
}
