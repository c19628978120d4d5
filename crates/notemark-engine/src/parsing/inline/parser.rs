use std::collections::VecDeque;

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Delimiter, Link},
    types::Span,
};

/// Intermediate pass state: text still open to later passes, and atoms
/// that are already settled.
#[derive(Debug, Clone)]
enum Piece {
    Text(String),
    /// A link; emphasis pairs may span across it.
    Link(Span),
    /// An emphasis span; later passes may not span across it.
    Styled(Span),
}

/// Where a matching closer was found.
enum Closer {
    /// Byte offset in the opener's own text.
    Same(usize),
    /// `index` into the remaining pieces, byte offset `at` in that text.
    Later { index: usize, at: usize },
}

/// Parses one line of inline content into styled [`Span`]s.
///
/// Passes run in fixed order: links, `~~`, `**`, `*`, `_`, then code spans.
/// Delimiter searches skip backtick regions so code stays literal, and the
/// inner text of an emphasis span only receives the code pass. Unmatched
/// delimiters remain literal text.
pub fn parse_inline(s: &str) -> Vec<Span> {
    let mut pieces = link_pass(s);
    for d in [
        Delimiter::STRIKE,
        Delimiter::STRONG,
        Delimiter::STAR,
        Delimiter::UNDERSCORE,
    ] {
        pieces = emphasis_pass(pieces, d);
    }

    let mut out = vec![];
    for piece in pieces {
        match piece {
            Piece::Text(t) => out.extend(code_pass(&t)),
            Piece::Link(span) | Piece::Styled(span) => out.push(span),
        }
    }
    merge_text(out)
}

fn in_region(regions: &[(usize, usize)], i: usize) -> bool {
    regions.iter().any(|&(start, end)| i >= start && i < end)
}

fn link_pass(s: &str) -> Vec<Piece> {
    let regions = CodeSpan::regions(s);
    let mut out = vec![];
    let mut cur = Cursor::at(s, 0);
    let mut text_start = 0;

    while !cur.eof() {
        if cur.peek() == Some(Link::OPEN)
            && !in_region(&regions, cur.i)
            && let Some((link, end)) = try_parse_link(&cur)
        {
            if cur.i > text_start {
                out.push(Piece::Text(s[text_start..cur.i].to_string()));
            }
            out.push(Piece::Link(link));
            cur.i = end;
            text_start = end;
            continue;
        }
        cur.bump();
    }

    if s.len() > text_start {
        out.push(Piece::Text(s[text_start..].to_string()));
    }
    out
}

/// Attempts `[label](target)` at the cursor. Returns the link and the byte
/// offset just past `)`. The label cannot contain `]`.
fn try_parse_link(cur: &Cursor<'_>) -> Option<(Span, usize)> {
    let mut c = cur.clone();
    c.bump(); // [
    let label_start = c.i;
    if !c.seek(b']') {
        return None;
    }
    let label_end = c.i;
    if !c.starts_with(Link::LABEL_CLOSE) {
        return None;
    }
    c.bump_n(Link::LABEL_CLOSE.len());
    let target_start = c.i;
    if !c.seek(Link::CLOSE) {
        return None;
    }
    let target = &c.s[target_start..c.i];
    if target.is_empty() {
        return None;
    }
    c.bump(); // )

    let link = Span::Link {
        label: c.s[label_start..label_end].to_string(),
        target: target.to_string(),
        internal: Link::is_internal(target),
    };
    Some((link, c.i))
}

/// Offsets of `d` in `s` at or after `from`, outside code regions.
fn candidates<'a>(
    s: &'a str,
    from: usize,
    d: Delimiter,
    regions: &'a [(usize, usize)],
) -> impl Iterator<Item = usize> + 'a {
    s.match_indices(d.0)
        .map(|(i, _)| i)
        .filter(move |&i| i >= from && !in_region(regions, i))
}

fn opener_ok(text: &str, p: usize, rest: &VecDeque<Piece>, d: Delimiter) -> bool {
    match text[p + d.len()..].chars().next() {
        Some(c) if c.is_whitespace() => return false,
        Some(_) => {}
        None => {
            if !matches!(rest.front(), Some(Piece::Link(_))) {
                return false;
            }
        }
    }
    if d.needs_word_boundary() && text[..p].chars().next_back().is_some_and(char::is_alphanumeric)
    {
        return false;
    }
    true
}

fn closer_ok(text: &str, q: usize, d: Delimiter) -> bool {
    if text[..q].chars().next_back().is_some_and(char::is_whitespace) {
        return false;
    }
    if d.needs_word_boundary()
        && text[q + d.len()..]
            .chars()
            .next()
            .is_some_and(char::is_alphanumeric)
    {
        return false;
    }
    true
}

/// Finds the first valid opener in `text` and its closer, in `text` itself
/// or a later text piece. Pairs never span an already styled piece.
fn match_pair(text: &str, rest: &VecDeque<Piece>, d: Delimiter) -> Option<(usize, Closer)> {
    let regions = CodeSpan::regions(text);
    for p in candidates(text, 0, d, &regions) {
        if !opener_ok(text, p, rest, d) {
            continue;
        }
        // inner content must be non-empty
        if let Some(q) =
            candidates(text, p + d.len() + 1, d, &regions).find(|&q| closer_ok(text, q, d))
        {
            return Some((p, Closer::Same(q)));
        }
        for (index, piece) in rest.iter().enumerate() {
            match piece {
                Piece::Link(_) => continue,
                Piece::Styled(_) => break,
                Piece::Text(u) => {
                    let r = CodeSpan::regions(u);
                    if let Some(at) = candidates(u, 0, d, &r).find(|&q| closer_ok(u, q, d)) {
                        return Some((p, Closer::Later { index, at }));
                    }
                }
            }
        }
    }
    None
}

fn styled(d: Delimiter, inner: Vec<Piece>) -> Span {
    let mut children = vec![];
    for piece in inner {
        match piece {
            Piece::Text(t) => children.extend(code_pass(&t)),
            Piece::Link(span) | Piece::Styled(span) => children.push(span),
        }
    }
    let children = merge_text(children);
    match d {
        Delimiter::STRIKE => Span::Strikethrough(children),
        Delimiter::STRONG => Span::Bold(children),
        _ => Span::Italic(children),
    }
}

fn emphasis_pass(pieces: Vec<Piece>, d: Delimiter) -> Vec<Piece> {
    let mut rest: VecDeque<Piece> = pieces.into();
    let mut out = vec![];

    while let Some(piece) = rest.pop_front() {
        let Piece::Text(text) = piece else {
            out.push(piece);
            continue;
        };
        let Some((p, closer)) = match_pair(&text, &rest, d) else {
            out.push(Piece::Text(text));
            continue;
        };

        out.push(Piece::Text(text[..p].to_string()));
        let open_end = p + d.len();
        match closer {
            Closer::Same(q) => {
                let inner = vec![Piece::Text(text[open_end..q].to_string())];
                out.push(Piece::Styled(styled(d, inner)));
                rest.push_front(Piece::Text(text[q + d.len()..].to_string()));
            }
            Closer::Later { index, at } => {
                let mut inner = vec![Piece::Text(text[open_end..].to_string())];
                inner.extend(rest.drain(..index));
                let Some(Piece::Text(last)) = rest.pop_front() else {
                    // match_pair only reports closers inside text pieces
                    continue;
                };
                inner.push(Piece::Text(last[..at].to_string()));
                out.push(Piece::Styled(styled(d, inner)));
                rest.push_front(Piece::Text(last[at + d.len()..].to_string()));
            }
        }
    }
    out
}

/// Splits text into plain runs and closed, non-empty code spans.
fn code_pass(s: &str) -> Vec<Span> {
    let mut out = vec![];
    let mut last = 0;
    for (start, end) in CodeSpan::regions(s) {
        out.push(Span::Text(s[last..start].to_string()));
        out.push(Span::Code(s[start + 1..end - 1].to_string()));
        last = end;
    }
    out.push(Span::Text(s[last..].to_string()));
    out
}

/// Joins adjacent text runs and drops empty ones.
fn merge_text(spans: Vec<Span>) -> Vec<Span> {
    let mut out: Vec<Span> = Vec::with_capacity(spans.len());
    for span in spans {
        match span {
            Span::Text(t) if t.is_empty() => {}
            Span::Text(t) => {
                if let Some(Span::Text(prev)) = out.last_mut() {
                    prev.push_str(&t);
                } else {
                    out.push(Span::Text(t));
                }
            }
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn text(s: &str) -> Span {
        Span::Text(s.to_string())
    }

    #[test]
    fn parse_simple_text() {
        assert_eq!(parse_inline("hello world"), vec![text("hello world")]);
    }

    #[test]
    fn empty_input_has_no_spans() {
        assert!(parse_inline("").is_empty());
    }

    #[test]
    fn bold_and_italic() {
        assert_eq!(
            parse_inline("a **b** and *c*"),
            vec![
                text("a "),
                Span::Bold(vec![text("b")]),
                text(" and "),
                Span::Italic(vec![text("c")]),
            ]
        );
    }

    #[test]
    fn strikethrough() {
        assert_eq!(
            parse_inline("~~gone~~ kept"),
            vec![Span::Strikethrough(vec![text("gone")]), text(" kept")]
        );
    }

    #[test]
    fn underscore_italic() {
        assert_eq!(
            parse_inline("_soft_"),
            vec![Span::Italic(vec![text("soft")])]
        );
    }

    #[rstest]
    #[case::snake_case("snake_case_name")]
    #[case::unclosed_bold("**unclosed")]
    #[case::space_after_opener("* not italic*")]
    #[case::space_before_closer("*not italic *")]
    #[case::lone_pair("**")]
    #[case::lone_tick("a ` b")]
    #[case::empty_code("``")]
    #[case::broken_link("[label] (x)")]
    fn stays_literal(#[case] input: &str) {
        assert_eq!(parse_inline(input), vec![text(input)]);
    }

    #[test]
    fn code_span() {
        assert_eq!(
            parse_inline("run `cargo test` now"),
            vec![text("run "), Span::Code("cargo test".into()), text(" now")]
        );
    }

    #[test]
    fn code_suppresses_emphasis() {
        assert_eq!(
            parse_inline("`**x**`"),
            vec![Span::Code("**x**".into())]
        );
    }

    #[test]
    fn code_suppresses_links() {
        assert_eq!(
            parse_inline("`[a](b)`"),
            vec![Span::Code("[a](b)".into())]
        );
    }

    #[test]
    fn code_inside_bold() {
        assert_eq!(
            parse_inline("**see `x`**"),
            vec![Span::Bold(vec![text("see "), Span::Code("x".into())])]
        );
    }

    #[test]
    fn external_and_internal_links() {
        assert_eq!(
            parse_inline("[site](https://a.b) or [up](#top)"),
            vec![
                Span::Link {
                    label: "site".into(),
                    target: "https://a.b".into(),
                    internal: false,
                },
                text(" or "),
                Span::Link {
                    label: "up".into(),
                    target: "#top".into(),
                    internal: true,
                },
            ]
        );
    }

    #[test]
    fn bold_spans_a_link() {
        assert_eq!(
            parse_inline("**go [here](#h) now**"),
            vec![Span::Bold(vec![
                text("go "),
                Span::Link {
                    label: "here".into(),
                    target: "#h".into(),
                    internal: true,
                },
                text(" now"),
            ])]
        );
    }

    #[test]
    fn emphasis_does_not_nest() {
        // the bold pass claims the outer stars; the leftover cannot wrap it
        assert_eq!(
            parse_inline("***x***"),
            vec![Span::Bold(vec![text("*x")]), text("*")]
        );
    }

    #[test]
    fn multiple_pairs_on_one_line() {
        assert_eq!(
            parse_inline("*a* *b*"),
            vec![
                Span::Italic(vec![text("a")]),
                text(" "),
                Span::Italic(vec![text("b")]),
            ]
        );
    }

    #[test]
    fn non_ascii_text_is_preserved() {
        assert_eq!(
            parse_inline("héllo **wörld** ✓"),
            vec![
                text("héllo "),
                Span::Bold(vec![text("wörld")]),
                text(" ✓"),
            ]
        );
    }
}
