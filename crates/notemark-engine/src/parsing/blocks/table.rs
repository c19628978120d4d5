use crate::parsing::{
    inline::{Span, parse_inline},
    kinds::TableRow,
};

/// Resolves an accumulated run of table lines into rows of cells.
///
/// Separator rows are dropped. Every row is normalized to the header's
/// width: missing cells become empty, extra cells are ignored.
pub fn resolve_rows(lines: &[String]) -> Vec<Vec<Vec<Span>>> {
    let mut rows: Vec<Vec<&str>> = lines
        .iter()
        .map(|line| TableRow::split_cells(line))
        .filter(|cells| !TableRow::is_separator(cells))
        .collect();

    let Some(width) = rows.first().map(Vec::len) else {
        return vec![];
    };

    rows.iter_mut()
        .map(|row| {
            row.resize(width, "");
            row.iter().map(|cell| parse_inline(cell)).collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::inline::plain_text;
    use pretty_assertions::assert_eq;

    fn texts(lines: &[&str]) -> Vec<Vec<String>> {
        let lines: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        resolve_rows(&lines)
            .iter()
            .map(|row| row.iter().map(|cell| plain_text(cell)).collect())
            .collect()
    }

    #[test]
    fn separator_is_dropped() {
        assert_eq!(
            texts(&["|A|B|", "|---|:---:|", "|1|2|"]),
            vec![vec!["A", "B"], vec!["1", "2"]]
        );
    }

    #[test]
    fn short_rows_are_padded_and_long_rows_truncated() {
        assert_eq!(
            texts(&["| A | B | C |", "| 1 |", "| x | y | z | extra |"]),
            vec![vec!["A", "B", "C"], vec!["1", "", ""], vec!["x", "y", "z"]]
        );
    }

    #[test]
    fn only_separators_yield_no_rows() {
        assert!(texts(&["|---|---|"]).is_empty());
    }

    #[test]
    fn cells_are_inline_parsed() {
        let lines = vec!["|**A**|`b`|".to_string()];
        let rows = resolve_rows(&lines);
        assert_eq!(
            rows[0],
            vec![
                vec![Span::Bold(vec![Span::Text("A".into())])],
                vec![Span::Code("b".into())],
            ]
        );
    }
}
