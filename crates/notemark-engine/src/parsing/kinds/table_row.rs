/// Pipe table rows.
pub struct TableRow;

impl TableRow {
    pub const PIPE: char = '|';

    /// A row starts and ends with `|`.
    pub fn is_row(line: &str) -> bool {
        let t = line.trim();
        t.len() >= 2 && t.starts_with(Self::PIPE) && t.ends_with(Self::PIPE)
    }

    /// Inside a run, any line starting with `|` keeps the run going.
    pub fn continues(line: &str) -> bool {
        line.trim_start().starts_with(Self::PIPE)
    }

    /// Splits a row on `|`, trimming the empty outer cells and cell padding.
    pub fn split_cells(line: &str) -> Vec<&str> {
        let t = line.trim();
        let t = t.strip_prefix(Self::PIPE).unwrap_or(t);
        let t = t.strip_suffix(Self::PIPE).unwrap_or(t);
        t.split(Self::PIPE).map(str::trim).collect()
    }

    /// A row made only of `-`, `:` and whitespace in every cell.
    pub fn is_separator(cells: &[&str]) -> bool {
        !cells.is_empty()
            && cells.iter().all(|cell| {
                cell.contains('-')
                    && cell
                        .chars()
                        .all(|c| c == '-' || c == ':' || c.is_whitespace())
            })
    }
}
