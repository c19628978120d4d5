use crate::parsing::inline::Span;

use super::{
    PrintSettings,
    layout::{DrawOp, PrintFragment, Run, lines_height, max_line_width, runs, wrap_runs},
    measure::{Face, Rgb, TextStyle},
};

/// Inner padding of every cell.
pub const CELL_PADDING: f32 = 4.0;

const HEADER_SHADE: f32 = 0.85;
const STRIPE_SHADE: f32 = 0.95;
const GRID_WIDTH: f32 = 0.5;

/// Column widths: widest wrapped line of any cell at the column cap, plus
/// padding, capped; scaled down proportionally when the table is wider
/// than `available`.
pub fn column_widths(cells: &[Vec<Vec<Run>>], cap: f32, min: f32, available: f32) -> Vec<f32> {
    let cols = cells.first().map_or(0, Vec::len);
    let mut widths: Vec<f32> = (0..cols)
        .map(|c| {
            let natural = cells
                .iter()
                .filter_map(|row| row.get(c))
                .map(|cell| max_line_width(&wrap_runs(cell, cap - 2.0 * CELL_PADDING)))
                .fold(0.0, f32::max);
            (natural + 2.0 * CELL_PADDING).clamp(min, cap)
        })
        .collect();

    let total: f32 = widths.iter().sum();
    if total > available && total > 0.0 {
        let scale = available / total;
        for w in &mut widths {
            *w *= scale;
        }
    }
    widths
}

/// Lays a table out as one grid fragment: bold shaded header, alternating
/// shading on data rows.
pub fn layout_table(rows: &[Vec<Vec<Span>>], settings: &PrintSettings) -> PrintFragment {
    let size = settings.font_size;
    let cells: Vec<Vec<Vec<Run>>> = rows
        .iter()
        .enumerate()
        .map(|(r, row)| {
            let face = if r == 0 { Face::Bold } else { Face::Regular };
            let style = TextStyle::plain(face, size);
            row.iter()
                .map(|cell| runs(cell, style, settings.link_color))
                .collect()
        })
        .collect();
    if cells.first().is_none_or(Vec::is_empty) {
        return PrintFragment::spacer(0.0);
    }

    let min = 2.0 * CELL_PADDING + size;
    let cap = settings.max_column_width.max(min);
    let widths = column_widths(&cells, cap, min, settings.content_width());
    let table_width: f32 = widths.iter().sum();
    let line_h = TextStyle::plain(Face::Regular, size).line_height();

    let mut frag = PrintFragment::default();
    let mut y = 0.0;
    for (r, row) in cells.iter().enumerate() {
        let wrapped: Vec<_> = row
            .iter()
            .zip(&widths)
            .map(|(cell, w)| wrap_runs(cell, w - 2.0 * CELL_PADDING))
            .collect();
        let row_h = wrapped
            .iter()
            .map(|lines| lines_height(lines, line_h))
            .fold(line_h, f32::max)
            + 2.0 * CELL_PADDING;

        let shade = match r {
            0 => Some(HEADER_SHADE),
            r if r % 2 == 0 => Some(STRIPE_SHADE),
            _ => None,
        };
        if let Some(level) = shade {
            frag.ops.push(DrawOp::Rect {
                x: 0.0,
                y,
                w: table_width,
                h: row_h,
                fill: Rgb::grey(level),
            });
        }

        let mut x = 0.0;
        for (lines, w) in wrapped.iter().zip(&widths) {
            frag.push_lines(lines, x + CELL_PADDING, y + CELL_PADDING, line_h);
            frag.ops.push(DrawOp::StrokeRect {
                x,
                y,
                w: *w,
                h: row_h,
                width: GRID_WIDTH,
                color: Rgb::GREY,
            });
            x += w;
        }
        y += row_h;
    }
    frag.height = y + size * 0.6;
    frag
}
