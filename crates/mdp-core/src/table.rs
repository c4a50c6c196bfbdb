//! Fixed-width table rendering for `--format table`

/// Horizontal alignment within a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Right,
}

/// A fixed-width table column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableColumn {
    pub header: &'static str,
    pub width: usize,
    pub align: Align,
}

impl TableColumn {
    pub const fn new(header: &'static str, width: usize) -> Self {
        TableColumn {
            header,
            width,
            align: Align::Left,
        }
    }

    pub const fn right(mut self) -> Self {
        self.align = Align::Right;
        self
    }
}

/// Text shown instead of a table when there are no rows
pub const EMPTY_TABLE: &str = "(no results)";

const COLUMN_GAP: &str = "  ";

/// Render `rows` under `columns`. Each row must have one cell per column.
///
/// Cells longer than their column are cut at the column width.
pub fn format_table(rows: &[Vec<String>], columns: &[TableColumn]) -> String {
    if rows.is_empty() {
        return EMPTY_TABLE.to_string();
    }

    let widths: Vec<usize> = columns.iter().map(|col| col.width).collect();

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(render_line(
        columns.iter().map(|col| col.header),
        columns,
        &widths,
    ));
    lines.push(
        widths
            .iter()
            .map(|w| "─".repeat(*w))
            .collect::<Vec<_>>()
            .join("──"),
    );
    for row in rows {
        lines.push(render_line(row.iter().map(String::as_str), columns, &widths));
    }

    lines.join("\n")
}

fn render_line<'a>(
    cells: impl Iterator<Item = &'a str>,
    columns: &[TableColumn],
    widths: &[usize],
) -> String {
    cells
        .zip(columns.iter().zip(widths))
        .map(|(cell, (col, width))| pad(cell, *width, col.align))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP)
}

fn pad(cell: &str, width: usize, align: Align) -> String {
    let len = cell.chars().count();
    if len >= width {
        return cell.chars().take(width).collect();
    }
    let padding = " ".repeat(width - len);
    match align {
        Align::Left => format!("{}{}", cell, padding),
        Align::Right => format!("{}{}", padding, cell),
    }
}
