//! Table rendering utilities for CLI outputs.

use unicode_width::UnicodeWidthStr;

const COLUMN_GAP: &str = "  ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

pub struct Column {
    pub header: String,
    pub align: Align,
}

impl Column {
    pub fn right(header: &str) -> Self {
        Self {
            header: header.to_string(),
            align: Align::Right,
        }
    }

    pub fn left(header: &str) -> Self {
        Self {
            header: header.to_string(),
            align: Align::Left,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Column widths: widest of header and cells, in display columns.
    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| c.width())
                    .chain(std::iter::once(col.header.width()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        let headers: Vec<&str> = self.columns.iter().map(|c| c.header.as_str()).collect();
        self.push_line(&mut out, &headers, &widths);

        for row in &self.rows {
            let cells: Vec<&str> = (0..self.columns.len())
                .map(|i| row.get(i).map(String::as_str).unwrap_or(""))
                .collect();
            self.push_line(&mut out, &cells, &widths);
        }

        out
    }

    fn push_line(&self, out: &mut String, cells: &[&str], widths: &[usize]) {
        let line = self
            .columns
            .iter()
            .zip(cells.iter().zip(widths))
            .map(|(col, (cell, &width))| {
                let pad = " ".repeat(width.saturating_sub(cell.width()));
                match col.align {
                    Align::Right => format!("{pad}{cell}"),
                    Align::Left => format!("{cell}{pad}"),
                }
            })
            .collect::<Vec<_>>()
            .join(COLUMN_GAP);

        out.push_str(line.trim_end());
        out.push('\n');
    }
}
