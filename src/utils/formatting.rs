//! Formatting utilities used for CLI and export outputs.

use crate::models::ResultTable;
use crate::utils::table::{Column, Table};

/// Prices and other plain amounts: no trailing `.0` when integral.
pub fn format_amount(value: f64) -> String {
    format!("{}", value)
}

/// Whole salaries print as integers; fractional ones keep their decimals.
pub fn format_salary(value: f64) -> String {
    format_amount(value)
}

pub fn format_percentage(value: f64) -> String {
    format!("{:.6}", value)
}

/// Header line printed above each table.
pub fn price_header(share_price: f64, currency: &str) -> String {
    format!("Share price: {} {}", format_amount(share_price), currency)
}

/// Render a result table with the `Salary`, `N_qeso`, `perc_qeso` columns.
pub fn render_result_table(table: &ResultTable) -> String {
    let mut out = Table::new(vec![
        Column::right("Salary"),
        Column::right("N_qeso"),
        Column::right("perc_qeso"),
    ]);

    for row in &table.rows {
        out.add_row(vec![
            format_salary(row.salary),
            row.n_shares.to_string(),
            format_percentage(row.perc_shares),
        ]);
    }

    out.render()
}

/// Header, table and two blank lines after each table, in order.
pub fn render_sweep(tables: &[ResultTable], currency: &str) -> String {
    let mut out = String::new();
    for table in tables {
        out.push_str(&price_header(table.share_price, currency));
        out.push('\n');
        out.push_str(&render_result_table(table));
        out.push_str("\n\n");
    }
    out
}
