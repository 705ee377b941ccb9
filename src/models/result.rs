use serde::Serialize;

/// One salary step of a trade-off table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRow {
    pub salary: f64,
    pub n_shares: i64,
    pub perc_shares: f64,
}

/// Rows for a single share price, in step order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultTable {
    pub share_price: f64,
    pub rows: Vec<ResultRow>,
}

impl ResultTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
