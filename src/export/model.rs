// src/export/model.rs

use crate::models::ResultTable;
use serde::Serialize;

/// Flat record for export: one row per (price, step).
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RowExport {
    pub share_price: f64,
    pub step: u32,
    pub salary: f64,
    pub n_shares: i64,
    pub perc_shares: f64,
}

pub(crate) fn flatten(tables: &[ResultTable]) -> Vec<RowExport> {
    tables
        .iter()
        .flat_map(|t| {
            t.rows.iter().zip(0u32..).map(move |(r, step)| RowExport {
                share_price: t.share_price,
                step,
                salary: r.salary,
                n_shares: r.n_shares,
                perc_shares: r.perc_shares,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sweep::run_sweep;
    use crate::models::{PriceSweep, TradeoffParams};

    #[test]
    fn flatten_keeps_price_and_step_order() {
        let tables = run_sweep(&TradeoffParams::default(), &PriceSweep::default()).unwrap();
        let rows = flatten(&tables);

        assert_eq!(rows.len(), 8 * 7);
        assert_eq!(rows[0].share_price, 180.0);
        assert_eq!(rows[0].step, 0);
        assert_eq!(rows[6].step, 6);
        assert_eq!(rows[7].share_price, 190.0);
        assert_eq!(rows[7].step, 0);
    }
}
