use crate::core::calculator::compute_tradeoff;
use crate::errors::AppResult;
use crate::models::{PriceSweep, ResultTable, TradeoffParams};

/// One table per price of the sweep, ascending.
///
/// Only `share_price` is taken from the sweep; every other field comes from
/// `params`.
pub fn run_sweep(params: &TradeoffParams, sweep: &PriceSweep) -> AppResult<Vec<ResultTable>> {
    sweep
        .prices()?
        .into_iter()
        .map(|price| compute_tradeoff(&params.with_share_price(price)))
        .collect()
}
