use crate::errors::{AppError, AppResult};
use crate::models::{ResultRow, ResultTable, TradeoffParams};

const MONTHS_PER_YEAR: f64 = 12.0;

/// Build the trade-off table for one share price.
///
/// Row `i` raises the monthly salary by `i * salary_increment` and removes
/// from the share package the value of that extra salary over the whole
/// vesting period, so total compensation stays constant.
///
/// Share counts are rounded half-to-even. Negative counts are returned as
/// computed.
pub fn compute_tradeoff(params: &TradeoffParams) -> AppResult<ResultTable> {
    validate(params)?;

    let base_equity_value = params.base_equity_value();
    let total_shares = params.total_shares();
    let vesting_months = MONTHS_PER_YEAR * f64::from(params.vesting_years);

    let rows = (0..params.steps)
        .map(|i| {
            let i = f64::from(i);
            let salary = params.base_salary + i * params.salary_increment;
            let extra_salary_total = i * params.salary_increment * vesting_months;
            let equity_value = base_equity_value - extra_salary_total;
            let n_shares = (equity_value / params.share_price).round_ties_even() as i64;

            ResultRow {
                salary,
                n_shares,
                perc_shares: n_shares as f64 / total_shares,
            }
        })
        .collect();

    Ok(ResultTable {
        share_price: params.share_price,
        rows,
    })
}

/// Reject inputs that would only produce infinities or NaN.
fn validate(params: &TradeoffParams) -> AppResult<()> {
    let finite = [
        ("base_salary", params.base_salary),
        ("base_percentage", params.base_percentage),
        ("share_price", params.share_price),
        ("salary_increment", params.salary_increment),
    ];
    for (name, value) in finite {
        if !value.is_finite() {
            return Err(AppError::InvalidParameter(format!(
                "{name} must be a finite number (got {value})"
            )));
        }
    }

    if params.share_price == 0.0 {
        return Err(AppError::InvalidParameter(
            "share_price must not be zero".into(),
        ));
    }
    if params.base_percentage == 0.0 {
        return Err(AppError::InvalidParameter(
            "base_percentage must not be zero".into(),
        ));
    }

    Ok(())
}
