use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::sweep::run_sweep;
use crate::errors::AppResult;
use crate::models::{PriceSweep, TradeoffParams};
use crate::utils::render_sweep;

/// Handle the `sweep` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Sweep { params, range } = cmd {
        let params = params.apply(&cfg.params);
        let sweep = range.apply(&cfg.sweep);
        print_sweep(&params, &sweep, &cfg.currency)?;
    }
    Ok(())
}

/// Compute and print every table of the sweep.
pub fn print_sweep(params: &TradeoffParams, sweep: &PriceSweep, currency: &str) -> AppResult<()> {
    let tables = run_sweep(params, sweep)?;
    print!("{}", render_sweep(&tables, currency));
    Ok(())
}
