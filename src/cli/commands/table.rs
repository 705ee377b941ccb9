use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::compute_tradeoff;
use crate::errors::AppResult;
use crate::utils::{price_header, render_result_table};

/// Handle the `table` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Table { params, price } = cmd {
        let mut params = params.apply(&cfg.params);
        if let Some(p) = price {
            params.share_price = *p;
        }

        let table = compute_tradeoff(&params)?;

        println!("{}", price_header(table.share_price, &cfg.currency));
        print!("{}", render_result_table(&table));
    }
    Ok(())
}
