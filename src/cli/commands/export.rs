use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::sweep::run_sweep;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
        params,
        range,
    } = cmd
    {
        let params = params.apply(&cfg.params);
        let sweep = range.apply(&cfg.sweep);
        let tables = run_sweep(&params, &sweep)?;

        info(format!(
            "{} price scenarios, {} rows each ({})",
            tables.len(),
            params.steps,
            format.as_str()
        ));
        ExportLogic::export(&tables, *format, file, *force)?;
    }
    Ok(())
}
