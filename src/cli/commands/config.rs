use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Some(Commands::Config { init, force, .. }) = &cli.command {
        // ---- INIT CONFIG ----
        if *init {
            let path = Config::init(cli.config.as_deref(), *force)?;
            success(format!("Config file: {}", path.display()));
            return Ok(());
        }

        // ---- PRINT CONFIG ----
        print!("{}", cfg.to_yaml()?);
    }
    Ok(())
}
