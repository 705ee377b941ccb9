//! rTradeoff library root.
//! Exposes the CLI parser, the high-level run() function, and the
//! calculation modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        None => cli::commands::sweep::print_sweep(&cfg.params, &cfg.sweep, &cfg.currency),
        Some(cmd @ Commands::Sweep { .. }) => cli::commands::sweep::handle(cmd, cfg),
        Some(cmd @ Commands::Table { .. }) => cli::commands::table::handle(cmd, cfg),
        Some(cmd @ Commands::Export { .. }) => cli::commands::export::handle(cmd, cfg),
        Some(Commands::Config { .. }) => cli::commands::config::handle(cli, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let cfg = Config::load(cli.config.as_deref())?;
    dispatch(&cli, &cfg)
}
