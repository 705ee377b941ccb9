use crate::export::ExportFormat;
use crate::models::{PriceSweep, TradeoffParams};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for rTradeoff
#[derive(Parser)]
#[command(
    name = "rtradeoff",
    version = env!("CARGO_PKG_VERSION"),
    about = "Compute how many shares a salary increase is worth over the vesting period",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Defaults to `sweep` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print one trade-off table per share price of the sweep
    Sweep {
        #[command(flatten)]
        params: ParamArgs,

        #[command(flatten)]
        range: SweepArgs,
    },

    /// Print a single trade-off table
    Table {
        #[command(flatten)]
        params: ParamArgs,

        /// Share price (default from configuration)
        #[arg(long, allow_negative_numbers = true)]
        price: Option<f64>,
    },

    /// Export the sweep rows to a file
    Export {
        /// Export format: csv, json
        #[arg(long, value_enum, value_name = "FORMAT", default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute, or starting with ~/)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,

        #[command(flatten)]
        params: ParamArgs,

        #[command(flatten)]
        range: SweepArgs,
    },

    /// Print or initialize the configuration file
    Config {
        /// Print the effective configuration (default)
        #[arg(long = "print", conflicts_with = "init")]
        print_config: bool,

        /// Write the default configuration file
        #[arg(long = "init")]
        init: bool,

        /// With --init, overwrite an existing file
        #[arg(long, requires = "init")]
        force: bool,
    },
}

/// Overrides for the calculation parameters.
#[derive(Args, Debug, Clone, Default)]
pub struct ParamArgs {
    /// Base monthly salary
    #[arg(long = "salary", allow_negative_numbers = true)]
    pub base_salary: Option<f64>,

    /// Shares offered at the base salary
    #[arg(long = "shares", allow_negative_numbers = true)]
    pub base_shares: Option<i64>,

    /// Ownership of the base shares (same unit is used in the output)
    #[arg(long = "percentage", allow_negative_numbers = true)]
    pub base_percentage: Option<f64>,

    /// Monthly salary increase per step
    #[arg(long = "increment", allow_negative_numbers = true)]
    pub salary_increment: Option<f64>,

    /// Number of salary steps
    #[arg(long)]
    pub steps: Option<u32>,

    /// Vesting period in years
    #[arg(long = "years")]
    pub vesting_years: Option<u32>,
}

impl ParamArgs {
    pub fn apply(&self, base: &TradeoffParams) -> TradeoffParams {
        TradeoffParams {
            base_salary: self.base_salary.unwrap_or(base.base_salary),
            base_shares: self.base_shares.unwrap_or(base.base_shares),
            base_percentage: self.base_percentage.unwrap_or(base.base_percentage),
            share_price: base.share_price,
            salary_increment: self.salary_increment.unwrap_or(base.salary_increment),
            steps: self.steps.unwrap_or(base.steps),
            vesting_years: self.vesting_years.unwrap_or(base.vesting_years),
        }
    }
}

/// Overrides for the share price sweep.
#[derive(Args, Debug, Clone, Default)]
pub struct SweepArgs {
    /// First share price
    #[arg(long = "from", allow_negative_numbers = true)]
    pub start: Option<f64>,

    /// Last share price (inclusive)
    #[arg(long = "to", allow_negative_numbers = true)]
    pub end: Option<f64>,

    /// Price increment between tables
    #[arg(long, allow_negative_numbers = true)]
    pub step: Option<f64>,
}

impl SweepArgs {
    pub fn apply(&self, base: &PriceSweep) -> PriceSweep {
        PriceSweep {
            start: self.start.unwrap_or(base.start),
            end: self.end.unwrap_or(base.end),
            step: self.step.unwrap_or(base.step),
        }
    }
}
