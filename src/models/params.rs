use serde::{Deserialize, Serialize};

/// Inputs of a single trade-off computation.
///
/// `base_percentage` is used exactly as given: the output percentage column
/// is expressed in the same unit (the default `0.8` means "0.8 %").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeoffParams {
    /// Starting monthly salary
    #[serde(default = "default_base_salary")]
    pub base_salary: f64,
    /// Number of shares offered at the base salary
    #[serde(default = "default_base_shares")]
    pub base_shares: i64,
    /// Ownership those shares correspond to
    #[serde(default = "default_base_percentage")]
    pub base_percentage: f64,
    /// Value of a single share
    #[serde(default = "default_share_price")]
    pub share_price: f64,
    /// Monthly salary increase per step
    #[serde(default = "default_salary_increment")]
    pub salary_increment: f64,
    /// Number of rows in the output table
    #[serde(default = "default_steps")]
    pub steps: u32,
    /// Equity vests over this many years
    #[serde(default = "default_vesting_years")]
    pub vesting_years: u32,
}

fn default_base_salary() -> f64 {
    42000.0
}
fn default_base_shares() -> i64 {
    3142
}
fn default_base_percentage() -> f64 {
    0.8
}
fn default_share_price() -> f64 {
    220.0
}
fn default_salary_increment() -> f64 {
    1000.0
}
fn default_steps() -> u32 {
    7
}
fn default_vesting_years() -> u32 {
    4
}

impl Default for TradeoffParams {
    fn default() -> Self {
        Self {
            base_salary: default_base_salary(),
            base_shares: default_base_shares(),
            base_percentage: default_base_percentage(),
            share_price: default_share_price(),
            salary_increment: default_salary_increment(),
            steps: default_steps(),
            vesting_years: default_vesting_years(),
        }
    }
}

impl TradeoffParams {
    /// Same parameters, evaluated at another share price.
    pub fn with_share_price(&self, share_price: f64) -> Self {
        Self {
            share_price,
            ..self.clone()
        }
    }

    /// Total company share count implied by the offer.
    pub fn total_shares(&self) -> f64 {
        self.base_shares as f64 / self.base_percentage
    }

    /// Value of the full share package at `share_price`.
    pub fn base_equity_value(&self) -> f64 {
        self.base_shares as f64 * self.share_price
    }
}
