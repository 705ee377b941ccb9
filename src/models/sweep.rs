use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Upper bound on the number of prices a sweep may expand to.
pub const MAX_PRICES: u32 = 10_000;

/// Range of share prices to evaluate, `end` inclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSweep {
    #[serde(default = "default_start")]
    pub start: f64,
    #[serde(default = "default_end")]
    pub end: f64,
    #[serde(default = "default_step")]
    pub step: f64,
}

fn default_start() -> f64 {
    180.0
}
fn default_end() -> f64 {
    250.0
}
fn default_step() -> f64 {
    10.0
}

impl Default for PriceSweep {
    fn default() -> Self {
        Self {
            start: default_start(),
            end: default_end(),
            step: default_step(),
        }
    }
}

impl PriceSweep {
    /// Expand the sweep into the ascending list of prices.
    ///
    /// Each price is `start + k * step` so that rounding error does not
    /// accumulate over long sweeps.
    pub fn prices(&self) -> AppResult<Vec<f64>> {
        if !self.start.is_finite() || !self.end.is_finite() || !self.step.is_finite() {
            return Err(AppError::InvalidSweep(
                "start, end and step must be finite numbers".into(),
            ));
        }
        if self.step <= 0.0 {
            return Err(AppError::InvalidSweep(format!(
                "step must be positive (got {})",
                self.step
            )));
        }
        if self.start > self.end {
            return Err(AppError::InvalidSweep(format!(
                "start ({}) is greater than end ({})",
                self.start, self.end
            )));
        }

        let count = ((self.end - self.start) / self.step + 1e-9).floor() + 1.0;
        if count > MAX_PRICES as f64 {
            return Err(AppError::InvalidSweep(format!(
                "{} to {} in steps of {} gives more than {MAX_PRICES} prices",
                self.start, self.end, self.step
            )));
        }

        let out = (0..count as u32)
            .map(|k| self.start + f64::from(k) * self.step)
            .collect();
        Ok(out)
    }
}
