pub mod calculator;
pub mod sweep;
