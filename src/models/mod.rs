pub mod params;
pub mod result;
pub mod sweep;

pub use params::TradeoffParams;
pub use result::{ResultRow, ResultTable};
pub use sweep::PriceSweep;
