pub mod formatting;
pub mod path;
pub mod table;

pub use formatting::{price_header, render_result_table, render_sweep};
