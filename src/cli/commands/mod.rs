pub mod config;
pub mod export;
pub mod sweep;
pub mod table;
