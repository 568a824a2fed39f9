pub mod config;
pub mod market_data;
pub mod telemetry;
pub mod view;
