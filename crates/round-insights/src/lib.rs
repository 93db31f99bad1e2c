pub mod config;
pub mod error;
pub mod insights;
pub mod telemetry;
