pub mod config;
pub mod error;
pub mod gateway;
pub mod recruitment;
pub mod telemetry;
