pub mod plots;
pub mod telemetry;
