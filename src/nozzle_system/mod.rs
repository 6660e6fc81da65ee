pub mod isentropic;
pub mod nozzle;
pub mod root_finding;
