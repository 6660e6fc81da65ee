pub mod flight_phase;
pub mod propulsion;
