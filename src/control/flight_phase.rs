use super::propulsion::PropulsionSystem;

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum FlightPhase {
    Thrusting,
    Coasting,
}

impl FlightPhase {
    /// Phase for the step starting at `elapsed_time` with `mass` on board.
    ///
    /// Coasting is absorbing: once the motor stops it never relights.
    pub fn next(self, elapsed_time: f64, mass: f64, propulsion: &PropulsionSystem) -> FlightPhase {
        match self {
            FlightPhase::Thrusting if propulsion.can_fire(elapsed_time, mass) => {
                FlightPhase::Thrusting
            }
            _ => FlightPhase::Coasting,
        }
    }

    pub fn is_thrusting(self) -> bool {
        self == FlightPhase::Thrusting
    }
}
