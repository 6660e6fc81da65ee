pub mod console;
pub mod constants;
pub mod control;
pub mod errors;
pub mod nozzle_system;
pub mod telemetry_system;
pub mod trajectory_system;
pub mod utils;

pub use constants::*;
pub use control::flight_phase::FlightPhase;
pub use control::propulsion::PropulsionSystem;
pub use errors::SimulationError;

// Re-export commonly used items from nozzle_system
pub use nozzle_system::isentropic::{area_mach_relation, choked_mass_flow, exit_conditions};
pub use nozzle_system::nozzle::{
    solve_exit_mach, solve_nozzle, NozzleConfig, NozzleInputs, NozzlePerformance, NozzleSolver,
};
pub use nozzle_system::root_finding::{Bisection, NewtonRaphson, RootFinder};

// Re-export commonly used items from trajectory_system
pub use trajectory_system::integrator::{
    simulate, FlightOutcome, LaunchParameters, Termination, TrajectoryConfig,
    TrajectoryIntegrator,
};

// Re-export commonly used items from telemetry_system
pub use telemetry_system::plots::{save_plots, PlotFiles};
pub use telemetry_system::telemetry::{Sample, Telemetry, ThrustToWeightBasis};

// Re-export commonly used utilities
pub use utils::vector2d::Vector2D;
