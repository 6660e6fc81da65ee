// Physical Constants
pub const GRAVITY: f64 = 9.81; // m/s², local gravity for the trajectory model
pub const STANDARD_GRAVITY: f64 = 9.81; // m/s², g0 used for specific impulse
pub const GAS_CONSTANT: f64 = 287.0; // J/(kg·K), adjust for propellant

// Nozzle Solver Parameters
pub const INITIAL_MACH_GUESS: f64 = 2.0; // supersonic branch seed
pub const NEWTON_ITERATIONS: usize = 1000;
pub const DERIVATIVE_STEP: f64 = 1e-6;
pub const ROOT_ACCEPTANCE: f64 = 1e-6; // relative residual
pub const BISECTION_UPPER_MACH: f64 = 100.0;

// Simulation Parameters
pub const TIME_STEP: f64 = 0.01; // s
pub const MAX_TIME_STEPS: f64 = 1e8; // upper bound on total_time / time_step
