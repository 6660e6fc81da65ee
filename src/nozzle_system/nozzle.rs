use crate::constants::{GAS_CONSTANT, ROOT_ACCEPTANCE, STANDARD_GRAVITY};
use crate::errors::{require_non_negative, require_positive, SimulationError};

use super::isentropic::{area_mach_relation, choked_mass_flow, exit_conditions};
use super::root_finding::{NewtonRaphson, RootFinder};

/// Gas and reference constants the nozzle model depends on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NozzleConfig {
    /// Specific gas constant of the exhaust, J/(kg·K).
    pub gas_constant: f64,
    /// Reference gravity for specific impulse, m/s².
    pub standard_gravity: f64,
}

impl Default for NozzleConfig {
    fn default() -> Self {
        NozzleConfig {
            gas_constant: GAS_CONSTANT,
            standard_gravity: STANDARD_GRAVITY,
        }
    }
}

impl NozzleConfig {
    pub fn new(gas_constant: f64, standard_gravity: f64) -> Result<Self, SimulationError> {
        Ok(NozzleConfig {
            gas_constant: require_positive("gas constant", gas_constant)?,
            standard_gravity: require_positive("standard gravity", standard_gravity)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NozzleInputs {
    pub chamber_pressure: f64,
    pub chamber_temperature: f64,
    pub gamma: f64,
    pub throat_area: f64,
    pub exit_area: f64,
    pub ambient_pressure: f64,
}

impl NozzleInputs {
    pub fn validate(&self) -> Result<(), SimulationError> {
        require_positive("chamber pressure", self.chamber_pressure)?;
        require_positive("chamber temperature", self.chamber_temperature)?;
        validate_gamma(self.gamma)?;
        require_positive("throat area", self.throat_area)?;
        require_positive("exit area", self.exit_area)?;
        require_non_negative("ambient pressure", self.ambient_pressure)?;

        if self.exit_area < self.throat_area {
            return Err(SimulationError::InvalidInput(format!(
                "exit area ({} m²) is smaller than throat area ({} m²); no supersonic solution exists",
                self.exit_area, self.throat_area
            )));
        }
        Ok(())
    }

    pub fn area_ratio(&self) -> f64 {
        self.exit_area / self.throat_area
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NozzlePerformance {
    pub area_ratio: f64,
    pub exit_mach: f64,
    pub exit_temperature: f64,
    pub exit_pressure: f64,
    pub exit_velocity: f64,
    pub mass_flow_rate: f64,
    pub thrust: f64,
    pub specific_impulse: f64,
}

fn validate_gamma(gamma: f64) -> Result<f64, SimulationError> {
    if gamma.is_finite() && gamma > 1.0 {
        Ok(gamma)
    } else {
        Err(SimulationError::InvalidInput(format!(
            "specific heat ratio must be greater than 1, got {gamma}"
        )))
    }
}

/// Supersonic exit Mach number for `area_ratio` using the default Newton solver.
pub fn solve_exit_mach(area_ratio: f64, gamma: f64) -> Result<f64, SimulationError> {
    solve_exit_mach_with(&NewtonRaphson::default(), area_ratio, gamma)
}

pub fn solve_exit_mach_with(
    finder: &dyn RootFinder,
    area_ratio: f64,
    gamma: f64,
) -> Result<f64, SimulationError> {
    validate_gamma(gamma)?;
    require_positive("area ratio", area_ratio)?;
    if area_ratio < 1.0 {
        return Err(SimulationError::InvalidInput(format!(
            "area ratio must be at least 1, got {area_ratio}"
        )));
    }

    let estimate = finder.find_root(&|mach| area_mach_relation(mach, gamma) - area_ratio)?;

    if estimate.root <= 0.0 || estimate.residual / area_ratio > ROOT_ACCEPTANCE {
        return Err(SimulationError::NonConvergence {
            iterations: estimate.iterations,
            residual: estimate.residual,
        });
    }
    Ok(estimate.root)
}

/// Isentropic nozzle performance model.
pub struct NozzleSolver<R: RootFinder = NewtonRaphson> {
    config: NozzleConfig,
    root_finder: R,
}

impl Default for NozzleSolver {
    fn default() -> Self {
        NozzleSolver::new(NozzleConfig::default())
    }
}

impl NozzleSolver {
    pub fn new(config: NozzleConfig) -> Self {
        NozzleSolver {
            config,
            root_finder: NewtonRaphson::default(),
        }
    }
}

impl<R: RootFinder> NozzleSolver<R> {
    pub fn with_root_finder<S: RootFinder>(self, root_finder: S) -> NozzleSolver<S> {
        NozzleSolver {
            config: self.config,
            root_finder,
        }
    }

    pub fn solve(&self, inputs: &NozzleInputs) -> Result<NozzlePerformance, SimulationError> {
        inputs.validate()?;
        let NozzleConfig {
            gas_constant,
            standard_gravity,
        } = self.config;

        let area_ratio = inputs.area_ratio();
        let exit_mach = solve_exit_mach_with(&self.root_finder, area_ratio, inputs.gamma)?;

        let mass_flow_rate = choked_mass_flow(
            inputs.chamber_pressure,
            inputs.throat_area,
            inputs.gamma,
            inputs.chamber_temperature,
            gas_constant,
        );
        let exit = exit_conditions(
            inputs.chamber_temperature,
            inputs.chamber_pressure,
            inputs.gamma,
            exit_mach,
            gas_constant,
        );

        let thrust = mass_flow_rate * exit.velocity
            + (exit.pressure - inputs.ambient_pressure) * inputs.exit_area;
        let specific_impulse = thrust / (mass_flow_rate * standard_gravity);

        let performance = NozzlePerformance {
            area_ratio,
            exit_mach,
            exit_temperature: exit.temperature,
            exit_pressure: exit.pressure,
            exit_velocity: exit.velocity,
            mass_flow_rate,
            thrust,
            specific_impulse,
        };
        performance.check_finite()?;
        Ok(performance)
    }
}

impl NozzlePerformance {
    fn check_finite(&self) -> Result<(), SimulationError> {
        let fields = [
            ("exit temperature", self.exit_temperature),
            ("exit pressure", self.exit_pressure),
            ("exit velocity", self.exit_velocity),
            ("mass flow rate", self.mass_flow_rate),
            ("thrust", self.thrust),
            ("specific impulse", self.specific_impulse),
        ];
        match fields.iter().find(|(_, value)| !value.is_finite()) {
            Some((name, _)) => Err(SimulationError::NonFinite(*name)),
            None => Ok(()),
        }
    }
}

/// Solves `inputs` with the default gas constant, gravity and root finder.
pub fn solve_nozzle(inputs: &NozzleInputs) -> Result<NozzlePerformance, SimulationError> {
    NozzleSolver::default().solve(inputs)
}
