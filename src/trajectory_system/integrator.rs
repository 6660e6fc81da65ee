use crate::{
    constants::{GRAVITY, MAX_TIME_STEPS, TIME_STEP},
    control::{flight_phase::FlightPhase, propulsion::PropulsionSystem},
    errors::{require_finite, require_non_negative, require_positive, SimulationError},
    telemetry_system::telemetry::{Sample, Telemetry},
};

use super::kinematics::Kinematics;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryConfig {
    /// Fixed integration step, s. Zero yields an empty run.
    pub time_step: f64,
    /// Uniform downward gravity, m/s². Must be positive.
    pub gravity: f64,
}

impl Default for TrajectoryConfig {
    fn default() -> Self {
        TrajectoryConfig {
            time_step: TIME_STEP,
            gravity: GRAVITY,
        }
    }
}

impl TrajectoryConfig {
    pub fn new(time_step: f64, gravity: f64) -> Result<Self, SimulationError> {
        let config = TrajectoryConfig { time_step, gravity };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), SimulationError> {
        require_non_negative("time step", self.time_step)?;
        require_positive("gravity", self.gravity)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchParameters {
    pub initial_velocity: f64,
    pub launch_angle_degrees: f64,
    pub thrust: f64,
    pub initial_mass: f64,
    pub fuel_mass: f64,
    pub burn_time: f64,
    pub total_time: f64,
    pub initial_height: f64,
}

impl LaunchParameters {
    pub fn validate(&self) -> Result<(), SimulationError> {
        require_non_negative("initial velocity", self.initial_velocity)?;
        require_finite("launch angle", self.launch_angle_degrees)?;
        require_non_negative("thrust", self.thrust)?;
        require_positive("initial mass", self.initial_mass)?;
        require_non_negative("fuel mass", self.fuel_mass)?;
        require_non_negative("burn time", self.burn_time)?;
        require_non_negative("total simulation time", self.total_time)?;
        require_finite("initial height", self.initial_height)?;

        if self.fuel_mass > self.initial_mass {
            return Err(SimulationError::InvalidInput(format!(
                "fuel mass ({} kg) exceeds initial total mass ({} kg)",
                self.fuel_mass, self.initial_mass
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Termination {
    /// The step starting at `time` ended below ground and was discarded.
    GroundImpact { time: f64 },
    HorizonReached,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightOutcome {
    pub termination: Termination,
    /// Mass carried when the loop stopped, including any discarded step.
    pub end_mass: f64,
    pub burnout_time: Option<f64>,
    pub samples: usize,
}

pub struct TrajectoryIntegrator {
    params: LaunchParameters,
    config: TrajectoryConfig,
    propulsion: PropulsionSystem,
    grid_points: usize,
}

/// Grid size `n + 1` for `n = round(total_time / dt)`; zero when `dt` is zero.
fn grid_size(total_time: f64, time_step: f64) -> Result<usize, SimulationError> {
    if time_step == 0.0 {
        return Ok(0);
    }
    let steps = (total_time / time_step).round();
    if !steps.is_finite() || steps > MAX_TIME_STEPS {
        return Err(SimulationError::InvalidInput(format!(
            "total time {total_time} s at a {time_step} s step exceeds {MAX_TIME_STEPS} steps"
        )));
    }
    (steps as usize).checked_add(1).ok_or_else(|| {
        SimulationError::InvalidInput(format!("step count {steps} does not fit the time grid"))
    })
}

impl TrajectoryIntegrator {
    pub fn new(
        params: LaunchParameters,
        config: TrajectoryConfig,
    ) -> Result<Self, SimulationError> {
        params.validate()?;
        config.validate()?;
        let grid_points = grid_size(params.total_time, config.time_step)?;

        let propulsion = PropulsionSystem::new(
            params.thrust,
            params.initial_mass,
            params.fuel_mass,
            params.burn_time,
        );

        Ok(TrajectoryIntegrator {
            params,
            config,
            propulsion,
            grid_points,
        })
    }

    /// Number of grid points `t_i = i * dt` for `i` in `0..=n`, with `n` rounded
    /// from `total_time / dt`. Zero when the time step is zero.
    pub fn grid_points(&self) -> usize {
        self.grid_points
    }

    /// Integrates the flight, handing each accepted sample to `observer` as it is produced.
    pub fn run<F: FnMut(&Sample)>(&self, mut observer: F) -> FlightOutcome {
        let dt = self.config.time_step;
        let mut kinematics = Kinematics::new(
            self.params.launch_angle_degrees,
            self.params.initial_velocity,
            self.params.initial_height,
            self.params.initial_mass,
            self.config.gravity,
        );
        let mut phase = FlightPhase::Thrusting;
        let mut burnout_time = None;
        let mut termination = Termination::HorizonReached;
        let mut samples = 0;

        for step in 0..self.grid_points {
            let time = step as f64 * dt;

            let next_phase = phase.next(time, kinematics.mass, &self.propulsion);
            if phase.is_thrusting()
                && !next_phase.is_thrusting()
                && self.propulsion.mass_flow_rate > 0.0
            {
                burnout_time = Some(time);
            }
            phase = next_phase;

            kinematics.update(dt, phase, &self.propulsion);
            if kinematics.is_below_ground() {
                termination = Termination::GroundImpact { time };
                break;
            }

            observer(&Sample {
                time,
                x: kinematics.position.x,
                y: kinematics.position.y,
                speed: kinematics.speed(),
                mass: kinematics.mass,
            });
            samples += 1;
        }

        FlightOutcome {
            termination,
            end_mass: kinematics.mass,
            burnout_time,
            samples,
        }
    }

    /// Runs the whole flight and buffers every sample.
    pub fn simulate(&self) -> Telemetry {
        let mut samples = Vec::with_capacity(self.grid_points.min(100_000));
        let outcome = self.run(|sample| samples.push(*sample));
        Telemetry::new(samples, outcome, &self.params, self.config.gravity)
    }
}

/// Simulates `params` with the default 0.01 s step and 9.81 m/s² gravity.
pub fn simulate(params: LaunchParameters) -> Result<Telemetry, SimulationError> {
    Ok(TrajectoryIntegrator::new(params, TrajectoryConfig::default())?.simulate())
}
