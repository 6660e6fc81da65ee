use crate::errors::SimulationError;
use crate::trajectory_system::integrator::{FlightOutcome, LaunchParameters, Termination};

/// State recorded after one accepted integration step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub time: f64,
    pub x: f64,
    pub y: f64,
    pub speed: f64,
    pub mass: f64,
}

/// Which mass the thrust-to-weight ratio is referred to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThrustToWeightBasis {
    /// Liftoff mass, `T / (m0 * g)`.
    #[default]
    InitialMass,
    /// Mass left when the run stopped.
    FinalMass,
}

/// Recorded flight plus the metrics derived from it.
#[derive(Debug, Clone)]
pub struct Telemetry {
    samples: Vec<Sample>,
    outcome: FlightOutcome,
    initial_mass: f64,
    thrust: f64,
    gravity: f64,
}

impl Telemetry {
    pub fn new(
        samples: Vec<Sample>,
        outcome: FlightOutcome,
        params: &LaunchParameters,
        gravity: f64,
    ) -> Self {
        Telemetry {
            samples,
            outcome,
            initial_mass: params.initial_mass,
            thrust: params.thrust,
            gravity,
        }
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn termination(&self) -> Termination {
        self.outcome.termination
    }

    pub fn burnout_time(&self) -> Option<f64> {
        self.outcome.burnout_time
    }

    pub fn final_mass(&self) -> f64 {
        self.samples
            .last()
            .map_or(self.initial_mass, |sample| sample.mass)
    }

    pub fn max_height(&self) -> f64 {
        self.samples
            .iter()
            .map(|sample| sample.y)
            .reduce(f64::max)
            .unwrap_or(0.0)
    }

    pub fn range(&self) -> f64 {
        self.samples.last().map_or(0.0, |sample| sample.x)
    }

    pub fn max_speed(&self) -> f64 {
        self.samples
            .iter()
            .map(|sample| sample.speed)
            .fold(0.0, f64::max)
    }

    /// Fails with `NonFinite` when the referenced weight is zero, e.g. a rocket
    /// that burned down to zero dry mass.
    pub fn thrust_to_weight(&self, basis: ThrustToWeightBasis) -> Result<f64, SimulationError> {
        let mass = match basis {
            ThrustToWeightBasis::InitialMass => self.initial_mass,
            ThrustToWeightBasis::FinalMass => self.outcome.end_mass,
        };
        let ratio = self.thrust / (mass * self.gravity);
        if ratio.is_finite() {
            Ok(ratio)
        } else {
            Err(SimulationError::NonFinite("thrust-to-weight ratio"))
        }
    }

    /// Height against downrange distance.
    pub fn trajectory_series(&self) -> Vec<(f64, f64)> {
        self.samples.iter().map(|s| (s.x, s.y)).collect()
    }

    pub fn speed_series(&self) -> Vec<(f64, f64)> {
        self.samples.iter().map(|s| (s.time, s.speed)).collect()
    }

    pub fn mass_series(&self) -> Vec<(f64, f64)> {
        self.samples.iter().map(|s| (s.time, s.mass)).collect()
    }

    fn format_time(elapsed_time: f64) -> String {
        if elapsed_time >= 60.0 {
            let minutes = (elapsed_time / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}m {:.2}s", minutes, seconds)
        } else {
            format!("{:.2}s", elapsed_time)
        }
    }

    /// Human-readable results block printed by the trajectory binary.
    pub fn summary(&self) -> String {
        let mut lines = vec![
            format!("Final Mass: {:.2} kg", self.final_mass()),
            format!("Max Height: {:.2} m", self.max_height()),
            format!("Range: {:.2} m", self.range()),
            format!("Max Speed: {:.2} m/s", self.max_speed()),
        ];
        if let Some(time) = self.burnout_time() {
            lines.push(format!("Burnout at: {}", Self::format_time(time)));
        }
        lines.push(match self.termination() {
            Termination::GroundImpact { time } => {
                format!("Ground impact at: {}", Self::format_time(time))
            }
            Termination::HorizonReached => "Simulation horizon reached".to_string(),
        });
        lines.join("\n")
    }
}
