use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Root solve did not converge after {iterations} iterations (residual {residual:e})")]
    NonConvergence { iterations: usize, residual: f64 },

    #[error("Computation produced a non-finite {0}")]
    NonFinite(&'static str),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input ended unexpectedly (EOF)")]
    InputEnded,

    #[error("Plot error: {0}")]
    PlotError(String),
}

/// Rejects NaN and infinities with a message naming the offending quantity.
pub(crate) fn require_finite(name: &str, value: f64) -> Result<f64, SimulationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SimulationError::InvalidInput(format!(
            "{name} must be a finite number, got {value}"
        )))
    }
}

pub(crate) fn require_positive(name: &str, value: f64) -> Result<f64, SimulationError> {
    require_finite(name, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(SimulationError::InvalidInput(format!(
            "{name} must be positive, got {value}"
        )))
    }
}

pub(crate) fn require_non_negative(name: &str, value: f64) -> Result<f64, SimulationError> {
    require_finite(name, value)?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(SimulationError::InvalidInput(format!(
            "{name} cannot be negative, got {value}"
        )))
    }
}
