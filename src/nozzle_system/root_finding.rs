use crate::constants::{BISECTION_UPPER_MACH, DERIVATIVE_STEP, INITIAL_MACH_GUESS, NEWTON_ITERATIONS};
use crate::errors::SimulationError;

const MAX_STEP_HALVINGS: u32 = 64;

/// Result of a one-dimensional root search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootEstimate {
    pub root: f64,
    pub iterations: usize,
    /// `|f(root)|`
    pub residual: f64,
}

/// Strategy for solving `f(x) = 0`, swappable behind the nozzle solver.
pub trait RootFinder {
    fn find_root(&self, f: &dyn Fn(f64) -> f64) -> Result<RootEstimate, SimulationError>;
}

/// Newton's method with a central finite-difference derivative.
///
/// With `tolerance` unset the full iteration budget is spent; the loop only
/// stops early when the derivative estimate vanishes, which happens once the
/// iterate sits on the root to rounding precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonRaphson {
    pub initial_guess: f64,
    pub max_iterations: usize,
    pub derivative_step: f64,
    pub tolerance: Option<f64>,
}

impl Default for NewtonRaphson {
    fn default() -> Self {
        NewtonRaphson {
            initial_guess: INITIAL_MACH_GUESS,
            max_iterations: NEWTON_ITERATIONS,
            derivative_step: DERIVATIVE_STEP,
            tolerance: None,
        }
    }
}

impl NewtonRaphson {
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = Some(tolerance);
        self
    }

    fn derivative(&self, f: &dyn Fn(f64) -> f64, x: f64) -> f64 {
        let h = self.derivative_step;
        (f(x + h) - f(x - h)) / (2.0 * h)
    }
}

impl RootFinder for NewtonRaphson {
    fn find_root(&self, f: &dyn Fn(f64) -> f64) -> Result<RootEstimate, SimulationError> {
        let mut x = self.initial_guess;
        let mut iterations = 0;

        while iterations < self.max_iterations {
            let fx = f(x);
            let dfx = self.derivative(f, x);
            if dfx == 0.0 || !dfx.is_finite() {
                break;
            }

            // Pull back overshoots that land where `f` overflows.
            let mut step = fx / dfx;
            let mut next = x - step;
            let mut halvings = 0;
            while !(next.is_finite() && f(next).is_finite()) && halvings < MAX_STEP_HALVINGS {
                step *= 0.5;
                next = x - step;
                halvings += 1;
            }
            x = next;
            iterations += 1;

            if !x.is_finite() {
                return Err(SimulationError::NonConvergence {
                    iterations,
                    residual: fx.abs(),
                });
            }
            if self.tolerance.is_some_and(|tol| step.abs() <= tol) {
                break;
            }
        }

        let residual = f(x).abs();
        if !residual.is_finite() {
            return Err(SimulationError::NonConvergence {
                iterations,
                residual,
            });
        }

        Ok(RootEstimate {
            root: x,
            iterations,
            residual,
        })
    }
}

/// Interval halving on a bracket with a sign change. Slower than Newton but
/// cannot leave the bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bisection {
    pub lower: f64,
    pub upper: f64,
    pub max_iterations: usize,
    pub tolerance: f64,
}

impl Default for Bisection {
    fn default() -> Self {
        Bisection {
            lower: 1.0,
            upper: BISECTION_UPPER_MACH,
            max_iterations: 200,
            tolerance: 1e-12,
        }
    }
}

impl RootFinder for Bisection {
    fn find_root(&self, f: &dyn Fn(f64) -> f64) -> Result<RootEstimate, SimulationError> {
        let (mut lo, mut hi) = (self.lower, self.upper);
        let mut f_lo = f(lo);
        let f_hi = f(hi);

        if f_lo == 0.0 {
            return Ok(RootEstimate {
                root: lo,
                iterations: 0,
                residual: 0.0,
            });
        }
        if f_hi == 0.0 {
            return Ok(RootEstimate {
                root: hi,
                iterations: 0,
                residual: 0.0,
            });
        }
        if !(f_lo.is_finite() && f_hi.is_finite()) || f_lo.signum() == f_hi.signum() {
            return Err(SimulationError::InvalidInput(format!(
                "no sign change on bracket [{lo}, {hi}]"
            )));
        }

        let mut iterations = 0;
        let mut mid = 0.5 * (lo + hi);
        while iterations < self.max_iterations && hi - lo > self.tolerance {
            mid = 0.5 * (lo + hi);
            let f_mid = f(mid);
            iterations += 1;
            if f_mid == 0.0 {
                break;
            }
            if f_mid.signum() == f_lo.signum() {
                lo = mid;
                f_lo = f_mid;
            } else {
                hi = mid;
            }
        }

        Ok(RootEstimate {
            root: mid,
            iterations,
            residual: f(mid).abs(),
        })
    }
}
