//! Closed-form isentropic flow relations for a converging-diverging nozzle.

/// Area ratio `A/A*` reached at Mach `mach` for a gas with specific heat ratio `gamma`.
///
/// Every ratio above one is reached twice, once subsonic and once supersonic.
pub fn area_mach_relation(mach: f64, gamma: f64) -> f64 {
    let term1 = 2.0 / (gamma + 1.0);
    let term2 = 1.0 + (gamma - 1.0) / 2.0 * mach.powi(2);
    let exponent = (gamma + 1.0) / (2.0 * (gamma - 1.0));
    (1.0 / mach) * (term1 * term2).powf(exponent)
}

/// Mass flow through a choked throat, independent of downstream conditions.
pub fn choked_mass_flow(
    chamber_pressure: f64,
    throat_area: f64,
    gamma: f64,
    chamber_temperature: f64,
    gas_constant: f64,
) -> f64 {
    (chamber_pressure * throat_area / chamber_temperature.sqrt())
        * (gamma / gas_constant).sqrt()
        * (2.0 / (gamma + 1.0)).powf((gamma + 1.0) / (2.0 * (gamma - 1.0)))
}

/// Static state of the flow leaving the nozzle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExitState {
    pub temperature: f64,
    pub pressure: f64,
    pub velocity: f64,
}

pub fn exit_conditions(
    chamber_temperature: f64,
    chamber_pressure: f64,
    gamma: f64,
    exit_mach: f64,
    gas_constant: f64,
) -> ExitState {
    let temperature = chamber_temperature / (1.0 + (gamma - 1.0) / 2.0 * exit_mach.powi(2));
    let pressure =
        chamber_pressure * (temperature / chamber_temperature).powf(gamma / (gamma - 1.0));
    let velocity = exit_mach * (gamma * gas_constant * temperature).sqrt();

    ExitState {
        temperature,
        pressure,
        velocity,
    }
}
