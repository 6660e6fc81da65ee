use crate::utils::vector2d::Vector2D;

/// Constant-thrust motor that burns its propellant at a linear rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropulsionSystem {
    pub thrust: f64,
    pub mass_flow_rate: f64,
    pub dry_mass: f64,
    pub burn_time: f64,
}

impl PropulsionSystem {
    pub fn new(thrust: f64, initial_mass: f64, fuel_mass: f64, burn_time: f64) -> Self {
        let mass_flow_rate = if burn_time <= 0.0 || fuel_mass <= 0.0 {
            0.0
        } else {
            fuel_mass / burn_time
        };

        PropulsionSystem {
            thrust,
            mass_flow_rate,
            dry_mass: initial_mass - fuel_mass,
            burn_time,
        }
    }

    /// Whether the motor still produces thrust at `elapsed_time` with `mass` on board.
    pub fn can_fire(&self, elapsed_time: f64, mass: f64) -> bool {
        elapsed_time <= self.burn_time && mass > self.dry_mass && self.mass_flow_rate > 0.0
    }

    /// Mass remaining after burning for `delta_time`; never drops below dry mass.
    pub fn burn(&self, mass: f64, delta_time: f64) -> f64 {
        (mass - self.mass_flow_rate * delta_time).max(self.dry_mass)
    }

    pub fn thrust_acceleration(&self, mass: f64, direction: f64) -> Vector2D {
        Vector2D::from_polar(self.thrust / mass, direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_propulsion_system() {
        let ps = PropulsionSystem::new(500.0, 10.0, 4.0, 2.0);
        assert_eq!(ps.mass_flow_rate, 2.0);
        assert_eq!(ps.dry_mass, 6.0);
        assert_eq!(ps.thrust, 500.0);
    }

    #[test]
    fn test_zero_burn_time_disables_flow() {
        let ps = PropulsionSystem::new(500.0, 10.0, 4.0, 0.0);
        assert_eq!(ps.mass_flow_rate, 0.0);
        assert!(!ps.can_fire(0.0, 10.0));
    }

    #[test]
    fn test_zero_fuel_disables_flow() {
        let ps = PropulsionSystem::new(500.0, 10.0, 0.0, 5.0);
        assert_eq!(ps.mass_flow_rate, 0.0);
        assert!(!ps.can_fire(0.0, 10.0));
    }

    #[test]
    fn test_burn_is_clamped_at_dry_mass() {
        let ps = PropulsionSystem::new(500.0, 10.0, 4.0, 2.0);
        assert_relative_eq!(ps.burn(10.0, 0.5), 9.0);
        assert_eq!(ps.burn(6.5, 1.0), 6.0);
        assert_eq!(ps.burn(6.0, 1.0), 6.0);
    }

    #[test]
    fn test_can_fire_window() {
        let ps = PropulsionSystem::new(500.0, 10.0, 4.0, 2.0);
        assert!(ps.can_fire(0.0, 10.0));
        assert!(ps.can_fire(2.0, 7.0));
        assert!(!ps.can_fire(2.01, 7.0));
        assert!(!ps.can_fire(1.0, 6.0));
    }

    #[test]
    fn test_thrust_acceleration_follows_direction() {
        let ps = PropulsionSystem::new(500.0, 10.0, 4.0, 2.0);
        let a = ps.thrust_acceleration(10.0, 90f64.to_radians());
        assert_relative_eq!(a.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(a.y, 50.0, epsilon = 1e-12);
    }
}
