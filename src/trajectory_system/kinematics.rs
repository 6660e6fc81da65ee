use crate::{
    control::{flight_phase::FlightPhase, propulsion::PropulsionSystem},
    utils::vector2d::Vector2D,
};

/// Point-mass state advanced by semi-implicit Euler steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kinematics {
    pub position: Vector2D,
    pub velocity: Vector2D,
    pub acceleration: Vector2D,
    pub mass: f64,
    /// Thrust direction in radians; fixed for the whole flight.
    pub launch_angle: f64,
    pub gravity: f64,
}

impl Kinematics {
    pub fn new(
        launch_angle_degrees: f64,
        initial_speed: f64,
        initial_height: f64,
        initial_mass: f64,
        gravity: f64,
    ) -> Self {
        let launch_angle = launch_angle_degrees.to_radians();
        Kinematics {
            position: Vector2D::new(0.0, initial_height),
            velocity: Vector2D::from_polar(initial_speed, launch_angle),
            acceleration: Vector2D::ZERO,
            mass: initial_mass,
            launch_angle,
            gravity,
        }
    }

    /// Advances one step: burn propellant if thrusting, then velocity, then position.
    pub fn update(&mut self, delta_time: f64, phase: FlightPhase, propulsion: &PropulsionSystem) {
        let gravity = Vector2D::new(0.0, -self.gravity);

        self.acceleration = match phase {
            FlightPhase::Thrusting => {
                self.mass = propulsion.burn(self.mass, delta_time);
                propulsion.thrust_acceleration(self.mass, self.launch_angle) + gravity
            }
            FlightPhase::Coasting => gravity,
        };

        self.velocity += self.acceleration * delta_time;
        self.position += self.velocity * delta_time;
    }

    pub fn speed(&self) -> f64 {
        self.velocity.magnitude()
    }

    pub fn is_below_ground(&self) -> bool {
        self.position.y < 0.0
    }
}
