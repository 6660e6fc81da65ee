pub mod integrator;
pub mod kinematics;
