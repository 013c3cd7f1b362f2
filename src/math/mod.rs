// src/math/mod.rs

pub mod integrator;

pub use integrator::analytic_angle;
pub use integrator::euler_step;
pub use integrator::runge_kutta4_step;
