//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - fixed logical time step,
//! - restitution coefficient for body-body impulses,
//! - scene population settings (body count, velocity range),
//! - random seed

#[derive(Debug, Clone)]
pub struct Parameters {
    pub dt: f64, // fixed time step, 1/60 by convention
    pub restitution: f64, // 1.0 = perfectly elastic
    pub body_count: usize, // population size, fixed per run
    pub vel_range: f64, // velocity components sampled in [-vel_range, vel_range]
    pub seed: u64, // deterministic seed to make runs reproducible
}
