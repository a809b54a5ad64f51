//! High-level runtime engine settings
//!
//! Selects the integrator and its sub-mode used when building and running a `Scenario`.
//! A run uses exactly one scheme; the two are never mixed.

use crate::configuration::config::IntegratorConfig;
use crate::simulation::integrator::{EulerMode, VerletDamping};

#[derive(Debug, Clone)]
pub struct Engine {
    pub integrator: IntegratorConfig, // euler or verlet
    pub euler_mode: EulerMode, // explicit or semi-implicit, euler only
    pub verlet_damping: VerletDamping, // damped previous-displacement term, verlet only
}
