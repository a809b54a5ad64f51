//! Fixed-step time integrators for the rope
//!
//! Provides explicit / semi-implicit Euler and a position Verlet scheme with
//! length-constraint projection. Each step runs its passes strictly in order:
//! all spring forces are accumulated before any mass is integrated.

use serde::Deserialize;

use super::forces::{accumulate_spring_forces, damping_force, project_constraints};
use super::rope::Rope;
use super::states::NVec2;

/// Which flavour of Euler update to apply
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EulerMode {
    #[serde(rename = "explicit")] // x_n+1 uses the old velocity
    Explicit,

    #[default]
    #[serde(rename = "semi_implicit")] // x_n+1 uses the new velocity, stable for stiff springs
    SemiImplicit,
}

/// Whether the verlet previous-displacement term is damped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerletDamping {
    #[default]
    Undamped,
    /// Scale `x_n - x_n-1` by `1 - damping_factor`
    Damped,
}

impl From<bool> for VerletDamping {
    fn from(damped: bool) -> Self {
        if damped { VerletDamping::Damped } else { VerletDamping::Undamped }
    }
}

/// Advance the rope by one Euler step of size `delta_t`
/// Inputs are assumed validated by the caller ([`Rope::simulate_euler_with`])
pub(crate) fn euler_integrator(rope: &mut Rope, delta_t: f64, gravity: NVec2, mode: EulerMode, damping_factor: f64) {
    let (masses, springs) = rope.parts_mut();

    // Pass 1: Hooke's law on every spring
    accumulate_spring_forces(masses, springs);

    // Pass 2: integrate free masses, then clear every accumulator
    for m in masses.iter_mut() {
        if !m.pinned {
            m.forces += damping_force(&m.velocity, damping_factor);
            m.forces += gravity;
            // F = ma
            let acceleration = m.forces / m.mass;

            match mode {
                EulerMode::Explicit => {
                    // x_n+1 = x_n + v_n * dt
                    m.position += m.velocity * delta_t;
                    // v_n+1 = v_n + a_n * dt
                    m.velocity += acceleration * delta_t;
                }
                EulerMode::SemiImplicit => {
                    // v_n+1 = v_n + a_n * dt
                    m.velocity += acceleration * delta_t;
                    // x_n+1 = x_n + v_n+1 * dt
                    m.position += m.velocity * delta_t;
                }
            }
        }
        m.forces = NVec2::zeros();
    }
}

/// Advance the rope by one Verlet step of size `delta_t`
/// Inputs are assumed validated by the caller ([`Rope::simulate_verlet_with`])
pub(crate) fn verlet_integrator(rope: &mut Rope, delta_t: f64, gravity: NVec2, damping: VerletDamping, damping_factor: f64) {
    let (masses, springs) = rope.parts_mut();
    let dt2 = delta_t * delta_t;

    // chosen once so every mass in the tick sees the same policy
    let carry = match damping {
        VerletDamping::Undamped => 1.0,
        VerletDamping::Damped => 1.0 - damping_factor,
    };

    // Pass 1: spring forces
    accumulate_spring_forces(masses, springs);

    // Pass 2: project positions toward rest length
    project_constraints(masses, springs);

    // Pass 3: x_n+1 = x_n + carry * (x_n - x_n-1) + a_n * dt^2
    for m in masses.iter_mut() {
        if !m.pinned {
            let previous = m.position;
            m.forces += gravity;
            m.position += carry * (previous - m.last_position) + m.forces / m.mass * dt2;
            m.last_position = previous;
        }
        m.forces = NVec2::zeros();
    }
}
