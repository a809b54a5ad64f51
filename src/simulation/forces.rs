//! Force contributors and position constraints for the rope
//!
//! Hookean spring forces are shared by both integrators. The verlet scheme
//! additionally projects each spring back toward its rest length.

use crate::simulation::states::{Mass, Spring, NVec2};

/// Below this length a spring's direction is undefined and it is skipped for the tick
pub const MIN_SPRING_LENGTH: f64 = 1e-12;

/// Hookean force acting on `m2` of `spring` (the force on `m1` is its negation)
/// Returns `None` when the endpoints coincide and no direction exists
pub fn spring_force(spring: &Spring, masses: &[Mass]) -> Option<NVec2> {
    // direction points from m1 to m2
    let direction = masses[spring.m2].position - masses[spring.m1].position;
    let length = direction.norm();
    if length < MIN_SPRING_LENGTH {
        return None;
    }

    // stretched -> pulls m2 back toward m1, compressed -> pushes it away
    Some(-spring.k * (length - spring.rest_length) * direction / length)
}

/// Accumulate every spring's force into the `forces` of its endpoints
/// Equal and opposite: `+f` on `m2`, `-f` on `m1`
pub fn accumulate_spring_forces(masses: &mut [Mass], springs: &[Spring]) {
    for s in springs {
        if let Some(force) = spring_force(s, masses) {
            masses[s.m1].forces -= force;
            masses[s.m2].forces += force;
        }
    }
}

/// Linear velocity damping, `f_d = -k_d * v`
pub fn damping_force(velocity: &NVec2, damping_factor: f64) -> NVec2 {
    -damping_factor * *velocity
}

/// Move the endpoints of every spring toward its rest length
///
/// The correction is `direction * (length - rest) / length`. A spring with two free
/// endpoints splits it half/half, a spring with one pinned endpoint gives the whole
/// correction to the free one, and a spring pinned at both ends is left alone.
/// Springs are relaxed one after another, so later springs see earlier corrections.
pub fn project_constraints(masses: &mut [Mass], springs: &[Spring]) {
    for s in springs {
        let direction = masses[s.m2].position - masses[s.m1].position;
        let length = direction.norm();
        if length < MIN_SPRING_LENGTH {
            continue;
        }
        let correction = direction * ((length - s.rest_length) / length);

        match (masses[s.m1].pinned, masses[s.m2].pinned) {
            (false, false) => {
                masses[s.m1].position += 0.5 * correction;
                masses[s.m2].position -= 0.5 * correction;
            }
            (false, true) => masses[s.m1].position += correction,
            (true, false) => masses[s.m2].position -= correction,
            (true, true) => {}
        }
    }
}
