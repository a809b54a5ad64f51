//! Core state types for the rope simulation.
//!
//! Defines the two leaf entities of the chain:
//! - `Mass`   point particle carrying position, velocity and a force accumulator
//! - `Spring` ideal connector between two masses, referenced by index
//!
//! Both are owned by a [`Rope`](crate::simulation::rope::Rope); springs never hold
//! references into the mass storage, only indices.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct Mass {
    pub position: NVec2, // current position
    pub last_position: NVec2, // position at the previous tick (verlet only)
    pub velocity: NVec2, // velocity (euler only)
    pub forces: NVec2, // force accumulator, zeroed at the end of every tick
    pub mass: f64, // mass
    pub pinned: bool, // pinned masses are never moved by an integrator
}

impl Mass {
    /// Create a mass at rest at `position`
    pub fn new(position: NVec2, mass: f64, pinned: bool) -> Self {
        Self {
            position,
            last_position: position,
            velocity: NVec2::zeros(),
            forces: NVec2::zeros(),
            mass,
            pinned,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    pub m1: usize, // index of the first endpoint
    pub m2: usize, // index of the second endpoint
    pub k: f64, // stiffness
    pub rest_length: f64, // fixed at creation
}

impl Spring {
    /// Connect `masses[m1]` and `masses[m2]`
    /// The rest length is the distance between the two endpoints right now and is
    /// never recomputed afterwards
    pub(crate) fn new(m1: usize, m2: usize, k: f64, masses: &[Mass]) -> Self {
        let rest_length = (masses[m2].position - masses[m1].position).norm();
        Self { m1, m2, k, rest_length }
    }

    pub fn endpoints(&self) -> (usize, usize) {
        (self.m1, self.m2)
    }

    /// Current length of the spring given the mass storage it indexes into
    pub fn length(&self, masses: &[Mass]) -> f64 {
        (masses[self.m2].position - masses[self.m1].position).norm()
    }
}
