//! The rope: an ordered chain of masses joined by springs
//!
//! `Rope` owns every `Mass` and `Spring` exclusively. Spring `i` always connects
//! `masses[i]` and `masses[i + 1]`, so a rope of `n` nodes holds `n - 1` springs.

use tracing::debug;

use super::error::{ensure_finite, ensure_positive, Result, RopeError};
use super::forces::MIN_SPRING_LENGTH;
use super::integrator::{euler_integrator, verlet_integrator, EulerMode, VerletDamping};
use super::states::{Mass, NVec2, Spring};

/// Velocity damping used when none is configured
pub const DEFAULT_DAMPING_FACTOR: f64 = 5e-5;

#[derive(Debug, Clone)]
pub struct Rope {
    masses: Vec<Mass>,
    springs: Vec<Spring>,
    damping_factor: f64,
}

impl Rope {
    /// Build a rope of `num_nodes` evenly spaced masses from `start` to `end` inclusive
    ///
    /// Node `i` sits at `start + i * (end - start) / (num_nodes - 1)`. Every pair of
    /// neighbours is joined by a spring of stiffness `k` whose rest length is the
    /// initial spacing. Indices in `pinned_nodes` are pinned once all nodes exist.
    ///
    /// # Errors
    /// Fewer than two nodes, a pin index outside the rope, a non-positive or
    /// non-finite `node_mass`/`k`, non-finite endpoints, or `start == end`
    /// (a rest length too short to act on) are all rejected before anything is built.
    pub fn new(start: NVec2, end: NVec2, num_nodes: usize, node_mass: f64, k: f64, pinned_nodes: &[usize]) -> Result<Self> {
        if num_nodes < 2 {
            return Err(RopeError::TooFewNodes(num_nodes));
        }
        ensure_positive("node_mass", node_mass)?;
        ensure_positive("k", k)?;
        ensure_finite("start", start.as_slice())?;
        ensure_finite("end", end.as_slice())?;
        if let Some(&index) = pinned_nodes.iter().find(|&&i| i >= num_nodes) {
            return Err(RopeError::PinOutOfBounds { index, num_nodes });
        }

        // spacing between neighbouring nodes
        let spacing = (end - start) / (num_nodes - 1) as f64;

        let masses: Vec<Mass> = (0..num_nodes)
            .map(|i| Mass::new(start + spacing * i as f64, node_mass, false))
            .collect();

        let mut springs = Vec::with_capacity(num_nodes - 1);
        for i in 0..num_nodes - 1 {
            let spring = Spring::new(i, i + 1, k, &masses);
            if !spring.rest_length.is_finite() {
                return Err(RopeError::NonFinite { name: "rest_length" });
            }
            // shorter springs are skipped by the force pass and would never act
            if spring.rest_length < MIN_SPRING_LENGTH {
                return Err(RopeError::ZeroRestLength { index: i });
            }
            springs.push(spring);
        }

        let mut rope = Self {
            masses,
            springs,
            damping_factor: DEFAULT_DAMPING_FACTOR,
        };
        for &i in pinned_nodes {
            rope.masses[i].pinned = true;
        }

        debug!(
            num_nodes,
            rest_length = rope.springs[0].rest_length,
            pinned = ?pinned_nodes,
            "built rope"
        );

        Ok(rope)
    }

    /// Replace the velocity damping coefficient
    pub fn with_damping_factor(mut self, damping_factor: f64) -> Result<Self> {
        if !damping_factor.is_finite() {
            return Err(RopeError::NonFinite { name: "damping_factor" });
        }
        if damping_factor < 0.0 {
            return Err(RopeError::Negative { name: "damping_factor", value: damping_factor });
        }
        self.damping_factor = damping_factor;
        Ok(self)
    }

    pub fn damping_factor(&self) -> f64 {
        self.damping_factor
    }

    pub fn masses(&self) -> &[Mass] {
        &self.masses
    }

    /// Mutable access to the masses, for drivers that displace nodes between ticks
    pub fn masses_mut(&mut self) -> &mut [Mass] {
        &mut self.masses
    }

    pub fn springs(&self) -> &[Spring] {
        &self.springs
    }

    pub fn len(&self) -> usize {
        self.masses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.masses.is_empty()
    }

    pub fn positions(&self) -> impl Iterator<Item = NVec2> + '_ {
        self.masses.iter().map(|m| m.position)
    }

    /// Pin node `index` in place
    pub fn pin(&mut self, index: usize) -> Result<()> {
        let num_nodes = self.masses.len();
        let m = self
            .masses
            .get_mut(index)
            .ok_or(RopeError::PinOutOfBounds { index, num_nodes })?;
        m.pinned = true;
        Ok(())
    }

    /// Split borrow used by the integrators: masses are mutated, springs only read
    pub(crate) fn parts_mut(&mut self) -> (&mut [Mass], &[Spring]) {
        (self.masses.as_mut_slice(), self.springs.as_slice())
    }

    /// One semi-implicit Euler tick
    pub fn simulate_euler(&mut self, delta_t: f64, gravity: NVec2) -> Result<()> {
        self.simulate_euler_with(delta_t, gravity, EulerMode::SemiImplicit)
    }

    /// One Euler tick in the given `mode`
    pub fn simulate_euler_with(&mut self, delta_t: f64, gravity: NVec2, mode: EulerMode) -> Result<()> {
        self.check_step(delta_t, &gravity)?;
        let damping_factor = self.damping_factor;
        euler_integrator(self, delta_t, gravity, mode, damping_factor);
        Ok(())
    }

    /// One undamped Verlet tick
    pub fn simulate_verlet(&mut self, delta_t: f64, gravity: NVec2) -> Result<()> {
        self.simulate_verlet_with(delta_t, gravity, VerletDamping::Undamped)
    }

    /// One Verlet tick with the given damping policy
    pub fn simulate_verlet_with(&mut self, delta_t: f64, gravity: NVec2, damping: VerletDamping) -> Result<()> {
        self.check_step(delta_t, &gravity)?;
        let damping_factor = self.damping_factor;
        verlet_integrator(self, delta_t, gravity, damping, damping_factor);
        Ok(())
    }

    /// Reject step inputs and any mass state edited through `masses_mut` that would
    /// turn the tick into NaN/Inf, before anything is mutated
    fn check_step(&self, delta_t: f64, gravity: &NVec2) -> Result<()> {
        ensure_positive("delta_t", delta_t)?;
        ensure_finite("gravity", gravity.as_slice())?;

        for (index, m) in self.masses.iter().enumerate() {
            if !(m.mass.is_finite() && m.mass > 0.0) {
                return Err(RopeError::InvalidMass { index, field: "mass" });
            }
            let fields = [
                ("position", &m.position),
                ("last_position", &m.last_position),
                ("velocity", &m.velocity),
                ("forces", &m.forces),
            ];
            for (field, v) in fields {
                if !v.iter().all(|c| c.is_finite()) {
                    return Err(RopeError::InvalidMass { index, field });
                }
            }
        }
        Ok(())
    }

    // =========================================================================================
    // diagnostics
    // =========================================================================================

    /// Kinetic energy from stored velocities (meaningful for the Euler schemes)
    pub fn kinetic_energy(&self) -> f64 {
        self.masses
            .iter()
            .map(|m| 0.5 * m.mass * m.velocity.norm_squared())
            .sum()
    }

    /// Sum of current spring lengths
    pub fn total_length(&self) -> f64 {
        self.springs.iter().map(|s| s.length(&self.masses)).sum()
    }

    /// Largest |length - rest_length| over all springs
    pub fn max_extension(&self) -> f64 {
        self.springs
            .iter()
            .map(|s| (s.length(&self.masses) - s.rest_length).abs())
            .fold(0.0, f64::max)
    }
}

