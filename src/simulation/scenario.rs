//! Build fully-initialized rope scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime bundle
//! containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - the rope at t = 0
//!
//! A driver then calls [`Scenario::step`] once per tick and reads node positions
//! back from [`Scenario::rope`].

use tracing::{debug, info, instrument, trace};

use crate::configuration::config::{IntegratorConfig, ScenarioConfig};
use crate::simulation::engine::Engine;
use crate::simulation::error::{ensure_positive, Result, RopeError};
use crate::simulation::params::Parameters;
use crate::simulation::rope::Rope;
use crate::simulation::states::NVec2;

/// A fully-initialized rope run: the engine settings, parameters, rope state and
/// the current simulation time
#[derive(Debug, Clone)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub rope: Rope,
    pub t: f64,
}

impl Scenario {
    #[instrument(skip_all, fields(integrator = ?cfg.engine.integrator, num_nodes = cfg.rope.num_nodes))]
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        ensure_positive("h0", p_cfg.h0)?;
        if !(p_cfg.t_end.is_finite() && p_cfg.t_end >= 0.0) {
            return Err(RopeError::InvalidConfig(format!("t_end must be finite and >= 0, got {}", p_cfg.t_end)));
        }
        let parameters = Parameters {
            t_end: p_cfg.t_end,
            h0: p_cfg.h0,
            damping_factor: p_cfg.damping_factor,
            gravity: NVec2::new(p_cfg.gravity[0], p_cfg.gravity[1]),
        };

        // Engine (runtime) from EngineConfig
        let e_cfg = cfg.engine;
        let engine = Engine {
            integrator: e_cfg.integrator,
            euler_mode: e_cfg.euler_mode,
            verlet_damping: e_cfg.verlet_damping.into(),
        };

        // Rope: map `RopeConfig` -> runtime `Rope` using nalgebra vectors
        let r_cfg = cfg.rope;
        let rope = Rope::new(
            NVec2::new(r_cfg.start[0], r_cfg.start[1]),
            NVec2::new(r_cfg.end[0], r_cfg.end[1]),
            r_cfg.num_nodes,
            r_cfg.node_mass,
            r_cfg.k,
            &r_cfg.pinned_nodes,
        )?
        .with_damping_factor(parameters.damping_factor)?;

        debug!(?engine, ?parameters, "scenario built");

        Ok(Self {
            engine,
            parameters,
            rope,
            t: 0.0,
        })
    }

    /// Advance the rope by one tick of `h0` with the configured integrator
    pub fn step(&mut self) -> Result<()> {
        let dt = self.parameters.h0;
        let gravity = self.parameters.gravity;

        match self.engine.integrator {
            IntegratorConfig::Euler => self.rope.simulate_euler_with(dt, gravity, self.engine.euler_mode)?,
            IntegratorConfig::Verlet => self.rope.simulate_verlet_with(dt, gravity, self.engine.verlet_damping)?,
        }

        self.t += dt;
        trace!(t = self.t, max_extension = self.rope.max_extension(), "tick");
        Ok(())
    }

    /// Step until `t_end` is reached, returning the number of ticks taken
    pub fn run(&mut self) -> Result<usize> {
        let mut ticks = 0;
        // half-step slack so accumulated rounding doesn't add a tick
        while self.t + 0.5 * self.parameters.h0 < self.parameters.t_end {
            self.step()?;
            ticks += 1;
        }

        info!(
            ticks,
            t = self.t,
            total_length = self.rope.total_length(),
            max_extension = self.rope.max_extension(),
            kinetic_energy = self.rope.kinetic_energy(),
            "run finished"
        );
        Ok(ticks)
    }
}
