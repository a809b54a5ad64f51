//! Configuration types for loading rope scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! rope scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – which integrator to run and its sub-mode
//! - [`ParametersConfig`] – step size, end time, damping and gravity
//! - [`RopeConfig`]       – geometry and material of the chain
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   integrator: "euler"           # or "verlet"
//!   euler_mode: "semi_implicit"   # or "explicit" (optional)
//!   verlet_damping: false         # optional
//!
//! parameters:
//!   t_end: 5.0                    # total simulation time
//!   h0: 0.01                      # fixed step size
//!   damping_factor: 5.0e-5        # optional
//!   gravity: [ 0.0, -9.8 ]
//!
//! rope:
//!   start: [ 0.0, 0.0 ]
//!   end: [ 10.0, 0.0 ]
//!   num_nodes: 5
//!   node_mass: 1.0
//!   k: 100.0
//!   pinned_nodes: [ 0 ]
//! ```
//!
//! The scenario builder validates these values and maps them into the runtime
//! [`Scenario`](crate::simulation::scenario::Scenario).

use serde::Deserialize;

use crate::simulation::integrator::EulerMode;
use crate::simulation::rope::DEFAULT_DAMPING_FACTOR;

/// Which integrator the engine steps the rope with
/// `integrator: "euler"` or `integrator: "verlet"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum IntegratorConfig {
    #[serde(rename = "euler")] // Explicit or semi-implicit Euler with velocity damping
    Euler,

    #[serde(rename = "verlet")] // Position Verlet with rest-length constraint projection
    Verlet,
}

/// Engine configuration
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub integrator: IntegratorConfig, // Time integrator used for advancing the rope
    #[serde(default)]
    pub euler_mode: EulerMode, // Defaults to semi-implicit
    #[serde(default)]
    pub verlet_damping: bool, // Damp the verlet displacement term, off by default
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub t_end: f64, // time end
    pub h0: f64, // time step size
    #[serde(default = "default_damping_factor")]
    pub damping_factor: f64, // velocity damping coefficient
    pub gravity: [f64; 2], // gravitational acceleration
}

fn default_damping_factor() -> f64 {
    DEFAULT_DAMPING_FACTOR
}

/// Initial geometry and material of the rope
#[derive(Deserialize, Debug, Clone)]
pub struct RopeConfig {
    pub start: [f64; 2], // position of node 0
    pub end: [f64; 2], // position of the last node
    pub num_nodes: usize, // at least 2
    pub node_mass: f64, // mass of every node
    pub k: f64, // spring stiffness
    #[serde(default)]
    pub pinned_nodes: Vec<usize>, // indices of nodes fixed in place
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig, // Integrator selection
    pub parameters: ParametersConfig, // Global numerical and physical parameters
    pub rope: RopeConfig, // The chain to simulate
}
