pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{Mass, Spring, NVec2};
pub use simulation::error::{RopeError, Result};
pub use simulation::rope::{Rope, DEFAULT_DAMPING_FACTOR};
pub use simulation::integrator::{EulerMode, VerletDamping};
pub use simulation::scenario::Scenario;

pub use configuration::config::{IntegratorConfig, EngineConfig, ParametersConfig, RopeConfig, ScenarioConfig};

pub use benchmark::benchmark::bench_step;
