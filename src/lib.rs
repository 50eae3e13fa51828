pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, Cell, NVec2, System};
pub use simulation::params::Parameters;
pub use simulation::grid::SpatialGrid;
pub use simulation::engine::step;
pub use simulation::integrator::{integrate, sync_cells};
pub use simulation::collisions::{resolve_border, resolve_collisions, resolve_pair};
pub use simulation::scenario::{Scenario, RADIUS_MAX, RADIUS_MIN};

pub use configuration::config::{ArenaConfig, BodyConfig, ParametersConfig, ScenarioConfig};

pub use visualization::vis2d::run_2d;

pub use benchmark::benchmark::bench_step;
