//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ArenaConfig`]      – arena extents and broad-phase grid resolution
//! - [`ParametersConfig`] – time step, restitution, population settings, seed
//! - [`BodyConfig`]       – optional explicit initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! arena:
//!   width: 20.0             # arena width in simulation units
//!   height: 14.0            # arena height in simulation units
//!   grid_rows: 6            # broad-phase grid rows
//!   grid_cols: 6            # broad-phase grid columns
//!   overlay: false          # draw grid cell boundaries in the viewer
//!
//! parameters:
//!   dt: 0.0166666           # fixed time step, defaults to 1/60
//!   restitution: 1.0        # 1.0 -> perfectly elastic
//!   body_count: 50          # number of randomly placed bodies
//!   velocity_range: 5.0     # velocity components in [-range, range]
//!   seed: 42                # deterministic seed, defaults to 42
//!
//! bodies:                   # optional: explicit scene instead of random
//!   - x: [ 5.0, 5.0 ]
//!     v: [ 0.0, 1.0 ]
//!     radius: 1.0
//! ```
//!
//! When a `bodies` list is present it replaces the random placement and
//! `body_count`/`velocity_range` are ignored; mass is always derived as
//! `pi * radius^2`, never configured.

use serde::Deserialize;

/// Arena geometry and broad-phase grid resolution
/// Fixed for the lifetime of a scenario
#[derive(Deserialize, Debug)]
pub struct ArenaConfig {
    pub width: f64, // arena width in simulation units
    pub height: f64, // arena height in simulation units
    pub grid_rows: usize, // broad-phase rows, must be >= 1
    pub grid_cols: usize, // broad-phase columns, must be >= 1
    pub overlay: Option<bool>, // draw the grid in the viewer, default false
}

/// Global numerical and scene parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub dt: Option<f64>, // fixed time step, default 1/60
    pub restitution: f64, // restitution coefficient in [0, 1]
    pub body_count: usize, // number of bodies placed at setup
    pub velocity_range: f64, // velocity components sampled in [-range, range]
    pub seed: Option<u64>, // deterministic seed to make runs reproducible, default 42
}

/// Configuration for a single body's initial state
/// Only used by explicit scenes; random scenes sample these instead
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub x: Vec<f64>, // initial position [x, y] in simulation units
    pub v: Vec<f64>, // initial velocity [x, y] in simulation units per time unit
    pub radius: f64, // radius of the body, mass is derived as pi * radius^2
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub arena: ArenaConfig, // arena extents and grid resolution
    pub parameters: ParametersConfig, // numerical and scene parameters
    pub bodies: Option<Vec<BodyConfig>>, // explicit bodies, replaces random placement
}
