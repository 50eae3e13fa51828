//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - the broad-phase index (`SpatialGrid`) with every body registered
//!
//! Configuration is validated here: a scenario either builds into a usable
//! state or is rejected with an error, never into a half-initialized grid.
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! physics-step and visualization systems.

use anyhow::{ensure, Result};
use bevy::prelude::Resource;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::configuration::config::ScenarioConfig;
use crate::simulation::engine;
use crate::simulation::grid::SpatialGrid;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};

/// Radius sampling bounds for randomly placed bodies.
pub const RADIUS_MIN: f64 = 0.4;
pub const RADIUS_MAX: f64 = 1.0;

/// Bevy resource representing a fully-initialized simulation scenario
///
/// This is the main "runtime bundle" constructed from a [`ScenarioConfig`]:
/// it contains the parameters, the current system state, and the spatial
/// grid the broad phase runs on
///
/// In Bevy terms, this is inserted as a `Resource` and then read by systems
/// responsible for stepping and visualization
#[derive(Resource)]
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
    pub grid: SpatialGrid,
    pub grid_overlay: bool,
}

impl Scenario {
    /// Validate `cfg` and build the initial simulation state.
    ///
    /// Random scenes place `body_count` bodies with radius uniform in
    /// `[RADIUS_MIN, RADIUS_MAX]`, position uniform inside the arena minus
    /// a radius margin, and velocity components uniform in
    /// `[-velocity_range, velocity_range]`, all drawn from a `ChaChaRng`
    /// seeded by `parameters.seed` — two builds from the same config are
    /// identical. An explicit `bodies` list bypasses the sampling.
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        let a_cfg = &cfg.arena;
        ensure!(a_cfg.width > 0.0 && a_cfg.height > 0.0,
            "arena extents must be positive, got {} x {}", a_cfg.width, a_cfg.height);
        ensure!(a_cfg.grid_rows >= 1 && a_cfg.grid_cols >= 1,
            "grid must be at least 1x1, got {}x{}", a_cfg.grid_rows, a_cfg.grid_cols);

        let p_cfg = &cfg.parameters;
        let dt = p_cfg.dt.unwrap_or(1.0 / 60.0);
        ensure!(dt > 0.0, "time step must be positive, got {dt}");
        ensure!((0.0..=1.0).contains(&p_cfg.restitution),
            "restitution must be in [0, 1], got {}", p_cfg.restitution);
        ensure!(p_cfg.velocity_range >= 0.0,
            "velocity range must be non-negative, got {}", p_cfg.velocity_range);

        let parameters = Parameters {
            dt,
            restitution: p_cfg.restitution,
            body_count: p_cfg.body_count,
            vel_range: p_cfg.velocity_range,
            seed: p_cfg.seed.unwrap_or(42),
        };

        let grid = SpatialGrid::new(a_cfg.width, a_cfg.height, a_cfg.grid_rows, a_cfg.grid_cols);

        // System starts empty at t = 0; bodies are registered one by one
        let mut scenario = Self {
            parameters,
            system: System { bodies: Vec::new(), t: 0.0 },
            grid,
            grid_overlay: a_cfg.overlay.unwrap_or(false),
        };

        match cfg.bodies {
            // Explicit scene: take bodies straight from the config
            Some(body_cfgs) => {
                ensure!(!body_cfgs.is_empty(), "explicit body list must not be empty");
                for (i, bc) in body_cfgs.iter().enumerate() {
                    ensure!(bc.x.len() == 2 && bc.v.len() == 2,
                        "body {i}: position and velocity need exactly 2 components");
                    ensure!(bc.radius > 0.0, "body {i}: radius must be positive");
                    ensure!(2.0 * bc.radius < a_cfg.width && 2.0 * bc.radius < a_cfg.height,
                        "body {i}: radius {} does not fit the arena", bc.radius);
                    scenario.add_body(
                        NVec2::new(bc.x[0], bc.x[1]),
                        NVec2::new(bc.v[0], bc.v[1]),
                        bc.radius,
                    );
                }
            }
            // Random scene: sample bodies from the seeded RNG
            None => {
                ensure!(scenario.parameters.body_count >= 1,
                    "body count must be at least 1, got {}", scenario.parameters.body_count);
                ensure!(2.0 * RADIUS_MAX < a_cfg.width && 2.0 * RADIUS_MAX < a_cfg.height,
                    "arena {} x {} cannot fit a body of radius {RADIUS_MAX}",
                    a_cfg.width, a_cfg.height);

                let mut rng = ChaChaRng::seed_from_u64(scenario.parameters.seed);
                for _ in 0..scenario.parameters.body_count {
                    let radius = rng.random_range(RADIUS_MIN..=RADIUS_MAX);
                    let x = NVec2::new(
                        rng.random_range(radius..=a_cfg.width - radius),
                        rng.random_range(radius..=a_cfg.height - radius),
                    );
                    let vr = scenario.parameters.vel_range;
                    let v = NVec2::new(
                        rng.random_range(-vr..=vr),
                        rng.random_range(-vr..=vr),
                    );
                    scenario.add_body(x, v, radius);
                }
            }
        }

        Ok(scenario)
    }

    /// Append one body and register it in the grid. Mass is derived as
    /// `pi * radius^2` and never recomputed afterwards. Debug/test hook,
    /// also the single path every build goes through.
    pub fn add_body(&mut self, x: NVec2, v: NVec2, radius: f64) -> usize {
        let id = self.system.bodies.len();
        let cell = self.grid.cell_of(&x);
        self.grid.insert(cell, id);
        self.system.bodies.push(Body {
            id,
            x,
            v,
            a: NVec2::zeros(),
            m: std::f64::consts::PI * radius * radius,
            radius,
            cell,
        });
        id
    }

    /// Advance the simulation by one tick of `parameters.dt`.
    pub fn step(&mut self) {
        engine::step(&mut self.system, &mut self.grid, &self.parameters);
    }

    /// Current bodies, for rendering (id, position, radius) and tests.
    pub fn bodies(&self) -> &[Body] {
        &self.system.bodies
    }
}
