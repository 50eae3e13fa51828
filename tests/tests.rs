use ballsim::configuration::config::{ArenaConfig, BodyConfig, ParametersConfig, ScenarioConfig};
use ballsim::simulation::collisions::resolve_pair;
use ballsim::simulation::grid::SpatialGrid;
use ballsim::simulation::params::Parameters;
use ballsim::simulation::scenario::Scenario;
use ballsim::simulation::states::{NVec2, System};

/// Config for a random scene on a 20 x 14 arena with a 6 x 6 grid
pub fn random_config(body_count: usize, seed: u64) -> ScenarioConfig {
    ScenarioConfig {
        arena: ArenaConfig {
            width: 20.0,
            height: 14.0,
            grid_rows: 6,
            grid_cols: 6,
            overlay: None,
        },
        parameters: ParametersConfig {
            dt: None,
            restitution: 1.0,
            body_count,
            velocity_range: 5.0,
            seed: Some(seed),
        },
        bodies: None,
    }
}

/// Config with an explicit body list on the same arena
pub fn explicit_config(bodies: Vec<BodyConfig>) -> ScenarioConfig {
    let mut cfg = random_config(bodies.len(), 42);
    cfg.parameters.velocity_range = 0.0;
    cfg.bodies = Some(bodies);
    cfg
}

/// Empty scenario to place bodies into by hand
pub fn blank_scenario(width: f64, height: f64, rows: usize, cols: usize) -> Scenario {
    Scenario {
        parameters: Parameters {
            dt: 1.0 / 60.0,
            restitution: 1.0,
            body_count: 0,
            vel_range: 0.0,
            seed: 42,
        },
        system: System { bodies: Vec::new(), t: 0.0 },
        grid: SpatialGrid::new(width, height, rows, cols),
        grid_overlay: false,
    }
}

fn body_cfg(x: [f64; 2], v: [f64; 2], radius: f64) -> BodyConfig {
    BodyConfig {
        x: x.to_vec(),
        v: v.to_vec(),
        radius,
    }
}

// ==================================================================================
// Configuration validation tests
// ==================================================================================

#[test]
fn config_rejects_zero_bodies() {
    let cfg = random_config(0, 42);
    assert!(Scenario::build_scenario(cfg).is_err());
}

#[test]
fn config_rejects_degenerate_grid() {
    let mut cfg = random_config(10, 42);
    cfg.arena.grid_rows = 0;
    assert!(Scenario::build_scenario(cfg).is_err());

    let mut cfg = random_config(10, 42);
    cfg.arena.grid_cols = 0;
    assert!(Scenario::build_scenario(cfg).is_err());
}

#[test]
fn config_rejects_bad_restitution_and_dt() {
    let mut cfg = random_config(10, 42);
    cfg.parameters.restitution = 1.5;
    assert!(Scenario::build_scenario(cfg).is_err());

    let mut cfg = random_config(10, 42);
    cfg.parameters.dt = Some(0.0);
    assert!(Scenario::build_scenario(cfg).is_err());
}

#[test]
fn random_scene_respects_sampling_bounds() {
    let scenario = Scenario::build_scenario(random_config(50, 7)).unwrap();
    assert_eq!(scenario.bodies().len(), 50);

    for b in scenario.bodies() {
        assert!(b.radius >= 0.4 && b.radius <= 1.0);
        assert!((b.m - std::f64::consts::PI * b.radius * b.radius).abs() < 1e-12);
        assert!(b.x.x >= b.radius && b.x.x <= 20.0 - b.radius);
        assert!(b.x.y >= b.radius && b.x.y <= 14.0 - b.radius);
        assert!(b.v.x.abs() <= 5.0 && b.v.y.abs() <= 5.0);
    }
}

#[test]
fn explicit_scene_places_listed_bodies() {
    let cfg = explicit_config(vec![
        body_cfg([5.0, 5.0], [0.0, 1.0], 1.0),
        body_cfg([10.0, 7.0], [1.0, 0.0], 0.5),
    ]);
    let scenario = Scenario::build_scenario(cfg).unwrap();

    assert_eq!(scenario.bodies().len(), 2);
    assert_eq!(scenario.bodies()[0].x, NVec2::new(5.0, 5.0));
    assert_eq!(scenario.bodies()[1].radius, 0.5);
    assert_eq!(scenario.grid.population(), 2);
}

// ==================================================================================
// Spatial grid tests
// ==================================================================================

#[test]
fn cell_of_follows_x_and_inverted_y() {
    let grid = SpatialGrid::new(8.0, 8.0, 4, 4);

    // rows run top-down: large y is row 0, small y the last row
    assert_eq!(grid.cell_of(&NVec2::new(0.1, 7.9)), (0, 0));
    assert_eq!(grid.cell_of(&NVec2::new(0.1, 0.1)), (3, 0));
    assert_eq!(grid.cell_of(&NVec2::new(7.9, 0.1)), (3, 3));
    assert_eq!(grid.cell_of(&NVec2::new(4.1, 4.1)), (1, 2));
}

#[test]
fn cell_of_clamps_out_of_range_positions() {
    let grid = SpatialGrid::new(8.0, 8.0, 4, 4);

    assert_eq!(grid.cell_of(&NVec2::new(-5.0, 20.0)), (0, 0));
    assert_eq!(grid.cell_of(&NVec2::new(100.0, -3.0)), (3, 3));
    // exactly on the far borders still maps in range
    assert_eq!(grid.cell_of(&NVec2::new(8.0, 0.0)), (3, 3));
    assert_eq!(grid.cell_of(&NVec2::new(0.0, 8.0)), (0, 0));
}

#[test]
fn neighbor_block_is_2x2_clipped() {
    let grid = SpatialGrid::new(8.0, 8.0, 4, 4);

    let cells: Vec<_> = grid.neighbor_cells(2, 3).collect();
    assert_eq!(cells, vec![(1, 2), (1, 3), (2, 2), (2, 3)]);

    let corner: Vec<_> = grid.neighbor_cells(0, 0).collect();
    assert_eq!(corner, vec![(0, 0)]);

    let top: Vec<_> = grid.neighbor_cells(0, 2).collect();
    assert_eq!(top, vec![(0, 1), (0, 2)]);
}

#[test]
fn insert_and_remove_by_identity() {
    let mut grid = SpatialGrid::new(8.0, 8.0, 4, 4);

    grid.insert((1, 1), 3);
    grid.insert((1, 1), 7);
    grid.insert((1, 1), 9);
    assert_eq!(grid.cell(1, 1), &[3, 7, 9]);

    grid.remove((1, 1), 7);
    assert_eq!(grid.cell(1, 1), &[3, 9]); // order of the rest kept
    assert_eq!(grid.population(), 2);
}

#[test]
fn cell_bounds_cover_the_arena() {
    let grid = SpatialGrid::new(10.0, 10.0, 2, 2);

    // row 0 is the top band in simulation coordinates
    let (min, max) = grid.cell_bounds(0, 0);
    assert_eq!(min, NVec2::new(0.0, 5.0));
    assert_eq!(max, NVec2::new(5.0, 10.0));

    let (min, max) = grid.cell_bounds(1, 1);
    assert_eq!(min, NVec2::new(5.0, 0.0));
    assert_eq!(max, NVec2::new(10.0, 5.0));
}

// ==================================================================================
// Collision tests
// ==================================================================================

#[test]
fn distant_pair_is_never_mutated() {
    let mut scenario = blank_scenario(20.0, 14.0, 6, 6);
    scenario.add_body(NVec2::new(3.0, 3.0), NVec2::new(1.0, 0.0), 1.0);
    scenario.add_body(NVec2::new(10.0, 10.0), NVec2::new(-1.0, 0.0), 1.0);

    let before: Vec<_> = scenario.bodies().to_vec();
    resolve_pair(&mut scenario.system.bodies, 0, 1, 1.0);

    for (b, a) in before.iter().zip(scenario.bodies()) {
        assert_eq!(b.x, a.x);
        assert_eq!(b.v, a.v);
    }
}

#[test]
fn overlapping_pair_separates_and_swaps_normal_velocities() {
    // Overlapping by 1.5, equal masses, head-on along y
    let mut scenario = blank_scenario(20.0, 14.0, 6, 6);
    scenario.add_body(NVec2::new(5.0, 5.0), NVec2::new(0.0, 1.0), 1.0);
    scenario.add_body(NVec2::new(5.0, 5.5), NVec2::new(0.0, -1.0), 1.0);

    resolve_pair(&mut scenario.system.bodies, 0, 1, 1.0);

    let b1 = &scenario.bodies()[0];
    let b2 = &scenario.bodies()[1];

    let d = (b2.x - b1.x).norm();
    assert!(d >= 2.0 - 1e-9, "still overlapping, d = {d}");

    assert!((b1.v - NVec2::new(0.0, -1.0)).norm() < 1e-9, "b1.v = {:?}", b1.v);
    assert!((b2.v - NVec2::new(0.0, 1.0)).norm() < 1e-9, "b2.v = {:?}", b2.v);
}

#[test]
fn elastic_pair_conserves_kinetic_energy() {
    let mut scenario = blank_scenario(20.0, 14.0, 6, 6);
    scenario.add_body(NVec2::new(5.0, 5.0), NVec2::new(1.0, -0.5), 0.5);
    scenario.add_body(NVec2::new(5.7, 5.3), NVec2::new(-0.3, 0.2), 0.8);

    let ke = |sys: &[ballsim::Body]| -> f64 {
        sys.iter().map(|b| 0.5 * b.m * b.v.norm_squared()).sum()
    };

    let before = ke(scenario.bodies());
    resolve_pair(&mut scenario.system.bodies, 0, 1, 1.0);
    let after = ke(scenario.bodies());

    assert!((before - after).abs() < 1e-9, "KE {before} -> {after}");
}

#[test]
fn two_body_scenario_resolves_within_one_step() {
    let cfg = explicit_config(vec![
        body_cfg([5.0, 5.0], [0.0, 1.0], 1.0),
        body_cfg([5.0, 5.5], [0.0, -1.0], 1.0),
    ]);
    let mut scenario = Scenario::build_scenario(cfg).unwrap();

    scenario.step();

    let b1 = &scenario.bodies()[0];
    let b2 = &scenario.bodies()[1];
    let d = (b2.x - b1.x).norm();

    assert!(d >= 2.0 - 1e-9, "still overlapping after step, d = {d}");
    assert!((b1.v - NVec2::new(0.0, -1.0)).norm() < 1e-9);
    assert!((b2.v - NVec2::new(0.0, 1.0)).norm() < 1e-9);
}

#[test]
fn left_wall_reflects_position_and_velocity() {
    let cfg = explicit_config(vec![body_cfg([0.5, 5.0], [-2.0, 0.0], 1.0)]);
    let mut scenario = Scenario::build_scenario(cfg).unwrap();

    scenario.step();

    let b = &scenario.bodies()[0];
    assert_eq!(b.x.x, 1.0); // clamped exactly to the radius
    assert_eq!(b.v.x, 2.0); // reflected
    assert_eq!(b.v.y, 0.0); // other axis untouched
}

// ==================================================================================
// Whole-run invariant tests
// ==================================================================================

#[test]
fn bodies_stay_inside_the_arena() {
    let mut scenario = Scenario::build_scenario(random_config(40, 11)).unwrap();

    for _ in 0..600 {
        scenario.step();
        for b in scenario.bodies() {
            assert!(b.x.x >= b.radius && b.x.x <= 20.0 - b.radius, "x out: {:?}", b.x);
            assert!(b.x.y >= b.radius && b.x.y <= 14.0 - b.radius, "y out: {:?}", b.x);
        }
    }
}

#[test]
fn grid_stays_consistent_with_positions() {
    let mut scenario = Scenario::build_scenario(random_config(40, 3)).unwrap();

    for _ in 0..200 {
        scenario.step();

        let grid = &scenario.grid;
        assert_eq!(grid.population(), scenario.bodies().len());

        for b in scenario.bodies() {
            // cache agrees with a fresh lookup
            assert_eq!(b.cell, grid.cell_of(&b.x));
            // and the grid files the body there exactly once
            let (row, col) = b.cell;
            let filed = grid.cell(row, col).iter().filter(|&&id| id == b.id).count();
            assert_eq!(filed, 1);
        }
    }
}

#[test]
fn identical_configs_give_identical_trajectories() {
    let mut a = Scenario::build_scenario(random_config(30, 99)).unwrap();
    let mut b = Scenario::build_scenario(random_config(30, 99)).unwrap();

    for _ in 0..300 {
        a.step();
        b.step();
    }

    assert_eq!(a.system.t, b.system.t);
    for (ba, bb) in a.bodies().iter().zip(b.bodies()) {
        assert_eq!(ba.x, bb.x); // bit-identical, no hidden randomness
        assert_eq!(ba.v, bb.v);
        assert_eq!(ba.cell, bb.cell);
    }
}

#[test]
fn different_seeds_give_different_scenes() {
    let a = Scenario::build_scenario(random_config(30, 1)).unwrap();
    let b = Scenario::build_scenario(random_config(30, 2)).unwrap();

    assert!(a.bodies().iter().zip(b.bodies()).any(|(ba, bb)| ba.x != bb.x));
}
