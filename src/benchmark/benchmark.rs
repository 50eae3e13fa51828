use std::time::Instant;

use crate::simulation::engine::step;
use crate::simulation::grid::SpatialGrid;
use crate::simulation::params::Parameters;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{NVec2, System};

/// Time `step` across a range of population sizes.
///
/// Scenes are deterministic (trig-spread positions, no rand needed) so
/// repeated runs are comparable. Prints per-tick cost for each N.
pub fn bench_step() {
    // Different population sizes to test
    let ns = [50, 100, 200, 400, 800, 1600];
    let ticks = 600; // 10 simulated seconds at dt = 1/60

    for n in ns {
        // Spread the arena and grid with the population so density stays
        // roughly constant and the broad phase is actually exercised
        let extent = (n as f64).sqrt() * 4.0;
        let cells = ((extent / 3.0) as usize).max(1);

        let parameters = Parameters {
            dt: 1.0 / 60.0,
            restitution: 1.0,
            body_count: n,
            vel_range: 5.0,
            seed: 42,
        };

        let mut scenario = Scenario {
            parameters,
            system: System { bodies: Vec::new(), t: 0.0 },
            grid: SpatialGrid::new(extent, extent, cells, cells),
            grid_overlay: false,
        };

        for i in 0..n {
            let i_f = i as f64;
            // deterministic positions, no rand needed
            let x = NVec2::new(
                ((i_f * 0.37).sin() * 0.5 + 0.5) * (extent - 2.0) + 1.0,
                ((i_f * 0.13).cos() * 0.5 + 0.5) * (extent - 2.0) + 1.0,
            );
            let v = NVec2::new((i_f * 0.07).sin() * 5.0, (i_f * 0.11).cos() * 5.0);
            scenario.add_body(x, v, 0.4 + 0.6 * ((i_f * 0.23).sin() * 0.5 + 0.5));
        }

        // Warm up
        let Scenario { system, grid, parameters, .. } = &mut scenario;
        step(system, grid, parameters);

        let t0 = Instant::now();
        for _ in 0..ticks {
            step(system, grid, parameters);
        }
        let elapsed = t0.elapsed().as_secs_f64();

        println!(
            "N = {n:5}, {ticks} ticks in {elapsed:8.6} s, {:10.8} s/tick",
            elapsed / ticks as f64
        );
    }
}
