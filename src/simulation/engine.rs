//! One-tick orchestration
//!
//! `step` is the only entry point the outer layers (viewer, benchmark,
//! tests) drive: integrate, run the collision pass, then re-sync grid
//! membership so the cell caches agree with the corrected positions. One
//! tick is a single straight-line pass on the calling thread; the external
//! scheduler decides how often ticks happen.

use crate::simulation::collisions::{resolve_border, resolve_collisions};
use crate::simulation::grid::SpatialGrid;
use crate::simulation::integrator::{integrate, sync_cells};
use crate::simulation::params::Parameters;
use crate::simulation::states::System;

/// Advance the simulation by exactly one tick of `params.dt`.
///
/// Deterministic given the body order and a fixed `dt`: there is no hidden
/// state beyond `System` and `SpatialGrid`, both mutated in-place.
pub fn step(sys: &mut System, grid: &mut SpatialGrid, params: &Parameters) {
    integrate(sys, grid, params);
    resolve_collisions(sys, grid, params);

    // A pair correction late in the pass can push an already-clamped body
    // back outside the arena; every tick ends with all bodies contained
    // and filed under the cell their position maps to.
    for b in sys.bodies.iter_mut() {
        resolve_border(b, grid.width(), grid.height());
    }
    sync_cells(sys, grid);

    // Every body filed exactly once; a mismatch is a programming error.
    debug_assert_eq!(grid.population(), sys.bodies.len());
}
