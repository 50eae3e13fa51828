//! Fixed-step time integration for the ball system
//!
//! Advances every body by explicit Euler (`x += v * dt`) and keeps the
//! broad-phase grid membership synchronized with the new positions. No
//! acceleration term is integrated: `Body::a` is always zero for now and
//! only reserved for future force contributions.

use crate::simulation::grid::SpatialGrid;
use crate::simulation::params::Parameters;
use crate::simulation::states::System;

/// Advance the system by one step of `params.dt`.
///
/// For each body: move by `v * dt`, recompute the grid cell, and on a cell
/// crossing re-file the body (remove from the stale cell, update the cache,
/// insert into the new cell). Updates `sys.t` in-place.
pub fn integrate(sys: &mut System, grid: &mut SpatialGrid, params: &Parameters) {
    if sys.bodies.is_empty() { // no bodies, return
        return;
    }

    let dt = params.dt; // time step dt

    for b in sys.bodies.iter_mut() {
        // x_n+1 = x_n + dt * v_n
        b.x += dt * b.v;

        // Re-file on cell crossing. The cached cell is where the grid
        // actually holds the body, so removal uses it, not the position.
        let cell = grid.cell_of(&b.x);
        if cell != b.cell {
            grid.remove(b.cell, b.id);
            b.cell = cell;
            grid.insert(cell, b.id);
        }
    }

    // Increment the system time by one full step
    sys.t += dt;
}

/// Refresh grid membership for every body without moving anything.
///
/// Run after the collision pass: positional correction and border clamping
/// can push a body across a cell boundary, and the grid must agree with
/// the positions again before the tick ends.
pub fn sync_cells(sys: &mut System, grid: &mut SpatialGrid) {
    for b in sys.bodies.iter_mut() {
        let cell = grid.cell_of(&b.x);
        if cell != b.cell {
            grid.remove(b.cell, b.id);
            b.cell = cell;
            grid.insert(cell, b.id);
        }
    }
}
