//! Collision detection and response
//!
//! Narrow phase on top of the [`SpatialGrid`] broad phase:
//! - body-body overlap resolution: positional correction split evenly plus
//!   a 1-D elastic impulse along the collision normal (frictionless, no
//!   rotation — the tangential velocity component is never touched),
//! - arena border reflection: per-axis clamp to the body's radius with
//!   velocity negation on the clamped axis.
//!
//! The pass walks every grid cell in row-major order and, for each
//! resident body, scans only the 2x2 neighbor block from
//! [`SpatialGrid::neighbor_cells`]. Within the body's own cell only
//! residents filed *after* it are taken as candidates, so every unordered
//! pair is tested exactly once per tick.

use crate::simulation::grid::SpatialGrid;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, System};

/// Run the full collision pass: every cell, every resident, pairwise
/// overlap checks against the neighbor block, then one border check per
/// resident.
pub fn resolve_collisions(sys: &mut System, grid: &SpatialGrid, params: &Parameters) {
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let residents = grid.cell(row, col);
            for (slot, &i) in residents.iter().enumerate() {
                scan_neighbors(sys, grid, i, row, col, slot, params.restitution);
                resolve_border(&mut sys.bodies[i], grid.width(), grid.height());
            }
        }
    }
}

/// Pairwise checks for body `i`, resident number `slot` of cell
/// `(row, col)`, against every candidate in the 2x2 neighbor block.
fn scan_neighbors(
    sys: &mut System,
    grid: &SpatialGrid,
    i: usize,
    row: usize,
    col: usize,
    slot: usize,
    restitution: f64,
) {
    for (r, c) in grid.neighbor_cells(row, col) {
        let tile = grid.cell(r, c);

        // Own cell: take only later residents, the earlier ones already
        // scanned this body. Other cells are examined in full; the block
        // asymmetry guarantees they never scan back.
        let candidates = if (r, c) == (row, col) {
            &tile[slot + 1..]
        } else {
            tile
        };

        for &j in candidates {
            resolve_pair(&mut sys.bodies, i, j, restitution);
        }
    }
}

/// Resolve one candidate pair `(i, j)`.
///
/// No-op when the centers coincide (`d == 0`, which also rejects a body
/// paired with itself) or the circles are apart (`d > r_i + r_j`).
/// Otherwise separate both bodies by half the penetration depth along the
/// center-to-center normal and exchange normal velocities via the 1-D
/// elastic collision law with restitution `e`:
///
/// `newV1 = (m1*v1 + m2*v2 - m2*(v1 - v2)*e) / (m1 + m2)`
/// `newV2 = (m1*v1 + m2*v2 - m1*(v2 - v1)*e) / (m1 + m2)`
pub fn resolve_pair(bodies: &mut [Body], i: usize, j: usize, e: f64) {
    let b1 = &bodies[i];
    let b2 = &bodies[j];

    // dir points from body i toward body j
    let dir = b2.x - b1.x;
    let d = dir.norm();

    // no collision occurred
    if d == 0.0 || d > b1.radius + b2.radius {
        return;
    }

    let dir = dir / d; // unit collision normal

    // Positional correction: each body backs off by half the penetration
    let corr = (b1.radius + b2.radius - d) / 2.0;

    // Scalar approach velocities along the normal
    let v1 = b1.v.dot(&dir);
    let v2 = b2.v.dot(&dir);

    let m1 = b1.m;
    let m2 = b2.m;

    let new_v1 = (m1 * v1 + m2 * v2 - m2 * (v1 - v2) * e) / (m1 + m2);
    let new_v2 = (m1 * v1 + m2 * v2 - m1 * (v2 - v1) * e) / (m1 + m2);

    bodies[i].x -= dir * corr;
    bodies[i].v += dir * (new_v1 - v1);

    bodies[j].x += dir * corr;
    bodies[j].v += dir * (new_v2 - v2);
}

/// Reflect a body off the arena borders.
///
/// Each axis is clamped independently to `[radius, extent - radius]`; a
/// triggered clamp negates that axis's velocity component. Perfect
/// reflection, restitution is not applied here.
pub fn resolve_border(b: &mut Body, width: f64, height: f64) {
    if b.x.x < b.radius {
        b.x.x = b.radius;
        b.v.x = -b.v.x;
    }
    if b.x.x > width - b.radius {
        b.x.x = width - b.radius;
        b.v.x = -b.v.x;
    }
    if b.x.y < b.radius {
        b.x.y = b.radius;
        b.v.y = -b.v.y;
    }
    if b.x.y > height - b.radius {
        b.x.y = height - b.radius;
        b.v.y = -b.v.y;
    }
}
