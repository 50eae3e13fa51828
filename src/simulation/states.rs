//! Core state types for the ball simulation.
//!
//! Defines the body/system structs:
//! - `Body` — one circular rigid body, using `NVec2`
//! - `System` — the collection of bodies and the current simulation time `t`
//!
//! A body also carries the grid cell it is currently filed under in the
//! broad-phase [`SpatialGrid`](crate::simulation::grid::SpatialGrid). The
//! grid is the authoritative index; the field here is a cache used to
//! detect cell crossings cheaply.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// Grid coordinate as `(row, col)`.
pub type Cell = (usize, usize);

#[derive(Debug, Clone)]
pub struct Body {
    pub id: usize, // stable identity, equals the index into System::bodies
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub a: NVec2, // acceleration, always zero for now (reserved for force terms)
    pub m: f64, // mass, pi * radius^2, fixed at creation
    pub radius: f64, // radius
    pub cell: Cell, // grid cell this body is filed under
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // collection of bodies
    pub t: f64, // time
}
