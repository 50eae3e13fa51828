//! # Uniform spatial grid (broad phase)
//!
//! Partitions the rectangular arena into a fixed `rows x cols` array of
//! equal-size cells, each holding the indices of the bodies currently
//! inside it. Collision detection only has to compare a body against the
//! residents of a small neighborhood of cells instead of the whole
//! population, keeping the broad phase roughly O(N) while bodies stay
//! spatially spread.
//!
//! Conventions:
//! - columns follow x (`col = x / cell_w`),
//! - rows follow y *inverted* (`row = (height - y) / cell_h`): simulation
//!   y grows upward while rows are indexed top-down,
//! - both indices are clamped, so positions on or past an arena edge still
//!   map to a valid cell.
//!
//! Cells are dense `Vec`s pre-allocated at construction and indexed by
//! `row * cols + col`; there is no lazy cell creation and no keyed lookup
//! that could fail.

use crate::simulation::states::{Cell, NVec2};

/// A fixed-resolution spatial partition of the arena.
///
/// The grid stores body *indices* only; body state lives in
/// [`System::bodies`](crate::simulation::states::System). A body is filed
/// under exactly one cell at any time, the one its own `cell` field
/// records.
pub struct SpatialGrid {
    rows: usize,
    cols: usize,
    width: f64, // arena width in simulation units
    height: f64, // arena height in simulation units
    cell_w: f64, // width / cols
    cell_h: f64, // height / rows
    cells: Vec<Vec<usize>>, // indexed by row * cols + col
}

impl SpatialGrid {
    /// Build an empty grid covering a `width` x `height` arena.
    /// Every cell exists from the start; `rows` and `cols` must be nonzero
    /// (validated upstream at scenario construction).
    pub fn new(width: f64, height: f64, rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            width,
            height,
            cell_w: width / cols as f64,
            cell_h: height / rows as f64,
            cells: vec![Vec::new(); rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Map a position to its `(row, col)` cell.
    ///
    /// The y coordinate is measured from the top of the arena so that row 0
    /// is the top band. Indices are clamped while still floating point, so
    /// a body sitting exactly on (or numerically past) a border never
    /// indexes out of range.
    pub fn cell_of(&self, pos: &NVec2) -> Cell {
        let row = ((self.height - pos.y) / self.cell_h).floor();
        let col = (pos.x / self.cell_w).floor();

        let row = row.clamp(0.0, (self.rows - 1) as f64) as usize;
        let col = col.clamp(0.0, (self.cols - 1) as f64) as usize;

        (row, col)
    }

    /// Resident body indices of one cell.
    pub fn cell(&self, row: usize, col: usize) -> &[usize] {
        &self.cells[row * self.cols + col]
    }

    /// File body `id` under `cell`.
    pub fn insert(&mut self, cell: Cell, id: usize) {
        let (row, col) = cell;
        self.cells[row * self.cols + col].push(id);
    }

    /// Remove body `id` from `cell` by identity.
    ///
    /// `cell` is the cell the body was *filed under* (its cached cell), not
    /// one recomputed from the current position — the position may have
    /// moved since insertion. Order of the remaining residents is kept so
    /// iteration stays deterministic.
    pub fn remove(&mut self, cell: Cell, id: usize) {
        let (row, col) = cell;
        self.cells[row * self.cols + col].retain(|&b| b != id);
    }

    /// The 2x2 neighbor block `{row-1, row} x {col-1, col}`, clipped to the
    /// grid bounds.
    ///
    /// This is deliberately *not* the full 3x3 neighborhood: each body only
    /// scans its own cell plus the cells above and to the left, so a pair
    /// of bodies in different cells is examined from exactly one side and
    /// never double-resolved.
    pub fn neighbor_cells(&self, row: usize, col: usize) -> impl Iterator<Item = Cell> {
        let r0 = row.saturating_sub(1);
        let c0 = col.saturating_sub(1);
        (r0..=row).flat_map(move |r| (c0..=col).map(move |c| (r, c)))
    }

    /// Min/max corners of one cell in simulation coordinates, for the
    /// debug overlay. Row 0 is the top band, so the y extent is inverted
    /// back into the upward-growing simulation frame.
    pub fn cell_bounds(&self, row: usize, col: usize) -> (NVec2, NVec2) {
        let x0 = col as f64 * self.cell_w;
        let y1 = self.height - row as f64 * self.cell_h;
        let min = NVec2::new(x0, y1 - self.cell_h);
        let max = NVec2::new(x0 + self.cell_w, y1);
        (min, max)
    }

    /// Total number of filed body indices across all cells.
    pub fn population(&self) -> usize {
        self.cells.iter().map(|c| c.len()).sum()
    }
}
