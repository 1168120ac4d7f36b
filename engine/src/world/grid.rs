//! Grid Configuration Module
//!
//! The placement lattice: an infinite cubic grid with a single cell size.
//! Block positions always land on lattice points produced by [`snap_to_grid`].
//!
//! ## Rounding
//! Each axis is rounded to the nearest multiple of the cell size. Exact
//! half-cell ties round away from zero (`f32::round` semantics), so
//! `50 -> 100` and `-50 -> -100` with a 100-unit cell.

use glam::Vec3;

/// Default lattice cell size (1 m in centimeter units).
pub const DEFAULT_CELL_SIZE: f32 = 100.0;

/// Lattice configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfig {
    /// Edge length of one lattice cell
    pub cell_size: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
        }
    }
}

impl GridConfig {
    pub fn new(cell_size: f32) -> Self {
        Self { cell_size }
    }

    /// Snap a position to the nearest lattice point on all three axes.
    pub fn snap(&self, pos: Vec3) -> Vec3 {
        snap_to_grid(pos, self.cell_size)
    }

    /// Returns true when every coordinate of `pos` is a whole multiple of the cell size.
    pub fn is_on_lattice(&self, pos: Vec3) -> bool {
        let scaled = pos / self.cell_size;
        scaled == scaled.round()
    }
}

/// Snap a position to the nearest lattice point.
///
/// Rounds X, Y and Z independently to the nearest multiple of `cell_size`,
/// ties away from zero. Pure and O(1).
pub fn snap_to_grid(pos: Vec3, cell_size: f32) -> Vec3 {
    (pos / cell_size).round() * cell_size
}
