//! The sparse grid and its read/write/wrap operations.

use funge_common::{Cell, Vector};
use rustc_hash::FxHashMap;

use crate::bounds::Bounds;

/// A sparse, dynamically-bounded 2-D grid of cells with toroidal
/// addressing.
///
/// Reads wrap onto the tracked bounding rectangle and default to blank;
/// writes store the cell and grow the rectangle when needed. Neither
/// operation can fail.
#[derive(Debug, Clone, Default)]
pub struct ProgramSpace {
    cells: FxHashMap<Vector, Cell>,
    bounds: Option<Bounds>,
}

impl ProgramSpace {
    pub fn new() -> Self {
        Self::default()
    }

    /// The bounding rectangle, once anything has been written.
    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    /// True until the first write.
    pub fn is_empty(&self) -> bool {
        self.bounds.is_none()
    }

    /// Wrap `coord` onto the bounding rectangle.
    ///
    /// With nothing written yet there is no rectangle to wrap onto and
    /// the coordinate passes through unchanged.
    pub fn wrap(&self, coord: Vector) -> Vector {
        match self.bounds {
            Some(bounds) => bounds.wrap(coord),
            None => coord,
        }
    }

    /// The cell at `coord`, after wrapping. Unwritten cells are blank.
    pub fn read(&self, coord: Vector) -> Cell {
        let coord = self.wrap(coord);
        self.cells.get(&coord).copied().unwrap_or(Cell::BLANK)
    }

    /// Store `cell` at `coord`, growing the rectangle to include it.
    ///
    /// Writes do not wrap: a coordinate outside the rectangle extends
    /// it instead, which changes future wrap results for every IP.
    pub fn write(&mut self, coord: Vector, cell: Cell) {
        match &mut self.bounds {
            Some(bounds) => bounds.include(coord),
            None => self.bounds = Some(Bounds::at(coord)),
        }
        self.cells.insert(coord, cell);
    }
}
