//! Funge-space: the sparse, toroidal program-space grid.
//!
//! Program memory is a conceptually unbounded 2-D grid of cells. Only
//! written cells are stored; everything else reads as the blank (space)
//! cell. The grid tracks the minimal bounding rectangle of every
//! coordinate ever written, and out-of-range reads wrap toroidally onto
//! that rectangle.
//!
//! The space is the one resource shared mutably by every IP. A write
//! outside the current rectangle grows it — and thereby changes future
//! wrap results for all IPs at once.

pub mod bounds;
pub mod grid;

pub use bounds::Bounds;
pub use grid::ProgramSpace;
