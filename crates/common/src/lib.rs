//! Shared leaf types for the Funge execution core.
//!
//! This crate provides the two value types every other crate builds on:
//!
//! - [`Vector`] — 2-D integer coordinates and IP deltas
//! - [`Cell`] — one program-space cell (a character code)
//!
//! It has no runtime dependencies.

pub mod cell;
pub mod vector;

pub use cell::Cell;
pub use vector::Vector;
