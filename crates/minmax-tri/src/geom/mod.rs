//! Planar geometry for min-max triangulation.
//!
//! Purpose
//! - Exact-sign turn predicates over `f64` points (`predicates`).
//! - Chords (vertex pairs with cached length) and the segment/diagonal tests
//!   built on them (`chord`).
//! - Validated polygons with clockwise ids and a boundary (`polygon`).
//! - The full diagonal set of a polygon (`diagonals`).
//!
//! Orientation convention
//! - `direction(p0, p1, p2)` is positive when `p2` lies right of the ray
//!   `p0 → p1`. Every other predicate here (and the cone test in particular)
//!   is written against that sign, and polygons are stored clockwise so the
//!   interior is on the right of each boundary edge.
//! - No epsilon: predicates compare against exact zero.

pub mod chord;
mod diagonals;
pub mod polygon;
pub mod predicates;
pub mod rand;

pub use chord::{contains, diagonal, diagonalie, in_cone, intersects, intersects_any, Chord};
pub use diagonals::generate_all_diagonals;
pub use polygon::{Polygon, PolygonError, PolygonLimits};
pub use predicates::{Turn, Vertex};

#[cfg(test)]
mod tests;
