//! Min-max diagonal triangulation of simple polygons.
//!
//! Given a simple polygon (3 ≤ n ≤ 100, clockwise vertex order), find a set of
//! n−3 pairwise non-crossing diagonals whose longest member is as short as
//! possible.
//!
//! Layout
//! - `geom`: point predicates, chords, validated polygons, diagonal generation,
//!   and a reproducible random polygon sampler.
//! - `combin`: lexicographic r-combinations with arbitrary-precision counts.
//! - `search`: the min-max search engine, cancellation/progress plumbing, and a
//!   background task wrapper.
//!
//! The core operations take plain slices (`&[Vertex]`, `&[Chord]`); nothing in
//! this crate holds process-wide state.

pub mod combin;
pub mod geom;
pub mod search;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for callers.
pub mod prelude {
    pub use crate::combin::{CombinationError, Combinations};
    pub use crate::geom::rand::{draw_simple_polygon, ReplayToken, SamplerCfg};
    pub use crate::geom::{
        generate_all_diagonals, Chord, Polygon, PolygonError, PolygonLimits, Vertex,
    };
    pub use crate::search::{
        search, CancelToken, NoProgress, ProgressCell, ProgressSink, SearchError, SearchOutcome,
        Triangulation,
    };
    pub use nalgebra::Vector2 as Vec2;
}
