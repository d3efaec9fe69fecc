//! Min-max triangulation search with cooperative cancellation and progress.
//!
//! Purpose
//! - Given the diagonal set of a polygon, find n−3 pairwise non-crossing
//!   diagonals whose longest member is as short as possible.
//!
//! Algorithm (outer scan over the candidate maximum)
//! - Sort diagonals by length (stable). For `k = n-4, n-3, …, m-1`, try every
//!   (n−3)-combination of the first `k+1` diagonals that uses diagonal `k`,
//!   accepting members greedily in ascending order. The first `k` that yields
//!   n−3 accepted chords is optimal because lengths are sorted.
//! - Acceptance within one combination never backtracks; a feasible set that
//!   only appears under another insertion order is not found for that
//!   combination.
//!
//! Concurrency
//! - `search` runs on the calling thread; `task::spawn` moves it onto a worker
//!   thread. Cancellation and progress are checked/reported once per outer
//!   iteration only.

mod engine;
pub mod task;
mod types;

pub use engine::search;
pub use types::{
    CancelToken, NoProgress, ProgressCell, ProgressSink, SearchError, SearchOutcome, Triangulation,
};
