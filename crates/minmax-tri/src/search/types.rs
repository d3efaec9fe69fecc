//! Result, error and signalling types shared by `engine` and `task`.

use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Arc;

use thiserror::Error;

use crate::combin::CombinationError;
use crate::geom::Chord;

/// Chosen diagonals, ascending by length.
#[derive(Clone, Debug, PartialEq)]
pub struct Triangulation {
    pub chords: Vec<Chord>,
    /// Rank of the longest chord in the length-sorted diagonal list; `None`
    /// for a triangle (no diagonals).
    pub max_rank: Option<usize>,
}

impl Triangulation {
    pub(crate) fn empty() -> Self {
        Self {
            chords: Vec::new(),
            max_rank: None,
        }
    }

    /// Length of the longest chord (0 for a triangle).
    pub fn max_length(&self) -> f64 {
        self.chords.iter().map(Chord::length).fold(0.0, f64::max)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.chords.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }
}

/// Terminal state of a search that ran.
#[derive(Clone, Debug, PartialEq)]
pub enum SearchOutcome {
    Found(Triangulation),
    /// The cancel signal was observed at an outer-iteration boundary.
    Cancelled,
    /// No candidate maximum produced n−3 compatible diagonals.
    Infeasible,
}

impl SearchOutcome {
    pub fn triangulation(&self) -> Option<&Triangulation> {
        match self {
            SearchOutcome::Found(t) => Some(t),
            _ => None,
        }
    }

    /// Short status label (`found`, `cancelled`, `infeasible`).
    pub fn status(&self) -> &'static str {
        match self {
            SearchOutcome::Found(_) => "found",
            SearchOutcome::Cancelled => "cancelled",
            SearchOutcome::Infeasible => "infeasible",
        }
    }
}

/// Precondition failures; the search did not run.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("a polygon has at least 3 vertices, got {0}")]
    TooFewVertices(usize),
    #[error(transparent)]
    Combination(#[from] CombinationError),
}

/// Caller-settable cancellation flag, cheap to clone across threads.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Receives progress percentages in `[0, 100]`.
pub trait ProgressSink {
    fn report(&self, percent: u8);
}

impl<F: Fn(u8)> ProgressSink for F {
    fn report(&self, percent: u8) {
        self(percent)
    }
}

/// Discards all reports.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn report(&self, _percent: u8) {}
}

/// Latest reported percentage, shared between the search and its observer.
#[derive(Clone, Debug, Default)]
pub struct ProgressCell(Arc<AtomicU8>);

impl ProgressCell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> u8 {
        self.0.load(Ordering::Acquire)
    }
}

impl ProgressSink for ProgressCell {
    fn report(&self, percent: u8) {
        self.0.store(percent, Ordering::Release);
    }
}
