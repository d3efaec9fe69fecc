//! Run one search on a worker thread so the issuing side stays responsive.
//!
//! The worker owns its diagonal list; the issuing side keeps only the cancel
//! token and an atomic mirror of the latest progress value.

use std::thread::{self, JoinHandle};

use crate::geom::Chord;

use super::engine::search;
use super::types::{CancelToken, ProgressCell, ProgressSink, SearchError, SearchOutcome};

/// Handle to a search running on its own thread.
#[derive(Debug)]
pub struct SearchTask {
    handle: JoinHandle<Result<SearchOutcome, SearchError>>,
    cancel: CancelToken,
    progress: ProgressCell,
}

/// Mirrors every report into a `ProgressCell` before forwarding it.
struct Mirrored<S> {
    cell: ProgressCell,
    inner: S,
}

impl<S: ProgressSink> ProgressSink for Mirrored<S> {
    fn report(&self, percent: u8) {
        self.cell.report(percent);
        self.inner.report(percent);
    }
}

/// Start a search for an `n`-gon over `diagonals` on a new thread.
///
/// Every progress report goes to `sink` (on the worker thread) and is also
/// readable through `SearchTask::progress`.
pub fn spawn<S>(diagonals: Vec<Chord>, n: usize, sink: S) -> std::io::Result<SearchTask>
where
    S: ProgressSink + Send + 'static,
{
    let cancel = CancelToken::new();
    let progress = ProgressCell::new();
    let worker_cancel = cancel.clone();
    let mirrored = Mirrored {
        cell: progress.clone(),
        inner: sink,
    };
    let handle = thread::Builder::new()
        .name("minmax-search".into())
        .spawn(move || search(&diagonals, n, &worker_cancel, &mirrored))?;
    Ok(SearchTask {
        handle,
        cancel,
        progress,
    })
}

impl SearchTask {
    /// Ask the worker to stop at its next outer-iteration boundary.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Latest reported percentage.
    pub fn progress(&self) -> u8 {
        self.progress.get()
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the worker. A panic on the worker is resumed on this thread.
    pub fn join(self) -> Result<SearchOutcome, SearchError> {
        match self.handle.join() {
            Ok(res) => res,
            Err(payload) => std::panic::resume_unwind(payload),
        }
    }
}
