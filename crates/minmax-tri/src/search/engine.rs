//! Outer candidate-maximum scan and per-combination greedy acceptance.

use crate::combin::Combinations;
use crate::geom::chord::{intersects_any, sort_by_length};
use crate::geom::Chord;

use super::types::{CancelToken, ProgressSink, SearchError, SearchOutcome, Triangulation};

/// Search for a triangulation of an `n`-gon minimizing its longest diagonal.
///
/// `diagonals` is the polygon's diagonal set in any order; it is copied and
/// sorted internally, so the caller's slice is left untouched. `cancel` is
/// checked and `progress` is called once per outer iteration (plus an initial
/// 0 and a final 100 on success).
pub fn search<P>(
    diagonals: &[Chord],
    n: usize,
    cancel: &CancelToken,
    progress: &P,
) -> Result<SearchOutcome, SearchError>
where
    P: ProgressSink + ?Sized,
{
    if n < 3 {
        return Err(SearchError::TooFewVertices(n));
    }
    progress.report(0);
    if n == 3 {
        progress.report(100);
        return Ok(SearchOutcome::Found(Triangulation::empty()));
    }

    let mut sorted = diagonals.to_vec();
    sort_by_length(&mut sorted);
    let r = n - 3;
    let m = sorted.len();
    if m < r {
        tracing::info!(n, diagonals = m, "too few diagonals for a triangulation");
        return Ok(SearchOutcome::Infeasible);
    }

    let start = n - 4;
    let span = (m - start) as f64;
    for k in start..m {
        if cancel.is_cancelled() {
            tracing::info!(k, "search cancelled");
            return Ok(SearchOutcome::Cancelled);
        }
        let percent = (100.0 * (k - start) as f64 / span).round() as u8;
        progress.report(percent);
        tracing::debug!(k, percent, max_length = sorted[k].length(), "candidate maximum");

        if let Some(chords) = triangulation_with_max(&sorted, k, r)? {
            progress.report(100);
            tracing::info!(
                n,
                k,
                max_length = sorted[k].length(),
                "min-max triangulation found"
            );
            return Ok(SearchOutcome::Found(Triangulation {
                chords,
                max_rank: Some(k),
            }));
        }
    }
    tracing::info!(n, diagonals = m, "no triangulation found");
    Ok(SearchOutcome::Infeasible)
}

/// First greedy-accepted `r`-set drawn from `sorted[..=k]` that uses `sorted[k]`.
fn triangulation_with_max(
    sorted: &[Chord],
    k: usize,
    r: usize,
) -> Result<Option<Vec<Chord>>, SearchError> {
    let mut combos = Combinations::new(k + 1, r)?;
    let mut accepted: Vec<Chord> = Vec::with_capacity(r);
    while let Some(indices) = combos.next_combination() {
        // ascending, so using k means ending with it
        if indices.last() != Some(&k) {
            continue;
        }
        tracing::trace!(?indices, "combination");
        accepted.clear();
        for &idx in indices {
            let chord = &sorted[idx];
            if !intersects_any(chord, &accepted) {
                accepted.push(*chord);
            }
        }
        if accepted.len() == r {
            return Ok(Some(accepted));
        }
    }
    Ok(None)
}
