use super::chord::{contains, diagonal, Chord};
use super::predicates::Vertex;

/// All diagonals of the polygon given by clockwise `vertices` and `boundary`.
///
/// Every ordered pair `(i, j)` of non-adjacent ids is tried with `i` as the
/// cone apex; the first orientation that passes is kept and the reverse pair
/// is skipped as a duplicate. O(n³) overall.
pub fn generate_all_diagonals(vertices: &[Vertex], boundary: &[Chord]) -> Vec<Chord> {
    let n = vertices.len();
    let mut out: Vec<Chord> = Vec::new();
    for i in 0..n {
        let next = (i + 1) % n;
        let prev = (i + n - 1) % n;
        for j in 0..n {
            if j == i || j == next || j == prev {
                continue;
            }
            let candidate = Chord::between(vertices, i, j);
            if diagonal(&candidate, vertices, boundary) && !contains(&out, &candidate) {
                out.push(candidate);
            }
        }
    }
    tracing::debug!(n, diagonals = out.len(), "generated diagonals");
    out
}
