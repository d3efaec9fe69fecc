//! Chords and the segment tests used to build and check triangulations.
//!
//! A chord is an unordered vertex pair with its Euclidean length cached at
//! construction. Chord equality is order-insensitive on the endpoints and
//! additionally requires equal lengths.
//!
//! `intersects` deliberately reports `false` for chords that share an
//! endpoint: two diagonals meeting at a polygon vertex may coexist in a
//! triangulation.

use std::cmp::Ordering;

use super::predicates::{direction, on_segment, right, right_on, Vertex};

/// Segment between two vertices with cached length.
#[derive(Clone, Copy, Debug)]
pub struct Chord {
    pub v1: Vertex,
    pub v2: Vertex,
    length: f64,
}

impl Chord {
    pub fn new(v1: Vertex, v2: Vertex) -> Self {
        let dx = v2.pos.x - v1.pos.x;
        let dy = v2.pos.y - v1.pos.y;
        Self {
            v1,
            v2,
            length: (dx * dx + dy * dy).sqrt(),
        }
    }

    /// Chord between the vertices at positions `i` and `j` of `vertices`.
    ///
    /// Panics if either index is out of bounds.
    pub fn between(vertices: &[Vertex], i: usize, j: usize) -> Self {
        Self::new(vertices[i], vertices[j])
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Endpoint ids as an ordered pair `(min, max)`, if both are bound.
    pub fn ids(&self) -> Option<(usize, usize)> {
        let a = self.v1.id?;
        let b = self.v2.id?;
        Some((a.min(b), a.max(b)))
    }

    /// True if `v` coincides with either endpoint.
    #[inline]
    pub fn has_endpoint(&self, v: &Vertex) -> bool {
        self.v1 == *v || self.v2 == *v
    }

    #[inline]
    pub fn shares_endpoint(&self, other: &Chord) -> bool {
        other.has_endpoint(&self.v1) || other.has_endpoint(&self.v2)
    }

    /// Length order; callers needing a deterministic tie order must use a
    /// stable sort (see `sort_by_length`).
    #[inline]
    pub fn cmp_length(&self, other: &Chord) -> Ordering {
        self.length.total_cmp(&other.length)
    }
}

impl PartialEq for Chord {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length
            && ((self.v1 == other.v1 && self.v2 == other.v2)
                || (self.v1 == other.v2 && self.v2 == other.v1))
    }
}

impl std::fmt::Display for Chord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.v1.id, self.v2.id) {
            (Some(a), Some(b)) => write!(f, "(pt.{a} to pt.{b}) {} to {}", self.v1, self.v2),
            _ => write!(f, "{} to {}", self.v1, self.v2),
        }
    }
}

/// Stable ascending sort by length; equal lengths keep insertion order.
pub fn sort_by_length(chords: &mut [Chord]) {
    chords.sort_by(Chord::cmp_length);
}

/// Linear membership test by chord equality.
pub fn contains(list: &[Chord], chord: &Chord) -> bool {
    list.iter().any(|c| c == chord)
}

/// Segment intersection with the endpoint-sharing exemption.
///
/// - identical chords intersect;
/// - chords sharing an endpoint do not;
/// - otherwise proper crossings and touchings (an endpoint lying on the other
///   segment) both count.
pub fn intersects(c1: &Chord, c2: &Chord) -> bool {
    if c1 == c2 {
        return true;
    }
    if c1.shares_endpoint(c2) {
        return false;
    }
    let (p1, p2, p3, p4) = (&c1.v1, &c1.v2, &c2.v1, &c2.v2);
    let d1 = direction(p3, p4, p1);
    let d2 = direction(p3, p4, p2);
    let d3 = direction(p1, p2, p3);
    let d4 = direction(p1, p2, p4);
    let straddles = |a: f64, b: f64| (a > 0.0 && b < 0.0) || (a < 0.0 && b > 0.0);
    if straddles(d1, d2) && straddles(d3, d4) {
        return true;
    }
    (d1 == 0.0 && on_segment(p3, p4, p1))
        || (d2 == 0.0 && on_segment(p3, p4, p2))
        || (d3 == 0.0 && on_segment(p1, p2, p3))
        || (d4 == 0.0 && on_segment(p1, p2, p4))
}

/// True if `chord` intersects any member of `list`.
pub fn intersects_any(chord: &Chord, list: &[Chord]) -> bool {
    list.iter().any(|c| intersects(chord, c))
}

/// `test` crosses no boundary edge that is not incident to one of its endpoints.
pub fn diagonalie(test: &Chord, boundary: &[Chord]) -> bool {
    boundary
        .iter()
        .filter(|edge| !edge.has_endpoint(&test.v1) && !edge.has_endpoint(&test.v2))
        .all(|edge| !intersects(test, edge))
}

/// Local visibility at `test.v1`: does the chord leave `v1` into the interior?
///
/// Uses the neighbours of `v1` in `vertices` (clockwise order). A `v1`
/// without an id inside `0..vertices.len()` is never in cone.
pub fn in_cone(test: &Chord, vertices: &[Vertex]) -> bool {
    let n = vertices.len();
    let id = match test.v1.id {
        Some(id) if id < n => id,
        _ => return false,
    };
    let (v1, v2) = (&test.v1, &test.v2);
    let next = &vertices[(id + 1) % n];
    let prev = &vertices[(id + n - 1) % n];
    if right_on(prev, v1, next) {
        // convex at v1
        right(v1, v2, prev) && right(v2, v1, next)
    } else {
        // reflex at v1
        !(right_on(v1, v2, next) && right_on(v2, v1, prev))
    }
}

/// `test` is a diagonal of the polygon given by `vertices` and `boundary`.
pub fn diagonal(test: &Chord, vertices: &[Vertex], boundary: &[Chord]) -> bool {
    in_cone(test, vertices) && diagonalie(test, boundary)
}
