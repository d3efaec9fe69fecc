//! Validated simple polygons.
//!
//! `Polygon::new` is the gate between raw coordinates and the core: it checks
//! vertex count, coordinate range, duplicates, and boundary simplicity, then
//! assigns clockwise ids and builds the boundary chords. Everything downstream
//! (`generate_all_diagonals`, `search`) assumes these invariants.
//!
//! Winding
//! - The cone test assumes clockwise order (interior right of each directed
//!   edge, y axis up). Counterclockwise input is reversed with vertex 0 kept
//!   first; `input_index` maps ids back to the caller's ordering.

use nalgebra::Vector2;
use thiserror::Error;

use super::chord::{intersects_any, Chord};
use super::diagonals::generate_all_diagonals;
use super::predicates::Vertex;

/// Input limits checked by `Polygon::new`.
#[derive(Clone, Copy, Debug)]
pub struct PolygonLimits {
    pub min_vertices: usize,
    pub max_vertices: usize,
    /// Largest accepted `|x|`.
    pub max_abs_x: f64,
    /// Largest accepted `|y|`.
    pub max_abs_y: f64,
}

impl Default for PolygonLimits {
    fn default() -> Self {
        Self {
            min_vertices: 3,
            max_vertices: 100,
            max_abs_x: 24.0,
            max_abs_y: 13.0,
        }
    }
}

impl PolygonLimits {
    /// Only the vertex-count bounds; any finite coordinate is accepted.
    pub fn unbounded() -> Self {
        Self {
            max_abs_x: f64::MAX,
            max_abs_y: f64::MAX,
            ..Self::default()
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PolygonError {
    #[error("polygon needs at least {min} vertices, got {n}")]
    TooFewVertices { n: usize, min: usize },
    #[error("polygon may have at most {max} vertices, got {n}")]
    TooManyVertices { n: usize, max: usize },
    #[error("vertex {index} at ({x}, {y}) is outside the accepted range")]
    OutOfRange { index: usize, x: f64, y: f64 },
    #[error("vertex {index} duplicates an earlier vertex")]
    DuplicateVertex { index: usize },
    #[error("boundary edge {edge} crosses an earlier edge; polygon is not simple")]
    NotSimple { edge: usize },
    #[error("polygon has zero area")]
    Degenerate,
}

/// Simple polygon with clockwise vertex ids and its boundary edges.
#[derive(Clone, Debug)]
pub struct Polygon {
    vertices: Vec<Vertex>,
    boundary: Vec<Chord>,
    reversed: bool,
}

impl Polygon {
    /// Validate `points` and build the polygon.
    pub fn new(points: &[Vector2<f64>], limits: &PolygonLimits) -> Result<Self, PolygonError> {
        let n = points.len();
        if n < limits.min_vertices {
            return Err(PolygonError::TooFewVertices {
                n,
                min: limits.min_vertices,
            });
        }
        if n > limits.max_vertices {
            return Err(PolygonError::TooManyVertices {
                n,
                max: limits.max_vertices,
            });
        }
        for (index, p) in points.iter().enumerate() {
            // written so that NaN fails the check
            if !(p.x.abs() <= limits.max_abs_x && p.y.abs() <= limits.max_abs_y) {
                return Err(PolygonError::OutOfRange {
                    index,
                    x: p.x,
                    y: p.y,
                });
            }
            if points[..index].iter().any(|q| q.x == p.x && q.y == p.y) {
                return Err(PolygonError::DuplicateVertex { index });
            }
        }

        let input: Vec<Vertex> = points
            .iter()
            .enumerate()
            .map(|(id, p)| Vertex::with_id(p.x, p.y, id))
            .collect();
        let mut boundary = boundary_of(&input);
        if let Some(edge) = (0..n).find(|&e| intersects_any(&boundary[e], &boundary[..e])) {
            return Err(PolygonError::NotSimple { edge });
        }

        let area2 = signed_area2(points);
        if area2 == 0.0 {
            return Err(PolygonError::Degenerate);
        }
        let reversed = area2 > 0.0;
        let vertices = if reversed {
            let flipped: Vec<Vertex> = std::iter::once(input[0])
                .chain(input[1..].iter().rev().copied())
                .enumerate()
                .map(|(id, v)| Vertex::with_id(v.x(), v.y(), id))
                .collect();
            boundary = boundary_of(&flipped);
            flipped
        } else {
            input
        };
        tracing::debug!(n, reversed, "polygon validated");
        Ok(Self {
            vertices,
            boundary,
            reversed,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Never true for a constructed polygon.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[inline]
    pub fn boundary(&self) -> &[Chord] {
        &self.boundary
    }

    #[inline]
    pub fn vertex(&self, id: usize) -> Option<&Vertex> {
        self.vertices.get(id)
    }

    /// True if the input was counterclockwise and has been reversed.
    #[inline]
    pub fn was_reversed(&self) -> bool {
        self.reversed
    }

    /// Position in the caller's original point list of the vertex with `id`,
    /// or `None` if `id` is not a vertex of this polygon.
    pub fn input_index(&self, id: usize) -> Option<usize> {
        let n = self.len();
        if id >= n {
            return None;
        }
        Some(if self.reversed { (n - id) % n } else { id })
    }

    /// All diagonals of this polygon (unordered, duplicate-free).
    pub fn diagonals(&self) -> Vec<Chord> {
        generate_all_diagonals(&self.vertices, &self.boundary)
    }
}

fn boundary_of(vertices: &[Vertex]) -> Vec<Chord> {
    let n = vertices.len();
    (0..n)
        .map(|i| Chord::between(vertices, i, (i + 1) % n))
        .collect()
}

/// Twice the shoelace area; positive for counterclockwise order.
fn signed_area2(points: &[Vector2<f64>]) -> f64 {
    let n = points.len();
    (0..n)
        .map(|i| {
            let p = points[i];
            let q = points[(i + 1) % n];
            p.x * q.y - q.x * p.y
        })
        .sum()
}
