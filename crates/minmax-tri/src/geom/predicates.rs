//! Point predicates: cross product, turn direction, bounding-box containment.
//!
//! All functions are pure and allocation-free. `direction` evaluates
//! `cross(p2 - p0, p1 - p0)`, i.e. the second operand first; `right`,
//! `right_on` and the cone test in `chord` depend on exactly this sign.

use nalgebra::Vector2;

/// A point in the plane, optionally bound to a polygon.
///
/// `id` is the vertex position in the clockwise boundary order of its owning
/// polygon, or `None` for a free-standing point. Equality ignores `id`.
#[derive(Clone, Copy, Debug)]
pub struct Vertex {
    pub pos: Vector2<f64>,
    pub id: Option<usize>,
}

impl Vertex {
    /// Free-standing point (no polygon id).
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            pos: Vector2::new(x, y),
            id: None,
        }
    }

    #[inline]
    pub fn with_id(x: f64, y: f64, id: usize) -> Self {
        Self {
            pos: Vector2::new(x, y),
            id: Some(id),
        }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.pos.y
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.pos.x == other.pos.x && self.pos.y == other.pos.y
    }
}

impl std::fmt::Display for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.pos.x, self.pos.y)
    }
}

/// Turn of `p2` relative to the ray `p0 → p1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    Left,
    Right,
    Collinear,
}

/// `p1.x * p2.y - p2.x * p1.y`.
#[inline]
pub fn cross_product(p1: Vector2<f64>, p2: Vector2<f64>) -> f64 {
    p1.x * p2.y - p2.x * p1.y
}

/// Signed turn of `p2` with respect to the ray `p0 → p1`.
///
/// Positive: `p2` is right of the ray. Negative: left. Zero: collinear.
/// Computed as `cross_product(p2 - p0, p1 - p0)`; do not swap the operands.
#[inline]
pub fn direction(p0: &Vertex, p1: &Vertex, p2: &Vertex) -> f64 {
    let p1_rel = p1.pos - p0.pos;
    let p2_rel = p2.pos - p0.pos;
    cross_product(p2_rel, p1_rel)
}

#[inline]
pub fn turn(p0: &Vertex, p1: &Vertex, p2: &Vertex) -> Turn {
    let d = direction(p0, p1, p2);
    if d > 0.0 {
        Turn::Right
    } else if d < 0.0 {
        Turn::Left
    } else {
        Turn::Collinear
    }
}

/// `p2` strictly right of `p0 → p1`.
#[inline]
pub fn right(p0: &Vertex, p1: &Vertex, p2: &Vertex) -> bool {
    direction(p0, p1, p2) > 0.0
}

/// `p2` right of or on the line through `p0 → p1`.
#[inline]
pub fn right_on(p0: &Vertex, p1: &Vertex, p2: &Vertex) -> bool {
    direction(p0, p1, p2) >= 0.0
}

#[inline]
pub fn collinear(p0: &Vertex, p1: &Vertex, p2: &Vertex) -> bool {
    direction(p0, p1, p2) == 0.0
}

/// `p` lies in the axis-aligned bounding box of `a` and `b`.
///
/// Only a between-test when `p` is already known to be collinear with `a, b`.
#[inline]
pub fn on_segment(a: &Vertex, b: &Vertex, p: &Vertex) -> bool {
    a.pos.x.min(b.pos.x) <= p.pos.x
        && p.pos.x <= a.pos.x.max(b.pos.x)
        && a.pos.y.min(b.pos.y) <= p.pos.y
        && p.pos.y <= a.pos.y.max(b.pos.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn cross_product_matches_determinant() {
        let a = vector![3.0, 2.0];
        let b = vector![2.0, 6.0];
        assert_eq!(cross_product(a, b), 14.0);
        assert_eq!(cross_product(b, a), -14.0);
        // collinear with the origin
        assert_eq!(cross_product(vector![2.0, 6.0], vector![1.0, 3.0]), 0.0);
    }

    #[test]
    fn direction_positive_means_right_turn() {
        let o = Vertex::new(0.0, 0.0);
        let east = Vertex::new(1.0, 0.0);
        let below = Vertex::new(0.5, -1.0);
        let above = Vertex::new(0.5, 1.0);
        assert!(direction(&o, &east, &below) > 0.0);
        assert!(direction(&o, &east, &above) < 0.0);
        assert_eq!(turn(&o, &east, &below), Turn::Right);
        assert_eq!(turn(&o, &east, &above), Turn::Left);
        assert!(right(&o, &east, &below));
        assert!(!right(&o, &east, &above));
    }

    #[test]
    fn right_on_accepts_collinear() {
        let a = Vertex::new(3.0, -1.0);
        let b = Vertex::new(4.0, -1.0);
        let c = Vertex::new(5.0, -1.0);
        assert!(collinear(&a, &b, &c));
        assert_eq!(turn(&a, &b, &c), Turn::Collinear);
        assert!(right_on(&a, &b, &c));
        assert!(!right(&a, &b, &c));
    }

    #[test]
    fn collinear_is_order_independent() {
        let o = Vertex::new(0.0, 0.0);
        let p = Vertex::new(2.0, 6.0);
        let q = Vertex::new(1.0, 3.0);
        for (a, b, c) in [(&p, &o, &q), (&p, &q, &o), (&q, &p, &o), (&o, &q, &p)] {
            assert!(collinear(a, b, c));
        }
        assert!(!collinear(&Vertex::new(3.0, 2.0), &q, &p));
    }

    #[test]
    fn on_segment_is_a_box_test() {
        let a = Vertex::new(0.0, 0.0);
        let b = Vertex::new(2.0, 2.0);
        assert!(on_segment(&a, &b, &Vertex::new(1.0, 1.0)));
        assert!(on_segment(&a, &b, &b));
        // inside the box but off the line: still true
        assert!(on_segment(&a, &b, &Vertex::new(2.0, 0.0)));
        assert!(!on_segment(&a, &b, &Vertex::new(3.0, 1.0)));
    }

    #[test]
    fn vertex_equality_ignores_id() {
        assert_eq!(Vertex::with_id(1.0, 2.0, 4), Vertex::new(1.0, 2.0));
        assert_ne!(Vertex::with_id(1.0, 2.0, 4), Vertex::with_id(2.0, 1.0, 4));
    }
}
