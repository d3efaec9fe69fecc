//! Random simple polygons (star-shaped, radial jitter + replay tokens).
//!
//! Model
//! - `n` equally spaced angles on [0, 2π) with bounded angular jitter, each
//!   paired with a jittered radius. Sorting by angle around the origin gives a
//!   star-shaped, hence simple, polygon; it is emitted clockwise.
//! - The result is scaled to fill `SamplerCfg::half_extent` and validated
//!   through `Polygon::new`.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::polygon::{Polygon, PolygonError, PolygonLimits};

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SamplerCfg {
    pub vertices: usize,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radii are `1 + u` with `u ∈ [-radial_jitter, radial_jitter]`, clamped to [0, 0.95].
    pub radial_jitter: f64,
    /// Half-widths of the target box; the polygon is scaled to fit inside.
    pub half_extent: Vector2<f64>,
}

impl Default for SamplerCfg {
    fn default() -> Self {
        Self {
            vertices: 8,
            angle_jitter_frac: 0.3,
            radial_jitter: 0.6,
            half_extent: Vector2::new(24.0, 13.0),
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Clockwise points of a random star-shaped polygon with exactly
/// `cfg.vertices` points (empty for 0).
pub fn draw_points(cfg: SamplerCfg, tok: ReplayToken) -> Vec<Vector2<f64>> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertices;
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.95);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = rng.gen::<f64>() * std::f64::consts::TAU;
    // descending angle = clockwise
    let mut pts: Vec<Vector2<f64>> = (0..n)
        .rev()
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let th = phase + (k as f64) * delta + jitter;
            let r = 1.0 + (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            Vector2::new(th.cos() * r, th.sin() * r)
        })
        .collect();
    let max_x = pts.iter().map(|p| p.x.abs()).fold(0.0, f64::max);
    let max_y = pts.iter().map(|p| p.y.abs()).fold(0.0, f64::max);
    // stay strictly inside the limits after rounding
    let s = 0.999 * (cfg.half_extent.x / max_x).min(cfg.half_extent.y / max_y);
    if s.is_finite() && s > 0.0 {
        for p in &mut pts {
            *p *= s;
        }
    }
    pts
}

/// Draw a random simple polygon and validate it.
///
/// A vertex count outside `limits` is rejected before sampling. Otherwise
/// validation only fails for pathological configurations (e.g. `half_extent`
/// larger than the accepted coordinate range).
pub fn draw_simple_polygon(
    cfg: SamplerCfg,
    tok: ReplayToken,
    limits: &PolygonLimits,
) -> Result<Polygon, PolygonError> {
    let n = cfg.vertices;
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
    Polygon::new(&draw_points(cfg, tok), limits)
}
