//! Polygon text files: a vertex count, then one `x y` pair per line.
//!
//! ```text
//! 4
//! 0	0
//! 0	2
//! 2	2
//! 2	0
//! ```
//!
//! Blank lines are skipped; the pair may be separated by tabs or spaces.

use anyhow::{bail, Context, Result};
use minmax_tri::geom::PolygonLimits;
use minmax_tri::Vec2;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

pub fn read_points<P: AsRef<Path>>(path: P) -> Result<Vec<Vec2<f64>>> {
    let path = path.as_ref();
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_points(&text).with_context(|| format!("parsing {}", path.display()))
}

pub fn parse_points(text: &str) -> Result<Vec<Vec2<f64>>> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());

    let Some((line_no, first)) = lines.next() else {
        bail!("missing vertex count");
    };
    let n: usize = first
        .parse()
        .with_context(|| format!("line {line_no}: vertex count {first:?} is not an integer"))?;
    let limits = PolygonLimits::default();
    if n < limits.min_vertices || n > limits.max_vertices {
        bail!(
            "line {line_no}: vertex count {n} outside {}..={}",
            limits.min_vertices,
            limits.max_vertices
        );
    }

    let mut points = Vec::with_capacity(n);
    for (line_no, line) in lines.by_ref().take(n) {
        let mut fields = line.split_whitespace();
        let x = coordinate(fields.next(), line_no, "x")?;
        let y = coordinate(fields.next(), line_no, "y")?;
        if let Some(extra) = fields.next() {
            bail!("line {line_no}: unexpected trailing field {extra:?}");
        }
        points.push(Vec2::new(x, y));
    }
    if points.len() < n {
        bail!("expected {n} points, found {}", points.len());
    }
    if let Some((line_no, _)) = lines.next() {
        tracing::warn!(line = line_no, "ignoring lines after the last point");
    }
    Ok(points)
}

fn coordinate(field: Option<&str>, line_no: usize, axis: &str) -> Result<f64> {
    let Some(field) = field else {
        bail!("line {line_no}: missing {axis} coordinate");
    };
    field
        .parse()
        .with_context(|| format!("line {line_no}: {axis} coordinate {field:?} is not a number"))
}

/// Inverse of `parse_points`, tab-separated.
pub fn format_points(points: &[Vec2<f64>]) -> String {
    let mut out = format!("{}\n", points.len());
    for p in points {
        // writing to a String cannot fail
        let _ = writeln!(out, "{}\t{}", p.x, p.y);
    }
    out
}
