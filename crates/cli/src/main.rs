mod input;
mod provenance;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use minmax_tri::prelude::*;
use minmax_tri::search::task;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

const POLL: Duration = Duration::from_millis(50);

#[derive(Parser)]
#[command(name = "minmax")]
#[command(about = "Min-max diagonal triangulation of simple polygons")]
struct Cmd {
    /// Log per-iteration detail (debug level)
    #[arg(long, short)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Find a triangulation whose longest diagonal is as short as possible
    Solve {
        #[arg(long)]
        input: PathBuf,
        /// Write the JSON report here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
        /// Cancel the search after this many seconds
        #[arg(long)]
        timeout_secs: Option<f64>,
    },
    /// List every diagonal of the polygon as JSON
    Diagonals {
        #[arg(long)]
        input: PathBuf,
    },
    /// Write a random simple polygon in the input format
    Sample {
        #[arg(long)]
        n: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

/// One chord in the caller's vertex numbering.
#[derive(Debug, Serialize)]
struct ChordOut {
    a: usize,
    b: usize,
    length: f64,
}

#[derive(Debug, Serialize)]
struct SolveReport {
    status: &'static str,
    n: usize,
    diagonal_count: usize,
    max_length: Option<f64>,
    chords: Vec<ChordOut>,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Solve {
            input,
            out,
            timeout_secs,
        } => solve(&input, out.as_deref(), timeout_secs),
        Action::Diagonals { input } => diagonals(&input),
        Action::Sample { n, seed, out } => sample(n, seed, out.as_deref()),
    }
}

fn load(path: &Path) -> Result<Polygon> {
    let points = input::read_points(path)?;
    let poly = Polygon::new(&points, &PolygonLimits::default())
        .with_context(|| format!("invalid polygon in {}", path.display()))?;
    if poly.was_reversed() {
        tracing::info!("input is counterclockwise; searching on the reversed order");
    }
    Ok(poly)
}

fn chords_out(poly: &Polygon, chords: &[Chord]) -> Vec<ChordOut> {
    chords
        .iter()
        .filter_map(|c| {
            let (a, b) = c.ids()?;
            let (a, b) = (poly.input_index(a)?, poly.input_index(b)?);
            Some(ChordOut {
                a: a.min(b),
                b: a.max(b),
                length: c.length(),
            })
        })
        .collect()
}

fn solve(input: &Path, out: Option<&Path>, timeout_secs: Option<f64>) -> Result<()> {
    tracing::info!(input = %input.display(), "solve");
    let timeout = match timeout_secs {
        Some(s) if !(s.is_finite() && s >= 0.0) => bail!("--timeout-secs must be >= 0, got {s}"),
        Some(s) => Some(Duration::from_secs_f64(s)),
        None => None,
    };
    let poly = load(input)?;
    let report = run_search(&poly, timeout)?;
    let json = serde_json::to_string_pretty(&report)?;
    match out {
        Some(path) => {
            write_output(path, &json)?;
            provenance::write_sidecar(
                path,
                serde_json::json!({
                    "command": "solve",
                    "input": input.to_string_lossy(),
                    "timeout_secs": timeout_secs,
                    "n": report.n,
                }),
            )?;
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// Run the search on a worker thread, logging progress and cancelling once
/// `timeout` has elapsed.
fn run_search(poly: &Polygon, timeout: Option<Duration>) -> Result<SolveReport> {
    let diagonals = poly.diagonals();
    let diagonal_count = diagonals.len();
    tracing::info!(n = poly.len(), diagonals = diagonal_count, "diagonals generated");

    let task = task::spawn(diagonals, poly.len(), NoProgress).context("spawning search")?;
    let started = Instant::now();
    let mut last = None;
    let mut cancelled = false;
    while !task.is_finished() {
        let percent = task.progress();
        if last != Some(percent) {
            tracing::info!(percent, "searching");
            last = Some(percent);
        }
        if !cancelled && timeout.is_some_and(|t| started.elapsed() >= t) {
            tracing::warn!(elapsed = ?started.elapsed(), "timeout reached; cancelling");
            task.cancel();
            cancelled = true;
        }
        thread::sleep(POLL);
    }
    let outcome = task.join()?;
    tracing::info!(status = outcome.status(), elapsed = ?started.elapsed(), "search finished");

    let (max_length, chords) = match outcome.triangulation() {
        Some(t) => (Some(t.max_length()), chords_out(poly, &t.chords)),
        None => (None, Vec::new()),
    };
    Ok(SolveReport {
        status: outcome.status(),
        n: poly.len(),
        diagonal_count,
        max_length,
        chords,
    })
}

fn diagonals(input: &Path) -> Result<()> {
    let poly = load(input)?;
    let diags = chords_out(&poly, &poly.diagonals());
    println!("{}", serde_json::to_string_pretty(&diags)?);
    Ok(())
}

fn sample(n: usize, seed: u64, out: Option<&Path>) -> Result<()> {
    let cfg = SamplerCfg {
        vertices: n,
        ..SamplerCfg::default()
    };
    let poly = draw_simple_polygon(cfg, ReplayToken::new(seed, 0), &PolygonLimits::default())
        .with_context(|| format!("sampling a {n}-gon"))?;
    let points: Vec<Vec2<f64>> = poly.vertices().iter().map(|v| v.pos).collect();
    let text = input::format_points(&points);
    match out {
        Some(path) => {
            write_output(path, &text)?;
            tracing::info!(n, seed, path = %path.display(), "sample written");
        }
        None => print!("{text}"),
    }
    Ok(())
}

fn write_output(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(path, contents).with_context(|| format!("writing {}", path.display()))
}
