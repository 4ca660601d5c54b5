//! Resamples a persisted curve file and reports where it touches itself.
//!
//! ```text
//! curve-check n0012_upper.sldcrv
//! curve-check n0012_upper.sldcrv --samples 5000 --threshold 0.0005
//! ```

use std::fs;
use std::path::PathBuf;

use airfoil::io::parse_curve_points;
use airfoil::operations::{
    FindSelfIntersections, IntersectionParams, ResampleCurve, ResampleParams,
};
use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Detect self-intersections of a resampled curve")]
struct Cli {
    /// Curve file: one header line, then x,y,z per line
    input: PathBuf,

    /// Number of samples on the resampled curve
    #[arg(short = 'n', long, default_value_t = 1000)]
    samples: usize,

    /// Maximum distance between samples that count as touching
    #[arg(short, long, default_value_t = 0.001)]
    threshold: f64,

    /// Ignore pairs at most this many samples apart
    #[arg(short, long, default_value_t = 5)]
    window: usize,

    /// Nearest samples examined per sample
    #[arg(short = 'k', long, default_value_t = 10)]
    neighbors: usize,

    /// Number of candidates to print
    #[arg(long, default_value_t = 10)]
    show: usize,

    /// Log level used when RUST_LOG is not set
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let text = fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    let points = parse_curve_points(&text)
        .with_context(|| format!("failed to parse {}", cli.input.display()))?;
    info!(points = points.len(), "loaded curve");

    let resample = ResampleParams {
        samples: cli.samples,
        ..ResampleParams::default()
    };
    let curve = ResampleCurve::new(points)
        .with_params(resample)
        .execute()
        .context("failed to fit curve")?;

    let params = IntersectionParams {
        threshold: cli.threshold,
        adjacency_window: cli.window,
        neighbors: cli.neighbors,
    };
    let candidates = FindSelfIntersections::new(&curve)
        .with_params(params)
        .execute();

    println!("Found {} potential self-intersections", candidates.len());
    for c in candidates.iter().take(cli.show) {
        println!(
            "  {:>5} <-> {:<5} ({:.6}, {:.6}, {:.6})  d = {:.3e}",
            c.i,
            c.j,
            c.point_i.x,
            c.point_i.y,
            c.point_i.z,
            c.distance()
        );
    }
    Ok(())
}
