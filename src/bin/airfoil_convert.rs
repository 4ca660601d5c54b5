//! Splits a two-surface airfoil coordinate listing into upper and lower
//! curve files.
//!
//! ```text
//! airfoil-convert n0012.dat                    # n0012_upper.sldcrv, n0012_lower.sldcrv
//! airfoil-convert n0012.dat -o naca -e csv -H  # naca_upper.csv with X,Y,Z header
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use airfoil::io::convert_to_csv;
use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Convert airfoil coordinates to upper/lower curve files")]
struct Cli {
    /// Coordinate listing: two header lines, then both surfaces
    input: PathBuf,

    /// Output filename base (defaults to the input file stem)
    #[arg(short, long)]
    output: Option<String>,

    /// Output file extension
    #[arg(short, long, default_value = "sldcrv")]
    ext: String,

    /// Multiply every coordinate by this factor
    #[arg(short, long, default_value_t = 100)]
    scale: i64,

    /// Write an X,Y,Z header row first
    #[arg(short = 'H', long)]
    header: bool,

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

    let base = match &cli.output {
        Some(base) => base.clone(),
        None => cli
            .input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .context("input path has no file name")?,
    };

    let (upper, lower) = convert_to_csv(&text, cli.scale, cli.header);
    write_curve(&PathBuf::from(format!("{base}_upper.{}", cli.ext)), &upper)?;
    write_curve(&PathBuf::from(format!("{base}_lower.{}", cli.ext)), &lower)?;
    Ok(())
}

fn write_curve(path: &Path, data: &str) -> Result<()> {
    fs::write(path, data).with_context(|| format!("failed to write {}", path.display()))?;
    info!(
        path = %path.display(),
        lines = data.matches('\n').count(),
        "curve data written"
    );
    Ok(())
}
