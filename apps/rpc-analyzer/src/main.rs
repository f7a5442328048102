//! rpc-analyzer — diagnostic walk over an RPC geometry.
//!
//! Loads a geometry description (CSV, see `rpc_geometry::loader`) and prints,
//! for every roll, its identifiers, global placement and strip positions.
//! Without `--geometry` a small bundled geometry is used.
//!
//! ```text
//! rpc-analyzer --geometry rolls.csv --strip-stride 10
//! RUST_LOG=debug rpc-analyzer
//! ```

mod analyzer;


use std::io::{self, Cursor};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use rpc_geometry::{load_geometry_csv, load_geometry_reader};

use analyzer::{AnalyzerConfig, GeometryAnalyzer};

const SAMPLE_GEOMETRY: &str = include_str!("../data/sample_rolls.csv");

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Geometry description CSV.  Defaults to the bundled sample.
    #[arg(long)]
    geometry: Option<PathBuf>,

    /// Width of the dashed separator lines.
    #[arg(long, default_value_t = 104)]
    dashed_line_width: usize,

    /// Print the real-valued centre and global position of every N-th strip.
    #[arg(long, default_value_t = 5)]
    strip_stride: i32,
}

impl Args {
    fn config(&self) -> AnalyzerConfig {
        AnalyzerConfig {
            dashed_line_width: self.dashed_line_width,
            strip_stride:      self.strip_stride.max(1),
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let t_load = Instant::now();
    let geometry = match &args.geometry {
        Some(path) => load_geometry_csv(path)
            .with_context(|| format!("loading geometry from {}", path.display()))?,
        None => load_geometry_reader(Cursor::new(SAMPLE_GEOMETRY))
            .context("loading bundled sample geometry")?,
    };
    info!(
        "loaded {} rolls of {} types in {:.3}s",
        geometry.len(),
        geometry.det_types().len(),
        t_load.elapsed().as_secs_f64(),
    );

    let analyzer = GeometryAnalyzer::new(args.config());
    let stdout = io::stdout();
    let summary = analyzer.analyze(&geometry, &mut stdout.lock())?;

    info!("walked {} rolls, {} duplicate ids", summary.rolls, summary.duplicates);
    Ok(())
}
