//! viewspots - report the highest view spots of a terrain mesh.
//!
//! Usage: viewspots <MESH> [N] [OPTIONS]
//!
//! Logging is controlled through `RUST_LOG` (e.g. `RUST_LOG=debug`).

use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

use mesh_viewspots::algs::{MissingValuePolicy, ViewSpotOpts, compute_top_view_spots_with};
use mesh_viewspots::io::{self, JsonViewSpotWriter, ViewSpotWriter};

#[derive(Parser)]
#[command(name = "viewspots")]
#[command(author, version, about = "Find the highest view spots of a terrain mesh", long_about = None)]
struct Cli {
    /// Input mesh (JSON with `elements` and `values`)
    mesh: PathBuf,

    /// Number of view spots to report (default: all)
    count: Option<usize>,

    /// Skip elements without a value instead of failing
    #[arg(long)]
    exclude_missing: bool,

    /// Print single-line JSON
    #[arg(long)]
    compact: bool,

    /// Report elapsed time on stderr
    #[arg(short, long)]
    timing: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let start = Instant::now();
    let mesh = io::read_mesh_file(&cli.mesh)?;
    let loaded = start.elapsed();

    let opts = ViewSpotOpts {
        missing_value: if cli.exclude_missing {
            MissingValuePolicy::Exclude
        } else {
            MissingValuePolicy::Error
        },
    };
    let compute_start = Instant::now();
    let spots = compute_top_view_spots_with(&mesh, cli.count.unwrap_or(usize::MAX), opts)?;
    let computed = compute_start.elapsed();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    JsonViewSpotWriter {
        pretty: !cli.compact,
    }
    .write(&mut out, &spots)?;
    out.flush()?;

    if cli.timing {
        eprintln!(
            "Loaded in {}ms, computed in {}ms, total {}ms",
            loaded.as_millis(),
            computed.as_millis(),
            start.elapsed().as_millis()
        );
    }
    Ok(())
}
