// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Command-line front end: parses points from a file or generates them
//! randomly, builds a triangulation, optionally renders a summary, and
//! optionally writes the result back out.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use rand::{RngCore, SeedableRng};
use tracing::info;

use qedelaunay::{io, Point, Triangulation};

mod generate_cli {
    // Re-exported here to keep `main.rs` decoupled from the library's
    // internal module layout; the library crate already owns these.
    pub use qedelaunay::generate::*;
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Distribution {
    Normal,
    Uniform,
    UniformCircle,
    Polygon,
}

/// Builds a planar Delaunay triangulation from a point set, either read
/// from a file or drawn at random.
#[derive(Parser, Debug)]
#[command(name = "qedelaunay", version)]
struct Cli {
    /// Enable verbose progress printing.
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Read points from a text file instead of generating them.
    #[arg(short = 'i', long = "input", value_name = "PATH")]
    input: Option<PathBuf>,

    /// Write the triangulation to a text file after building.
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    output: Option<PathBuf>,

    /// Number of random points to generate when `-i` is not given.
    #[arg(short = 'n', long = "count", default_value_t = 500)]
    count: usize,

    /// Random point distribution.
    #[arg(short = 'p', long = "distribution", value_enum, default_value = "normal")]
    distribution: DistributionArg,

    /// Polygon smoothing iterations (distribution = polygon).
    #[arg(short = 's', long = "smoothing", default_value_t = 20)]
    smoothing: usize,

    /// x-extent for the uniform/uniform-circle generators.
    #[arg(short = 'a', long = "extent-x", default_value_t = 1.0)]
    extent_x: f64,

    /// y-extent for the uniform/uniform-circle generators.
    #[arg(short = 'b', long = "extent-y", default_value_t = 1.0)]
    extent_y: f64,

    /// Target animation duration in seconds (rendering pacing only).
    #[arg(short = 't', long = "time", default_value_t = 0.0)]
    time: f64,

    /// Disable rendering.
    #[arg(short = 'd', long = "disable-render")]
    disable_render: bool,

    /// Deduplicate input points (0 or 1).
    #[arg(short = 'r', long = "remove-duplicates", default_value_t = 1)]
    remove_duplicates: u8,
}

// clap's ValueEnum derive wants the variant names to match CLI tokens;
// alias the public-facing enum so `-p uniform-circle` kebab-cases.
use Distribution as DistributionArg;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::INFO
        } else {
            tracing::Level::WARN
        })
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install tracing subscriber")?;

    let points = match &cli.input {
        Some(path) => {
            info!(path = %path.display(), "reading points");
            io::read_points_file(path)?
        }
        None => {
            let mut rng = rand::rngs::StdRng::from_entropy();
            let seed = rng.next_u64();
            println!("seed={seed}");
            let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
            info!(n = cli.count, distribution = ?cli.distribution, "generating points");
            generate_points(&mut rng, &cli)
        }
    };

    let remove_duplicates = cli.remove_duplicates != 0;
    let build_start = Instant::now();
    let mut triangulation = Triangulation::new(points, remove_duplicates);
    let build_time = build_start.elapsed();
    info!(n = triangulation.len(), elapsed = ?build_time, "triangulation built");

    let pause_ms = if cli.time > 0.0 {
        ((cli.time * 1000.0) / 3.0).round() as u64
    } else {
        0
    };
    qedelaunay::render::show(&mut triangulation, build_time, cli.disable_render, pause_ms);

    if let Some(path) = &cli.output {
        let edges = triangulation.edges();
        let points = triangulation.points().to_vec();
        let lines: Vec<(Point, Point)> = edges
            .iter()
            .map(|e| (points[e.a], points[e.b]))
            .collect();
        io::write_output_file(path, &points, &lines);
    }

    Ok(())
}

fn generate_points(rng: &mut rand::rngs::StdRng, cli: &Cli) -> Vec<Point> {
    match cli.distribution {
        DistributionArg::Normal => generate_cli::normal(rng, cli.count),
        DistributionArg::Uniform => generate_cli::uniform(rng, cli.count, cli.extent_x, cli.extent_y),
        DistributionArg::UniformCircle => {
            generate_cli::uniform_circle(rng, cli.count, cli.extent_x, cli.extent_y)
        }
        DistributionArg::Polygon => generate_cli::polygon(rng, cli.count, cli.smoothing),
    }
}

