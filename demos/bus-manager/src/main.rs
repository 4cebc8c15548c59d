//! bus-manager — answer bus and stop queries over a textual transit network.
//!
//! Reads a request document (see `bn_io::parser`) from `--input` or stdin and
//! prints one response line per stat request:
//!
//! ```text
//! cargo run -p bus-manager -- --input demos/bus-manager/data/sample.txt
//! ```
//!
//! Set `RUST_LOG=debug` (or pass `-v`) to see cache activity.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, info};

use bn_core::NetworkConfig;

#[derive(Parser, Debug)]
#[command(version, about = "Describe bus routes and the buses serving each stop")]
struct Cli {
    #[arg(short = 'i', long, help = "Request document to read. Defaults to stdin.")]
    input: Option<PathBuf>,

    #[arg(
        long,
        default_value_t = bn_core::EARTH_RADIUS_M,
        help = "Sphere radius in metres used for straight-line distances."
    )]
    earth_radius: f64,

    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase log verbosity.")]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let config = NetworkConfig { earth_radius_m: cli.earth_radius, ..NetworkConfig::default() };

    let started = Instant::now();
    let stdout = io::stdout().lock();
    match &cli.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("could not open {}", path.display()))?;
            bn_io::process(BufReader::new(file), stdout, config)
                .with_context(|| format!("failed to process {}", path.display()))?;
        }
        None => {
            bn_io::process(io::stdin().lock(), stdout, config)
                .context("failed to process stdin")?;
        }
    }
    info!("done in {:.3} s", started.elapsed().as_secs_f64());

    Ok(())
}
