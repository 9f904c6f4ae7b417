//! Date/Time Benchmark Suite
//!
//! Times how long common date/time operations take and prints the average
//! per call.
//!
//! Run with: `cargo run --release -- --iterations 10000`

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use datetime_bench::benchmark::{workloads, SystemInfo};
use datetime_bench::config::{Args, DEFAULT_LOG_FILTER};
use datetime_bench::{BenchmarkRunner, Result};

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Benchmark aborted: {e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: &Args) -> Result<()> {
    let runner = BenchmarkRunner::new(args.iterations)?;

    let info = SystemInfo::default();
    info!(
        "Starting suite at {} on {} ({} cores)",
        info.started_at, info.os, info.cpu_cores
    );

    {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", runner.banner())?;
    }

    let results = runner.run_all(&workloads::catalog())?;
    info!("Suite complete: {} workloads", results.len());
    Ok(())
}
