//! Configuration constants for the benchmark suite.
//!
//! The iteration count is the only runtime tunable; everything else here is
//! fixed so that runs stay comparable.

use clap::Parser;

/// Iterations per workload when nothing else is configured
pub const DEFAULT_ITERATIONS: i64 = 10_000;

/// Environment variable consulted when `--iterations` is absent
pub const ITERATIONS_ENV: &str = "BENCH_ITERATIONS";

/// Column width of the `name:` label in a report line
pub const LABEL_WIDTH: usize = 45;

/// Decimal places of the per-iteration average (nanosecond precision)
pub const AVERAGE_DECIMALS: usize = 9;

/// Runtime named in the banner line
pub const HOST_LABEL: &str = "Rust";

/// Fixed epoch-millisecond input for the timestamp conversion workload
pub const SAMPLE_EPOCH_MILLIS: i64 = 420;

/// Fixed pre-epoch input (1966-06-14T00:00:00Z) in epoch seconds
pub const SAMPLE_PRE_EPOCH_SECS: i64 = -112_060_800;

/// Default log filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Command-line arguments of the `datetime_bench` binary
#[derive(Debug, Clone, Parser)]
#[command(name = "datetime_bench", version, about)]
pub struct Args {
    /// Number of times each workload is invoked inside its timed region
    #[arg(
        short = 'n',
        long,
        env = ITERATIONS_ENV,
        default_value_t = DEFAULT_ITERATIONS,
        allow_negative_numbers = true
    )]
    pub iterations: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_default_iterations() {
        let args = Args::try_parse_from(["datetime_bench"]).unwrap();
        // The env var may be set by whoever runs the tests.
        if std::env::var_os(ITERATIONS_ENV).is_none() {
            assert_eq!(args.iterations, DEFAULT_ITERATIONS);
        }
    }

    #[test]
    fn test_args_explicit_iterations() {
        let args = Args::try_parse_from(["datetime_bench", "--iterations", "250"]).unwrap();
        assert_eq!(args.iterations, 250);

        let args = Args::try_parse_from(["datetime_bench", "-n", "7"]).unwrap();
        assert_eq!(args.iterations, 7);
    }

    #[test]
    fn test_args_accept_negative_for_validation() {
        let args = Args::try_parse_from(["datetime_bench", "--iterations", "-5"]).unwrap();
        assert_eq!(args.iterations, -5);
    }

    #[test]
    fn test_args_reject_unknown_flags() {
        assert!(Args::try_parse_from(["datetime_bench", "--format", "json"]).is_err());
    }
}
