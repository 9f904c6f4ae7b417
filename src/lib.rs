//! # Date/Time Benchmark Suite
//!
//! A small timed-loop harness for measuring how long it takes to read the
//! clock and build date/time values with `std::time` and `chrono`.
//!
//! ## Modules
//!
//! - [`benchmark`]: Runner, timing results and the workload catalog
//! - [`clock`]: Clock sources and the elapsed-time [`clock::Timer`]
//! - [`config`]: Configuration constants and command-line arguments
//! - [`error`]: Crate error type

pub mod benchmark;
pub mod clock;
pub mod config;
pub mod error;

pub use benchmark::{BenchmarkRunner, IterationCount, TimingResult, Workload, WorkloadKind};
pub use error::{BenchError, Result};
