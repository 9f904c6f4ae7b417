//! Benchmark execution and reporting.

use std::io::{self, Write};
use std::num::NonZeroU64;

use tracing::{debug, info};

use crate::benchmark::results::TimingResult;
use crate::benchmark::workloads::Workload;
use crate::clock::{Clock, MonotonicClock, Timer};
use crate::config::HOST_LABEL;
use crate::error::{BenchError, Result};

/// Number of times each workload runs inside its timed region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IterationCount(NonZeroU64);

impl IterationCount {
    /// Validate a raw count; zero and negative values are rejected.
    pub fn new(iterations: i64) -> Result<Self> {
        u64::try_from(iterations)
            .ok()
            .and_then(NonZeroU64::new)
            .map(Self)
            .ok_or(BenchError::InvalidConfiguration { iterations })
    }

    pub fn get(self) -> u64 {
        self.0.get()
    }
}

/// Runs workloads in a timed loop and prints one line per workload
#[derive(Debug)]
pub struct BenchmarkRunner<C: Clock = MonotonicClock> {
    iterations: IterationCount,
    clock: C,
}

impl BenchmarkRunner<MonotonicClock> {
    pub fn new(iterations: i64) -> Result<Self> {
        Self::with_clock(iterations, MonotonicClock::new())
    }
}

impl<C: Clock> BenchmarkRunner<C> {
    /// Build a runner over an explicit clock. Validation happens before the
    /// clock is ever read.
    pub fn with_clock(iterations: i64, clock: C) -> Result<Self> {
        let iterations = IterationCount::new(iterations)?;
        Ok(Self { iterations, clock })
    }

    pub fn iterations(&self) -> IterationCount {
        self.iterations
    }

    /// `Bench <host>, <N> iters:`
    pub fn banner(&self) -> String {
        format!("Bench {}, {} iters:", HOST_LABEL, self.iterations.get())
    }

    /// Time `iterations` back-to-back invocations of `workload`.
    ///
    /// The clock is read once before and once after the loop, so the total
    /// includes loop overhead.
    pub fn run(&self, workload: &Workload) -> TimingResult {
        let n = self.iterations.get();
        info!("Running workload '{}' ({} iterations)", workload.name(), n);

        let timer = Timer::start(&self.clock);
        for _ in 0..n {
            workload.invoke();
        }
        let total_elapsed_secs = timer.elapsed_secs();

        let result = TimingResult {
            name: workload.name().to_string(),
            total_elapsed_secs,
            iterations: n,
        };
        debug!(
            "Workload '{}' took {:.6}s total, {:.9}s/iter",
            result.name,
            result.total_elapsed_secs,
            result.average_secs()
        );
        result
    }

    /// Print one result line to standard output
    pub fn report(&self, result: &TimingResult) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        Self::write_report(&mut out, result)
    }

    /// Write one result line to an arbitrary sink
    pub fn write_report<W: Write>(out: &mut W, result: &TimingResult) -> Result<()> {
        writeln!(out, "{}", result.report_line())?;
        Ok(())
    }

    /// Run and report every workload, in order, to standard output
    pub fn run_all(&self, workloads: &[Workload]) -> Result<Vec<TimingResult>> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_all_to(&mut out, workloads)
    }

    /// Run and report every workload, in order, to `out`.
    ///
    /// Each line is flushed before the next workload starts.
    pub fn run_all_to<W: Write>(
        &self,
        out: &mut W,
        workloads: &[Workload],
    ) -> Result<Vec<TimingResult>> {
        let mut results = Vec::with_capacity(workloads.len());
        for workload in workloads {
            let result = self.run(workload);
            Self::write_report(out, &result)?;
            out.flush()?;
            results.push(result);
        }
        Ok(results)
    }
}
