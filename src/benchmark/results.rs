//! Timing results and their report-line formatting.

use std::fmt;

use crate::config::{AVERAGE_DECIMALS, LABEL_WIDTH};

/// Outcome of timing one workload over the configured iteration count
#[derive(Debug, Clone, PartialEq)]
pub struct TimingResult {
    pub name: String,
    /// Wall time of the whole loop, in seconds
    pub total_elapsed_secs: f64,
    pub iterations: u64,
}

impl TimingResult {
    /// Mean seconds per iteration, loop overhead included
    pub fn average_secs(&self) -> f64 {
        self.total_elapsed_secs / self.iterations as f64
    }

    /// One report line without the trailing newline.
    ///
    /// Equivalent to `"%-45s %.9f s"` over `(name + ":", average)`, with the
    /// label truncated when it is wider than the column.
    pub fn report_line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TimingResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = format!("{}:", self.name);
        write!(
            f,
            "{:<width$.width$} {:.prec$} s",
            label,
            self.average_secs(),
            width = LABEL_WIDTH,
            prec = AVERAGE_DECIMALS,
        )
    }
}

/// Host context logged at the start of a run
#[derive(Debug, Clone)]
pub struct SystemInfo {
    pub os: String,
    pub cpu_cores: usize,
    pub started_at: String,
}

impl Default for SystemInfo {
    fn default() -> Self {
        Self {
            os: std::env::consts::OS.to_string(),
            cpu_cores: std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(1),
            started_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
