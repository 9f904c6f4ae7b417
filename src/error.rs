//! Error type shared by the runner and the binary.

/// Everything that can stop a benchmark run before or while reporting.
///
/// Workload failures are not represented here: a panicking workload aborts
/// the whole run.
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    #[error("invalid configuration: iteration count must be positive, got {iterations}")]
    InvalidConfiguration { iterations: i64 },

    #[error("failed to write benchmark report")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BenchError>;
