//! Benchmark workload definitions.
//!
//! Each workload reads or builds one kind of date/time value. The runner
//! treats them all as opaque closures; [`WorkloadKind`] is only the catalog
//! the binary registers, in order.

mod clock_read;
mod construction;
mod conversion;

pub use clock_read::*;
pub use construction::*;
pub use conversion::*;

use std::borrow::Cow;
use std::fmt;

/// A named, zero-argument unit of work
pub struct Workload {
    name: Cow<'static, str>,
    op: Box<dyn Fn()>,
}

impl Workload {
    pub fn new(name: impl Into<Cow<'static, str>>, op: impl Fn() + 'static) -> Self {
        Self {
            name: name.into(),
            op: Box::new(op),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn invoke(&self) {
        (self.op)()
    }
}

impl fmt::Debug for Workload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Workload").field("name", &self.name).finish()
    }
}

/// The date/time workloads shipped with the suite
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum WorkloadKind {
    CurrentUtcRaw,
    CurrentLocalUnzoned,
    CurrentLocalZoned,
    CurrentUtcZoned,
    EpochMillisToZoned,
    PreEpochSecsToZoned,
}

impl WorkloadKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::CurrentUtcRaw => "current UTC time (raw)",
            Self::CurrentLocalUnzoned => "current unzoned local time (legacy API)",
            Self::CurrentLocalZoned => "current zoned local time (modern API)",
            Self::CurrentUtcZoned => "current UTC time (modern API)",
            Self::EpochMillisToZoned => "raw UTC timestamp to zoned object",
            Self::PreEpochSecsToZoned => "pre-epoch raw timestamp to zoned object",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::CurrentUtcRaw => "SystemTime::now() as integer milliseconds since the epoch",
            Self::CurrentLocalUnzoned => "chrono::Local::now() reduced to a NaiveDateTime",
            Self::CurrentLocalZoned => "chrono::Local::now() in the system zone",
            Self::CurrentUtcZoned => "chrono::Utc::now()",
            Self::EpochMillisToZoned => "Fixed epoch millis -> SystemTime -> DateTime<Utc>",
            Self::PreEpochSecsToZoned => "Fixed negative epoch seconds -> DateTime<Utc>",
        }
    }

    pub fn all() -> &'static [WorkloadKind] {
        &[
            Self::CurrentUtcRaw,
            Self::CurrentLocalUnzoned,
            Self::CurrentLocalZoned,
            Self::CurrentUtcZoned,
            Self::EpochMillisToZoned,
            Self::PreEpochSecsToZoned,
        ]
    }

    pub fn workload(&self) -> Workload {
        let op: fn() = match self {
            Self::CurrentUtcRaw => current_utc_raw,
            Self::CurrentLocalUnzoned => current_local_unzoned,
            Self::CurrentLocalZoned => current_local_zoned,
            Self::CurrentUtcZoned => current_utc_zoned,
            Self::EpochMillisToZoned => epoch_millis_to_zoned,
            Self::PreEpochSecsToZoned => pre_epoch_secs_to_zoned,
        };
        Workload::new(self.name(), op)
    }
}

/// Every catalog workload, in registration order
pub fn catalog() -> Vec<Workload> {
    WorkloadKind::all().iter().map(WorkloadKind::workload).collect()
}
