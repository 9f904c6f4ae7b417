//! "Now" values built through chrono.
//!
//! The local variants consult the system time zone on every call, which is
//! the cost being measured.

use chrono::{Local, Utc};
use std::hint::black_box;

/// Local wall-clock time with the offset dropped
pub fn current_local_unzoned() {
    black_box(Local::now().naive_local());
}

/// Local time carrying the system zone's offset
pub fn current_local_zoned() {
    black_box(Local::now());
}

/// Current instant pinned to UTC
pub fn current_utc_zoned() {
    black_box(Utc::now());
}
