//! Raw clock reads with no date/time object construction.

use std::hint::black_box;
use std::time::{SystemTime, UNIX_EPOCH};

/// Read the system clock as integer milliseconds since the Unix epoch.
///
/// A clock set before 1970 yields `Err`, which is kept rather than unwrapped.
pub fn current_utc_raw() {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis());
    black_box(millis);
}
