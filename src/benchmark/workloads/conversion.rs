//! Conversion of fixed raw timestamps into zoned values.
//!
//! The inputs are constants so no clock is read inside the loop.

use chrono::{DateTime, TimeZone, Utc};
use std::hint::black_box;
use std::time::{Duration, UNIX_EPOCH};

use crate::config::{SAMPLE_EPOCH_MILLIS, SAMPLE_PRE_EPOCH_SECS};

/// Epoch millis -> `SystemTime` instant -> `DateTime<Utc>`
pub fn epoch_millis_to_zoned() {
    black_box(millis_to_utc(black_box(SAMPLE_EPOCH_MILLIS)));
}

/// Negative epoch seconds -> `DateTime<Utc>`
pub fn pre_epoch_secs_to_zoned() {
    black_box(Utc.timestamp_opt(black_box(SAMPLE_PRE_EPOCH_SECS), 0).single());
}

fn millis_to_utc(millis: i64) -> DateTime<Utc> {
    let offset = Duration::from_millis(millis.unsigned_abs());
    let instant = if millis >= 0 {
        UNIX_EPOCH + offset
    } else {
        UNIX_EPOCH - offset
    };
    DateTime::<Utc>::from(instant)
}
