//! ISO-8601 timestamps used as table sort keys.
//!
//! All timestamps are UTC with millisecond precision
//! (`2024-05-01T09:30:00.123Z`), so lexical order equals chronological order.

use jiff::{SignedDuration, Timestamp};

use crate::error::CoreError;

/// Lower bound for thread queries.
pub const EPOCH: &str = "1970-01-01T00:00:00.000Z";

/// Current wall-clock time as a sort key.
pub fn now() -> String {
    format(Timestamp::now())
}

/// Format a timestamp as a sort key, truncating to milliseconds.
pub fn format(ts: Timestamp) -> String {
    format!(
        "{}.{:03}Z",
        ts.strftime("%Y-%m-%dT%H:%M:%S"),
        ts.subsec_millisecond()
    )
}

pub fn parse(value: &str) -> Result<Timestamp, CoreError> {
    value
        .parse::<Timestamp>()
        .map_err(|e| CoreError::InvalidTimestamp(format!("{value}: {e}")))
}

/// Current wall-clock time, bumped to one millisecond past `previous` when
/// the clock has not advanced beyond it.
pub fn now_after(previous: &str) -> Result<String, CoreError> {
    let floor = parse(previous)? + SignedDuration::from_millis(1);
    let now = Timestamp::now();

    if now.as_millisecond() < floor.as_millisecond() {
        Ok(format(floor))
    } else {
        Ok(format(now))
    }
}
