//! Human relative-time labels ("3 hours ago") for scan timestamps.

#[cfg(test)]
#[path = "relative_time_test.rs"]
mod relative_time_test;

use time::format_description::well_known::{Iso8601, Rfc3339};
use time::{OffsetDateTime, PrimitiveDateTime};

pub const JUST_NOW: &str = "Just now";
pub const NEVER: &str = "Never";

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// Label for a delta in whole seconds. Negative deltas (clock skew) read
/// as "Just now".
#[must_use]
pub fn format_elapsed_secs(secs: i64) -> String {
    if secs < MINUTE {
        return JUST_NOW.to_owned();
    }
    if secs < HOUR {
        return plural(secs / MINUTE, "minute");
    }
    if secs < DAY {
        return plural(secs / HOUR, "hour");
    }
    plural(secs / DAY, "day")
}

/// Label for `then` as seen from `now`.
#[must_use]
pub fn format_relative(then: OffsetDateTime, now: OffsetDateTime) -> String {
    format_elapsed_secs((now - then).whole_seconds())
}

/// Label for an optional timestamp, `"Never"` when absent.
#[must_use]
pub fn format_relative_or_never(then: Option<OffsetDateTime>, now: OffsetDateTime) -> String {
    then.map_or_else(|| NEVER.to_owned(), |t| format_relative(t, now))
}

/// Parse a backend timestamp.
///
/// Accepts RFC 3339 (`2026-10-16T10:00:00Z`) and offset-less ISO 8601
/// (`2026-10-16T10:00:00.123`), the latter read as UTC.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    OffsetDateTime::parse(raw, &Rfc3339)
        .or_else(|_| OffsetDateTime::parse(raw, &Iso8601::DEFAULT))
        .ok()
        .or_else(|| PrimitiveDateTime::parse(raw, &Iso8601::DEFAULT).ok().map(PrimitiveDateTime::assume_utc))
}

fn plural(n: i64, unit: &str) -> String {
    if n > 1 { format!("{n} {unit}s ago") } else { format!("{n} {unit} ago") }
}
