use time::Duration;

use super::*;

fn now() -> OffsetDateTime {
    OffsetDateTime::from_unix_timestamp(1_800_000_000).unwrap()
}

#[test]
fn under_a_minute_is_just_now() {
    assert_eq!(format_elapsed_secs(0), "Just now");
    assert_eq!(format_elapsed_secs(59), "Just now");
}

#[test]
fn minutes_pluralize_at_boundary() {
    assert_eq!(format_elapsed_secs(60), "1 minute ago");
    assert_eq!(format_elapsed_secs(119), "1 minute ago");
    assert_eq!(format_elapsed_secs(120), "2 minutes ago");
    assert_eq!(format_elapsed_secs(3599), "59 minutes ago");
}

#[test]
fn hours_pluralize_at_boundary() {
    assert_eq!(format_elapsed_secs(3600), "1 hour ago");
    assert_eq!(format_elapsed_secs(7200), "2 hours ago");
    assert_eq!(format_elapsed_secs(86_399), "23 hours ago");
}

#[test]
fn days_from_twenty_four_hours() {
    assert_eq!(format_elapsed_secs(86_400), "1 day ago");
    assert_eq!(format_elapsed_secs(3 * 86_400 + 5), "3 days ago");
}

#[test]
fn future_timestamps_are_just_now() {
    assert_eq!(format_elapsed_secs(-300), "Just now");
}

#[test]
fn relative_uses_difference() {
    let then = now() - Duration::minutes(15);
    assert_eq!(format_relative(then, now()), "15 minutes ago");
}

#[test]
fn absent_timestamp_is_never() {
    assert_eq!(format_relative_or_never(None, now()), "Never");
    assert_eq!(format_relative_or_never(Some(now() - Duration::hours(2)), now()), "2 hours ago");
}

#[test]
fn parses_rfc3339_and_naive_iso() {
    let utc = parse_timestamp("2027-01-15T08:00:00Z").unwrap();
    let offset = parse_timestamp("2027-01-15T10:00:00+02:00").unwrap();
    assert_eq!(utc, offset);
    let naive = parse_timestamp("2027-01-15T08:00:00.000").unwrap();
    assert_eq!(naive, utc);
}

#[test]
fn rejects_garbage_and_blank() {
    assert!(parse_timestamp("yesterday").is_none());
    assert!(parse_timestamp("  ").is_none());
}
