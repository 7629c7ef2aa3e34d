//! Time and timestamp helpers.

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};

/// UTC timestamp used for `createdAt` / `updatedAt`.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time, truncated to the millisecond precision
/// timestamps are persisted with.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now().trunc_subsecs(3)
}

/// Format a timestamp the way it is persisted and served (RFC 3339, millis, `Z`).
#[must_use]
pub fn to_rfc3339(ts: Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_current_utc_time() {
        let before = Utc::now().trunc_subsecs(3);
        let ts = now();
        let after = Utc::now();
        assert!(ts >= before);
        assert!(ts <= after);
        assert_eq!(ts.timestamp_subsec_nanos() % 1_000_000, 0);
    }

    #[test]
    fn should_format_with_millis_and_zulu_suffix() {
        let ts = DateTime::parse_from_rfc3339("2024-03-01T10:20:30.5+00:00")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(to_rfc3339(ts), "2024-03-01T10:20:30.500Z");
    }
}
