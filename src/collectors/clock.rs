//! Timestamps for diagnostic reports.

use chrono::{DateTime, Local, SecondsFormat, Utc};
use std::sync::atomic::{AtomicI64, Ordering};

/// Source of the current time.
pub trait Clock: Send + Sync + std::fmt::Debug {
    /// Current instant in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock that never hands out an instant earlier than one it already
/// returned, so sequential reports carry non-decreasing timestamps even if
/// the system clock is stepped backwards.
#[derive(Debug, Default)]
pub struct SystemClock {
    /// High-water mark in microseconds since the Unix epoch.
    last_micros: AtomicI64,
}

impl SystemClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        let now = Utc::now().timestamp_micros();
        let prev = self.last_micros.fetch_max(now, Ordering::AcqRel);
        let micros = prev.max(now);
        DateTime::from_timestamp_micros(micros).unwrap_or_else(Utc::now)
    }
}

/// Clock pinned to a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// ISO-8601 with microseconds and a `Z` suffix, e.g. `2024-05-01T12:00:00.000000Z`.
pub fn iso8601(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Server-local wall time as `YYYY-MM-DD HH:MM:SS`.
pub fn server_time(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_iso8601_format() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 5).unwrap();
        assert_eq!(iso8601(at), "2024-05-01T12:30:05.000000Z");
    }

    #[test]
    fn test_server_time_shape() {
        let rendered = server_time(Utc::now());
        assert_eq!(rendered.len(), 19);
        assert!(chrono::NaiveDateTime::parse_from_str(&rendered, "%Y-%m-%d %H:%M:%S").is_ok());
    }

    #[test]
    fn test_system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let mut prev = clock.now();
        for _ in 0..1000 {
            let next = clock.now();
            assert!(next >= prev);
            prev = next;
        }
    }

    #[test]
    fn test_system_clock_holds_high_water_mark() {
        let clock = SystemClock::new();
        let future = Utc::now().timestamp_micros() + 60_000_000;
        clock.last_micros.store(future, Ordering::SeqCst);
        assert_eq!(clock.now().timestamp_micros(), future);
    }
}
