//! Time abstraction for testability.
//!
//! This module provides a [`Clock`] trait that allows injecting fixed clocks
//! in tests while using the real system clock in production, plus the
//! timestamp format shown in composed messages.

use std::time::SystemTime;

use chrono::{DateTime, FixedOffset, Offset, Utc};

/// Pattern used for the date element of a message (`MM/dd/yyyy HH:mm`).
///
/// Locale independent: only numeric fields are rendered.
pub const TIMESTAMP_FORMAT: &str = "%m/%d/%Y %H:%M";

/// Abstraction over system time for testability.
///
/// # Example
///
/// ```
/// use slack_feedback::time::{Clock, SystemClock};
///
/// let clock = SystemClock;
/// let now = clock.now();
/// assert!(now >= std::time::SystemTime::UNIX_EPOCH);
/// ```
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> SystemTime;
}

/// Production clock using actual system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// Clock that always reports the same instant.
///
/// Useful for deterministic output in tests and previews.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub SystemTime);

impl Clock for FixedClock {
    fn now(&self) -> SystemTime {
        self.0
    }
}

/// Formats `time` with [`TIMESTAMP_FORMAT`] at the given UTC offset.
#[must_use]
pub fn format_timestamp(time: SystemTime, offset: FixedOffset) -> String {
    DateTime::<Utc>::from(time)
        .with_timezone(&offset)
        .format(TIMESTAMP_FORMAT)
        .to_string()
}

/// Returns the zero UTC offset.
#[must_use]
pub fn utc_offset() -> FixedOffset {
    Utc.fix()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    // 2023-04-30 14:05:09 UTC
    const SAMPLE_SECS: u64 = 1_682_863_509;

    fn sample() -> SystemTime {
        SystemTime::UNIX_EPOCH + Duration::from_secs(SAMPLE_SECS)
    }

    #[test]
    fn system_clock_returns_current_time() {
        let clock = SystemClock;
        let before = SystemTime::now();
        let result = clock.now();
        let after = SystemTime::now();

        assert!(result >= before);
        assert!(result <= after);
    }

    #[test]
    fn system_clock_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SystemClock>();
    }

    #[test]
    fn fixed_clock_returns_same_instant() {
        let clock = FixedClock(sample());

        assert_eq!(clock.now(), sample());
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn formats_in_utc() {
        assert_eq!(format_timestamp(sample(), utc_offset()), "04/30/2023 14:05");
    }

    #[test]
    fn formats_with_positive_offset() {
        let oslo = FixedOffset::east_opt(2 * 3600).unwrap();

        assert_eq!(format_timestamp(sample(), oslo), "04/30/2023 16:05");
    }

    #[test]
    fn offset_can_cross_date_boundary() {
        let late = SystemTime::UNIX_EPOCH + Duration::from_secs(SAMPLE_SECS + 10 * 3600);
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();

        assert_eq!(format_timestamp(late, tokyo), "05/01/2023 09:05");
    }

    #[test]
    fn pads_single_digit_fields() {
        // 2024-01-02 03:04 UTC
        let time = SystemTime::UNIX_EPOCH + Duration::from_secs(1_704_164_640);

        assert_eq!(format_timestamp(time, utc_offset()), "01/02/2024 03:04");
    }
}
