//! Holds traits and their implementation for Rust usage.

use crate::{JalaliDate, JalaliDateTime, Result, tz};

/// Convert a time measured from the Unix epoch to Jalali values.
///
/// Conversions are done in UTC; use [`JalaliDateTime::astimezone`] to move the result elsewhere.
pub trait FromUnixTime {
    /// Whole seconds since 1970-01-01 00:00:00 UTC, rounded towards the past.
    fn unix_seconds(&self) -> i64;

    /// Microsecond part of the time, `0..1_000_000`.
    fn subsec_micros(&self) -> u32 {
        0
    }

    /// The UTC date.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`](crate::Error::OutOfRange) outside the calendar.
    fn to_jalali_date(&self) -> Result<JalaliDate> {
        Ok(self.to_jalali_datetime()?.date())
    }

    /// The UTC datetime (aware).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`](crate::Error::OutOfRange) outside the calendar.
    fn to_jalali_datetime(&self) -> Result<JalaliDateTime> {
        let micros = self
            .unix_seconds()
            .saturating_mul(1_000_000)
            .saturating_add(self.subsec_micros().into());
        JalaliDateTime::from_timestamp_micros(micros, Some(tz::utc()))
    }
}

/// A duration past the epoch.
impl FromUnixTime for core::time::Duration {
    fn unix_seconds(&self) -> i64 {
        i64::try_from(self.as_secs()).unwrap_or(i64::MAX)
    }

    fn subsec_micros(&self) -> u32 {
        core::time::Duration::subsec_micros(self)
    }
}

impl FromUnixTime for std::time::SystemTime {
    fn unix_seconds(&self) -> i64 {
        match self.duration_since(std::time::UNIX_EPOCH) {
            Ok(d) => d.unix_seconds(),
            Err(e) => {
                let d = e.duration();
                let whole = -d.unix_seconds();
                if d.subsec_nanos() == 0 { whole } else { whole - 1 }
            }
        }
    }

    fn subsec_micros(&self) -> u32 {
        match self.duration_since(std::time::UNIX_EPOCH) {
            Ok(d) => d.subsec_micros(),
            Err(e) => match e.duration().subsec_nanos() {
                0 => 0,
                nanos => (1_000_000_000 - nanos) / 1_000,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    use super::*;

    #[test]
    fn test_duration_past_epoch() {
        let d = Duration::from_secs(0);
        assert_eq!(d.to_jalali_date(), JalaliDate::new(1348, 10, 11));
        let d = Duration::from_secs(578_723_400);
        let dt = d.to_jalali_datetime().unwrap();
        assert_eq!(dt.date(), JalaliDate::new(1367, 2, 14).unwrap());
        assert_eq!((dt.hour(), dt.minute()), (4, 30));
        assert!(dt.is_aware());
    }

    #[test]
    fn test_duration_keeps_micros() {
        let d = Duration::from_micros(1_500_001);
        let dt = d.to_jalali_datetime().unwrap();
        assert_eq!((dt.second(), dt.microsecond()), (1, 500_001));
    }

    #[test]
    fn test_system_time_before_epoch() {
        let t = UNIX_EPOCH - Duration::from_secs(86_400);
        assert_eq!(t.unix_seconds(), -86_400);
        assert_eq!(t.to_jalali_date(), JalaliDate::new(1348, 10, 10));

        let t = UNIX_EPOCH - Duration::from_micros(1);
        assert_eq!((t.unix_seconds(), t.subsec_micros()), (-1, 999_999));
        let dt = t.to_jalali_datetime().unwrap();
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (23, 59, 59));
        assert_eq!(dt.date(), JalaliDate::new(1348, 10, 10).unwrap());
    }

    #[test]
    fn test_system_time_now() {
        let now = SystemTime::now().to_jalali_date().unwrap();
        assert!(now.year() >= 1403);
    }

    #[test]
    fn test_far_future_is_out_of_range() {
        assert!(Duration::from_secs(u64::MAX).to_jalali_date().is_err());
    }
}
