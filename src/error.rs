//! Error types for the jdatetime crate.

use core::fmt;

/// Shorthand for results of this crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Why a year/month/day triple is not a Jalali date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidDateReason {
    /// Year is outside [`MIN_YEAR`](crate::MIN_YEAR)..=[`MAX_YEAR`](crate::MAX_YEAR).
    YearOutOfRange,
    /// Month is outside 1..=12.
    MonthOutOfRange,
    /// Day is zero or past the end of the month.
    DayOutOfRange {
        /// Length of the month in that year.
        max: u8,
    },
}

impl fmt::Display for InvalidDateReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::YearOutOfRange => write!(
                f,
                "year must be {}..={}",
                crate::MIN_YEAR,
                crate::MAX_YEAR
            ),
            Self::MonthOutOfRange => f.write_str("month must be 1..=12"),
            Self::DayOutOfRange { max } => write!(f, "day must be 1..={max}"),
        }
    }
}

/// Error type for all fallible operations in the jdatetime crate.
///
/// Validation happens once, when a value is constructed or a range-checked entry point is called.
/// Nothing in the crate clamps an input silently; every rejection ends up here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Returned when a year/month/day combination is not a valid Jalali date.
    #[error("invalid date {year}/{month}/{day}: {reason}")]
    InvalidDate {
        /// The year that was provided.
        year: i32,
        /// The month that was provided.
        month: u8,
        /// The day that was provided.
        day: u8,
        /// Which component failed.
        reason: InvalidDateReason,
    },

    /// Returned when a value lies outside the range this calendar supports.
    #[error("{what} {value} is out of range (must be {min}..={max})")]
    OutOfRange {
        /// Name of the rejected quantity (`"year"`, `"hour"`, `"ordinal"`, ...).
        what: &'static str,
        /// The rejected value.
        value: i64,
        /// Smallest accepted value.
        min: i64,
        /// Largest accepted value.
        max: i64,
    },

    /// Returned when a table lookup receives a key it has no entry for.
    #[error("invalid {what}: {value}")]
    InvalidArgument {
        /// Name of the argument.
        what: &'static str,
        /// The rejected value.
        value: i64,
    },

    /// Returned when date arithmetic leaves the supported ordinal range.
    #[error("date arithmetic overflowed the supported range")]
    Overflow,

    /// Returned when a naive and an aware datetime are compared or subtracted.
    #[error("cannot compare or subtract naive and timezone-aware datetimes")]
    MixedTimezoneAwareness,

    /// Returned when a string or byte state cannot be read as a date or datetime.
    #[error("cannot parse {input:?}: {reason}")]
    Parse {
        /// The rejected input.
        input: String,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// Returned when a locale tag is neither `en` nor `fa`.
    #[error("unknown locale {locale:?} (must be \"en\" or \"fa\")")]
    InvalidLocale {
        /// The rejected tag.
        locale: String,
    },
}

impl Error {
    pub(crate) fn out_of_range(
        what: &'static str,
        value: impl Into<i64>,
        min: impl Into<i64>,
        max: impl Into<i64>,
    ) -> Self {
        Self::OutOfRange {
            what,
            value: value.into(),
            min: min.into(),
            max: max.into(),
        }
    }

    pub(crate) fn parse(input: impl Into<String>, reason: &'static str) -> Self {
        let input = input.into();
        tracing::debug!(%input, reason, "rejected input");
        Self::Parse { input, reason }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_message() {
        let err = Error::InvalidDate {
            year: 1400,
            month: 12,
            day: 30,
            reason: InvalidDateReason::DayOutOfRange { max: 29 },
        };
        assert_eq!(
            err.to_string(),
            "invalid date 1400/12/30: day must be 1..=29"
        );
    }

    #[test]
    fn test_invalid_year_message() {
        let err = Error::InvalidDate {
            year: 0,
            month: 1,
            day: 1,
            reason: InvalidDateReason::YearOutOfRange,
        };
        assert_eq!(err.to_string(), "invalid date 0/1/1: year must be 1..=9377");
    }

    #[test]
    fn test_out_of_range_message() {
        let err = Error::out_of_range("hour", 24, 0, 23);
        assert_eq!(err.to_string(), "hour 24 is out of range (must be 0..=23)");
    }

    #[test]
    fn test_invalid_argument_message() {
        let err = Error::InvalidArgument {
            what: "month",
            value: 13,
        };
        assert_eq!(err.to_string(), "invalid month: 13");
    }

    #[test]
    fn test_parse_message() {
        let err = Error::parse("1400-13", "expected YYYY-MM-DD");
        assert_eq!(
            err.to_string(),
            "cannot parse \"1400-13\": expected YYYY-MM-DD"
        );
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<Error>();
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + 'static>() {}
        assert_impl::<Error>();
    }

    #[test]
    fn test_error_is_clone_and_eq() {
        let a = Error::Overflow;
        assert_eq!(a.clone(), Error::Overflow);
        assert_ne!(a, Error::MixedTimezoneAwareness);
    }
}
