#![doc = include_str!("../README.md")]
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`leap`] | Leap-year oracle and the correction table |
//! | [`month`] | Month lengths and the month/day-of-year split |
//! | [`gregorian`] | Proleptic Gregorian dates and day numbers |
//! | [`convert`] | Jalali↔Gregorian conversion |
//! | [`ordinal`] | Day numbers of Jalali dates, weekday |
//! | `date` | [`JalaliDate`] |
//! | `datetime` | [`JalaliDateTime`] |
//! | [`tz`] | Timezone references read by [`JalaliDateTime`] |
//! | `locale` | [`Locale`] and month/weekday names |
//! | [`digits`] | Persian/Arabic/ASCII digit transliteration |
//! | `format` | `strftime` |
//! | `parse` | ISO 8601 and `strptime` |
//! | `traits` | [`FromUnixTime`] |
//! | `error` | [`Error`] |
#![cfg_attr(feature = "py", allow(unsafe_op_in_unsafe_fn))] // pyo3 generated code

pub mod convert;
mod date;
mod datetime;
pub mod digits;
mod error;
mod format;
pub mod gregorian;
pub mod leap;
mod locale;
pub mod month;
pub mod ordinal;
mod parse;
mod traits;
pub mod tz;

#[cfg(feature = "ffi")]
pub mod ffi;

pub use date::JalaliDate;
pub use datetime::JalaliDateTime;
pub use error::{Error, InvalidDateReason, Result};
pub use gregorian::GregorianDate;
pub use locale::Locale;
pub use month::MonthDay;
pub use traits::FromUnixTime;
pub use tz::{Tz, TzInfo};

/// Counter for years.
pub type Year = i32;

/// Counter for months of a year.
pub type Month = u8;

/// Counter for days of a week or month.
pub type Dom = u8;

/// Counter for days in a year.
pub type Doy = u16;

/// Counter for consecutive days, see [`ordinal`].
pub type Ordinal = i64;

/// The start of the calendar, year 1.
pub const MIN_YEAR: Year = 1;

/// The last year this calendar represents (its end falls in Gregorian 9999).
pub const MAX_YEAR: Year = 9377;

/// Largest ordinal date arithmetic may produce (9377/12/29).
pub const MAX_ORDINAL: Ordinal = 3_424_878;

/// Gregorian day number (0001-01-01 is 1) of the day before 1/1/1.
pub const ORDINAL_SHIFT: Ordinal = 226_894;

/// End of the first half of the year (6th month).
pub const FIRST_HALF_MAX_DOY: Doy = 186;

/// End of the second half of the year in the longest years.
pub const SECOND_HALF_MAX_DOY: Doy = 366;

/// Days of month in months up to and including the sixth (last month before new half).
pub const FIRST_HALF_MAX_DOM: Dom = 31;

/// Days of month in months from the seventh to the eleventh.
pub const SECOND_HALF_MAX_DOM: Dom = 30;

/// The year 1970.
pub const EPOCH_YEAR: Year = 1348;

/// What day of [`EPOCH_YEAR`] is 1970, 1, 1.
pub const EPOCH_DOY: Doy = 287;

/// The month of the first day of 1970.
pub const EPOCH_MONTH: Month = 10;

/// The day of month which corresponds to 1970, 1, 1.
pub const EPOCH_DAY: Dom = 11;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_constants_agree() {
        let epoch = JalaliDate::new(EPOCH_YEAR, EPOCH_MONTH, EPOCH_DAY).unwrap();
        assert_eq!(epoch.day_of_year(), EPOCH_DOY);
        assert_eq!(epoch.to_gregorian(), GregorianDate::new(1970, 1, 1).unwrap());
    }

    #[test]
    fn test_max_ordinal_is_day_before_last() {
        let last = JalaliDate::new(MAX_YEAR, 12, 30).unwrap();
        assert_eq!(last.to_ordinal(), MAX_ORDINAL + 1);
    }

    // Since the README snippet is also a doctest, keep a plain copy here too.
    #[test]
    fn test_readme() {
        let nowruz = JalaliDate::new(1403, 1, 1).unwrap();
        let later = nowruz.checked_add_days(44).unwrap();
        assert_eq!((later.year(), later.month(), later.day()), (1403, 2, 14));
        assert_eq!(later.to_gregorian().to_string(), "2024-05-03");
    }
}
