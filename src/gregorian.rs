//! Proleptic Gregorian dates and their day numbers.
//!
//! Day number 1 is 0001-01-01, the same count Python and `chrono` (`num_days_from_ce`) use.

use core::fmt;

use chrono::{Datelike, NaiveDate};

use crate::{Error, Result};

/// First supported Gregorian year.
pub const MIN_GREGORIAN_YEAR: i32 = 1;

/// Last supported Gregorian year.
pub const MAX_GREGORIAN_YEAR: i32 = 9999;

/// Day number of 9999-12-31.
pub const MAX_GREGORIAN_ORDINAL: i64 = 3_652_059;

const DAYS_IN_400_YEARS: i64 = 146_097;
const DAYS_IN_100_YEARS: i64 = 36_524;
const DAYS_IN_4_YEARS: i64 = 1_461;

/// Days before each month in a common year, indexed by `month - 1`.
pub(crate) const DAYS_BEFORE_MONTH: [u16; 12] =
    [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Gregorian leap rule: divisible by 4, except centuries not divisible by 400.
pub const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

pub(crate) const fn days_in_month(month: u8, year: i32) -> u8 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Day number of a Gregorian date, without validation.
pub(crate) fn ymd_to_ordinal(year: i32, month: u8, day: u8) -> i64 {
    let y = i64::from(year) - 1;
    let mut before_month = i64::from(DAYS_BEFORE_MONTH[usize::from(month) - 1]);
    if month > 2 && is_leap_year(year) {
        before_month += 1;
    }
    y * 365 + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)
        + before_month
        + i64::from(day)
}

/// Inverse of [`ymd_to_ordinal`] for any `n >= 1`.
pub(crate) fn ordinal_to_ymd(n: i64) -> (i32, u8, u8) {
    let mut n = n - 1;
    let n400 = n / DAYS_IN_400_YEARS;
    n %= DAYS_IN_400_YEARS;
    let n100 = n / DAYS_IN_100_YEARS;
    n %= DAYS_IN_100_YEARS;
    let n4 = n / DAYS_IN_4_YEARS;
    n %= DAYS_IN_4_YEARS;
    let n1 = n / 365;
    n %= 365;

    let year = (n400 * 400 + 1 + n100 * 100 + n4 * 4 + n1) as i32;
    // last day of a leap year, or of the 400-year cycle
    if n1 == 4 || n100 == 4 {
        return (year - 1, 12, 31);
    }

    let mut rest = n as u16;
    let mut month = 1;
    loop {
        let len = u16::from(days_in_month(month, year));
        if rest < len {
            break;
        }
        rest -= len;
        month += 1;
    }
    (year, month, rest as u8 + 1)
}

/// A validated proleptic Gregorian date between 0001-01-01 and 9999-12-31.
///
/// This is the exchange type of the converter; use [`chrono::NaiveDate`] for anything richer
/// (both convert into each other).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GregorianDate {
    year: i32,
    month: u8,
    day: u8,
}

impl GregorianDate {
    /// Create a Gregorian date, checking every component.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] naming the first component that does not fit.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self> {
        if !(MIN_GREGORIAN_YEAR..=MAX_GREGORIAN_YEAR).contains(&year) {
            return Err(Error::out_of_range(
                "gregorian year",
                year,
                MIN_GREGORIAN_YEAR,
                MAX_GREGORIAN_YEAR,
            ));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::out_of_range("gregorian month", month, 1, 12));
        }
        let max = days_in_month(month, year);
        if !(1..=max).contains(&day) {
            return Err(Error::out_of_range("gregorian day", day, 1, max));
        }
        Ok(Self { year, month, day })
    }

    pub(crate) const fn from_ymd_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Date for a day number (0001-01-01 is 1).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] outside 1..=[`MAX_GREGORIAN_ORDINAL`].
    pub fn from_ordinal(n: i64) -> Result<Self> {
        if !(1..=MAX_GREGORIAN_ORDINAL).contains(&n) {
            return Err(Error::out_of_range(
                "gregorian ordinal",
                n,
                1,
                MAX_GREGORIAN_ORDINAL,
            ));
        }
        let (year, month, day) = ordinal_to_ymd(n);
        Ok(Self { year, month, day })
    }

    /// Day number of this date (0001-01-01 is 1).
    pub fn to_ordinal(&self) -> i64 {
        ymd_to_ordinal(self.year, self.month, self.day)
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn month(&self) -> u8 {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Is this year leap in the Gregorian calendar.
    pub const fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    /// Length of this date's month.
    pub const fn days_in_month(&self) -> u8 {
        days_in_month(self.month, self.year)
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl TryFrom<NaiveDate> for GregorianDate {
    type Error = Error;

    fn try_from(date: NaiveDate) -> Result<Self> {
        Self::new(date.year(), date.month() as u8, date.day() as u8)
    }
}

impl From<GregorianDate> for NaiveDate {
    fn from(date: GregorianDate) -> Self {
        NaiveDate::from_ymd_opt(date.year, date.month.into(), date.day.into())
            .expect("GregorianDate always holds a date chrono can represent")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation() {
        assert!(GregorianDate::new(2024, 2, 29).is_ok());
        assert!(GregorianDate::new(2023, 2, 29).is_err());
        assert!(GregorianDate::new(1900, 2, 29).is_err());
        assert!(GregorianDate::new(2000, 2, 29).is_ok());
        assert!(GregorianDate::new(2000, 13, 1).is_err());
        assert!(GregorianDate::new(2000, 4, 31).is_err());
        assert_eq!(
            GregorianDate::new(0, 1, 1),
            Err(Error::OutOfRange {
                what: "gregorian year",
                value: 0,
                min: 1,
                max: 9999
            })
        );
    }

    #[test]
    fn test_ordinal_fixed_points() {
        assert_eq!(GregorianDate::new(1, 1, 1).unwrap().to_ordinal(), 1);
        assert_eq!(GregorianDate::new(1970, 1, 1).unwrap().to_ordinal(), 719_163);
        assert_eq!(GregorianDate::new(622, 3, 21).unwrap().to_ordinal(), 226_895);
        assert_eq!(
            GregorianDate::new(9999, 12, 31).unwrap().to_ordinal(),
            MAX_GREGORIAN_ORDINAL
        );
    }

    #[test]
    fn test_ordinal_matches_chrono() {
        for (y, m, d) in [(1, 1, 1), (400, 12, 31), (1600, 2, 29), (2024, 3, 1), (9999, 12, 31)] {
            let date = GregorianDate::new(y, m, d).unwrap();
            let naive = NaiveDate::from(date);
            assert_eq!(date.to_ordinal(), i64::from(naive.num_days_from_ce()));
            assert_eq!(GregorianDate::try_from(naive), Ok(date));
        }
    }

    #[test]
    fn test_from_ordinal_cycle_ends() {
        // last days of 4, 100 and 400 year cycles
        for (y, m, d) in [(4, 12, 31), (100, 12, 31), (400, 12, 31), (2000, 12, 31), (2001, 1, 1)]
        {
            let date = GregorianDate::new(y, m, d).unwrap();
            assert_eq!(GregorianDate::from_ordinal(date.to_ordinal()), Ok(date));
        }
    }

    #[test]
    fn test_from_ordinal_range() {
        assert!(GregorianDate::from_ordinal(0).is_err());
        assert!(GregorianDate::from_ordinal(MAX_GREGORIAN_ORDINAL + 1).is_err());
    }

    #[test]
    fn test_ordinal_round_trip_over_a_cycle() {
        let start = GregorianDate::new(1999, 1, 1).unwrap().to_ordinal();
        let mut prev = GregorianDate::new(1998, 12, 31).unwrap();
        for n in start..start + 146_097 {
            let date = GregorianDate::from_ordinal(n).unwrap();
            assert!(date > prev, "{date} after {prev}");
            assert_eq!(date.to_ordinal(), n);
            prev = date;
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(GregorianDate::new(622, 3, 21).unwrap().to_string(), "0622-03-21");
    }
}
