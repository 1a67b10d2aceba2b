//! C ABI.
//!
//! Every function returns a [`JdtStatus`] and writes its result through a nullable out pointer.
//! A null out pointer discards the result, which turns a call into a validity check.

use crate::{Error, GregorianDate, JalaliDate, Result, leap, month};

/// A date as plain components, Jalali or Gregorian depending on the function.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct JdtDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

/// Outcome of a `jdt_*` call, one code per [`Error`] kind.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JdtStatus {
    Ok = 0,
    InvalidDate = 1,
    OutOfRange = 2,
    InvalidArgument = 3,
    Overflow = 4,
    /// Errors no C entry point can produce today.
    Other = 255,
}

impl From<&Error> for JdtStatus {
    fn from(err: &Error) -> Self {
        match err {
            Error::InvalidDate { .. } => Self::InvalidDate,
            Error::OutOfRange { .. } => Self::OutOfRange,
            Error::InvalidArgument { .. } => Self::InvalidArgument,
            Error::Overflow => Self::Overflow,
            _ => Self::Other,
        }
    }
}

fn write<T>(result: Result<T>, out: Option<&mut T>) -> JdtStatus {
    match result {
        Ok(value) => {
            if let Some(out) = out {
                *out = value;
            }
            JdtStatus::Ok
        }
        Err(err) => JdtStatus::from(&err),
    }
}

impl From<JalaliDate> for JdtDate {
    fn from(date: JalaliDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

impl From<GregorianDate> for JdtDate {
    fn from(date: GregorianDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

impl TryFrom<JdtDate> for JalaliDate {
    type Error = Error;

    fn try_from(date: JdtDate) -> Result<Self> {
        JalaliDate::new(date.year, date.month, date.day)
    }
}

/// See [`leap::is_leap`].
#[unsafe(no_mangle)]
pub extern "C" fn jdt_is_leap(year: i32, out: Option<&mut bool>) -> JdtStatus {
    write(leap::is_leap(year), out)
}

/// See [`month::days_in_month`].
#[unsafe(no_mangle)]
pub extern "C" fn jdt_days_in_month(month: u8, year: i32, out: Option<&mut u8>) -> JdtStatus {
    write(month::days_in_month(month, year), out)
}

/// Gregorian date of a Jalali `date`.
#[unsafe(no_mangle)]
pub extern "C" fn jdt_to_gregorian(date: JdtDate, out: Option<&mut JdtDate>) -> JdtStatus {
    write(
        JalaliDate::try_from(date).map(|d| d.to_gregorian().into()),
        out,
    )
}

/// Jalali date of a Gregorian `date`.
#[unsafe(no_mangle)]
pub extern "C" fn jdt_from_gregorian(date: JdtDate, out: Option<&mut JdtDate>) -> JdtStatus {
    let result = GregorianDate::new(date.year, date.month, date.day)
        .and_then(JalaliDate::from_gregorian)
        .map(JdtDate::from);
    write(result, out)
}

/// Ordinal of a Jalali `date`, 1/1/1 being 1.
#[unsafe(no_mangle)]
pub extern "C" fn jdt_to_ordinal(date: JdtDate, out: Option<&mut i64>) -> JdtStatus {
    write(JalaliDate::try_from(date).map(|d| d.to_ordinal()), out)
}

/// Jalali date of an ordinal.
#[unsafe(no_mangle)]
pub extern "C" fn jdt_from_ordinal(n: i64, out: Option<&mut JdtDate>) -> JdtStatus {
    write(JalaliDate::from_ordinal(n).map(JdtDate::from), out)
}

/// Jalali `date` moved by `days` (negative moves back).
#[unsafe(no_mangle)]
pub extern "C" fn jdt_add_days(date: JdtDate, days: i64, out: Option<&mut JdtDate>) -> JdtStatus {
    let result = JalaliDate::try_from(date)
        .and_then(|d| d.checked_add_days(days))
        .map(JdtDate::from);
    write(result, out)
}

/// Day of the week of a Jalali `date`, 0 is Shanbeh.
#[unsafe(no_mangle)]
pub extern "C" fn jdt_weekday(date: JdtDate, out: Option<&mut u8>) -> JdtStatus {
    write(JalaliDate::try_from(date).map(|d| d.weekday()), out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn date(year: i32, month: u8, day: u8) -> JdtDate {
        JdtDate { year, month, day }
    }

    #[test]
    fn test_is_leap() {
        let mut out = false;
        assert_eq!(jdt_is_leap(1403, Some(&mut out)), JdtStatus::Ok);
        assert!(out);
        assert_eq!(jdt_is_leap(0, Some(&mut out)), JdtStatus::OutOfRange);
        assert_eq!(jdt_is_leap(1400, None), JdtStatus::Ok);
    }

    #[test]
    fn test_days_in_month() {
        let mut out = 0;
        assert_eq!(jdt_days_in_month(12, 1399, Some(&mut out)), JdtStatus::Ok);
        assert_eq!(out, 30);
        assert_eq!(jdt_days_in_month(13, 1399, Some(&mut out)), JdtStatus::InvalidArgument);
        assert_eq!(out, 30);
    }

    #[test]
    fn test_conversions() {
        let mut g = JdtDate::default();
        assert_eq!(jdt_to_gregorian(date(1367, 2, 14), Some(&mut g)), JdtStatus::Ok);
        assert_eq!(g, date(1988, 5, 4));
        let mut j = JdtDate::default();
        assert_eq!(jdt_from_gregorian(g, Some(&mut j)), JdtStatus::Ok);
        assert_eq!(j, date(1367, 2, 14));
        assert_eq!(jdt_to_gregorian(date(1400, 12, 30), None), JdtStatus::InvalidDate);
        assert_eq!(jdt_from_gregorian(date(622, 3, 20), None), JdtStatus::OutOfRange);
    }

    #[test]
    fn test_ordinal_and_arithmetic() {
        let mut n = 0;
        assert_eq!(jdt_to_ordinal(date(1, 1, 1), Some(&mut n)), JdtStatus::Ok);
        assert_eq!(n, 1);
        let mut d = JdtDate::default();
        assert_eq!(jdt_from_ordinal(n, Some(&mut d)), JdtStatus::Ok);
        assert_eq!(d, date(1, 1, 1));
        assert_eq!(jdt_add_days(date(1403, 1, 1), 44, Some(&mut d)), JdtStatus::Ok);
        assert_eq!(d, date(1403, 2, 14));
        assert_eq!(jdt_add_days(date(1, 1, 1), -1, None), JdtStatus::Overflow);
        let mut w = 0;
        assert_eq!(jdt_weekday(date(1403, 2, 14), Some(&mut w)), JdtStatus::Ok);
        assert_eq!(w, 6);
    }
}
