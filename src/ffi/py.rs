//! Python extension module `jdatetime`.
//!
//! Method names follow Python's `datetime.date` (`toordinal`, `fromisoformat`, ...) so the class
//! drops into code written against it.

use jdatetime_proc::py_attr;
use pyo3::{
    exceptions::{PyOverflowError, PyValueError},
    prelude::*,
};

use crate::{Error, GregorianDate, JalaliDate, Locale, leap, month};

impl From<Error> for PyErr {
    fn from(err: Error) -> Self {
        match err {
            Error::Overflow => PyOverflowError::new_err(err.to_string()),
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}

/// A Jalali date, see the Rust [`JalaliDate`].
#[pyclass(name = "JalaliDate", module = "jdatetime", frozen, eq, ord, hash)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PyJalaliDate(JalaliDate);

#[pymethods]
impl PyJalaliDate {
    #[new]
    #[pyo3(signature = (year, month, day, locale = "en"))]
    fn new(year: i32, month: u8, day: u8, locale: &str) -> PyResult<Self> {
        let locale: Locale = locale.parse()?;
        Ok(Self(JalaliDate::new(year, month, day)?.with_locale(locale)))
    }

    #[getter]
    fn year(&self) -> i32 {
        self.0.year()
    }

    #[getter]
    fn month(&self) -> u8 {
        self.0.month()
    }

    #[getter]
    fn day(&self) -> u8 {
        self.0.day()
    }

    #[getter]
    fn locale(&self) -> &'static str {
        self.0.locale().as_str()
    }

    /// `(year, month, day)` of the Gregorian date.
    fn togregorian(&self) -> (i32, u8, u8) {
        let g = self.0.to_gregorian();
        (g.year(), g.month(), g.day())
    }

    fn toordinal(&self) -> i64 {
        self.0.to_ordinal()
    }

    fn weekday(&self) -> u8 {
        self.0.weekday()
    }

    fn isoweekday(&self) -> u8 {
        self.0.isoweekday()
    }

    fn isocalendar(&self) -> (i32, u8, u8) {
        self.0.isocalendar()
    }

    fn isleap(&self) -> bool {
        self.0.is_leap_year()
    }

    fn isoformat(&self) -> String {
        self.0.iso_format()
    }

    fn strftime(&self, fmt: &str) -> String {
        self.0.strftime(fmt)
    }

    fn ctime(&self) -> String {
        self.0.ctime()
    }

    /// Date `days` later (earlier when negative).
    fn add_days(&self, days: i64) -> PyResult<Self> {
        Ok(Self(self.0.checked_add_days(days)?))
    }

    /// Days from `other` to this date.
    fn days_since(&self, other: PyRef<'_, Self>) -> i64 {
        self.0.days_since(&other.0)
    }

    fn with_locale(&self, locale: &str) -> PyResult<Self> {
        Ok(Self(self.0.with_locale(locale.parse()?)))
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "jdatetime.JalaliDate({}, {}, {}, locale='{}')",
            self.0.year(),
            self.0.month(),
            self.0.day(),
            self.0.locale()
        )
    }
}

#[py_attr(pymethods, staticmethod)]
impl PyJalaliDate {
    fn from_gregorian(year: i32, month: u8, day: u8) -> PyResult<Self> {
        let date = GregorianDate::new(year, month, day)?;
        Ok(Self(JalaliDate::from_gregorian(date)?))
    }

    fn fromordinal(n: i64) -> PyResult<Self> {
        Ok(Self(JalaliDate::from_ordinal(n)?))
    }

    fn fromisoformat(s: &str) -> PyResult<Self> {
        Ok(Self(JalaliDate::from_iso_format(s)?))
    }

    fn today() -> PyResult<Self> {
        Ok(Self(JalaliDate::today()?))
    }
}

/// Whether `year` is leap.
#[pyfunction]
fn is_leap(year: i32) -> PyResult<bool> {
    Ok(leap::is_leap(year)?)
}

/// Length of `month` in `year`.
#[pyfunction]
fn days_in_month(month: u8, year: i32) -> PyResult<u8> {
    Ok(month::days_in_month(month, year)?)
}

/// Days of the year before the first of `month`.
#[pyfunction]
fn days_before_month(month: u8) -> PyResult<u16> {
    Ok(month::days_before_month(month)?)
}

#[pymodule]
fn jdatetime(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(is_leap, m)?)?;
    m.add_function(wrap_pyfunction!(days_in_month, m)?)?;
    m.add_function(wrap_pyfunction!(days_before_month, m)?)?;
    m.add_class::<PyJalaliDate>()?;
    Ok(())
}
