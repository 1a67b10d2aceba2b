//! Jalali calendar date.

use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    ops::{Add, AddAssign, Sub, SubAssign},
    str::FromStr,
};

use chrono::{DateTime, Local, NaiveDate, TimeDelta};

use crate::{
    Dom, Doy, Error, GregorianDate, InvalidDateReason, Locale, MAX_YEAR, MIN_YEAR, Month,
    MonthDay, Ordinal, Result, Year, convert,
    format::{self, Fields},
    leap, month, ordinal, parse,
};

const SECONDS_PER_DAY: i64 = 86_400;

/// A day of the Jalali calendar between 1/1/1 and 9377/12/30.
///
/// Every value is a valid date: the constructors validate once and everything else only moves
/// between valid dates. The [`Locale`] decides how the date is written and is ignored by `==`,
/// ordering and hashing.
///
/// ```rust
/// use jdatetime::JalaliDate;
///
/// let date = JalaliDate::new(1367, 2, 14).unwrap();
/// assert_eq!(date.to_gregorian().to_string(), "1988-05-04");
/// assert_eq!(date.weekday(), 4); // Chaharshanbeh
/// ```
#[derive(Debug, Clone, Copy)]
pub struct JalaliDate {
    year: Year,
    month: Month,
    day: Dom,
    locale: Locale,
}

impl JalaliDate {
    // constructors

    /// Create a date from its components.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDate`] if the year is outside [`MIN_YEAR`]..=[`MAX_YEAR`], the month
    /// outside 1..=12, or the day is not in that month (12/30 exists only in leap years).
    pub fn new(year: Year, month: Month, day: Dom) -> Result<Self> {
        Self::validate(year, month, day)?;
        Ok(Self::from_ymd_unchecked(year, month, day))
    }

    fn validate(year: Year, month: Month, day: Dom) -> Result<()> {
        let invalid = |reason| Error::InvalidDate {
            year,
            month,
            day,
            reason,
        };
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(invalid(InvalidDateReason::YearOutOfRange));
        }
        if !(1..=12).contains(&month) {
            return Err(invalid(InvalidDateReason::MonthOutOfRange));
        }
        let max = month::days_in_month_unchecked(month, year);
        if !(1..=max).contains(&day) {
            return Err(invalid(InvalidDateReason::DayOutOfRange { max }));
        }
        Ok(())
    }

    /// Whether the components make a valid date.
    pub fn check_date(year: Year, month: Month, day: Dom) -> bool {
        Self::validate(year, month, day).is_ok()
    }

    pub(crate) const fn from_ymd_unchecked(year: Year, month: Month, day: Dom) -> Self {
        Self {
            year,
            month,
            day,
            locale: Locale::En,
        }
    }

    /// The Jalali date of a Gregorian date.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] for dates before 622-03-21 (1/1/1) or after 9999-03-20
    /// (9377/12/30).
    pub fn from_gregorian(date: GregorianDate) -> Result<Self> {
        let (year, month, day) =
            convert::gregorian_to_jalali(date.year(), date.month(), date.day());
        leap::check_year(year)?;
        Ok(Self::from_ymd_unchecked(year, month, day))
    }

    /// Same as [`Self::from_gregorian`] for a [`chrono::NaiveDate`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] outside the calendar.
    pub fn from_naive_date(date: NaiveDate) -> Result<Self> {
        Self::from_gregorian(GregorianDate::try_from(date)?)
    }

    /// The date with the given ordinal, 1/1/1 being 1.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if no date of the calendar has this ordinal.
    pub fn from_ordinal(n: Ordinal) -> Result<Self> {
        let (year, month, day) = ordinal::from_ordinal(n)?;
        Ok(Self::from_ymd_unchecked(year, month, day))
    }

    /// Today in the system local zone.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the clock reads a date outside the calendar.
    pub fn today() -> Result<Self> {
        tracing::trace!("reading local date from the system clock");
        Self::from_naive_date(Local::now().date_naive())
    }

    /// Local date of a Unix timestamp in seconds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the timestamp is outside the calendar.
    pub fn from_timestamp(seconds: i64) -> Result<Self> {
        let utc = DateTime::from_timestamp(seconds, 0).ok_or_else(|| {
            Error::out_of_range("timestamp", seconds, i64::MIN, i64::MAX)
        })?;
        Self::from_naive_date(utc.with_timezone(&Local).date_naive())
    }

    /// Restore a date from [`Self::to_state`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] for anything but 4 bytes and [`Error::InvalidDate`] if the bytes
    /// do not make a date.
    pub fn from_state(bytes: &[u8]) -> Result<Self> {
        let [hi, lo, month, day] = bytes else {
            return Err(Error::parse(format!("{bytes:?}"), "expected 4 bytes"));
        };
        Self::new(Year::from(u16::from_be_bytes([*hi, *lo])), *month, *day)
    }

    /// Read a `YYYY-MM-DD` date, Persian and Arabic-Indic digits included.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] for a malformed string and [`Error::InvalidDate`] for an
    /// impossible date.
    pub fn from_iso_format(s: &str) -> Result<Self> {
        let (year, month, day) = parse::iso_date(s)?;
        Self::new(year, month, day)
    }

    /// Read the date part of `data` as described by `fmt`, see
    /// [`JalaliDateTime::strptime`](crate::JalaliDateTime::strptime).
    ///
    /// `%c` is read as `%a %b %d %Y` here, e.g. `Sha Far 01 1380`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if `data` does not match, or the validation error of the date.
    pub fn strptime(data: &str, fmt: &str, locale: Locale) -> Result<Self> {
        let p = parse::strptime_date(data, fmt, locale)?.parts;
        Ok(Self::new(p.year, p.month, p.day)?.with_locale(locale))
    }

    // getters

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> Dom {
        self.day
    }

    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Month and day of this date.
    pub const fn month_day(&self) -> MonthDay {
        MonthDay {
            month: self.month,
            day: self.day,
        }
    }

    /// What day of the year it is (1..=366).
    pub const fn day_of_year(&self) -> Doy {
        self.month_day().to_doy()
    }

    /// Is this year leap (see [`leap::is_leap`]).
    pub fn is_leap_year(&self) -> bool {
        leap::is_leap_unchecked(self.year)
    }

    // calendar queries without a date

    /// See [`leap::is_leap`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] outside the calendar.
    pub fn is_leap(year: Year) -> Result<bool> {
        leap::is_leap(year)
    }

    /// See [`month::days_in_month`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for a month outside 1..=12.
    pub fn days_in_month(month: Month, year: Year) -> Result<Dom> {
        month::days_in_month(month, year)
    }

    /// See [`month::days_before_month`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for a month outside 1..=12.
    pub fn days_before_month(month: Month) -> Result<Doy> {
        month::days_before_month(month)
    }

    // replacements

    /// Same date written in another locale.
    pub const fn with_locale(self, locale: Locale) -> Self {
        Self { locale, ..self }
    }

    /// Same month and day in another year.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDate`] if the result is not a date (12/30 in a common year).
    pub fn with_year(self, year: Year) -> Result<Self> {
        Ok(Self::new(year, self.month, self.day)?.with_locale(self.locale))
    }

    /// Same year and day in another month.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDate`] if the result is not a date.
    pub fn with_month(self, month: Month) -> Result<Self> {
        Ok(Self::new(self.year, month, self.day)?.with_locale(self.locale))
    }

    /// Another day of the same month.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDate`] if the month has no such day.
    pub fn with_day(self, day: Dom) -> Result<Self> {
        Ok(Self::new(self.year, self.month, day)?.with_locale(self.locale))
    }

    // conversions

    /// The Gregorian date of the same day.
    pub fn to_gregorian(&self) -> GregorianDate {
        let (year, month, day) = convert::jalali_to_gregorian(self.year, self.month, self.day);
        GregorianDate::from_ymd_unchecked(year, month, day)
    }

    /// The same day as a [`chrono::NaiveDate`].
    pub fn to_naive_date(&self) -> NaiveDate {
        self.to_gregorian().into()
    }

    /// Ordinal of this date, 1/1/1 being 1.
    pub fn to_ordinal(&self) -> Ordinal {
        ordinal::to_ordinal(self.year, self.month, self.day)
    }

    /// Compact state, `[year_hi, year_lo, month, day]`.
    pub fn to_state(&self) -> [u8; 4] {
        // year is 1..=9377
        let [hi, lo] = (self.year as u16).to_be_bytes();
        [hi, lo, self.month, self.day]
    }

    // weeks

    /// Day of the week, 0 is Shanbeh (Saturday) and 6 is Jomeh (Friday).
    pub fn weekday(&self) -> u8 {
        ordinal::weekday(self.to_ordinal())
    }

    /// Day of the week, 1 is Shanbeh and 7 is Jomeh.
    pub fn isoweekday(&self) -> u8 {
        self.weekday() + 1
    }

    /// Week of the year, counting weeks from Shanbeh; the week holding Farvardin 1st is week 1.
    pub fn week_of_year(&self) -> u8 {
        let first = Self::from_ymd_unchecked(self.year, 1, 1).weekday();
        (u32::from(self.day_of_year()) + u32::from(first)).div_ceil(7) as u8
    }

    /// `(year, week_of_year, isoweekday)`.
    pub fn isocalendar(&self) -> (Year, u8, u8) {
        (self.year, self.week_of_year(), self.isoweekday())
    }

    // arithmetic

    /// Date `days` days later (earlier for negative `days`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if the result leaves 1/1/1..=[`MAX_ORDINAL`](crate::MAX_ORDINAL).
    pub fn checked_add_days(self, days: i64) -> Result<Self> {
        let n = ordinal::checked_add_days(self.to_ordinal(), days)?;
        Ok(Self::from_ordinal(n)?.with_locale(self.locale))
    }

    /// Date `days` days earlier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if the result leaves the supported range.
    pub fn checked_sub_days(self, days: i64) -> Result<Self> {
        self.checked_add_days(days.checked_neg().ok_or(Error::Overflow)?)
    }

    /// Add the whole days of `delta`, rounding towards the past like Python's `timedelta.days`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if the result leaves the supported range.
    pub fn checked_add_signed(self, delta: TimeDelta) -> Result<Self> {
        self.checked_add_days(floor_days(delta))
    }

    /// Subtract the whole days of `delta`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if the result leaves the supported range.
    pub fn checked_sub_signed(self, delta: TimeDelta) -> Result<Self> {
        self.checked_add_signed(-delta)
    }

    /// Number of days from `other` to `self`.
    pub fn days_since(&self, other: &Self) -> i64 {
        self.to_ordinal() - other.to_ordinal()
    }

    // formatting

    /// `YYYY-MM-DD`, in Persian digits for [`Locale::Fa`].
    pub fn iso_format(&self) -> String {
        self.locale.localize_digits(format!(
            "{:04}-{:02}-{:02}",
            self.year, self.month, self.day
        ))
    }

    /// Format with this date's locale, see the directive table of [`Self::strftime_with`].
    pub fn strftime(&self, fmt: &str) -> String {
        self.strftime_with(fmt, self.locale)
    }

    /// Format with an explicit locale.
    ///
    /// | Directive | Meaning |
    /// |-----------|---------|
    /// | `%a` `%A` `%w` | weekday: abbreviated, full, number (0 is Shanbeh) |
    /// | `%d` `%m` `%y` `%Y` `%j` | day, month, year in 2 and 4 digits, day of year |
    /// | `%b` `%B` | month name: abbreviated, full |
    /// | `%U` `%W` | week of year |
    /// | `%c` `%x` | `%A %d %B %Y`, `%y/%m/%d` |
    /// | `%H` `%I` `%M` `%S` `%f` `%X` | zeros |
    /// | `%p` | morning marker |
    /// | `%z` `%Z` | empty |
    pub fn strftime_with(&self, fmt: &str, locale: Locale) -> String {
        format::strftime(&Fields::date(*self), fmt, locale)
    }

    /// `%A %d %B %Y` in this date's locale.
    pub fn ctime(&self) -> String {
        self.strftime("%c")
    }
}

/// Whole days of a delta, rounded towards negative infinity.
pub(crate) fn floor_days(delta: TimeDelta) -> i64 {
    let mut seconds = delta.num_seconds();
    if delta.subsec_nanos() < 0 {
        seconds -= 1;
    }
    seconds.div_euclid(SECONDS_PER_DAY)
}

impl PartialEq for JalaliDate {
    fn eq(&self, other: &Self) -> bool {
        (self.year, self.month, self.day) == (other.year, other.month, other.day)
    }
}

impl Eq for JalaliDate {}

impl Hash for JalaliDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.year, self.month, self.day).hash(state);
    }
}

impl PartialOrd for JalaliDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for JalaliDate {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl fmt::Display for JalaliDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.iso_format())
    }
}

impl FromStr for JalaliDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_iso_format(s)
    }
}

impl TryFrom<GregorianDate> for JalaliDate {
    type Error = Error;

    fn try_from(date: GregorianDate) -> Result<Self> {
        Self::from_gregorian(date)
    }
}

impl TryFrom<NaiveDate> for JalaliDate {
    type Error = Error;

    fn try_from(date: NaiveDate) -> Result<Self> {
        Self::from_naive_date(date)
    }
}

impl From<JalaliDate> for GregorianDate {
    fn from(date: JalaliDate) -> Self {
        date.to_gregorian()
    }
}

impl From<JalaliDate> for NaiveDate {
    fn from(date: JalaliDate) -> Self {
        date.to_naive_date()
    }
}

/// Add whole days.
///
/// # Panics
///
/// If the result is out of range, use [`JalaliDate::checked_add_signed`] to handle it.
impl Add<TimeDelta> for JalaliDate {
    type Output = JalaliDate;

    fn add(self, rhs: TimeDelta) -> Self::Output {
        self.checked_add_signed(rhs)
            .expect("`JalaliDate + TimeDelta` overflowed")
    }
}

/// Subtract whole days.
///
/// # Panics
///
/// If the result is out of range, use [`JalaliDate::checked_sub_signed`] to handle it.
impl Sub<TimeDelta> for JalaliDate {
    type Output = JalaliDate;

    fn sub(self, rhs: TimeDelta) -> Self::Output {
        self.checked_sub_signed(rhs)
            .expect("`JalaliDate - TimeDelta` overflowed")
    }
}

impl AddAssign<TimeDelta> for JalaliDate {
    fn add_assign(&mut self, rhs: TimeDelta) {
        *self = *self + rhs;
    }
}

impl SubAssign<TimeDelta> for JalaliDate {
    fn sub_assign(&mut self, rhs: TimeDelta) {
        *self = *self - rhs;
    }
}

impl Sub<JalaliDate> for JalaliDate {
    type Output = TimeDelta;

    fn sub(self, rhs: JalaliDate) -> TimeDelta {
        TimeDelta::days(self.days_since(&rhs))
    }
}
