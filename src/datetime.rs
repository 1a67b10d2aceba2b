//! Jalali date and time of day, optionally tied to a timezone.

use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    ops::{Add, Sub},
    str::FromStr,
};
use std::sync::Arc;

use chrono::{
    DateTime, FixedOffset, Local, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Timelike, Utc,
};

use crate::{
    Dom, Error, JalaliDate, Locale, MAX_ORDINAL, Month, Result, Year,
    format::{self, Fields},
    parse::{self, DateTimeParts},
    tz::{self, Tz, format_offset},
};

const MICROS_PER_SECOND: i64 = 1_000_000;
const MICROS_PER_DAY: i64 = 86_400 * MICROS_PER_SECOND;

/// A [`JalaliDate`] with a time of day down to the microsecond and an optional [`Tz`].
///
/// Without a timezone the value is *naive*: a wall-clock reading with no instant attached. Naive
/// and aware values cannot be compared or subtracted; [`Self::try_cmp`] and
/// [`Self::signed_duration_since`] report [`Error::MixedTimezoneAwareness`], `==` says `false` and
/// `<`/`>` say nothing.
///
/// ```rust
/// use jdatetime::{JalaliDateTime, tz};
///
/// let dt = JalaliDateTime::from_components(1367, 2, 14, 4, 30, 0, 0)
///     .unwrap()
///     .with_tz(Some(tz::utc()));
/// assert_eq!(dt.timestamp(), 578_723_400);
/// assert_eq!(dt.to_string(), "1367-02-14 04:30:00+00:00");
/// ```
#[derive(Debug, Clone)]
pub struct JalaliDateTime {
    date: JalaliDate,
    hour: u8,
    minute: u8,
    second: u8,
    microsecond: u32,
    tz: Option<Tz>,
}

impl JalaliDateTime {
    /// Naive datetime at the given time of `date`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] naming the first time field that does not fit.
    pub fn new(
        date: JalaliDate,
        hour: u8,
        minute: u8,
        second: u8,
        microsecond: u32,
    ) -> Result<Self> {
        if hour > 23 {
            return Err(Error::out_of_range("hour", hour, 0, 23));
        }
        if minute > 59 {
            return Err(Error::out_of_range("minute", minute, 0, 59));
        }
        if second > 59 {
            return Err(Error::out_of_range("second", second, 0, 59));
        }
        if microsecond > 999_999 {
            return Err(Error::out_of_range("microsecond", microsecond, 0, 999_999));
        }
        Ok(Self {
            date,
            hour,
            minute,
            second,
            microsecond,
            tz: None,
        })
    }

    /// Naive datetime from every component.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDate`] or [`Error::OutOfRange`] for the first bad component.
    pub fn from_components(
        year: Year,
        month: Month,
        day: Dom,
        hour: u8,
        minute: u8,
        second: u8,
        microsecond: u32,
    ) -> Result<Self> {
        Self::new(
            JalaliDate::new(year, month, day)?,
            hour,
            minute,
            second,
            microsecond,
        )
    }

    /// Naive datetime of `date` at `time`. A leap second reads as the second before it.
    pub fn combine(date: JalaliDate, time: NaiveTime) -> Self {
        Self {
            date,
            hour: time.hour() as u8,
            minute: time.minute() as u8,
            second: time.second() as u8,
            microsecond: time.nanosecond() % 1_000_000_000 / 1_000,
            tz: None,
        }
    }

    /// Naive datetime of a Gregorian wall-clock reading.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] for dates outside the calendar.
    pub fn from_gregorian(naive: NaiveDateTime) -> Result<Self> {
        let date = JalaliDate::from_naive_date(naive.date())?;
        Ok(Self::combine(date, naive.time()))
    }

    /// Aware datetime of a [`chrono::DateTime`], keeping its timezone.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] for dates outside the calendar.
    pub fn from_datetime<Z>(dt: &DateTime<Z>) -> Result<Self>
    where
        Z: TimeZone + fmt::Debug + Send + Sync + 'static,
        Z::Offset: fmt::Display,
    {
        let tz: Tz = Arc::new(dt.timezone());
        Ok(Self::from_gregorian(dt.naive_local())?.with_tz(Some(tz)))
    }

    /// Wall-clock reading of a Unix timestamp in `tz`, or naive local time without one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the timestamp is outside the calendar.
    pub fn from_timestamp(seconds: i64, tz: Option<Tz>) -> Result<Self> {
        let micros = seconds.checked_mul(MICROS_PER_SECOND).ok_or_else(|| {
            Error::out_of_range(
                "timestamp",
                seconds,
                i64::MIN / MICROS_PER_SECOND,
                i64::MAX / MICROS_PER_SECOND,
            )
        })?;
        Self::from_timestamp_micros(micros, tz)
    }

    /// [`Self::from_timestamp`] with microsecond precision.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the timestamp is outside the calendar.
    pub fn from_timestamp_micros(micros: i64, tz: Option<Tz>) -> Result<Self> {
        let utc = DateTime::from_timestamp_micros(micros)
            .ok_or_else(|| Error::out_of_range("timestamp", micros, i64::MIN, i64::MAX))?;
        let wall = match &tz {
            Some(zone) => {
                let offset = zone.offset_from_utc(&utc.naive_utc());
                utc.naive_utc()
                    .checked_add_signed(offset_delta(offset))
                    .ok_or(Error::Overflow)?
            }
            None => utc.with_timezone(&Local).naive_local(),
        };
        Ok(Self::from_gregorian(wall)?.with_tz(tz))
    }

    /// Naive UTC wall-clock reading of a Unix timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the timestamp is outside the calendar.
    pub fn utc_from_timestamp(seconds: i64) -> Result<Self> {
        Ok(Self::from_timestamp(seconds, Some(tz::utc()))?.with_tz(None))
    }

    /// The current time in `tz`, or naive local time without one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the clock reads a date outside the calendar.
    pub fn now(tz: Option<Tz>) -> Result<Self> {
        let now = Utc::now();
        tracing::trace!(%now, aware = tz.is_some(), "reading the system clock");
        Self::from_timestamp_micros(now.timestamp_micros(), tz)
    }

    /// The current naive UTC wall-clock reading.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the clock reads a date outside the calendar.
    pub fn utc_now() -> Result<Self> {
        Ok(Self::now(Some(tz::utc()))?.with_tz(None))
    }

    /// Same as `now(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the clock reads a date outside the calendar.
    pub fn today() -> Result<Self> {
        Self::now(None)
    }

    /// Restore a datetime from [`Self::to_state`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] for anything but 10 bytes and the validation error of a bad
    /// component.
    pub fn from_state(bytes: &[u8], tz: Option<Tz>) -> Result<Self> {
        let [date @ .., hour, minute, second, us1, us2, us3] = bytes else {
            return Err(Error::parse(format!("{bytes:?}"), "expected 10 bytes"));
        };
        if date.len() != 4 {
            return Err(Error::parse(format!("{bytes:?}"), "expected 10 bytes"));
        }
        let microsecond = u32::from_be_bytes([0, *us1, *us2, *us3]);
        Ok(Self::new(
            JalaliDate::from_state(date)?,
            *hour,
            *minute,
            *second,
            microsecond,
        )?
        .with_tz(tz))
    }

    /// Read `YYYY-MM-DD[*HH[:MM[:SS[.ffffff]]][Z|±HH:MM]]`, any digits; an offset makes the
    /// result aware.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] for a malformed string and the validation error of a bad
    /// component.
    pub fn from_iso_format(s: &str) -> Result<Self> {
        Self::from_parts(parse::iso_datetime(s)?, None)
    }

    /// Read `data` as described by `fmt`.
    ///
    /// Supports `%Y %y %m %d %H %I %M %S %f %a %A %b %B %p %z %Z %%` plus the `%c %x %X` composites.
    /// Missing fields default to 1/1/1 00:00:00. Names match case-insensitively in `locale`,
    /// whose digits are accepted too. `%z` or a `%Z` of `UTC`/`GMT` makes the result aware.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if `data` does not match and the validation error of a bad
    /// component.
    pub fn strptime(data: &str, fmt: &str, locale: Locale) -> Result<Self> {
        let parsed = parse::strptime(data, fmt, locale)?;
        let tz = parsed.utc.then(tz::utc);
        Ok(Self::from_parts(parsed.parts, tz)?.with_locale(locale))
    }

    fn from_parts(p: DateTimeParts, tz: Option<Tz>) -> Result<Self> {
        let tz = tz.or_else(|| p.offset.map(|o| Arc::new(o) as Tz));
        Ok(Self::from_components(
            p.year,
            p.month,
            p.day,
            p.hour,
            p.minute,
            p.second,
            p.microsecond,
        )?
        .with_tz(tz))
    }

    // getters

    pub const fn date(&self) -> JalaliDate {
        self.date
    }

    pub const fn year(&self) -> Year {
        self.date.year()
    }

    pub const fn month(&self) -> Month {
        self.date.month()
    }

    pub const fn day(&self) -> Dom {
        self.date.day()
    }

    pub const fn hour(&self) -> u8 {
        self.hour
    }

    pub const fn minute(&self) -> u8 {
        self.minute
    }

    pub const fn second(&self) -> u8 {
        self.second
    }

    pub const fn microsecond(&self) -> u32 {
        self.microsecond
    }

    pub fn tz(&self) -> Option<&Tz> {
        self.tz.as_ref()
    }

    pub const fn locale(&self) -> Locale {
        self.date.locale()
    }

    /// Time of day.
    pub fn time(&self) -> NaiveTime {
        NaiveTime::from_hms_micro_opt(
            self.hour.into(),
            self.minute.into(),
            self.second.into(),
            self.microsecond,
        )
        .expect("time fields are validated on construction")
    }

    /// Gregorian wall-clock reading.
    pub fn to_gregorian(&self) -> NaiveDateTime {
        self.date.to_naive_date().and_time(self.time())
    }

    /// The same instant as a [`chrono::DateTime`], `None` when naive.
    pub fn to_datetime(&self) -> Option<DateTime<FixedOffset>> {
        let offset = self.utc_offset()?;
        self.to_gregorian().and_local_timezone(offset).single()
    }

    /// `[year_hi, year_lo, month, day, hour, minute, second, µs_hi, µs_mid, µs_lo]`.
    pub fn to_state(&self) -> [u8; 10] {
        let [y_hi, y_lo, month, day] = self.date.to_state();
        let [_, us1, us2, us3] = self.microsecond.to_be_bytes();
        [
            y_hi,
            y_lo,
            month,
            day,
            self.hour,
            self.minute,
            self.second,
            us1,
            us2,
            us3,
        ]
    }

    // replacements

    pub fn with_date(self, date: JalaliDate) -> Self {
        Self { date, ..self }
    }

    pub fn with_time(self, time: NaiveTime) -> Self {
        Self::combine(self.date, time).with_tz(self.tz)
    }

    /// Attach (or with `None` drop) a timezone, keeping the wall-clock reading.
    pub fn with_tz(self, tz: Option<Tz>) -> Self {
        Self { tz, ..self }
    }

    pub fn with_locale(self, locale: Locale) -> Self {
        Self {
            date: self.date.with_locale(locale),
            ..self
        }
    }

    // timezone reads

    /// Whether a timezone is attached.
    pub fn is_aware(&self) -> bool {
        self.tz.is_some()
    }

    /// Offset from UTC of the wall-clock reading, `None` when naive.
    ///
    /// A reading the zone skips (a DST gap) takes the offset in effect at the same UTC reading.
    pub fn utc_offset(&self) -> Option<FixedOffset> {
        let tz = self.tz.as_ref()?;
        let wall = self.to_gregorian();
        Some(tz.offset_from_local(&wall).unwrap_or_else(|| {
            tracing::trace!(%wall, "wall-clock reading does not exist in its zone");
            tz.offset_from_utc(&wall)
        }))
    }

    /// Name of the timezone at this reading (`%Z`).
    pub fn tz_name(&self) -> Option<String> {
        self.tz.as_ref()?.name(&self.to_gregorian())
    }

    /// UTC reading of the instant. Naive values are read in the system local zone.
    fn utc_reading(&self) -> NaiveDateTime {
        let wall = self.to_gregorian();
        let offset = self.utc_offset().unwrap_or_else(|| {
            tracing::trace!(%wall, "reading a naive datetime in the local zone");
            let local: Tz = tz::local();
            local
                .offset_from_local(&wall)
                .unwrap_or_else(|| local.offset_from_utc(&wall))
        });
        wall - offset_delta(offset)
    }

    /// The same instant in another zone.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the result is outside the calendar.
    pub fn astimezone(&self, tz: Tz) -> Result<Self> {
        let utc = self.utc_reading();
        let wall = utc
            .checked_add_signed(offset_delta(tz.offset_from_utc(&utc)))
            .ok_or(Error::Overflow)?;
        Ok(Self::from_gregorian(wall)?
            .with_tz(Some(tz))
            .with_locale(self.locale()))
    }

    /// Seconds since the Unix epoch. Naive values are read in the system local zone.
    pub fn timestamp(&self) -> i64 {
        self.utc_reading().and_utc().timestamp()
    }

    /// [`Self::timestamp`] in microseconds.
    pub fn timestamp_micros(&self) -> i64 {
        self.utc_reading().and_utc().timestamp_micros()
    }

    // arithmetic

    fn total_micros(&self) -> i64 {
        (self.date.to_ordinal() - 1) * MICROS_PER_DAY
            + (i64::from(self.hour) * 3600 + i64::from(self.minute) * 60 + i64::from(self.second))
                * MICROS_PER_SECOND
            + i64::from(self.microsecond)
    }

    /// The wall-clock reading `delta` later, keeping the timezone.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if the date leaves 1/1/1..=[`MAX_ORDINAL`].
    pub fn checked_add_signed(&self, delta: TimeDelta) -> Result<Self> {
        let total = delta
            .num_microseconds()
            .and_then(|d| self.total_micros().checked_add(d))
            .ok_or(Error::Overflow)?;
        let ordinal = total.div_euclid(MICROS_PER_DAY) + 1;
        if !(1..=MAX_ORDINAL).contains(&ordinal) {
            tracing::debug!(ordinal, %delta, "datetime arithmetic out of range");
            return Err(Error::Overflow);
        }
        let in_day = total.rem_euclid(MICROS_PER_DAY);
        let seconds = in_day / MICROS_PER_SECOND;
        Ok(Self {
            date: JalaliDate::from_ordinal(ordinal)?.with_locale(self.locale()),
            hour: (seconds / 3600) as u8,
            minute: (seconds / 60 % 60) as u8,
            second: (seconds % 60) as u8,
            microsecond: (in_day % MICROS_PER_SECOND) as u32,
            tz: self.tz.clone(),
        })
    }

    /// The wall-clock reading `delta` earlier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if the date leaves the supported range.
    pub fn checked_sub_signed(&self, delta: TimeDelta) -> Result<Self> {
        self.checked_add_signed(-delta)
    }

    /// Time from `other` to `self`. Aware values are compared as instants.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MixedTimezoneAwareness`] if only one side is aware.
    pub fn signed_duration_since(&self, other: &Self) -> Result<TimeDelta> {
        let wall = TimeDelta::microseconds(self.total_micros() - other.total_micros());
        match (self.utc_offset(), other.utc_offset()) {
            (None, None) => Ok(wall),
            (Some(mine), Some(theirs)) => {
                Ok(wall - offset_delta(mine) + offset_delta(theirs))
            }
            _ => Err(Error::MixedTimezoneAwareness),
        }
    }

    /// Order two datetimes, as instants when both are aware.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MixedTimezoneAwareness`] if only one side is aware.
    pub fn try_cmp(&self, other: &Self) -> Result<Ordering> {
        Ok(self.signed_duration_since(other)?.cmp(&TimeDelta::zero()))
    }

    // formatting

    /// `YYYY-MM-DD{sep}HH:MM:SS[.ffffff][±HH:MM]`, in Persian digits for [`Locale::Fa`].
    pub fn iso_format(&self, sep: char) -> String {
        let mut s = format!(
            "{:04}-{:02}-{:02}{sep}{:02}:{:02}:{:02}",
            self.year(),
            self.month(),
            self.day(),
            self.hour,
            self.minute,
            self.second
        );
        if self.microsecond != 0 {
            s.push_str(&format!(".{:06}", self.microsecond));
        }
        if let Some(offset) = self.utc_offset() {
            s.push_str(&format_offset(offset, true));
        }
        self.locale().localize_digits(s)
    }

    /// Format with this value's locale, see [`JalaliDate::strftime_with`] for the directives.
    pub fn strftime(&self, fmt: &str) -> String {
        self.strftime_with(fmt, self.locale())
    }

    /// Format with an explicit locale.
    pub fn strftime_with(&self, fmt: &str, locale: Locale) -> String {
        let fields = Fields {
            date: self.date,
            hour: self.hour,
            minute: self.minute,
            second: self.second,
            microsecond: self.microsecond,
            offset: self.utc_offset(),
            tz_name: self.tz_name(),
            has_time: true,
        };
        format::strftime(&fields, fmt, locale)
    }

    /// `%A %d %B %Y %H:%M:%S`.
    pub fn ctime(&self) -> String {
        self.strftime("%c")
    }
}

fn offset_delta(offset: FixedOffset) -> TimeDelta {
    TimeDelta::seconds(offset.local_minus_utc().into())
}

impl PartialEq for JalaliDateTime {
    fn eq(&self, other: &Self) -> bool {
        self.try_cmp(other) == Ok(Ordering::Equal)
    }
}

impl Eq for JalaliDateTime {}

impl PartialOrd for JalaliDateTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.try_cmp(other).ok()
    }
}

impl Hash for JalaliDateTime {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let micros = match self.utc_offset() {
            Some(offset) => {
                self.total_micros() - i64::from(offset.local_minus_utc()) * MICROS_PER_SECOND
            }
            None => self.total_micros(),
        };
        micros.hash(state);
    }
}

impl fmt::Display for JalaliDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.iso_format(' '))
    }
}

impl FromStr for JalaliDateTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_iso_format(s)
    }
}

impl From<JalaliDate> for JalaliDateTime {
    /// Midnight of the date.
    fn from(date: JalaliDate) -> Self {
        Self::combine(date, NaiveTime::MIN)
    }
}

impl TryFrom<NaiveDateTime> for JalaliDateTime {
    type Error = Error;

    fn try_from(naive: NaiveDateTime) -> Result<Self> {
        Self::from_gregorian(naive)
    }
}

/// # Panics
///
/// If the result is out of range, use [`JalaliDateTime::checked_add_signed`] to handle it.
impl Add<TimeDelta> for JalaliDateTime {
    type Output = JalaliDateTime;

    fn add(self, rhs: TimeDelta) -> Self::Output {
        self.checked_add_signed(rhs)
            .expect("`JalaliDateTime + TimeDelta` overflowed")
    }
}

/// # Panics
///
/// If the result is out of range, use [`JalaliDateTime::checked_sub_signed`] to handle it.
impl Sub<TimeDelta> for JalaliDateTime {
    type Output = JalaliDateTime;

    fn sub(self, rhs: TimeDelta) -> Self::Output {
        self.checked_sub_signed(rhs)
            .expect("`JalaliDateTime - TimeDelta` overflowed")
    }
}

/// # Panics
///
/// If exactly one side is aware, use [`JalaliDateTime::signed_duration_since`] to handle it.
impl Sub<&JalaliDateTime> for &JalaliDateTime {
    type Output = TimeDelta;

    fn sub(self, rhs: &JalaliDateTime) -> TimeDelta {
        self.signed_duration_since(rhs)
            .expect("cannot subtract naive and aware datetimes")
    }
}
