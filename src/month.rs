//! Month lengths and the month/day-of-year split.
//!
//! The first six months have 31 days, the next five have 30 and Esfand (12) has 29, or 30 in a
//! leap year. The year therefore splits cleanly at day [`FIRST_HALF_MAX_DOY`].

use crate::{
    Dom, Doy, Error, FIRST_HALF_MAX_DOM, FIRST_HALF_MAX_DOY, Month, Result, SECOND_HALF_MAX_DOM,
    SECOND_HALF_MAX_DOY, Year, leap,
};

/// Days in the months before each month, indexed by `month - 1`.
pub const DAYS_BEFORE_MONTH: [Doy; 12] = [0, 31, 62, 93, 124, 155, 186, 216, 246, 276, 306, 336];

fn check_month(month: Month) -> Result<()> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(Error::InvalidArgument {
            what: "month",
            value: month.into(),
        })
    }
}

/// Length of `month` in the non-leap case.
#[inline]
pub(crate) const fn common_month_len(month: Month) -> Dom {
    match month {
        1..=6 => FIRST_HALF_MAX_DOM,
        7..=11 => SECOND_HALF_MAX_DOM,
        _ => SECOND_HALF_MAX_DOM - 1,
    }
}

/// Length of `month` in `year`, for already validated arguments.
pub(crate) fn days_in_month_unchecked(month: Month, year: Year) -> Dom {
    if month == 12 && leap::is_leap_unchecked(year) {
        SECOND_HALF_MAX_DOM
    } else {
        common_month_len(month)
    }
}

/// Number of days in `month` of `year`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `month` is outside 1..=12 and [`Error::OutOfRange`] if
/// the year is outside the calendar.
pub fn days_in_month(month: Month, year: Year) -> Result<Dom> {
    check_month(month)?;
    leap::check_year(year)?;
    Ok(days_in_month_unchecked(month, year))
}

/// Number of days in the year before the first of `month`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `month` is outside 1..=12.
pub fn days_before_month(month: Month) -> Result<Doy> {
    check_month(month)?;
    Ok(DAYS_BEFORE_MONTH[usize::from(month) - 1])
}

/// Marks a month and day in Jalali (this is an intermediate type for conversions, not a date).
///
/// No year is attached, so nothing here knows whether 12/30 exists. [`crate::JalaliDate`] does
/// that check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthDay {
    pub month: Month,
    pub day: Dom,
}

impl MonthDay {
    /// Tell what day of year is this month and day (reverse of [`Self::from_doy`]).
    ///
    /// Expects `month` in 1..=12.
    pub const fn to_doy(&self) -> Doy {
        let m = self.month as Doy;
        let offset = if m <= 6 {
            (m - 1) * FIRST_HALF_MAX_DOM as Doy
        } else {
            (m - 7) * SECOND_HALF_MAX_DOM as Doy + FIRST_HALF_MAX_DOY
        };
        offset + self.day as Doy
    }

    /// Split a day of the year (1..=366) into month and day (reverse of [`Self::to_doy`]).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for 0 or anything past 366.
    pub fn from_doy(doy: Doy) -> Result<Self> {
        if !(1..=SECOND_HALF_MAX_DOY).contains(&doy) {
            return Err(Error::InvalidArgument {
                what: "day of year",
                value: doy.into(),
            });
        }
        Ok(Self::from_zero_based_doy(doy - 1))
    }

    /// Same as [`Self::from_doy`] for a day counted from 0 and known to be below 366.
    pub(crate) const fn from_zero_based_doy(days: Doy) -> Self {
        if days < FIRST_HALF_MAX_DOY {
            Self {
                month: 1 + (days / FIRST_HALF_MAX_DOM as Doy) as Month,
                day: 1 + (days % FIRST_HALF_MAX_DOM as Doy) as Dom,
            }
        } else {
            let days = days - FIRST_HALF_MAX_DOY;
            Self {
                month: 7 + (days / SECOND_HALF_MAX_DOM as Doy) as Month,
                day: 1 + (days % SECOND_HALF_MAX_DOM as Doy) as Dom,
            }
        }
    }
}
