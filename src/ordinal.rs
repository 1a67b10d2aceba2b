//! Day numbers of Jalali dates.
//!
//! The ordinal of a Jalali date is the proleptic Gregorian day number of the same day minus
//! [`ORDINAL_SHIFT`], so 1/1/1 is ordinal 1. Arithmetic and comparison of dates run on ordinals.

use crate::{
    Dom, Error, MAX_ORDINAL, Month, ORDINAL_SHIFT, Ordinal, Result, Year, convert, gregorian,
};

/// Ordinal of 9377/12/30, the last day of the calendar.
///
/// It can be constructed but [`checked_add_days`] never produces it; arithmetic stops at
/// [`MAX_ORDINAL`].
pub const LAST_DAY_ORDINAL: Ordinal = 3_424_879;

/// Ordinal of a valid Jalali date.
pub fn to_ordinal(year: Year, month: Month, day: Dom) -> Ordinal {
    let (gy, gm, gd) = convert::jalali_to_gregorian(year, month, day);
    gregorian::ymd_to_ordinal(gy, gm, gd) - ORDINAL_SHIFT
}

/// Jalali date of an ordinal.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] if the date would fall outside years
/// [`MIN_YEAR`](crate::MIN_YEAR)..=[`MAX_YEAR`](crate::MAX_YEAR).
pub fn from_ordinal(n: Ordinal) -> Result<(Year, Month, Dom)> {
    if !(1..=LAST_DAY_ORDINAL).contains(&n) {
        return Err(Error::out_of_range("ordinal", n, 1, LAST_DAY_ORDINAL));
    }
    let (gy, gm, gd) = gregorian::ordinal_to_ymd(n + ORDINAL_SHIFT);
    Ok(convert::gregorian_to_jalali(gy, gm, gd))
}

/// Move an ordinal by `days`, staying inside 1..=[`MAX_ORDINAL`].
///
/// # Errors
///
/// Returns [`Error::Overflow`] when the result leaves that range.
pub fn checked_add_days(ordinal: Ordinal, days: i64) -> Result<Ordinal> {
    match ordinal.checked_add(days) {
        Some(n) if (1..=MAX_ORDINAL).contains(&n) => Ok(n),
        _ => {
            tracing::debug!(ordinal, days, "date arithmetic out of range");
            Err(Error::Overflow)
        }
    }
}

/// Day of the week of an ordinal, 0 is Saturday (Shanbeh) and 6 is Friday (Jomeh).
pub const fn weekday(ordinal: Ordinal) -> u8 {
    (ordinal + 4).rem_euclid(7) as u8
}
