//! Jalali↔Gregorian conversion with fixed offsets.
//!
//! Both directions count days from a fixed offset with integer floor division, then split the
//! count with the cycle lengths of the target calendar (33-year blocks of 12053 days for Jalali,
//! 400/100/4-year blocks for Gregorian). The bare offsets encode the pure 33-year rule, so both
//! directions apply the same [`NON_LEAP_CORRECTION`](crate::leap::NON_LEAP_CORRECTION) shift the
//! leap oracle does, which keeps every year from 1502 on consistent with [`crate::leap::is_leap`].
//!
//! The functions take components that were already validated and never fail.

use crate::{
    Dom, Doy, Month, Year,
    gregorian::{self, DAYS_BEFORE_MONTH as GREGORIAN_DAYS_BEFORE_MONTH},
    leap::{MIN_NON_LEAP_CORRECTION, is_non_leap_correction},
    month::MonthDay,
};

const JALALI_YEAR_SHIFT: i64 = 1595;
const JALALI_DAY_SHIFT: i64 = -355_668;
const GREGORIAN_DAY_SHIFT: i64 = 355_666;
const DAYS_IN_33_YEARS: i64 = 12_053;

/// Whether the Nowruz of `year` comes a day earlier than the 33-year rule places it.
fn starts_after_correction(year: i64) -> bool {
    year > i64::from(MIN_NON_LEAP_CORRECTION) && is_non_leap_correction(year as Year - 1)
}

/// Convert a valid Jalali date to its proleptic Gregorian counterpart.
pub fn jalali_to_gregorian(year: Year, month: Month, day: Dom) -> (i32, u8, u8) {
    let jy = i64::from(year);
    let y = jy + JALALI_YEAR_SHIFT;

    let mut days = JALALI_DAY_SHIFT
        + 365 * y
        + y.div_euclid(33) * 8
        + (y.rem_euclid(33) + 3).div_euclid(4)
        + i64::from(MonthDay { month, day }.to_doy());
    if starts_after_correction(jy) {
        days -= 1;
    }

    let mut gy = 400 * days.div_euclid(146_097);
    days = days.rem_euclid(146_097);
    if days > 36_524 {
        days -= 1;
        gy += 100 * (days / 36_524);
        days %= 36_524;
        if days >= 365 {
            days += 1;
        }
    }
    gy += 4 * (days / 1_461);
    days %= 1_461;
    if days > 365 {
        gy += (days - 1) / 365;
        days = (days - 1) % 365;
    }

    let gy = gy as i32;
    let mut month = 1;
    loop {
        let len = i64::from(gregorian::days_in_month(month, gy));
        if days < len {
            break;
        }
        days -= len;
        month += 1;
    }
    (gy, month, days as u8 + 1)
}

/// Convert a valid proleptic Gregorian date to Jalali.
///
/// Dates before 622-03-21 give a year below 1; callers that need a calendar date check the range.
pub fn gregorian_to_jalali(year: i32, month: u8, day: u8) -> (Year, Month, Dom) {
    let gy = i64::from(year);
    let gy2 = if month > 2 { gy + 1 } else { gy };

    let mut days = GREGORIAN_DAY_SHIFT
        + 365 * gy
        + (gy2 + 3).div_euclid(4)
        - (gy2 + 99).div_euclid(100)
        + (gy2 + 399).div_euclid(400)
        + i64::from(day)
        + i64::from(GREGORIAN_DAYS_BEFORE_MONTH[usize::from(month) - 1]);

    let mut jy = -JALALI_YEAR_SHIFT + 33 * days.div_euclid(DAYS_IN_33_YEARS);
    days = days.rem_euclid(DAYS_IN_33_YEARS);
    jy += 4 * (days / 1_461);
    days %= 1_461;
    if days > 365 {
        jy += (days - 1) / 365;
        days = (days - 1) % 365;
    }

    // days is now counted from 0 within jy
    if jy >= i64::from(MIN_NON_LEAP_CORRECTION)
        && is_non_leap_correction(jy as Year)
        && days == 365
    {
        jy += 1;
        days = 0;
    } else if starts_after_correction(jy) {
        days += 1;
    }

    let MonthDay { month, day } = MonthDay::from_zero_based_doy(days as Doy);
    (jy as Year, month, day)
}
