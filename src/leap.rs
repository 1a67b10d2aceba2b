//! Leap years of the Jalali calendar.
//!
//! Years are classified by the 33-year arithmetic rule, corrected from 1502 on by a fixed table of
//! years the rule gets wrong. No floating point is involved.

use crate::{Doy, Error, MAX_YEAR, MIN_YEAR, Result, Year};

/// Years that are not leap while 33-year rule marks them as leap.
///
/// "All these years are not leap, while they are considered leap by the 33-year
/// rule. The year following each of them is leap, but it's considered non-leap
/// by the 33-year rule. This table has been tested to match the modified
/// astronomical algorithm based on the 52.5 degrees east meridian from 1178 AP
/// (an arbitrary date before the Persian calendar was adopted in 1304 AP) to
/// 3000 AP (an arbitrary date far into the future)."
///
/// Taken from
/// <https://github.com/unicode-org/icu4x/blob/3e3da0a0a34bfe3056d0f89183270ea683f4a23c/utils/calendrical_calculations/src/persian.rs#L23>
///
/// Sorted, so it can be searched with [`slice::binary_search`].
pub const NON_LEAP_CORRECTION: [Year; 78] = [
    1502, 1601, 1634, 1667, 1700, 1733, 1766, 1799, 1832, 1865, 1898, 1931, 1964, 1997, 2030, 2059,
    2063, 2096, 2129, 2158, 2162, 2191, 2195, 2224, 2228, 2257, 2261, 2290, 2294, 2323, 2327, 2356,
    2360, 2389, 2393, 2422, 2426, 2455, 2459, 2488, 2492, 2521, 2525, 2554, 2558, 2587, 2591, 2620,
    2624, 2653, 2657, 2686, 2690, 2719, 2723, 2748, 2752, 2756, 2781, 2785, 2789, 2818, 2822, 2847,
    2851, 2855, 2880, 2884, 2888, 2913, 2917, 2921, 2946, 2950, 2954, 2979, 2983, 2987,
];

/// First year of [`NON_LEAP_CORRECTION`]; nothing before it is corrected.
pub const MIN_NON_LEAP_CORRECTION: Year = NON_LEAP_CORRECTION[0];

/// A search into [`NON_LEAP_CORRECTION`].
pub fn is_non_leap_correction(year: Year) -> bool {
    NON_LEAP_CORRECTION.binary_search(&year).is_ok()
}

/// The pure 33-year rule, `(25 * year + 11) mod 33 < 8`.
#[inline]
pub(crate) const fn is_leap_33(year: Year) -> bool {
    (25 * year as i64 + 11).rem_euclid(33) < 8
}

/// Leap classification without the range check.
///
/// Callers must have validated `year` already; outside the calendar range the answer is only the
/// bare arithmetic rule and carries no meaning.
pub fn is_leap_unchecked(year: Year) -> bool {
    if year >= MIN_NON_LEAP_CORRECTION {
        if is_non_leap_correction(year) {
            return false;
        }
        if is_non_leap_correction(year - 1) {
            return true;
        }
    }
    is_leap_33(year)
}

/// Fail with [`Error::OutOfRange`] unless `year` is in [`MIN_YEAR`]..=[`MAX_YEAR`].
pub fn check_year(year: Year) -> Result<()> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(Error::out_of_range("year", year, MIN_YEAR, MAX_YEAR))
    }
}

/// Whether `year` has 366 days (Esfand has a 30th day).
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] if `year` is outside [`MIN_YEAR`]..=[`MAX_YEAR`].
pub fn is_leap(year: Year) -> Result<bool> {
    check_year(year)?;
    Ok(is_leap_unchecked(year))
}

/// The number of days in a given year.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] if `year` is outside [`MIN_YEAR`]..=[`MAX_YEAR`].
pub fn days_in_year(year: Year) -> Result<Doy> {
    Ok(if is_leap(year)? { 366 } else { 365 })
}
