//! Timezone references read by [`JalaliDateTime`](crate::JalaliDateTime).
//!
//! The calendar only ever asks a zone for its UTC offset at some instant, so [`TzInfo`] is a small
//! trait with a blanket implementation for every [`chrono::TimeZone`] (`Utc`, `FixedOffset`,
//! `Local`, and third party zones). There is no timezone database here.

use std::{fmt, sync::Arc};

use chrono::{FixedOffset, Local, NaiveDateTime, Offset, TimeZone, Utc};

use crate::{Error, Result};

/// What a datetime needs to know about its timezone.
pub trait TzInfo: fmt::Debug + Send + Sync {
    /// Offset in effect at a wall-clock time, `None` if that time does not exist in the zone.
    ///
    /// An ambiguous wall-clock time resolves to the earlier of its offsets.
    fn offset_from_local(&self, local: &NaiveDateTime) -> Option<FixedOffset>;

    /// Offset in effect at a UTC instant.
    fn offset_from_utc(&self, utc: &NaiveDateTime) -> FixedOffset;

    /// Display name of the zone at a wall-clock time (`%Z`).
    fn name(&self, local: &NaiveDateTime) -> Option<String> {
        let _ = local;
        None
    }
}

impl<Z> TzInfo for Z
where
    Z: TimeZone + fmt::Debug + Send + Sync,
    Z::Offset: fmt::Display,
{
    fn offset_from_local(&self, local: &NaiveDateTime) -> Option<FixedOffset> {
        self.offset_from_local_datetime(local)
            .earliest()
            .map(|o| o.fix())
    }

    fn offset_from_utc(&self, utc: &NaiveDateTime) -> FixedOffset {
        self.offset_from_utc_datetime(utc).fix()
    }

    fn name(&self, local: &NaiveDateTime) -> Option<String> {
        self.offset_from_local_datetime(local)
            .earliest()
            .map(|o| o.to_string())
    }
}

/// Shared timezone reference held by aware datetimes.
pub type Tz = Arc<dyn TzInfo>;

/// UTC.
pub fn utc() -> Tz {
    Arc::new(Utc)
}

/// The system local zone.
pub fn local() -> Tz {
    Arc::new(Local)
}

/// A fixed offset of `seconds` east of UTC.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] unless the offset is strictly within a day.
pub fn fixed(seconds: i32) -> Result<Tz> {
    Ok(Arc::new(fixed_offset(seconds)?))
}

pub(crate) fn fixed_offset(seconds: i32) -> Result<FixedOffset> {
    FixedOffset::east_opt(seconds)
        .ok_or_else(|| Error::out_of_range("utc offset", seconds, -86_399, 86_399))
}

/// Write an offset as `+HH:MM` (or `+HHMM` without `colon`), adding seconds only when present.
pub(crate) fn format_offset(offset: FixedOffset, colon: bool) -> String {
    let total = offset.local_minus_utc();
    let sign = if total < 0 { '-' } else { '+' };
    let total = total.unsigned_abs();
    let (h, m, s) = (total / 3600, total / 60 % 60, total % 60);
    let sep = if colon { ":" } else { "" };
    if s == 0 {
        format!("{sign}{h:02}{sep}{m:02}")
    } else {
        format!("{sign}{h:02}{sep}{m:02}{sep}{s:02}")
    }
}
