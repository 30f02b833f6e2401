//! Holds traits and their implementation for Rust usage.

use std::time::{Duration, SystemTime};

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::format::format_gregorian_as_jalali;

/// Write a point in time as Jalali text (see [`format_gregorian_as_jalali`]).
///
/// When the given time has a timezone, it is read as UTC. Nothing is shifted to local time.
pub trait ToJalali {
    /// This value as a Gregorian instant, if it fits.
    fn to_gregorian_instant(&self) -> Option<NaiveDateTime>;

    /// Convert this to `YYYY-MM-DD[ HH:MM:SS]` Jalali text.
    ///
    /// Returns `None` only if [`Self::to_gregorian_instant`] does.
    fn to_jalali(&self) -> Option<String> {
        self.to_gregorian_instant()
            .map(|instant| format_gregorian_as_jalali(&instant))
    }
}

impl ToJalali for NaiveDateTime {
    fn to_gregorian_instant(&self) -> Option<NaiveDateTime> {
        Some(*self)
    }
}

impl ToJalali for NaiveDate {
    fn to_gregorian_instant(&self) -> Option<NaiveDateTime> {
        self.and_hms_opt(0, 0, 0)
    }
}

impl ToJalali for DateTime<Utc> {
    fn to_gregorian_instant(&self) -> Option<NaiveDateTime> {
        Some(self.naive_utc())
    }
}

/// Read as the time passed since the Unix epoch.
impl ToJalali for Duration {
    fn to_gregorian_instant(&self) -> Option<NaiveDateTime> {
        let secs = i64::try_from(self.as_secs()).ok()?;
        DateTime::from_timestamp(secs, self.subsec_nanos()).map(|t| t.naive_utc())
    }
}

impl ToJalali for SystemTime {
    fn to_gregorian_instant(&self) -> Option<NaiveDateTime> {
        match self.duration_since(SystemTime::UNIX_EPOCH) {
            Ok(d) => d.to_gregorian_instant(),
            Err(e) => {
                let before = chrono::Duration::from_std(e.duration()).ok()?;
                DateTime::from_timestamp(0, 0)?
                    .checked_sub_signed(before)
                    .map(|t| t.naive_utc())
            }
        }
    }
}
