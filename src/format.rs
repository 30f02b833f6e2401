//! Reading and writing the `YYYY-MM-DD[ HH:MM[:SS]]` Jalali text.
//!
//! The parser is lenient by default: it checks the shape of the text and that every field is an
//! integer, nothing more. Days and months out of their range are handed to [`crate::math`] as they
//! are, and a time segment with less than two fields is ignored. [`ParseMode::Strict`] is the
//! opt-in alternative which rejects all of those.

use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta, Timelike};
use tracing::{debug, trace};

use crate::{
    CalendarDate, Dom, Month,
    error::FormatError,
    math::jalali_month_length,
};

/// How much of the input is checked beyond its shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ParseMode {
    /// Accept any integers in the right shape and let the arithmetic absorb odd values.
    #[default]
    Lenient,
    /// Reject anything that is not a real Jalali date and a real time of day.
    Strict,
}

/// Hour, minute and second of a day.
///
/// Values are not clamped; [`Self::is_valid`] tells whether they form a real time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    pub hour: i32,
    pub minute: i32,
    pub second: i32,
}

impl Default for ClockTime {
    fn default() -> Self {
        Self::MIDNIGHT
    }
}

impl ClockTime {
    /// The start of a day, used when no time is given.
    pub const MIDNIGHT: Self = Self::new(0, 0, 0);

    /// The last second of a day, forced by the end-of-day flag.
    pub const END_OF_DAY: Self = Self::new(23, 59, 59);

    pub const fn new(hour: i32, minute: i32, second: i32) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    /// Whether every component is within its range (no leap seconds).
    pub const fn is_valid(&self) -> bool {
        0 <= self.hour
            && self.hour < 24
            && 0 <= self.minute
            && self.minute < 60
            && 0 <= self.second
            && self.second < 60
    }

    /// Seconds since the start of the day, without any carrying or clamping.
    pub const fn seconds_from_midnight(&self) -> i64 {
        self.hour as i64 * 3600 + self.minute as i64 * 60 + self.second as i64
    }

    /// Parse `HH:MM` or `HH:MM:SS`.
    ///
    /// In [`ParseMode::Lenient`], less than two fields is not an error but gives `None`, and the
    /// seconds are only read when there are exactly three fields.
    pub fn parse(text: &str, mode: ParseMode) -> Result<Option<Self>, FormatError> {
        let fields = split_fields(text, ':');

        if mode == ParseMode::Strict && !(2..=3).contains(&fields.len()) {
            return Err(FormatError::InvalidTime { text: text.into() });
        }
        if fields.len() < 2 {
            return Ok(None);
        }

        let time = Self {
            hour: parse_int(fields[0])?,
            minute: parse_int(fields[1])?,
            second: match fields.as_slice() {
                &[_, _, second] => parse_int(second)?,
                _ => 0,
            },
        };

        if mode == ParseMode::Strict && !time.is_valid() {
            return Err(FormatError::TimeOutOfRange {
                hour: time.hour,
                minute: time.minute,
                second: time.second,
            });
        }

        Ok(Some(time))
    }
}

/// Split on `separator`, dropping a single empty field at the very end (`"10:30:"` is two fields).
fn split_fields(text: &str, separator: char) -> Vec<&str> {
    let mut fields: Vec<&str> = text.split(separator).collect();
    if fields.last() == Some(&"") {
        fields.pop();
    }
    fields
}

fn parse_int(field: &str) -> Result<i32, FormatError> {
    field.parse().map_err(|_| FormatError::InvalidNumber {
        field: field.into(),
    })
}

/// Parse `YYYY-MM-DD` as a Jalali date.
pub fn parse_jalali_date(text: &str, mode: ParseMode) -> Result<CalendarDate, FormatError> {
    let fields = split_fields(text, '-');
    let &[year, month, day] = fields.as_slice() else {
        return Err(FormatError::InvalidDate { text: text.into() });
    };

    let date = CalendarDate::new(parse_int(year)?, parse_int(month)?, parse_int(day)?);

    if mode == ParseMode::Strict {
        if !(1..=12).contains(&date.month) {
            return Err(FormatError::MonthOutOfRange { month: date.month });
        }
        let max_day = jalali_month_length(date.year, date.month);
        if !(1..=max_day).contains(&date.day) {
            return Err(FormatError::DayOutOfRange {
                year: date.year,
                month: date.month,
                day: date.day,
                max_day,
            });
        }
    }

    Ok(date)
}

/// Combine a Gregorian date and a time the way the timestamp arithmetic does (midnight + offset).
fn to_instant(gregorian: &CalendarDate, time: &ClockTime) -> Option<NaiveDateTime> {
    let month = u32::try_from(gregorian.month).ok()?;
    let day = u32::try_from(gregorian.day).ok()?;
    let midnight = NaiveDate::from_ymd_opt(gregorian.year, month, day)?.and_hms_opt(0, 0, 0)?;
    midnight.checked_add_signed(TimeDelta::try_seconds(time.seconds_from_midnight())?)
}

/// Read `YYYY-MM-DD[ HH:MM[:SS]]` Jalali text as a Gregorian instant.
///
/// With `end_of_day` the time is 23:59:59 whatever the text says, though a malformed time segment
/// is still an error.
pub fn parse_jalali_datetime(
    text: &str,
    end_of_day: bool,
    mode: ParseMode,
) -> Result<NaiveDateTime, FormatError> {
    let mut segments: Vec<&str> = text.splitn(3, ' ').collect();
    if segments.len() > 1 && segments.last() == Some(&"") {
        segments.pop();
    }
    let date_segment = segments.first().copied().unwrap_or_default();
    let time_segment = segments.get(1).copied();

    if let (ParseMode::Strict, Some(rest)) = (mode, segments.get(2)) {
        return Err(FormatError::TrailingInput {
            text: (*rest).into(),
        });
    }

    let jalali = parse_jalali_date(date_segment, mode)?;

    let mut time = match time_segment {
        Some(segment) => ClockTime::parse(segment, mode)?.unwrap_or_else(|| {
            debug!(time = segment, "ignoring time with less than two fields");
            ClockTime::MIDNIGHT
        }),
        None => ClockTime::MIDNIGHT,
    };
    if end_of_day {
        time = ClockTime::END_OF_DAY;
    }

    let gregorian = jalali.jalali_to_gregorian();
    let instant = to_instant(&gregorian, &time).ok_or(FormatError::OutOfRange {
        year: jalali.year,
        month: jalali.month,
        day: jalali.day,
    })?;

    trace!(text, end_of_day, %instant, "converted Jalali text");
    Ok(instant)
}

/// Write a Gregorian instant as Jalali text.
///
/// The time is left out when the instant is exactly at midnight (sub-seconds included), giving
/// `YYYY-MM-DD`; otherwise the result is `YYYY-MM-DD HH:MM:SS` with sub-seconds dropped.
pub fn format_gregorian_as_jalali(instant: &NaiveDateTime) -> String {
    let date = instant.date();
    let jalali =
        CalendarDate::new(date.year(), date.month() as Month, date.day() as Dom).gregorian_to_jalali();

    let time = instant.time();
    let text = if time.num_seconds_from_midnight() == 0 && time.nanosecond() == 0 {
        jalali.to_string()
    } else {
        format!(
            "{jalali} {:02}:{:02}:{:02}",
            time.hour(),
            time.minute(),
            time.second()
        )
    };

    trace!(%instant, text = text.as_str(), "formatted Gregorian instant");
    text
}
