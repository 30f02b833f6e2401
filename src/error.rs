//! Error types for parsing Jalali date-time text.

use crate::{Dom, Month, Year};

/// Error type for all fallible conversions in this crate.
///
/// Only [`Self::InvalidDate`], [`Self::InvalidNumber`] and [`Self::OutOfRange`] can come out of the
/// default (lenient) parser. The others are reported by [`crate::format::ParseMode::Strict`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// The date segment did not split into exactly three `-` separated fields.
    #[error("invalid Jalali date format {text:?}, expected format: YYYY-MM-DD")]
    InvalidDate {
        /// The date segment as given.
        text: String,
    },

    /// A field that must be an integer is not one.
    #[error("invalid numeric literal {field:?}")]
    InvalidNumber {
        /// The offending field.
        field: String,
    },

    /// The converted instant does not fit in the timestamp type.
    #[error("{year:04}-{month:02}-{day:02} is out of the supported timestamp range")]
    OutOfRange {
        /// The Jalali year that was given.
        year: Year,
        /// The Jalali month that was given.
        month: Month,
        /// The Jalali day that was given.
        day: Dom,
    },

    /// Strict only: the month is not in 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    MonthOutOfRange {
        /// The month that was given.
        month: Month,
    },

    /// Strict only: the day does not exist in the given month of the given year.
    #[error("invalid day: {day} for month {month} of {year} (max {max_day})")]
    DayOutOfRange {
        /// The year of the date.
        year: Year,
        /// The month of the date.
        month: Month,
        /// The day that was given.
        day: Dom,
        /// The last day of that month.
        max_day: Dom,
    },

    /// Strict only: the time segment is not `HH:MM` or `HH:MM:SS`.
    #[error("invalid time format {text:?}, expected format: HH:MM[:SS]")]
    InvalidTime {
        /// The time segment as given.
        text: String,
    },

    /// Strict only: a clock component is outside its range.
    #[error("invalid time: {hour:02}:{minute:02}:{second:02}")]
    TimeOutOfRange {
        /// The hour that was given.
        hour: i32,
        /// The minute that was given.
        minute: i32,
        /// The second that was given.
        second: i32,
    },

    /// Strict only: there is more text after the time segment.
    #[error("unexpected trailing input {text:?}")]
    TrailingInput {
        /// Everything after the time segment.
        text: String,
    },
}
