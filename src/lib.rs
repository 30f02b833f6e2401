#![doc = include_str!("../README.md")]

use chrono::NaiveDateTime;

#[cfg(feature = "py")]
use pyo3::prelude::*;

pub mod error;
pub mod format;
pub mod math;
pub mod traits;

#[cfg(feature = "ffi")]
pub mod ffi;

pub use error::FormatError;
pub use format::{ClockTime, ParseMode, format_gregorian_as_jalali, parse_jalali_datetime};
pub use math::{CalendarDate, is_jalali_leap_year, is_leap_year};
pub use traits::ToJalali;

#[cfg(feature = "py")]
#[pymodule]
fn jalali(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(ffi::py::jalali_to_gregorian, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::py::gregorian_to_jalali, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::py::is_leap_year, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::py::is_jalali_leap_year, m)?)?;
    Ok(())
}

/// Counter for years.
pub type Year = i32;

/// Counter for months of a year.
///
/// Signed and unbounded since the arithmetic accepts any value (see [`math`]).
pub type Month = i32;

/// Counter for days of a month.
pub type Dom = i32;

/// Convert `YYYY-MM-DD[ HH:MM[:SS]]` Jalali text to a Gregorian timestamp.
///
/// With `end_of_day` the time is set to 23:59:59. Days and months out of range are not rejected
/// (see [`jalali_to_gregorian_strict`] for that).
pub fn jalali_to_gregorian(text: &str, end_of_day: bool) -> Result<NaiveDateTime, FormatError> {
    parse_jalali_datetime(text, end_of_day, ParseMode::Lenient)
}

/// Same as [`jalali_to_gregorian`] but only accepts real dates and times ([`ParseMode::Strict`]).
pub fn jalali_to_gregorian_strict(
    text: &str,
    end_of_day: bool,
) -> Result<NaiveDateTime, FormatError> {
    parse_jalali_datetime(text, end_of_day, ParseMode::Strict)
}

/// Convert a Gregorian timestamp to `YYYY-MM-DD` (at midnight) or `YYYY-MM-DD HH:MM:SS` Jalali.
pub fn gregorian_to_jalali(timestamp: NaiveDateTime) -> String {
    format_gregorian_as_jalali(&timestamp)
}
