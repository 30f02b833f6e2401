//! Python functions, exported by the `jalali` module.

use chrono::NaiveDateTime;
use pyo3::{exceptions::PyValueError, prelude::*};

use crate::{FormatError, Year};

impl From<FormatError> for PyErr {
    fn from(value: FormatError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

/// Convert Jalali text to a naive `datetime.datetime` (raises `ValueError` on malformed text).
#[pyfunction]
#[pyo3(signature = (text, end_of_day = false))]
pub fn jalali_to_gregorian(text: &str, end_of_day: bool) -> PyResult<NaiveDateTime> {
    Ok(crate::jalali_to_gregorian(text, end_of_day)?)
}

/// Convert a naive `datetime.datetime` to Jalali text.
#[pyfunction]
pub fn gregorian_to_jalali(timestamp: NaiveDateTime) -> String {
    crate::gregorian_to_jalali(timestamp)
}

/// See [`crate::is_leap_year`].
#[pyfunction]
pub fn is_leap_year(year: Year) -> bool {
    crate::is_leap_year(year)
}

/// See [`crate::is_jalali_leap_year`].
#[pyfunction]
pub fn is_jalali_leap_year(year: Year) -> bool {
    crate::is_jalali_leap_year(year)
}
