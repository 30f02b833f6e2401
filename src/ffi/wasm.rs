//! JS/TS functions, with timestamps as milliseconds since the Unix epoch (like `Date`).

use chrono::{DateTime, NaiveDateTime};
use wasm_bindgen::prelude::*;

/// `None` for NaN, infinities and anything outside the range of [`NaiveDateTime`].
fn from_millis(millis: f64) -> Option<NaiveDateTime> {
    if !millis.is_finite() {
        return None;
    }
    DateTime::from_timestamp_millis(millis as i64).map(|t| t.naive_utc())
}

/// Convert Jalali text to milliseconds since the Unix epoch, throwing on malformed text.
#[wasm_bindgen(js_name = jalaliToGregorian)]
pub fn jalali_to_gregorian(text: &str, end_of_day: bool) -> Result<f64, JsValue> {
    crate::jalali_to_gregorian(text, end_of_day)
        .map(|instant| instant.and_utc().timestamp_millis() as f64)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Convert milliseconds since the Unix epoch to Jalali text, throwing if out of range.
#[wasm_bindgen(js_name = gregorianToJalali)]
pub fn gregorian_to_jalali(millis: f64) -> Result<String, JsValue> {
    from_millis(millis)
        .map(crate::gregorian_to_jalali)
        .ok_or_else(|| JsValue::from_str("timestamp out of range"))
}

/// See [`crate::is_leap_year`].
#[wasm_bindgen(js_name = isLeapYear)]
pub fn is_leap_year(year: i32) -> bool {
    crate::is_leap_year(year)
}

/// See [`crate::is_jalali_leap_year`].
#[wasm_bindgen(js_name = isJalaliLeapYear)]
pub fn is_jalali_leap_year(year: i32) -> bool {
    crate::is_jalali_leap_year(year)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_millis() {
        assert_eq!(from_millis(0.0).map(crate::gregorian_to_jalali).unwrap(), "1348-10-11");
        assert_eq!(
            from_millis(86_399_000.0).map(crate::gregorian_to_jalali).unwrap(),
            "1348-10-11 23:59:59"
        );
    }

    #[test]
    fn test_non_finite_millis_are_rejected() {
        assert_eq!(from_millis(f64::NAN), None);
        assert_eq!(from_millis(f64::INFINITY), None);
        assert_eq!(from_millis(f64::NEG_INFINITY), None);
        assert_eq!(from_millis(1e300), None);
    }
}
