//! C ABI, with timestamps as microseconds since the Unix epoch.

use core::ffi::{CStr, c_char};

use chrono::{DateTime, NaiveDateTime};
use tracing::debug;

fn from_micros(micros: i64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp_micros(micros).map(|t| t.naive_utc())
}

/// Convert NUL-terminated Jalali text and write microseconds since the Unix epoch to `out`.
///
/// Returns false (leaving `out` untouched) if the text is not valid UTF-8 or not a Jalali date.
///
/// # Safety
/// - `text` must be null or point to a NUL-terminated string.
/// - `out` must be null or valid for writing an `i64`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn jalali_to_gregorian_us(
    text: *const c_char,
    end_of_day: bool,
    out: *mut i64,
) -> bool {
    if text.is_null() || out.is_null() {
        return false;
    }

    let Ok(text) = unsafe { CStr::from_ptr(text) }.to_str() else {
        return false;
    };

    match crate::jalali_to_gregorian(text, end_of_day) {
        Ok(instant) => {
            unsafe { out.write(instant.and_utc().timestamp_micros()) };
            true
        }
        Err(e) => {
            debug!(error = %e, "rejected Jalali text");
            false
        }
    }
}

/// Write the Jalali text of `micros` (since the Unix epoch) to `buf` as a NUL-terminated string.
///
/// Returns the length of the text without the NUL, or 0 if `micros` is out of range. Like
/// `snprintf`, nothing is written if `len` is not larger than the returned length, so a call with a
/// null `buf` and 0 `len` asks for the needed size. The text is never longer than 30 bytes.
///
/// # Safety
/// `buf` must be null or valid for writing `len` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn gregorian_us_to_jalali(micros: i64, buf: *mut c_char, len: usize) -> usize {
    let Some(instant) = from_micros(micros) else {
        return 0;
    };

    let text = crate::gregorian_to_jalali(instant);
    if !buf.is_null() && text.len() < len {
        unsafe {
            core::ptr::copy_nonoverlapping(text.as_ptr(), buf.cast::<u8>(), text.len());
            buf.add(text.len()).write(0);
        }
    }
    text.len()
}
