//! Day-ordinal arithmetic between the Jalali and Gregorian calendars.
//!
//! Both calendars are mapped to a single day counter (the "ordinal") which starts at the first day
//! of [`JALALI_EPOCH_YEAR`]. Converting a date is then a matter of going to the ordinal with one
//! calendar's rules and coming back with the other's.
//!
//! The Jalali side uses the arithmetic 33-year rule (8 leap years per 33) and the Gregorian side the
//! proleptic 400-year rule. Nothing here validates its input: a day of 45 or a month of 13 produces
//! a shifted but deterministic result. Validation, when wanted, belongs to the parser (see
//! [`crate::format::ParseMode`]).

use core::fmt::{self, Display};

use crate::{Dom, Month, Year};

/// A count of days since the first day of [`JALALI_EPOCH_YEAR`] (1600-03-20 in Gregorian).
pub(crate) type DayOrdinal = i64;

/// The Jalali year the ordinal counts from (979 AP starts on 1600-03-20 CE).
pub const JALALI_EPOCH_YEAR: Year = 979;

/// The Gregorian year the Gregorian cycles are counted from (start of a 400-year cycle).
pub const GREGORIAN_EPOCH_YEAR: Year = 1600;

/// Days between 1600-01-01 and 979-01-01 AP (1600-03-20).
pub const JALALI_EPOCH_OFFSET: i64 = 79;

/// Days in a full Gregorian cycle of 400 years (97 leaps).
pub const DAYS_IN_400_YEARS: i64 = 146097;

/// Days in a Gregorian century which does not start with a leap year (24 leaps).
pub const DAYS_IN_100_YEARS: i64 = 36524;

/// Days in four years with one leap (shared by both calendars).
pub const DAYS_IN_4_YEARS: i64 = 1461;

/// Days in a Jalali cycle of 33 years ([`LEAPS_IN_33_YEARS`] leaps).
pub const DAYS_IN_33_YEARS: i64 = 12053;

/// Leap years in every 33-year Jalali cycle.
pub const LEAPS_IN_33_YEARS: i64 = 8;

/// Days in a common year of either calendar.
const DAYS_IN_YEAR: i64 = 365;

/// Days of month in months up to and including the sixth (Farvardin to Shahrivar).
pub const FIRST_HALF_MAX_DOM: Dom = 31;

/// Days of month in months seven to eleven (Mehr to Bahman) and Esfand of leap years.
pub const SECOND_HALF_MAX_DOM: Dom = 30;

/// Days of Esfand (12th month) in a common year.
pub const ESFAND_COMMON_DOM: Dom = 29;

/// A year, month and day triplet in either calendar.
///
/// Which calendar it belongs to is up to the caller; this is only a buffer for the arithmetic and
/// carries no validation of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    pub year: Year,
    pub month: Month,
    pub day: Dom,
}

impl CalendarDate {
    pub const fn new(year: Year, month: Month, day: Dom) -> Self {
        Self { year, month, day }
    }

    /// Read this as a Jalali date and return the Gregorian date of the same day.
    pub const fn jalali_to_gregorian(&self) -> Self {
        ordinal_to_gregorian(jalali_to_ordinal(self))
    }

    /// Read this as a Gregorian date and return the Jalali date of the same day.
    pub const fn gregorian_to_jalali(&self) -> Self {
        ordinal_to_jalali(gregorian_to_ordinal(self))
    }
}

impl Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Is this Gregorian year a leap year (divisible by 400, or by 4 and not by 100).
pub const fn is_leap_year(year: Year) -> bool {
    year % 400 == 0 || (year % 100 != 0 && year % 4 == 0)
}

/// Is this Jalali year 366 days long according to the 33-year arithmetic used here.
pub const fn is_jalali_leap_year(year: Year) -> bool {
    let year = year as i64;
    jalali_year_start(year + 1) - jalali_year_start(year) == DAYS_IN_YEAR + 1
}

/// Days in a Gregorian month; February follows [`is_leap_year`].
///
/// Months after 12 follow the same alternating pattern and are not rejected.
pub const fn gregorian_month_length(year: Year, month: Month) -> Dom {
    if month == 2 {
        if is_leap_year(year) { 29 } else { 28 }
    } else if (month <= 7 && month % 2 == 1) || (month >= 8 && month % 2 == 0) {
        31
    } else {
        30
    }
}

/// Days in a Jalali month; Esfand is 30 days only in [`is_jalali_leap_year`] years.
pub const fn jalali_month_length(year: Year, month: Month) -> Dom {
    match month {
        ..=6 => FIRST_HALF_MAX_DOM,
        7..=11 => SECOND_HALF_MAX_DOM,
        _ if is_jalali_leap_year(year) => SECOND_HALF_MAX_DOM,
        _ => ESFAND_COMMON_DOM,
    }
}

/// Days before the given Jalali month (assumes 31 days for months 1..=6 and 30 after).
///
/// Months before the first have no days before them.
const fn jalali_days_before_month(month: Month) -> i64 {
    let month = month as i64;
    if month <= 7 {
        if month < 1 {
            0
        } else {
            FIRST_HALF_MAX_DOM as i64 * (month - 1)
        }
    } else {
        FIRST_HALF_MAX_DOM as i64 * 6 + SECOND_HALF_MAX_DOM as i64 * (month - 7)
    }
}

/// The ordinal of the first day of a Jalali year.
const fn jalali_year_start(year: i64) -> DayOrdinal {
    let y = year - JALALI_EPOCH_YEAR as i64;
    DAYS_IN_YEAR * y + (y / 33) * LEAPS_IN_33_YEARS + (y % 33 + 3) / 4
}

/// Count the days from the Jalali epoch up to the given Jalali date.
pub(crate) const fn jalali_to_ordinal(jalali: &CalendarDate) -> DayOrdinal {
    jalali_year_start(jalali.year as i64)
        + jalali_days_before_month(jalali.month)
        + (jalali.day as i64 - 1)
}

/// Resolve the ordinal as a Gregorian date.
pub(crate) const fn ordinal_to_gregorian(ordinal: DayOrdinal) -> CalendarDate {
    let mut days = ordinal + JALALI_EPOCH_OFFSET;

    let mut year = GREGORIAN_EPOCH_YEAR as i64 + 400 * (days / DAYS_IN_400_YEARS);
    days %= DAYS_IN_400_YEARS;

    // the first century of a cycle starts with a leap year, the others do not
    if days > DAYS_IN_100_YEARS {
        days -= 1;
        year += 100 * (days / DAYS_IN_100_YEARS);
        days %= DAYS_IN_100_YEARS;
        if days >= DAYS_IN_YEAR {
            days += 1;
        }
    }

    year += 4 * (days / DAYS_IN_4_YEARS);
    days %= DAYS_IN_4_YEARS;

    if days > DAYS_IN_YEAR {
        year += (days - 1) / DAYS_IN_YEAR;
        days = (days - 1) % DAYS_IN_YEAR;
    }

    let year = year as Year;
    let mut month = 1;
    while month < 12 {
        let len = gregorian_month_length(year, month) as i64;
        if days < len {
            break;
        }
        days -= len;
        month += 1;
    }

    CalendarDate {
        year,
        month,
        day: days as Dom + 1,
    }
}

/// Count the days from the Jalali epoch up to the given Gregorian date.
pub(crate) const fn gregorian_to_ordinal(gregorian: &CalendarDate) -> DayOrdinal {
    let y = gregorian.year as i64 - GREGORIAN_EPOCH_YEAR as i64;

    let mut days = DAYS_IN_YEAR * y + (y + 3) / 4 - (y + 99) / 100 + (y + 399) / 400;

    let mut m = 1;
    while m < gregorian.month {
        days += gregorian_month_length(gregorian.year, m) as i64;
        m += 1;
    }
    days += gregorian.day as i64 - 1;

    days - JALALI_EPOCH_OFFSET
}

/// Resolve the ordinal as a Jalali date.
pub(crate) const fn ordinal_to_jalali(ordinal: DayOrdinal) -> CalendarDate {
    let mut days = ordinal;

    let cycles = days / DAYS_IN_33_YEARS;
    days %= DAYS_IN_33_YEARS;

    let mut year = JALALI_EPOCH_YEAR as i64 + 33 * cycles + 4 * (days / DAYS_IN_4_YEARS);
    days %= DAYS_IN_4_YEARS;

    // the first year of every four is the leap one
    if days >= DAYS_IN_YEAR + 1 {
        year += (days - 1) / DAYS_IN_YEAR;
        days = (days - 1) % DAYS_IN_YEAR;
    }

    // Esfand is left open so the 366th day of a leap year lands on its 30th
    let mut month = 1;
    while month < 12 {
        let len = if month <= 6 {
            FIRST_HALF_MAX_DOM
        } else {
            SECOND_HALF_MAX_DOM
        };
        if days < len as i64 {
            break;
        }
        days -= len as i64;
        month += 1;
    }

    CalendarDate {
        year: year as Year,
        month,
        day: days as Dom + 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: Year, month: Month, day: Dom) -> CalendarDate {
        CalendarDate::new(year, month, day)
    }

    #[test]
    fn test_nowruz_1403() {
        assert_eq!(ymd(1403, 1, 1).jalali_to_gregorian(), ymd(2024, 3, 20));
        assert_eq!(ymd(2024, 3, 20).gregorian_to_jalali(), ymd(1403, 1, 1));
    }

    #[test]
    fn test_epoch_alignment() {
        assert_eq!(jalali_to_ordinal(&ymd(JALALI_EPOCH_YEAR, 1, 1)), 0);
        assert_eq!(ordinal_to_gregorian(0), ymd(1600, 3, 20));
        assert_eq!(gregorian_to_ordinal(&ymd(1600, 1, 1)), -JALALI_EPOCH_OFFSET);
    }

    #[test]
    fn test_unix_epoch() {
        // Dey 11th of the non-leap 1348
        assert_eq!(ymd(1970, 1, 1).gregorian_to_jalali(), ymd(1348, 10, 11));
        assert_eq!(ymd(1348, 10, 11).jalali_to_gregorian(), ymd(1970, 1, 1));
    }

    #[test]
    fn test_known_dates() {
        let cases = [
            ((1399, 12, 30), (2021, 3, 20)),
            ((1400, 1, 1), (2021, 3, 21)),
            ((1404, 2, 13), (2025, 5, 3)),
            ((1378, 10, 11), (2000, 1, 1)),
            ((1378, 12, 10), (2000, 2, 29)),
            ((1279, 10, 11), (1901, 1, 1)),
            ((1579, 10, 10), (2200, 12, 31)),
        ];
        for ((jy, jm, jd), (gy, gm, gd)) in cases {
            assert_eq!(
                ymd(jy, jm, jd).jalali_to_gregorian(),
                ymd(gy, gm, gd),
                "{jy}-{jm}-{jd} to Gregorian"
            );
            assert_eq!(
                ymd(gy, gm, gd).gregorian_to_jalali(),
                ymd(jy, jm, jd),
                "{gy}-{gm}-{gd} to Jalali"
            );
        }
    }

    #[test]
    fn test_leap_year() {
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
        assert!(is_leap_year(1600));
        assert!(!is_leap_year(2100));
    }

    #[test]
    fn test_gregorian_month_lengths() {
        let common = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for (i, len) in common.into_iter().enumerate() {
            assert_eq!(gregorian_month_length(2023, i as Month + 1), len);
        }
        assert_eq!(gregorian_month_length(2024, 2), 29);
    }

    #[test]
    fn test_jalali_month_lengths() {
        assert_eq!(jalali_month_length(1402, 1), 31);
        assert_eq!(jalali_month_length(1402, 6), 31);
        assert_eq!(jalali_month_length(1402, 7), 30);
        assert_eq!(jalali_month_length(1402, 11), 30);
        assert_eq!(jalali_month_length(1402, 12), 29);
        assert_eq!(jalali_month_length(1403, 12), 30);
    }

    #[test]
    fn test_leap_aligns_with_wikipedia_list_of_33() {
        const LIST: [Year; 71] = [
            1210, 1214, 1218, 1222, 1226, 1230, 1234, 1238, 1243, 1247, 1251, 1255, 1259, 1263,
            1267, 1271, 1276, 1280, 1284, 1288, 1292, 1296, 1300, 1304, 1309, 1313, 1317, 1321,
            1325, 1329, 1333, 1337, 1342, 1346, 1350, 1354, 1358, 1362, 1366, 1370, 1375, 1379,
            1383, 1387, 1391, 1395, 1399, 1403, 1408, 1412, 1416, 1420, 1424, 1428, 1432, 1436,
            1441, 1445, 1449, 1453, 1457, 1461, 1465, 1469, 1474, 1478, 1482, 1486, 1490, 1494,
            1498,
        ];
        for i in 1210..=1500 {
            let is_leap = is_jalali_leap_year(i);
            let in_list = LIST.binary_search(&i).is_ok();
            assert_eq!(
                is_leap, in_list,
                "year {} is miscalculated (guessed as leap: {}, is actually leap: {})",
                i, is_leap, in_list
            );
        }
    }

    #[test]
    fn test_gregorian_round_trip_1700_to_2200() {
        for year in 1700..=2200 {
            for month in 1..=12 {
                for day in 1..=gregorian_month_length(year, month) {
                    let date = ymd(year, month, day);
                    assert_eq!(ordinal_to_gregorian(gregorian_to_ordinal(&date)), date);
                }
            }
        }
    }

    #[test]
    fn test_jalali_round_trip() {
        for year in 1100..=1700 {
            for month in 1..=12 {
                for day in 1..=jalali_month_length(year, month) {
                    let date = ymd(year, month, day);
                    assert_eq!(ordinal_to_jalali(jalali_to_ordinal(&date)), date);
                }
            }
        }
    }

    #[test]
    fn test_ordinals_are_consecutive() {
        let mut prev = ymd(1379, 1, 1).jalali_to_gregorian();
        let start = jalali_to_ordinal(&ymd(1379, 1, 1));
        for ordinal in start + 1..start + 20_000 {
            let next = ordinal_to_gregorian(ordinal);
            assert_eq!(gregorian_to_ordinal(&next), gregorian_to_ordinal(&prev) + 1);
            assert!(next > prev);
            prev = next;
        }
    }

    #[test]
    fn test_day_overflow_is_shifted_not_rejected() {
        // 45 days into Farvardin is 14 days into Ordibehesht
        assert_eq!(
            ymd(1403, 1, 45).jalali_to_gregorian(),
            ymd(1403, 2, 14).jalali_to_gregorian()
        );
        // Esfand 30 of a common year is the next Nowruz
        assert_eq!(
            ymd(1402, 12, 30).jalali_to_gregorian(),
            ymd(1403, 1, 1).jalali_to_gregorian()
        );
    }

    #[test]
    fn test_days_before_month() {
        let mut days = 0;
        for month in 1..=12 {
            assert_eq!(jalali_days_before_month(month), days, "month {month}");
            days += if month <= 6 { 31 } else { 30 };
        }
        assert_eq!(jalali_days_before_month(0), 0);
        assert_eq!(jalali_days_before_month(Month::MIN), 0);
        assert_eq!(
            jalali_days_before_month(2_000_000_000),
            186 + 30 * (2_000_000_000 - 7)
        );
    }

    #[test]
    fn test_extreme_years_do_not_overflow() {
        assert!(is_jalali_leap_year(Year::MAX));
        assert!(!is_jalali_leap_year(Year::MIN));
        assert_eq!(jalali_month_length(Year::MAX, 12), SECOND_HALF_MAX_DOM);
        assert_eq!(jalali_month_length(Year::MIN, 12), ESFAND_COMMON_DOM);

        for year in [Year::MIN, Year::MAX] {
            let date = ymd(year, 12, 1);
            assert_eq!(
                jalali_to_ordinal(&date),
                jalali_year_start(year as i64) + 336,
                "year {year}"
            );
            let _ = date.jalali_to_gregorian();
            let _ = date.gregorian_to_jalali();
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(ymd(1403, 1, 1).to_string(), "1403-01-01");
        assert_eq!(ymd(979, 12, 9).to_string(), "0979-12-09");
    }
}
