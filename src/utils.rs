//! Utility date and time equations.
//!
//! Everything here works on mathematical Gregorian values: proleptic years,
//! months 1..=12, and days counted from the Unix epoch (1970-01-01 = day 0).

use crate::options::Weekday;

/// Cumulative days before each month in a common year.
const CUMULATIVE_DAYS: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Cumulative days before each month in a leap year.
const CUMULATIVE_LEAP_DAYS: [u16; 12] = [0, 31, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335];

/// Days in a full 400-year Gregorian cycle.
const DAYS_PER_400_YEARS: i64 = 146_097;

#[inline]
pub(crate) fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

#[inline]
pub(crate) fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

pub(crate) fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => 28 + u8::from(is_leap_year(year)),
        _ => unreachable!("an invalid month value is an implementation error."),
    }
}

/// Returns the epoch day number of January 1 of `year`.
pub(crate) fn epoch_days_for_year(year: i32) -> i64 {
    let y = i64::from(year);
    365 * (y - 1970) + (y - 1969).div_euclid(4) - (y - 1901).div_euclid(100)
        + (y - 1601).div_euclid(400)
}

/// Returns the 1-based ordinal day of `(year, month, day)` within its year.
pub(crate) fn day_of_year(year: i32, month: u8, day: u8) -> u16 {
    debug_assert!((1..=12).contains(&month));
    let table = if is_leap_year(year) {
        &CUMULATIVE_LEAP_DAYS
    } else {
        &CUMULATIVE_DAYS
    };
    table[usize::from(month - 1)] + u16::from(day)
}

/// Splits a 1-based ordinal day back into `(month, day)`.
pub(crate) fn month_day_from_day_of_year(year: i32, day_of_year: u16) -> (u8, u8) {
    debug_assert!(day_of_year >= 1 && day_of_year <= days_in_year(year));
    let table = if is_leap_year(year) {
        &CUMULATIVE_LEAP_DAYS
    } else {
        &CUMULATIVE_DAYS
    };
    let month = table.partition_point(|&cumulative| cumulative < day_of_year);
    let day = day_of_year - table[month - 1];
    (month as u8, day as u8)
}

/// Returns the year containing epoch day `days`.
pub(crate) fn year_from_epoch_days(days: i64) -> i32 {
    // First guess from the mean year length, then correct at the edges.
    let mut year = 1970 + ((days * 400).div_euclid(DAYS_PER_400_YEARS)) as i32;
    while epoch_days_for_year(year) > days {
        year -= 1;
    }
    while epoch_days_for_year(year + 1) <= days {
        year += 1;
    }
    year
}

pub(crate) fn epoch_days_from_ymd(year: i32, month: u8, day: u8) -> i64 {
    epoch_days_for_year(year) + i64::from(day_of_year(year, month, day)) - 1
}

pub(crate) fn civil_from_epoch_days(days: i64) -> (i32, u8, u8) {
    let year = year_from_epoch_days(days);
    let ordinal = (days - epoch_days_for_year(year)) as u16 + 1;
    let (month, day) = month_day_from_day_of_year(year, ordinal);
    (year, month, day)
}

/// Returns the weekday of epoch day `days`.
pub(crate) fn weekday_from_epoch_days(days: i64) -> Weekday {
    // 1970-01-01 was a Thursday.
    match (days + 4).rem_euclid(7) {
        0 => Weekday::Sunday,
        1 => Weekday::Monday,
        2 => Weekday::Tuesday,
        3 => Weekday::Wednesday,
        4 => Weekday::Thursday,
        5 => Weekday::Friday,
        _ => Weekday::Saturday,
    }
}
