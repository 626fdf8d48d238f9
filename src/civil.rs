//! Civil (wall-clock) date and time records.
//!
//! These are plain Gregorian field records with no attached timezone. All
//! timezone interpretation happens in [`crate::zone`]; this module owns
//! validation, carry normalization, epoch-day conversion, and the civil
//! difference routines the arithmetic layer is built on.

use num_traits::Euclid;

use crate::error::DateMathError;
use crate::utils;
use crate::{DateMathResult, NS_PER_DAY, NS_PER_HOUR, NS_PER_MINUTE, NS_PER_SECOND};

/// Smallest year a civil date can hold.
pub const MIN_CIVIL_YEAR: i32 = -271_821;
/// Largest year a civil date can hold.
pub const MAX_CIVIL_YEAR: i32 = 275_760;

/// Guard band for epoch-day math, slightly wider than the representable
/// instant range so offset-adjusted values stay in bounds.
const EPOCH_DAY_GUARD: i128 = 100_000_366;

/// Euclidean division returning both quotient and remainder.
pub(crate) fn div_mod<T: Euclid + Copy>(dividend: T, divisor: T) -> (T, T) {
    (
        dividend.div_euclid(&divisor),
        dividend.rem_euclid(&divisor),
    )
}

fn balance_year_month(year: i64, month: i64) -> DateMathResult<(i64, u8)> {
    let months0 = month
        .checked_sub(1)
        .ok_or_else(|| DateMathError::invalid_components().with_message("month out of range"))?;
    let year = year
        .checked_add(months0.div_euclid(12))
        .ok_or_else(|| DateMathError::invalid_components().with_message("year out of range"))?;
    let month = (months0.rem_euclid(12) + 1) as u8;
    Ok((year, month))
}

/// Carries arbitrary (year, month, day) fields into a concrete epoch day.
fn balanced_epoch_days(year: i64, month: i64, day: i64, extra_days: i128) -> DateMathResult<i64> {
    let (year, month) = balance_year_month(year, month)?;
    if !((i64::from(MIN_CIVIL_YEAR) - 1)..=(i64::from(MAX_CIVIL_YEAR) + 1)).contains(&year) {
        return Err(DateMathError::invalid_components()
            .with_message("normalized year is outside the supported range"));
    }
    let year = year as i32;
    let month_start =
        i128::from(utils::epoch_days_for_year(year)) + i128::from(utils::day_of_year(year, month, 1)) - 1;
    let days = month_start + i128::from(day) - 1 + extra_days;
    if !(-EPOCH_DAY_GUARD..=EPOCH_DAY_GUARD).contains(&days) {
        return Err(DateMathError::invalid_components()
            .with_message("normalized date is outside the supported range"));
    }
    Ok(days as i64)
}

// ==== CivilDate ====

/// A civil calendar date.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl CivilDate {
    /// Creates a new `CivilDate` without validating the fields.
    pub(crate) fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        debug_assert!((1..=12).contains(&month));
        Self { year, month, day }
    }

    /// Creates a new `CivilDate`, rejecting out-of-range fields.
    pub fn new(year: i32, month: u8, day: u8) -> DateMathResult<Self> {
        if !(MIN_CIVIL_YEAR..=MAX_CIVIL_YEAR).contains(&year) {
            return Err(DateMathError::invalid_components()
                .with_message("year is outside the supported range"));
        }
        if !(1..=12).contains(&month) {
            return Err(
                DateMathError::invalid_components().with_message("month must be within 1..=12")
            );
        }
        if day < 1 || day > utils::days_in_month(year, month) {
            return Err(DateMathError::invalid_components()
                .with_message("day does not exist in the given month"));
        }
        Ok(Self::new_unchecked(year, month, day))
    }

    /// Creates a date by carrying out-of-range fields into larger units.
    ///
    /// Month 13 becomes January of the following year, day 0 the last day of
    /// the previous month, and so on.
    pub fn balance(year: i64, month: i64, day: i64) -> DateMathResult<Self> {
        let days = balanced_epoch_days(year, month, day, 0)?;
        let (year, month, day) = utils::civil_from_epoch_days(days);
        Self::new(year, month, day)
    }

    pub(crate) fn from_epoch_days(days: i64) -> Self {
        let (year, month, day) = utils::civil_from_epoch_days(days);
        Self::new_unchecked(year, month, day)
    }

    /// Days since the Unix epoch (1970-01-01 = 0).
    pub(crate) fn to_epoch_days(self) -> i64 {
        utils::epoch_days_from_ymd(self.year, self.month, self.day)
    }

    pub(crate) fn day_of_year(self) -> u16 {
        utils::day_of_year(self.year, self.month, self.day)
    }

    /// Clamps `day` into the month's real length.
    pub(crate) fn clamp_day(year: i32, month: u8, day: u8) -> u8 {
        day.min(utils::days_in_month(year, month)).max(1)
    }
}

// ==== CivilTime ====

/// A wall-clock time of day.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilTime {
    pub hour: u8,       // 0..=23
    pub minute: u8,     // 0..=59
    pub second: u8,     // 0..=59
    pub nanosecond: u32, // 0..=999_999_999
}

impl CivilTime {
    pub(crate) fn new_unchecked(hour: u8, minute: u8, second: u8, nanosecond: u32) -> Self {
        Self {
            hour,
            minute,
            second,
            nanosecond,
        }
    }

    /// Creates a new `CivilTime`, rejecting out-of-range fields.
    pub fn new(hour: u8, minute: u8, second: u8, nanosecond: u32) -> DateMathResult<Self> {
        if hour > 23 || minute > 59 || second > 59 || nanosecond > 999_999_999 {
            return Err(DateMathError::invalid_components()
                .with_message("time fields are outside their clock ranges"));
        }
        Ok(Self::new_unchecked(hour, minute, second, nanosecond))
    }

    pub(crate) const fn midnight() -> Self {
        Self {
            hour: 0,
            minute: 0,
            second: 0,
            nanosecond: 0,
        }
    }

    /// Balances arbitrary clock fields, returning the day carry.
    pub(crate) fn balance(hour: i64, minute: i64, second: i64, nanosecond: i64) -> (i128, Self) {
        let (second_carry, nanosecond) = div_mod(i128::from(nanosecond), 1_000_000_000);
        let (minute_carry, second) = div_mod(i128::from(second) + second_carry, 60);
        let (hour_carry, minute) = div_mod(i128::from(minute) + minute_carry, 60);
        let (days, hour) = div_mod(i128::from(hour) + hour_carry, 24);
        (
            days,
            Self::new_unchecked(hour as u8, minute as u8, second as u8, nanosecond as u32),
        )
    }

    /// Clock nanoseconds since the clock's midnight.
    pub(crate) fn day_nanoseconds(self) -> i128 {
        i128::from(self.hour) * NS_PER_HOUR
            + i128::from(self.minute) * NS_PER_MINUTE
            + i128::from(self.second) * NS_PER_SECOND
            + i128::from(self.nanosecond)
    }

    pub(crate) fn from_day_nanoseconds(nanos: i128) -> Self {
        debug_assert!((0..NS_PER_DAY).contains(&nanos));
        let (hour, rest) = div_mod(nanos, NS_PER_HOUR);
        let (minute, rest) = div_mod(rest, NS_PER_MINUTE);
        let (second, nanosecond) = div_mod(rest, NS_PER_SECOND);
        Self::new_unchecked(hour as u8, minute as u8, second as u8, nanosecond as u32)
    }
}

// ==== CivilDateTime ====

/// A civil date paired with a wall-clock time.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDateTime {
    pub date: CivilDate,
    pub time: CivilTime,
}

impl CivilDateTime {
    pub(crate) fn new_unchecked(date: CivilDate, time: CivilTime) -> Self {
        Self { date, time }
    }

    /// Creates a new `CivilDateTime`, rejecting out-of-range fields.
    pub fn new(date: CivilDate, time: CivilTime) -> DateMathResult<Self> {
        CivilDate::new(date.year, date.month, date.day)?;
        CivilTime::new(time.hour, time.minute, time.second, time.nanosecond)?;
        Ok(Self { date, time })
    }

    /// Balances arbitrary civil fields, carrying overflow upward
    /// (nanoseconds into seconds, hours into days, months into years).
    #[allow(clippy::too_many_arguments)]
    pub fn balance(
        year: i64,
        month: i64,
        day: i64,
        hour: i64,
        minute: i64,
        second: i64,
        nanosecond: i64,
    ) -> DateMathResult<Self> {
        let (extra_days, time) = CivilTime::balance(hour, minute, second, nanosecond);
        let days = balanced_epoch_days(year, month, day, extra_days)?;
        let (year, month, day) = utils::civil_from_epoch_days(days);
        let date = CivilDate::new(year, month, day)?;
        Ok(Self { date, time })
    }

    /// Builds the civil datetime read off a clock at `nanos` shifted by
    /// `offset_nanoseconds` from UTC.
    pub(crate) fn from_epoch_nanoseconds(nanos: i128, offset_nanoseconds: i128) -> Self {
        let local = nanos + offset_nanoseconds;
        let (days, day_nanos) = div_mod(local, NS_PER_DAY);
        Self {
            date: CivilDate::from_epoch_days(days as i64),
            time: CivilTime::from_day_nanoseconds(day_nanos),
        }
    }

    /// The UTC epoch nanoseconds this civil reading corresponds to under the
    /// given offset.
    pub(crate) fn utc_epoch_nanoseconds(self, offset_nanoseconds: i128) -> i128 {
        i128::from(self.date.to_epoch_days()) * NS_PER_DAY + self.time.day_nanoseconds()
            - offset_nanoseconds
    }
}

// ==== Civil shifts ====

/// Shifts a date by whole years and months, clamping the day of month into
/// the shifted month (January 31 plus one month is the last day of
/// February).
pub(crate) fn shift_clamped(date: CivilDate, years: i64, months: i64) -> DateMathResult<CivilDate> {
    let year = i64::from(date.year)
        .checked_add(years)
        .ok_or_else(|| DateMathError::range().with_message("year arithmetic overflowed"))?;
    let month = i64::from(date.month)
        .checked_add(months)
        .ok_or_else(|| DateMathError::range().with_message("month arithmetic overflowed"))?;
    let (year, month) = balance_year_month(year, month)?;
    if !(i64::from(MIN_CIVIL_YEAR)..=i64::from(MAX_CIVIL_YEAR)).contains(&year) {
        return Err(
            DateMathError::range().with_message("shifted year is outside the supported range")
        );
    }
    let year = year as i32;
    let day = CivilDate::clamp_day(year, month, date.day);
    Ok(CivilDate::new_unchecked(year, month, day))
}

/// Shifts a date by whole days.
pub(crate) fn shift_days(date: CivilDate, days: i64) -> DateMathResult<CivilDate> {
    let days = i128::from(date.to_epoch_days()) + i128::from(days);
    if !(-EPOCH_DAY_GUARD..=EPOCH_DAY_GUARD).contains(&days) {
        return Err(
            DateMathError::range().with_message("shifted date is outside the supported range")
        );
    }
    Ok(CivilDate::from_epoch_days(days as i64))
}

// ==== Civil differences ====

/// Whole civil days from `a` to `b`, truncated toward zero.
pub(crate) fn whole_days_between(a: &CivilDateTime, b: &CivilDateTime) -> i64 {
    let mut days = b.date.to_epoch_days() - a.date.to_epoch_days();
    if days > 0 && b.time.day_nanoseconds() < a.time.day_nanoseconds() {
        days -= 1;
    } else if days < 0 && b.time.day_nanoseconds() > a.time.day_nanoseconds() {
        days += 1;
    }
    days
}

/// Whole calendar months from `a` to `b`, truncated toward zero.
///
/// A month only counts once the day-of-month (and then time-of-day) has been
/// reached, comparing the unclamped fields: January 31 to February 28 is
/// zero months even though February has no 31st.
pub(crate) fn whole_months_between(a: &CivilDateTime, b: &CivilDateTime) -> i64 {
    let a_index = i64::from(a.date.year) * 12 + i64::from(a.date.month);
    let b_index = i64::from(b.date.year) * 12 + i64::from(b.date.month);
    let a_tail = (a.date.day, a.time.day_nanoseconds());
    let b_tail = (b.date.day, b.time.day_nanoseconds());
    let mut months = b_index - a_index;
    if months > 0 && b_tail < a_tail {
        months -= 1;
    } else if months < 0 && b_tail > a_tail {
        months += 1;
    }
    months
}

/// Whole calendar years from `a` to `b`, truncated toward zero.
pub(crate) fn whole_years_between(a: &CivilDateTime, b: &CivilDateTime) -> i64 {
    let a_tail = (a.date.month, a.date.day, a.time.day_nanoseconds());
    let b_tail = (b.date.month, b.date.day, b.time.day_nanoseconds());
    let mut years = i64::from(b.date.year) - i64::from(a.date.year);
    if years > 0 && b_tail < a_tail {
        years -= 1;
    } else if years < 0 && b_tail > a_tail {
        years += 1;
    }
    years
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> CivilDateTime {
        CivilDateTime::new_unchecked(
            CivilDate::new_unchecked(year, month, day),
            CivilTime::new_unchecked(hour, minute, second, 0),
        )
    }

    #[test]
    fn new_rejects_impossible_dates() {
        assert!(CivilDate::new(2015, 2, 29).is_err());
        assert!(CivilDate::new(2016, 2, 29).is_ok());
        assert!(CivilDate::new(2015, 13, 1).is_err());
        assert!(CivilDate::new(2015, 0, 1).is_err());
        assert!(CivilDate::new(2015, 6, 0).is_err());
        assert!(CivilTime::new(24, 0, 0, 0).is_err());
        assert!(CivilTime::new(23, 59, 59, 999_999_999).is_ok());
    }

    #[test]
    fn balance_carries_months_into_years() {
        let date = CivilDate::balance(2015, 13, 1).unwrap();
        assert_eq!((date.year, date.month, date.day), (2016, 1, 1));
        let date = CivilDate::balance(2015, 0, 1).unwrap();
        assert_eq!((date.year, date.month, date.day), (2014, 12, 1));
        let date = CivilDate::balance(2015, -11, 1).unwrap();
        assert_eq!((date.year, date.month, date.day), (2014, 1, 1));
    }

    #[test]
    fn balance_carries_days_across_month_ends() {
        let date = CivilDate::balance(2015, 2, 30).unwrap();
        assert_eq!((date.year, date.month, date.day), (2015, 3, 2));
        let date = CivilDate::balance(2016, 2, 30).unwrap();
        assert_eq!((date.year, date.month, date.day), (2016, 3, 1));
        let date = CivilDate::balance(2015, 1, 0).unwrap();
        assert_eq!((date.year, date.month, date.day), (2014, 12, 31));
    }

    #[test]
    fn balance_carries_time_into_days() {
        let dt = CivilDateTime::balance(2015, 12, 31, 24, 0, 0, 0).unwrap();
        assert_eq!((dt.date.year, dt.date.month, dt.date.day), (2016, 1, 1));
        assert_eq!(dt.time, CivilTime::midnight());

        let dt = CivilDateTime::balance(2015, 1, 1, 0, 0, -1, 0).unwrap();
        assert_eq!((dt.date.year, dt.date.month, dt.date.day), (2014, 12, 31));
        assert_eq!((dt.time.hour, dt.time.minute, dt.time.second), (23, 59, 59));
    }

    #[test]
    fn balance_rejects_unrepresentable_years() {
        assert!(CivilDate::balance(276_000, 1, 1).is_err());
        assert!(CivilDate::balance(0, i64::from(i32::MAX), 1).is_err());
    }

    #[test]
    fn epoch_nanosecond_round_trip() {
        let dt = CivilDateTime::balance(2007, 6, 9, 17, 46, 21, 0).unwrap();
        let nanos = dt.utc_epoch_nanoseconds(0);
        assert_eq!(CivilDateTime::from_epoch_nanoseconds(nanos, 0), dt);

        // Offset shifts the civil reading, not the instant.
        let offset = -5 * NS_PER_HOUR;
        let shifted = CivilDateTime::from_epoch_nanoseconds(nanos, offset);
        assert_eq!(shifted.time.hour, 12);
        assert_eq!(shifted.utc_epoch_nanoseconds(offset), nanos);
    }

    #[test]
    fn shift_clamped_lands_on_real_days() {
        let jan31 = CivilDate::new_unchecked(2015, 1, 31);
        let shifted = shift_clamped(jan31, 0, 1).unwrap();
        assert_eq!((shifted.year, shifted.month, shifted.day), (2015, 2, 28));
        let shifted = shift_clamped(jan31, 1, 1).unwrap();
        assert_eq!((shifted.year, shifted.month, shifted.day), (2016, 2, 29));

        // The clamp applies to the final month only, so a two-month shift
        // from January 31 reaches March 31.
        let shifted = shift_clamped(jan31, 0, 2).unwrap();
        assert_eq!((shifted.year, shifted.month, shifted.day), (2015, 3, 31));

        let feb29 = CivilDate::new_unchecked(2016, 2, 29);
        let shifted = shift_clamped(feb29, 1, 0).unwrap();
        assert_eq!((shifted.year, shifted.month, shifted.day), (2017, 2, 28));
        let shifted = shift_clamped(feb29, -1, 0).unwrap();
        assert_eq!((shifted.year, shifted.month, shifted.day), (2015, 2, 28));
    }

    #[test]
    fn shift_days_crosses_month_and_year_ends() {
        let dec31 = CivilDate::new_unchecked(2015, 12, 31);
        let shifted = shift_days(dec31, 1).unwrap();
        assert_eq!((shifted.year, shifted.month, shifted.day), (2016, 1, 1));
        let shifted = shift_days(dec31, -365).unwrap();
        assert_eq!((shifted.year, shifted.month, shifted.day), (2014, 12, 31));
        assert!(shift_days(dec31, i64::MAX).is_err());
    }

    #[test]
    fn whole_days_truncate_toward_zero() {
        let a = dt(2017, 3, 11, 0, 0, 0);
        let b = dt(2017, 3, 13, 0, 0, 0);
        assert_eq!(whole_days_between(&a, &b), 2);
        assert_eq!(whole_days_between(&b, &a), -2);

        let noon = dt(2017, 3, 11, 12, 0, 0);
        assert_eq!(whole_days_between(&noon, &b), 1);
        assert_eq!(whole_days_between(&b, &noon), -1);
    }

    #[test]
    fn whole_months_use_unclamped_day_comparison() {
        let jan31 = dt(2015, 1, 31, 0, 0, 0);
        assert_eq!(whole_months_between(&jan31, &dt(2015, 2, 28, 0, 0, 0)), 0);
        assert_eq!(whole_months_between(&jan31, &dt(2015, 3, 1, 0, 0, 0)), 1);
        assert_eq!(whole_months_between(&jan31, &dt(2015, 3, 31, 0, 0, 0)), 2);
        assert_eq!(whole_months_between(&dt(2015, 3, 1, 0, 0, 0), &dt(2015, 2, 28, 0, 0, 0)), 0);
        assert_eq!(whole_months_between(&dt(2015, 3, 31, 0, 0, 0), &dt(2015, 2, 28, 0, 0, 0)), -1);
    }

    #[test]
    fn whole_years_respect_leap_day_tails() {
        let feb28_2015 = dt(2015, 2, 28, 0, 0, 0);
        let feb29_2016 = dt(2016, 2, 29, 0, 0, 0);
        assert_eq!(whole_years_between(&feb28_2015, &feb29_2016), 1);
        assert_eq!(whole_years_between(&feb29_2016, &dt(2017, 2, 28, 0, 0, 0)), 0);
        assert_eq!(whole_years_between(&feb29_2016, &dt(2017, 3, 1, 0, 0, 0)), 1);
    }
}
