//! Unit, weekday, and week-numbering option types.
//!
//! These are the closed vocabularies every calendar operation is written
//! against. [`Unit`] is ordered from smallest to largest so that unit
//! comparisons read naturally (`Unit::Day < Unit::Month`).

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::civil::{MAX_CIVIL_YEAR, MIN_CIVIL_YEAR};
use crate::{NS_PER_DAY, NS_PER_HOUR, NS_PER_MINUTE, NS_PER_SECOND};

// ==== Unit ====

/// A calendar or clock unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[non_exhaustive]
pub enum Unit {
    Second = 0,
    Minute = 1,
    Hour = 2,
    Day = 3,
    Week = 4,
    Month = 5,
    Year = 6,
}

impl Unit {
    /// Returns whether the unit is resolved through the calendar rather than
    /// a fixed number of elapsed nanoseconds.
    #[inline]
    #[must_use]
    pub fn is_calendar_unit(self) -> bool {
        matches!(self, Self::Year | Self::Month | Self::Week)
    }

    /// Returns whether the unit is a clock unit.
    #[inline]
    #[must_use]
    pub fn is_time_unit(self) -> bool {
        matches!(self, Self::Hour | Self::Minute | Self::Second)
    }

    /// Returns the unit's nominal length in nanoseconds, if it has one.
    ///
    /// `Day` and `Week` report the 24h/168h nominal spans used for
    /// clock-exact stepping; Year and Month have no fixed length.
    #[inline]
    #[must_use]
    pub fn as_nanoseconds(self) -> Option<i128> {
        match self {
            Self::Second => Some(NS_PER_SECOND),
            Self::Minute => Some(NS_PER_MINUTE),
            Self::Hour => Some(NS_PER_HOUR),
            Self::Day => Some(NS_PER_DAY),
            Self::Week => Some(NS_PER_DAY * 7),
            Self::Month | Self::Year => None,
        }
    }

    /// The minimum and maximum civil value a field of this unit can take.
    ///
    /// Week maxes at 53 under every supported numbering system.
    #[must_use]
    pub fn value_range(self) -> RangeInclusive<i64> {
        match self {
            Self::Second | Self::Minute => 0..=59,
            Self::Hour => 0..=23,
            Self::Day => 1..=31,
            Self::Week => 1..=53,
            Self::Month => 1..=12,
            Self::Year => i64::from(MIN_CIVIL_YEAR)..=i64::from(MAX_CIVIL_YEAR),
        }
    }
}

/// A parsing error for [`Unit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseUnitError;

impl fmt::Display for ParseUnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("provided string was not a recognized unit")
    }
}

impl FromStr for Unit {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "year" | "years" => Ok(Self::Year),
            "month" | "months" => Ok(Self::Month),
            "week" | "weeks" => Ok(Self::Week),
            "day" | "days" => Ok(Self::Day),
            "hour" | "hours" => Ok(Self::Hour),
            "minute" | "minutes" => Ok(Self::Minute),
            "second" | "seconds" => Ok(Self::Second),
            _ => Err(ParseUnitError),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Week => "week",
            Self::Day => "day",
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Second => "second",
        })
    }
}

// ==== Weekday ====

/// A day of the week, numbered 1 = Sunday through 7 = Saturday.
///
/// This numbering is fixed. It does not move with
/// [`first_day_of_week`](crate::config::CalendarContext::first_day_of_week);
/// that setting only decides where weeks *begin*.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Weekday {
    Sunday = 1,
    Monday = 2,
    Tuesday = 3,
    Wednesday = 4,
    Thursday = 5,
    Friday = 6,
    Saturday = 7,
}

impl Weekday {
    /// Builds a weekday from its Sunday-based number (1..=7).
    #[must_use]
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::Sunday),
            2 => Some(Self::Monday),
            3 => Some(Self::Tuesday),
            4 => Some(Self::Wednesday),
            5 => Some(Self::Thursday),
            6 => Some(Self::Friday),
            7 => Some(Self::Saturday),
            _ => None,
        }
    }

    /// The Sunday-based number of this weekday (1..=7).
    #[inline]
    #[must_use]
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Days from `week_start` forward to `self` (0..=6).
    #[inline]
    #[must_use]
    pub(crate) fn days_since(self, week_start: Weekday) -> u8 {
        (self.number() + 7 - week_start.number()) % 7
    }
}

/// A parsing error for [`Weekday`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseWeekdayError;

impl fmt::Display for ParseWeekdayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("provided string was not a recognized weekday")
    }
}

impl FromStr for Weekday {
    type Err = ParseWeekdayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sunday" => Ok(Self::Sunday),
            "monday" => Ok(Self::Monday),
            "tuesday" => Ok(Self::Tuesday),
            "wednesday" => Ok(Self::Wednesday),
            "thursday" => Ok(Self::Thursday),
            "friday" => Ok(Self::Friday),
            "saturday" => Ok(Self::Saturday),
            _ => Err(ParseWeekdayError),
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Sunday => "sunday",
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
        })
    }
}

// ==== WeekNumbering ====

/// The rule assigning week-of-year numbers.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum WeekNumbering {
    /// Week 1 is the week containing January 1, with weeks aligned to the
    /// configured first day of the week.
    #[default]
    Us,
    /// ISO-8601: Monday-based weeks, week 1 contains January 4. The
    /// configured first day of the week is ignored.
    Iso,
    /// Fixed seven-day blocks counted from January 1 (days 1-7 are week 1).
    Simple,
}

/// A parsing error for [`WeekNumbering`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseWeekNumberingError;

impl fmt::Display for ParseWeekNumberingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("provided string was not a recognized week-numbering system")
    }
}

impl FromStr for WeekNumbering {
    type Err = ParseWeekNumberingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "us" => Ok(Self::Us),
            "iso" => Ok(Self::Iso),
            "simple" => Ok(Self::Simple),
            _ => Err(ParseWeekNumberingError),
        }
    }
}

impl fmt::Display for WeekNumbering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Us => "us",
            Self::Iso => "iso",
            Self::Simple => "simple",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_ordering_is_ascending() {
        assert!(Unit::Second < Unit::Minute);
        assert!(Unit::Minute < Unit::Hour);
        assert!(Unit::Hour < Unit::Day);
        assert!(Unit::Day < Unit::Week);
        assert!(Unit::Week < Unit::Month);
        assert!(Unit::Month < Unit::Year);
    }

    #[test]
    fn unit_from_str_accepts_plurals() {
        assert_eq!(Unit::from_str("week"), Ok(Unit::Week));
        assert_eq!(Unit::from_str("weeks"), Ok(Unit::Week));
        assert_eq!(Unit::from_str("fortnight"), Err(ParseUnitError));
    }

    #[test]
    fn unit_value_ranges() {
        assert_eq!(Unit::Month.value_range(), 1..=12);
        assert_eq!(Unit::Day.value_range(), 1..=31);
        assert_eq!(Unit::Week.value_range(), 1..=53);
        assert_eq!(Unit::Hour.value_range(), 0..=23);
        assert_eq!(Unit::Second.value_range(), 0..=59);
    }

    #[test]
    fn weekday_numbers_are_sunday_based() {
        assert_eq!(Weekday::Sunday.number(), 1);
        assert_eq!(Weekday::Saturday.number(), 7);
        assert_eq!(Weekday::from_number(4), Some(Weekday::Wednesday));
        assert_eq!(Weekday::from_number(0), None);
        assert_eq!(Weekday::from_number(8), None);
    }

    #[test]
    fn weekday_distance_from_week_start() {
        assert_eq!(Weekday::Sunday.days_since(Weekday::Sunday), 0);
        assert_eq!(Weekday::Saturday.days_since(Weekday::Sunday), 6);
        assert_eq!(Weekday::Sunday.days_since(Weekday::Monday), 6);
        assert_eq!(Weekday::Monday.days_since(Weekday::Monday), 0);
    }

    #[test]
    fn week_numbering_round_trips_through_strings() {
        for system in [WeekNumbering::Us, WeekNumbering::Iso, WeekNumbering::Simple] {
            assert_eq!(WeekNumbering::from_str(&system.to_string()), Ok(system));
        }
    }
}
