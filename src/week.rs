//! Week numbering.
//!
//! All three numbering systems are computed on epoch days so that week
//! extraction and week-based construction share one code path.
//!
//! - [`WeekNumbering::Us`]: week 1 is the week containing January 1,
//!   aligned to the configured first day of the week. The week containing
//!   the next January 1 already belongs to the next week-year.
//! - [`WeekNumbering::Iso`]: ISO-8601 week dates. Weeks start on Monday
//!   and week 1 is the week containing January 4. The configured first day
//!   of the week is ignored.
//! - [`WeekNumbering::Simple`]: seven-day blocks counted from January 1,
//!   with no weekday alignment at all.

use crate::civil::CivilDate;
use crate::error::DateMathError;
use crate::options::{WeekNumbering, Weekday};
use crate::utils;
use crate::DateMathResult;

/// A week number qualified by the week-year it belongs to.
///
/// Near a year boundary the week-year can differ from the civil year by
/// one in either direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct WeekOfYear {
    pub(crate) year: i32,
    pub(crate) week: u8,
}

/// The first day of the week containing `days`.
pub(crate) fn week_start(days: i64, first_day: Weekday) -> i64 {
    days - i64::from(utils::weekday_from_epoch_days(days).days_since(first_day))
}

/// The start of week 1 of `year` under US-style numbering.
fn us_anchor(year: i32, first_day: Weekday) -> i64 {
    week_start(utils::epoch_days_from_ymd(year, 1, 1), first_day)
}

/// The start of ISO week 1 of `year`, the Monday on or before January 4.
fn iso_anchor(year: i32) -> i64 {
    week_start(utils::epoch_days_from_ymd(year, 1, 4), Weekday::Monday)
}

pub(crate) fn week_of_year(days: i64, numbering: WeekNumbering, first_day: Weekday) -> WeekOfYear {
    let civil_year = CivilDate::from_epoch_days(days).year;
    match numbering {
        WeekNumbering::Us => {
            let start = week_start(days, first_day);
            // A week that reaches the next January 1 is week 1 of the next
            // year rather than a high-numbered week of this one.
            if start >= us_anchor(civil_year + 1, first_day) {
                return WeekOfYear {
                    year: civil_year + 1,
                    week: 1,
                };
            }
            let anchor = us_anchor(civil_year, first_day);
            WeekOfYear {
                year: civil_year,
                week: ((start - anchor) / 7 + 1) as u8,
            }
        }
        WeekNumbering::Iso => {
            let start = week_start(days, Weekday::Monday);
            // Late December can already belong to week 1 of the next year,
            // and early January to week 52/53 of the previous one.
            if start >= iso_anchor(civil_year + 1) {
                return WeekOfYear {
                    year: civil_year + 1,
                    week: 1,
                };
            }
            let mut year = civil_year;
            let mut anchor = iso_anchor(year);
            if start < anchor {
                year -= 1;
                anchor = iso_anchor(year);
            }
            WeekOfYear {
                year,
                week: ((start - anchor) / 7 + 1) as u8,
            }
        }
        WeekNumbering::Simple => {
            let date = CivilDate::from_epoch_days(days);
            WeekOfYear {
                year: civil_year,
                week: ((date.day_of_year() - 1) / 7 + 1) as u8,
            }
        }
    }
}

/// The 1-based week of the month containing `days`.
pub(crate) fn week_of_month(days: i64, numbering: WeekNumbering, first_day: Weekday) -> u8 {
    let date = CivilDate::from_epoch_days(days);
    match numbering {
        WeekNumbering::Us => {
            let month_start = utils::epoch_days_from_ymd(date.year, date.month, 1);
            ((week_start(days, first_day) - week_start(month_start, first_day)) / 7 + 1) as u8
        }
        WeekNumbering::Iso => {
            let month_start = utils::epoch_days_from_ymd(date.year, date.month, 1);
            ((week_start(days, Weekday::Monday) - week_start(month_start, Weekday::Monday)) / 7 + 1)
                as u8
        }
        WeekNumbering::Simple => (date.day - 1) / 7 + 1,
    }
}

/// Resolves a `(week-year, week, weekday)` triple to epoch days.
///
/// The result is validated by re-extracting the week number, so a triple
/// that does not exist in the given numbering system (week 53 of a
/// 52-week year, or a weekday missing from the tail block of a simple
/// week) is rejected rather than silently rolling over.
pub(crate) fn epoch_days_from_week(
    year: i32,
    week: i64,
    weekday: Weekday,
    numbering: WeekNumbering,
    first_day: Weekday,
) -> DateMathResult<i64> {
    if !(1..=53).contains(&week) {
        return Err(
            DateMathError::invalid_components().with_message("week number must be within 1..=53")
        );
    }

    let days = match numbering {
        WeekNumbering::Us => {
            us_anchor(year, first_day) + (week - 1) * 7 + i64::from(weekday.days_since(first_day))
        }
        WeekNumbering::Iso => {
            iso_anchor(year) + (week - 1) * 7 + i64::from(weekday.days_since(Weekday::Monday))
        }
        WeekNumbering::Simple => {
            let block_start = utils::epoch_days_from_ymd(year, 1, 1) + (week - 1) * 7;
            let block_weekday = utils::weekday_from_epoch_days(block_start);
            block_start + i64::from(weekday.days_since(block_weekday))
        }
    };

    let resolved = week_of_year(days, numbering, first_day);
    if resolved.year != year || i64::from(resolved.week) != week {
        return Err(DateMathError::invalid_components()
            .with_message("no such week and weekday combination in that year"));
    }
    if numbering == WeekNumbering::Simple && utils::weekday_from_epoch_days(days) != weekday {
        return Err(DateMathError::invalid_components()
            .with_message("no such week and weekday combination in that year"));
    }
    Ok(days)
}
