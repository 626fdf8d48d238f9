//! Civil component extraction.
//!
//! Every getter interprets the instant through the [`CalendarContext`]
//! passed in, so the same instant reads differently under different time
//! zones or week configurations.

use crate::config::CalendarContext;
use crate::instant::Instant;
use crate::options::{Unit, Weekday};
use crate::week;
use crate::{DateMathResult, NS_PER_SECOND};

/// A one-shot decomposition of an instant into its civil fields.
///
/// Produced by [`Instant::components`]; derived on demand and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarComponents {
    /// Civil year.
    pub year: i32,
    /// Month of year, `1..=12`.
    pub month: u8,
    /// Day of month, `1..=31`.
    pub day_of_month: u8,
    /// Hour of day on a 24-hour clock, `0..=23`.
    pub hour: u8,
    /// Minute of hour, `0..=59`.
    pub minute: u8,
    /// Second of minute, `0..=59`.
    pub second: u8,
    /// Weekday, always numbered 1 = Sunday through 7 = Saturday.
    pub weekday: Weekday,
    /// Week of year under the configured numbering, `1..=53`.
    pub week_of_year: u8,
    /// Week of month under the configured numbering, `1..=6`.
    pub week_of_month: u8,
    /// Ordinal day of year, `1..=366`.
    pub day_of_year: u16,
}

// ==== Component getters ====

impl Instant {
    /// The civil year.
    pub fn year(&self, ctx: &CalendarContext) -> DateMathResult<i32> {
        Ok(ctx.local_datetime(self)?.date.year)
    }

    /// The month of year, `1..=12`.
    pub fn month(&self, ctx: &CalendarContext) -> DateMathResult<u8> {
        Ok(ctx.local_datetime(self)?.date.month)
    }

    /// The day of month, `1..=31`.
    pub fn day_of_month(&self, ctx: &CalendarContext) -> DateMathResult<u8> {
        Ok(ctx.local_datetime(self)?.date.day)
    }

    /// The hour of day on a 24-hour clock.
    pub fn hour(&self, ctx: &CalendarContext) -> DateMathResult<u8> {
        Ok(ctx.local_datetime(self)?.time.hour)
    }

    /// The minute of hour.
    pub fn minute(&self, ctx: &CalendarContext) -> DateMathResult<u8> {
        Ok(ctx.local_datetime(self)?.time.minute)
    }

    /// The second of minute.
    pub fn second(&self, ctx: &CalendarContext) -> DateMathResult<u8> {
        Ok(ctx.local_datetime(self)?.time.second)
    }

    /// The weekday, numbered 1 = Sunday through 7 = Saturday.
    ///
    /// `first_day_of_week` moves week boundaries, never these numbers.
    pub fn weekday(&self, ctx: &CalendarContext) -> DateMathResult<Weekday> {
        ctx.calendar.day_of_week(ctx.local_datetime(self)?.date)
    }

    /// The ordinal day of year, `1..=366`.
    pub fn day_of_year(&self, ctx: &CalendarContext) -> DateMathResult<u16> {
        ctx.calendar.day_of_year(ctx.local_datetime(self)?.date)
    }

    /// The week of year under the configured numbering system.
    pub fn week_of_year(&self, ctx: &CalendarContext) -> DateMathResult<u8> {
        let date = ctx.local_datetime(self)?.date;
        Ok(week::week_of_year(date.to_epoch_days(), ctx.week_numbering, ctx.first_day_of_week).week)
    }

    /// The year that [`Instant::week_of_year`] counts within.
    ///
    /// Differs from [`Instant::year`] on the boundary days that belong to
    /// the first or last week of a neighboring year.
    pub fn year_of_week(&self, ctx: &CalendarContext) -> DateMathResult<i32> {
        let date = ctx.local_datetime(self)?.date;
        Ok(week::week_of_year(date.to_epoch_days(), ctx.week_numbering, ctx.first_day_of_week).year)
    }

    /// The week of month under the configured numbering system.
    pub fn week_of_month(&self, ctx: &CalendarContext) -> DateMathResult<u8> {
        let date = ctx.local_datetime(self)?.date;
        Ok(week::week_of_month(date.to_epoch_days(), ctx.week_numbering, ctx.first_day_of_week))
    }

    /// Whole seconds since the actual first instant of the civil day.
    ///
    /// On a day shortened or stretched by a DST transition this is elapsed
    /// time, not `hour * 3600 + minute * 60 + second`.
    pub fn seconds_into_day(&self, ctx: &CalendarContext) -> DateMathResult<i64> {
        let start = self.start_of(Unit::Day, ctx)?;
        Ok(((self.as_i128() - start.as_i128()) / NS_PER_SECOND) as i64)
    }

    /// All civil fields of the instant in one pass.
    pub fn components(&self, ctx: &CalendarContext) -> DateMathResult<CalendarComponents> {
        let local = ctx.local_datetime(self)?;
        let days = local.date.to_epoch_days();
        Ok(CalendarComponents {
            year: local.date.year,
            month: local.date.month,
            day_of_month: local.date.day,
            hour: local.time.hour,
            minute: local.time.minute,
            second: local.time.second,
            weekday: ctx.calendar.day_of_week(local.date)?,
            week_of_year: week::week_of_year(days, ctx.week_numbering, ctx.first_day_of_week).week,
            week_of_month: week::week_of_month(days, ctx.week_numbering, ctx.first_day_of_week),
            day_of_year: ctx.calendar.day_of_year(local.date)?,
        })
    }
}
