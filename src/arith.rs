//! Calendar arithmetic and signed differences.
//!
//! Calendar units (year, month, week, day) move civil fields and then
//! re-resolve the wall-clock reading in the context's time zone, so a day
//! step lands on the same clock time even across a DST transition. Time
//! units (hour, minute, second) move the instant by exact elapsed
//! nanoseconds and ignore civil fields entirely.

use crate::civil::{self, CivilDateTime};
use crate::config::CalendarContext;
use crate::error::DateMathError;
use crate::instant::Instant;
use crate::options::Unit;
use crate::{DateMathResult, NS_PER_HOUR, NS_PER_MINUTE, NS_PER_SECOND};

/// Signed calendar and clock offsets applied in a single pass.
///
/// The calendar components apply first (years and months as one clamped
/// shift, then weeks and days), and the clock components then move the
/// result by exact elapsed time.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DateSpan {
    pub years: i64,
    pub months: i64,
    pub weeks: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

// ==== Addition and subtraction ====

impl Instant {
    /// Adds `amount` of `unit`.
    ///
    /// Year and month steps clamp the day of month into the target month,
    /// so January 31 plus one month is the last day of February. The clamp
    /// never propagates: each call clamps against its own target only.
    pub fn add(&self, unit: Unit, amount: i64, ctx: &CalendarContext) -> DateMathResult<Self> {
        match unit {
            Unit::Year => self.shift_civil(amount, 0, 0, ctx),
            Unit::Month => self.shift_civil(0, amount, 0, ctx),
            Unit::Week => {
                let days = amount.checked_mul(7).ok_or_else(|| {
                    DateMathError::range().with_message("week arithmetic overflowed")
                })?;
                self.shift_civil(0, 0, days, ctx)
            }
            Unit::Day => self.shift_civil(0, 0, amount, ctx),
            Unit::Hour => self.offset_nanoseconds(i128::from(amount) * NS_PER_HOUR),
            Unit::Minute => self.offset_nanoseconds(i128::from(amount) * NS_PER_MINUTE),
            Unit::Second => self.offset_nanoseconds(i128::from(amount) * NS_PER_SECOND),
        }
    }

    /// Subtracts `amount` of `unit`.
    pub fn subtract(&self, unit: Unit, amount: i64, ctx: &CalendarContext) -> DateMathResult<Self> {
        let amount = amount
            .checked_neg()
            .ok_or_else(|| DateMathError::range().with_message("amount is out of range"))?;
        self.add(unit, amount, ctx)
    }

    /// Adds every component of `span` in one pass.
    pub fn add_span(&self, span: &DateSpan, ctx: &CalendarContext) -> DateMathResult<Self> {
        let day_shift = span
            .weeks
            .checked_mul(7)
            .and_then(|days| days.checked_add(span.days))
            .ok_or_else(|| DateMathError::range().with_message("week arithmetic overflowed"))?;

        // Skip the civil round trip when no calendar component is present,
        // so pure clock spans stay exact even inside a repeated local hour.
        let base = if span.years == 0 && span.months == 0 && day_shift == 0 {
            *self
        } else {
            let local = ctx.local_datetime(self)?;
            let date = civil::shift_clamped(local.date, span.years, span.months)?;
            let date = civil::shift_days(date, day_shift)?;
            ctx.resolve(&CivilDateTime::new_unchecked(date, local.time))?
        };

        let nanos = i128::from(span.hours) * NS_PER_HOUR
            + i128::from(span.minutes) * NS_PER_MINUTE
            + i128::from(span.seconds) * NS_PER_SECOND;
        base.offset_nanoseconds(nanos)
    }

    fn shift_civil(
        &self,
        years: i64,
        months: i64,
        days: i64,
        ctx: &CalendarContext,
    ) -> DateMathResult<Self> {
        let local = ctx.local_datetime(self)?;
        let date = civil::shift_clamped(local.date, years, months)?;
        let date = civil::shift_days(date, days)?;
        ctx.resolve(&CivilDateTime::new_unchecked(date, local.time))
    }
}

// ==== Differences ====

impl Instant {
    /// Whole `unit`s elapsed from `other` to `self`, truncated toward zero.
    ///
    /// Positive when `self` is later. Calendar units compare civil
    /// readings, so a month only counts once the day of month (and then
    /// the time of day) has been reached; time units divide exact elapsed
    /// nanoseconds.
    pub fn since(&self, other: &Self, unit: Unit, ctx: &CalendarContext) -> DateMathResult<i64> {
        match unit {
            Unit::Year | Unit::Month | Unit::Week | Unit::Day => {
                let from = ctx.local_datetime(other)?;
                let to = ctx.local_datetime(self)?;
                Ok(match unit {
                    Unit::Year => civil::whole_years_between(&from, &to),
                    Unit::Month => civil::whole_months_between(&from, &to),
                    Unit::Week => civil::whole_days_between(&from, &to) / 7,
                    _ => civil::whole_days_between(&from, &to),
                })
            }
            Unit::Hour => Ok(((self.as_i128() - other.as_i128()) / NS_PER_HOUR) as i64),
            Unit::Minute => Ok(((self.as_i128() - other.as_i128()) / NS_PER_MINUTE) as i64),
            Unit::Second => Ok(((self.as_i128() - other.as_i128()) / NS_PER_SECOND) as i64),
        }
    }

    /// Whole `unit`s from `self` to `other`; the negation of [`Instant::since`].
    pub fn until(&self, other: &Self, unit: Unit, ctx: &CalendarContext) -> DateMathResult<i64> {
        other.since(self, unit, ctx)
    }
}
