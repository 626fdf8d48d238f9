//! Period boundaries: start, middle, and end of a unit's span.
//!
//! A boundary is computed by truncating the instant's civil reading and
//! resolving it back through the context's time zone, so the start of a
//! day is the day's real first instant even when a DST transition skips
//! midnight. The previous and next variants step with the same clamped
//! arithmetic as [`Instant::add`], then take the boundary of the period
//! they land in.

use crate::civil::{CivilDate, CivilDateTime, CivilTime};
use crate::config::CalendarContext;
use crate::error::DateMathError;
use crate::instant::Instant;
use crate::options::Unit;
use crate::week;
use crate::{DateMathResult, NS_PER_SECOND};

impl Instant {
    /// The first instant of the `unit` period containing this instant.
    pub fn start_of(&self, unit: Unit, ctx: &CalendarContext) -> DateMathResult<Self> {
        let local = ctx.local_datetime(self)?;
        let truncated = match unit {
            Unit::Year => CivilDateTime::new_unchecked(
                CivilDate::new_unchecked(local.date.year, 1, 1),
                CivilTime::midnight(),
            ),
            Unit::Month => CivilDateTime::new_unchecked(
                CivilDate::new_unchecked(local.date.year, local.date.month, 1),
                CivilTime::midnight(),
            ),
            Unit::Week => {
                let start = week::week_start(local.date.to_epoch_days(), ctx.first_day_of_week);
                CivilDateTime::new_unchecked(
                    CivilDate::from_epoch_days(start),
                    CivilTime::midnight(),
                )
            }
            Unit::Day => CivilDateTime::new_unchecked(local.date, CivilTime::midnight()),
            Unit::Hour => CivilDateTime::new_unchecked(
                local.date,
                CivilTime::new_unchecked(local.time.hour, 0, 0, 0),
            ),
            Unit::Minute => CivilDateTime::new_unchecked(
                local.date,
                CivilTime::new_unchecked(local.time.hour, local.time.minute, 0, 0),
            ),
            Unit::Second => CivilDateTime::new_unchecked(
                local.date,
                CivilTime::new_unchecked(
                    local.time.hour,
                    local.time.minute,
                    local.time.second,
                    0,
                ),
            ),
        };
        ctx.resolve(&truncated)
    }

    /// The last counted second of the `unit` period: the next period's
    /// start minus one second.
    ///
    /// Not defined for [`Unit::Second`], which has no sub-period to stand
    /// on.
    pub fn end_of(&self, unit: Unit, ctx: &CalendarContext) -> DateMathResult<Self> {
        if unit == Unit::Second {
            return Err(DateMathError::unsupported_unit()
                .with_message("a second has no end distinct from its start"));
        }
        let next_start = self.add(unit, 1, ctx)?.start_of(unit, ctx)?;
        next_start.offset_nanoseconds(-NS_PER_SECOND)
    }

    /// The midpoint of the `unit` period: halfway from its start to its
    /// end.
    ///
    /// Not defined for [`Unit::Second`].
    pub fn middle_of(&self, unit: Unit, ctx: &CalendarContext) -> DateMathResult<Self> {
        let start = self.start_of(unit, ctx)?;
        let end = self.end_of(unit, ctx)?;
        start.offset_nanoseconds((end.as_i128() - start.as_i128()) / 2)
    }

    /// The start of the period before the one containing this instant.
    pub fn start_of_previous(&self, unit: Unit, ctx: &CalendarContext) -> DateMathResult<Self> {
        self.subtract(unit, 1, ctx)?.start_of(unit, ctx)
    }

    /// The start of the period after the one containing this instant.
    pub fn start_of_next(&self, unit: Unit, ctx: &CalendarContext) -> DateMathResult<Self> {
        self.add(unit, 1, ctx)?.start_of(unit, ctx)
    }

    /// The midpoint of the period before the one containing this instant.
    pub fn middle_of_previous(&self, unit: Unit, ctx: &CalendarContext) -> DateMathResult<Self> {
        self.subtract(unit, 1, ctx)?.middle_of(unit, ctx)
    }

    /// The midpoint of the period after the one containing this instant.
    pub fn middle_of_next(&self, unit: Unit, ctx: &CalendarContext) -> DateMathResult<Self> {
        self.add(unit, 1, ctx)?.middle_of(unit, ctx)
    }

    /// The end of the period before the one containing this instant.
    pub fn end_of_previous(&self, unit: Unit, ctx: &CalendarContext) -> DateMathResult<Self> {
        self.subtract(unit, 1, ctx)?.end_of(unit, ctx)
    }

    /// The end of the period after the one containing this instant.
    pub fn end_of_next(&self, unit: Unit, ctx: &CalendarContext) -> DateMathResult<Self> {
        self.add(unit, 1, ctx)?.end_of(unit, ctx)
    }
}
