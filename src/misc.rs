//! Assorted conveniences layered over the core operations.

use crate::civil::CivilDate;
use crate::config::CalendarContext;
use crate::instant::Instant;
use crate::options::{Unit, Weekday};
use crate::zone::{TimeZone, ZONE_PROVIDER};
use crate::{DateMathResult, NS_PER_HOUR, NS_PER_SECOND};

impl Instant {
    /// Daily instants from `self` up to but not including `end`.
    ///
    /// One entry per whole day between the two instants, stepping with
    /// wall-clock-preserving day arithmetic; `self` is the first entry.
    /// Empty when `end` is less than one whole day after `self`.
    pub fn dates_until(&self, end: &Self, ctx: &CalendarContext) -> DateMathResult<Vec<Self>> {
        let days = end.since(self, Unit::Day, ctx)?;
        let mut dates = Vec::with_capacity(usize::try_from(days).unwrap_or(0));
        for offset in 0..days {
            dates.push(self.add(Unit::Day, offset, ctx)?);
        }
        Ok(dates)
    }

    /// The instants at each hour boundary of the instant's civil day.
    ///
    /// 23, 24, or 25 entries depending on whether a DST transition
    /// shortens or stretches the day.
    pub fn hours_in_day(&self, ctx: &CalendarContext) -> DateMathResult<Vec<Self>> {
        let start = self.start_of(Unit::Day, ctx)?;
        let next = self.start_of_next(Unit::Day, ctx)?;
        let mut hours = Vec::with_capacity(25);
        let mut cursor = start;
        while cursor < next {
            hours.push(cursor);
            cursor = cursor.offset_nanoseconds(NS_PER_HOUR)?;
        }
        Ok(hours)
    }

    /// Whether the local reading is before noon.
    pub fn is_in_am(&self, ctx: &CalendarContext) -> DateMathResult<bool> {
        Ok(ctx.local_datetime(self)?.time.hour < 12)
    }

    /// Whether the instant sits exactly on a local hour boundary.
    pub fn is_start_of_hour(&self, ctx: &CalendarContext) -> DateMathResult<bool> {
        let time = ctx.local_datetime(self)?.time;
        Ok(time.minute == 0 && time.second == 0 && time.nanosecond == 0)
    }

    /// The weekday of the first day of the instant's month.
    pub fn weekday_of_month_start(&self, ctx: &CalendarContext) -> DateMathResult<Weekday> {
        let date = ctx.local_datetime(self)?.date;
        ctx.calendar
            .day_of_week(CivilDate::new_unchecked(date.year, date.month, 1))
    }

    /// The number of days in the instant's month.
    pub fn days_in_month(&self, ctx: &CalendarContext) -> DateMathResult<u8> {
        ctx.calendar.days_in_month(ctx.local_datetime(self)?.date)
    }

    /// The number of days in the month before the instant's.
    pub fn days_in_previous_month(&self, ctx: &CalendarContext) -> DateMathResult<u8> {
        self.subtract(Unit::Month, 1, ctx)?.days_in_month(ctx)
    }

    /// The number of days in the month after the instant's.
    pub fn days_in_next_month(&self, ctx: &CalendarContext) -> DateMathResult<u8> {
        self.add(Unit::Month, 1, ctx)?.days_in_month(ctx)
    }

    /// The instant whose reading in the context's zone matches this
    /// instant's reading in `target`.
    ///
    /// Shifts by the difference of the two zones' offsets at this
    /// instant; useful for presenting one wall-clock time under another
    /// zone's labels.
    pub fn in_time_zone(&self, target: &TimeZone, ctx: &CalendarContext) -> DateMathResult<Self> {
        let seconds = self.as_i128().div_euclid(NS_PER_SECOND) as i64;
        let here = ctx.time_zone.offset_record_at(seconds, &*ZONE_PROVIDER)?;
        let there = target.offset_record_at(seconds, &*ZONE_PROVIDER)?;
        let shift = i128::from(there.offset_seconds - here.offset_seconds) * NS_PER_SECOND;
        self.offset_nanoseconds(shift)
    }
}
