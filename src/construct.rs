//! Building instants from civil fields.
//!
//! Out-of-range fields carry into the next larger unit (month 13 is
//! January of the following year, hour 24 the next day's midnight), and
//! the balanced reading is then resolved through the context's time zone:
//! a reading inside a DST gap lands past the gap, a repeated reading takes
//! its earlier occurrence.

use crate::civil::{self, CivilDate, CivilDateTime, CivilTime};
use crate::config::CalendarContext;
use crate::instant::Instant;
use crate::options::Weekday;
use crate::week;
use crate::DateMathResult;

impl Instant {
    /// Builds an instant from balanced civil fields.
    pub fn from_components(
        year: i64,
        month: i64,
        day: i64,
        hour: i64,
        minute: i64,
        second: i64,
        ctx: &CalendarContext,
    ) -> DateMathResult<Self> {
        Self::from_components_with_nanosecond(year, month, day, hour, minute, second, 0, ctx)
    }

    /// Builds an instant from balanced civil fields with sub-second
    /// precision.
    #[allow(clippy::too_many_arguments)]
    pub fn from_components_with_nanosecond(
        year: i64,
        month: i64,
        day: i64,
        hour: i64,
        minute: i64,
        second: i64,
        nanosecond: i64,
        ctx: &CalendarContext,
    ) -> DateMathResult<Self> {
        let local = CivilDateTime::balance(year, month, day, hour, minute, second, nanosecond)?;
        ctx.resolve(&local)
    }

    /// Builds the midnight instant of a civil date.
    pub fn from_ymd(year: i64, month: i64, day: i64, ctx: &CalendarContext) -> DateMathResult<Self> {
        Self::from_components(year, month, day, 0, 0, 0, ctx)
    }

    /// Builds an instant from a civil date and a wall-clock hour and
    /// minute.
    pub fn from_ymd_hm(
        year: i64,
        month: i64,
        day: i64,
        hour: i64,
        minute: i64,
        ctx: &CalendarContext,
    ) -> DateMathResult<Self> {
        Self::from_components(year, month, day, hour, minute, 0, ctx)
    }

    /// Builds the midnight instant of the `weekday` in week `week` of
    /// `year`, under the context's week numbering.
    ///
    /// Fails when that week and weekday combination does not exist, such
    /// as week 53 of a 52-week year.
    pub fn from_year_week_weekday(
        year: i32,
        week: u8,
        weekday: Weekday,
        ctx: &CalendarContext,
    ) -> DateMathResult<Self> {
        Self::from_year_week_weekday_time(year, week, weekday, 0, 0, 0, ctx)
    }

    /// Builds an instant from a week date and a wall-clock time.
    #[allow(clippy::too_many_arguments)]
    pub fn from_year_week_weekday_time(
        year: i32,
        week: u8,
        weekday: Weekday,
        hour: i64,
        minute: i64,
        second: i64,
        ctx: &CalendarContext,
    ) -> DateMathResult<Self> {
        let days = week::epoch_days_from_week(
            year,
            i64::from(week),
            weekday,
            ctx.week_numbering,
            ctx.first_day_of_week,
        )?;
        let (carry, time) = CivilTime::balance(hour, minute, second, 0);
        let date = civil::shift_days(CivilDate::from_epoch_days(days), carry as i64)?;
        ctx.resolve(&CivilDateTime::new_unchecked(date, time))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::WeekNumbering;
    use crate::zone::TimeZone;

    #[test]
    fn components_round_trip() {
        let ctx = CalendarContext::default();
        let instant = Instant::from_components(2015, 2, 28, 10, 30, 45, &ctx).unwrap();
        let parts = instant.components(&ctx).unwrap();
        assert_eq!(
            (parts.year, parts.month, parts.day_of_month),
            (2015, 2, 28)
        );
        assert_eq!((parts.hour, parts.minute, parts.second), (10, 30, 45));
    }

    #[test]
    fn out_of_range_fields_carry_upward() {
        let ctx = CalendarContext::default();
        assert_eq!(
            Instant::from_components(2015, 13, 1, 0, 0, 0, &ctx).unwrap(),
            Instant::from_ymd(2016, 1, 1, &ctx).unwrap()
        );
        assert_eq!(
            Instant::from_components(2015, 1, 0, 0, 0, 0, &ctx).unwrap(),
            Instant::from_ymd(2014, 12, 31, &ctx).unwrap()
        );
        assert_eq!(
            Instant::from_components(2015, 12, 31, 24, 0, 0, &ctx).unwrap(),
            Instant::from_ymd(2016, 1, 1, &ctx).unwrap()
        );
        assert_eq!(
            Instant::from_components(2015, 1, 1, 0, 0, -1, &ctx).unwrap(),
            Instant::from_components(2014, 12, 31, 23, 59, 59, &ctx).unwrap()
        );
    }

    #[test]
    fn conveniences_default_the_clock_fields() {
        let ctx = CalendarContext::default();
        assert_eq!(
            Instant::from_ymd(2007, 6, 9, &ctx).unwrap(),
            Instant::from_components(2007, 6, 9, 0, 0, 0, &ctx).unwrap()
        );
        assert_eq!(
            Instant::from_ymd_hm(2007, 6, 9, 17, 46, &ctx).unwrap(),
            Instant::from_components(2007, 6, 9, 17, 46, 0, &ctx).unwrap()
        );
    }

    #[test]
    fn nanosecond_variant_keeps_subsecond_precision() {
        let ctx = CalendarContext::default();
        let instant = Instant::from_components_with_nanosecond(
            2007, 6, 9, 17, 46, 21, 500_000_000, &ctx,
        )
        .unwrap();
        assert_eq!(instant.epoch_milliseconds(), 1_181_411_181_500);
    }

    #[test]
    fn week_dates_resolve_under_each_numbering() {
        let mut ctx = CalendarContext::default();
        assert_eq!(
            Instant::from_year_week_weekday(2007, 23, Weekday::Saturday, &ctx).unwrap(),
            Instant::from_ymd(2007, 6, 9, &ctx).unwrap()
        );

        // ISO week 53 of 2015 runs into January 2016.
        ctx.week_numbering = WeekNumbering::Iso;
        assert_eq!(
            Instant::from_year_week_weekday(2015, 53, Weekday::Friday, &ctx).unwrap(),
            Instant::from_ymd(2016, 1, 1, &ctx).unwrap()
        );
        assert!(Instant::from_year_week_weekday(2017, 53, Weekday::Monday, &ctx).is_err());
    }

    #[test]
    fn week_dates_carry_their_clock_fields() {
        let ctx = CalendarContext::default();
        assert_eq!(
            Instant::from_year_week_weekday_time(2007, 23, Weekday::Saturday, 17, 46, 21, &ctx)
                .unwrap(),
            Instant::from_components(2007, 6, 9, 17, 46, 21, &ctx).unwrap()
        );
        // Hour 24 lands on the following day's midnight.
        assert_eq!(
            Instant::from_year_week_weekday_time(2007, 23, Weekday::Saturday, 24, 0, 0, &ctx)
                .unwrap(),
            Instant::from_ymd(2007, 6, 10, &ctx).unwrap()
        );
    }

    #[test]
    fn construction_reads_the_context_zone() {
        let utc = CalendarContext::default();
        let mut shifted = CalendarContext::default();
        shifted.time_zone = TimeZone::OffsetMinutes(330);
        let here = Instant::from_ymd(2000, 1, 1, &utc).unwrap();
        let there = Instant::from_ymd(2000, 1, 1, &shifted).unwrap();
        assert_eq!(here.as_i128() - there.as_i128(), 330 * 60 * 1_000_000_000);
    }
}
