//! Ordering and same-period predicates.

use crate::config::CalendarContext;
use crate::error::DateMathError;
use crate::instant::Instant;
use crate::options::Unit;
use crate::DateMathResult;

impl Instant {
    /// Whether this instant is strictly after `other`.
    #[inline]
    #[must_use]
    pub fn is_after(&self, other: &Self) -> bool {
        self > other
    }

    /// Whether this instant is strictly before `other`.
    #[inline]
    #[must_use]
    pub fn is_before(&self, other: &Self) -> bool {
        self < other
    }

    /// Whether this instant is `other` or later.
    #[inline]
    #[must_use]
    pub fn is_on_or_after(&self, other: &Self) -> bool {
        self >= other
    }

    /// Whether this instant is `other` or earlier.
    #[inline]
    #[must_use]
    pub fn is_on_or_before(&self, other: &Self) -> bool {
        self <= other
    }

    /// Whether both instants fall in the same `unit` period.
    ///
    /// Two instants share a period exactly when they share its start, so
    /// week sameness follows the context's `first_day_of_week`. Defined
    /// for Year through Hour; Minute and Second are rejected.
    pub fn is_within_same(
        &self,
        unit: Unit,
        other: &Self,
        ctx: &CalendarContext,
    ) -> DateMathResult<bool> {
        if matches!(unit, Unit::Minute | Unit::Second) {
            return Err(DateMathError::unsupported_unit()
                .with_message("same-period checks stop at hour granularity"));
        }
        Ok(self.start_of(unit, ctx)? == other.start_of(unit, ctx)?)
    }

    /// Whether this instant lies in the closed interval spanned by `a`
    /// and `b`, given in either order.
    #[must_use]
    pub fn is_between(&self, a: &Self, b: &Self) -> bool {
        let (min, max) = if a <= b { (a, b) } else { (b, a) };
        min <= self && self <= max
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::civil::CivilDateTime;
    use crate::error::ErrorKind;
    use crate::options::Weekday;

    fn at(year: i64, month: i64, day: i64, hour: i64, minute: i64, second: i64) -> Instant {
        let dt = CivilDateTime::balance(year, month, day, hour, minute, second, 0).unwrap();
        Instant::try_new(dt.utc_epoch_nanoseconds(0)).unwrap()
    }

    #[test]
    fn ordering_predicates() {
        let early = at(2015, 3, 7, 12, 0, 0);
        let late = at(2015, 3, 8, 12, 0, 0);
        assert!(late.is_after(&early));
        assert!(early.is_before(&late));
        assert!(!early.is_after(&early));
        assert!(early.is_on_or_after(&early));
        assert!(early.is_on_or_before(&early));
        assert!(!late.is_on_or_before(&early));
    }

    #[test]
    fn same_period_checks_share_a_start() {
        let ctx = CalendarContext::default();
        let morning = at(2015, 3, 7, 8, 15, 0);
        let evening = at(2015, 3, 7, 20, 45, 0);
        assert!(morning.is_within_same(Unit::Day, &evening, &ctx).unwrap());
        assert!(morning.is_within_same(Unit::Month, &evening, &ctx).unwrap());
        assert!(morning.is_within_same(Unit::Year, &evening, &ctx).unwrap());
        assert!(!morning.is_within_same(Unit::Hour, &evening, &ctx).unwrap());

        let next_day = at(2015, 3, 8, 8, 15, 0);
        assert!(!morning.is_within_same(Unit::Day, &next_day, &ctx).unwrap());

        let dec = at(2015, 12, 31, 23, 0, 0);
        let jan = at(2016, 1, 1, 1, 0, 0);
        assert!(!dec.is_within_same(Unit::Year, &jan, &ctx).unwrap());
        assert!(!dec.is_within_same(Unit::Month, &jan, &ctx).unwrap());
    }

    #[test]
    fn week_sameness_follows_the_first_day_of_week() {
        // Saturday 2015-03-07 and Sunday 2015-03-08.
        let saturday = at(2015, 3, 7, 12, 0, 0);
        let sunday = at(2015, 3, 8, 12, 0, 0);

        let mut ctx = CalendarContext::default();
        assert!(!saturday.is_within_same(Unit::Week, &sunday, &ctx).unwrap());

        ctx.first_day_of_week = Weekday::Monday;
        assert!(saturday.is_within_same(Unit::Week, &sunday, &ctx).unwrap());
    }

    #[test]
    fn sub_hour_sameness_is_rejected() {
        let ctx = CalendarContext::default();
        let instant = at(2015, 3, 7, 12, 0, 0);
        for unit in [Unit::Minute, Unit::Second] {
            let err = instant.is_within_same(unit, &instant, &ctx).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::UnsupportedUnit);
        }
    }

    #[test]
    fn between_is_inclusive_and_order_blind() {
        let a = at(2015, 3, 7, 0, 0, 0);
        let b = at(2015, 3, 9, 0, 0, 0);
        let inside = at(2015, 3, 8, 6, 0, 0);
        assert!(inside.is_between(&a, &b));
        assert!(inside.is_between(&b, &a));
        assert!(a.is_between(&a, &b));
        assert!(b.is_between(&a, &b));
        assert!(!at(2015, 3, 9, 0, 0, 1).is_between(&a, &b));
        assert!(!at(2015, 3, 6, 23, 59, 59).is_between(&b, &a));
    }
}
