//! An exact point on the UTC timeline.

use crate::epoch::EpochNanoseconds;
use crate::DateMathResult;

/// An exact, timezone-independent point in time.
///
/// An `Instant` is nothing but a bounded nanosecond count since the Unix
/// epoch. Every civil reading of it (year, weekday, start of day, …) is a
/// function of a [`CalendarContext`](crate::config::CalendarContext), which
/// the extraction, boundary, arithmetic, and comparison methods take
/// explicitly.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant(EpochNanoseconds);

// ==== Construction and epoch accessors ====

impl Instant {
    /// Creates a new validated `Instant` from epoch nanoseconds.
    #[inline]
    pub fn try_new(nanoseconds: i128) -> DateMathResult<Self> {
        Ok(Self(EpochNanoseconds::try_from(nanoseconds)?))
    }

    /// Creates an `Instant` from whole seconds since the epoch.
    #[inline]
    pub fn from_epoch_seconds(epoch_seconds: i64) -> DateMathResult<Self> {
        Self::try_new(i128::from(epoch_seconds) * 1_000_000_000)
    }

    /// Creates an `Instant` from whole milliseconds since the epoch.
    #[inline]
    pub fn from_epoch_milliseconds(epoch_milliseconds: i64) -> DateMathResult<Self> {
        Self::try_new(i128::from(epoch_milliseconds) * 1_000_000)
    }

    /// The raw epoch nanosecond count.
    #[inline]
    #[must_use]
    pub fn as_i128(&self) -> i128 {
        self.0 .0
    }

    /// Seconds since the epoch, truncated.
    #[must_use]
    pub fn epoch_seconds(&self) -> i128 {
        self.as_i128() / 1_000_000_000
    }

    /// Milliseconds since the epoch, truncated.
    #[must_use]
    pub fn epoch_milliseconds(&self) -> i128 {
        self.as_i128() / 1_000_000
    }

    /// Microseconds since the epoch, truncated.
    #[must_use]
    pub fn epoch_microseconds(&self) -> i128 {
        self.as_i128() / 1_000
    }

    /// Nanoseconds since the epoch.
    #[must_use]
    pub fn epoch_nanoseconds(&self) -> i128 {
        self.as_i128()
    }

    /// Offsets the instant by a nanosecond amount, validating the result.
    #[inline]
    pub(crate) fn offset_nanoseconds(&self, nanos: i128) -> DateMathResult<Self> {
        Ok(Self(self.0.checked_add(nanos)?))
    }
}

impl From<EpochNanoseconds> for Instant {
    fn from(value: EpochNanoseconds) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NS_MAX_INSTANT, NS_MIN_INSTANT};

    #[test]
    fn max_and_minimum_instant_bounds() {
        assert!(Instant::try_new(NS_MAX_INSTANT).is_ok());
        assert!(Instant::try_new(NS_MIN_INSTANT).is_ok());
        assert!(Instant::try_new(NS_MAX_INSTANT + 1).is_err());
        assert!(Instant::try_new(NS_MIN_INSTANT - 1).is_err());
    }

    #[test]
    fn second_constructors_scale() {
        let instant = Instant::from_epoch_seconds(1_181_411_181).unwrap();
        assert_eq!(instant.epoch_nanoseconds(), 1_181_411_181_000_000_000);
        assert_eq!(instant.epoch_milliseconds(), 1_181_411_181_000);
        assert_eq!(instant.epoch_seconds(), 1_181_411_181);

        let negative = Instant::from_epoch_milliseconds(-1_500).unwrap();
        assert_eq!(negative.epoch_seconds(), -1);
    }

    #[test]
    fn instants_order_by_time() {
        let early = Instant::from_epoch_seconds(10).unwrap();
        let late = Instant::from_epoch_seconds(20).unwrap();
        assert!(early < late);
        assert_eq!(early.offset_nanoseconds(10_000_000_000).unwrap(), late);
    }
}
