//! Bounded nanosecond counts since the Unix epoch.

use crate::error::DateMathError;
use crate::{DateMathResult, NS_MAX_INSTANT, NS_MIN_INSTANT};

/// Nanoseconds since the Unix epoch, limited to ±10^8 days.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EpochNanoseconds(pub(crate) i128);

/// Whether `nanos` lies within the representable instant range.
#[inline]
#[must_use]
pub(crate) fn is_valid_epoch_nanos(nanos: &i128) -> bool {
    (NS_MIN_INSTANT..=NS_MAX_INSTANT).contains(nanos)
}

impl TryFrom<i128> for EpochNanoseconds {
    type Error = DateMathError;

    fn try_from(value: i128) -> Result<Self, Self::Error> {
        if !is_valid_epoch_nanos(&value) {
            return Err(DateMathError::range()
                .with_message("nanoseconds are outside the representable instant range"));
        }
        Ok(Self(value))
    }
}

impl EpochNanoseconds {
    /// The raw nanosecond count.
    #[inline]
    #[must_use]
    pub fn as_i128(self) -> i128 {
        self.0
    }

    /// Offsets by `nanos`, erroring when the result leaves the valid range.
    pub(crate) fn checked_add(self, nanos: i128) -> DateMathResult<Self> {
        let sum = self.0.checked_add(nanos).ok_or_else(|| {
            DateMathError::range().with_message("nanosecond addition overflowed")
        })?;
        Self::try_from(sum)
    }
}
