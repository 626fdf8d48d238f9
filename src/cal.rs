//! Calendar system identifiers.

use std::str::FromStr;

use icu_calendar::any_calendar::AnyCalendarKind;
use icu_calendar::types::IsoWeekday;
use icu_calendar::Date;

use crate::civil::CivilDate;
use crate::error::DateMathError;
use crate::options::Weekday;
use crate::DateMathResult;

/// A calendar system identifier.
///
/// Identifiers are validated against the BCP-47 calendar registry, but
/// arithmetic in this crate is only defined for the ISO and Gregorian
/// systems; any other registered calendar is rejected when configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calendar {
    kind: AnyCalendarKind,
}

impl Default for Calendar {
    fn default() -> Self {
        Self::GREGORIAN
    }
}

impl Calendar {
    /// The proleptic Gregorian calendar (`"gregory"`).
    pub const GREGORIAN: Self = Self {
        kind: AnyCalendarKind::Gregorian,
    };

    /// The ISO-8601 calendar (`"iso8601"`).
    pub const ISO: Self = Self {
        kind: AnyCalendarKind::Iso,
    };

    /// The BCP-47 identifier of this calendar.
    #[inline]
    #[must_use]
    pub fn identifier(&self) -> &'static str {
        // The registry string for this kind is `iso`; `iso8601` is the
        // identifier accepted and emitted here, matching `from_str`.
        match self.kind {
            AnyCalendarKind::Iso => "iso8601",
            kind => kind.as_bcp47_string(),
        }
    }

    fn to_icu4x(date: CivilDate) -> DateMathResult<Date<icu_calendar::Iso>> {
        Date::try_new_iso_date(date.year, date.month, date.day)
            .map_err(|e| DateMathError::invalid_components().with_message(e.to_string()))
    }

    /// The weekday of `date`, numbered 1 = Sunday.
    pub fn day_of_week(&self, date: CivilDate) -> DateMathResult<Weekday> {
        Ok(match Self::to_icu4x(date)?.day_of_week() {
            IsoWeekday::Sunday => Weekday::Sunday,
            IsoWeekday::Monday => Weekday::Monday,
            IsoWeekday::Tuesday => Weekday::Tuesday,
            IsoWeekday::Wednesday => Weekday::Wednesday,
            IsoWeekday::Thursday => Weekday::Thursday,
            IsoWeekday::Friday => Weekday::Friday,
            IsoWeekday::Saturday => Weekday::Saturday,
        })
    }

    /// The 1-based ordinal day of `date` within its year.
    pub fn day_of_year(&self, date: CivilDate) -> DateMathResult<u16> {
        Ok(Self::to_icu4x(date)?.day_of_year_info().day_of_year)
    }

    /// The number of days in `date`'s month.
    pub fn days_in_month(&self, date: CivilDate) -> DateMathResult<u8> {
        Ok(Self::to_icu4x(date)?.days_in_month())
    }

    /// The number of days in `date`'s year.
    pub fn days_in_year(&self, date: CivilDate) -> DateMathResult<u16> {
        Ok(Self::to_icu4x(date)?.day_of_year_info().days_in_year)
    }

    /// Whether `date` falls in a leap year.
    pub fn in_leap_year(&self, date: CivilDate) -> DateMathResult<bool> {
        Ok(self.days_in_year(date)? == 366)
    }
}

impl FromStr for Calendar {
    type Err = DateMathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // `iso8601` predates the BCP-47 registry lookup, so catch it first.
        if s == "iso8601" {
            return Ok(Self::ISO);
        }

        let Some(kind) = AnyCalendarKind::get_for_bcp47_string(s) else {
            return Err(
                DateMathError::invalid_config().with_message("not a known calendar identifier")
            );
        };

        match kind {
            AnyCalendarKind::Iso | AnyCalendarKind::Gregorian => Ok(Self { kind }),
            _ => Err(DateMathError::invalid_config()
                .with_message("only the iso8601 and gregory calendar systems are supported")),
        }
    }
}
