//! System clock access and host zone discovery.

use web_time::{SystemTime, UNIX_EPOCH};

use crate::config::CalendarContext;
use crate::error::DateMathError;
use crate::instant::Instant;
use crate::options::Unit;
use crate::zone::{TimeZone, ZoneProvider, ZONE_PROVIDER};
use crate::DateMathResult;

impl Instant {
    /// The current system time.
    pub fn now() -> DateMathResult<Self> {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|_| {
                DateMathError::range().with_message("system clock reads before the Unix epoch")
            })
            .and_then(|d| Self::try_new(d.as_nanos() as i128))
    }

    /// Midnight of the current civil day in the context zone.
    pub fn start_of_today(ctx: &CalendarContext) -> DateMathResult<Self> {
        Self::now()?.start_of(Unit::Day, ctx)
    }

    /// The last second of the current civil day in the context zone.
    pub fn end_of_today(ctx: &CalendarContext) -> DateMathResult<Self> {
        Self::now()?.end_of(Unit::Day, ctx)
    }

    /// Midnight of the previous civil day.
    pub fn start_of_yesterday(ctx: &CalendarContext) -> DateMathResult<Self> {
        Self::now()?.start_of_previous(Unit::Day, ctx)
    }

    /// The last second of the previous civil day.
    pub fn end_of_yesterday(ctx: &CalendarContext) -> DateMathResult<Self> {
        Self::now()?.end_of_previous(Unit::Day, ctx)
    }

    /// Midnight of the next civil day.
    pub fn start_of_tomorrow(ctx: &CalendarContext) -> DateMathResult<Self> {
        Self::now()?.start_of_next(Unit::Day, ctx)
    }

    /// The last second of the next civil day.
    pub fn end_of_tomorrow(ctx: &CalendarContext) -> DateMathResult<Self> {
        Self::now()?.end_of_next(Unit::Day, ctx)
    }
}

/// The host time zone reported by the operating system.
///
/// The identifier is validated against the zone data on disk, so a host
/// that reports a zone this process cannot read is an error rather than a
/// silently broken context.
pub fn system_time_zone() -> DateMathResult<TimeZone> {
    let identifier = iana_time_zone::get_timezone().map_err(|_| {
        DateMathError::invalid_config().with_message("could not discover the system time zone")
    })?;
    let zone = identifier.parse::<TimeZone>()?;
    if let TimeZone::IanaIdentifier(identifier) = &zone {
        if !ZONE_PROVIDER.identifier_exists(identifier) {
            return Err(DateMathError::invalid_config()
                .with_message("system time zone is missing from the zone data"));
        }
    }
    Ok(zone)
}
