//! Operation context and the process-wide default.

use std::sync::{Arc, LazyLock, RwLock, RwLockReadGuard, RwLockWriteGuard};

use icu_locid::Locale;

use crate::cal::Calendar;
use crate::civil::CivilDateTime;
use crate::error::DateMathError;
use crate::instant::Instant;
use crate::options::{WeekNumbering, Weekday};
use crate::zone::{LocalTimeRecord, TimeZone, ZoneProvider, ZONE_PROVIDER};
use crate::{DateMathResult, NS_PER_SECOND};

/// The settings a date operation reads instead of taking per-call
/// arguments.
///
/// A context can be built at any call site, but most callers rely on the
/// process-wide default, adjusted once at startup through the
/// `configure_*` functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarContext {
    /// Calendar system for field extraction and arithmetic.
    pub calendar: Calendar,
    /// Locale attached to formatted output.
    pub locale: Locale,
    /// Zone in which civil readings of instants are taken.
    pub time_zone: TimeZone,
    /// First day of the week, for week alignment.
    pub first_day_of_week: Weekday,
    /// Week numbering system.
    pub week_numbering: WeekNumbering,
}

impl Default for CalendarContext {
    fn default() -> Self {
        Self {
            calendar: Calendar::default(),
            locale: Locale::UND,
            time_zone: TimeZone::UTC,
            first_day_of_week: Weekday::Sunday,
            week_numbering: WeekNumbering::Us,
        }
    }
}

/// The default context starts in the system zone when it can be
/// discovered, otherwise UTC.
fn initial_context() -> CalendarContext {
    #[allow(unused_mut)]
    let mut context = CalendarContext::default();
    #[cfg(feature = "sys")]
    if let Ok(zone) = crate::sys::system_time_zone() {
        context.time_zone = zone;
    }
    context
}

static SHARED_CONTEXT: LazyLock<RwLock<Arc<CalendarContext>>> =
    LazyLock::new(|| RwLock::new(Arc::new(initial_context())));

fn read_shared() -> RwLockReadGuard<'static, Arc<CalendarContext>> {
    match SHARED_CONTEXT.read() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

fn write_shared() -> RwLockWriteGuard<'static, Arc<CalendarContext>> {
    match SHARED_CONTEXT.write() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

fn update_shared(update: impl FnOnce(&mut CalendarContext)) {
    let mut guard = write_shared();
    let mut next = (**guard).clone();
    update(&mut next);
    *guard = Arc::new(next);
}

impl CalendarContext {
    /// A snapshot of the process-wide context.
    ///
    /// Operations running concurrently with a `configure_*` call see
    /// either the old or the new context, never a mix.
    pub fn shared() -> Arc<CalendarContext> {
        Arc::clone(&read_shared())
    }

    /// Replaces the process-wide context wholesale.
    pub fn set_shared(context: CalendarContext) {
        *write_shared() = Arc::new(context);
    }

    /// Restores the process-wide context to its startup state.
    pub fn reset() {
        Self::set_shared(initial_context());
    }

    /// Sets the process-wide calendar from a BCP-47 identifier.
    pub fn configure_calendar(identifier: &str) -> DateMathResult<()> {
        let calendar = identifier.parse::<Calendar>()?;
        debug_log!("default calendar set to {}", calendar.identifier());
        update_shared(|context| context.calendar = calendar);
        Ok(())
    }

    /// Sets the process-wide locale from a BCP-47 language tag.
    pub fn configure_locale(tag: &str) -> DateMathResult<()> {
        let locale = tag
            .parse::<Locale>()
            .map_err(|e| DateMathError::invalid_config().with_message(e.to_string()))?;
        debug_log!("default locale set to {locale}");
        update_shared(|context| context.locale = locale);
        Ok(())
    }

    /// Sets the process-wide time zone from an IANA identifier or a UTC
    /// offset string.
    pub fn configure_time_zone(zone: &str) -> DateMathResult<()> {
        let zone = zone.parse::<TimeZone>()?;
        if let TimeZone::IanaIdentifier(identifier) = &zone {
            if !ZONE_PROVIDER.identifier_exists(identifier) {
                return Err(
                    DateMathError::invalid_config().with_message("unknown time zone identifier")
                );
            }
        }
        debug_log!("default time zone set to {zone}");
        update_shared(|context| context.time_zone = zone);
        Ok(())
    }

    /// Sets the process-wide first day of the week.
    pub fn configure_first_day_of_week(weekday: Weekday) {
        update_shared(|context| context.first_day_of_week = weekday);
    }

    /// Sets the process-wide week numbering system.
    pub fn configure_week_numbering(numbering: WeekNumbering) {
        update_shared(|context| context.week_numbering = numbering);
    }
}

impl CalendarContext {
    /// The civil reading of `instant` in this context's zone.
    pub(crate) fn local_datetime(&self, instant: &Instant) -> DateMathResult<CivilDateTime> {
        self.time_zone
            .local_datetime(instant.as_i128(), &*ZONE_PROVIDER)
    }

    /// Resolves a civil reading in this context's zone back to an
    /// instant.
    pub(crate) fn resolve(&self, local: &CivilDateTime) -> DateMathResult<Instant> {
        Ok(Instant::from(
            self.time_zone.resolve_local(local, &*ZONE_PROVIDER)?,
        ))
    }

    /// The offset record in effect at `instant`.
    pub(crate) fn offset_record(&self, instant: &Instant) -> DateMathResult<LocalTimeRecord> {
        let seconds = instant.as_i128().div_euclid(NS_PER_SECOND) as i64;
        self.time_zone.offset_record_at(seconds, &*ZONE_PROVIDER)
    }
}
