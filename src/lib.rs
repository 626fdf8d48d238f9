//! Calendar-aware date arithmetic over exact instants.
//!
//! `datemath` layers civil-calendar operations over a bounded nanosecond
//! timeline: component extraction, period boundaries, clamped calendar
//! arithmetic, truncating differences, week-date construction, ISO 8601
//! ingest and emission, and comparison predicates. Every civil reading of
//! an [`Instant`] goes through a [`CalendarContext`] carrying the
//! calendar, time zone, first day of the week, and week numbering system,
//! so the same instant can be read under two contexts side by side.
//!
//! ```rust
//! use datemath::{CalendarContext, Instant, Unit};
//!
//! let ctx = CalendarContext::default();
//! let instant = Instant::from_iso_str("2007-06-09T17:46:21Z").unwrap();
//! assert_eq!(instant.year(&ctx).unwrap(), 2007);
//! assert_eq!(instant.week_of_year(&ctx).unwrap(), 23);
//!
//! let end = instant.end_of(Unit::Month, &ctx).unwrap();
//! assert_eq!(end.to_iso_string(&ctx).unwrap(), "2007-06-30T23:59:59Z");
//! ```
//!
//! Operations that read the process-wide default context instead of a
//! caller-built one go through [`CalendarContext::shared`], adjusted once
//! at startup with the `CalendarContext::configure_*` functions.
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap
)]

/// Forwards to `log::debug!` under the `log` feature, otherwise
/// type-checks the arguments and emits nothing.
macro_rules! debug_log {
    ($($args:tt)+) => {{
        #[cfg(feature = "log")]
        log::debug!($($args)+);
        #[cfg(not(feature = "log"))]
        {
            let _ = format_args!($($args)+);
        }
    }};
}

/// Forwards to `log::error!` under the `log` feature; used on invariant
/// failures that surface as [`ErrorKind::Assert`] errors.
macro_rules! error_log {
    ($($args:tt)+) => {{
        #[cfg(feature = "log")]
        log::error!($($args)+);
        #[cfg(not(feature = "log"))]
        {
            let _ = format_args!($($args)+);
        }
    }};
}

pub mod civil;
pub mod error;
pub mod fmt;
pub mod options;
pub mod zone;

#[cfg(feature = "sys")]
pub mod sys;

mod arith;
mod boundary;
mod cal;
mod compare;
mod config;
mod construct;
mod epoch;
mod extract;
mod instant;
mod misc;
mod parse;
mod week;

#[doc(hidden)]
pub(crate) mod utils;

#[doc(inline)]
pub use crate::error::{DateMathError, ErrorKind};

pub use crate::arith::DateSpan;
pub use crate::cal::Calendar;
pub use crate::civil::{CivilDate, CivilDateTime, CivilTime};
pub use crate::config::CalendarContext;
pub use crate::epoch::EpochNanoseconds;
pub use crate::extract::CalendarComponents;
pub use crate::fmt::{
    FORMAT_DEFAULT, FORMAT_FULL_DATE, FORMAT_ISO_DATE, FORMAT_ISO_DATE_TIME, FORMAT_ISO_TIME,
    FORMAT_LONG_DATE, FORMAT_LONG_TIME, FORMAT_MEDIUM_DATE, FORMAT_MEDIUM_TIME, FORMAT_SHORT_DATE,
    FORMAT_SHORT_TIME,
};
pub use crate::instant::Instant;
pub use crate::options::{Unit, WeekNumbering, Weekday};
pub use crate::zone::{FsZoneProvider, LocalCandidates, LocalTimeRecord, TimeZone, ZoneProvider};

#[cfg(feature = "sys")]
pub use crate::sys::system_time_zone;

/// The crate-wide result type.
pub type DateMathResult<T> = Result<T, DateMathError>;

// Nanosecond scale constants.
/// Nanoseconds per second: 1e9.
pub const NS_PER_SECOND: i128 = 1_000_000_000;
/// Nanoseconds per minute: 6e10.
pub const NS_PER_MINUTE: i128 = 60 * NS_PER_SECOND;
/// Nanoseconds per hour: 3.6e12.
pub const NS_PER_HOUR: i128 = 60 * NS_PER_MINUTE;
/// Nanoseconds per day: 8.64e13.
pub const NS_PER_DAY: i128 = 24 * NS_PER_HOUR;

/// Maximum instant nanosecond bound, 10^8 days from the epoch.
#[doc(hidden)]
pub(crate) const NS_MAX_INSTANT: i128 = NS_PER_DAY * 100_000_000;
/// Minimum instant nanosecond bound.
#[doc(hidden)]
pub(crate) const NS_MIN_INSTANT: i128 = -NS_MAX_INSTANT;
