//! Time zones and local time resolution.

use std::fmt;
use std::iter::Peekable;
use std::str::{Chars, FromStr};
use std::sync::LazyLock;

use crate::civil::CivilDateTime;
use crate::epoch::EpochNanoseconds;
use crate::error::DateMathError;
use crate::{DateMathResult, NS_PER_SECOND};

mod tzdb;

pub use tzdb::FsZoneProvider;

/// The provider backing every context-driven operation in the crate.
pub(crate) static ZONE_PROVIDER: LazyLock<FsZoneProvider> = LazyLock::new(FsZoneProvider::default);

/// A UTC offset in effect over some span of instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalTimeRecord {
    /// The offset from UTC in seconds, positive east of Greenwich.
    pub offset_seconds: i64,
    /// Whether the record describes a daylight saving variant.
    pub is_dst: bool,
}

/// The instants matching one wall-clock reading.
///
/// A reading taken during a forward transition matches nothing, and one
/// taken during the repeated hour after a backward transition matches two
/// distinct instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalCandidates {
    /// The reading was skipped over by a transition. The surrounding
    /// records are retained so the reading can be projected past the gap.
    Skipped {
        before: LocalTimeRecord,
        after: LocalTimeRecord,
    },
    /// Exactly one instant has this reading.
    Unique(LocalTimeRecord),
    /// The reading occurs twice, ordered by instant.
    Ambiguous {
        earlier: LocalTimeRecord,
        later: LocalTimeRecord,
    },
}

/// Source of time zone offset data.
pub trait ZoneProvider {
    /// Whether `identifier` names a zone this provider can serve.
    fn identifier_exists(&self, identifier: &str) -> bool;

    /// The local time record in effect at a UTC instant.
    fn utc_offset_seconds(
        &self,
        identifier: &str,
        utc_seconds: i64,
    ) -> DateMathResult<LocalTimeRecord>;

    /// The records matching a wall-clock reading given in seconds with no
    /// offset attached.
    fn wall_candidates(
        &self,
        identifier: &str,
        wall_seconds: i64,
    ) -> DateMathResult<LocalCandidates>;
}

/// A time zone, either an IANA name resolved through a [`ZoneProvider`]
/// or a fixed offset from UTC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeZone {
    IanaIdentifier(String),
    OffsetMinutes(i16),
}

impl TimeZone {
    pub const UTC: Self = Self::OffsetMinutes(0);

    pub(crate) fn offset_record_at(
        &self,
        utc_seconds: i64,
        provider: &impl ZoneProvider,
    ) -> DateMathResult<LocalTimeRecord> {
        match self {
            Self::OffsetMinutes(minutes) => Ok(LocalTimeRecord {
                offset_seconds: i64::from(*minutes) * 60,
                is_dst: false,
            }),
            Self::IanaIdentifier(identifier) => provider.utc_offset_seconds(identifier, utc_seconds),
        }
    }

    pub(crate) fn offset_nanoseconds_at(
        &self,
        epoch_nanoseconds: i128,
        provider: &impl ZoneProvider,
    ) -> DateMathResult<i128> {
        let seconds = epoch_nanoseconds.div_euclid(NS_PER_SECOND) as i64;
        let record = self.offset_record_at(seconds, provider)?;
        Ok(i128::from(record.offset_seconds) * NS_PER_SECOND)
    }

    /// The civil reading of an instant in this zone.
    pub(crate) fn local_datetime(
        &self,
        epoch_nanoseconds: i128,
        provider: &impl ZoneProvider,
    ) -> DateMathResult<CivilDateTime> {
        let offset = self.offset_nanoseconds_at(epoch_nanoseconds, provider)?;
        Ok(CivilDateTime::from_epoch_nanoseconds(
            epoch_nanoseconds,
            offset,
        ))
    }

    /// Resolves a wall-clock reading to a unique instant.
    ///
    /// A reading inside a forward transition gap is pushed past the gap by
    /// its length, and a repeated reading resolves to the earlier instant.
    pub(crate) fn resolve_local(
        &self,
        local: &CivilDateTime,
        provider: &impl ZoneProvider,
    ) -> DateMathResult<EpochNanoseconds> {
        let wall_nanoseconds = local.utc_epoch_nanoseconds(0);
        let offset_seconds = match self {
            Self::OffsetMinutes(minutes) => i64::from(*minutes) * 60,
            Self::IanaIdentifier(identifier) => {
                let wall_seconds = wall_nanoseconds.div_euclid(NS_PER_SECOND) as i64;
                match provider.wall_candidates(identifier, wall_seconds)? {
                    LocalCandidates::Unique(record) => record.offset_seconds,
                    LocalCandidates::Ambiguous { earlier, .. } => earlier.offset_seconds,
                    // Subtracting the pre-gap offset lands after the
                    // transition, shifted forward by the gap length.
                    LocalCandidates::Skipped { before, .. } => before.offset_seconds,
                }
            }
        };
        EpochNanoseconds::try_from(wall_nanoseconds - i128::from(offset_seconds) * NS_PER_SECOND)
    }
}

impl Default for TimeZone {
    fn default() -> Self {
        Self::UTC
    }
}

impl fmt::Display for TimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IanaIdentifier(identifier) => f.write_str(identifier),
            Self::OffsetMinutes(minutes) => {
                let sign = if *minutes < 0 { '-' } else { '+' };
                let magnitude = minutes.unsigned_abs();
                write!(f, "{sign}{:02}:{:02}", magnitude / 60, magnitude % 60)
            }
        }
    }
}

impl FromStr for TimeZone {
    type Err = DateMathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "Z" {
            return Ok(Self::UTC);
        }
        let mut chars = s.chars().peekable();
        if chars.peek().is_some_and(is_ascii_sign) {
            return parse_offset(&mut chars);
        }
        if !s.is_empty() && s.split('/').all(is_identifier_segment) {
            return Ok(Self::IanaIdentifier(s.to_owned()));
        }
        Err(DateMathError::parse().with_message("not a recognizable time zone"))
    }
}

fn is_identifier_segment(segment: &str) -> bool {
    !segment.is_empty()
        && !segment.starts_with('.')
        && segment
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-' | b'+' | b'.'))
}

fn is_ascii_sign(ch: &char) -> bool {
    matches!(ch, '+' | '-')
}

fn parse_offset(chars: &mut Peekable<Chars<'_>>) -> DateMathResult<TimeZone> {
    let sign = chars.next().map_or(1, |c| if c == '+' { 1 } else { -1 });
    let hours = parse_digit_pair(chars)?;

    if chars.peek() == Some(&':') {
        let _ = chars.next();
    }
    let minutes = match chars.peek().map(|ch| ch.is_ascii_digit()) {
        Some(true) => parse_digit_pair(chars)?,
        Some(false) => return Err(non_digit()),
        None => 0,
    };
    if chars.next().is_some() {
        return Err(
            DateMathError::parse().with_message("trailing characters after UTC offset string")
        );
    }
    if hours > 23 || minutes > 59 {
        return Err(DateMathError::parse().with_message("UTC offset out of range"));
    }
    Ok(TimeZone::OffsetMinutes((hours * 60 + minutes) * sign))
}

fn parse_digit_pair(chars: &mut Peekable<Chars<'_>>) -> DateMathResult<i16> {
    let mut value = 0i16;
    for _ in 0..2 {
        match chars.next() {
            Some(ch) if ch.is_ascii_digit() => {
                value = value * 10 + ch.to_digit(10).unwrap_or(0) as i16;
            }
            Some(_) => return Err(non_digit()),
            None => return Err(abrupt_end()),
        }
    }
    Ok(value)
}

fn abrupt_end() -> DateMathError {
    DateMathError::parse().with_message("unexpected end of UTC offset string")
}

fn non_digit() -> DateMathError {
    DateMathError::parse().with_message("expected an ascii digit in UTC offset string")
}
