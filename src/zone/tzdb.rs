//! TZif-backed zone data.
//!
//! Zone files are compiled by `zic` and laid out per [RFC 8536]. Parsing
//! is delegated to the `tzif` crate; this module resolves records out of
//! the version 2+ data block and, past the final stored transition, out
//! of the POSIX rule in the file footer. Slim files ship almost no
//! transitions, so the footer path carries most post-2007 lookups there.
//!
//! [RFC 8536]: https://datatracker.ietf.org/doc/html/rfc8536

use std::collections::BTreeMap;
#[cfg(not(target_os = "windows"))]
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

#[cfg(any(test, target_os = "windows"))]
use combine::Parser;
use tzif::data::posix::{PosixTzString, TransitionDay};
use tzif::data::time::Seconds;
use tzif::data::tzif::{DataBlock, LocalTimeTypeRecord, TzifData};

use crate::civil::CivilDate;
use crate::error::DateMathError;
use crate::options::Weekday;
use crate::utils;
use crate::zone::{LocalCandidates, LocalTimeRecord, ZoneProvider};
use crate::DateMathResult;

#[cfg(not(target_os = "windows"))]
const ZONEINFO_DIR: &str = "/usr/share/zoneinfo/";

const SECONDS_PER_DAY: i64 = 86_400;

/// Offsets never reach a full day, so records this far to either side of
/// a wall-clock reading bracket every transition that could affect it.
const PROBE_SECONDS: i64 = 26 * 3_600;

impl From<LocalTimeTypeRecord> for LocalTimeRecord {
    fn from(value: LocalTimeTypeRecord) -> Self {
        Self {
            offset_seconds: value.utoff.0,
            is_dst: value.is_dst,
        }
    }
}

/// A parsed TZif file, reduced to the version 2+ data block and the
/// trailing POSIX rule.
#[derive(Debug, Clone)]
pub(crate) struct Tzif {
    data_block: DataBlock,
    footer: Option<PosixTzString>,
}

impl Tzif {
    fn from_data(data: TzifData) -> DateMathResult<Self> {
        let TzifData {
            data_block2,
            footer,
            ..
        } = data;
        let Some(data_block) = data_block2 else {
            return Err(DateMathError::parse()
                .with_message("only TZif version 2+ zoneinfo data is supported"));
        };
        Ok(Self { data_block, footer })
    }

    #[cfg(any(test, target_os = "windows"))]
    pub(crate) fn from_bytes(data: &[u8]) -> DateMathResult<Self> {
        let Ok((parsed, _)) = tzif::parse::tzif::tzif().parse(data) else {
            return Err(DateMathError::parse().with_message("illformed TZif data"));
        };
        Self::from_data(parsed)
    }

    #[cfg(not(target_os = "windows"))]
    pub(crate) fn read(identifier: &str) -> DateMathResult<Self> {
        // Identifiers come from user configuration. Never let one walk
        // out of the zoneinfo tree.
        if identifier
            .split('/')
            .any(|segment| segment.is_empty() || segment.starts_with('.'))
        {
            return Err(unknown_identifier());
        }
        let mut path = PathBuf::from(ZONEINFO_DIR);
        path.push(identifier);
        Self::from_path(&path)
    }

    #[cfg(not(target_os = "windows"))]
    fn from_path<P: AsRef<Path>>(path: P) -> DateMathResult<Self> {
        tzif::parse_tzif_file(path.as_ref())
            .map_err(|e| DateMathError::range().with_message(e.to_string()))
            .and_then(Self::from_data)
    }

    /// The local time record in effect at a UTC instant.
    ///
    /// A transition takes effect at its own instant. Instants before the
    /// first transition use the first defined record, and instants past
    /// the last transition fall through to the POSIX footer rule.
    pub(crate) fn record_at(&self, utc_seconds: i64) -> DateMathResult<LocalTimeRecord> {
        let db = &self.data_block;
        match db.transition_times.binary_search(&Seconds(utc_seconds)) {
            Ok(idx) => Ok(local_record(db, idx)?.into()),
            Err(0) => Ok(initial_record(db)?.into()),
            Err(idx) if idx == db.transition_times.len() => match self.footer.as_ref() {
                Some(posix) => footer_record_at(posix, utc_seconds),
                // Without a footer the last stored record stays in effect.
                None => Ok(local_record(db, idx - 1)?.into()),
            },
            Err(idx) => Ok(local_record(db, idx - 1)?.into()),
        }
    }

    /// The records matching a wall-clock reading with no offset attached.
    ///
    /// A surrounding record is kept as a candidate only if subtracting its
    /// offset lands on an instant where that record is actually in effect.
    /// Zero survivors mean the reading sits in a transition gap, two mean
    /// it sits in a repeated span.
    pub(crate) fn wall_candidates(&self, wall_seconds: i64) -> DateMathResult<LocalCandidates> {
        let before = self.record_at(wall_seconds.saturating_sub(PROBE_SECONDS))?;
        let after = self.record_at(wall_seconds.saturating_add(PROBE_SECONDS))?;

        let holds = |record: LocalTimeRecord| -> DateMathResult<bool> {
            let resolved = self.record_at(wall_seconds - record.offset_seconds)?;
            Ok(resolved.offset_seconds == record.offset_seconds)
        };

        let before_holds = holds(before)?;
        let after_holds = after.offset_seconds != before.offset_seconds && holds(after)?;

        match (before_holds, after_holds) {
            // Two survivors imply the offset decreased, so the earlier
            // instant is the one under the larger offset.
            (true, true) => Ok(LocalCandidates::Ambiguous {
                earlier: before,
                later: after,
            }),
            (true, false) => Ok(LocalCandidates::Unique(before)),
            (false, true) => Ok(LocalCandidates::Unique(after)),
            (false, false) => Ok(LocalCandidates::Skipped { before, after }),
        }
    }
}

fn local_record(db: &DataBlock, idx: usize) -> DateMathResult<LocalTimeTypeRecord> {
    // A transition without a type maps to the first record, matching how
    // zic emits files with a leading LMT record.
    let type_index = db.transition_types.get(idx).copied().unwrap_or(0);
    db.local_time_type_records
        .get(type_index)
        .copied()
        .ok_or_else(|| {
            error_log!("TZif transition type {type_index} is out of bounds");
            DateMathError::assert().with_message("TZif transition type out of bounds")
        })
}

fn initial_record(db: &DataBlock) -> DateMathResult<LocalTimeTypeRecord> {
    db.local_time_type_records.first().copied().ok_or_else(|| {
        error_log!("TZif data block carries no local time records");
        DateMathError::assert().with_message("TZif data has no local time records")
    })
}

/// Resolves the POSIX rule in a TZif footer.
fn footer_record_at(posix: &PosixTzString, utc_seconds: i64) -> DateMathResult<LocalTimeRecord> {
    // POSIX offsets are west positive, the opposite of this crate.
    let std = LocalTimeRecord {
        offset_seconds: -posix.std_info.offset.0,
        is_dst: false,
    };
    let Some(dst_info) = &posix.dst_info else {
        return Ok(std);
    };
    let dst = LocalTimeRecord {
        offset_seconds: -dst_info.variant_info.offset.0,
        is_dst: true,
    };

    // Rule dates come from the year the instant falls in, read in local
    // standard time. A southern-hemisphere daylight span wraps the year
    // end, which the inverted comparison covers.
    let local_days = (utc_seconds + std.offset_seconds).div_euclid(SECONDS_PER_DAY);
    let year = CivilDate::from_epoch_days(local_days).year;
    let start_utc = rule_transition_utc(
        &dst_info.start_date.day,
        dst_info.start_date.time.0,
        year,
        std.offset_seconds,
    )?;
    let end_utc = rule_transition_utc(
        &dst_info.end_date.day,
        dst_info.end_date.time.0,
        year,
        dst.offset_seconds,
    )?;

    let in_dst = if start_utc <= end_utc {
        (start_utc..end_utc).contains(&utc_seconds)
    } else {
        utc_seconds < end_utc || start_utc <= utc_seconds
    };
    Ok(if in_dst { dst } else { std })
}

/// The UTC instant of one POSIX rule transition in `year`.
///
/// The rule time is expressed in the local variant in effect just before
/// the transition, standard time for the start rule and daylight time for
/// the end rule.
fn rule_transition_utc(
    day: &TransitionDay,
    time_seconds: i64,
    year: i32,
    local_offset: i64,
) -> DateMathResult<i64> {
    Ok(rule_day_epoch(year, day)? * SECONDS_PER_DAY + time_seconds - local_offset)
}

/// The epoch day a POSIX transition rule names within `year`.
fn rule_day_epoch(year: i32, day: &TransitionDay) -> DateMathResult<i64> {
    match day {
        // 1-based ordinal day that never counts February 29.
        TransitionDay::NoLeap(ordinal) => {
            let mut ordinal = i64::from(*ordinal);
            if utils::is_leap_year(year) && ordinal >= 60 {
                ordinal += 1;
            }
            Ok(utils::epoch_days_for_year(year) + ordinal - 1)
        }
        // 0-based ordinal day that counts February 29.
        TransitionDay::WithLeap(ordinal) => {
            Ok(utils::epoch_days_for_year(year) + i64::from(*ordinal))
        }
        // Month, week and weekday, 0 = Sunday. Week 5 means the last
        // occurrence of the weekday in the month.
        TransitionDay::Mwd(month, week, weekday) => {
            if !(1..=12).contains(month) || !(1..=5).contains(week) || *weekday > 6 {
                error_log!("malformed POSIX transition rule M{month}.{week}.{weekday}");
                return Err(
                    DateMathError::assert().with_message("malformed POSIX transition rule")
                );
            }
            let target = Weekday::from_number(*weekday as u8 + 1)
                .ok_or_else(|| DateMathError::assert().with_message("malformed POSIX rule day"))?;
            let month_start = utils::epoch_days_from_ymd(year, *month as u8, 1);
            let month_len = i64::from(utils::days_in_month(year, *month as u8));
            let first_occurrence = month_start
                + i64::from(target.days_since(utils::weekday_from_epoch_days(month_start)));
            let mut day = first_occurrence + (i64::from(*week) - 1) * 7;
            while day - month_start >= month_len {
                day -= 7;
            }
            Ok(day)
        }
    }
}

fn unknown_identifier() -> DateMathError {
    DateMathError::range().with_message("time zone identifier does not exist")
}

/// Zone data provider reading TZif files from the system zoneinfo
/// database, with parsed files cached per identifier.
#[derive(Debug, Default)]
pub struct FsZoneProvider {
    cache: RwLock<BTreeMap<String, Arc<Tzif>>>,
}

impl FsZoneProvider {
    pub(crate) fn get(&self, identifier: &str) -> DateMathResult<Arc<Tzif>> {
        if let Ok(cache) = self.cache.read() {
            if let Some(tzif) = cache.get(identifier) {
                return Ok(Arc::clone(tzif));
            }
        }

        #[cfg(not(target_os = "windows"))]
        let (identifier, tzif) = (identifier, Tzif::read(identifier)?);

        #[cfg(target_os = "windows")]
        let (identifier, tzif) = {
            let Some((canonical, data)) = jiff_tzdb::get(identifier) else {
                return Err(unknown_identifier());
            };
            (canonical, Tzif::from_bytes(data)?)
        };

        let tzif = Arc::new(tzif);
        if let Ok(mut cache) = self.cache.write() {
            return Ok(Arc::clone(cache.entry(identifier.into()).or_insert(tzif)));
        }
        Ok(tzif)
    }
}

impl ZoneProvider for FsZoneProvider {
    fn identifier_exists(&self, identifier: &str) -> bool {
        self.get(identifier).is_ok()
    }

    fn utc_offset_seconds(
        &self,
        identifier: &str,
        utc_seconds: i64,
    ) -> DateMathResult<LocalTimeRecord> {
        self.get(identifier)?.record_at(utc_seconds)
    }

    fn wall_candidates(
        &self,
        identifier: &str,
        wall_seconds: i64,
    ) -> DateMathResult<LocalCandidates> {
        self.get(identifier)?.wall_candidates(wall_seconds)
    }
}
