//! ISO 8601 string ingest, built on `ixdtf`.

use core::str::FromStr;

use ixdtf::{
    parsers::IxdtfParser,
    records::{IxdtfParseRecord, TimeRecord, UtcOffsetRecordOrZ},
};
use ixdtf::ParseError;

use crate::civil::{CivilDate, CivilDateTime, CivilTime};
use crate::error::DateMathError;
use crate::instant::Instant;
use crate::{DateMathResult, NS_PER_SECOND};

/// Maps an ixdtf `ParseError` onto a parse-kind error with a readable message.
fn map_parse_error(err: ParseError) -> DateMathError {
    use ParseError::*;
    let message = match err {
        InvalidMonthRange => "month is outside the valid range (1-12)".to_string(),
        InvalidDayRange => "day does not exist in the given month and year".to_string(),
        DateYear => "invalid year".to_string(),
        DateMonth => "invalid month".to_string(),
        DateDay => "invalid day".to_string(),
        TimeHour => "invalid hour".to_string(),
        TimeMinuteSecond => "invalid minute or second".to_string(),
        TimeSecond => "invalid second".to_string(),
        FractionPart => "invalid fractional seconds".to_string(),
        AbruptEnd { location } => format!("unexpected end while parsing {location}"),
        InvalidEnd => "unexpected trailing characters".to_string(),
        _ => format!("{err:?}"),
    };
    DateMathError::parse().with_message(message)
}

fn civil_time_from_record(record: TimeRecord) -> DateMathResult<CivilTime> {
    let nanosecond = record.fraction.and_then(|f| f.to_nanoseconds()).unwrap_or(0);
    // A leap-second reading clamps to the last representable second.
    CivilTime::new(record.hour, record.minute, record.second.min(59), nanosecond)
}

fn offset_seconds_from_record(offset: Option<UtcOffsetRecordOrZ>) -> i64 {
    match offset {
        None | Some(UtcOffsetRecordOrZ::Z) => 0,
        Some(UtcOffsetRecordOrZ::Offset(record)) => {
            let magnitude = i64::from(record.hour()) * 3600
                + i64::from(record.minute()) * 60
                + i64::from(record.second().unwrap_or(0));
            magnitude * record.sign() as i64
        }
    }
}

impl Instant {
    /// Parses an ISO 8601 date or date-time string into an instant.
    ///
    /// Accepts a date-only form (`2007-06-09`) and `T`-, `t`-, or
    /// space-separated date-time forms, optionally followed by `Z` or a
    /// numeric UTC offset. A date-only string reads as midnight, and a
    /// string without an offset reads as UTC.
    pub fn from_iso_str(source: &str) -> DateMathResult<Self> {
        let record = IxdtfParser::from_utf8(source.as_bytes())
            .parse()
            .map_err(map_parse_error)?;

        let IxdtfParseRecord {
            date: Some(date),
            time,
            offset,
            tz,
            ..
        } = record
        else {
            return Err(DateMathError::parse().with_message("a date component is required"));
        };

        // The instant is fixed by the offset alone. A bracketed zone name
        // would need resolution against zone data, which this form does not
        // carry, so reject it rather than silently dropping it.
        if tz.is_some() {
            return Err(DateMathError::parse()
                .with_message("time zone annotations are not supported here"));
        }

        let date = CivilDate::new(date.year, date.month, date.day)?;
        let time = match time {
            Some(record) => civil_time_from_record(record)?,
            None => CivilTime::midnight(),
        };
        let offset = i128::from(offset_seconds_from_record(offset)) * NS_PER_SECOND;
        let datetime = CivilDateTime::new_unchecked(date, time);
        Self::try_new(datetime.utc_epoch_nanoseconds(offset))
    }
}

impl FromStr for Instant {
    type Err = DateMathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_iso_str(s)
    }
}
