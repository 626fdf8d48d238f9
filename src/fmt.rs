//! Format pattern constants and ISO 8601 emission.
//!
//! The `FORMAT_*` constants are Unicode date-format patterns for callers
//! that feed a pattern-based formatter; this crate itself emits only the
//! fixed ISO forms below.

use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::civil::{CivilDate, CivilDateTime, CivilTime};
use crate::config::CalendarContext;
use crate::instant::Instant;
use crate::DateMathResult;

/// `EEE MMM dd yyyy HH:mm:ss`, e.g. "Sat Jun 09 2007 17:46:21".
pub const FORMAT_DEFAULT: &str = "EEE MMM dd yyyy HH:mm:ss";
/// `M/d/yy`, e.g. "6/9/07".
pub const FORMAT_SHORT_DATE: &str = "M/d/yy";
/// `MMM d, yyyy`, e.g. "Jun 9, 2007".
pub const FORMAT_MEDIUM_DATE: &str = "MMM d, yyyy";
/// `MMMM d, yyyy`, e.g. "June 9, 2007".
pub const FORMAT_LONG_DATE: &str = "MMMM d, yyyy";
/// `EEEE, MMMM d, yyyy`, e.g. "Saturday, June 9, 2007".
pub const FORMAT_FULL_DATE: &str = "EEEE, MMMM d, yyyy";
/// `h:mm a`, e.g. "5:46 PM".
pub const FORMAT_SHORT_TIME: &str = "h:mm a";
/// `h:mm:ss a`, e.g. "5:46:21 PM".
pub const FORMAT_MEDIUM_TIME: &str = "h:mm:ss a";
/// `h:mm:ss a zzz`, e.g. "5:46:21 PM EST".
pub const FORMAT_LONG_TIME: &str = "h:mm:ss a zzz";
/// `yyyy-MM-dd`, e.g. "2007-06-09".
pub const FORMAT_ISO_DATE: &str = "yyyy-MM-dd";
/// `HH:mm:ss`, e.g. "17:46:21".
pub const FORMAT_ISO_TIME: &str = "HH:mm:ss";
/// `yyyy-MM-dd'T'HH:mm:ss`, e.g. "2007-06-09T17:46:21".
pub const FORMAT_ISO_DATE_TIME: &str = "yyyy-MM-dd'T'HH:mm:ss";

fn write_padded_u8<W: core::fmt::Write + ?Sized>(num: u8, sink: &mut W) -> core::fmt::Result {
    if num < 10 {
        sink.write_char('0')?;
    }
    num.write_to(sink)
}

/// Splits a value into nine zero-padded decimal digits, most significant
/// first, along with the digit count up to the last nonzero digit.
fn decimal_digits(mut value: u32) -> ([u8; 9], usize) {
    let mut output = [0; 9];
    let mut precision = 0;
    let mut i = 9;
    while i != 0 {
        let v = (value % 10) as u8;
        value /= 10;
        if precision == 0 && v != 0 {
            precision = i;
        }
        output[i - 1] = v;
        i -= 1;
    }

    (output, precision)
}

fn write_year<W: core::fmt::Write + ?Sized>(year: i32, sink: &mut W) -> core::fmt::Result {
    if (0..=9999).contains(&year) {
        let mut y = year;
        (y / 1_000).write_to(sink)?;
        y %= 1_000;
        (y / 100).write_to(sink)?;
        y %= 100;
        (y / 10).write_to(sink)?;
        y %= 10;
        y.write_to(sink)
    } else {
        // Extended years carry a sign and six digits.
        sink.write_char(if year < 0 { '-' } else { '+' })?;
        let (digits, _) = decimal_digits(year.unsigned_abs());
        for digit in digits.iter().skip(3) {
            digit.write_to(sink)?;
        }
        Ok(())
    }
}

impl Writeable for CivilDate {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        write_year(self.year, sink)?;
        sink.write_char('-')?;
        write_padded_u8(self.month, sink)?;
        sink.write_char('-')?;
        write_padded_u8(self.day, sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        let year_length = if (0..=9999).contains(&self.year) { 4 } else { 7 };

        LengthHint::exact(6 + year_length)
    }
}

impl Writeable for CivilTime {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        write_padded_u8(self.hour, sink)?;
        sink.write_char(':')?;
        write_padded_u8(self.minute, sink)?;
        sink.write_char(':')?;
        write_padded_u8(self.second, sink)?;
        if self.nanosecond == 0 {
            return Ok(());
        }
        sink.write_char('.')?;
        let (digits, precision) = decimal_digits(self.nanosecond);
        for digit in digits.iter().take(precision) {
            digit.write_to(sink)?;
        }
        Ok(())
    }

    fn writeable_length_hint(&self) -> LengthHint {
        if self.nanosecond == 0 {
            return LengthHint::exact(8);
        }
        LengthHint::between(10, 18)
    }
}

impl Writeable for CivilDateTime {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        self.date.write_to(sink)?;
        sink.write_char('T')?;
        self.time.write_to(sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        self.date.writeable_length_hint() + self.time.writeable_length_hint() + 1
    }
}

impl_display_with_writeable!(CivilDate);
impl_display_with_writeable!(CivilTime);
impl_display_with_writeable!(CivilDateTime);

/// A zoned civil reading with its UTC offset suffix.
struct IsoZoned {
    datetime: CivilDateTime,
    offset_seconds: i64,
}

impl Writeable for IsoZoned {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        self.datetime.write_to(sink)?;
        if self.offset_seconds == 0 {
            return sink.write_char('Z');
        }
        sink.write_char(if self.offset_seconds < 0 { '-' } else { '+' })?;
        let magnitude = self.offset_seconds.unsigned_abs();
        let hours = magnitude / 3600;
        if hours < 10 {
            sink.write_char('0')?;
        }
        hours.write_to(sink)?;
        sink.write_char(':')?;
        write_padded_u8((magnitude % 3600 / 60) as u8, sink)?;
        // Sub-minute offsets only occur in pre-standard local mean time.
        if magnitude % 60 != 0 {
            sink.write_char(':')?;
            write_padded_u8((magnitude % 60) as u8, sink)?;
        }
        Ok(())
    }

    fn writeable_length_hint(&self) -> LengthHint {
        let offset = if self.offset_seconds == 0 {
            LengthHint::exact(1)
        } else if self.offset_seconds % 60 == 0 {
            LengthHint::exact(6)
        } else {
            LengthHint::exact(9)
        };
        self.datetime.writeable_length_hint() + offset
    }
}

impl_display_with_writeable!(IsoZoned);

impl Instant {
    /// Renders the instant's civil reading in the context zone as an ISO
    /// 8601 string with an offset suffix, `Z` when the offset is zero.
    pub fn to_iso_string(&self, ctx: &CalendarContext) -> DateMathResult<String> {
        let zoned = IsoZoned {
            datetime: ctx.local_datetime(self)?,
            offset_seconds: ctx.offset_record(self)?.offset_seconds,
        };
        Ok(zoned.write_to_string().into_owned())
    }
}
