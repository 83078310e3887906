/*!
Support for printing and parsing the RFC 3339 datetime format.

RFC 3339 is a profile of ISO 8601. The printer in this module always produces
the same shape:

```text
YYYY-MM-DDThh:mm:ss[.ffffff]Z
```

The fractional second is printed with exactly as many digits as the
[`Subsecond`] precision says, and is left out entirely when the precision is
zero. The offset is always `Z`, since every datetime in this crate is in UTC.

The parser is strict about shape and accepts:

* A four digit year, a two digit month and a two digit day separated by `-`.
* The separator `T` or `t`. In ISO 8601 mode, a space is accepted as well.
* A two digit hour, minute and second separated by `:`.
* An optional fractional second, starting with `.` or `,` and followed by at
least one digit. Only the first six digits are kept. Any further digits are
truncated, not rounded.
* An optional UTC offset: `Z`, `z`, `+hh:mm`, `-hh:mm`, `+hhmm`, `-hhmm`,
`+hh` or `-hh`. The hour of an offset must be less than `24` and its minute
less than `60`. An offset of negative zero is rejected, since RFC 3339 gives
it a meaning (an unknown local offset) that this crate can't represent.

In ISO 8601 mode, the year may also be written with more than four digits
and with a leading `-` for years before year `0`. This is what makes it
possible to round trip every datetime, since the printer writes such years
at their natural width.

When the shape matches, the fields are checked in the order month, day,
hour, minute and second, and the first invalid field is reported. A
non-zero offset is then subtracted to get the datetime in UTC, which may
change any of its fields.

# Example

```
use utc_datetime::{fmt::rfc3339::DateTimeParser, Subsecond, UtcDateTime};

static PARSER: DateTimeParser = DateTimeParser::new().iso8601(true);

let dt = PARSER.parse("2015-01-23 23:50:07,123+02:30")?;
assert_eq!(
    dt,
    UtcDateTime::constant(2015, 1, 23, 21, 20, 7)
        .with_subsecond(Subsecond::constant(123_000, 3)),
);
assert_eq!(dt.to_string(), "2015-01-23T21:20:07.123Z");

# Ok::<(), Box<dyn std::error::Error>>(())
```
*/

use alloc::string::String;

use crate::{
    datetime::{check_fields, Subsecond, UtcDateTime},
    error::{Error, ErrorKind},
    fmt::{
        util::{DecimalFormatter, FractionalFormatter},
        Parsed, Write, WriteExt,
    },
    iso::{Fields, IsoDays},
    unit::TimeUnit,
    util::parse,
};

/// A parser for RFC 3339 datetimes.
///
/// By default this is strict RFC 3339. Use [`DateTimeParser::iso8601`] to
/// also accept a space separator and expanded years.
///
/// Since a parser has no heap allocated state, it can be constructed in a
/// `const` context and stored in a `static`.
#[derive(Clone, Debug)]
pub struct DateTimeParser {
    iso8601: bool,
}

impl DateTimeParser {
    /// Create a new strict RFC 3339 parser.
    #[inline]
    pub const fn new() -> DateTimeParser {
        DateTimeParser { iso8601: false }
    }

    /// When enabled, the date and time may be separated by a space and the
    /// year may be negative or longer than four digits.
    ///
    /// # Example
    ///
    /// ```
    /// use utc_datetime::{fmt::rfc3339::DateTimeParser, ErrorKind};
    ///
    /// let strict = DateTimeParser::new();
    /// let lenient = DateTimeParser::new().iso8601(true);
    ///
    /// let input = "-0001-12-31 23:59:59Z";
    /// let err = strict.parse(input).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::InvalidFormat);
    /// let dt = lenient.parse(input)?;
    /// assert_eq!(dt.year(), -1);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub const fn iso8601(self, yes: bool) -> DateTimeParser {
        DateTimeParser { iso8601: yes }
    }

    /// Parse a datetime from the given input.
    ///
    /// The entire input must be a datetime. Errors include the input that
    /// failed to parse.
    pub fn parse<I: AsRef<[u8]>>(
        &self,
        input: I,
    ) -> Result<UtcDateTime, Error> {
        let input = input.as_ref();
        self.parse_full(input).map_err(|err| {
            trace!(
                "failed to parse {input:?} as {name}: {kind}",
                input = String::from_utf8_lossy(input),
                name = self.name(),
                kind = err.kind(),
            );
            err.parse(self.name(), input)
        })
    }

    fn name(&self) -> &'static str {
        if self.iso8601 {
            "ISO 8601"
        } else {
            "RFC 3339"
        }
    }

    fn parse_full(&self, input: &[u8]) -> Result<UtcDateTime, Error> {
        let raw = self.parse_raw(input)?.into_full()?;
        raw.into_datetime()
    }

    /// Matches the shape of a datetime without checking any of its fields.
    fn parse_raw<'i>(
        &self,
        input: &'i [u8],
    ) -> Result<Parsed<'i, RawDateTime>, Error> {
        let Parsed { value: year, input } = self.parse_year(input)?;
        let input = expect(input, b'-')?;
        let (month, input) = two_digits(input)?;
        let input = expect(input, b'-')?;
        let (day, input) = two_digits(input)?;
        let input = self.parse_separator(input)?;
        let (hour, input) = two_digits(input)?;
        let input = expect(input, b':')?;
        let (minute, input) = two_digits(input)?;
        let input = expect(input, b':')?;
        let (second, input) = two_digits(input)?;
        let Parsed { value: subsecond, input } = self.parse_fraction(input)?;
        let Parsed { value: offset, input } = self.parse_offset(input)?;
        let fields = Fields {
            year,
            month,
            day,
            hour,
            minute,
            second,
            microsecond: subsecond.value(),
        };
        let value =
            RawDateTime { fields, precision: subsecond.precision(), offset };
        Ok(Parsed { value, input })
    }

    fn parse_year<'i>(
        &self,
        input: &'i [u8],
    ) -> Result<Parsed<'i, i64>, Error> {
        if !self.iso8601 {
            let (year, input) =
                parse::fixed(input, 4).ok_or_else(invalid_format)?;
            return Ok(Parsed { value: year, input });
        }
        let (negative, input) = match input.split_first() {
            Some((&b'-', rest)) => (true, rest),
            _ => (false, input),
        };
        let len = parse::digit_len(input);
        if len < 4 {
            return Err(invalid_format());
        }
        let (digits, input) = input.split_at(len);
        // Too many digits to fit in an `i64` is certainly too many to fit in
        // the year of a datetime.
        let year = parse::i64(digits)
            .ok_or_else(|| Error::new(ErrorKind::Range))?;
        let value = if negative { -year } else { year };
        Ok(Parsed { value, input })
    }

    fn parse_separator<'i>(&self, input: &'i [u8]) -> Result<&'i [u8], Error> {
        match input.split_first() {
            Some((&(b'T' | b't'), rest)) => Ok(rest),
            Some((&b' ', rest)) if self.iso8601 => Ok(rest),
            _ => Err(invalid_format()),
        }
    }

    /// Parses an optional fractional second.
    ///
    /// Any number of digits is accepted, but only the first six are kept.
    fn parse_fraction<'i>(
        &self,
        input: &'i [u8],
    ) -> Result<Parsed<'i, Subsecond>, Error> {
        let Some((&(b'.' | b','), rest)) = input.split_first() else {
            return Ok(Parsed { value: Subsecond::ZERO, input });
        };
        let len = parse::digit_len(rest);
        if len == 0 {
            return Err(invalid_format());
        }
        let (digits, rest) = rest.split_at(len);
        let kept = &digits[..len.min(6)];
        let value = parse::i64(kept).ok_or_else(invalid_format)?;
        // At most six digits were kept, so this always fits.
        let precision = kept.len() as u8;
        let micros = value * 10i64.pow(6 - u32::from(precision));
        let value = Subsecond::new_unchecked(micros as u32, precision);
        Ok(Parsed { value, input: rest })
    }

    /// Parses an optional UTC offset into a signed number of seconds.
    fn parse_offset<'i>(
        &self,
        input: &'i [u8],
    ) -> Result<Parsed<'i, i32>, Error> {
        let (sign, rest) = match input.split_first() {
            None => return Ok(Parsed { value: 0, input }),
            Some((&(b'Z' | b'z'), rest)) => {
                return Ok(Parsed { value: 0, input: rest })
            }
            Some((&b'+', rest)) => (1, rest),
            Some((&b'-', rest)) => (-1, rest),
            Some(_) => return Err(invalid_format()),
        };
        let (hour, rest) = parse::fixed(rest, 2).ok_or_else(invalid_format)?;
        let (minute, rest) = match rest.split_first() {
            Some((&b':', minute)) => {
                parse::fixed(minute, 2).ok_or_else(invalid_format)?
            }
            Some((b, _)) if b.is_ascii_digit() => {
                parse::fixed(rest, 2).ok_or_else(invalid_format)?
            }
            _ => (0, rest),
        };
        if hour >= 24 || minute >= 60 {
            return Err(invalid_format());
        }
        if sign < 0 && hour == 0 && minute == 0 {
            return Err(invalid_format());
        }
        // Bounded by 23:59, so this fits.
        let value = sign * (hour * 3_600 + minute * 60) as i32;
        Ok(Parsed { value, input: rest })
    }
}

impl Default for DateTimeParser {
    fn default() -> DateTimeParser {
        DateTimeParser::new()
    }
}

/// A datetime that has the right shape, but whose fields haven't been checked
/// yet.
#[derive(Debug)]
struct RawDateTime {
    fields: Fields,
    precision: u8,
    offset: i32,
}

impl RawDateTime {
    fn into_datetime(self) -> Result<UtcDateTime, Error> {
        let RawDateTime { fields, precision, offset } = self;
        check_fields(&fields)?;
        if offset == 0 {
            return UtcDateTime::from_fields(&fields, precision);
        }
        let iso = IsoDays::from_fields(&fields)
            .add_fraction(-i64::from(offset), TimeUnit::Second);
        UtcDateTime::from_iso_days(iso, precision)
    }
}

/// A printer for RFC 3339 datetimes.
///
/// # Example
///
/// ```
/// use utc_datetime::{fmt::rfc3339::DateTimePrinter, UtcDateTime};
///
/// const PRINTER: DateTimePrinter = DateTimePrinter::new().lowercase(true);
///
/// let dt = UtcDateTime::constant(2024, 6, 15, 7, 0, 0);
/// let mut buf = String::new();
/// PRINTER.print(&dt, &mut buf)?;
/// assert_eq!(buf, "2024-06-15t07:00:00z");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct DateTimePrinter {
    lowercase: bool,
}

impl DateTimePrinter {
    /// Create a new printer that writes the `T` separator and `Z` offset in
    /// uppercase.
    #[inline]
    pub const fn new() -> DateTimePrinter {
        DateTimePrinter { lowercase: false }
    }

    /// Write the `T` separator and `Z` offset in lowercase.
    ///
    /// Both are permitted by RFC 3339, but uppercase is more common.
    #[inline]
    pub const fn lowercase(self, yes: bool) -> DateTimePrinter {
        DateTimePrinter { lowercase: yes }
    }

    /// Print the given datetime to a new string.
    pub fn to_string(&self, dt: &UtcDateTime) -> String {
        let mut buf = String::with_capacity(27);
        // Writing to a `String` can't fail.
        let _ = self.print(dt, &mut buf);
        buf
    }

    /// Print the given datetime to the writer given.
    ///
    /// This only returns an error when the writer does.
    pub fn print<W: Write>(
        &self,
        dt: &UtcDateTime,
        mut wtr: W,
    ) -> core::fmt::Result {
        static FMT_YEAR: DecimalFormatter =
            DecimalFormatter::new().minimum_digits(4);
        static FMT_TWO: DecimalFormatter =
            DecimalFormatter::new().minimum_digits(2);

        wtr.write_int(&FMT_YEAR, dt.year())?;
        wtr.write_str("-")?;
        wtr.write_int(&FMT_TWO, dt.month())?;
        wtr.write_str("-")?;
        wtr.write_int(&FMT_TWO, dt.day())?;
        wtr.write_str(if self.lowercase { "t" } else { "T" })?;
        wtr.write_int(&FMT_TWO, dt.hour())?;
        wtr.write_str(":")?;
        wtr.write_int(&FMT_TWO, dt.minute())?;
        wtr.write_str(":")?;
        wtr.write_int(&FMT_TWO, dt.second())?;
        let subsecond = dt.subsecond();
        if subsecond.precision() > 0 {
            let fmt =
                FractionalFormatter::new().precision(subsecond.precision());
            wtr.write_str(".")?;
            wtr.write_fraction(&fmt, subsecond.value())?;
        }
        wtr.write_str(if self.lowercase { "z" } else { "Z" })
    }
}

impl Default for DateTimePrinter {
    fn default() -> DateTimePrinter {
        DateTimePrinter::new()
    }
}

#[inline(never)]
#[cold]
fn invalid_format() -> Error {
    Error::new(ErrorKind::InvalidFormat)
}

/// Strips the given byte from the front of `input`.
fn expect(input: &[u8], byte: u8) -> Result<&[u8], Error> {
    match input.split_first() {
        Some((&b, rest)) if b == byte => Ok(rest),
        _ => Err(invalid_format()),
    }
}

fn two_digits(input: &[u8]) -> Result<(i8, &[u8]), Error> {
    let (n, rest) = parse::fixed(input, 2).ok_or_else(invalid_format)?;
    // Two digits are at most 99.
    Ok((n as i8, rest))
}
