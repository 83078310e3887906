/*!
Formatting and parsing of datetimes as text.

The only textual format supported is the profile of ISO 8601 described by
[RFC 3339]: `YYYY-MM-DDThh:mm:ss[.ffffff]Z`. See the [`rfc3339`] module for
the details of what is accepted when parsing and what is produced when
printing.

Most callers don't need anything in this module. The high level entry points
are [`UtcDateTime::to_rfc3339`](crate::UtcDateTime::to_rfc3339),
[`UtcDateTime::from_rfc3339`](crate::UtcDateTime::from_rfc3339) and
[`UtcDateTime::from_iso8601`](crate::UtcDateTime::from_iso8601), along with
the `Display` and `FromStr` trait implementations. This module is useful for
printing into an existing buffer without allocating, and for the serde
helpers in `fmt::serde` (behind the `serde` feature).

[RFC 3339]: https://datatracker.ietf.org/doc/html/rfc3339
*/

use alloc::{string::String, vec::Vec};

use crate::error::{Error, ErrorKind};

use self::util::{Decimal, DecimalFormatter, Fractional, FractionalFormatter};

pub mod rfc3339;
#[cfg(feature = "serde")]
pub mod serde;
mod util;

/// The result of parsing a value out of a slice of bytes.
///
/// This contains both the parsed value and the offset at which the value
/// ended in the input given. This makes it possible to parse, for example, a
/// datetime value as a prefix of some larger string without knowing ahead of
/// time where it ends.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Parsed<'i, V> {
    /// The value parsed.
    pub(crate) value: V,
    /// The remaining unparsed input.
    pub(crate) input: &'i [u8],
}

impl<'i, V> Parsed<'i, V> {
    /// Returns the parsed value, unless there is input left over.
    ///
    /// Trailing input of any kind means the text didn't have the shape of a
    /// datetime.
    #[inline]
    pub(crate) fn into_full(self) -> Result<V, Error> {
        if self.input.is_empty() {
            return Ok(self.value);
        }
        Err(Error::new(ErrorKind::InvalidFormat))
    }
}

/// A trait for printing datetimes in any format.
///
/// This is implemented for `String`, `Vec<u8>`, any `&mut W` where
/// `W: Write` and, via [`FmtWrite`], any [`core::fmt::Write`].
pub trait Write {
    /// Write the given string to this writer.
    fn write_str(&mut self, string: &str) -> core::fmt::Result;

    /// Write the given character to this writer.
    #[inline]
    fn write_char(&mut self, char: char) -> core::fmt::Result {
        self.write_str(char.encode_utf8(&mut [0; 4]))
    }
}

impl Write for String {
    #[inline]
    fn write_str(&mut self, string: &str) -> core::fmt::Result {
        self.push_str(string);
        Ok(())
    }
}

impl Write for Vec<u8> {
    #[inline]
    fn write_str(&mut self, string: &str) -> core::fmt::Result {
        self.extend_from_slice(string.as_bytes());
        Ok(())
    }
}

impl<W: Write> Write for &mut W {
    #[inline]
    fn write_str(&mut self, string: &str) -> core::fmt::Result {
        (**self).write_str(string)
    }

    #[inline]
    fn write_char(&mut self, char: char) -> core::fmt::Result {
        (**self).write_char(char)
    }
}

/// An adapter for using `core::fmt::Write` implementations with [`Write`].
///
/// This is what makes it possible to print straight into a
/// `core::fmt::Formatter`.
#[derive(Clone, Debug)]
pub struct FmtWrite<W>(pub W);

impl<W: core::fmt::Write> Write for FmtWrite<W> {
    #[inline]
    fn write_str(&mut self, string: &str) -> core::fmt::Result {
        self.0.write_str(string)
    }
}

trait WriteExt: Write {
    /// Write the given number as a decimal using ASCII digits to this buffer.
    /// The given formatter controls how the decimal is formatted.
    #[inline]
    fn write_int(
        &mut self,
        formatter: &DecimalFormatter,
        n: impl Into<i32>,
    ) -> core::fmt::Result {
        self.write_decimal(&Decimal::new(formatter, n.into()))
    }

    /// Write the given microsecond value as fractional digits.
    #[inline]
    fn write_fraction(
        &mut self,
        formatter: &FractionalFormatter,
        microsecond: u32,
    ) -> core::fmt::Result {
        self.write_fractional(&Fractional::new(formatter, microsecond))
    }

    /// Write the given decimal number to this buffer.
    #[inline]
    fn write_decimal(&mut self, decimal: &Decimal) -> core::fmt::Result {
        self.write_str(decimal.as_str())
    }

    /// Write the given fractional digits to this buffer.
    #[inline]
    fn write_fractional(
        &mut self,
        fractional: &Fractional,
    ) -> core::fmt::Result {
        self.write_str(fractional.as_str())
    }
}

impl<W: Write> WriteExt for W {}
