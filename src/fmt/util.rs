/// A simple formatter for converting `i32` values to ASCII byte strings.
///
/// This avoids going through the formatting machinery which seems to
/// substantially slow things down. A sign is only written for negative
/// values.
#[derive(Clone, Copy, Debug)]
pub(crate) struct DecimalFormatter {
    minimum_digits: u8,
}

impl DecimalFormatter {
    /// Creates a new decimal formatter using the default configuration.
    pub(crate) const fn new() -> DecimalFormatter {
        DecimalFormatter { minimum_digits: 0 }
    }

    /// Format the given value using this configuration as a decimal ASCII
    /// number.
    #[cfg(test)]
    pub(crate) const fn format(&self, value: i32) -> Decimal {
        Decimal::new(self, value)
    }

    /// The minimum number of digits that this number should be formatted
    /// with. If the number would have fewer digits than this, then it is
    /// padded out with zeros until the minimum is reached. Numbers with more
    /// digits are never truncated.
    ///
    /// The minimum number of digits is capped at the maximum number of digits
    /// for an i32 value (which is 10).
    pub(crate) const fn minimum_digits(
        self,
        mut digits: u8,
    ) -> DecimalFormatter {
        if digits > Decimal::MAX_I32_DIGITS {
            digits = Decimal::MAX_I32_DIGITS;
        }
        DecimalFormatter { minimum_digits: digits }
    }
}

/// A formatted decimal number that can be converted to a sequence of bytes.
#[derive(Debug)]
pub(crate) struct Decimal {
    buf: [u8; Self::MAX_I32_LEN as usize],
    start: u8,
}

impl Decimal {
    /// Discovered via `i32::MIN.to_string().len()`.
    const MAX_I32_LEN: u8 = 11;
    /// Discovered via `i32::MAX.to_string().len()`.
    const MAX_I32_DIGITS: u8 = 10;

    /// Using the given formatter, turn the value given into a decimal
    /// representation using ASCII bytes.
    pub(crate) const fn new(
        formatter: &DecimalFormatter,
        value: i32,
    ) -> Decimal {
        let negative = value < 0;
        let mut value = value.unsigned_abs();
        let mut decimal = Decimal {
            buf: [0; Self::MAX_I32_LEN as usize],
            start: Self::MAX_I32_LEN,
        };
        loop {
            decimal.start -= 1;

            let digit = (value % 10) as u8;
            value /= 10;
            decimal.buf[decimal.start as usize] = b'0' + digit;
            if value == 0 {
                break;
            }
        }
        while decimal.len() < formatter.minimum_digits {
            decimal.start -= 1;
            decimal.buf[decimal.start as usize] = b'0';
        }
        if negative {
            decimal.start -= 1;
            decimal.buf[decimal.start as usize] = b'-';
        }
        decimal
    }

    /// Returns the total number of ASCII bytes (including the sign) that are
    /// used to represent this decimal number.
    const fn len(&self) -> u8 {
        Self::MAX_I32_LEN - self.start
    }

    /// Returns the ASCII representation of this decimal as a byte slice.
    ///
    /// The slice returned is guaranteed to be valid ASCII.
    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.buf[usize::from(self.start)..]
    }

    /// Returns the ASCII representation of this decimal as a string slice.
    pub(crate) fn as_str(&self) -> &str {
        // SAFETY: This is safe because all bytes written to `self.buf` are
        // guaranteed to be ASCII (including in its initial state), and thus,
        // any subsequence is guaranteed to be valid UTF-8.
        unsafe { core::str::from_utf8_unchecked(self.as_bytes()) }
    }
}

/// A formatter for the fractional digits of a second.
///
/// The value is always a number of microseconds. It is rendered as exactly
/// six zero padded digits, of which only the first `precision` are kept. That
/// is, digits beyond the precision are truncated and never rounded.
#[derive(Clone, Copy, Debug)]
pub(crate) struct FractionalFormatter {
    precision: u8,
}

impl FractionalFormatter {
    /// Creates a new fractional formatter that prints all six digits.
    pub(crate) const fn new() -> FractionalFormatter {
        FractionalFormatter { precision: 6 }
    }

    /// The number of digits to keep, clamped to `1..=6`.
    pub(crate) const fn precision(
        self,
        precision: u8,
    ) -> FractionalFormatter {
        let precision = if precision == 0 {
            1
        } else if precision > 6 {
            6
        } else {
            precision
        };
        FractionalFormatter { precision }
    }

    /// Format the given microsecond value using this configuration.
    ///
    /// Values of a second or more are reduced modulo one second.
    #[cfg(test)]
    pub(crate) const fn format(&self, microsecond: u32) -> Fractional {
        Fractional::new(self, microsecond)
    }
}

/// The ASCII digits of a fractional second, without the leading `.`.
#[derive(Debug)]
pub(crate) struct Fractional {
    buf: [u8; 6],
    end: u8,
}

impl Fractional {
    pub(crate) const fn new(
        formatter: &FractionalFormatter,
        microsecond: u32,
    ) -> Fractional {
        let mut value = microsecond % 1_000_000;
        let mut buf = [b'0'; 6];
        let mut i = 6;
        while i > 0 {
            i -= 1;
            buf[i] = b'0' + (value % 10) as u8;
            value /= 10;
        }
        Fractional { buf, end: formatter.precision }
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.buf[..usize::from(self.end)]
    }

    pub(crate) fn as_str(&self) -> &str {
        // SAFETY: Every byte in `buf` is an ASCII digit.
        unsafe { core::str::from_utf8_unchecked(self.as_bytes()) }
    }
}
