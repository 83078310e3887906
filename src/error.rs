use alloc::{boxed::Box, string::String};

use portable_atomic_util::Arc;

use crate::unit::TimeUnit;

/// An error that can occur in this crate.
///
/// Every fallible operation returns this one error type. What went wrong
/// can be inspected with [`Error::kind`]:
///
/// * Text that doesn't have the shape of an RFC 3339 or ISO 8601 datetime
/// is an [`ErrorKind::InvalidFormat`].
/// * Text or fields that have the right shape but name a calendar value that
/// doesn't exist (like February 30) report the first offending field, in the
/// order month, day, hour, minute and second.
/// * An integer time that decodes to a year outside of `0000..=9999` is an
/// [`ErrorKind::InvalidUnixTime`].
/// * Arithmetic that would move a datetime beyond the limits of its `i32`
/// year is an [`ErrorKind::Range`].
///
/// When an error was caused by parsing, its `Display` impl includes the
/// input that failed to parse.
///
/// # Example
///
/// ```
/// use utc_datetime::{ErrorKind, UtcDateTime};
///
/// let err = UtcDateTime::from_rfc3339("2015-13-12T23:50:07").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::InvalidMonth);
/// assert_eq!(
///     err.to_string(),
///     "failed to parse \"2015-13-12T23:50:07\" as an RFC 3339 datetime: \
///      month is not in the required range of 1..=12",
/// );
/// ```
#[derive(Clone)]
pub struct Error {
    /// This is in an `Arc` so that cloning an error is cheap and so that the
    /// error is one word in size.
    inner: Arc<ErrorInner>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    context: Context,
}

/// Extra details about what caused an error.
#[derive(Debug)]
enum Context {
    None,
    Parse { format: &'static str, input: Box<str> },
    Integer { value: i128, unit: TimeUnit },
    Year { year: i64 },
    Epoch { name: Box<str> },
}

/// The reason an operation failed.
///
/// This is returned by [`Error::kind`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The input doesn't have the shape of a datetime in the expected
    /// format. The parser doesn't say which part of the shape was wrong.
    InvalidFormat,
    /// The month is not in `1..=12`.
    InvalidMonth,
    /// The day doesn't exist in the given year and month.
    InvalidDay,
    /// The hour is not in `0..=23`.
    InvalidHour,
    /// The minute is not in `0..=59`.
    InvalidMinute,
    /// The second is not in `0..=59`, or the subsecond value and precision
    /// don't describe a valid fraction of a second.
    InvalidSecond,
    /// An integer time decodes to a year outside of `0000..=9999`.
    InvalidUnixTime,
    /// A computed year doesn't fit in the year field.
    Range,
}

impl Error {
    /// Returns the reason this error occurred.
    pub fn kind(&self) -> ErrorKind {
        self.inner.kind
    }

    /// Returns the input that failed to parse, if this error was caused by
    /// parsing.
    ///
    /// Bytes that aren't valid UTF-8 are replaced with `U+FFFD`.
    pub fn input(&self) -> Option<&str> {
        match self.inner.context {
            Context::Parse { ref input, .. } => Some(input),
            _ => None,
        }
    }
}

impl Error {
    #[inline(never)]
    #[cold]
    pub(crate) fn new(kind: ErrorKind) -> Error {
        Error::with(kind, Context::None)
    }

    /// Attaches the input of a failed parse to this error.
    ///
    /// `format` is a human readable name for the grammar that was used,
    /// like `"RFC 3339"`.
    #[inline(never)]
    #[cold]
    pub(crate) fn parse(self, format: &'static str, input: &[u8]) -> Error {
        let input = String::from_utf8_lossy(input).into();
        Error::with(self.kind(), Context::Parse { format, input })
    }

    #[inline(never)]
    #[cold]
    pub(crate) fn unix_time(value: i128, unit: TimeUnit) -> Error {
        let context = Context::Integer { value, unit };
        Error::with(ErrorKind::InvalidUnixTime, context)
    }

    #[inline(never)]
    #[cold]
    pub(crate) fn year_range(year: i64) -> Error {
        Error::with(ErrorKind::Range, Context::Year { year })
    }

    #[inline(never)]
    #[cold]
    pub(crate) fn unknown_epoch(name: &str) -> Error {
        let context = Context::Epoch { name: name.into() };
        Error::with(ErrorKind::InvalidFormat, context)
    }

    fn with(kind: ErrorKind, context: Context) -> Error {
        Error { inner: Arc::new(ErrorInner { kind, context }) }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error::new(kind)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self.inner.context {
            Context::None => core::fmt::Display::fmt(&self.inner.kind, f),
            Context::Parse { format, ref input } => write!(
                f,
                "failed to parse {input:?} as an {format} datetime: {kind}",
                kind = self.inner.kind,
            ),
            Context::Integer { value, unit } => write!(
                f,
                "integer time {value} in units of {unit} is outside \
                 the supported range of years 0000..=9999",
            ),
            Context::Year { year } => write!(
                f,
                "computed year {year} is not in the required range \
                 of {min}..={max}",
                min = i32::MIN,
                max = i32::MAX,
            ),
            Context::Epoch { ref name } => {
                write!(f, "unknown epoch name {name:?}")
            }
        }
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error")
                .field("kind", &self.inner.kind)
                .field("context", &self.inner.context)
                .finish()
        }
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        f.write_str(match *self {
            InvalidFormat => "input does not match the expected format",
            InvalidMonth => "month is not in the required range of 1..=12",
            InvalidDay => "day does not exist in the given year and month",
            InvalidHour => "hour is not in the required range of 0..=23",
            InvalidMinute => "minute is not in the required range of 0..=59",
            InvalidSecond => {
                "second or fractional second is not in the required range"
            }
            InvalidUnixTime => {
                "integer time is outside the supported range of years"
            }
            Range => "year is outside the supported range",
        })
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn error_size() {
        assert_eq!(
            core::mem::size_of::<usize>(),
            core::mem::size_of::<Error>()
        );
    }

    #[test]
    fn display() {
        let err = Error::new(ErrorKind::InvalidHour);
        insta::assert_snapshot!(err, @"hour is not in the required range of 0..=23");

        let err = Error::new(ErrorKind::InvalidDay)
            .parse("ISO 8601", b"2015-02-29 00:00:00");
        insta::assert_snapshot!(
            err,
            @r###"failed to parse "2015-02-29 00:00:00" as an ISO 8601 datetime: day does not exist in the given year and month"###,
        );
        assert_eq!(err.input(), Some("2015-02-29 00:00:00"));

        let err = Error::unix_time(-62167219201, TimeUnit::Second);
        insta::assert_snapshot!(
            err,
            @"integer time -62167219201 in units of seconds is outside the supported range of years 0000..=9999",
        );
        assert_eq!(err.kind(), ErrorKind::InvalidUnixTime);
        assert_eq!(err.input(), None);
    }

    #[test]
    fn lossy_input() {
        let err = Error::new(ErrorKind::InvalidFormat).parse("RFC 3339", b"\xFFZ");
        assert_eq!(err.input(), Some("\u{FFFD}Z"));
        assert!(err.to_string().starts_with("failed to parse \"\u{FFFD}Z\""));
    }
}
