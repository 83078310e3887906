use alloc::string::String;
use core::cmp::Ordering;

use crate::{
    calendar::{Calendar, Iso, NaiveDateTime, OffsetDateTime},
    epoch::Epoch,
    error::{Error, ErrorKind},
    fmt::rfc3339::{DateTimeParser, DateTimePrinter},
    iso::{
        Fields, IsoDays, MAX_DECODE_DAYS, MIN_DECODE_DAYS, UNIX_EPOCH_DAYS,
    },
    unit::{TimeUnit, TruncateUnit},
    util::common::days_in_month,
};

static RFC3339_PARSER: DateTimeParser = DateTimeParser::new();
static ISO8601_PARSER: DateTimeParser = DateTimeParser::new().iso8601(true);
static PRINTER: DateTimePrinter = DateTimePrinter::new();

/// A datetime in UTC, in the proleptic Gregorian calendar, with microsecond
/// resolution.
///
/// A `UtcDateTime` is a year, month, day, hour, minute, second and
/// [`Subsecond`]. The subsecond is a number of microseconds along with a
/// precision: the number of fractional digits the value was recorded with
/// and is printed with. There is no time zone and there are no leap seconds.
///
/// A `UtcDateTime` is guaranteed to hold a valid datetime. Every constructor
/// checks its fields, and every operation returns a new value.
///
/// # Comparisons
///
/// Comparisons (and equality and hashing) only look at the stored fields.
/// The precision of the subsecond is ignored:
///
/// ```
/// use utc_datetime::{Subsecond, UtcDateTime};
///
/// let dt = UtcDateTime::constant(2015, 1, 23, 23, 50, 7);
/// let dt1 = dt.with_subsecond(Subsecond::constant(100_000, 1));
/// let dt2 = dt.with_subsecond(Subsecond::constant(100_000, 6));
/// let dt3 = dt.with_subsecond(Subsecond::constant(120_000, 6));
/// assert_eq!(dt1, dt2);
/// assert!(dt1 < dt3);
/// assert_eq!(dt1.to_string(), "2015-01-23T23:50:07.1Z");
/// assert_eq!(dt2.to_string(), "2015-01-23T23:50:07.100000Z");
/// ```
///
/// # Arithmetic
///
/// All arithmetic goes through [`IsoDays`], a day count paired with the
/// elapsed fraction of the day. Amounts of time are added with
/// [`UtcDateTime::add`] (or [`UtcDateTime::checked_add`]) in any
/// [`TimeUnit`], and the exact difference between two datetimes is found
/// with [`UtcDateTime::diff`]:
///
/// ```
/// use utc_datetime::{TimeUnit, UtcDateTime};
///
/// let dt = UtcDateTime::constant(2024, 2, 28, 12, 0, 0);
/// let later = dt.add(36 * 60 * 60, TimeUnit::Second);
/// assert_eq!(later.to_string(), "2024-03-01T00:00:00Z");
/// assert_eq!(later.diff(dt, TimeUnit::Second), 36 * 60 * 60);
/// ```
///
/// # Default value
///
/// The default value is the Unix epoch, `1970-01-01T00:00:00Z`.
#[derive(Clone, Copy)]
pub struct UtcDateTime {
    year: i32,
    month: i8,
    day: i8,
    hour: i8,
    minute: i8,
    second: i8,
    subsecond: Subsecond,
}

impl UtcDateTime {
    /// The Unix epoch, `1970-01-01T00:00:00Z`.
    pub const UNIX_EPOCH: UtcDateTime =
        UtcDateTime::constant(1970, 1, 1, 0, 0, 0);

    /// Creates a new datetime from its fields with a subsecond of zero.
    ///
    /// To set the subsecond, use [`UtcDateTime::with_subsecond`].
    ///
    /// # Errors
    ///
    /// The fields are checked in the order month, day, hour, minute and
    /// second, and an error for the first invalid one is returned:
    ///
    /// * The month must be in `1..=12`.
    /// * The day must be at least `1` and at most the number of days in the
    /// given month. So `2024-02-29` is valid but `2023-02-29` is not.
    /// * The hour must be in `0..=23`.
    /// * The minute must be in `0..=59`.
    /// * The second must be in `0..=59`.
    ///
    /// # Example
    ///
    /// ```
    /// use utc_datetime::{ErrorKind, UtcDateTime};
    ///
    /// let dt = UtcDateTime::new(2024, 2, 29, 21, 30, 5)?;
    /// assert_eq!(dt.to_string(), "2024-02-29T21:30:05Z");
    ///
    /// let err = UtcDateTime::new(2023, 2, 29, 24, 30, 5).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::InvalidDay);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn new(
        year: i32,
        month: i8,
        day: i8,
        hour: i8,
        minute: i8,
        second: i8,
    ) -> Result<UtcDateTime, Error> {
        if let Some(kind) =
            invalid_field(year as i64, month, day, hour, minute, second)
        {
            return Err(Error::new(kind));
        }
        Ok(UtcDateTime::new_unchecked(year, month, day, hour, minute, second))
    }

    /// Creates a new datetime in a `const` context.
    ///
    /// # Panics
    ///
    /// This panics when [`UtcDateTime::new`] would return an error. When
    /// called in a `const` context, that panic is a compile error.
    ///
    /// # Example
    ///
    /// ```
    /// use utc_datetime::UtcDateTime;
    ///
    /// const Y2K: UtcDateTime = UtcDateTime::constant(2000, 1, 1, 0, 0, 0);
    /// assert_eq!(Y2K.year(), 2000);
    /// ```
    #[inline]
    pub const fn constant(
        year: i32,
        month: i8,
        day: i8,
        hour: i8,
        minute: i8,
        second: i8,
    ) -> UtcDateTime {
        match invalid_field(year as i64, month, day, hour, minute, second) {
            None => {}
            Some(ErrorKind::InvalidMonth) => panic!("invalid month"),
            Some(ErrorKind::InvalidDay) => panic!("invalid day"),
            Some(ErrorKind::InvalidHour) => panic!("invalid hour"),
            Some(ErrorKind::InvalidMinute) => panic!("invalid minute"),
            Some(_) => panic!("invalid second"),
        }
        UtcDateTime::new_unchecked(year, month, day, hour, minute, second)
    }

    /// Returns this datetime with its subsecond replaced.
    ///
    /// # Example
    ///
    /// ```
    /// use utc_datetime::{Subsecond, UtcDateTime};
    ///
    /// let dt = UtcDateTime::constant(2024, 6, 15, 7, 0, 0)
    ///     .with_subsecond(Subsecond::new(5_000, 3)?);
    /// assert_eq!(dt.to_string(), "2024-06-15T07:00:00.005Z");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub const fn with_subsecond(self, subsecond: Subsecond) -> UtcDateTime {
        UtcDateTime { subsecond, ..self }
    }

    /// Returns the year. It may be zero or negative.
    #[inline]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Returns the month, in `1..=12`.
    #[inline]
    pub const fn month(self) -> i8 {
        self.month
    }

    /// Returns the day of the month, starting at `1`.
    #[inline]
    pub const fn day(self) -> i8 {
        self.day
    }

    /// Returns the hour, in `0..=23`.
    #[inline]
    pub const fn hour(self) -> i8 {
        self.hour
    }

    /// Returns the minute, in `0..=59`.
    #[inline]
    pub const fn minute(self) -> i8 {
        self.minute
    }

    /// Returns the second, in `0..=59`.
    #[inline]
    pub const fn second(self) -> i8 {
        self.second
    }

    /// Returns the fractional second along with its precision.
    #[inline]
    pub const fn subsecond(self) -> Subsecond {
        self.subsecond
    }

    /// Returns the fractional second in microseconds, in `0..=999_999`.
    #[inline]
    pub const fn microsecond(self) -> u32 {
        self.subsecond.value
    }

    /// Returns the current datetime with a precision of six digits.
    ///
    /// # Panics
    ///
    /// This panics if the system clock is set to a time before year `0000`
    /// or after year `9999`. It is reasonable to expect the system clock to
    /// be set to a somewhat sane, if imprecise, value.
    ///
    /// # Example
    ///
    /// ```
    /// use utc_datetime::UtcDateTime;
    ///
    /// let now = UtcDateTime::now();
    /// assert!(now.year() >= 2024);
    /// assert_eq!(now.subsecond().precision(), 6);
    /// ```
    #[cfg(feature = "std")]
    pub fn now() -> UtcDateTime {
        let now = std::time::SystemTime::now();
        trace!("reading current datetime from system clock: {now:?}");
        UtcDateTime::try_from(now)
            .expect("system clock reports a time in years 0000..=9999")
    }

    /// Creates a datetime from an integer number of `unit`s since the Unix
    /// epoch.
    ///
    /// Negative values are before the Unix epoch. Parts of a microsecond are
    /// truncated toward negative infinity. The precision of the result
    /// depends on the unit: `0` for seconds, `3` for milliseconds and `6`
    /// for microseconds and nanoseconds. For any other number of parts per
    /// second, the precision is the number of digits when that number is a
    /// power of ten less than a million and `6` otherwise.
    ///
    /// # Errors
    ///
    /// This returns an [`ErrorKind::InvalidUnixTime`] error when the result
    /// would not be in the years `0000..=9999`.
    ///
    /// # Example
    ///
    /// ```
    /// use utc_datetime::{ErrorKind, TimeUnit, UtcDateTime};
    ///
    /// let dt = UtcDateTime::from_unix(1_464_096_368, TimeUnit::Second)?;
    /// assert_eq!(dt.to_string(), "2016-05-24T13:26:08Z");
    ///
    /// let ms = 1_432_560_368_868;
    /// let dt = UtcDateTime::from_unix(ms, TimeUnit::Millisecond)?;
    /// assert_eq!(dt.to_string(), "2015-05-25T13:26:08.868Z");
    ///
    /// let dt = UtcDateTime::from_unix(-62_167_219_200, TimeUnit::Second)?;
    /// assert_eq!(dt.to_string(), "0000-01-01T00:00:00Z");
    ///
    /// let err = UtcDateTime::from_unix(-62_167_219_201, TimeUnit::Second)
    ///     .unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::InvalidUnixTime);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_unix(
        value: i128,
        unit: TimeUnit,
    ) -> Result<UtcDateTime, Error> {
        UtcDateTime::from_integer(value, unit, UNIX_EPOCH_DAYS)
    }

    /// Like [`UtcDateTime::from_unix`], but panics on invalid input.
    ///
    /// # Panics
    ///
    /// When [`UtcDateTime::from_unix`] returns an error. The panic message
    /// includes the value and the reason it was rejected.
    #[track_caller]
    pub fn from_unix_or_panic(value: i128, unit: TimeUnit) -> UtcDateTime {
        match UtcDateTime::from_unix(value, unit) {
            Ok(dt) => dt,
            Err(err) => panic!("cannot convert unix time {value}: {err}"),
        }
    }

    /// Returns the number of whole `unit`s since the Unix epoch.
    ///
    /// The result is negative for datetimes before the Unix epoch, and is
    /// truncated toward negative infinity.
    ///
    /// # Example
    ///
    /// ```
    /// use utc_datetime::{TimeUnit, UtcDateTime};
    ///
    /// let dt: UtcDateTime = "1969-12-31T23:59:59.5Z".parse()?;
    /// assert_eq!(dt.to_unix(TimeUnit::Second), -1);
    /// assert_eq!(dt.to_unix(TimeUnit::Millisecond), -500);
    /// assert_eq!(dt.to_unix(TimeUnit::Nanosecond), -500_000_000);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn to_unix(self, unit: TimeUnit) -> i128 {
        self.to_integer(unit, UNIX_EPOCH_DAYS)
    }

    /// Creates a datetime from an integer number of `unit`s since the NTFS
    /// epoch, `1601-01-01T00:00:00Z`.
    ///
    /// This follows the same rules as [`UtcDateTime::from_unix`], including
    /// the range of years that can be decoded.
    #[inline]
    pub fn from_ntfs(
        value: i128,
        unit: TimeUnit,
    ) -> Result<UtcDateTime, Error> {
        UtcDateTime::from_epoch(value, Epoch::Ntfs, unit)
    }

    /// Returns the number of whole `unit`s since the NTFS epoch,
    /// `1601-01-01T00:00:00Z`.
    ///
    /// NTFS file times are counted in units of 100 nanoseconds, which is
    /// `TimeUnit::PartsPerSecond(10_000_000)`.
    ///
    /// # Example
    ///
    /// ```
    /// use utc_datetime::{TimeUnit, UtcDateTime};
    ///
    /// let dt = UtcDateTime::UNIX_EPOCH;
    /// assert_eq!(dt.to_ntfs(TimeUnit::Second), 11_644_473_600);
    /// let dt = UtcDateTime::constant(1600, 12, 31, 23, 59, 59);
    /// assert_eq!(dt.to_ntfs(TimeUnit::Second), -1);
    /// ```
    #[inline]
    pub fn to_ntfs(self, unit: TimeUnit) -> i128 {
        self.to_epoch(Epoch::Ntfs, unit)
    }

    /// Creates a datetime from an integer number of `unit`s since the given
    /// epoch.
    ///
    /// This follows the same rules as [`UtcDateTime::from_unix`], including
    /// the range of years that can be decoded.
    ///
    /// # Example
    ///
    /// ```
    /// use utc_datetime::{Epoch, TimeUnit, UtcDateTime};
    ///
    /// let dt = UtcDateTime::from_epoch(86_400, Epoch::Gps, TimeUnit::Second);
    /// let dt = dt?;
    /// assert_eq!(dt.to_string(), "1980-01-07T00:00:00Z");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn from_epoch(
        value: i128,
        epoch: Epoch,
        unit: TimeUnit,
    ) -> Result<UtcDateTime, Error> {
        UtcDateTime::from_integer(value, unit, epoch.days())
    }

    /// Returns the number of whole `unit`s since the given epoch.
    ///
    /// # Example
    ///
    /// ```
    /// use utc_datetime::{Epoch, TimeUnit, UtcDateTime};
    ///
    /// let dt = UtcDateTime::constant(2001, 1, 1, 0, 1, 0);
    /// assert_eq!(dt.to_epoch(Epoch::Apple, TimeUnit::Second), 60);
    /// assert_eq!(dt.to_epoch(Epoch::Unix, TimeUnit::Second), 978_307_260);
    /// ```
    #[inline]
    pub fn to_epoch(self, epoch: Epoch, unit: TimeUnit) -> i128 {
        self.to_integer(unit, epoch.days())
    }

    /// Adds the given amount of time to this datetime. The amount may be
    /// negative.
    ///
    /// The precision of the subsecond is kept, even when the amount added
    /// has a finer resolution.
    ///
    /// # Panics
    ///
    /// When the year of the result doesn't fit in an `i32`. Use
    /// [`UtcDateTime::checked_add`] to handle this case.
    ///
    /// # Example
    ///
    /// ```
    /// use utc_datetime::{Subsecond, TimeUnit, UtcDateTime};
    ///
    /// let dt = UtcDateTime::constant(2014, 10, 2, 0, 29, 10)
    ///     .with_subsecond(Subsecond::constant(0, 0));
    /// let dt = dt.add(21, TimeUnit::Second);
    /// assert_eq!(dt.to_string(), "2014-10-02T00:29:31Z");
    ///
    /// let dt = dt.add(-1_500, TimeUnit::Millisecond);
    /// assert_eq!(dt.microsecond(), 500_000);
    /// assert_eq!(dt.to_string(), "2014-10-02T00:29:29Z");
    /// ```
    #[track_caller]
    #[inline]
    pub fn add(self, amount: i64, unit: TimeUnit) -> UtcDateTime {
        match self.checked_add(amount, unit) {
            Ok(dt) => dt,
            Err(err) => {
                panic!("adding {amount} {unit} to {self} failed: {err}")
            }
        }
    }

    /// Adds the given amount of time to this datetime, returning an error
    /// when the year of the result doesn't fit in an `i32`.
    ///
    /// # Example
    ///
    /// ```
    /// use utc_datetime::{ErrorKind, TimeUnit, UtcDateTime};
    ///
    /// let dt = UtcDateTime::constant(i32::MAX, 12, 31, 23, 59, 59);
    /// let err = dt.checked_add(1, TimeUnit::Second).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Range);
    /// assert!(dt.checked_add(-1, TimeUnit::Second).is_ok());
    /// ```
    #[inline]
    pub fn checked_add(
        self,
        amount: i64,
        unit: TimeUnit,
    ) -> Result<UtcDateTime, Error> {
        let iso = self.to_iso_days().add_fraction(amount, unit);
        UtcDateTime::from_iso_days(iso, self.subsecond.precision)
    }

    /// Returns the exact number of whole `unit`s from `other` to `self`.
    ///
    /// Both datetimes are converted to a count of `unit`s since a fixed day,
    /// and the counts are subtracted. The result is negative when `self` is
    /// before `other`.
    ///
    /// # Example
    ///
    /// ```
    /// use utc_datetime::{TimeUnit, UtcDateTime};
    ///
    /// let a = UtcDateTime::constant(2014, 10, 2, 0, 29, 10);
    /// let b = UtcDateTime::constant(2014, 10, 2, 0, 29, 5);
    /// assert_eq!(a.diff(b, TimeUnit::Second), 5);
    /// assert_eq!(b.diff(a, TimeUnit::Millisecond), -5_000);
    ///
    /// let a = UtcDateTime::constant(-9999, 1, 1, 0, 0, 0);
    /// let b = UtcDateTime::constant(9999, 12, 31, 23, 59, 59);
    /// let nanos = b.diff(a, TimeUnit::Nanosecond);
    /// assert_eq!(nanos, 631_139_039_999_000_000_000);
    /// ```
    #[inline]
    pub fn diff(self, other: UtcDateTime, unit: TimeUnit) -> i128 {
        self.to_iso_days().to_unit(unit) - other.to_iso_days().to_unit(unit)
    }

    /// Truncates the fractional second of this datetime to the given unit.
    ///
    /// * Truncating to seconds sets the subsecond to zero with a precision
    /// of zero.
    /// * Truncating to milliseconds rounds the microseconds down to a
    /// multiple of `1000` and caps the precision at `3`.
    /// * Truncating to microseconds returns the datetime unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use utc_datetime::{TruncateUnit, UtcDateTime};
    ///
    /// let dt: UtcDateTime = "2017-11-06T00:23:51.123456Z".parse()?;
    /// assert_eq!(
    ///     dt.truncate(TruncateUnit::Millisecond).to_string(),
    ///     "2017-11-06T00:23:51.123Z",
    /// );
    /// assert_eq!(
    ///     dt.truncate(TruncateUnit::Second).to_string(),
    ///     "2017-11-06T00:23:51Z",
    /// );
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn truncate(self, unit: TruncateUnit) -> UtcDateTime {
        let Subsecond { value, precision } = self.subsecond;
        let subsecond = match unit {
            TruncateUnit::Second => Subsecond::ZERO,
            TruncateUnit::Millisecond => Subsecond {
                value: value - value % 1_000,
                precision: if precision > 3 { 3 } else { precision },
            },
            TruncateUnit::Microsecond => return self,
        };
        self.with_subsecond(subsecond)
    }

    /// Formats this datetime as RFC 3339.
    ///
    /// The result always has the shape `YYYY-MM-DDThh:mm:ss[.ffffff]Z`. The
    /// fractional second has exactly as many digits as the precision of the
    /// subsecond and is left out when the precision is zero. Digits are
    /// truncated, never rounded. Years outside of `0000..=9999` are printed
    /// at their natural width, with a leading `-` when negative.
    ///
    /// This is also what the `Display` impl prints.
    ///
    /// # Example
    ///
    /// ```
    /// use utc_datetime::{Subsecond, UtcDateTime};
    ///
    /// let dt = UtcDateTime::constant(2000, 2, 29, 23, 0, 7)
    ///     .with_subsecond(Subsecond::constant(123_456, 2));
    /// assert_eq!(dt.to_rfc3339(), "2000-02-29T23:00:07.12Z");
    /// ```
    #[inline]
    pub fn to_rfc3339(&self) -> String {
        PRINTER.to_string(self)
    }

    /// Formats this datetime as ISO 8601.
    ///
    /// The extended ISO 8601 format is a superset of RFC 3339, so this
    /// returns exactly what [`UtcDateTime::to_rfc3339`] does.
    #[inline]
    pub fn to_iso8601(&self) -> String {
        PRINTER.to_string(self)
    }

    /// Parses an RFC 3339 datetime.
    ///
    /// See the [`fmt::rfc3339`](crate::fmt::rfc3339) module for exactly what
    /// is accepted. Any UTC offset in the input is subtracted, so that the
    /// result is in UTC.
    ///
    /// # Errors
    ///
    /// An [`ErrorKind::InvalidFormat`] error is returned when the input
    /// doesn't have the shape of a datetime. Otherwise, the first of the
    /// month, day, hour, minute or second that is out of range is reported.
    ///
    /// # Example
    ///
    /// ```
    /// use utc_datetime::{ErrorKind, UtcDateTime};
    ///
    /// let dt = UtcDateTime::from_rfc3339("2015-01-23T23:50:07.123-02:30")?;
    /// assert_eq!(dt.to_string(), "2015-01-24T02:20:07.123Z");
    ///
    /// let err = UtcDateTime::from_rfc3339("2015-02-29T23:50:07");
    /// let err = err.unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::InvalidDay);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn from_rfc3339<I: AsRef<[u8]>>(
        input: I,
    ) -> Result<UtcDateTime, Error> {
        RFC3339_PARSER.parse(input)
    }

    /// Parses an ISO 8601 datetime.
    ///
    /// This accepts everything [`UtcDateTime::from_rfc3339`] does, and also
    /// a space between the date and the time and years with a leading `-`
    /// or more than four digits. Everything printed by
    /// [`UtcDateTime::to_iso8601`] can be parsed by this.
    ///
    /// This is also what the `FromStr` impl uses.
    ///
    /// # Example
    ///
    /// ```
    /// use utc_datetime::UtcDateTime;
    ///
    /// let dt = UtcDateTime::from_iso8601("2015-01-23 23:50:07,0123456")?;
    /// assert_eq!(dt.microsecond(), 12_345);
    /// assert_eq!(dt.subsecond().precision(), 6);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn from_iso8601<I: AsRef<[u8]>>(
        input: I,
    ) -> Result<UtcDateTime, Error> {
        ISO8601_PARSER.parse(input)
    }

    /// Like [`UtcDateTime::from_rfc3339`], but panics on invalid input.
    ///
    /// # Panics
    ///
    /// When [`UtcDateTime::from_rfc3339`] returns an error. The panic
    /// message includes the input and the reason it was rejected.
    ///
    /// # Example
    ///
    /// ```should_panic
    /// use utc_datetime::UtcDateTime;
    ///
    /// UtcDateTime::from_rfc3339_or_panic("2015-01-23P23:50:07");
    /// ```
    #[track_caller]
    pub fn from_rfc3339_or_panic<I: AsRef<[u8]>>(input: I) -> UtcDateTime {
        match UtcDateTime::from_rfc3339(input) {
            Ok(dt) => dt,
            Err(err) => panic!("{err}"),
        }
    }

    /// Like [`UtcDateTime::from_iso8601`], but panics on invalid input.
    ///
    /// # Panics
    ///
    /// When [`UtcDateTime::from_iso8601`] returns an error. The panic
    /// message includes the input and the reason it was rejected.
    #[track_caller]
    pub fn from_iso8601_or_panic<I: AsRef<[u8]>>(input: I) -> UtcDateTime {
        match UtcDateTime::from_iso8601(input) {
            Ok(dt) => dt,
            Err(err) => panic!("{err}"),
        }
    }

    /// Creates a datetime from a naive datetime in any calendar.
    ///
    /// The fields are converted to a day count by the calendar, which also
    /// validates them. The subsecond precision is kept.
    ///
    /// # Errors
    ///
    /// This returns whatever error the calendar reports for invalid fields,
    /// or an [`ErrorKind::Range`] error when the Gregorian year doesn't fit
    /// in an `i32`.
    pub fn from_naive<C: Calendar>(
        naive: &NaiveDateTime<C>,
    ) -> Result<UtcDateTime, Error> {
        let iso = naive.calendar.to_iso_days(&naive.fields())?;
        UtcDateTime::from_iso_days(iso, naive.subsecond.precision)
    }

    /// Converts this datetime to a naive datetime in the ISO calendar.
    ///
    /// # Example
    ///
    /// ```
    /// use utc_datetime::UtcDateTime;
    ///
    /// let naive = UtcDateTime::constant(2024, 6, 15, 7, 0, 0).to_naive();
    /// assert_eq!((naive.year, naive.month, naive.day), (2024, 6, 15));
    /// ```
    #[inline]
    pub fn to_naive(&self) -> NaiveDateTime {
        self.to_naive_with(Iso)
    }

    /// Converts this datetime to a naive datetime in the given calendar.
    pub fn to_naive_with<C: Calendar>(&self, calendar: C) -> NaiveDateTime<C> {
        let fields = calendar.from_iso_days(self.to_iso_days());
        NaiveDateTime {
            year: fields.year,
            month: fields.month,
            day: fields.day,
            hour: fields.hour,
            minute: fields.minute,
            second: fields.second,
            subsecond: Subsecond {
                value: fields.microsecond,
                precision: self.subsecond.precision,
            },
            calendar,
        }
    }

    /// Creates a datetime from a datetime with a UTC offset in any calendar.
    ///
    /// When `utc_offset + std_offset` is zero, the fields are used as is.
    /// Otherwise, the offset is subtracted from the fields to get UTC. The
    /// subsecond precision is kept.
    ///
    /// # Errors
    ///
    /// This returns whatever error the calendar reports for invalid fields,
    /// or an [`ErrorKind::Range`] error when the Gregorian year doesn't fit
    /// in an `i32`.
    ///
    /// # Example
    ///
    /// ```
    /// use utc_datetime::{
    ///     calendar::{Iso, OffsetDateTime},
    ///     Subsecond, UtcDateTime,
    /// };
    ///
    /// let local = OffsetDateTime {
    ///     calendar: Iso,
    ///     year: 2000,
    ///     month: 2,
    ///     day: 29,
    ///     hour: 0,
    ///     minute: 7,
    ///     second: 7,
    ///     subsecond: Subsecond::constant(7, 6),
    ///     utc_offset: 3_600,
    ///     std_offset: 0,
    ///     zone_abbr: "CET".to_string(),
    ///     time_zone: "Europe/Warsaw".to_string(),
    /// };
    /// let dt = UtcDateTime::from_offset_aware(&local)?;
    /// assert_eq!(dt.to_string(), "2000-02-28T23:07:07.000007Z");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_offset_aware<C: Calendar>(
        dt: &OffsetDateTime<C>,
    ) -> Result<UtcDateTime, Error> {
        let mut iso = dt.calendar.to_iso_days(&dt.fields())?;
        let offset = dt.total_offset();
        if offset != 0 {
            iso = iso.add_fraction(-offset, TimeUnit::Second);
        }
        UtcDateTime::from_iso_days(iso, dt.subsecond.precision)
    }

    /// Converts this datetime to a datetime with a UTC offset of zero in the
    /// ISO calendar.
    ///
    /// The zone is named `UTC` (`Etc/UTC`).
    #[inline]
    pub fn to_offset_aware(&self) -> OffsetDateTime {
        self.to_offset_aware_with(Iso)
    }

    /// Converts this datetime to a datetime with a UTC offset of zero in the
    /// given calendar.
    pub fn to_offset_aware_with<C: Calendar>(
        &self,
        calendar: C,
    ) -> OffsetDateTime<C> {
        let naive = self.to_naive_with(calendar);
        OffsetDateTime {
            calendar: naive.calendar,
            year: naive.year,
            month: naive.month,
            day: naive.day,
            hour: naive.hour,
            minute: naive.minute,
            second: naive.second,
            subsecond: naive.subsecond,
            utc_offset: 0,
            std_offset: 0,
            zone_abbr: String::from("UTC"),
            time_zone: String::from("Etc/UTC"),
        }
    }

    /// Returns this datetime as a day count since `0000-01-01` and the
    /// elapsed fraction of the day, in microseconds.
    ///
    /// # Example
    ///
    /// ```
    /// use utc_datetime::UtcDateTime;
    ///
    /// let iso = UtcDateTime::constant(1970, 1, 1, 6, 0, 0).to_iso_days();
    /// assert_eq!(iso.days, 719_528);
    /// assert_eq!(iso.fraction.parts() * 4, iso.fraction.per_day());
    /// ```
    #[inline]
    pub fn to_iso_days(&self) -> IsoDays {
        IsoDays::from_fields(&self.fields())
    }
}

impl UtcDateTime {
    #[inline]
    const fn new_unchecked(
        year: i32,
        month: i8,
        day: i8,
        hour: i8,
        minute: i8,
        second: i8,
    ) -> UtcDateTime {
        UtcDateTime {
            year,
            month,
            day,
            hour,
            minute,
            second,
            subsecond: Subsecond::ZERO,
        }
    }

    /// Creates a datetime from fields that are known to be valid.
    ///
    /// Only the year is checked, since it's the only field that can be out
    /// of range after arithmetic.
    pub(crate) fn from_fields(
        fields: &Fields,
        precision: u8,
    ) -> Result<UtcDateTime, Error> {
        let year = i32::try_from(fields.year)
            .map_err(|_| Error::year_range(fields.year))?;
        let dt = UtcDateTime::new_unchecked(
            year,
            fields.month,
            fields.day,
            fields.hour,
            fields.minute,
            fields.second,
        );
        let subsecond =
            Subsecond::new_unchecked(fields.microsecond, precision);
        Ok(dt.with_subsecond(subsecond))
    }

    /// Creates a datetime from a day count, truncating to microseconds.
    pub(crate) fn from_iso_days(
        iso: IsoDays,
        precision: u8,
    ) -> Result<UtcDateTime, Error> {
        UtcDateTime::from_fields(&iso.to_fields(), precision)
    }

    fn fields(&self) -> Fields {
        Fields {
            year: i64::from(self.year),
            month: self.month,
            day: self.day,
            hour: self.hour,
            minute: self.minute,
            second: self.second,
            microsecond: self.subsecond.value,
        }
    }

    fn from_integer(
        value: i128,
        unit: TimeUnit,
        epoch_days: i64,
    ) -> Result<UtcDateTime, Error> {
        let decodable = MIN_DECODE_DAYS..MAX_DECODE_DAYS;
        let iso = IsoDays::from_unit(value, unit, epoch_days)
            .filter(|iso| decodable.contains(&iso.days));
        let Some(iso) = iso else {
            debug!(
                "rejecting integer time {value} in units of {unit} \
                 since it is outside of years 0000..=9999",
            );
            return Err(Error::unix_time(value, unit));
        };
        UtcDateTime::from_iso_days(iso, unit.precision())
    }

    fn to_integer(self, unit: TimeUnit, epoch_days: i64) -> i128 {
        self.to_iso_days().to_unit(unit)
            - i128::from(epoch_days) * unit.per_day()
    }

    /// The fields compared by `Eq`, `Ord` and `Hash`.
    fn key(&self) -> (i32, i8, i8, i8, i8, i8, u32) {
        (
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
            self.subsecond.value,
        )
    }
}

impl Default for UtcDateTime {
    fn default() -> UtcDateTime {
        UtcDateTime::UNIX_EPOCH
    }
}

impl Eq for UtcDateTime {}

impl PartialEq for UtcDateTime {
    #[inline]
    fn eq(&self, other: &UtcDateTime) -> bool {
        self.key() == other.key()
    }
}

impl Ord for UtcDateTime {
    #[inline]
    fn cmp(&self, other: &UtcDateTime) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl PartialOrd for UtcDateTime {
    #[inline]
    fn partial_cmp(&self, other: &UtcDateTime) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl core::hash::Hash for UtcDateTime {
    #[inline]
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl core::fmt::Display for UtcDateTime {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use crate::fmt::FmtWrite;

        PRINTER.print(self, FmtWrite(f))
    }
}

impl core::fmt::Debug for UtcDateTime {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self, f)
    }
}

impl core::str::FromStr for UtcDateTime {
    type Err = Error;

    fn from_str(string: &str) -> Result<UtcDateTime, Error> {
        UtcDateTime::from_iso8601(string)
    }
}

#[cfg(feature = "std")]
impl TryFrom<std::time::SystemTime> for UtcDateTime {
    type Error = Error;

    fn try_from(
        system_time: std::time::SystemTime,
    ) -> Result<UtcDateTime, Error> {
        let unix_epoch = std::time::SystemTime::UNIX_EPOCH;
        let (duration, sign) = match system_time.duration_since(unix_epoch) {
            Ok(duration) => (duration, 1),
            Err(err) => (err.duration(), -1),
        };
        let nanos = i128::try_from(duration.as_nanos())
            .map_err(|_| Error::unix_time(i128::MAX, TimeUnit::Nanosecond))?;
        UtcDateTime::from_unix(sign * nanos, TimeUnit::Nanosecond)
    }
}

#[cfg(feature = "std")]
impl From<UtcDateTime> for std::time::SystemTime {
    fn from(dt: UtcDateTime) -> std::time::SystemTime {
        let unix_epoch = std::time::SystemTime::UNIX_EPOCH;
        let micros = dt.to_unix(TimeUnit::Microsecond);
        let duration = |micros: u128| {
            let secs = u64::try_from(micros / 1_000_000)
                .expect("seconds of an i32 year fit in a u64");
            // The remainder is less than a million.
            let micros = (micros % 1_000_000) as u32;
            std::time::Duration::new(secs, micros * 1_000)
        };
        if micros >= 0 {
            unix_epoch
                .checked_add(duration(micros.unsigned_abs()))
                .expect("duration too big (positive)")
        } else {
            unix_epoch
                .checked_sub(duration(micros.unsigned_abs()))
                .expect("duration too big (negative)")
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for UtcDateTime {
    #[inline]
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for UtcDateTime {
    #[inline]
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<UtcDateTime, D::Error> {
        use serde::de;

        struct UtcDateTimeVisitor;

        impl<'de> de::Visitor<'de> for UtcDateTimeVisitor {
            type Value = UtcDateTime;

            fn expecting(
                &self,
                f: &mut core::fmt::Formatter,
            ) -> core::fmt::Result {
                f.write_str("an RFC 3339 datetime string")
            }

            #[inline]
            fn visit_bytes<E: de::Error>(
                self,
                value: &[u8],
            ) -> Result<UtcDateTime, E> {
                UtcDateTime::from_iso8601(value).map_err(de::Error::custom)
            }

            #[inline]
            fn visit_str<E: de::Error>(
                self,
                value: &str,
            ) -> Result<UtcDateTime, E> {
                self.visit_bytes(value.as_bytes())
            }
        }

        deserializer.deserialize_str(UtcDateTimeVisitor)
    }
}

/// The fractional part of a second, along with the number of digits it is
/// displayed with.
///
/// The value is always stored in microseconds, in `0..=999_999`. The
/// precision is a number of digits in `0..=6`, and only controls how many
/// digits are printed. It has no effect on comparisons or arithmetic.
///
/// The precision doesn't need to agree with the value: a value of `123_456`
/// with a precision of `2` is valid, and prints as `.12`.
///
/// # Example
///
/// ```
/// use utc_datetime::{ErrorKind, Subsecond};
///
/// let subsecond = Subsecond::new(120_000, 2)?;
/// assert_eq!(subsecond.value(), 120_000);
/// assert_eq!(subsecond.precision(), 2);
///
/// let err = Subsecond::new(1_000_000, 6).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::InvalidSecond);
/// let err = Subsecond::new(0, 7).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::InvalidSecond);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Subsecond {
    value: u32,
    precision: u8,
}

impl Subsecond {
    /// A subsecond of zero, with a precision of zero.
    pub const ZERO: Subsecond = Subsecond { value: 0, precision: 0 };

    /// Creates a new subsecond of `value` microseconds, printed with
    /// `precision` digits.
    ///
    /// # Errors
    ///
    /// This returns an [`ErrorKind::InvalidSecond`] error when the value is
    /// not in `0..=999_999` or the precision is not in `0..=6`.
    #[inline]
    pub fn new(value: u32, precision: u8) -> Result<Subsecond, Error> {
        if value > 999_999 || precision > 6 {
            return Err(Error::new(ErrorKind::InvalidSecond));
        }
        Ok(Subsecond { value, precision })
    }

    /// Creates a new subsecond in a `const` context.
    ///
    /// # Panics
    ///
    /// When [`Subsecond::new`] would return an error.
    #[inline]
    pub const fn constant(value: u32, precision: u8) -> Subsecond {
        assert!(value <= 999_999, "subsecond value must be below 1,000,000");
        assert!(precision <= 6, "subsecond precision must be at most 6");
        Subsecond { value, precision }
    }

    /// Returns the value in microseconds.
    #[inline]
    pub const fn value(self) -> u32 {
        self.value
    }

    /// Returns the number of digits this value is printed with.
    #[inline]
    pub const fn precision(self) -> u8 {
        self.precision
    }

    #[inline]
    pub(crate) const fn new_unchecked(value: u32, precision: u8) -> Subsecond {
        Subsecond { value, precision }
    }
}

/// Checks that the given fields name a valid datetime.
///
/// A year that doesn't fit in an `i32` is a range error, reported only after
/// every other field has been checked.
pub(crate) fn check_fields(fields: &Fields) -> Result<(), Error> {
    let Fields { year, month, day, hour, minute, second, microsecond } =
        *fields;
    if let Some(kind) = invalid_field(year, month, day, hour, minute, second)
    {
        return Err(Error::new(kind));
    }
    if microsecond > 999_999 {
        return Err(Error::new(ErrorKind::InvalidSecond));
    }
    if i32::try_from(year).is_err() {
        return Err(Error::year_range(year));
    }
    Ok(())
}

/// Returns the kind of error for the first invalid field, if any.
const fn invalid_field(
    year: i64,
    month: i8,
    day: i8,
    hour: i8,
    minute: i8,
    second: i8,
) -> Option<ErrorKind> {
    if month < 1 || month > 12 {
        Some(ErrorKind::InvalidMonth)
    } else if day < 1 || day > days_in_month(year, month) {
        Some(ErrorKind::InvalidDay)
    } else if hour < 0 || hour > 23 {
        Some(ErrorKind::InvalidHour)
    } else if minute < 0 || minute > 59 {
        Some(ErrorKind::InvalidMinute)
    } else if second < 0 || second > 59 {
        Some(ErrorKind::InvalidSecond)
    } else {
        None
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Subsecond {
    /// Generates subseconds whose value has no more digits than their
    /// precision, so that they survive printing and parsing unchanged.
    fn arbitrary(g: &mut quickcheck::Gen) -> Subsecond {
        let precision = u8::arbitrary(g) % 7;
        let value = u32::arbitrary(g) % 1_000_000;
        let scale = 10u32.pow(6 - u32::from(precision));
        Subsecond { value: value - value % scale, precision }
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = Subsecond>> {
        alloc::boxed::Box::new(
            (self.value, self.precision).shrink().map(|(value, precision)| {
                let precision = precision.min(6);
                let scale = 10u32.pow(6 - u32::from(precision));
                let value = value.min(999_999);
                Subsecond { value: value - value % scale, precision }
            }),
        )
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for UtcDateTime {
    fn arbitrary(g: &mut quickcheck::Gen) -> UtcDateTime {
        let year = i16::arbitrary(g);
        let month = i8::arbitrary(g);
        let day = i8::arbitrary(g);
        let hour = i8::arbitrary(g);
        let minute = i8::arbitrary(g);
        let second = i8::arbitrary(g);
        UtcDateTime::constrain(year, month, day, hour, minute, second)
            .with_subsecond(Subsecond::arbitrary(g))
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = UtcDateTime>> {
        let subsecond = self.subsecond;
        let year = i16::try_from(self.year).unwrap_or(0);
        alloc::boxed::Box::new(
            (year, self.month, self.day, self.hour, self.minute, self.second)
                .shrink()
                .map(move |(year, month, day, hour, minute, second)| {
                    UtcDateTime::constrain(
                        year, month, day, hour, minute, second,
                    )
                    .with_subsecond(subsecond)
                }),
        )
    }
}

#[cfg(test)]
impl UtcDateTime {
    /// Maps arbitrary field values into their valid ranges.
    fn constrain(
        year: i16,
        month: i8,
        day: i8,
        hour: i8,
        minute: i8,
        second: i8,
    ) -> UtcDateTime {
        let year = i32::from(year);
        let month = month.rem_euclid(12) + 1;
        let days = days_in_month(i64::from(year), month);
        let day = day.rem_euclid(days) + 1;
        UtcDateTime::constant(
            year,
            month,
            day,
            hour.rem_euclid(24),
            minute.rem_euclid(60),
            second.rem_euclid(60),
        )
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use core::num::NonZeroU32;

    use quickcheck::TestResult;

    use super::*;

    fn dt(
        year: i32,
        month: i8,
        day: i8,
        hour: i8,
        minute: i8,
        second: i8,
        micros: u32,
        precision: u8,
    ) -> UtcDateTime {
        UtcDateTime::constant(year, month, day, hour, minute, second)
            .with_subsecond(Subsecond::constant(micros, precision))
    }

    fn parts(n: u32) -> TimeUnit {
        TimeUnit::PartsPerSecond(NonZeroU32::new(n).unwrap())
    }

    #[test]
    fn new_checks_fields_in_order() {
        let k = |y, mo, d, h, mi, s| {
            UtcDateTime::new(y, mo, d, h, mi, s).unwrap_err().kind()
        };
        assert_eq!(k(2015, 13, 32, 24, 60, 60), ErrorKind::InvalidMonth);
        assert_eq!(k(2015, 0, 1, 0, 0, 0), ErrorKind::InvalidMonth);
        assert_eq!(k(2015, -1, 1, 0, 0, 0), ErrorKind::InvalidMonth);
        assert_eq!(k(2015, 2, 29, 24, 60, 60), ErrorKind::InvalidDay);
        assert_eq!(k(2015, 2, 0, 0, 0, 0), ErrorKind::InvalidDay);
        assert_eq!(k(2015, 2, 28, 24, 60, 60), ErrorKind::InvalidHour);
        assert_eq!(k(2015, 2, 28, -1, 0, 0), ErrorKind::InvalidHour);
        assert_eq!(k(2015, 2, 28, 23, 60, 60), ErrorKind::InvalidMinute);
        assert_eq!(k(2015, 2, 28, 23, 59, 60), ErrorKind::InvalidSecond);
        assert_eq!(k(2015, 2, 28, 23, 59, -1), ErrorKind::InvalidSecond);
        assert!(UtcDateTime::new(2016, 2, 29, 23, 59, 59).is_ok());
        assert!(UtcDateTime::new(i32::MIN, 1, 1, 0, 0, 0).is_ok());
    }

    #[test]
    #[should_panic(expected = "invalid day")]
    fn constant_panics() {
        UtcDateTime::constant(2015, 2, 29, 0, 0, 0);
    }

    #[test]
    fn unix_epoch_identity() {
        let epoch = UtcDateTime::from_unix(0, TimeUnit::Second).unwrap();
        assert_eq!(epoch, Epoch::Unix.date());
        assert_eq!(epoch, UtcDateTime::default());
        assert_eq!(epoch.to_string(), "1970-01-01T00:00:00Z");
        assert_eq!(epoch.to_unix(TimeUnit::Second), 0);
        assert_eq!(epoch.to_unix(TimeUnit::Nanosecond), 0);
    }

    #[test]
    fn unix_decode_range() {
        let dt = UtcDateTime::from_unix(-62_167_219_200, TimeUnit::Second);
        assert_eq!(dt.unwrap(), UtcDateTime::constant(0, 1, 1, 0, 0, 0));
        let err = UtcDateTime::from_unix(-62_167_219_201, TimeUnit::Second)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidUnixTime);

        let max = UtcDateTime::from_unix(253_402_300_799, TimeUnit::Second);
        assert_eq!(max.unwrap(), UtcDateTime::constant(9999, 12, 31, 23, 59, 59));
        let err = UtcDateTime::from_unix(253_402_300_800, TimeUnit::Second)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidUnixTime);

        let err =
            UtcDateTime::from_unix(i128::MIN, TimeUnit::Second).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidUnixTime);
        let err = UtcDateTime::from_unix(i128::MAX, parts(1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidUnixTime);
    }

    #[test]
    fn unix_precision_follows_unit() {
        let p = |value, unit| {
            UtcDateTime::from_unix(value, unit).unwrap().subsecond()
        };
        assert_eq!(p(1, TimeUnit::Second), Subsecond::constant(0, 0));
        assert_eq!(p(1, TimeUnit::Millisecond), Subsecond::constant(1_000, 3));
        assert_eq!(p(1, TimeUnit::Microsecond), Subsecond::constant(1, 6));
        assert_eq!(p(1_001, TimeUnit::Nanosecond), Subsecond::constant(1, 6));
        assert_eq!(p(1, parts(100)), Subsecond::constant(10_000, 2));
        assert_eq!(p(1, parts(3)), Subsecond::constant(333_333, 6));
        // Sub-microsecond parts are floored, even before the epoch.
        assert_eq!(p(-1, TimeUnit::Nanosecond), Subsecond::constant(999_999, 6));
        assert_eq!(p(-1, parts(3)), Subsecond::constant(666_666, 6));
    }

    #[test]
    fn unix_roundtrip_units() {
        let dt = dt(2015, 5, 25, 13, 26, 8, 868_569, 6);
        for unit in [
            TimeUnit::Second,
            TimeUnit::Millisecond,
            TimeUnit::Microsecond,
            TimeUnit::Nanosecond,
            parts(10_000_000),
        ] {
            let n = dt.to_unix(unit);
            let back = UtcDateTime::from_unix(n, unit).unwrap();
            assert_eq!(back.to_unix(unit), n, "{unit}");
        }
        assert_eq!(dt.to_unix(TimeUnit::Second), 1_432_560_368);
        assert_eq!(dt.to_unix(TimeUnit::Millisecond), 1_432_560_368_868);
        assert_eq!(dt.to_unix(TimeUnit::Nanosecond), 1_432_560_368_868_569_000);
        assert_eq!(dt.to_unix(parts(3)), 4_297_681_106);
    }

    #[test]
    #[should_panic(expected = "cannot convert unix time 253402300800")]
    fn from_unix_or_panic() {
        UtcDateTime::from_unix_or_panic(253_402_300_800, TimeUnit::Second);
    }

    #[test]
    fn ntfs() {
        let ticks = parts(10_000_000);
        let dt = dt(2015, 1, 23, 23, 50, 7, 123_000, 3);
        assert_eq!(dt.to_ntfs(ticks), 130_665_306_071_230_000);
        assert_eq!(UtcDateTime::from_ntfs(130_665_306_071_230_000, ticks).unwrap(), dt);
        assert_eq!(Epoch::Ntfs.date().to_ntfs(TimeUnit::Second), 0);
        assert_eq!(
            UtcDateTime::constant(1, 1, 1, 0, 0, 0).to_ntfs(TimeUnit::Second),
            -50_491_123_200,
        );
    }

    #[test]
    fn epochs() {
        let dt = UtcDateTime::constant(2000, 1, 1, 0, 0, 0);
        assert_eq!(dt.to_epoch(Epoch::PostgreSql, TimeUnit::Second), 0);
        assert_eq!(dt.to_epoch(Epoch::Unix, TimeUnit::Second), 946_684_800);
        assert_eq!(dt.to_epoch(Epoch::Mjd, TimeUnit::Second), 51_544 * 86_400);
        assert_eq!(dt.to_epoch(Epoch::Apple, TimeUnit::Second), -31_622_400);

        let got =
            UtcDateTime::from_epoch(-1, Epoch::Go, TimeUnit::Second).unwrap();
        assert_eq!(got, UtcDateTime::constant(0, 12, 31, 23, 59, 59));
        let err = UtcDateTime::from_epoch(-366 * 86_400 - 1, Epoch::Go, TimeUnit::Second)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidUnixTime);
    }

    #[test]
    fn add_keeps_precision() {
        let start = dt(2014, 10, 2, 0, 29, 10, 0, 0);
        let got = start.add(1, TimeUnit::Microsecond);
        assert_eq!(got.subsecond(), Subsecond::constant(1, 0));
        assert_eq!(got.to_string(), "2014-10-02T00:29:10Z");

        let got = start.add(1, TimeUnit::Nanosecond);
        assert_eq!(got, start);

        let start = dt(2014, 10, 2, 0, 29, 10, 100_000, 1);
        let got = start.add(-1, TimeUnit::Millisecond);
        assert_eq!(got, dt(2014, 10, 2, 0, 29, 10, 99_000, 1));
        assert_eq!(got.to_string(), "2014-10-02T00:29:10.0Z");
    }

    #[test]
    fn add_rolls_over() {
        let start = dt(2016, 12, 31, 23, 59, 59, 999_999, 6);
        assert_eq!(
            start.add(1, TimeUnit::Microsecond),
            dt(2017, 1, 1, 0, 0, 0, 0, 6),
        );
        let start = UtcDateTime::constant(2016, 2, 28, 0, 0, 0);
        assert_eq!(
            start.add(86_400, TimeUnit::Second),
            UtcDateTime::constant(2016, 2, 29, 0, 0, 0),
        );
        let start = UtcDateTime::constant(0, 1, 1, 0, 0, 0);
        assert_eq!(
            start.add(-1, TimeUnit::Second),
            UtcDateTime::constant(-1, 12, 31, 23, 59, 59),
        );
        assert_eq!(start.add(-1, TimeUnit::Second).year(), -1);
    }

    #[test]
    fn add_out_of_range() {
        let max = UtcDateTime::constant(i32::MAX, 12, 31, 23, 59, 59);
        let err = max.checked_add(1, TimeUnit::Second).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
        insta::assert_snapshot!(
            err,
            @"computed year 2147483648 is not in the required range of -2147483648..=2147483647",
        );

        let min = UtcDateTime::constant(i32::MIN, 1, 1, 0, 0, 0);
        assert_eq!(
            min.checked_add(-1, TimeUnit::Microsecond).unwrap_err().kind(),
            ErrorKind::Range,
        );
        assert!(min.checked_add(i64::MAX, TimeUnit::Microsecond).is_ok());
        assert!(min.checked_add(i64::MIN, TimeUnit::Second).is_err());
    }

    #[test]
    fn diff_is_exact() {
        let a = dt(2015, 1, 23, 23, 50, 7, 123_000, 3);
        let b = dt(2015, 1, 23, 23, 50, 7, 0, 0);
        assert_eq!(a.diff(b, TimeUnit::Microsecond), 123_000);
        assert_eq!(b.diff(a, TimeUnit::Microsecond), -123_000);
        assert_eq!(a.diff(b, TimeUnit::Second), 0);
        assert_eq!(b.diff(a, TimeUnit::Second), -1);

        let min = UtcDateTime::constant(i32::MIN, 1, 1, 0, 0, 0);
        let max = dt(i32::MAX, 12, 31, 23, 59, 59, 999_999, 6);
        let nanos = max.diff(min, TimeUnit::Nanosecond);
        assert_eq!(nanos % 1_000, 0);
        assert_eq!(nanos / 1_000, max.diff(min, TimeUnit::Microsecond));
    }

    #[test]
    fn truncate() {
        let start = dt(2017, 11, 6, 0, 23, 51, 123_456, 6);
        assert_eq!(
            start.truncate(TruncateUnit::Second).subsecond(),
            Subsecond::ZERO,
        );
        assert_eq!(
            start.truncate(TruncateUnit::Millisecond).subsecond(),
            Subsecond::constant(123_000, 3),
        );
        assert_eq!(
            start.truncate(TruncateUnit::Microsecond).subsecond(),
            Subsecond::constant(123_456, 6),
        );
        let start = dt(2017, 11, 6, 0, 23, 51, 123_456, 2);
        assert_eq!(
            start.truncate(TruncateUnit::Millisecond).subsecond(),
            Subsecond::constant(123_000, 2),
        );
    }

    #[test]
    fn compare_ignores_precision() {
        let a = dt(2015, 1, 23, 23, 50, 7, 100_000, 1);
        let b = dt(2015, 1, 23, 23, 50, 7, 100_000, 6);
        let c = dt(2015, 1, 23, 23, 50, 7, 120_000, 6);
        assert_eq!(a.cmp(&b), Ordering::Equal);
        assert_eq!(a, b);
        assert_eq!(a.cmp(&c), Ordering::Less);
        assert_eq!(c.cmp(&a), Ordering::Greater);
        assert!(dt(-1, 12, 31, 23, 59, 59, 0, 0) < dt(0, 1, 1, 0, 0, 0, 0, 0));
    }

    #[test]
    fn rfc3339_or_panic() {
        let got = UtcDateTime::from_rfc3339_or_panic("2016-02-29T23:50:07Z");
        assert_eq!(got, UtcDateTime::constant(2016, 2, 29, 23, 50, 7));
        let got = UtcDateTime::from_iso8601_or_panic("2016-02-29 23:50:07Z");
        assert_eq!(got, UtcDateTime::constant(2016, 2, 29, 23, 50, 7));
    }

    #[test]
    #[should_panic(
        expected = "failed to parse \"2015-02-29T23:50:07\" as an RFC 3339 datetime: day does not exist"
    )]
    fn rfc3339_or_panic_message() {
        UtcDateTime::from_rfc3339_or_panic("2015-02-29T23:50:07");
    }

    #[test]
    #[should_panic(expected = "as an ISO 8601 datetime")]
    fn iso8601_or_panic_message() {
        UtcDateTime::from_iso8601_or_panic("2015-01-23T23:50:07.123-00:00");
    }

    #[test]
    fn debug_and_display() {
        let dt = dt(-44, 3, 15, 12, 0, 0, 0, 0);
        assert_eq!(alloc::format!("{dt}"), "-0044-03-15T12:00:00Z");
        assert_eq!(alloc::format!("{dt:?}"), "-0044-03-15T12:00:00Z");
        assert_eq!(dt.to_iso8601(), dt.to_rfc3339());
    }

    #[cfg(feature = "std")]
    #[test]
    fn system_time() {
        use std::time::{Duration, SystemTime};

        let st = SystemTime::UNIX_EPOCH + Duration::new(1_432_560_368, 868_569_999);
        let dt = UtcDateTime::try_from(st).unwrap();
        assert_eq!(dt.to_string(), "2015-05-25T13:26:08.868569Z");
        assert_eq!(
            SystemTime::from(dt),
            SystemTime::UNIX_EPOCH + Duration::new(1_432_560_368, 868_569_000),
        );

        let st = SystemTime::UNIX_EPOCH - Duration::new(0, 1);
        let dt = UtcDateTime::try_from(st).unwrap();
        assert_eq!(dt.to_string(), "1969-12-31T23:59:59.999999Z");
        assert_eq!(
            SystemTime::from(dt),
            SystemTime::UNIX_EPOCH - Duration::new(0, 1_000),
        );
    }

    #[cfg(feature = "std")]
    #[test]
    fn now() {
        let _ = env_logger::try_init();
        let now = UtcDateTime::now();
        assert!(now > UtcDateTime::constant(2024, 1, 1, 0, 0, 0));
        assert_eq!(now.subsecond().precision(), 6);
    }

    quickcheck::quickcheck! {
        fn prop_print_then_parse(dt: UtcDateTime) -> bool {
            let got = UtcDateTime::from_iso8601(dt.to_rfc3339()).unwrap();
            got == dt && got.subsecond() == dt.subsecond()
        }

        fn prop_truncate_idempotent(dt: UtcDateTime) -> bool {
            [TruncateUnit::Second, TruncateUnit::Millisecond, TruncateUnit::Microsecond]
                .into_iter()
                .all(|unit| {
                    let once = dt.truncate(unit);
                    let twice = once.truncate(unit);
                    once == twice && once.subsecond() == twice.subsecond()
                })
        }

        fn prop_add_then_diff(dt: UtcDateTime, n: i64, which: u8) -> TestResult {
            let unit = match which % 3 {
                0 => TimeUnit::Second,
                1 => TimeUnit::Millisecond,
                _ => TimeUnit::Microsecond,
            };
            let Ok(sum) = dt.checked_add(n, unit) else {
                return TestResult::discard();
            };
            TestResult::from_bool(sum.diff(dt, unit) == i128::from(n))
        }

        fn prop_ordering_same_as_iso_days(dt1: UtcDateTime, dt2: UtcDateTime) -> bool {
            let unit = TimeUnit::Microsecond;
            let (n1, n2) = (dt1.to_iso_days().to_unit(unit), dt2.to_iso_days().to_unit(unit));
            dt1.cmp(&dt2) == n1.cmp(&n2)
        }

        fn prop_unix_roundtrip(dt: UtcDateTime) -> TestResult {
            if !(0..=9999).contains(&dt.year()) {
                return TestResult::discard();
            }
            let micros = dt.to_unix(TimeUnit::Microsecond);
            let got = UtcDateTime::from_unix(micros, TimeUnit::Microsecond).unwrap();
            TestResult::from_bool(got == dt)
        }
    }
}
