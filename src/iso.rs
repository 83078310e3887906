/*!
Day-count arithmetic in the proleptic Gregorian calendar.

Every conversion and every piece of arithmetic in this crate goes through a
single intermediate representation, [`IsoDays`]: a signed number of days since
`0000-01-01` paired with the elapsed fraction of the current day. Adding an
amount of time, normalizing a UTC offset, computing the difference between
two datetimes and converting to or from an integer time since some epoch are
all expressed as operations on this one type. This keeps all of the calendar
math in one place and guarantees that all of those operations truncate in the
same way.

The routines here are total. They assume that the [`Fields`] given to them
are valid (which is enforced by the public constructors of
[`UtcDateTime`](crate::UtcDateTime)) and never return an error.

# Example

```
use utc_datetime::iso::{Fields, IsoDays};

let fields = Fields {
    year: 1970,
    month: 1,
    day: 1,
    hour: 12,
    minute: 0,
    second: 0,
    microsecond: 0,
};
let iso = IsoDays::from_fields(&fields);
assert_eq!(iso.days, 719_528);
assert_eq!(iso.fraction.parts(), 43_200_000_000);
assert_eq!(iso.fraction.per_day(), 86_400_000_000);
assert_eq!(iso.to_fields(), fields);
```

# Algorithms

Conversions between dates and day counts use Howard Hinnant's
`days_from_civil` and `civil_from_days`, shifted so that day zero is
`0000-01-01` instead of the Unix epoch:
<https://howardhinnant.github.io/date_algorithms.html>
*/

use crate::unit::TimeUnit;

/// The number of seconds in a day. There are no leap seconds.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// The number of microseconds in a day.
pub(crate) const MICROS_PER_DAY: i64 = SECONDS_PER_DAY * 1_000_000;

/// The largest denominator a [`DayFraction`] may have.
///
/// This is the least common multiple of microseconds and the finest
/// [`TimeUnit`] in the worst case: `86_400 * 1_000_000 * u32::MAX`. Adding
/// any amount in any `TimeUnit` to a microsecond fraction therefore stays
/// exact.
pub const MAX_PER_DAY: i128 =
    SECONDS_PER_DAY as i128 * 1_000_000 * u32::MAX as i128;

/// The day count of `1970-01-01`.
pub(crate) const UNIX_EPOCH_DAYS: i64 = days_from_date(1970, 1, 1);

/// The day count of `0000-01-01`, the first day that an integer time can
/// decode to.
pub(crate) const MIN_DECODE_DAYS: i64 = days_from_date(0, 1, 1);

/// The day count of `10000-01-01`, the first day that an integer time can
/// *not* decode to.
pub(crate) const MAX_DECODE_DAYS: i64 = days_from_date(10_000, 1, 1);

/// The fields of a datetime in the proleptic Gregorian calendar.
///
/// This is the naive representation: a date and a clock time with no UTC
/// offset. The fractional second is always stored as a number of
/// microseconds. How many digits it should be displayed with is not part of
/// these fields and must be carried separately by callers.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Fields {
    /// The year. Year `0` is 1 BCE, year `-1` is 2 BCE and so on.
    pub year: i64,
    /// The month, in `1..=12`.
    pub month: i8,
    /// The day of the month, starting at `1`.
    pub day: i8,
    /// The hour, in `0..=23`.
    pub hour: i8,
    /// The minute, in `0..=59`.
    pub minute: i8,
    /// The second, in `0..=59`.
    pub second: i8,
    /// The fractional second in microseconds, in `0..=999_999`.
    pub microsecond: u32,
}

/// The elapsed part of a day, as the rational number `parts / per_day`.
///
/// The invariants `0 <= parts < per_day` and `per_day <= MAX_PER_DAY`
/// always hold.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct DayFraction {
    parts: i128,
    per_day: i128,
}

impl DayFraction {
    /// The start of a day, in microsecond resolution.
    pub const MIDNIGHT: DayFraction =
        DayFraction { parts: 0, per_day: MICROS_PER_DAY as i128 };

    /// Creates a new day fraction of `parts / per_day`.
    ///
    /// # Panics
    ///
    /// When `per_day` is not in the range `1..=MAX_PER_DAY` or when `parts`
    /// is not in the range `0..per_day`.
    #[inline]
    pub const fn new(parts: i128, per_day: i128) -> DayFraction {
        assert!(
            0 < per_day && per_day <= MAX_PER_DAY,
            "parts per day must be in 1..=MAX_PER_DAY",
        );
        assert!(
            0 <= parts && parts < per_day,
            "parts must be less than parts per day",
        );
        DayFraction { parts, per_day }
    }

    /// Returns the numerator of this fraction.
    #[inline]
    pub const fn parts(self) -> i128 {
        self.parts
    }

    /// Returns the denominator of this fraction.
    #[inline]
    pub const fn per_day(self) -> i128 {
        self.per_day
    }
}

/// A point in time as a day count since `0000-01-01` plus a day fraction.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct IsoDays {
    /// Days since `0000-01-01`. Negative for earlier dates.
    pub days: i64,
    /// How much of `days` has elapsed.
    pub fraction: DayFraction,
}

impl IsoDays {
    /// Converts calendar fields to ISO days.
    ///
    /// The fraction returned always counts microseconds, i.e., its
    /// denominator is `86_400_000_000`.
    ///
    /// The fields are assumed to be valid. The year must be small enough that
    /// its day count fits in an `i64`, which is true of every `i32` year.
    #[inline]
    pub const fn from_fields(fields: &Fields) -> IsoDays {
        let days = days_from_date(fields.year, fields.month, fields.day);
        let second = (fields.hour as i64) * 3_600
            + (fields.minute as i64) * 60
            + (fields.second as i64);
        let parts = second * 1_000_000 + fields.microsecond as i64;
        IsoDays {
            days,
            fraction: DayFraction {
                parts: parts as i128,
                per_day: MICROS_PER_DAY as i128,
            },
        }
    }

    /// Converts ISO days back to calendar fields.
    ///
    /// Any part of the day fraction finer than a microsecond is truncated.
    #[inline]
    pub const fn to_fields(&self) -> Fields {
        let (year, month, day) = date_from_days(self.days);
        // `parts < per_day <= MAX_PER_DAY`, so the product fits and the
        // quotient is less than `MICROS_PER_DAY`.
        let micros = (self.fraction.parts * MICROS_PER_DAY as i128
            / self.fraction.per_day) as i64;
        let second = micros / 1_000_000;
        Fields {
            year,
            month,
            day,
            hour: (second / 3_600) as i8,
            minute: (second / 60 % 60) as i8,
            second: (second % 60) as i8,
            microsecond: (micros % 1_000_000) as u32,
        }
    }

    /// Shifts this point in time by `amount` of the given unit. `amount` may
    /// be negative.
    ///
    /// This is used both to normalize a UTC offset (in seconds, with the
    /// negated offset as the amount) and to add a generic amount of time.
    ///
    /// When the unit's parts per day differ from the denominator of this
    /// fraction, the result is expressed over their least common multiple so
    /// that no precision is lost. If that multiple would exceed
    /// [`MAX_PER_DAY`], both terms are truncated to microseconds instead.
    /// This can only happen when this fraction isn't already counting
    /// microseconds, e.g., after an earlier addition in an unusual unit.
    ///
    /// # Example
    ///
    /// ```
    /// use utc_datetime::{iso::{Fields, IsoDays}, TimeUnit};
    ///
    /// let fields = Fields {
    ///     year: 2015,
    ///     month: 1,
    ///     day: 23,
    ///     hour: 23,
    ///     minute: 50,
    ///     second: 7,
    ///     microsecond: 123_000,
    /// };
    /// let iso = IsoDays::from_fields(&fields);
    /// let utc = iso.add_fraction(-9_000, TimeUnit::Second).to_fields();
    /// assert_eq!((utc.hour, utc.minute), (21, 20));
    /// ```
    #[inline]
    pub fn add_fraction(self, amount: i64, unit: TimeUnit) -> IsoDays {
        let unit_per_day = unit.per_day();
        let DayFraction { parts, per_day } = self.fraction;
        // Whole days first, so that only a remainder below one day is ever
        // scaled.
        let amount = i128::from(amount);
        let days = self.days + amount.div_euclid(unit_per_day) as i64;
        let amount = amount.rem_euclid(unit_per_day);
        let scale = unit_per_day / gcd(per_day, unit_per_day);
        let (parts, per_day) = match per_day
            .checked_mul(scale)
            .filter(|&lcm| lcm <= MAX_PER_DAY)
        {
            Some(lcm) => {
                (parts * scale + amount * (lcm / unit_per_day), lcm)
            }
            None => {
                let micros = MICROS_PER_DAY as i128;
                let parts = parts * micros / per_day
                    + amount * micros / unit_per_day;
                (parts, micros)
            }
        };
        // Both terms are below `per_day`, so this carries at most one day.
        let days = days + parts.div_euclid(per_day) as i64;
        let fraction =
            DayFraction { parts: parts.rem_euclid(per_day), per_day };
        IsoDays { days, fraction }
    }

    /// Returns the number of whole `unit`s elapsed since `0000-01-01`.
    ///
    /// This is exact: `days * unit_per_day` plus the day fraction expressed
    /// in `unit`, rounded toward negative infinity.
    #[inline]
    pub fn to_unit(self, unit: TimeUnit) -> i128 {
        let per_day = unit.per_day();
        let within_day = self.fraction.parts * per_day / self.fraction.per_day;
        i128::from(self.days) * per_day + within_day
    }

    /// Returns the point in time `value` units after the day `epoch_days`
    /// starts.
    ///
    /// This returns `None` when the resulting day count doesn't fit in an
    /// `i64`.
    #[inline]
    pub(crate) fn from_unit(
        value: i128,
        unit: TimeUnit,
        epoch_days: i64,
    ) -> Option<IsoDays> {
        let per_day = unit.per_day();
        let days = i64::try_from(value.div_euclid(per_day))
            .ok()?
            .checked_add(epoch_days)?;
        let fraction =
            DayFraction { parts: value.rem_euclid(per_day), per_day };
        Some(IsoDays { days, fraction })
    }
}

/// Converts a Gregorian date to the number of days since `0000-01-01`.
#[inline]
pub(crate) const fn days_from_date(year: i64, month: i8, day: i8) -> i64 {
    let year = if month <= 2 { year - 1 } else { year };
    let era = year.div_euclid(400);
    let year_of_era = year - era * 400;
    // Months are counted from March, so that a leap day is always the last
    // day of a year.
    let month_from_march = (month as i64 + 9) % 12;
    let day_of_year = (153 * month_from_march + 2) / 5 + day as i64 - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100
        + day_of_year;
    // `60` is the number of days between `0000-01-01` and `0000-03-01`.
    era * 146_097 + day_of_era + 60
}

/// Converts a number of days since `0000-01-01` to a Gregorian date.
#[inline]
pub(crate) const fn date_from_days(days: i64) -> (i64, i8, i8) {
    let days = days - 60;
    let era = days.div_euclid(146_097);
    let day_of_era = days - era * 146_097;
    let year_of_era = (day_of_era - day_of_era / 1_460 + day_of_era / 36_524
        - day_of_era / 146_096)
        / 365;
    let day_of_year = day_of_era
        - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let month_from_march = (5 * day_of_year + 2) / 153;
    let day = (day_of_year - (153 * month_from_march + 2) / 5 + 1) as i8;
    let month = if month_from_march < 10 {
        month_from_march + 3
    } else {
        month_from_march - 9
    } as i8;
    let year = year_of_era + era * 400 + if month <= 2 { 1 } else { 0 };
    (year, month, day)
}

fn gcd(mut a: i128, mut b: i128) -> i128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
