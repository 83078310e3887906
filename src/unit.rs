use core::num::NonZeroU32;

use crate::iso::SECONDS_PER_DAY;

/// A unit of time used when converting a datetime to or from an integer, and
/// when adding an integer amount of time to a datetime.
///
/// Besides the four named units, any positive number of parts per second is
/// supported. For example, NTFS file times count in units of 100 nanoseconds,
/// which is `TimeUnit::PartsPerSecond(10_000_000)`.
///
/// # Example
///
/// ```
/// use core::num::NonZeroU32;
///
/// use utc_datetime::{Epoch, TimeUnit, UtcDateTime};
///
/// let ticks = TimeUnit::PartsPerSecond(NonZeroU32::new(10_000_000).unwrap());
/// let dt = UtcDateTime::constant(1601, 1, 1, 0, 0, 1);
/// assert_eq!(dt.to_ntfs(ticks), 10_000_000);
/// assert_eq!(dt.to_epoch(Epoch::Win32, ticks), 10_000_000);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TimeUnit {
    /// Whole seconds.
    Second,
    /// Thousandths of a second.
    Millisecond,
    /// Millionths of a second. This is the finest resolution a
    /// [`UtcDateTime`](crate::UtcDateTime) stores.
    Microsecond,
    /// Billionths of a second.
    Nanosecond,
    /// An arbitrary number of parts per second.
    PartsPerSecond(NonZeroU32),
}

impl TimeUnit {
    /// Returns how many of this unit make up one second.
    ///
    /// # Example
    ///
    /// ```
    /// use utc_datetime::TimeUnit;
    ///
    /// assert_eq!(TimeUnit::Second.per_second(), 1);
    /// assert_eq!(TimeUnit::Nanosecond.per_second(), 1_000_000_000);
    /// ```
    #[inline]
    pub const fn per_second(self) -> u32 {
        match self {
            TimeUnit::Second => 1,
            TimeUnit::Millisecond => 1_000,
            TimeUnit::Microsecond => 1_000_000,
            TimeUnit::Nanosecond => 1_000_000_000,
            TimeUnit::PartsPerSecond(parts) => parts.get(),
        }
    }

    /// Returns how many of this unit make up one (86,400 second) day.
    #[inline]
    pub(crate) const fn per_day(self) -> i128 {
        SECONDS_PER_DAY as i128 * self.per_second() as i128
    }

    /// Returns the number of fractional digits that a value decoded from
    /// an integer in this unit is displayed with.
    ///
    /// Only units that are exact powers of ten get a precision below `6`.
    pub(crate) const fn precision(self) -> u8 {
        match self.per_second() {
            1 => 0,
            10 => 1,
            100 => 2,
            1_000 => 3,
            10_000 => 4,
            100_000 => 5,
            _ => 6,
        }
    }
}

impl core::fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match *self {
            TimeUnit::Second => f.write_str("seconds"),
            TimeUnit::Millisecond => f.write_str("milliseconds"),
            TimeUnit::Microsecond => f.write_str("microseconds"),
            TimeUnit::Nanosecond => f.write_str("nanoseconds"),
            TimeUnit::PartsPerSecond(parts) => {
                write!(f, "1/{parts} seconds")
            }
        }
    }
}

/// The units a [`UtcDateTime`](crate::UtcDateTime) can be truncated to.
///
/// See [`UtcDateTime::truncate`](crate::UtcDateTime::truncate).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TruncateUnit {
    /// Drops the fractional second entirely.
    Second,
    /// Keeps whole milliseconds.
    Millisecond,
    /// Keeps whole microseconds. Since microseconds are the stored
    /// resolution, truncating to them changes nothing.
    Microsecond,
}
