/*!
Datetime representations that carry calendar and offset metadata.

A [`UtcDateTime`](crate::UtcDateTime) only ever holds proleptic Gregorian
fields in UTC. The types in this module are what it converts to and from when
talking to code that needs more than that:

* [`NaiveDateTime`] is a set of fields tagged with a calendar, with no UTC
offset at all.
* [`OffsetDateTime`] additionally carries a UTC offset, a standard (daylight
saving) offset and the names of its zone.

Both are plain records with public fields. Neither is validated on
construction. Validation happens when converting to a `UtcDateTime`, through
the [`Calendar`] the record is tagged with.

Only one calendar ships with this crate, [`Iso`]. Other calendars can be
supported by implementing [`Calendar`], whose only job is to convert fields
to and from [`IsoDays`].
*/

use alloc::string::String;

use crate::{
    datetime::{check_fields, Subsecond},
    error::Error,
    iso::{Fields, IsoDays},
};

/// A calendar system that can convert its fields to a day count.
///
/// Every conversion between a [`UtcDateTime`](crate::UtcDateTime) and a
/// [`NaiveDateTime`] or [`OffsetDateTime`] goes through the calendar of the
/// record. Fields are converted to [`IsoDays`], and a `UtcDateTime` is then
/// built from the day count. This means a calendar only needs to know how to
/// map its own fields to days, never how UTC offsets or Gregorian dates work.
///
/// # Example
///
/// A calendar that counts years from 10,000 BCE (the Holocene calendar), but
/// is otherwise identical to the Gregorian calendar:
///
/// ```
/// use utc_datetime::{
///     calendar::{Calendar, Iso, NaiveDateTime},
///     iso::{Fields, IsoDays},
///     Error, UtcDateTime,
/// };
///
/// #[derive(Clone, Copy, Debug)]
/// struct Holocene;
///
/// impl Calendar for Holocene {
///     fn to_iso_days(&self, fields: &Fields) -> Result<IsoDays, Error> {
///         let year = fields.year - 10_000;
///         Iso.to_iso_days(&Fields { year, ..*fields })
///     }
///
///     fn from_iso_days(&self, iso: IsoDays) -> Fields {
///         let fields = Iso.from_iso_days(iso);
///         Fields { year: fields.year + 10_000, ..fields }
///     }
/// }
///
/// let dt = UtcDateTime::constant(2024, 6, 15, 12, 0, 0);
/// let naive = dt.to_naive_with(Holocene);
/// assert_eq!(naive.year, 12_024);
/// assert_eq!(UtcDateTime::from_naive(&naive)?, dt);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Calendar {
    /// Converts the given fields of this calendar to a day count.
    ///
    /// Fields that don't name a datetime in this calendar must be rejected.
    fn to_iso_days(&self, fields: &Fields) -> Result<IsoDays, Error>;

    /// Converts the given day count to fields of this calendar.
    fn from_iso_days(&self, iso: IsoDays) -> Fields;
}

impl<C: Calendar + ?Sized> Calendar for &C {
    fn to_iso_days(&self, fields: &Fields) -> Result<IsoDays, Error> {
        (**self).to_iso_days(fields)
    }

    fn from_iso_days(&self, iso: IsoDays) -> Fields {
        (**self).from_iso_days(iso)
    }
}

/// The proleptic Gregorian calendar, as used by ISO 8601.
///
/// Fields are checked in the order month, day, hour, minute and second, and
/// the first invalid field is reported.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Iso;

impl Calendar for Iso {
    #[inline]
    fn to_iso_days(&self, fields: &Fields) -> Result<IsoDays, Error> {
        check_fields(fields)?;
        Ok(IsoDays::from_fields(fields))
    }

    #[inline]
    fn from_iso_days(&self, iso: IsoDays) -> Fields {
        iso.to_fields()
    }
}

/// A datetime with no UTC offset, tagged with the calendar its fields are
/// in.
///
/// This is produced by [`UtcDateTime::to_naive`](crate::UtcDateTime::to_naive)
/// and consumed by
/// [`UtcDateTime::from_naive`](crate::UtcDateTime::from_naive).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct NaiveDateTime<C = Iso> {
    /// The calendar the fields are in.
    pub calendar: C,
    /// The year.
    pub year: i64,
    /// The month.
    pub month: i8,
    /// The day of the month.
    pub day: i8,
    /// The hour.
    pub hour: i8,
    /// The minute.
    pub minute: i8,
    /// The second.
    pub second: i8,
    /// The fractional second and the precision it is displayed with.
    pub subsecond: Subsecond,
}

impl<C> NaiveDateTime<C> {
    /// Returns the calendar fields of this datetime.
    #[inline]
    pub fn fields(&self) -> Fields {
        Fields {
            year: self.year,
            month: self.month,
            day: self.day,
            hour: self.hour,
            minute: self.minute,
            second: self.second,
            microsecond: self.subsecond.value(),
        }
    }
}

/// A datetime with a UTC offset and zone names, tagged with the calendar its
/// fields are in.
///
/// The fields are the local datetime. The instant it refers to is found by
/// subtracting `utc_offset + std_offset` seconds from them.
///
/// This is produced by
/// [`UtcDateTime::to_offset_aware`](crate::UtcDateTime::to_offset_aware),
/// which always uses an offset of zero and the zone `Etc/UTC`, and consumed
/// by
/// [`UtcDateTime::from_offset_aware`](crate::UtcDateTime::from_offset_aware).
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct OffsetDateTime<C = Iso> {
    /// The calendar the fields are in.
    pub calendar: C,
    /// The year.
    pub year: i64,
    /// The month.
    pub month: i8,
    /// The day of the month.
    pub day: i8,
    /// The hour.
    pub hour: i8,
    /// The minute.
    pub minute: i8,
    /// The second.
    pub second: i8,
    /// The fractional second and the precision it is displayed with.
    pub subsecond: Subsecond,
    /// The offset from UTC in seconds, not counting daylight saving time.
    pub utc_offset: i32,
    /// The daylight saving offset in seconds, added on top of `utc_offset`.
    pub std_offset: i32,
    /// The abbreviated name of the zone, like `CET`.
    pub zone_abbr: String,
    /// The name of the time zone, like `Europe/Warsaw`.
    pub time_zone: String,
}

impl<C> OffsetDateTime<C> {
    /// Returns the local calendar fields of this datetime.
    #[inline]
    pub fn fields(&self) -> Fields {
        Fields {
            year: self.year,
            month: self.month,
            day: self.day,
            hour: self.hour,
            minute: self.minute,
            second: self.second,
            microsecond: self.subsecond.value(),
        }
    }

    /// Returns the total offset from UTC in seconds.
    #[inline]
    pub fn total_offset(&self) -> i64 {
        i64::from(self.utc_offset) + i64::from(self.std_offset)
    }
}
