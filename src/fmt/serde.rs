/*!
Helpers for (de)serializing a [`UtcDateTime`](crate::UtcDateTime) as an
integer with [Serde].

By default, a `UtcDateTime` is (de)serialized as an RFC 3339 string. The
modules here are meant to be used with Serde's [`with` attribute] when a
datetime must instead be transmitted as an integer number of seconds,
milliseconds, microseconds or nanoseconds since the Unix epoch.

Integers that decode to a year outside of `0000..=9999` are rejected with
the same error as [`UtcDateTime::from_unix`](crate::UtcDateTime::from_unix).
When serializing, the value is written as an `i64` when it fits and as an
`i128` otherwise.

# Module hierarchy

Only the leaves of this tree can be used with the `with` attribute:

* [`unix`]
    * [`second`](self::unix::second)
        * [`utc_datetime::fmt::serde::unix::second::required`](self::unix::second::required)
        * [`utc_datetime::fmt::serde::unix::second::optional`](self::unix::second::optional)
    * [`millisecond`](self::unix::millisecond)
        * [`utc_datetime::fmt::serde::unix::millisecond::required`](self::unix::millisecond::required)
        * [`utc_datetime::fmt::serde::unix::millisecond::optional`](self::unix::millisecond::optional)
    * [`microsecond`](self::unix::microsecond)
        * [`utc_datetime::fmt::serde::unix::microsecond::required`](self::unix::microsecond::required)
        * [`utc_datetime::fmt::serde::unix::microsecond::optional`](self::unix::microsecond::optional)
    * [`nanosecond`](self::unix::nanosecond)
        * [`utc_datetime::fmt::serde::unix::nanosecond::required`](self::unix::nanosecond::required)
        * [`utc_datetime::fmt::serde::unix::nanosecond::optional`](self::unix::nanosecond::optional)

# Example

```
use utc_datetime::{TimeUnit, UtcDateTime};

#[derive(Debug, serde::Deserialize, serde::Serialize)]
struct Record {
    #[serde(with = "utc_datetime::fmt::serde::unix::second::required")]
    created: UtcDateTime,
    #[serde(with = "utc_datetime::fmt::serde::unix::millisecond::optional")]
    deleted: Option<UtcDateTime>,
}

let json = r#"{"created":1517644800,"deleted":1517644800123}"#;
let got: Record = serde_json::from_str(json)?;
assert_eq!(got.created.to_string(), "2018-02-03T08:00:00Z");
assert_eq!(
    got.deleted,
    Some(UtcDateTime::from_unix(1517644800_123, TimeUnit::Millisecond)?),
);
assert_eq!(serde_json::to_string(&got)?, json);

# Ok::<(), Box<dyn std::error::Error>>(())
```

[Serde]: https://serde.rs/
[`with` attribute]: https://serde.rs/field-attrs.html#with
*/

/// Convenience routines for (de)serializing a
/// [`UtcDateTime`](crate::UtcDateTime) as an integer time since the Unix
/// epoch.
pub mod unix {
    use serde::de;

    use crate::{TimeUnit, UtcDateTime};

    /// A visitor for an integer time since the Unix epoch in `unit`s.
    struct Visitor {
        unit: TimeUnit,
    }

    impl<'de> de::Visitor<'de> for Visitor {
        type Value = UtcDateTime;

        fn expecting(
            &self,
            f: &mut core::fmt::Formatter,
        ) -> core::fmt::Result {
            write!(
                f,
                "an integer number of {} since the Unix epoch",
                self.unit,
            )
        }

        #[inline]
        fn visit_i64<E: de::Error>(self, v: i64) -> Result<UtcDateTime, E> {
            self.visit_i128(i128::from(v))
        }

        #[inline]
        fn visit_u64<E: de::Error>(self, v: u64) -> Result<UtcDateTime, E> {
            self.visit_i128(i128::from(v))
        }

        #[inline]
        fn visit_i128<E: de::Error>(self, v: i128) -> Result<UtcDateTime, E> {
            UtcDateTime::from_unix(v, self.unit).map_err(de::Error::custom)
        }

        #[inline]
        fn visit_u128<E: de::Error>(self, v: u128) -> Result<UtcDateTime, E> {
            let v = i128::try_from(v).map_err(|_| {
                de::Error::custom(alloc::format!(
                    "got unsigned integer {v} {unit}, which is too big \
                     for a datetime",
                    unit = self.unit,
                ))
            })?;
            self.visit_i128(v)
        }
    }

    /// A visitor for an optional integer time since the Unix epoch.
    struct OptionalVisitor {
        unit: TimeUnit,
        wide: bool,
    }

    impl<'de> de::Visitor<'de> for OptionalVisitor {
        type Value = Option<UtcDateTime>;

        fn expecting(
            &self,
            f: &mut core::fmt::Formatter,
        ) -> core::fmt::Result {
            write!(
                f,
                "an integer number of {} since the Unix epoch or `None`",
                self.unit,
            )
        }

        #[inline]
        fn visit_some<D: de::Deserializer<'de>>(
            self,
            de: D,
        ) -> Result<Option<UtcDateTime>, D::Error> {
            deserialize(de, self.unit, self.wide).map(Some)
        }

        #[inline]
        fn visit_none<E: de::Error>(self) -> Result<Option<UtcDateTime>, E> {
            Ok(None)
        }

        #[inline]
        fn visit_unit<E: de::Error>(self) -> Result<Option<UtcDateTime>, E> {
            Ok(None)
        }
    }

    fn serialize<S: serde::Serializer>(
        dt: &UtcDateTime,
        unit: TimeUnit,
        se: S,
    ) -> Result<S::Ok, S::Error> {
        let value = dt.to_unix(unit);
        match i64::try_from(value) {
            Ok(value) => se.serialize_i64(value),
            Err(_) => se.serialize_i128(value),
        }
    }

    /// Asks for an `i128` when `wide` is set, since only nanoseconds
    /// overflow an `i64` in years `0000..=9999`.
    fn deserialize<'de, D: serde::Deserializer<'de>>(
        de: D,
        unit: TimeUnit,
        wide: bool,
    ) -> Result<UtcDateTime, D::Error> {
        let visitor = Visitor { unit };
        if wide {
            de.deserialize_i128(visitor)
        } else {
            de.deserialize_i64(visitor)
        }
    }

    fn serialize_optional<S: serde::Serializer>(
        dt: &Option<UtcDateTime>,
        unit: TimeUnit,
        se: S,
    ) -> Result<S::Ok, S::Error> {
        match *dt {
            None => se.serialize_none(),
            Some(ref dt) => serialize(dt, unit, se),
        }
    }

    fn deserialize_optional<'de, D: serde::Deserializer<'de>>(
        de: D,
        unit: TimeUnit,
        wide: bool,
    ) -> Result<Option<UtcDateTime>, D::Error> {
        de.deserialize_option(OptionalVisitor { unit, wide })
    }

    macro_rules! unit_module {
        ($name:ident, $unit:expr, $wide:expr, $doc:literal) => {
            #[doc = concat!(
                "(De)serialize an integer number of ", $doc,
                " since the Unix epoch.",
            )]
            pub mod $name {
                #[doc = concat!(
                    "(De)serialize a required integer number of ", $doc,
                    " since the Unix epoch.",
                )]
                pub mod required {
                    use crate::UtcDateTime;

                    #[doc = concat!(
                        "Serialize a required integer number of ", $doc,
                        " since the Unix epoch.",
                    )]
                    #[inline]
                    pub fn serialize<S: serde::Serializer>(
                        dt: &UtcDateTime,
                        se: S,
                    ) -> Result<S::Ok, S::Error> {
                        super::super::serialize(dt, $unit, se)
                    }

                    #[doc = concat!(
                        "Deserialize a required integer number of ", $doc,
                        " since the Unix epoch.",
                    )]
                    #[inline]
                    pub fn deserialize<'de, D: serde::Deserializer<'de>>(
                        de: D,
                    ) -> Result<UtcDateTime, D::Error> {
                        super::super::deserialize(de, $unit, $wide)
                    }
                }

                #[doc = concat!(
                    "(De)serialize an optional integer number of ", $doc,
                    " since the Unix epoch.",
                )]
                pub mod optional {
                    use crate::UtcDateTime;

                    #[doc = concat!(
                        "Serialize an optional integer number of ", $doc,
                        " since the Unix epoch.",
                    )]
                    #[inline]
                    pub fn serialize<S: serde::Serializer>(
                        dt: &Option<UtcDateTime>,
                        se: S,
                    ) -> Result<S::Ok, S::Error> {
                        super::super::serialize_optional(dt, $unit, se)
                    }

                    #[doc = concat!(
                        "Deserialize an optional integer number of ", $doc,
                        " since the Unix epoch.",
                    )]
                    #[inline]
                    pub fn deserialize<'de, D: serde::Deserializer<'de>>(
                        de: D,
                    ) -> Result<Option<UtcDateTime>, D::Error> {
                        super::super::deserialize_optional(de, $unit, $wide)
                    }
                }
            }
        };
    }

    unit_module!(second, crate::TimeUnit::Second, false, "seconds");
    unit_module!(
        millisecond,
        crate::TimeUnit::Millisecond,
        false,
        "milliseconds"
    );
    unit_module!(
        microsecond,
        crate::TimeUnit::Microsecond,
        false,
        "microseconds"
    );
    unit_module!(nanosecond, crate::TimeUnit::Nanosecond, true, "nanoseconds");
}
