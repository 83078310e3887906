/*!
A UTC-only datetime with microsecond resolution.

This crate provides one main type, [`UtcDateTime`], along with the plumbing
around it: parsing and printing RFC 3339 and ISO 8601, converting to and from
integer times since the Unix epoch (or NTFS, or any of a few dozen other
well-known [`Epoch`]s), adding amounts of time, computing exact differences
and converting to and from naive and offset-aware datetimes in other
calendars.

A `UtcDateTime` is always in UTC. There are no time zones and no leap
seconds. Its year is an `i32`, and its fractional second is stored in
microseconds along with a *precision*: the number of fractional digits the
value was recorded with and is printed with.

# Example

```
use utc_datetime::{TimeUnit, TruncateUnit, UtcDateTime};

let dt = UtcDateTime::from_rfc3339("2015-01-23T23:50:07.123+02:30")?;
assert_eq!(dt.to_string(), "2015-01-23T21:20:07.123Z");
assert_eq!(dt.to_unix(TimeUnit::Millisecond), 1_422_048_007_123);

let later = dt.add(3_600, TimeUnit::Second);
assert_eq!(later.diff(dt, TimeUnit::Millisecond), 3_600_000);
assert_eq!(
    later.truncate(TruncateUnit::Second).to_string(),
    "2015-01-23T22:20:07Z",
);

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Errors

Every fallible operation returns the same [`Error`] type. Its
[`ErrorKind`] reports what went wrong. Most operations also come in a
panicking flavor (like [`UtcDateTime::from_rfc3339_or_panic`] or
[`UtcDateTime::add`]) for when failure is a bug.

# Crate features

* **std** (enabled by default) - Enables [`UtcDateTime::now`], conversions
to and from `std::time::SystemTime` and an implementation of
`std::error::Error` for [`Error`].
* **logging** - Emits log messages through the [`log`] crate. This is
mostly useful for debugging.
* **serde** - Implements `Serialize` and `Deserialize` for [`UtcDateTime`]
(as an RFC 3339 string) and [`Epoch`] (by name). Also enables the helpers
in `fmt::serde` for (de)serializing datetimes as integers.

[`log`]: https://docs.rs/log
*/

#![no_std]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(missing_debug_implementations)]

#[cfg(any(test, feature = "std"))]
extern crate std;

extern crate alloc;

pub use crate::{
    datetime::Subsecond,
    datetime::UtcDateTime,
    epoch::Epoch,
    error::{Error, ErrorKind},
    unit::{TimeUnit, TruncateUnit},
};

#[macro_use]
mod logging;

pub mod calendar;
mod datetime;
mod epoch;
mod error;
pub mod fmt;
pub mod iso;
mod unit;
mod util;

