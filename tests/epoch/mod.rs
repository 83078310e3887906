use std::num::NonZeroU32;

use utc_datetime::{Epoch, ErrorKind, TimeUnit, UtcDateTime};

#[test]
fn every_epoch_starts_at_zero() {
    for epoch in Epoch::ALL {
        let start = epoch.date();
        assert_eq!(start.to_epoch(epoch, TimeUnit::Second), 0, "{epoch}");
        assert_eq!(start.to_epoch(epoch, TimeUnit::Nanosecond), 0, "{epoch}");
        let got = UtcDateTime::from_epoch(0, epoch, TimeUnit::Second).unwrap();
        assert_eq!(got, start, "{epoch}");
    }
}

#[test]
fn names_roundtrip() -> crate::Result {
    for epoch in Epoch::ALL {
        assert_eq!(epoch.name().parse::<Epoch>()?, epoch);
        assert_eq!(epoch.to_string(), epoch.name());
    }
    let err = "julian".parse::<Epoch>().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidFormat);
    assert_eq!(err.to_string(), "unknown epoch name \"julian\"");
    Ok(())
}

#[test]
fn ntfs_file_times() -> crate::Result {
    let ticks = TimeUnit::PartsPerSecond(NonZeroU32::new(10_000_000).unwrap());
    let dt = UtcDateTime::from_rfc3339("1970-01-01T00:00:00Z")?;
    assert_eq!(dt.to_ntfs(ticks), 116_444_736_000_000_000);
    assert_eq!(UtcDateTime::from_ntfs(116_444_736_000_000_000, ticks)?, dt);
    assert_eq!(dt.to_ntfs(ticks), dt.to_epoch(Epoch::Win32, ticks));

    let before = UtcDateTime::from_rfc3339("1600-12-31T23:59:59Z")?;
    assert_eq!(before.to_ntfs(TimeUnit::Second), -1);
    Ok(())
}

#[test]
fn epoch_decode_range() {
    let dt = UtcDateTime::from_epoch(-1, Epoch::Go, TimeUnit::Second);
    assert_eq!(dt.unwrap().to_string(), "0000-12-31T23:59:59Z");

    let past_end = UtcDateTime::constant(9999, 12, 31, 23, 59, 59)
        .to_epoch(Epoch::Apple, TimeUnit::Second)
        + 1;
    let err = UtcDateTime::from_epoch(past_end, Epoch::Apple, TimeUnit::Second)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidUnixTime);
}
