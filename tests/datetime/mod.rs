use utc_datetime::{
    Epoch, ErrorKind, Subsecond, TimeUnit, TruncateUnit, UtcDateTime,
};

mod parse;

#[test]
fn offset_normalization() -> crate::Result {
    crate::init_logger();

    let dt = UtcDateTime::from_rfc3339("2015-01-23T23:50:07.123+02:30")?;
    assert_eq!(
        dt,
        UtcDateTime::new(2015, 1, 23, 21, 20, 7)?
            .with_subsecond(Subsecond::new(123_000, 3)?),
    );

    let dt = UtcDateTime::from_rfc3339("2015-01-23T23:50:07.123-02:30")?;
    assert_eq!(
        dt,
        UtcDateTime::new(2015, 1, 24, 2, 20, 7)?
            .with_subsecond(Subsecond::new(123_000, 3)?),
    );
    assert_eq!(dt.to_rfc3339(), "2015-01-24T02:20:07.123Z");
    Ok(())
}

#[test]
fn negative_zero_offset_is_rejected() {
    crate::init_logger();

    let err = UtcDateTime::from_rfc3339("2015-01-23T23:50:07.123-00:00")
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidFormat);
    assert_eq!(err.input(), Some("2015-01-23T23:50:07.123-00:00"));
}

#[test]
fn fields_validated_after_shape() {
    let kind = |input: &str| UtcDateTime::from_rfc3339(input).unwrap_err().kind();

    assert_eq!(kind("2015-13-12T23:50:07"), ErrorKind::InvalidMonth);
    assert_eq!(kind("2015-02-29T23:50:07"), ErrorKind::InvalidDay);
    assert_eq!(kind("2015-01-23T24:50:07"), ErrorKind::InvalidHour);
    assert_eq!(kind("2015-01-23T23:60:07"), ErrorKind::InvalidMinute);
    assert_eq!(kind("2015-01-23T23:50:60"), ErrorKind::InvalidSecond);
    assert_eq!(kind("2015-01-23T23:50:07+24:00"), ErrorKind::InvalidFormat);
    assert!(UtcDateTime::from_rfc3339("2016-02-29T23:50:07").is_ok());
}

#[test]
fn fraction_truncates() -> crate::Result {
    let dt = UtcDateTime::from_iso8601("2015-01-23T23:50:07.0123456")?;
    assert_eq!(dt.subsecond(), Subsecond::new(12_345, 6)?);
    assert_eq!(dt.to_iso8601(), "2015-01-23T23:50:07.012345Z");
    Ok(())
}

#[test]
fn unix_epoch_identity() -> crate::Result {
    let epoch = UtcDateTime::from_unix(0, TimeUnit::Second)?;
    assert_eq!(epoch.to_unix(TimeUnit::Second), 0);
    assert_eq!(epoch, Epoch::Unix.date());
    assert_eq!(epoch, UtcDateTime::from_rfc3339("1970-01-01T00:00:00Z")?);
    Ok(())
}

#[test]
fn negative_unix_times() -> crate::Result {
    let dt = UtcDateTime::from_unix(-62_167_219_200, TimeUnit::Second)?;
    assert_eq!(dt.to_string(), "0000-01-01T00:00:00Z");

    let err = UtcDateTime::from_unix(-62_167_219_201, TimeUnit::Second)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidUnixTime);
    Ok(())
}

#[test]
#[should_panic(expected = "outside the supported range of years")]
fn unix_or_panic() {
    UtcDateTime::from_unix_or_panic(-62_167_219_201, TimeUnit::Second);
}

#[test]
fn compare_ignores_precision() -> crate::Result {
    let dt = UtcDateTime::new(2015, 1, 23, 23, 50, 7)?;
    let a = dt.with_subsecond(Subsecond::new(100_000, 1)?);
    let b = dt.with_subsecond(Subsecond::new(100_000, 6)?);
    let c = dt.with_subsecond(Subsecond::new(120_000, 6)?);
    assert_eq!(a.cmp(&b), core::cmp::Ordering::Equal);
    assert!(a < c);

    let mut set = std::collections::HashSet::new();
    set.insert(a);
    assert!(set.contains(&b));
    Ok(())
}

#[test]
fn add_and_diff() -> crate::Result {
    let dt = UtcDateTime::from_rfc3339("2016-02-28T23:59:59.5Z")?;
    let later = dt.add(86_400, TimeUnit::Second);
    assert_eq!(later.to_rfc3339(), "2016-02-29T23:59:59.5Z");
    assert_eq!(later.diff(dt, TimeUnit::Second), 86_400);
    assert_eq!(dt.diff(later, TimeUnit::Nanosecond), -86_400_000_000_000);

    let err = UtcDateTime::new(i32::MIN, 1, 1, 0, 0, 0)?
        .checked_add(-1, TimeUnit::Second)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
    Ok(())
}

#[test]
fn diff_is_exact_across_millennia() -> crate::Result {
    let a = UtcDateTime::from_iso8601("-9999-01-01T00:00:00.000001Z")?;
    let b = UtcDateTime::from_iso8601("9999-12-31T23:59:59.999999Z")?;
    let micros = b.diff(a, TimeUnit::Microsecond);
    assert_eq!(micros, 631_139_039_999_999_998);
    assert_eq!(b.diff(a, TimeUnit::Nanosecond), micros * 1_000);
    Ok(())
}

#[test]
fn truncate() -> crate::Result {
    let dt = UtcDateTime::from_rfc3339("2017-11-06T00:23:51.1234Z")?;
    let ms = dt.truncate(TruncateUnit::Millisecond);
    assert_eq!(ms.subsecond(), Subsecond::new(123_000, 3)?);
    assert_eq!(ms.truncate(TruncateUnit::Millisecond).subsecond(), ms.subsecond());
    assert_eq!(dt.truncate(TruncateUnit::Second).to_string(), "2017-11-06T00:23:51Z");
    assert_eq!(dt.truncate(TruncateUnit::Microsecond).subsecond(), dt.subsecond());
    Ok(())
}

#[test]
fn now_is_recent() {
    crate::init_logger();

    let now = UtcDateTime::now();
    let later = UtcDateTime::now();
    assert!(now <= later);
    assert!(now.year() >= 2024);
}

#[test]
fn system_time_roundtrip() -> crate::Result {
    let dt = UtcDateTime::from_rfc3339("1601-01-01T00:00:00.000001Z")?;
    let st = std::time::SystemTime::from(dt);
    assert_eq!(UtcDateTime::try_from(st)?, dt);
    Ok(())
}
