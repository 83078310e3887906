use utc_datetime::{
    calendar::{Iso, NaiveDateTime, OffsetDateTime},
    ErrorKind, Subsecond, UtcDateTime,
};

fn local(hour: i8, utc_offset: i32, std_offset: i32) -> OffsetDateTime {
    OffsetDateTime {
        calendar: Iso,
        year: 2015,
        month: 1,
        day: 23,
        hour,
        minute: 50,
        second: 7,
        subsecond: Subsecond::constant(123_000, 3),
        utc_offset,
        std_offset,
        zone_abbr: "XST".to_string(),
        time_zone: "Test/Zone".to_string(),
    }
}

#[test]
fn offset_aware_to_utc() -> crate::Result {
    let dt = UtcDateTime::from_offset_aware(&local(23, 9_000, 0))?;
    assert_eq!(dt.to_string(), "2015-01-23T21:20:07.123Z");

    let dt = UtcDateTime::from_offset_aware(&local(23, -9_000, 0))?;
    assert_eq!(dt.to_string(), "2015-01-24T02:20:07.123Z");

    let dt = UtcDateTime::from_offset_aware(&local(23, -3_600, 3_600))?;
    assert_eq!(dt.to_string(), "2015-01-23T23:50:07.123Z");
    Ok(())
}

#[test]
fn offset_aware_validates() {
    let err = UtcDateTime::from_offset_aware(&local(24, 0, 0)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidHour);
}

#[test]
fn utc_relabeling() -> crate::Result {
    let dt = UtcDateTime::from_rfc3339("2015-01-23T23:50:07.123Z")?;
    let aware = dt.to_offset_aware();
    assert_eq!((aware.utc_offset, aware.std_offset), (0, 0));
    assert_eq!(aware.zone_abbr, "UTC");
    assert_eq!(aware.time_zone, "Etc/UTC");
    assert_eq!(aware.subsecond, dt.subsecond());
    assert_eq!(UtcDateTime::from_offset_aware(&aware)?, dt);

    let naive: NaiveDateTime = dt.to_naive();
    assert_eq!(
        (naive.hour, naive.minute, naive.second, naive.subsecond.value()),
        (23, 50, 7, 123_000),
    );
    assert_eq!(UtcDateTime::from_naive(&naive)?, dt);
    Ok(())
}
