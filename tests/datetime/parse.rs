use utc_datetime::{
    fmt::rfc3339::{DateTimeParser, DateTimePrinter},
    ErrorKind, UtcDateTime,
};

static STRICT: DateTimeParser = DateTimeParser::new();
static FLEXIBLE: DateTimeParser = DateTimeParser::new().iso8601(true);

#[test]
fn rfc3339_is_strict() {
    let kind = |input: &str| STRICT.parse(input).unwrap_err().kind();

    assert_eq!(kind("2015-01-23 23:50:07Z"), ErrorKind::InvalidFormat);
    assert_eq!(kind("-2015-01-23T23:50:07Z"), ErrorKind::InvalidFormat);
    assert_eq!(kind("12015-01-23T23:50:07Z"), ErrorKind::InvalidFormat);
    assert_eq!(kind("2015-01-23T23:50:07."), ErrorKind::InvalidFormat);
    assert_eq!(kind("2015-01-23T23:50:07Zjunk"), ErrorKind::InvalidFormat);
    assert_eq!(kind("2015-1-23T23:50:07Z"), ErrorKind::InvalidFormat);
    assert_eq!(kind(""), ErrorKind::InvalidFormat);
}

#[test]
fn iso8601_is_flexible() -> crate::Result {
    let dt = FLEXIBLE.parse("2015-01-23 23:50:07,5z")?;
    assert_eq!(dt.to_string(), "2015-01-23T23:50:07.5Z");

    let dt = FLEXIBLE.parse("-0001-12-31T23:59:59Z")?;
    assert_eq!(dt.year(), -1);
    assert_eq!(dt.to_string(), "-0001-12-31T23:59:59Z");

    let dt = FLEXIBLE.parse("12345-06-07T08:09:10Z")?;
    assert_eq!(dt.year(), 12_345);
    Ok(())
}

#[test]
fn offsets_without_colon() -> crate::Result {
    let want = UtcDateTime::from_rfc3339("2015-01-23T21:50:07Z")?;
    assert_eq!(STRICT.parse("2015-01-23T23:50:07+0200")?, want);
    assert_eq!(STRICT.parse("2015-01-23T23:50:07+02")?, want);
    assert_eq!(STRICT.parse("2015-01-23T19:50:07-02")?, want);
    Ok(())
}

#[test]
fn printer_is_configurable() -> crate::Result {
    let dt = UtcDateTime::from_rfc3339("2015-01-23T23:50:07.120Z")?;
    let printer = DateTimePrinter::new().lowercase(true);
    assert_eq!(printer.to_string(&dt), "2015-01-23t23:50:07.120z");

    let mut buf = String::new();
    DateTimePrinter::new().print(&dt, &mut buf).unwrap();
    assert_eq!(buf, "2015-01-23T23:50:07.120Z");
    Ok(())
}

#[test]
fn from_str_uses_iso8601() -> crate::Result {
    let dt: UtcDateTime = "2015-01-23 23:50:07Z".parse()?;
    assert_eq!(dt, UtcDateTime::from_iso8601("2015-01-23T23:50:07Z")?);
    Ok(())
}

#[test]
#[should_panic(expected = "failed to parse \"2015-13-12T23:50:07\"")]
fn rfc3339_or_panic() {
    UtcDateTime::from_rfc3339_or_panic("2015-13-12T23:50:07");
}
