#![cfg_attr(fuzzing, no_main)]

use libfuzzer_sys::fuzz_target;

use utc_datetime::fmt::rfc3339::{DateTimeParser, DateTimePrinter};

mod shim;

fn do_fuzz(data: &[u8]) {
    const PARSER: DateTimeParser = DateTimeParser::new().iso8601(true);
    const PRINTER: DateTimePrinter = DateTimePrinter::new();

    let Ok(first) = PARSER.parse(data) else { return };
    let printed = PRINTER.to_string(&first);

    match PARSER.parse(&printed) {
        Ok(second) => {
            assert_eq!(
                first, second,
                "re-parsing `{printed}` produced a different datetime",
            );
            assert_eq!(
                first.subsecond(),
                second.subsecond(),
                "re-parsing `{printed}` changed the subsecond precision",
            );
        }
        Err(err) if cfg!(not(feature = "relaxed")) => {
            panic!(
                "failed to re-parse `{printed}` (printed from input \
                 {input:?}): {err}",
                input = String::from_utf8_lossy(data),
            );
        }
        Err(_) => {}
    }
}

fuzz_target!(|data: &[u8]| do_fuzz(data));

maybe_define_main!();
