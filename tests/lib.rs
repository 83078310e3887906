mod calendar;
mod datetime;
mod epoch;

/// A type alias we use for tests.
///
/// Most of these tests exercise fallible constructors in sequence, and `?`
/// reads better than a wall of `unwrap()`.
type Result = std::result::Result<(), utc_datetime::Error>;

/// Initializes `env_logger` once per test binary. Calling this more than
/// once is harmless.
fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
