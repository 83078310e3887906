/*!
Calendar predicates shared by the parser, the field validator and the epoch
table.

These are `const` so that the epoch table and `UtcDateTime::constant` can be
evaluated at compile time.
*/

/// Returns true if and only if the given year is a leap year in the
/// proleptic Gregorian calendar.
///
/// A leap year is a year with 366 days. Typical years have 365 days. This
/// works for year zero and negative years too, e.g., `0`, `-4` and `-400`
/// are leap years but `-100` is not.
#[inline]
pub(crate) const fn is_leap_year(year: i64) -> bool {
    let d = if year % 25 != 0 { 4 } else { 16 };
    (year % d) == 0
}

/// Returns the number of days in the given year and month.
///
/// When the given month is not in `1..=12`, this returns `0`. Callers can
/// therefore treat every day as invalid for an invalid month.
#[inline]
pub(crate) const fn days_in_month(year: i64, month: i8) -> i8 {
    if month < 1 || month > 12 {
        return 0;
    }
    if month == 2 {
        if is_leap_year(year) {
            29
        } else {
            28
        }
    } else {
        30 | (month ^ month >> 3)
    }
}
