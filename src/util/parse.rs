/*!
Byte level building blocks for the fixed width datetime grammar.

None of these report *why* they failed. The datetime grammar only ever
distinguishes "doesn't match the shape" from "matches, but a field is out of
range", so `None` is all a caller needs.
*/

/// Splits the given input into two slices at the given position.
///
/// If the position is greater than the length of the input, then this
/// returns `None`.
#[inline(always)]
pub(crate) fn split(input: &[u8], at: usize) -> Option<(&[u8], &[u8])> {
    if at > input.len() {
        None
    } else {
        Some(input.split_at(at))
    }
}

/// Splits off exactly `len` ASCII digits from the front of `input` and
/// returns their value along with the rest of the input.
///
/// `len` must be small enough for the value to fit in an `i64`.
#[inline(always)]
pub(crate) fn fixed(input: &[u8], len: usize) -> Option<(i64, &[u8])> {
    let (digits, rest) = split(input, len)?;
    Some((i64(digits)?, rest))
}

/// Returns the number of ASCII digits at the beginning of `input`.
#[inline(always)]
pub(crate) fn digit_len(input: &[u8]) -> usize {
    input.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Parses a non-empty sequence of ASCII digits as an unsigned integer.
///
/// This returns `None` if the input is empty, contains anything other than
/// an ASCII digit or would overflow an `i64`.
#[inline(always)]
pub(crate) fn i64(bytes: &[u8]) -> Option<i64> {
    if bytes.is_empty() {
        return None;
    }
    let mut n: i64 = 0;
    for &byte in bytes {
        let digit = byte.checked_sub(b'0').filter(|&d| d <= 9)?;
        n = n.checked_mul(10)?.checked_add(i64::from(digit))?;
    }
    Some(n)
}
