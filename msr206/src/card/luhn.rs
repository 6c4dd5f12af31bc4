// msr206/src/card/luhn.rs

//! Luhn mod-10 check digit computation and verification.
//!
//! The weighting runs right to left: in a full number the rightmost digit
//! (the check digit) sits at offset 0 and stays untouched, every digit at an
//! odd offset is doubled, and doubled values above 9 have 9 subtracted. A
//! number verifies when the sum is divisible by 10.

use crate::{Error, Result};

/// Compute the check digit for a partial number (check digit not yet
/// appended). Fails on non-digit input.
pub fn check_digit(partial: &str) -> Result<u8> {
    Ok(check_digit_of(&digit_values(partial)?))
}

/// Append the computed check digit to a partial number.
pub fn append_check_digit(partial: &str) -> Result<String> {
    let digit = check_digit(partial)?;
    let mut full = partial.to_string();
    full.push(char::from(b'0' + digit));
    Ok(full)
}

/// Verify a full number, check digit included.
///
/// Returns false for empty input or anything containing a non-digit.
pub fn verify(number: &str) -> bool {
    match digit_values(number) {
        Ok(digits) if !digits.is_empty() => weighted_sum(&digits, 1) % 10 == 0,
        _ => false,
    }
}

/// Check digit over raw digit values. Infallible; used by the generator,
/// which builds its numbers digit by digit.
pub(crate) fn check_digit_of(partial: &[u8]) -> u8 {
    // Once the check digit is appended the partial's rightmost digit moves
    // to offset 1, so the doubling parity starts at the partial's own
    // rightmost digit.
    let sum = weighted_sum(partial, 0);
    ((10 - sum % 10) % 10) as u8
}

/// Weighted Luhn sum. `first_doubled_offset` selects which offset from the
/// right gets doubled first (0 for partials, 1 for full numbers).
fn weighted_sum(digits: &[u8], first_doubled_offset: u32) -> u32 {
    digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            let d = d as u32;
            if i as u32 % 2 == first_doubled_offset % 2 {
                let doubled = d * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                d
            }
        })
        .sum()
}

fn digit_values(s: &str) -> Result<Vec<u8>> {
    s.chars()
        .map(|ch| match ch.to_digit(10) {
            Some(d) => Ok(d as u8),
            None => Err(Error::NonDigit { ch }),
        })
        .collect()
}
