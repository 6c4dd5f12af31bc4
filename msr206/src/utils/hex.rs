// msr206/src/utils/hex.rs
//! Hexadecimal helpers backing the raw-data textual encoding.
//!
//! Raw track payloads cross the API boundary as lowercase hex strings, even
//! length, two digits per byte. `parse_hex` is the strict inverse used by the
//! write-raw path; `bytes_to_hex_spaced` exists for debug logging only.

use crate::{Error, Result};

/// Convert a byte slice to a lowercase hex string without separators.
///
/// Example: `&[0xde, 0xad]` -> `"dead"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        use std::fmt::Write;
        // write! never fails writing to a String
        let _ = write!(&mut s, "{:02x}", b);
    }
    s
}

/// Convert a byte slice to a lowercase hex string with a single space between
/// each byte.
///
/// Example: `&[0xde, 0xad]` -> `"de ad"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }
        use std::fmt::Write;
        let _ = write!(&mut s, "{:02x}", b);
    }
    s
}

/// Parse a hex string into bytes.
///
/// Accepts upper- or lowercase digits; length must be even. This is the
/// round-trip inverse of [`bytes_to_hex`] and the validation gate for
/// write-raw payloads.
pub fn parse_hex(s: &str) -> Result<Vec<u8>> {
    if s.len() % 2 != 0 {
        return Err(Error::OddHexLength { len: s.len() });
    }

    let mut out = Vec::with_capacity(s.len() / 2);
    for (i, pair) in s.as_bytes().chunks(2).enumerate() {
        let hi = hex_value(pair[0]).ok_or(Error::InvalidHexDigit {
            ch: pair[0] as char,
            offset: i * 2,
        })?;
        let lo = hex_value(pair[1]).ok_or(Error::InvalidHexDigit {
            ch: pair[1] as char,
            offset: i * 2 + 1,
        })?;
        out.push(hi << 4 | lo);
    }
    Ok(out)
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
