//! Hex string parsing and formatting for SDK offsets and sizes.

use crate::error::{Error, Result};

/// Parse a hex offset/size string (with or without 0x prefix).
///
/// Surrounding whitespace is ignored. Signs, underscores and empty strings
/// are rejected.
///
/// # Examples
///
/// ```
/// use sdk_offsets_core::parse_hex;
///
/// assert_eq!(parse_hex("0x12C").unwrap(), 0x12C);
/// assert_eq!(parse_hex("12c").unwrap(), 0x12C);
/// assert_eq!(parse_hex(" 0X10 ").unwrap(), 0x10);
/// ```
pub fn parse_hex(s: &str) -> Result<u64> {
    let trimmed = s.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    // from_str_radix accepts a leading '+', SDK dumps never emit one
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::InvalidHex {
            value: s.to_string(),
        });
    }

    u64::from_str_radix(digits, 16).map_err(|_| Error::InvalidHex {
        value: s.to_string(),
    })
}

/// Format a value as a hex string with 0x prefix.
pub fn format_hex(value: u64) -> String {
    format!("0x{:X}", value)
}
