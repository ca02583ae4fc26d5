//! Dotted quad parsing and formatting.
//!
//! Converts between `"a.b.c.d"` strings and their network byte order octets.

use crate::error::{NetError, Result};
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;

/// Number of octets in an IPv4 address.
pub const ADDRESS_BYTES: usize = 4;

lazy_static! {
    static ref OCTET_RE: Regex = Regex::new(r"^[0-9]+$").expect("Invalid Regex?");
}

/// Convert a dotted quad IPv4 address into its four octets.
///
/// Each part must be plain decimal digits with a value of at most 255.
///
/// # Examples
/// ```
/// use dotted_quad::get_address_bytes;
/// assert_eq!(get_address_bytes("192.168.1.10").unwrap(), [192, 168, 1, 10]);
/// assert!(get_address_bytes("256.1.1.1").is_err());
/// ```
pub fn get_address_bytes(address: &str) -> Result<[u8; ADDRESS_BYTES]> {
    let parts: Vec<&str> = address.split('.').collect();
    if parts.len() != ADDRESS_BYTES {
        log::trace!("get_address_bytes({address}) got {} parts", parts.len());
        return Err(NetError::invalid_format(address));
    }

    let mut bytes = [0u8; ADDRESS_BYTES];
    for (byte, part) in bytes.iter_mut().zip(parts) {
        // u8::from_str also takes a leading '+'
        if !OCTET_RE.is_match(part) {
            return Err(NetError::invalid_format(address));
        }
        *byte = part
            .parse::<u8>()
            .map_err(|_| NetError::invalid_format(address))?;
    }
    Ok(bytes)
}

/// Convert bytes into dotted quad notation.
///
/// Any multiple of four bytes is accepted, all bytes are joined with `.`.
///
/// # Examples
/// ```
/// use dotted_quad::to_dotted_quad_notation;
/// assert_eq!(to_dotted_quad_notation(&[10, 0, 0, 1]).unwrap(), "10.0.0.1");
/// assert!(to_dotted_quad_notation(&[1, 2, 3]).is_err());
/// ```
pub fn to_dotted_quad_notation(bytes: &[u8]) -> Result<String> {
    if bytes.len() % ADDRESS_BYTES != 0 {
        return Err(NetError::InvalidLength {
            len: bytes.len(),
            expected: "a multiple of 4 bytes",
        });
    }
    Ok(bytes.iter().join("."))
}
