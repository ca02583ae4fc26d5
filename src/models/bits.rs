//! Bit sequence packing and prefix masks.

use crate::error::{NetError, Result};

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Pack bits into bytes, 8 bits per byte, most significant bit first.
///
/// # Examples
/// ```
/// use dotted_quad::to_bytes;
/// let bits = [true, false, false, false, false, false, false, true];
/// assert_eq!(to_bytes(&bits).unwrap(), vec![0x81]);
/// ```
pub fn to_bytes(bits: &[bool]) -> Result<Vec<u8>> {
    if bits.len() % 8 != 0 {
        return Err(NetError::InvalidLength {
            len: bits.len(),
            expected: "a multiple of 8 bits",
        });
    }
    let bytes = bits
        .chunks_exact(8)
        .map(|chunk| {
            chunk
                .iter()
                .fold(0u8, |byte, &bit| (byte << 1) | u8::from(bit))
        })
        .collect();
    Ok(bytes)
}

/// The 32 mask bits for a prefix length, the first `len` set.
pub fn prefix_mask_bits(len: u8) -> Result<[bool; MAX_LENGTH as usize]> {
    if len > MAX_LENGTH {
        return Err(NetError::InvalidLength {
            len: len as usize,
            expected: "a prefix of at most 32 bits",
        });
    }
    let mut bits = [false; MAX_LENGTH as usize];
    bits.iter_mut().take(len as usize).for_each(|b| *b = true);
    Ok(bits)
}

/// Convert a prefix length into the four octets of its subnet mask.
///
/// # Examples
/// ```
/// use dotted_quad::models::prefix_mask_bytes;
/// assert_eq!(prefix_mask_bytes(20).unwrap(), [255, 255, 240, 0]);
/// ```
pub fn prefix_mask_bytes(len: u8) -> Result<[u8; 4]> {
    let bytes = to_bytes(&prefix_mask_bits(len)?)?;
    let mut mask = [0u8; 4];
    mask.copy_from_slice(&bytes);
    Ok(mask)
}
