//! Subnet, network and broadcast address calculations on dotted quads.

use crate::error::Result;
use crate::models::{get_address_bytes, prefix_mask_bytes, to_dotted_quad_notation};

/// Calculate the broadcast address for an address and its subnet mask.
///
/// Address bits are kept where the mask is 1, set where the mask is 0.
/// The mask is not checked for contiguous bits.
///
/// # Examples
/// ```
/// use dotted_quad::get_broadcast_address;
/// assert_eq!(
///     get_broadcast_address("192.168.1.10", "255.255.255.0").unwrap(),
///     "192.168.1.255"
/// );
/// ```
pub fn get_broadcast_address(address: &str, subnet_mask: &str) -> Result<String> {
    let address_bytes = get_address_bytes(address)?;
    let subnet_bytes = get_address_bytes(subnet_mask)?;

    let broadcast_bytes: Vec<u8> = address_bytes
        .iter()
        .zip(subnet_bytes.iter())
        .map(|(a, s)| a | (s ^ 0xFF))
        .collect();
    log::trace!("broadcast({address}, {subnet_mask}) = {broadcast_bytes:?}");

    to_dotted_quad_notation(&broadcast_bytes)
}

/// Subnet mask for `prefix_len`, in dotted quad notation.
///
/// The address does not take part in the result and is not parsed, use
/// [`get_network_address`] for `address AND mask`.
///
/// # Examples
/// ```
/// use dotted_quad::get_subnet_address;
/// assert_eq!(get_subnet_address("192.168.1.10", 24).unwrap(), "255.255.255.0");
/// ```
pub fn get_subnet_address(_address: &str, prefix_len: u8) -> Result<String> {
    let mask = prefix_mask_bytes(prefix_len)?;
    to_dotted_quad_notation(&mask)
}

/// Network address of `address` for `prefix_len`.
///
/// # Examples
/// ```
/// use dotted_quad::get_network_address;
/// assert_eq!(get_network_address("192.168.1.10", 24).unwrap(), "192.168.1.0");
/// ```
pub fn get_network_address(address: &str, prefix_len: u8) -> Result<String> {
    let address_bytes = get_address_bytes(address)?;
    let mask = prefix_mask_bytes(prefix_len)?;

    let network_bytes: Vec<u8> = address_bytes
        .iter()
        .zip(mask.iter())
        .map(|(a, m)| a & m)
        .collect();
    to_dotted_quad_notation(&network_bytes)
}
