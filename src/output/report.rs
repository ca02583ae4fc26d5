//! Summary of one address and prefix length.

use super::terminal::format_field;
use crate::error::Result;
use crate::processing::{get_broadcast_address, get_network_address, get_subnet_address};
use serde::Serialize;

const LABEL_WIDTH: usize = 12;

/// Mask, network and broadcast address derived from one address.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AddressReport {
    /// The address as given.
    pub address: String,
    /// Prefix length (0-32).
    pub prefix_length: u8,
    /// Subnet mask for the prefix length.
    pub subnet_mask: String,
    /// `address AND subnet_mask`.
    pub network: String,
    /// Highest address in the subnet.
    pub broadcast: String,
}

impl AddressReport {
    /// Build the report for `address` with prefix length `prefix_length`.
    pub fn new(address: &str, prefix_length: u8) -> Result<AddressReport> {
        let subnet_mask = get_subnet_address(address, prefix_length)?;
        let network = get_network_address(address, prefix_length)?;
        let broadcast = get_broadcast_address(address, &subnet_mask)?;
        Ok(AddressReport {
            address: address.to_string(),
            prefix_length,
            subnet_mask,
            network,
            broadcast,
        })
    }
}

impl std::fmt::Display for AddressReport {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(
            f,
            "{}  {}/{}",
            format_field("address", LABEL_WIDTH),
            self.address,
            self.prefix_length
        )?;
        writeln!(
            f,
            "{}  {}",
            format_field("subnet_mask", LABEL_WIDTH),
            self.subnet_mask
        )?;
        writeln!(f, "{}  {}", format_field("network", LABEL_WIDTH), self.network)?;
        write!(
            f,
            "{}  {}",
            format_field("broadcast", LABEL_WIDTH),
            self.broadcast
        )
    }
}
