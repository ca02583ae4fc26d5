//! Command line interface: each subcommand maps onto one library call.

use crate::models::{get_address_bytes, to_bytes};
use crate::output::AddressReport;
use crate::processing::{get_broadcast_address, get_network_address, get_subnet_address};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::error::Error;

#[derive(Parser, Debug)]
#[command(name = "dotted-quad")]
#[command(about = "IPv4 subnet and broadcast address calculator.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Broadcast address for an address and subnet mask
    #[command(alias = "b")]
    Broadcast { address: String, subnet_mask: String },
    /// Subnet mask for a prefix length
    #[command(alias = "s")]
    Subnet { address: String, prefix_length: u8 },
    /// Network address for an address and prefix length
    #[command(alias = "n")]
    Network { address: String, prefix_length: u8 },
    /// Octets of a dotted quad address
    Bytes { address: String },
    /// Pack a string of 0/1 bits into bytes, most significant bit first
    Bits { bits: String },
    /// Mask, network and broadcast address for an address
    #[command(alias = "r")]
    Report {
        address: String,
        prefix_length: u8,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Run one command and return the text to print.
pub fn run(command: &Commands) -> Result<String, Box<dyn Error>> {
    log::debug!("run({command:?})");
    let out = match command {
        Commands::Broadcast {
            address,
            subnet_mask,
        } => get_broadcast_address(address, subnet_mask)?,
        Commands::Subnet {
            address,
            prefix_length,
        } => get_subnet_address(address, *prefix_length)?,
        Commands::Network {
            address,
            prefix_length,
        } => get_network_address(address, *prefix_length)?,
        Commands::Bytes { address } => format!("{:?}", get_address_bytes(address)?),
        Commands::Bits { bits } => format!("{:?}", to_bytes(&parse_bits(bits)?)?),
        Commands::Report {
            address,
            prefix_length,
            json,
        } => {
            let report = AddressReport::new(address, *prefix_length)?;
            if *json {
                serde_json::to_string_pretty(&report)?
            } else {
                report.to_string()
            }
        }
    };
    Ok(out)
}

/// Print the outcome of [`run`], returning false on failure.
pub fn run_and_print(command: &Commands) -> bool {
    match run(command) {
        Ok(out) => {
            println!("{out}");
            true
        }
        Err(e) => {
            log::error!("{failed} {e}", failed = "failed".on_red());
            false
        }
    }
}

fn parse_bits(bits: &str) -> Result<Vec<bool>, Box<dyn Error>> {
    bits.chars()
        .filter(|c| *c != '_' && !c.is_whitespace())
        .map(|c| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            other => Err(format!("'{other}' is not a bit in '{bits}'").into()),
        })
        .collect()
}
