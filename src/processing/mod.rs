//! Address calculations.
//!
//! - [`subnet`] - subnet mask, network and broadcast addresses

mod subnet;

pub use subnet::{get_broadcast_address, get_network_address, get_subnet_address};
