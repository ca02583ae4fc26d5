// cargo watch -x 'fmt' -x 'test'

//! IPv4 dotted quad helpers: subnet mask, network and broadcast addresses,
//! plus conversions between dotted quad strings, bit sequences and bytes.

pub mod cmd;
pub mod config;
mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use error::{NetError, Result};
pub use models::{get_address_bytes, to_bytes, to_dotted_quad_notation};
pub use processing::{get_broadcast_address, get_network_address, get_subnet_address};
