//! Address representations and conversions.
//!
//! - [`dotted_quad`] - dotted quad strings to octets and back
//! - [`bits`] - bit sequences and prefix masks to octets

mod bits;
mod dotted_quad;

// Re-export public types
pub use bits::{prefix_mask_bits, prefix_mask_bytes, to_bytes, MAX_LENGTH};
pub use dotted_quad::{get_address_bytes, to_dotted_quad_notation, ADDRESS_BYTES};
