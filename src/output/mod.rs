//! Output formatting for address calculations.
//!
//! - [`report`] - per address summary, as JSON or text
//! - [`terminal`] - terminal field formatting

mod report;
mod terminal;

pub use report::AddressReport;
pub use terminal::format_field;
