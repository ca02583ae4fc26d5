//! Terminal output utilities.

use colored::Colorize;

/// Format a label as a right-aligned, bold field.
///
/// # Arguments
/// * `label` - The label to format
/// * `width` - The minimum width of the field
pub fn format_field<T: ToString>(label: T, width: usize) -> String {
    let label = label.to_string();
    format!("{label:>width$}").bold().to_string()
}
