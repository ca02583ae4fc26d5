//! Error type shared by all address conversions.

use thiserror::Error;

/// Failure of a dotted-quad, byte or bit conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetError {
    /// The text does not split into exactly four byte values.
    #[error("'{input}' is not a valid dotted quad IPv4 address")]
    InvalidFormat { input: String },
    /// A byte or bit sequence (or a prefix length) does not fit the conversion.
    #[error("invalid length {len}, expected {expected}")]
    InvalidLength { len: usize, expected: &'static str },
}

impl NetError {
    pub(crate) fn invalid_format(input: &str) -> Self {
        NetError::InvalidFormat {
            input: input.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, NetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            NetError::invalid_format("1.2.3").to_string(),
            "'1.2.3' is not a valid dotted quad IPv4 address"
        );
        let err = NetError::InvalidLength {
            len: 3,
            expected: "a multiple of 4 bytes",
        };
        assert_eq!(
            err.to_string(),
            "invalid length 3, expected a multiple of 4 bytes"
        );
    }
}
