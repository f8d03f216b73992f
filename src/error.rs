//! Error types for the subnet engine.

use thiserror::Error;

/// Errors raised while normalizing, parsing or enumerating subnets.
///
/// Every variant carries the offending input so the caller can show it back
/// to the user.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubnetError {
    /// Address text is not four dot-separated decimal octets.
    #[error("invalid IPv4 address '{address}': {reason}")]
    InvalidAddressFormat {
        /// The address as given.
        address: String,
        /// What was wrong with it.
        reason: String,
    },

    /// Mask text is neither "/N" (0-32) nor dotted-decimal.
    #[error("invalid subnet mask '{mask}': expected /0-/32 or a.b.c.d")]
    InvalidMaskFormat {
        /// The mask as given.
        mask: String,
    },

    /// Dotted-decimal mask with a zero bit before a one bit.
    #[error("subnet mask '{mask}' is not contiguous ones followed by zeros")]
    NonContiguousMask {
        /// The mask as given.
        mask: String,
    },

    /// Requested subnet count is zero, negative or not an integer.
    #[error("invalid subnet count '{value}': expected a positive integer")]
    InvalidSubnetCount {
        /// The count as given.
        value: String,
    },

    /// The split does not fit in the last octet.
    #[error("{count} subnets need {bits} borrowed bits, the last octet only has 8")]
    SubnetRangeOverflow {
        /// Requested subnet count.
        count: u32,
        /// Bits the planner would need to borrow.
        bits: u8,
    },

    /// The split leaves no usable host addresses per subnet.
    #[error("{count} subnets leave {host_bits} host bit(s) per subnet, no usable hosts")]
    NoUsableHosts {
        /// Requested subnet count.
        count: u32,
        /// Host bits left in each subnet.
        host_bits: u8,
    },
}

impl SubnetError {
    pub(crate) fn address(address: &str, reason: impl Into<String>) -> Self {
        SubnetError::InvalidAddressFormat {
            address: address.to_string(),
            reason: reason.into(),
        }
    }
}
