//! Domain models for the subnet calculator.
//!
//! This module contains the core data structures and conversions:
//! - [`ipv4`] - prefix and octet helpers over [`std::net::Ipv4Addr`]
//! - [`ParsedMask`] - validated subnet mask (CIDR or dotted-decimal)
//! - [`SubnetRecord`] - one row of an enumerated split

mod ipv4;
mod mask;
mod subnet;

// Re-export public types
pub use ipv4::{
    get_cidr_mask, is_contiguous_mask, parse_octet, with_last_octet, MAX_LENGTH, OCTET_BITS,
};
pub use mask::{
    cidr_to_octets, count_host_bits, host_address_capacity, is_valid_mask, parse_mask,
    to_dotted_binary, ParsedMask,
};
pub use subnet::SubnetRecord;
