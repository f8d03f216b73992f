//! Address normalization.

use crate::error::SubnetError;
use crate::models::{parse_octet, with_last_octet};
use std::net::Ipv4Addr;

/// Parse a dotted IPv4 address and zero its fourth octet.
///
/// The input is treated as a seed for the split, so `192.168.1.10` becomes
/// `192.168.1.0` whether or not it was already a network address.
pub fn normalize(address: &str) -> Result<Ipv4Addr, SubnetError> {
    let trimmed = address.trim();
    let segments: Vec<&str> = trimmed.split('.').collect();
    if segments.len() != 4 {
        return Err(SubnetError::address(
            address,
            format!("expected 4 octets, got {}", segments.len()),
        ));
    }

    let mut octets = [0u8; 4];
    for (i, segment) in segments.iter().enumerate() {
        octets[i] = parse_octet(segment).ok_or_else(|| {
            SubnetError::address(
                address,
                format!("octet {} '{segment}' is not a number 0-255", i + 1),
            )
        })?;
    }

    let normalized = with_last_octet(Ipv4Addr::from(octets), 0);
    log::debug!("normalize({trimmed}) -> {normalized}");
    Ok(normalized)
}
