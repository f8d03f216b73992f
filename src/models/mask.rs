//! Subnet mask parsing.
//!
//! A mask is accepted either as a CIDR prefix (`/24`) or as four decimal
//! octets (`255.255.255.0`). Dotted input is checked for byte range only;
//! use [`ParsedMask::is_contiguous`] to find masks with holes.

use super::ipv4::{get_cidr_mask, is_contiguous_mask, MAX_LENGTH, OCTET_BITS};
use crate::error::SubnetError;
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::fmt;

lazy_static! {
    static ref MASK_RE: Regex = Regex::new(
        r"^/([0-9]|[1-2][0-9]|3[0-2])$|^((25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)$"
    )
    .expect("Invalid mask Regex?");
}

/// A validated subnet mask.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedMask {
    /// The mask text as given, without surrounding whitespace.
    pub text: String,
    /// The mask as four octets.
    pub octets: [u8; 4],
    /// Number of zero bits across all four octets.
    pub host_bits: u8,
}

impl ParsedMask {
    /// The mask in dotted-decimal form.
    pub fn dotted(&self) -> String {
        self.octets.iter().join(".")
    }

    /// The mask as a single 32-bit value.
    pub fn bits(&self) -> u32 {
        u32::from_be_bytes(self.octets)
    }

    /// The mask as four 8-digit binary groups.
    pub fn dotted_binary(&self) -> String {
        to_dotted_binary(self.octets)
    }

    pub fn is_contiguous(&self) -> bool {
        is_contiguous_mask(self.bits())
    }

    /// Prefix length, only defined for contiguous masks.
    pub fn prefix_len(&self) -> Option<u8> {
        if self.is_contiguous() {
            Some(MAX_LENGTH - self.host_bits)
        } else {
            None
        }
    }
}

impl fmt::Display for ParsedMask {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.dotted())
    }
}

/// Check the mask text against the accepted shapes.
pub fn is_valid_mask(mask: &str) -> bool {
    MASK_RE.is_match(mask.trim())
}

/// Parse a mask in CIDR or dotted-decimal form.
///
/// # Examples
/// ```
/// use subnet_calculator::models::parse_mask;
/// let mask = parse_mask("/24").unwrap();
/// assert_eq!(mask.dotted(), "255.255.255.0");
/// assert_eq!(mask.host_bits, 8);
/// ```
pub fn parse_mask(mask: &str) -> Result<ParsedMask, SubnetError> {
    if !is_valid_mask(mask) {
        log::debug!("parse_mask({mask}) rejected by pattern");
        return Err(SubnetError::InvalidMaskFormat {
            mask: mask.to_string(),
        });
    }
    let mask = mask.trim();

    let octets = match mask.strip_prefix('/') {
        Some(prefix) => {
            let prefix: u8 = prefix.parse().map_err(|_| SubnetError::InvalidMaskFormat {
                mask: mask.to_string(),
            })?;
            cidr_to_octets(prefix)?
        }
        None => dotted_to_octets(mask)?,
    };

    let parsed = ParsedMask {
        text: mask.to_string(),
        octets,
        host_bits: count_host_bits(octets),
    };
    log::trace!(
        "parse_mask({mask}) -> {dotted} host_bits={host_bits}",
        dotted = parsed.dotted(),
        host_bits = parsed.host_bits
    );
    Ok(parsed)
}

/// Build the four octets of a `/prefix` mask.
pub fn cidr_to_octets(prefix: u8) -> Result<[u8; 4], SubnetError> {
    Ok(get_cidr_mask(prefix)?.to_be_bytes())
}

fn dotted_to_octets(mask: &str) -> Result<[u8; 4], SubnetError> {
    let mut octets = [0u8; 4];
    for (slot, part) in octets.iter_mut().zip(mask.split('.')) {
        *slot = part.parse().map_err(|_| SubnetError::InvalidMaskFormat {
            mask: mask.to_string(),
        })?;
    }
    Ok(octets)
}

/// Count the zero bits across the four octets.
pub fn count_host_bits(octets: [u8; 4]) -> u8 {
    octets
        .iter()
        .map(|o| OCTET_BITS - o.count_ones() as u8)
        .sum()
}

/// Render four octets as `11000000.10101000.00000001.00000000`.
pub fn to_dotted_binary(octets: [u8; 4]) -> String {
    octets.iter().map(|o| format!("{o:08b}")).join(".")
}

/// Usable addresses for a block with `host_bits` zero bits: `2^h - 2`.
///
/// `None` for `host_bits == 0`, where the formula would give -1, and for
/// anything wider than an IPv4 address.
pub fn host_address_capacity(host_bits: u8) -> Option<u64> {
    if host_bits == 0 || host_bits > MAX_LENGTH {
        return None;
    }
    Some((1u64 << host_bits) - 2)
}
