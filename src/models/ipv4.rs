//! IPv4 address and prefix utilities.
//!
//! Thin helpers over [`Ipv4Addr`] used by the mask codec and the subnet
//! enumerator. Everything here works on whole 32-bit values or on single
//! octets; no heap allocation.

use crate::error::SubnetError;
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Bits in one octet.
pub const OCTET_BITS: u8 = 8;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use subnet_calculator::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, SubnetError> {
    if len > MAX_LENGTH {
        Err(SubnetError::InvalidMaskFormat {
            mask: format!("/{len}"),
        })
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Parse one decimal octet, rejecting signs, blanks and values above 255.
pub fn parse_octet(segment: &str) -> Option<u8> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse::<u8>().ok()
}

/// Return `addr` with its fourth octet replaced.
pub fn with_last_octet(addr: Ipv4Addr, last: u8) -> Ipv4Addr {
    let [a, b, c, _] = addr.octets();
    Ipv4Addr::new(a, b, c, last)
}

/// Whether the mask bits are ones followed only by zeros.
pub fn is_contiguous_mask(mask: u32) -> bool {
    // !mask must be of the form 0..01..1, so adding one yields a power of two
    let inverted = !mask;
    inverted & inverted.wrapping_add(1) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_cidr_mask() {
        assert_eq!(get_cidr_mask(0).unwrap(), 0x00000000);
        assert_eq!(get_cidr_mask(8).unwrap(), 0xFF000000);
        assert_eq!(get_cidr_mask(16).unwrap(), 0xFFFF0000);
        assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
        assert_eq!(get_cidr_mask(26).unwrap(), 0xFFFFFFC0);
        assert_eq!(get_cidr_mask(32).unwrap(), 0xFFFFFFFF);
        assert!(get_cidr_mask(33).is_err());
    }

    #[test]
    fn test_parse_octet() {
        assert_eq!(parse_octet("0"), Some(0));
        assert_eq!(parse_octet("255"), Some(255));
        assert_eq!(parse_octet("010"), Some(10));
        assert_eq!(parse_octet("256"), None);
        assert_eq!(parse_octet(""), None);
        assert_eq!(parse_octet("+1"), None);
        assert_eq!(parse_octet("-1"), None);
        assert_eq!(parse_octet(" 1"), None);
        assert_eq!(parse_octet("x"), None);
    }

    #[test]
    fn test_with_last_octet() {
        let ip = Ipv4Addr::new(192, 168, 1, 42);
        assert_eq!(with_last_octet(ip, 0), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(with_last_octet(ip, 255), Ipv4Addr::new(192, 168, 1, 255));
    }

    #[test]
    fn test_is_contiguous_mask() {
        assert!(is_contiguous_mask(0xFFFFFF00));
        assert!(is_contiguous_mask(0xFFFFFFFF));
        assert!(is_contiguous_mask(0x00000000));
        assert!(is_contiguous_mask(0xFFFFFFC0));
        assert!(!is_contiguous_mask(0xFF00FF00));
        assert!(!is_contiguous_mask(0x00FFFFFF));
        assert!(!is_contiguous_mask(0xFFFFFF01));
    }
}
