//! Borrowed-bit planning for equal-sized splits.
//!
//! Subnets are carved only from the last octet, so the plan is limited to
//! 8 borrowed bits.

use crate::error::SubnetError;
use crate::models::OCTET_BITS;

/// Parse the subnet count text given by the user.
pub fn parse_subnet_count(value: &str) -> Result<u32, SubnetError> {
    let trimmed = value.trim();
    let invalid = || SubnetError::InvalidSubnetCount {
        value: value.to_string(),
    };
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    match trimmed.parse::<u32>() {
        Ok(0) | Err(_) => Err(invalid()),
        Ok(count) => Ok(count),
    }
}

/// Number of bits to borrow for `count` subnets: `ceil(log2(count))`.
pub fn bits_needed(count: u32) -> Result<u8, SubnetError> {
    match count {
        0 => Err(SubnetError::InvalidSubnetCount {
            value: count.to_string(),
        }),
        1 => Ok(0),
        n => Ok((u32::BITS - (n - 1).leading_zeros()) as u8),
    }
}

/// Address increment between consecutive subnets: `2^(8 - bits)`.
pub fn stride(count: u32, bits: u8) -> Result<u16, SubnetError> {
    if bits > OCTET_BITS {
        return Err(SubnetError::SubnetRangeOverflow { count, bits });
    }
    Ok(1u16 << (OCTET_BITS - bits))
}
