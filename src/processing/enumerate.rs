//! Equal-sized subnet enumeration within the last octet.

use super::planner::{bits_needed, stride};
use crate::error::SubnetError;
use crate::models::{
    host_address_capacity, parse_mask, with_last_octet, ParsedMask, SubnetRecord, OCTET_BITS,
};
use serde::Serialize;
use std::net::Ipv4Addr;

/// Host bits a subnet needs to have at least one usable address pair.
const MIN_HOST_BITS: u8 = 2;

/// Switches that tighten validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CalcOptions {
    /// Reject dotted-decimal masks whose ones are not contiguous.
    pub strict_mask: bool,
}

/// Borrowed bits, stride and per-subnet capacity for one requested count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SplitPlan {
    /// Requested number of subnets.
    pub count: u32,
    /// Bits borrowed from the last octet.
    pub bits: u8,
    /// Address increment between subnets.
    pub stride: u16,
    /// Usable hosts in every subnet.
    pub host_count: u32,
}

impl SplitPlan {
    pub fn new(count: u32) -> Result<SplitPlan, SubnetError> {
        let bits = bits_needed(count)?;
        let stride = stride(count, bits)?;
        let host_bits = OCTET_BITS - bits;
        if host_bits < MIN_HOST_BITS {
            return Err(SubnetError::NoUsableHosts { count, host_bits });
        }
        let host_count = host_address_capacity(host_bits)
            .and_then(|c| u32::try_from(c).ok())
            .ok_or(SubnetError::NoUsableHosts { count, host_bits })?;

        log::debug!(
            "SplitPlan count={count} bits={bits} stride={stride} hosts/subnet={host_count}"
        );
        Ok(SplitPlan {
            count,
            bits,
            stride,
            host_count,
        })
    }

    /// Walk the last octet of `base` from 0 in `stride` steps.
    pub fn records(&self, base: Ipv4Addr, mask: &str) -> Result<Vec<SubnetRecord>, SubnetError> {
        let overflow = || SubnetError::SubnetRangeOverflow {
            count: self.count,
            bits: self.bits,
        };

        let mut cursor: u16 = 0;
        let mut records = Vec::with_capacity(self.count as usize);
        for i in 0..self.count as usize {
            let network = u8::try_from(cursor).map_err(|_| overflow())?;
            let broadcast = u8::try_from(cursor + self.stride - 1).map_err(|_| overflow())?;

            let record = SubnetRecord {
                index: i + 1,
                host_count: self.host_count,
                network: with_last_octet(base, network),
                first_host: with_last_octet(base, network + 1),
                last_host: with_last_octet(base, broadcast - 1),
                broadcast: with_last_octet(base, broadcast),
                mask: mask.to_string(),
            };
            log::trace!("{record}");
            records.push(record);

            cursor += self.stride;
        }
        Ok(records)
    }
}

/// Parse the mask and apply the options to it.
pub fn check_mask(mask: &str, options: CalcOptions) -> Result<ParsedMask, SubnetError> {
    let parsed = parse_mask(mask)?;
    if options.strict_mask && !parsed.is_contiguous() {
        return Err(SubnetError::NonContiguousMask {
            mask: mask.to_string(),
        });
    }
    Ok(parsed)
}

/// Subnets always span the whole last octet, even when the mask leaves
/// fewer host bits than that. The split still runs, only the log records it.
pub(crate) fn warn_if_oversplit(plan: &SplitPlan, mask: &ParsedMask) -> bool {
    let oversplit = mask.host_bits < OCTET_BITS;
    if oversplit {
        log::warn!(
            "{count} subnets of {stride} addresses are carved from the last octet but mask {text} only has {host_bits} host bits",
            count = plan.count,
            stride = plan.stride,
            text = mask.text,
            host_bits = mask.host_bits
        );
    }
    oversplit
}

/// Split the last octet of `base` into `count` equal subnets.
///
/// The fourth octet of `base` is ignored; enumeration always starts at 0.
pub fn enumerate(base: Ipv4Addr, mask: &str, count: u32) -> Result<Vec<SubnetRecord>, SubnetError> {
    enumerate_with(base, mask, count, CalcOptions::default())
}

/// [`enumerate`] with explicit validation options.
pub fn enumerate_with(
    base: Ipv4Addr,
    mask: &str,
    count: u32,
    options: CalcOptions,
) -> Result<Vec<SubnetRecord>, SubnetError> {
    let parsed = check_mask(mask, options)?;
    let plan = SplitPlan::new(count)?;
    warn_if_oversplit(&plan, &parsed);
    plan.records(with_last_octet(base, 0), &parsed.text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumerate_four_of_24() {
        let base = Ipv4Addr::new(192, 168, 1, 0);
        let subnets = enumerate(base, "/24", 4).unwrap();
        assert_eq!(subnets.len(), 4);

        let first = &subnets[0];
        assert_eq!(first.index, 1);
        assert_eq!(first.network, Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(first.first_host, Ipv4Addr::new(192, 168, 1, 1));
        assert_eq!(first.last_host, Ipv4Addr::new(192, 168, 1, 62));
        assert_eq!(first.broadcast, Ipv4Addr::new(192, 168, 1, 63));
        assert_eq!(first.host_count, 62);
        assert_eq!(first.mask, "/24");

        let last = &subnets[3];
        assert_eq!(last.index, 4);
        assert_eq!(last.network, Ipv4Addr::new(192, 168, 1, 192));
        assert_eq!(last.broadcast, Ipv4Addr::new(192, 168, 1, 255));
    }

    #[test]
    fn test_enumerate_single_subnet() {
        let subnets = enumerate(Ipv4Addr::new(10, 1, 2, 0), "/24", 1).unwrap();
        assert_eq!(subnets.len(), 1);
        assert_eq!(subnets[0].broadcast, Ipv4Addr::new(10, 1, 2, 255));
        assert_eq!(subnets[0].last_host, Ipv4Addr::new(10, 1, 2, 254));
        assert_eq!(subnets[0].host_count, 254);
    }

    #[test]
    fn test_enumerate_ignores_base_last_octet() {
        let a = enumerate(Ipv4Addr::new(10, 0, 0, 77), "/24", 2).unwrap();
        let b = enumerate(Ipv4Addr::new(10, 0, 0, 0), "/24", 2).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_enumerate_ascending_and_contiguous() {
        let subnets = enumerate(Ipv4Addr::new(10, 0, 0, 0), "/24", 16).unwrap();
        for pair in subnets.windows(2) {
            let next = u32::from(pair[0].broadcast) + 1;
            assert_eq!(u32::from(pair[1].network), next);
        }
        assert_eq!(subnets[15].broadcast, Ipv4Addr::new(10, 0, 0, 255));
    }

    #[test]
    fn test_enumerate_keeps_mask_text() {
        let subnets = enumerate(Ipv4Addr::new(10, 0, 0, 0), "255.255.255.0", 2).unwrap();
        assert!(subnets.iter().all(|s| s.mask == "255.255.255.0"));
    }

    #[test]
    fn test_enumerate_too_many_subnets() {
        assert_eq!(
            enumerate(Ipv4Addr::new(10, 0, 0, 0), "/24", 257).unwrap_err(),
            SubnetError::SubnetRangeOverflow {
                count: 257,
                bits: 9
            }
        );
    }

    #[test]
    fn test_enumerate_no_usable_hosts() {
        assert_eq!(
            enumerate(Ipv4Addr::new(10, 0, 0, 0), "/24", 128).unwrap_err(),
            SubnetError::NoUsableHosts {
                count: 128,
                host_bits: 1
            }
        );
        assert!(enumerate(Ipv4Addr::new(10, 0, 0, 0), "/24", 256).is_err());
        // 64 subnets of 4 addresses is the smallest usable split
        let subnets = enumerate(Ipv4Addr::new(10, 0, 0, 0), "/24", 64).unwrap();
        assert_eq!(subnets[63].network, Ipv4Addr::new(10, 0, 0, 252));
        assert_eq!(subnets[63].host_count, 2);
    }

    #[test]
    fn test_enumerate_bad_inputs() {
        let base = Ipv4Addr::new(10, 0, 0, 0);
        assert!(matches!(
            enumerate(base, "/33", 2),
            Err(SubnetError::InvalidMaskFormat { .. })
        ));
        assert!(matches!(
            enumerate(base, "/24", 0),
            Err(SubnetError::InvalidSubnetCount { .. })
        ));
    }

    #[test]
    fn test_strict_mask() {
        let base = Ipv4Addr::new(10, 0, 0, 0);
        let strict = CalcOptions { strict_mask: true };
        assert!(enumerate(base, "255.0.255.0", 2).is_ok());
        assert_eq!(
            enumerate_with(base, "255.0.255.0", 2, strict).unwrap_err(),
            SubnetError::NonContiguousMask {
                mask: "255.0.255.0".to_string()
            }
        );
        assert!(enumerate_with(base, "255.255.255.0", 2, strict).is_ok());
    }

    #[test]
    fn test_records_inconsistent_plan_overflows() {
        // 5 strides of 64 run past the last octet
        let plan = SplitPlan {
            count: 5,
            bits: 2,
            stride: 64,
            host_count: 62,
        };
        assert_eq!(
            plan.records(Ipv4Addr::new(10, 0, 0, 0), "/24").unwrap_err(),
            SubnetError::SubnetRangeOverflow { count: 5, bits: 2 }
        );

        // the last subnet would end at 256
        let plan = SplitPlan {
            count: 1,
            bits: 0,
            stride: 257,
            host_count: 255,
        };
        assert!(plan.records(Ipv4Addr::new(10, 0, 0, 0), "/24").is_err());
    }

    #[test]
    fn test_warn_if_oversplit() {
        let plan = SplitPlan::new(4).unwrap();
        assert!(!warn_if_oversplit(&plan, &parse_mask("/24").unwrap()));
        assert!(!warn_if_oversplit(&plan, &parse_mask("/16").unwrap()));
        assert!(warn_if_oversplit(&plan, &parse_mask("/26").unwrap()));
        assert!(warn_if_oversplit(&plan, &parse_mask("/32").unwrap()));
    }

    #[test]
    fn test_split_plan() {
        let plan = SplitPlan::new(5).unwrap();
        assert_eq!(plan.bits, 3);
        assert_eq!(plan.stride, 32);
        assert_eq!(plan.host_count, 30);
    }
}
