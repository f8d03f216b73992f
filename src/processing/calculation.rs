//! End-to-end calculation from the three raw inputs.

use super::enumerate::{check_mask, warn_if_oversplit, CalcOptions, SplitPlan};
use super::normalize::normalize;
use crate::error::SubnetError;
use crate::models::{host_address_capacity, to_dotted_binary, ParsedMask, SubnetRecord};
use serde::Serialize;
use std::net::Ipv4Addr;

/// Result of one calculation: the plan and every subnet it produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Calculation {
    /// Base address with the fourth octet zeroed.
    pub network: Ipv4Addr,
    /// [`Calculation::network`] as four binary groups.
    pub network_binary: String,
    /// The parsed mask.
    pub mask: ParsedMask,
    /// Usable addresses covered by the mask, `2^host_bits - 2`.
    ///
    /// `None` for /31 and /32 style masks, which leave no usable host.
    pub mask_host_capacity: Option<u64>,
    /// Borrowed bits, stride and per-subnet capacity.
    pub plan: SplitPlan,
    /// The subnets in ascending order.
    pub subnets: Vec<SubnetRecord>,
}

/// Normalize, parse, plan and enumerate in one call.
///
/// # Examples
/// ```
/// use subnet_calculator::{calculate, CalcOptions};
/// let calc = calculate("192.168.1.10", "/24", 4, CalcOptions::default()).unwrap();
/// assert_eq!(calc.network.to_string(), "192.168.1.0");
/// assert_eq!(calc.plan.stride, 64);
/// assert_eq!(calc.subnets[3].broadcast.to_string(), "192.168.1.255");
/// ```
pub fn calculate(
    address: &str,
    mask: &str,
    count: u32,
    options: CalcOptions,
) -> Result<Calculation, SubnetError> {
    log::info!("calculate({address}, {mask}, {count})");

    let network = normalize(address)?;
    let mask = check_mask(mask, options)?;
    let plan = SplitPlan::new(count)?;
    warn_if_oversplit(&plan, &mask);
    let subnets = plan.records(network, &mask.text)?;

    log::info!(
        "calculate() -> {} subnets of {} hosts from {network}",
        subnets.len(),
        plan.host_count
    );
    Ok(Calculation {
        network,
        network_binary: to_dotted_binary(network.octets()),
        mask_host_capacity: host_address_capacity(mask.host_bits).filter(|&c| c > 0),
        mask,
        plan,
        subnets,
    })
}
