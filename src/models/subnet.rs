//! Subnet record produced by the enumerator.

use serde::Serialize;
use std::fmt;
use std::net::Ipv4Addr;

/// One subnet of an equal-sized split.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetRecord {
    /// Position in the split, starting at 1.
    pub index: usize,
    /// Number of usable host addresses.
    pub host_count: u32,
    /// Network address.
    pub network: Ipv4Addr,
    /// First usable host address.
    pub first_host: Ipv4Addr,
    /// Last usable host address.
    pub last_host: Ipv4Addr,
    /// Broadcast address.
    pub broadcast: Ipv4Addr,
    /// Mask text as given by the caller.
    pub mask: String,
}

impl SubnetRecord {
    /// Address range shown in the report, `network - last host`.
    pub fn address_range(&self) -> String {
        format!("{} - {}", self.network, self.last_host)
    }
}

impl fmt::Display for SubnetRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "#{} {} hosts={} first={} broadcast={} mask={}",
            self.index,
            self.address_range(),
            self.host_count,
            self.first_host,
            self.broadcast,
            self.mask
        )
    }
}
