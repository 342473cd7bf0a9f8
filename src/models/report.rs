//! Reconciliation output types.

use super::{AddressRange, Allocation, Ipv4, UnassignedSubnet};
use serde::Serialize;
use std::fmt;

/// Classification of one sub-range of a dedicated block.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Status {
    Used,
    Unused,
    NoAddressSpaceAssigned,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Used => write!(f, "Used"),
            Status::Unused => write!(f, "Unused"),
            Status::NoAddressSpaceAssigned => write!(f, "No address space assigned"),
        }
    }
}

/// One report row: a CIDR-aligned sub-range with its classification.
///
/// `cidr` is `None` only for [`Status::NoAddressSpaceAssigned`] placeholder
/// rows, which are informational and consume no address space.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedBlock {
    pub cidr: Option<Ipv4>,
    pub status: Status,
    pub subnet_name: String,
    pub vnet_name: String,
    pub resource_group: String,
    pub subscription: String,
    pub region: String,
}

impl ClassifiedBlock {
    pub fn used(cidr: Ipv4, allocation: &Allocation) -> ClassifiedBlock {
        ClassifiedBlock {
            cidr: Some(cidr),
            status: Status::Used,
            subnet_name: allocation.subnet_name.clone(),
            vnet_name: allocation.vnet_name.clone(),
            resource_group: allocation.resource_group.clone(),
            subscription: allocation.subscription.clone(),
            region: allocation.region.clone(),
        }
    }

    pub fn unused(cidr: Ipv4) -> ClassifiedBlock {
        ClassifiedBlock {
            cidr: Some(cidr),
            status: Status::Unused,
            subnet_name: String::new(),
            vnet_name: String::new(),
            resource_group: String::new(),
            subscription: String::new(),
            region: String::new(),
        }
    }

    pub fn unassigned(subnet: &UnassignedSubnet) -> ClassifiedBlock {
        ClassifiedBlock {
            cidr: None,
            status: Status::NoAddressSpaceAssigned,
            subnet_name: subnet.subnet_name.clone(),
            vnet_name: subnet.vnet_name.clone(),
            resource_group: subnet.resource_group.clone(),
            subscription: subnet.subscription.clone(),
            region: subnet.region.clone(),
        }
    }

    /// The integer range this row covers, if any.
    pub fn range(&self) -> Option<AddressRange> {
        self.cidr.map(|c| c.range())
    }

    /// Base address column, "N/A" for placeholder rows.
    pub fn address(&self) -> String {
        match self.cidr {
            Some(c) => c.lo().to_string(),
            None => "N/A".to_string(),
        }
    }

    /// CIDR prefix column, "N/A" for placeholder rows.
    pub fn prefix(&self) -> String {
        match self.cidr {
            Some(c) => c.mask.to_string(),
            None => "N/A".to_string(),
        }
    }

    /// "first - last" address column, "N/A" for placeholder rows.
    pub fn ip_range(&self) -> String {
        match self.cidr {
            Some(c) => format!("{} - {}", c.lo(), c.hi()),
            None => "N/A".to_string(),
        }
    }

    pub fn num_addresses(&self) -> u64 {
        self.cidr.map(|c| c.num_addresses()).unwrap_or(0)
    }
}

/// Full reconciliation of one dedicated block.
///
/// `blocks` holds the partition rows in ascending address order, followed by
/// any placeholder rows. The partition rows exactly cover the dedicated
/// range with no gaps and no overlaps.
#[derive(Serialize, Debug)]
pub struct ReconciliationResult {
    pub dedicated: Ipv4,
    pub blocks: Vec<ClassifiedBlock>,
    pub total_addresses: u64,
    pub used_addresses: u64,
    pub unused_addresses: u64,
}
