//! Discovered allocations and the record-to-allocation boundary mapping.

use super::{AddressRange, Ipv4, VnetRecord};
use serde::Serialize;
use std::collections::HashSet;

/// Subnet-name sentinel for a network-level address space allocation.
pub const VNET_SCOPE: &str = "vnet-scope";

/// A discovered, already-assigned address range with its ownership metadata.
///
/// Ranges may overlap or duplicate across allocations (a vnet-scope entry
/// always nests the subnets declared inside it); the merger tolerates this.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    /// CIDR block of the allocation.
    pub cidr: Ipv4,
    /// Subnet name, or [`VNET_SCOPE`] for a whole-network address space.
    pub subnet_name: String,
    /// Name of the virtual network.
    pub vnet_name: String,
    /// Resource group containing the VNet.
    pub resource_group: String,
    /// Azure subscription display name.
    pub subscription: String,
    /// Azure region location.
    pub region: String,
}

impl Allocation {
    pub fn range(&self) -> AddressRange {
        self.cidr.range()
    }
}

/// A discovered subnet carrying no address prefix.
///
/// Reported as an informational row only; consumes no address space.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct UnassignedSubnet {
    pub subnet_name: String,
    pub vnet_name: String,
    pub resource_group: String,
    pub subscription: String,
    pub region: String,
}

/// Boundary-mapped network inventory: the engine's whole input.
#[derive(Debug, Default)]
pub struct Inventory {
    pub allocations: Vec<Allocation>,
    pub unassigned: Vec<UnassignedSubnet>,
}

/// Map raw graph rows into the fixed-shape [`Inventory`].
///
/// Each record contributes its VNet address prefixes as [`VNET_SCOPE`]
/// allocations (de-duplicated per subscription/vnet/prefix, since every
/// subnet row repeats the VNet data) plus, when present, its subnet as
/// either an allocation or an unassigned entry.
pub fn map_records(records: &[VnetRecord]) -> Inventory {
    let mut inventory = Inventory::default();
    let mut seen_vnet_scope: HashSet<(String, String, Ipv4)> = HashSet::new();

    for record in records {
        for vnet_cidr in &record.vnet_cidr {
            let key = (
                record.subscription_id.clone(),
                record.vnet_name.clone(),
                *vnet_cidr,
            );
            if seen_vnet_scope.insert(key) {
                inventory.allocations.push(Allocation {
                    cidr: *vnet_cidr,
                    subnet_name: VNET_SCOPE.to_string(),
                    vnet_name: record.vnet_name.clone(),
                    resource_group: record.resource_group.clone(),
                    subscription: record.subscription_name.clone(),
                    region: record.location.clone(),
                });
            }
        }

        let subnet_name = match &record.subnet_name {
            Some(name) => name.clone(),
            None => continue, // vnet without subnets
        };
        match record.subnet_cidr {
            Some(subnet_cidr) => inventory.allocations.push(Allocation {
                cidr: subnet_cidr,
                subnet_name,
                vnet_name: record.vnet_name.clone(),
                resource_group: record.resource_group.clone(),
                subscription: record.subscription_name.clone(),
                region: record.location.clone(),
            }),
            None => {
                log::warn!(
                    "Subnet '{subnet_name}' in VNet '{vnet}' has no address space assigned",
                    vnet = record.vnet_name
                );
                inventory.unassigned.push(UnassignedSubnet {
                    subnet_name,
                    vnet_name: record.vnet_name.clone(),
                    resource_group: record.resource_group.clone(),
                    subscription: record.subscription_name.clone(),
                    region: record.location.clone(),
                });
            }
        }
    }

    log::info!(
        "Mapped {} records into {} allocations and {} unassigned subnets",
        records.len(),
        inventory.allocations.len(),
        inventory.unassigned.len()
    );
    inventory
}
