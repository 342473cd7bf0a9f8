//! Raw Azure Resource Graph row shape.
//!
//! One [`VnetRecord`] per (vnet, subnet) pair returned by the graph query.
//! This is the only place the duck-shaped discovery JSON is given a fixed
//! shape; nothing downstream of [`crate::models::map_records`] touches it.

use super::Ipv4;
use serde::{Deserialize, Serialize};

/// One row of VNet/subnet inventory from Azure Resource Graph.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct VnetRecord {
    /// Azure subscription ID.
    pub subscription_id: String,
    /// Azure subscription display name (left outer join, may be absent).
    #[serde(default)]
    pub subscription_name: String,
    /// Resource group containing the VNet.
    pub resource_group: String,
    /// Name of the virtual network.
    pub vnet_name: String,
    /// Address prefixes of the virtual network.
    pub vnet_cidr: Vec<Ipv4>,
    /// Subnet name (None when the VNet has no subnets).
    pub subnet_name: Option<String>,
    /// Subnet prefix (None when the subnet has no address space assigned).
    pub subnet_cidr: Option<Ipv4>,
    /// Azure region location.
    pub location: String,
    /// Record index within its response block (for tracking/debugging).
    #[serde(default)]
    pub src_index: usize,
    /// Block ID from paginated graph query results.
    #[serde(default)]
    pub block_id: usize,
}

impl Default for VnetRecord {
    fn default() -> Self {
        VnetRecord {
            subscription_id: "blank".to_string(),
            subscription_name: "blank".to_string(),
            resource_group: "blank".to_string(),
            vnet_name: "blank".to_string(),
            vnet_cidr: vec![],
            subnet_name: None,
            subnet_cidr: None,
            location: "blank".to_string(),
            src_index: 0,
            block_id: 0,
        }
    }
}
