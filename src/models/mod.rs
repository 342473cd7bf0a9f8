//! Domain models for Azure IPAM tracking.
//!
//! This module contains the core data structures used throughout the tool:
//! - [`Ipv4`] - IPv4 CIDR block with prefix-length math
//! - [`AddressRange`] - half-open integer address range
//! - [`VnetRecord`] - raw discovery row from Azure Resource Graph
//! - [`Allocation`] and [`Inventory`] - boundary-mapped discovery data
//! - [`ClassifiedBlock`] and [`ReconciliationResult`] - reconciliation output

mod allocation;
mod ipv4;
mod range;
mod record;
mod report;

// Re-export public types
pub use allocation::{map_records, Allocation, Inventory, UnassignedSubnet, VNET_SCOPE};
pub use ipv4::{broadcast_addr, cut_addr, get_cidr_mask, Ipv4, MAX_LENGTH};
pub use range::{AddressRange, FAMILY_END};
pub use record::VnetRecord;
pub use report::{ClassifiedBlock, ReconciliationResult, Status};
