//! Half-open integer address ranges.
//!
//! [`AddressRange`] is the unit the reconciliation engine computes on.
//! Addresses are unsigned integers in the 32-bit IPv4 family; a range covers
//! `[start, end)` and is never empty.

use super::{Ipv4, MAX_LENGTH};
use std::error::Error;
use std::net::Ipv4Addr;

/// One past the highest address in the 32-bit family.
pub const FAMILY_END: u64 = 1 << MAX_LENGTH;

/// A half-open address range `[start, end)` with `start < end`.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct AddressRange {
    pub start: u64,
    pub end: u64,
}

impl AddressRange {
    /// Create a range, rejecting degenerate input where `start >= end`.
    pub fn new(start: u64, end: u64) -> Result<AddressRange, Box<dyn Error>> {
        if start >= end {
            return Err(format!("Degenerate address range: start {start} >= end {end}").into());
        }
        if end > FAMILY_END {
            return Err(format!("Address range end {end} beyond 32-bit family").into());
        }
        Ok(AddressRange { start, end })
    }

    /// Number of addresses covered.
    pub fn num_addresses(&self) -> u64 {
        self.end - self.start
    }

    /// Whether a single address falls inside the range.
    pub fn contains(&self, addr: u64) -> bool {
        self.start <= addr && addr < self.end
    }

    /// Two ranges intersect iff `max(starts) < min(ends)`.
    pub fn intersects(&self, other: AddressRange) -> bool {
        self.start.max(other.start) < self.end.min(other.end)
    }

    /// Intersection with another range, or `None` when disjoint.
    pub fn clip(&self, other: AddressRange) -> Option<AddressRange> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        if start < end {
            Some(AddressRange { start, end })
        } else {
            None
        }
    }

    /// Convert back to CIDR notation.
    ///
    /// Only satisfiable when the length is a power of two and the start is
    /// aligned to it. The CIDR decomposer guarantees this for its output;
    /// any other range is an error.
    pub fn as_ipv4_cidr(&self) -> Result<Ipv4, Box<dyn Error>> {
        let len = self.num_addresses();
        if !len.is_power_of_two() {
            return Err(format!("Range length {len} is not a power of two").into());
        }
        if self.start & (len - 1) != 0 {
            return Err(format!(
                "Range start {start} is not aligned to length {len}",
                start = self.start
            )
            .into());
        }
        let mask = MAX_LENGTH - len.trailing_zeros() as u8;
        Ok(Ipv4 {
            addr: Ipv4Addr::from(self.start as u32),
            mask,
        })
    }
}
