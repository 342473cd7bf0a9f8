//! Interval merging of allocation ranges.
//!
//! Collapses overlapping, duplicate, and nested allocation ranges into a
//! minimal sorted set of disjoint intervals, so classification never double
//! counts a vnet-scope entry together with the subnets nested inside it.

use crate::models::{AddressRange, Allocation};

/// Restrict allocations to a dedicated block's bounds.
///
/// Allocations wholly outside the block are dropped (they may belong to a
/// different dedicated block); allocations straddling the boundary are
/// clipped to the intersection. The result keeps the clipped range paired
/// with its source allocation for attribution, ordered by ascending clipped
/// start; allocations tied on start keep their discovery order.
pub fn clip_allocations(
    allocations: &[Allocation],
    block: AddressRange,
) -> Vec<(AddressRange, &Allocation)> {
    let mut clipped: Vec<(AddressRange, &Allocation)> = allocations
        .iter()
        .filter_map(|a| a.range().clip(block).map(|r| (r, a)))
        .collect();
    clipped.sort_by_key(|(r, _)| r.start);
    clipped
}

/// Merge ranges into a minimal ordered set of disjoint intervals.
///
/// Sort by start, then a single scan folding each range into the
/// accumulator when it overlaps or is adjacent (`next.start <= acc.end`).
/// The union of the output equals the union of the input.
pub fn merge_ranges(mut ranges: Vec<AddressRange>) -> Vec<AddressRange> {
    ranges.sort_by_key(|r| (r.start, r.end));

    let mut merged: Vec<AddressRange> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match merged.last_mut() {
            Some(acc) if range.start <= acc.end => {
                if range.end > acc.end {
                    acc.end = range.end;
                }
            }
            _ => merged.push(range),
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Ipv4;

    fn range(start: u64, end: u64) -> AddressRange {
        AddressRange::new(start, end).unwrap()
    }

    fn allocation(cidr: &str, subnet_name: &str) -> Allocation {
        Allocation {
            cidr: Ipv4::new(cidr).unwrap(),
            subnet_name: subnet_name.to_string(),
            vnet_name: "vnet-test".to_string(),
            resource_group: "rg-test".to_string(),
            subscription: "sub-test".to_string(),
            region: "westeurope".to_string(),
        }
    }

    #[test]
    fn test_merge_disjoint() {
        let merged = merge_ranges(vec![range(20, 30), range(0, 10)]);
        assert_eq!(merged, vec![range(0, 10), range(20, 30)]);
    }

    #[test]
    fn test_merge_overlapping() {
        let merged = merge_ranges(vec![range(0, 15), range(10, 30)]);
        assert_eq!(merged, vec![range(0, 30)]);
    }

    #[test]
    fn test_merge_adjacent() {
        let merged = merge_ranges(vec![range(0, 10), range(10, 20)]);
        assert_eq!(merged, vec![range(0, 20)]);
    }

    #[test]
    fn test_merge_duplicates() {
        let merged = merge_ranges(vec![range(5, 10), range(5, 10), range(5, 10)]);
        assert_eq!(merged, vec![range(5, 10)]);
    }

    #[test]
    fn test_merge_nested() {
        // subnet nested inside its vnet address space
        let merged = merge_ranges(vec![range(0, 256), range(64, 128)]);
        assert_eq!(merged, vec![range(0, 256)]);
    }

    #[test]
    fn test_merge_empty() {
        assert!(merge_ranges(vec![]).is_empty());
    }

    #[test]
    fn test_clip_allocations() {
        let block = Ipv4::new("10.1.0.0/16").unwrap().range();
        let allocations = vec![
            allocation("172.16.0.0/24", "outside"),
            allocation("10.0.0.0/8", "straddles"),
            allocation("10.1.2.0/24", "inside"),
        ];
        let clipped = clip_allocations(&allocations, block);

        assert_eq!(clipped.len(), 2);
        // the /8 clips to the whole block and sorts first
        assert_eq!(clipped[0].0, block);
        assert_eq!(clipped[0].1.subnet_name, "straddles");
        assert_eq!(clipped[1].0, Ipv4::new("10.1.2.0/24").unwrap().range());
        assert_eq!(clipped[1].1.subnet_name, "inside");
    }

    #[test]
    fn test_clip_keeps_discovery_order_on_ties() {
        let block = Ipv4::new("10.0.0.0/16").unwrap().range();
        let allocations = vec![
            allocation("10.0.0.0/16", "vnet-scope"),
            allocation("10.0.0.0/24", "snet-first"),
        ];
        let clipped = clip_allocations(&allocations, block);

        assert_eq!(clipped.len(), 2);
        assert_eq!(clipped[0].1.subnet_name, "vnet-scope");
        assert_eq!(clipped[1].1.subnet_name, "snet-first");
    }
}
