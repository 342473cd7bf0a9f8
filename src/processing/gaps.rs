//! Gap extraction between merged allocation ranges.
//!
//! Subtracts the merged allocation intervals from a dedicated block's full
//! range, yielding the unused complement.

use crate::models::AddressRange;

/// Walk the merged ranges in order, emitting every uncovered sub-range of
/// the block.
///
/// `merged` must be disjoint, sorted, and clipped to the block (the interval
/// merger's output). An empty `merged` yields the whole block as one gap.
pub fn find_gaps(block: AddressRange, merged: &[AddressRange]) -> Vec<AddressRange> {
    let mut gaps = Vec::new();
    let mut cursor = block.start;

    for range in merged {
        if cursor < range.start {
            gaps.push(AddressRange {
                start: cursor,
                end: range.start,
            });
        }
        cursor = cursor.max(range.end);
    }
    if cursor < block.end {
        gaps.push(AddressRange {
            start: cursor,
            end: block.end,
        });
    }

    gaps
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(start: u64, end: u64) -> AddressRange {
        AddressRange::new(start, end).unwrap()
    }

    #[test]
    fn test_no_allocations_whole_block_is_gap() {
        let block = range(0, 256);
        assert_eq!(find_gaps(block, &[]), vec![block]);
    }

    #[test]
    fn test_fully_covered_no_gaps() {
        let block = range(0, 256);
        assert!(find_gaps(block, &[range(0, 256)]).is_empty());
    }

    #[test]
    fn test_leading_middle_trailing_gaps() {
        let block = range(0, 100);
        let merged = [range(10, 20), range(40, 60)];
        assert_eq!(
            find_gaps(block, &merged),
            vec![range(0, 10), range(20, 40), range(60, 100)]
        );
    }

    #[test]
    fn test_allocation_at_block_edges() {
        let block = range(0, 100);
        let merged = [range(0, 30), range(70, 100)];
        assert_eq!(find_gaps(block, &merged), vec![range(30, 70)]);
    }

    #[test]
    fn test_gaps_complement_allocations() {
        let block = range(0, 1 << 16);
        let merged = [range(256, 512), range(1024, 4096), range(50000, 60000)];
        let gaps = find_gaps(block, &merged);

        let covered: u64 = merged.iter().map(|r| r.num_addresses()).sum();
        let gapped: u64 = gaps.iter().map(|r| r.num_addresses()).sum();
        assert_eq!(covered + gapped, block.num_addresses());
    }
}
