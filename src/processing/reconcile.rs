//! Per-block reconciliation orchestration.
//!
//! Ties the merger, gap extractor, and decomposer together for one dedicated
//! block: clip and merge the block's allocations, decompose used intervals
//! and gaps into CIDR rows, verify the partition, and total the counts.
//! Pure and stateless; one invocation per dedicated block.

use super::{clip_allocations, decompose_range, find_gaps, merge_ranges};
use crate::models::{ClassifiedBlock, Inventory, Ipv4, ReconciliationResult, Status};
use itertools::Itertools;
use std::error::Error;

/// Reconcile one dedicated block against the discovered inventory.
///
/// Returns the full partition of the block (Used rows carrying the metadata
/// of their first contributing allocation in ascending start order, Unused
/// rows for the complement) followed by one informational placeholder row
/// per unassigned subnet. Fails rather than returning a defective partition.
pub fn reconcile(
    dedicated: Ipv4,
    inventory: &Inventory,
) -> Result<ReconciliationResult, Box<dyn Error>> {
    let block = dedicated.range();
    let clipped = clip_allocations(&inventory.allocations, block);
    let merged = merge_ranges(clipped.iter().map(|(range, _)| *range).collect());
    log::debug!(
        "Reconciling {dedicated}: {clipped} allocations in scope, {merged} merged intervals",
        clipped = clipped.len(),
        merged = merged.len()
    );

    let mut rows: Vec<ClassifiedBlock> = Vec::new();
    for interval in &merged {
        for piece in decompose_range(*interval) {
            let cidr = piece.as_ipv4_cidr()?;
            let allocation = clipped
                .iter()
                .find(|(range, _)| range.contains(piece.start))
                .map(|(_, allocation)| *allocation)
                .ok_or_else(|| format!("No contributing allocation for {cidr} in {dedicated}"))?;
            rows.push(ClassifiedBlock::used(cidr, allocation));
        }
    }
    for gap in find_gaps(block, &merged) {
        for piece in decompose_range(gap) {
            rows.push(ClassifiedBlock::unused(piece.as_ipv4_cidr()?));
        }
    }

    let rows: Vec<ClassifiedBlock> = rows
        .into_iter()
        .sorted_by_key(|row| row.range().map(|range| range.start))
        .collect();

    // Walk the partition once: totals per status, and no holes or overlaps.
    let mut used_addresses = 0u64;
    let mut unused_addresses = 0u64;
    let mut cursor = block.start;
    for row in &rows {
        let range = row
            .range()
            .ok_or_else(|| format!("Partition row without a range in {dedicated}"))?;
        if range.start != cursor {
            return Err(format!(
                "Partition defect in {dedicated}: expected a block starting at {cursor}, got {start}",
                start = range.start
            )
            .into());
        }
        match row.status {
            Status::Used => used_addresses += range.num_addresses(),
            Status::Unused => unused_addresses += range.num_addresses(),
            Status::NoAddressSpaceAssigned => {}
        }
        cursor = range.end;
    }
    if cursor != block.end {
        return Err(format!(
            "Partition defect in {dedicated}: partition ends at {cursor}, block ends at {end}",
            end = block.end
        )
        .into());
    }

    let mut blocks = rows;
    blocks.extend(inventory.unassigned.iter().map(ClassifiedBlock::unassigned));

    Ok(ReconciliationResult {
        dedicated,
        blocks,
        total_addresses: block.num_addresses(),
        used_addresses,
        unused_addresses,
    })
}
