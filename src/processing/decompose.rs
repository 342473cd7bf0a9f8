//! Range-to-CIDR decomposition.
//!
//! Converts an arbitrary half-open address range into the minimal ordered
//! sequence of CIDR-valid blocks exactly covering it. This is the part of
//! the engine that turns merged intervals and gaps back into report rows.

use crate::models::{AddressRange, FAMILY_END};

/// Decompose a range into the minimal ordered sequence of CIDR blocks.
///
/// Each step takes the largest power-of-two block the current start is
/// aligned to (the lowest set bit, or the full family width at address 0),
/// halved until it fits inside the remaining range. Emitted blocks are
/// pairwise disjoint, each aligned to its own size, ascending, and their
/// union is exactly the input. At most one block per bit of address width
/// is emitted on either side of the largest, so the sequence is minimal.
pub fn decompose_range(range: AddressRange) -> Vec<AddressRange> {
    let mut blocks = Vec::new();
    let mut start = range.start;

    while start < range.end {
        let mut size = if start == 0 {
            FAMILY_END
        } else {
            1u64 << start.trailing_zeros()
        };
        while size > range.end - start {
            size >>= 1;
        }

        blocks.push(AddressRange {
            start,
            end: start + size,
        });
        start += size;
    }

    blocks
}
