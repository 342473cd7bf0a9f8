//! Address-space reconciliation engine.
//!
//! This module contains the pure computation at the heart of the tool:
//! - [`merge`] - clipping and interval merging of allocation ranges
//! - [`gaps`] - complement extraction within a dedicated block
//! - [`decompose`] - range-to-CIDR decomposition
//! - [`reconcile`] - per-block orchestration and accounting

mod decompose;
mod gaps;
mod merge;
mod reconcile;

// Re-export public functions
pub use decompose::decompose_range;
pub use gaps::find_gaps;
pub use merge::{clip_allocations, merge_ranges};
pub use reconcile::reconcile;
