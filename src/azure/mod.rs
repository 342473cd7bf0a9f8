//! Azure CLI and Resource Graph interaction.
//!
//! This module handles all Azure-related operations:
//! - [`cli`] - Command execution for Azure CLI
//! - [`graph`] - Azure Resource Graph queries
//! - [`cache`] - Caching of discovered inventory

mod cache;
mod cli;
mod graph;

// Re-export public types and functions
pub use cache::read_vnet_cache;
pub use cli::run;
pub use graph::{run_az_cli_graph, VnetData};
