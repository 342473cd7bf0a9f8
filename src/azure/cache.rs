//! Cache management for discovered inventory.
//!
//! Avoids repeated Azure Graph API calls by persisting the raw inventory to
//! a date-stamped JSON file. Only raw discovery data is cached; no
//! reconciliation state survives between runs.

use super::graph::{run_az_cli_graph, VnetData};
use crate::config;
use std::error::Error;
use std::path::Path;

/// Read inventory from a cache file, or fetch from Azure if it doesn't exist.
///
/// With an explicit `cache_file` the file must exist; with `None` the
/// default date-stamped name is used and refreshed from Azure when missing.
pub fn read_vnet_cache(cache_file: Option<&str>) -> Result<VnetData, Box<dyn Error>> {
    let now = chrono::Utc::now().with_timezone(&config::LOCAL_TZ);

    let cache_file = match cache_file {
        Some(file) => {
            if !Path::new(file).exists() {
                return Err(format!("Cache file does not exist: {file}").into());
            }
            log::info!("Using provided cache file: {file}");
            file.to_string()
        }
        None => format!("vnet_cache_{}.json", now.format("%Y-%m-%d")),
    };

    let data = match std::fs::read_to_string(&cache_file) {
        Ok(json) => {
            log::info!("Reading from cache file: {cache_file}");
            serde_json::from_str(&json).map_err(|e| format!("Error parsing cache JSON: {e}"))?
        }
        Err(_) => {
            log::warn!("Cache file not found: {cache_file}");
            let data = run_az_cli_graph()?;
            log::info!("Parsed JSON data received from Azure CLI");

            let json =
                serde_json::to_string(&data).map_err(|e| format!("Error serializing JSON: {e}"))?;
            log::warn!("Writing data to cache file: {cache_file}");
            std::fs::write(&cache_file, json)
                .map_err(|e| format!("Error writing cache file {cache_file}: {e}"))?;
            data
        }
    };

    Ok(data)
}
