// cargo watch -x 'fmt' -x 'run'  // 'run -- --some-arg'

pub mod azure;
mod config;
pub mod models;
pub mod output;
pub mod processing;
pub mod prompt;

use models::{Inventory, Ipv4, ReconciliationResult};
use std::error::Error;
use std::sync::Arc;

/// Load the discovered inventory and map it into the engine's shape.
pub fn load_inventory(cache_file: Option<&str>) -> Result<Inventory, Box<dyn Error>> {
    let data = azure::read_vnet_cache(cache_file)?;
    Ok(models::map_records(&data.data))
}

/// Reconcile every dedicated block against the shared inventory.
///
/// Each block is an independent pure computation, so they fan out on
/// blocking worker tasks. One result per block, in input order; a failed
/// block never aborts the others.
pub async fn reconcile_all(
    dedicated: &[Ipv4],
    inventory: Arc<Inventory>,
) -> Vec<(Ipv4, Result<ReconciliationResult, Box<dyn Error>>)> {
    let handles: Vec<_> = dedicated
        .iter()
        .map(|&cidr| {
            let inventory = Arc::clone(&inventory);
            tokio::task::spawn_blocking(move || {
                processing::reconcile(cidr, &inventory).map_err(|e| e.to_string())
            })
        })
        .collect();

    let joined = futures::future::join_all(handles).await;

    dedicated
        .iter()
        .zip(joined)
        .map(|(&cidr, outcome)| {
            let result: Result<ReconciliationResult, Box<dyn Error>> = match outcome {
                Ok(Ok(result)) => Ok(result),
                Ok(Err(e)) => Err(e.into()),
                Err(e) => Err(format!("Reconciliation task for {cidr} failed: {e}").into()),
            };
            (cidr, result)
        })
        .collect()
}
