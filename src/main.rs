use azure_ipam_tracker::models::Ipv4;
use azure_ipam_tracker::{load_inventory, output, prompt, reconcile_all};
use colored::Colorize;
use std::error::Error;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    dotenv::dotenv().ok();
    //
    log::info!("#Start main()");

    let dedicated: Vec<Ipv4> = prompt::get_dedicated_cidrs()?;
    let inventory = Arc::new(load_inventory(None)?);

    let results = reconcile_all(&dedicated, inventory).await;
    let mut reconciled = Vec::new();
    for (cidr, result) in results {
        match result {
            Ok(r) => reconciled.push(r),
            Err(e) => log::error!("Reconciliation failed for {cidr}: {e}"),
        }
    }

    output::print_report(&reconciled);
    output::print_summary(&reconciled);
    let filename = output::write_report(&reconciled)?;
    println!(
        "\nIPAM tracking report saved as {}",
        filename.green().bold()
    );

    Ok(())
}
