//! CSV report generation.
//!
//! Writes the reconciliation results to a timestamped `ipam_tracking_*.csv`
//! file: one section per dedicated CIDR in partition order, then a summary
//! section with the per-range totals used for capacity reporting.

use crate::config;
use crate::models::ReconciliationResult;
use itertools::Itertools;
use std::error::Error;

const REPORT_HEADER: &str = "CIDR Range,Address,CIDR Prefix,IP Range,Subnet Name,VNet Name,Resource Group,Subscription,Region,Status";

const SUMMARY_HEADER: &str = "CIDR Range,Total IPs,Allocated,Unallocated";

/// Render the full report as CSV text.
pub fn build_report(results: &[ReconciliationResult]) -> String {
    let mut out = String::new();

    for result in results {
        out.push_str(REPORT_HEADER);
        out.push('\n');
        for block in &result.blocks {
            let fields = [
                result.dedicated.to_string(),
                block.address(),
                block.prefix(),
                block.ip_range(),
                block.subnet_name.clone(),
                block.vnet_name.clone(),
                block.resource_group.clone(),
                block.subscription.clone(),
                block.region.clone(),
                block.status.to_string(),
            ];
            let row = fields.iter().map(|f| escape_csv_field(f)).join(",");
            out.push_str(&row);
            out.push('\n');
        }
        out.push('\n');
    }

    out.push_str(SUMMARY_HEADER);
    out.push('\n');
    for result in results {
        out.push_str(&format!(
            "{},{},{},{}\n",
            escape_csv_field(&result.dedicated.to_string()),
            result.total_addresses,
            result.used_addresses,
            result.unused_addresses,
        ));
    }

    out
}

/// Write the report to a timestamped CSV file, returning the filename.
pub fn write_report(results: &[ReconciliationResult]) -> Result<String, Box<dyn Error>> {
    let now = chrono::Utc::now().with_timezone(&config::LOCAL_TZ);
    let filename = format!("ipam_tracking_{}.csv", now.format("%Y%m%d_%H%M%S"));

    log::info!("Writing results to {filename}");
    std::fs::write(&filename, build_report(results))
        .map_err(|e| format!("Error writing report file {filename}: {e}"))?;

    Ok(filename)
}

/// Quote a field when it contains a comma or double quote.
fn escape_csv_field(input: &str) -> String {
    if input.contains(',') || input.contains('"') {
        // Excel also dislikes spaces after the comma between fields.
        let escaped = input.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        input.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Allocation, Inventory, Ipv4};
    use crate::processing::reconcile;

    #[test]
    fn test_escape_csv_field() {
        assert_eq!(escape_csv_field("plain"), "plain");
        assert_eq!(escape_csv_field("a,b"), "\"a,b\"");
        assert_eq!(escape_csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_csv_field(""), "");
    }

    #[test]
    fn test_build_report() {
        let inventory = Inventory {
            allocations: vec![Allocation {
                cidr: Ipv4::new("10.0.0.0/26").unwrap(),
                subnet_name: "snet-app".to_string(),
                vnet_name: "vnet-hub".to_string(),
                resource_group: "rg-network".to_string(),
                subscription: "sub, prod".to_string(),
                region: "westeurope".to_string(),
            }],
            unassigned: vec![],
        };
        let result = reconcile(Ipv4::new("10.0.0.0/24").unwrap(), &inventory).unwrap();
        let report = build_report(&[result]);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], REPORT_HEADER);
        assert_eq!(
            lines[1],
            "10.0.0.0/24,10.0.0.0,26,10.0.0.0 - 10.0.0.63,snet-app,vnet-hub,rg-network,\"sub, prod\",westeurope,Used"
        );
        assert_eq!(
            lines[2],
            "10.0.0.0/24,10.0.0.64,26,10.0.0.64 - 10.0.0.127,,,,,,Unused"
        );
        // summary section follows the blank separator
        assert!(lines.contains(&SUMMARY_HEADER));
        assert!(lines.contains(&"10.0.0.0/24,256,64,192"));
    }
}
