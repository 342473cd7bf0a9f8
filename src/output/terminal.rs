//! Terminal output for reconciliation results.
//!
//! Prints the per-block partition tables and a usage summary to stdout,
//! color-coding rows by status.

use crate::models::{ReconciliationResult, Status};
use colored::{ColoredString, Colorize};

/// Format a value as a quoted, right-aligned field.
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

fn colorize_status(status: Status) -> ColoredString {
    match status {
        Status::Used => status.to_string().yellow(),
        Status::Unused => status.to_string().green(),
        Status::NoAddressSpaceAssigned => status.to_string().red(),
    }
}

/// Print the full partition table for each dedicated block.
pub fn print_report(results: &[ReconciliationResult]) {
    for result in results {
        println!(
            "\n# Dedicated CIDR {} - {} blocks",
            result.dedicated.to_string().bold(),
            result.blocks.len()
        );
        println!(
            r#"{address},{prefix},{range},{subnet},{vnet},{rg},{subscription},{region},{status}"#,
            address = format_field("address", 17),
            prefix = format_field("prefix", 8),
            range = format_field("ip_range", 34),
            subnet = format_field("subnet_name", 24),
            vnet = format_field("vnet_name", 24),
            rg = format_field("resource_group", 20),
            subscription = format_field("subscription", 21),
            region = format_field("region", 15),
            status = format_field("status", 10),
        );
        for block in &result.blocks {
            println!(
                r#"{address},{prefix},{range},{subnet},{vnet},{rg},{subscription},{region},{status}"#,
                address = format_field(block.address(), 17),
                prefix = format_field(block.prefix(), 8),
                range = format_field(block.ip_range(), 34),
                subnet = format_field(&block.subnet_name, 24),
                vnet = format_field(&block.vnet_name, 24),
                rg = format_field(&block.resource_group, 20),
                subscription = format_field(&block.subscription, 21),
                region = format_field(&block.region, 15),
                status = colorize_status(block.status),
            );
        }
    }
}

/// Print the usage totals per dedicated block.
pub fn print_summary(results: &[ReconciliationResult]) {
    println!("\n# Subnet usage summary");
    for result in results {
        let used_pct = 100.0 * result.used_addresses as f64 / result.total_addresses as f64;
        println!(
            "{dedicated}: total={total} {used_label}={used} ({used_pct:.1}%) {unused_label}={unused}",
            dedicated = result.dedicated.to_string().bold(),
            total = result.total_addresses,
            used_label = "used".yellow(),
            used = result.used_addresses,
            unused_label = "unused".green(),
            unused = result.unused_addresses,
        );
    }
}
