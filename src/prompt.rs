//! Dedicated-CIDR collection.
//!
//! The list of dedicated blocks to track comes from the `DEDICATED_CIDRS`
//! environment variable (comma separated, `.env` supported) or, when unset,
//! from an interactive prompt that re-asks until every entry is valid.

use crate::config;
use crate::models::Ipv4;
use std::error::Error;
use std::io::Write;

/// Collect the dedicated CIDR list for this run.
pub fn get_dedicated_cidrs() -> Result<Vec<Ipv4>, Box<dyn Error>> {
    if let Ok(raw) = std::env::var(config::ENV_DEDICATED_CIDRS) {
        log::info!(
            "Reading dedicated CIDRs from ${var}",
            var = config::ENV_DEDICATED_CIDRS
        );
        let cidrs = parse_cidr_list(&raw)?;
        if cidrs.is_empty() {
            return Err(format!(
                "No dedicated CIDRs found in ${var}",
                var = config::ENV_DEDICATED_CIDRS
            )
            .into());
        }
        return Ok(cidrs);
    }

    let stdin = std::io::stdin();
    loop {
        println!("\n{}", "-".repeat(88));
        println!(
            "\nEnter dedicated CIDRs for the Azure tenant (comma separated, e.g. 10.0.0.0/8, 192.168.0.0/16):"
        );
        print!("\n> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        stdin.read_line(&mut line)?;

        match parse_cidr_list(&line) {
            Ok(cidrs) if !cidrs.is_empty() => return Ok(cidrs),
            Ok(_) => println!("\nPlease enter at least one CIDR."),
            Err(e) => println!("\n{e}"),
        }
        println!("\nPlease try again.");
    }
}

/// Parse a comma-separated CIDR list, rejecting any malformed entry.
pub fn parse_cidr_list(input: &str) -> Result<Vec<Ipv4>, Box<dyn Error>> {
    let mut cidrs = Vec::new();
    for part in input.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        if !part.contains('/') {
            return Err(format!(
                "Invalid CIDR: '{part}'. CIDR must include a prefix (e.g. 10.0.0.0/8)."
            )
            .into());
        }
        let cidr = Ipv4::new(part).map_err(|e| format!("Invalid CIDR: '{part}'. {e}"))?;
        cidrs.push(cidr);
    }
    Ok(cidrs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cidr_list() {
        let cidrs = parse_cidr_list("10.0.0.0/8, 192.168.0.0/16").unwrap();
        assert_eq!(cidrs.len(), 2);
        assert_eq!(cidrs[0], Ipv4::new("10.0.0.0/8").unwrap());
        assert_eq!(cidrs[1], Ipv4::new("192.168.0.0/16").unwrap());
    }

    #[test]
    fn test_parse_cidr_list_skips_empty_parts() {
        let cidrs = parse_cidr_list(" 10.0.0.0/8 ,, ").unwrap();
        assert_eq!(cidrs.len(), 1);
    }

    #[test]
    fn test_parse_cidr_list_empty_input() {
        assert!(parse_cidr_list("").unwrap().is_empty());
        assert!(parse_cidr_list("  ,  ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_cidr_list_missing_prefix() {
        let err = parse_cidr_list("10.0.0.0").unwrap_err().to_string();
        assert!(err.contains("must include a prefix"), "got: {err}");
    }

    #[test]
    fn test_parse_cidr_list_rejects_bad_entry() {
        assert!(parse_cidr_list("10.0.0.0/8, bogus/99").is_err());
        assert!(parse_cidr_list("300.0.0.0/8").is_err());
    }
}
