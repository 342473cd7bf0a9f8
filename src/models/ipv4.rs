//! IPv4 address and CIDR notation utilities.
//!
//! Provides [`Ipv4`] for representing a CIDR block (address plus prefix
//! length), with conversions to the integer [`AddressRange`] the
//! reconciliation engine operates on.

use super::AddressRange;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
pub fn get_cidr_mask(len: u8) -> Result<u32, Box<dyn Error>> {
    if len > MAX_LENGTH {
        Err("Network length is too long".into())
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, Box<dyn Error>> {
    if len > MAX_LENGTH {
        Err("Network length is too long".into())
    } else {
        let right_len = MAX_LENGTH - len;
        let bits = u32::from(addr) as u64;
        let new_bits = (bits >> right_len) << right_len;

        Ok(Ipv4Addr::from(new_bits as u32))
    }
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, Box<dyn Error>> {
    if len > MAX_LENGTH {
        Err("Network length is too long".into())
    } else {
        let mask = get_cidr_mask(len)?;
        let addr_bits = u32::from(addr);
        let network_bits = addr_bits & mask;
        let broadcast_bits = network_bits | (!mask);
        Ok(Ipv4Addr::from(broadcast_bits))
    }
}

/// IPv4 CIDR block: address with prefix length.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The IPv4 address.
    pub addr: Ipv4Addr,
    /// The prefix length (0-32).
    pub mask: u8,
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let cidr = format!("{}/{}", self.addr, self.mask);
        serializer.serialize_str(&cidr)
    }
}

impl<'de> Deserialize<'de> for Ipv4 {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() != 2 {
            return Err(de::Error::custom(format!("invalid CIDR format: {s}")));
        }

        let addr = Ipv4Addr::from_str(parts[0])
            .map_err(|_| de::Error::custom(format!("invalid IP address: {}", parts[0])))?;
        let mask = u8::from_str(parts[1])
            .map_err(|_| de::Error::custom(format!("invalid prefix length: {}", parts[1])))?;
        if mask > MAX_LENGTH {
            return Err(de::Error::custom(format!("prefix length too long: {mask}")));
        }

        Ok(Ipv4 { addr, mask })
    }
}

impl Ipv4 {
    /// Create a new [`Ipv4`] from a CIDR string (e.g., "10.0.0.0/24").
    pub fn new(addr_cidr: &str) -> Result<Ipv4, Box<dyn Error>> {
        let addr_cidr = addr_cidr.trim();
        let parts: Vec<&str> = addr_cidr.split('/').collect();
        if parts.len() != 2 {
            return Err(format!("Invalid address/prefix: {addr_cidr}").into());
        }
        let addr: Ipv4Addr = parts[0]
            .parse()
            .map_err(|_| format!("Invalid address {}", parts[0]))?;
        let mask: u8 = parts[1]
            .parse()
            .map_err(|_| format!("Invalid prefix length {}", parts[1]))?;
        if mask > MAX_LENGTH {
            return Err("Network length is too long".into());
        }
        Ok(Ipv4 { addr, mask })
    }

    /// Get the lowest (network) address in the block.
    pub fn lo(&self) -> Ipv4Addr {
        cut_addr(self.addr, self.mask)
            .unwrap_or_else(|e| panic!("Error calculating network address for {self}: {e}"))
    }

    /// Get the highest (broadcast) address in the block.
    pub fn hi(&self) -> Ipv4Addr {
        broadcast_addr(self.addr, self.mask)
            .unwrap_or_else(|e| panic!("Error calculating broadcast address for {self}: {e}"))
    }

    /// Number of addresses in the block.
    pub fn num_addresses(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.mask)
    }

    /// The half-open integer range the block covers.
    ///
    /// An unaligned base address normalizes to its network address.
    pub fn range(&self) -> AddressRange {
        let start = u32::from(self.lo()) as u64;
        AddressRange {
            start,
            end: start + self.num_addresses(),
        }
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_cidr_mask() {
        assert_eq!(get_cidr_mask(0).unwrap(), 0x00000000);
        assert_eq!(get_cidr_mask(8).unwrap(), 0xFF000000);
        assert_eq!(get_cidr_mask(16).unwrap(), 0xFFFF0000);
        assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
        assert_eq!(get_cidr_mask(32).unwrap(), 0xFFFFFFFF);
        assert!(get_cidr_mask(33).is_err());
    }

    #[test]
    fn test_cut_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 42);
        assert_eq!(cut_addr(ip, 24).unwrap(), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(cut_addr(ip, 16).unwrap(), Ipv4Addr::new(192, 168, 0, 0));
        assert_eq!(cut_addr(ip, 8).unwrap(), Ipv4Addr::new(192, 0, 0, 0));
        assert_eq!(cut_addr(ip, 32).unwrap(), Ipv4Addr::new(192, 168, 1, 42));
        assert!(cut_addr(ip, 33).is_err());
    }

    #[test]
    fn test_broadcast_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 0);
        assert_eq!(
            broadcast_addr(ip, 24).unwrap(),
            Ipv4Addr::new(192, 168, 1, 255)
        );
        assert_eq!(
            broadcast_addr(ip, 16).unwrap(),
            Ipv4Addr::new(192, 168, 255, 255)
        );
        assert_eq!(
            broadcast_addr(ip, 8).unwrap(),
            Ipv4Addr::new(192, 255, 255, 255)
        );
        assert_eq!(
            broadcast_addr(ip, 32).unwrap(),
            Ipv4Addr::new(192, 168, 1, 0)
        );
    }

    #[test]
    fn test_new_rejects_bad_input() {
        assert!(Ipv4::new("10.0.0.0").is_err());
        assert!(Ipv4::new("10.0.0.0/33").is_err());
        assert!(Ipv4::new("10.0.0.300/24").is_err());
        assert!(Ipv4::new("not-an-ip/24").is_err());
        assert!(Ipv4::new(" 10.0.0.0/24 ").is_ok());
    }

    #[test]
    fn test_lo_hi() {
        let ip = Ipv4::new("10.1.2.200/24").unwrap();
        assert_eq!(ip.lo(), Ipv4Addr::new(10, 1, 2, 0));
        assert_eq!(ip.hi(), Ipv4Addr::new(10, 1, 2, 255));
    }

    #[test]
    fn test_num_addresses() {
        assert_eq!(Ipv4::new("10.0.0.0/24").unwrap().num_addresses(), 256);
        assert_eq!(Ipv4::new("10.0.0.0/32").unwrap().num_addresses(), 1);
        assert_eq!(Ipv4::new("0.0.0.0/0").unwrap().num_addresses(), 1u64 << 32);
    }

    #[test]
    fn test_range() {
        let r = Ipv4::new("10.0.0.0/24").unwrap().range();
        let base = u32::from(Ipv4Addr::new(10, 0, 0, 0)) as u64;
        assert_eq!(r.start, base);
        assert_eq!(r.end, base + 256);

        // unaligned base normalizes to the network address
        let r2 = Ipv4::new("10.0.0.77/24").unwrap().range();
        assert_eq!(r2, r);
    }

    #[test]
    fn test_serde_round_trip() {
        let ip = Ipv4::new("172.16.0.0/12").unwrap();
        let json = serde_json::to_string(&ip).unwrap();
        assert_eq!(json, "\"172.16.0.0/12\"");
        let back: Ipv4 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ip);

        assert!(serde_json::from_str::<Ipv4>("\"10.0.0.0/40\"").is_err());
        assert!(serde_json::from_str::<Ipv4>("\"10.0.0.0\"").is_err());
    }

    #[test]
    fn test_cmp() {
        let ip1 = Ipv4::new("10.0.0.1/24").unwrap();
        let ip2 = Ipv4::new("10.0.0.2/24").unwrap();
        let ip3 = Ipv4::new("10.0.0.1/24").unwrap();

        assert!(ip1 < ip2);
        assert!(ip1 == ip3);
        assert!(ip2 >= ip3);
    }
}
