//! IPv4 address codec and subnet type.
//!
//! Parses the canonical dotted-quad form into a `u32`, formats a `u32` back
//! to text, and provides [`Ipv4Subnet`] for CIDR blocks produced by range
//! decomposition.

use crate::error::RangeError;
use lazy_static::lazy_static;
use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;

/// Width of an IPv4 address in bits, also the maximum prefix length.
pub const BIT_WIDTH: u8 = 32;

lazy_static! {
    static ref ADDR_RE: Regex =
        Regex::new(r"^([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})$")
            .expect("Invalid Regex?");
}

/// Parse a dotted-quad IPv4 address string into its `u32` value.
///
/// Accepts exactly four dot-separated decimal octets of 1-3 digits each,
/// value 0-255. Leading zeros are allowed.
///
/// # Examples
/// ```
/// use ip_range_summary::models::ipv4;
/// assert_eq!(ipv4::parse_addr("192.0.2.1").unwrap(), 3221225985);
/// assert!(ipv4::parse_addr("192.0.2.256").is_err());
/// ```
pub fn parse_addr(text: &str) -> Result<u32, RangeError> {
    let caps = ADDR_RE
        .captures(text)
        .ok_or_else(|| RangeError::MalformedAddress(text.to_string()))?;

    let mut addr: u32 = 0;
    for i in 1..=4 {
        // 1-3 digits, so this always fits a u32
        let octet: u32 = caps[i]
            .parse()
            .map_err(|_| RangeError::MalformedAddress(text.to_string()))?;
        if octet > 255 {
            return Err(RangeError::MalformedAddress(text.to_string()));
        }
        addr = (addr << 8) | octet;
    }
    Ok(addr)
}

/// Format a `u32` as a dotted-quad IPv4 address string.
///
/// Inverse of [`parse_addr`] for canonical input (minimal decimal digits
/// per octet).
pub fn format_addr(addr: u32) -> String {
    Ipv4Addr::from(addr).to_string()
}

/// Bit mask of the host part for the given prefix length.
fn host_mask(prefix: u8) -> u32 {
    debug_assert!(
        prefix <= BIT_WIDTH,
        "prefix[{prefix}] > 32 should never happen."
    );
    let right_len = BIT_WIDTH - prefix;
    ((1u64 << right_len) - 1) as u32
}

/// IPv4 CIDR block: base address plus prefix length.
#[derive(Eq, Ord, Debug, Copy, Clone, Hash)]
pub struct Ipv4Subnet {
    /// Base (network) address of the block.
    pub addr: u32,
    /// Prefix length (0-32).
    pub prefix: u8,
}

impl Ipv4Subnet {
    /// Create a new subnet from its base address and prefix length.
    pub fn new(addr: u32, prefix: u8) -> Self {
        debug_assert!(prefix <= BIT_WIDTH);
        Ipv4Subnet { addr, prefix }
    }

    /// Get the lowest (network) address in the block.
    pub fn lo(&self) -> u32 {
        self.addr
    }

    /// Get the highest (broadcast) address in the block.
    pub fn hi(&self) -> u32 {
        self.addr | host_mask(self.prefix)
    }

    /// Confirm whether the block covers the given address.
    pub fn contains(&self, addr: u32) -> bool {
        self.lo() <= addr && addr <= self.hi()
    }

    /// Number of addresses covered by the block.
    pub fn size(&self) -> u64 {
        1u64 << (BIT_WIDTH - self.prefix)
    }
}

impl std::fmt::Display for Ipv4Subnet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", format_addr(self.addr), self.prefix)
    }
}

impl Serialize for Ipv4Subnet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Ipv4Subnet {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4Subnet, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let (addr_text, prefix_text) = s
            .split_once('/')
            .ok_or_else(|| de::Error::custom(format!("invalid CIDR format: {}", s)))?;

        let addr = parse_addr(addr_text)
            .map_err(|_| de::Error::custom(format!("invalid IP address: {}", addr_text)))?;
        let prefix: u8 = prefix_text
            .parse()
            .map_err(|_| de::Error::custom(format!("invalid prefix length: {}", prefix_text)))?;
        if prefix > BIT_WIDTH {
            return Err(de::Error::custom(format!(
                "invalid prefix length: {}",
                prefix_text
            )));
        }

        Ok(Ipv4Subnet { addr, prefix })
    }
}

impl PartialEq for Ipv4Subnet {
    fn eq(&self, other: &Ipv4Subnet) -> bool {
        self.addr == other.addr && self.prefix == other.prefix
    }
}

impl PartialOrd for Ipv4Subnet {
    fn partial_cmp(&self, other: &Ipv4Subnet) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
