//! IPv6 address codec and subnet type.
//!
//! Works on the full (uncompressed) textual representation only: eight
//! colon-separated groups of exactly four hex digits. `::` compression is
//! deliberately not accepted, and formatting always zero-pads.

use crate::error::RangeError;
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};

/// Width of an IPv6 address in bits, also the maximum prefix length.
pub const BIT_WIDTH: u8 = 128;

lazy_static! {
    static ref ADDR_RE: Regex =
        Regex::new(r"^[0-9A-Fa-f]{4}(:[0-9A-Fa-f]{4}){7}$").expect("Invalid Regex?");
}

/// Parse a full-form IPv6 address string into its `u128` value.
///
/// Accepts exactly eight colon-separated groups of exactly four hex digits,
/// either case. Compressed (`::`) notation is rejected.
///
/// # Examples
/// ```
/// use ip_range_summary::models::ipv6;
/// let addr = ipv6::parse_addr("2001:0db8:0000:0000:0000:0000:0000:0001").unwrap();
/// assert_eq!(addr, 42540766411282592856903984951653826561);
/// assert!(ipv6::parse_addr("2001:db8::1").is_err());
/// ```
pub fn parse_addr(text: &str) -> Result<u128, RangeError> {
    if !ADDR_RE.is_match(text) {
        return Err(RangeError::MalformedAddress(text.to_string()));
    }

    let mut addr: u128 = 0;
    for group in text.split(':') {
        let hextet = u16::from_str_radix(group, 16)
            .map_err(|_| RangeError::MalformedAddress(text.to_string()))?;
        addr = (addr << 16) | u128::from(hextet);
    }
    Ok(addr)
}

/// Format a `u128` as a full-form IPv6 address string.
///
/// Always emits eight lowercase, zero-padded 4-hex-digit groups;
/// compression is never applied.
pub fn format_addr(addr: u128) -> String {
    (0..8)
        .rev()
        .map(|i| format!("{:04x}", (addr >> (i * 16)) & 0xFFFF))
        .join(":")
}

/// Bit mask of the host part for the given prefix length.
fn host_mask(prefix: u8) -> u128 {
    debug_assert!(
        prefix <= BIT_WIDTH,
        "prefix[{prefix}] > 128 should never happen."
    );
    u128::MAX.checked_shr(u32::from(prefix)).unwrap_or(0)
}

/// IPv6 CIDR block: base address plus prefix length.
#[derive(Eq, Ord, Debug, Copy, Clone, Hash)]
pub struct Ipv6Subnet {
    /// Base (network) address of the block.
    pub addr: u128,
    /// Prefix length (0-128).
    pub prefix: u8,
}

impl Ipv6Subnet {
    /// Create a new subnet from its base address and prefix length.
    pub fn new(addr: u128, prefix: u8) -> Self {
        debug_assert!(prefix <= BIT_WIDTH);
        Ipv6Subnet { addr, prefix }
    }

    /// Get the lowest address in the block.
    pub fn lo(&self) -> u128 {
        self.addr
    }

    /// Get the highest address in the block.
    pub fn hi(&self) -> u128 {
        self.addr | host_mask(self.prefix)
    }

    /// Confirm whether the block covers the given address.
    pub fn contains(&self, addr: u128) -> bool {
        self.lo() <= addr && addr <= self.hi()
    }
}

impl std::fmt::Display for Ipv6Subnet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", format_addr(self.addr), self.prefix)
    }
}

impl Serialize for Ipv6Subnet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Ipv6Subnet {
    fn deserialize<D>(deserializer: D) -> Result<Ipv6Subnet, D::Error>
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

        Ok(Ipv6Subnet { addr, prefix })
    }
}

impl PartialEq for Ipv6Subnet {
    fn eq(&self, other: &Ipv6Subnet) -> bool {
        self.addr == other.addr && self.prefix == other.prefix
    }
}

impl PartialOrd for Ipv6Subnet {
    fn partial_cmp(&self, other: &Ipv6Subnet) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
