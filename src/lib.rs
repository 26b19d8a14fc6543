// cargo watch -x 'fmt' -x 'test'

//! Convert contiguous IP address ranges into minimal CIDR subnet lists.
//!
//! A range string is a single address or `<start>-<end>` (closed interval,
//! canonical textual form, no `::` compression for IPv6). The decomposition
//! is exact: the emitted subnets cover every address of the range once, in
//! ascending order, and the full address space is split into two `/1` blocks
//! rather than emitted as `/0`.

mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use error::RangeError;
pub use models::{Ipv4Subnet, Ipv6Subnet};
pub use processing::{Ipv4Range, Ipv6Range};

/// Decompose an IPv4 range string into subnet strings.
///
/// # Examples
/// ```
/// use ip_range_summary::ipv4_range_to_subnets;
/// let subnets = ipv4_range_to_subnets("192.0.2.1-192.0.2.2").unwrap();
/// assert_eq!(subnets, vec!["192.0.2.1/32", "192.0.2.2/32"]);
/// ```
pub fn ipv4_range_to_subnets(text: &str) -> Result<Vec<String>, RangeError> {
    let mut range = Ipv4Range::new();
    range.set_range(text)?;
    range.subnet_texts()
}

/// Decompose an IPv6 range string into subnet strings.
pub fn ipv6_range_to_subnets(text: &str) -> Result<Vec<String>, RangeError> {
    let mut range = Ipv6Range::new();
    range.set_range(text)?;
    range.subnet_texts()
}
