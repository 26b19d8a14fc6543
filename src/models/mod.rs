//! Domain models for IP range summary.
//!
//! This module contains the per-family address codecs and subnet types:
//! - [`ipv4`] - IPv4 codec and [`Ipv4Subnet`]
//! - [`ipv6`] - IPv6 codec and [`Ipv6Subnet`]

pub mod ipv4;
pub mod ipv6;

// Re-export public types
pub use ipv4::Ipv4Subnet;
pub use ipv6::Ipv6Subnet;
