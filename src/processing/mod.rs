//! Range processing logic.
//!
//! This module contains the computational pipeline:
//! - [`split`] - interval-to-aligned-blocks decomposition
//! - [`range`] - range string validation and the per-family handles

pub mod range;
pub mod split;

// Re-export public types and functions
pub use range::{parse_ipv4_range, parse_ipv6_range, Ipv4Range, Ipv6Range};
pub use split::{split_range, Block};
