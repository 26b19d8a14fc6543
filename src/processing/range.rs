//! Range parsing and the per-family range handles.
//!
//! A range string is either a single address or `<start>-<end>`. The handles
//! ([`Ipv4Range`], [`Ipv6Range`]) tie parsing, validation, decomposition and
//! formatting together: one `set_range` call derives and commits the whole
//! state, or leaves the previous state untouched on failure.

use crate::error::RangeError;
use crate::models::{ipv4, ipv6, Ipv4Subnet, Ipv6Subnet};
use crate::processing::split::split_range;

/// Split a range string into its two endpoint strings.
///
/// A string without the separator stands for both endpoints. Only the first
/// `-` splits; any further separator ends up inside the second endpoint and
/// fails the address grammar there.
fn split_endpoints(text: &str) -> (&str, &str) {
    match text.split_once('-') {
        Some((start, end)) => (start, end),
        None => (text, text),
    }
}

/// Parse and validate an IPv4 range string into its endpoint integers.
///
/// Returns `MalformedAddress` if either endpoint fails the grammar and
/// `InvertedRange` if start > end.
pub fn parse_ipv4_range(text: &str) -> Result<(u32, u32), RangeError> {
    let (start_text, end_text) = split_endpoints(text);
    let start = ipv4::parse_addr(start_text)?;
    let end = ipv4::parse_addr(end_text)?;
    if start > end {
        return Err(RangeError::InvertedRange {
            start: ipv4::format_addr(start),
            end: ipv4::format_addr(end),
        });
    }
    Ok((start, end))
}

/// Parse and validate an IPv6 range string into its endpoint integers.
pub fn parse_ipv6_range(text: &str) -> Result<(u128, u128), RangeError> {
    let (start_text, end_text) = split_endpoints(text);
    let start = ipv6::parse_addr(start_text)?;
    let end = ipv6::parse_addr(end_text)?;
    if start > end {
        return Err(RangeError::InvertedRange {
            start: ipv6::format_addr(start),
            end: ipv6::format_addr(end),
        });
    }
    Ok((start, end))
}

#[derive(Debug, Clone)]
struct Ipv4State {
    start: u32,
    end: u32,
    subnets: Vec<Ipv4Subnet>,
}

/// An IPv4 range handle: holds one validated range and its subnet list.
///
/// Created empty; populated by [`set_range`](Ipv4Range::set_range). Accessors
/// return [`RangeError::RangeNotSet`] until the first successful assignment.
#[derive(Debug, Default, Clone)]
pub struct Ipv4Range {
    state: Option<Ipv4State>,
}

impl Ipv4Range {
    /// Create an empty handle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a range string, replacing any previous state wholesale.
    ///
    /// The subnet list is derived before anything is stored, so a failing
    /// call leaves the handle exactly as it was.
    pub fn set_range(&mut self, text: &str) -> Result<(), RangeError> {
        let (start, end) = parse_ipv4_range(text)?;

        let mut blocks = Vec::new();
        split_range(u128::from(start), u128::from(end), ipv4::BIT_WIDTH, &mut blocks);
        let subnets = blocks
            .into_iter()
            .map(|b| Ipv4Subnet::new(b.addr as u32, b.prefix))
            .collect::<Vec<_>>();

        log::debug!(
            "set_range({text}) -> [{start}, {end}] in {n} subnets",
            n = subnets.len()
        );
        self.state = Some(Ipv4State {
            start,
            end,
            subnets,
        });
        Ok(())
    }

    /// Retrieve the normalized range string, `<start>-<end>`.
    pub fn range_text(&self) -> Result<String, RangeError> {
        let state = self.state.as_ref().ok_or(RangeError::RangeNotSet)?;
        Ok(format!(
            "{}-{}",
            ipv4::format_addr(state.start),
            ipv4::format_addr(state.end)
        ))
    }

    /// Retrieve the derived subnet list.
    pub fn subnets(&self) -> Result<&[Ipv4Subnet], RangeError> {
        let state = self.state.as_ref().ok_or(RangeError::RangeNotSet)?;
        Ok(&state.subnets)
    }

    /// Retrieve the subnet list formatted as `<address>/<prefix>` strings.
    pub fn subnet_texts(&self) -> Result<Vec<String>, RangeError> {
        Ok(self.subnets()?.iter().map(ToString::to_string).collect())
    }
}

#[derive(Debug, Clone)]
struct Ipv6State {
    start: u128,
    end: u128,
    subnets: Vec<Ipv6Subnet>,
}

/// An IPv6 range handle, the 128-bit twin of [`Ipv4Range`].
#[derive(Debug, Default, Clone)]
pub struct Ipv6Range {
    state: Option<Ipv6State>,
}

impl Ipv6Range {
    /// Create an empty handle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a range string, replacing any previous state wholesale.
    pub fn set_range(&mut self, text: &str) -> Result<(), RangeError> {
        let (start, end) = parse_ipv6_range(text)?;

        let mut blocks = Vec::new();
        split_range(start, end, ipv6::BIT_WIDTH, &mut blocks);
        let subnets = blocks
            .into_iter()
            .map(|b| Ipv6Subnet::new(b.addr, b.prefix))
            .collect::<Vec<_>>();

        log::debug!(
            "set_range({text}) -> {n} subnets",
            n = subnets.len()
        );
        self.state = Some(Ipv6State {
            start,
            end,
            subnets,
        });
        Ok(())
    }

    /// Retrieve the normalized range string, `<start>-<end>`.
    pub fn range_text(&self) -> Result<String, RangeError> {
        let state = self.state.as_ref().ok_or(RangeError::RangeNotSet)?;
        Ok(format!(
            "{}-{}",
            ipv6::format_addr(state.start),
            ipv6::format_addr(state.end)
        ))
    }

    /// Retrieve the derived subnet list.
    pub fn subnets(&self) -> Result<&[Ipv6Subnet], RangeError> {
        let state = self.state.as_ref().ok_or(RangeError::RangeNotSet)?;
        Ok(&state.subnets)
    }

    /// Retrieve the subnet list formatted as `<address>/<prefix>` strings.
    pub fn subnet_texts(&self) -> Result<Vec<String>, RangeError> {
        Ok(self.subnets()?.iter().map(ToString::to_string).collect())
    }
}
