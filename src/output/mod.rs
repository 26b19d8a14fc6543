//! Output formatting for the command line wrapper.
//!
//! Formats a decomposed range either as an aligned terminal table or as a
//! JSON document. The library core stays print-free; only the binary calls
//! into this module.

use colored::Colorize;
use serde::{Deserialize, Serialize};

/// A decomposed range in printable form.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RangeSummary {
    /// Normalized range string, `<start>-<end>`.
    pub range: String,
    /// Subnet strings in ascending base-address order.
    pub subnets: Vec<String>,
}

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

/// Render a summary as terminal table lines, one subnet per row.
pub fn summary_lines(summary: &RangeSummary) -> Vec<String> {
    let mut lines = Vec::with_capacity(summary.subnets.len() + 1);
    lines.push(format!("# range {}", summary.range));
    let width = summary.subnets.iter().map(|s| s.len() + 2).max().unwrap_or(0);
    for (i, subnet) in summary.subnets.iter().enumerate() {
        lines.push(format!(
            "{cnt},{subnet}",
            cnt = format_field(i + 1, 5),
            subnet = format_field(subnet, width),
        ));
    }
    lines
}

/// Print a summary to stdout as a table.
pub fn print_summary(summary: &RangeSummary) {
    log::info!(
        "# Got subnet count = {} for {}",
        summary.subnets.len(),
        summary.range
    );
    for line in summary_lines(summary) {
        if line.starts_with('#') {
            println!("{}", line.green());
        } else {
            println!("{line}");
        }
    }
}

/// Print a summary to stdout as pretty JSON.
pub fn print_summary_json(summary: &RangeSummary) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_field_short() {
        assert_eq!(format_field("test", 10), "    \"test\"");
    }

    #[test]
    fn test_format_field_exact() {
        assert_eq!(format_field("test", 6), "\"test\"");
    }

    #[test]
    fn test_format_field_long() {
        assert_eq!(format_field("long_value", 5), "\"long_value\"");
    }

    #[test]
    fn test_summary_lines() {
        let summary = RangeSummary {
            range: "10.0.0.0-10.0.0.255".to_string(),
            subnets: vec!["10.0.0.0/24".to_string()],
        };
        let lines = summary_lines(&summary);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "# range 10.0.0.0-10.0.0.255");
        assert!(lines[1].contains("\"10.0.0.0/24\""));
    }

    #[test]
    fn test_summary_json_round_trip() {
        let summary = RangeSummary {
            range: "192.0.2.1-192.0.2.1".to_string(),
            subnets: vec!["192.0.2.1/32".to_string()],
        };
        let json = serde_json::to_string(&summary).unwrap();
        let back: RangeSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, summary);
    }
}
