use colored::Colorize;
use ip_range_summary::output::{print_summary, print_summary_json, RangeSummary};
use ip_range_summary::{Ipv4Range, Ipv6Range};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    log::info!("#Start main()");

    let mut json = false;
    let mut ranges: Vec<String> = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            _ => ranges.push(arg),
        }
    }
    if ranges.is_empty() {
        eprintln!("Usage: ip-range-summary <range> [<range> ...] [--json]");
        eprintln!("  e.g. ip-range-summary 192.0.2.1-192.0.2.100");
        std::process::exit(2);
    }

    for text in &ranges {
        let summary = match summarize(text) {
            Ok(summary) => summary,
            Err(e) => {
                log::error!("{text}: {e}");
                eprintln!("{failed}: {text}: {e}", failed = "failed".on_red());
                std::process::exit(1);
            }
        };
        if json {
            print_summary_json(&summary)?;
        } else {
            print_summary(&summary);
        }
    }

    Ok(())
}

/// Decompose one range string, picking the family by its separator character.
fn summarize(text: &str) -> Result<RangeSummary, Box<dyn Error>> {
    if text.contains(':') {
        let mut range = Ipv6Range::new();
        range.set_range(text)?;
        Ok(RangeSummary {
            range: range.range_text()?,
            subnets: range.subnet_texts()?,
        })
    } else {
        let mut range = Ipv4Range::new();
        range.set_range(text)?;
        Ok(RangeSummary {
            range: range.range_text()?,
            subnets: range.subnet_texts()?,
        })
    }
}
