use std::io::{self, Write};

use crate::rank::{RankedEntry, TOP_N};
use crate::stats::LogResults;

fn ranking_lines(ranking: &[RankedEntry]) -> impl Iterator<Item = String> + '_ {
    ranking
        .iter()
        .enumerate()
        .map(|(i, entry)| format!("  {}. {} ({})", i + 1, entry.key, entry.count))
}

/// Display lines for `results`, in report order. Blank separators are empty strings.
pub fn render(results: &LogResults) -> Vec<String> {
    let mut lines = vec![
        "RESULTS".to_string(),
        "-------".to_string(),
        format!(
            "Number of unique IP addresses: {}",
            results.unique_ip_address_count
        ),
        String::new(),
        format!("Top {TOP_N} most visited URLs:"),
    ];
    lines.extend(ranking_lines(&results.top_urls));

    lines.push(String::new());
    lines.push(format!("Top {TOP_N} most active IP addresses:"));
    lines.extend(ranking_lines(&results.top_ip_addresses));

    lines
}

pub fn write_report<W: Write>(results: &LogResults, out: &mut W) -> io::Result<()> {
    for line in render(results) {
        writeln!(out, "{line}")?;
    }
    out.flush()
}
