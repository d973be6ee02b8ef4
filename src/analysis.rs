use std::path::Path;
use std::time::Instant;

use tracing::{info, trace, warn};

use crate::error::AnalysisError;
use crate::extract::FieldExtractor;
use crate::rank::top_three;
use crate::source::{self, LineSource};
use crate::stats::LogResults;
use crate::tally::FrequencyTally;

/// Running state of one analysis. Never shared between runs.
#[derive(Debug, Default)]
pub struct LogTallies {
    pub ip_addresses: FrequencyTally,
    pub urls: FrequencyTally,
    pub lines: usize,
    pub lines_without_ip: usize,
    pub lines_without_url: usize,
}

impl LogTallies {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_results(self) -> LogResults {
        LogResults {
            unique_ip_address_count: self.ip_addresses.len(),
            top_urls: top_three(&self.urls),
            top_ip_addresses: top_three(&self.ip_addresses),
        }
    }
}

/// Counts the address and URL found on `line`, if any.
pub fn record_line(extractor: &FieldExtractor, line: &str, tallies: &mut LogTallies) {
    tallies.lines += 1;

    match extractor.ip_address(line) {
        Some(ip) => tallies.ip_addresses.increment(ip),
        None => {
            tallies.lines_without_ip += 1;
            trace!(line_number = tallies.lines, "No IP address on line");
        }
    }

    match extractor.url(line) {
        Some(url) => tallies.urls.increment(url),
        None => {
            tallies.lines_without_url += 1;
            trace!(line_number = tallies.lines, "No request URL on line");
        }
    }
}

/// Drains `source` and summarises it. A failing source fails the whole run.
pub fn analyse<S: LineSource>(mut source: S) -> Result<LogResults, AnalysisError> {
    let start_time = Instant::now();
    info!(action = "start", component = "log_analysis", "Starting log analysis");

    let extractor = FieldExtractor::new()?;
    let mut tallies = LogTallies::new();

    loop {
        match source.next_line() {
            Ok(Some(line)) => record_line(&extractor, &line, &mut tallies),
            Ok(None) => break,
            Err(err) => {
                warn!(
                    action = "read",
                    component = "log_analysis",
                    lines_read = tallies.lines,
                    error = %err,
                    "Log stream failed, discarding partial results"
                );
                return Err(AnalysisError::Stream {
                    line: tallies.lines,
                    source: err,
                });
            }
        }
    }

    info!(
        action = "complete",
        component = "log_analysis",
        lines = tallies.lines,
        lines_without_ip = tallies.lines_without_ip,
        lines_without_url = tallies.lines_without_url,
        unique_ip_addresses = tallies.ip_addresses.len(),
        unique_urls = tallies.urls.len(),
        duration_ms = start_time.elapsed().as_millis(),
        "Log analysis completed"
    );

    Ok(tallies.into_results())
}

/// Existence check, then [`analyse`] over the file's lines.
pub fn analyse_file(path: &Path) -> Result<LogResults, AnalysisError> {
    let lines = source::open_log(path)?;
    info!(action = "open", component = "log_file", path = ?path, "Streaming log file");
    analyse(lines)
}
