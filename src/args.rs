use clap::Parser;
use std::path::PathBuf;

/// Log analysed when the user gives no path at the prompt.
pub const EXAMPLE_LOG_PATH: &str =
    concat!(env!("CARGO_MANIFEST_DIR"), "/assets/example-data.log");

#[derive(Parser, Debug)]
#[command(
    name = "logalyse",
    about = "Analyse a web server access log for unique clients, top URLs and top IP addresses",
    version,
    long_about = None
)]
pub struct Args {
    /// Access log to analyse. Prompted for when omitted
    pub path: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Maps a prompt answer to a path. A blank answer picks the bundled example log.
pub fn resolve_log_path(answer: &str) -> PathBuf {
    match answer.trim() {
        "" => PathBuf::from(EXAMPLE_LOG_PATH),
        path => PathBuf::from(path),
    }
}
