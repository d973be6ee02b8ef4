use std::io::{self, BufRead, Write};

use time::macros::format_description;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::EnvFilter;

/// Diagnostics go to stderr so they never interleave with the report.
/// `RUST_LOG` wins over `verbose` when set.
pub fn setup_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "error" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let timer = LocalTime::new(format_description!(
        "[hour]:[minute]:[second].[subsecond digits:3]"
    ));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(timer)
        .with_writer(io::stderr)
        .init();
}

pub fn print_welcome<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Welcome to logalyse!")?;
    writeln!(out, "This application finds:")?;
    writeln!(out, "  - The number of unique IP addresses")?;
    writeln!(out, "  - The top 3 most visited URLs")?;
    writeln!(out, "  - The top 3 most active IP addresses")?;
    writeln!(out)
}

pub fn print_analysing<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nAnalysing file...\n\n")
}

/// Asks once for a log path and returns the raw answer. EOF reads as blank.
pub fn prompt_for_path<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<String> {
    write!(
        out,
        "Enter the path to the log file you want to analyse (leave empty to use example log file): "
    )?;
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer)
}
