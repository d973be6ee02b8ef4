use std::io;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::error;

use logalyse::args::resolve_log_path;
use logalyse::utils::{print_analysing, print_welcome, prompt_for_path, setup_logging};
use logalyse::{analyse, open_log, write_report, Args};

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let path = match args.path {
        Some(path) => path,
        None => {
            let mut stdout = io::stdout().lock();
            print_welcome(&mut stdout)?;
            let answer = prompt_for_path(&mut io::stdin().lock(), &mut stdout)
                .context("Failed to read log file path")?;
            resolve_log_path(&answer)
        }
    };

    let lines = match open_log(&path) {
        Ok(lines) => lines,
        Err(e) if e.is_not_found() => {
            println!("Error: file could not be found");
            error!("Error: {}", e);
            process::exit(1);
        }
        Err(e) => return Err(e).context("Failed to open log file"),
    };

    print_analysing(&mut io::stdout().lock())?;

    match analyse(lines) {
        Ok(results) => {
            write_report(&results, &mut io::stdout().lock()).context("Failed to write report")?;
            Ok(())
        }
        Err(e) => {
            error!("Error: {}", e);
            process::exit(1);
        }
    }
}
