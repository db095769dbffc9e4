#![allow(clippy::print_stderr)]

use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;

use tsestree::cli::{self, CliArgs};

fn main() -> ExitCode {
    // TSESTREE_LOG / RUST_LOG switch tracing on; see src/tracing_config.rs.
    tsestree::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let stdout = std::io::stdout();
    let report = match cli::run(&args, &mut stdout.lock()) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            return ExitCode::FAILURE;
        }
    };

    for (path, err) in &report.failures {
        eprintln!("{} {}: {err:#}", "error:".red().bold(), path.display().to_string().bold());
    }
    if report.succeeded() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
