//! permsweep — permission-denied simulator for filesystem trees.
//!
//! Thin binary entry point. All logic lives in the `permsweep-core`
//! and `permsweep-cli` crates.

use std::process::ExitCode;

use clap::Parser;

fn main() -> ExitCode {
    let args = permsweep_cli::Args::parse();

    // Initialise structured logging. Verbose mode surfaces the
    // per-entry skip decisions, which are logged at DEBUG.
    let max_level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    permsweep_cli::run(args)
}
