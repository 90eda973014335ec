// src/main.rs

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use corecount::CoreSnapshot;
use tracing::Level;

/// Print the number of logical and physical processors on this machine.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Print only the logical processor count
    #[arg(long, conflicts_with = "physical")]
    logical: bool,

    /// Print only the physical core count
    #[arg(long)]
    physical: bool,

    /// Log every fallback taken while detecting
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        })
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let run_span = tracing::span!(Level::INFO, "Detect Cores");
    let snapshot = run_span.in_scope(CoreSnapshot::capture);

    let mut out = io::stdout().lock();
    let written = if args.logical {
        writeln!(out, "{}", snapshot.logical)
    } else if args.physical {
        writeln!(out, "{}", snapshot.physical)
    } else {
        writeln!(out, "platform: {}", snapshot.platform)
            .and_then(|_| writeln!(out, "logical: {}", snapshot.logical))
            .and_then(|_| writeln!(out, "physical: {}", snapshot.physical))
    };
    written.context("Failed to write core counts to stdout")?;

    Ok(())
}
