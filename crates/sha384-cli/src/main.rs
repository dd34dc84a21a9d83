// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! sha384sum: print or check SHA-384 (FIPS 180-4) digests

mod commands;
mod config;
mod error;

#[cfg(test)]
mod tests;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use sha384_stream::DEFAULT_CHUNK_SIZE;

use config::{Config, Mode, log_filter};
use error::CliResult;

#[derive(Parser, Debug)]
#[command(name = "sha384sum")]
#[command(about = "Print or check SHA-384 digests")]
#[command(version)]
struct Cli {
    /// Files to hash; none or `-` reads standard input
    #[arg(value_name = "FILE", conflicts_with_all = ["text", "check"])]
    files: Vec<PathBuf>,

    /// Hash the UTF-8 encoding of STRING instead of reading files
    #[arg(long, value_name = "STRING", conflicts_with = "check")]
    text: Option<String>,

    /// Write the 48 raw digest bytes instead of a hex line
    #[arg(long, conflicts_with = "check")]
    raw: bool,

    /// Read `<hex>  <path>` lines from LIST and verify each path
    #[arg(short = 'c', long, value_name = "LIST")]
    check: Option<PathBuf>,

    /// With --check, do not print OK lines
    #[arg(long, requires = "check")]
    quiet: bool,

    /// Bytes read per step
    #[arg(
        long,
        value_name = "BYTES",
        env = "SHA384SUM_CHUNK_SIZE",
        default_value_t = DEFAULT_CHUNK_SIZE
    )]
    chunk_size: usize,

    /// Raise log verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn run(cli: Cli) -> CliResult<()> {
    let config = Config::resolve(
        &cli.files,
        cli.text,
        cli.check.as_deref(),
        cli.raw,
        cli.quiet,
        cli.chunk_size,
    )?;
    let mut out = io::stdout().lock();

    match &config.mode {
        Mode::Hash { inputs, raw } => {
            commands::hash::handle(inputs, *raw, &config.stream, &mut out)
        }
        Mode::Check { list, quiet } => {
            let summary = commands::check::handle(list, *quiet, &config.stream, &mut out)?;
            for warning in summary.warnings() {
                eprintln!("sha384sum: {warning}");
            }
            summary.into_result()
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose))
        .with_writer(io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("sha384sum: {e}");
            ExitCode::FAILURE
        }
    }
}
