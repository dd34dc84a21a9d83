// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Verification of `<hex>  <path>` checksum lists.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use sha384_core::Digest;
use sha384_stream::{StreamConfig, hash_file};
use tracing::{debug, warn};

use crate::config::Input;
use crate::error::{CliError, CliResult};

/// A well-formed checksum line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<'a> {
    pub expected: Digest,
    pub path: &'a str,
}

/// Parses `<hex> <mode><path>` where `<mode>` is a space (text mode) or `*`
/// (binary mode). Exactly one mode character is stripped, so a path may itself
/// start with `*`. `<hex> <path>` with a single space is also accepted.
pub fn parse_line(line: &str) -> CliResult<Entry<'_>> {
    let line = line.strip_suffix('\r').unwrap_or(line);

    let (hex, rest) = line
        .split_once(' ')
        .ok_or_else(|| CliError::InvalidInput("missing path".into()))?;
    let expected: Digest = hex.parse()?;

    let path = rest.strip_prefix([' ', '*']).unwrap_or(rest);
    if path.is_empty() {
        return Err(CliError::InvalidInput("missing path".into()));
    }

    Ok(Entry { expected, path })
}

/// Counters for one checksum list
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub ok: usize,
    pub failed: usize,
    pub unreadable: usize,
    pub malformed: usize,
}

impl Summary {
    /// Messages worth printing to stderr before the verdict
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.malformed > 0 {
            warnings.push(format!(
                "WARNING: {} line(s) are improperly formatted",
                self.malformed
            ));
        }
        warnings
    }

    /// Fails if any entry mismatched or could not be read, or if the list
    /// held no well-formed line at all.
    pub fn into_result(self) -> CliResult<()> {
        if self.failed > 0 || self.unreadable > 0 {
            return Err(CliError::ChecksumMismatch {
                failed: self.failed,
                unreadable: self.unreadable,
            });
        }
        if self.ok == 0 {
            return Err(CliError::InvalidInput(
                "no properly formatted checksum lines found".into(),
            ));
        }
        Ok(())
    }
}

/// Checks every line of `lines`, writing `<path>: OK|FAILED` to `out`.
///
/// Paths are opened relative to the current directory.
pub fn verify<R, W>(lines: R, quiet: bool, config: &StreamConfig, out: &mut W) -> CliResult<Summary>
where
    R: BufRead,
    W: Write,
{
    let mut summary = Summary::default();

    for (lineno, line) in lines.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let entry = match parse_line(&line) {
            Ok(entry) => entry,
            Err(e) => {
                warn!(line = lineno + 1, error = %e, "malformed checksum line");
                summary.malformed += 1;
                continue;
            }
        };

        match hash_file(Path::new(entry.path), config, None) {
            Ok(digest) if digest == entry.expected => {
                summary.ok += 1;
                if !quiet {
                    writeln!(out, "{}: OK", entry.path)?;
                }
            }
            Ok(_) => {
                summary.failed += 1;
                writeln!(out, "{}: FAILED", entry.path)?;
            }
            Err(e) => {
                debug!(path = entry.path, error = %e, "cannot read listed file");
                summary.unreadable += 1;
                writeln!(out, "{}: FAILED open or read", entry.path)?;
            }
        }
    }

    out.flush()?;
    Ok(summary)
}

/// Opens the checksum list (a file or stdin) and verifies it.
pub fn handle<W: Write>(
    list: &Input,
    quiet: bool,
    config: &StreamConfig,
    out: &mut W,
) -> CliResult<Summary> {
    match list {
        Input::Stdin => verify(io::stdin().lock(), quiet, config, out),
        Input::File(path) => verify(BufReader::new(File::open(path)?), quiet, config, out),
        Input::Text(text) => verify(text.as_bytes(), quiet, config, out),
    }
}
