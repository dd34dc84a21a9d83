// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::fmt;
use std::io::Write;

use sha384_core::Digest;
use sha384_stream::StreamConfig;
use tracing::info;

use super::digest_input;
use crate::config::Input;
use crate::error::CliResult;

/// `<hex>  <name>`, the coreutils checksum layout
pub fn format_line(digest: &Digest, name: impl fmt::Display) -> String {
    format!("{digest}  {name}")
}

/// Hashes every input and writes one line each, or the bare bytes with `raw`.
///
/// Stops at the first input that cannot be read.
pub fn handle<W: Write>(
    inputs: &[Input],
    raw: bool,
    config: &StreamConfig,
    out: &mut W,
) -> CliResult<()> {
    for input in inputs {
        let digest = digest_input(input, config)?;
        info!(input = %input, "hashed");

        if raw {
            out.write_all(digest.as_bytes())?;
        } else {
            writeln!(out, "{}", format_line(&digest, input))?;
        }
    }

    out.flush()?;
    Ok(())
}
