// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

pub mod check;
pub mod hash;

use std::io;

use sha384_core::Digest;
use sha384_stream::{StreamConfig, hash_file, hash_reader, sha384_text};

use crate::config::Input;
use crate::error::CliResult;

/// Digest of a single input, streamed in `config.chunk_size` reads
pub fn digest_input(input: &Input, config: &StreamConfig) -> CliResult<Digest> {
    let digest = match input {
        Input::Stdin => hash_reader(io::stdin().lock(), config, None)?,
        Input::File(path) => hash_file(path, config, None)?,
        Input::Text(text) => sha384_text(text),
    };
    Ok(digest)
}
