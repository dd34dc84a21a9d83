// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use sha384_core::ParseDigestError;
use sha384_stream::StreamError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Stream(#[from] StreamError),

    #[error("invalid digest: {0}")]
    Parse(#[from] ParseDigestError),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("{failed} computed checksum(s) did NOT match, {unreadable} file(s) could not be read")]
    ChecksumMismatch { failed: usize, unreadable: usize },
}

pub type CliResult<T> = Result<T, CliError>;
