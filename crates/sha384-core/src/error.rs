// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Digest engine error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestError {
    /// Input was fed to an engine that has already been finalized
    #[error("engine already finalized; call reset() before feeding more input")]
    InvalidState,
}

/// Error parsing a hex-encoded digest
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseDigestError {
    /// Input does not have exactly 96 hex digits
    #[error("expected {expected} hex digits, got {actual}")]
    InvalidLength {
        /// Required number of hex digits
        expected: usize,
        /// Number of characters supplied
        actual: usize,
    },
    /// Input contains a character outside `[0-9a-fA-F]`
    #[error("digest contains a non-hex character")]
    InvalidHex,
}
