// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use sha384_core::DigestError;
use thiserror::Error;

/// Stream hashing error
#[derive(Error, Debug)]
pub enum StreamError {
    /// Reading the source failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The cancellation flag was raised between chunks
    #[error("hashing cancelled after {bytes_hashed} bytes")]
    Cancelled {
        /// Bytes consumed before cancellation was observed
        bytes_hashed: u128,
    },

    /// `chunk_size` must be non-zero
    #[error("chunk size must be greater than zero")]
    InvalidChunkSize,

    /// The engine rejected input
    #[error("digest engine error: {0}")]
    Digest(#[from] DigestError),

    /// The blocking hashing task panicked or was aborted
    #[error("hashing task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Result alias for stream operations
pub type StreamResult<T> = Result<T, StreamError>;
