// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use zeroize::Zeroizing;

use crate::error::{StreamError, StreamResult};

/// Default read size: 64 KiB, i.e. 512 SHA-384 blocks per chunk.
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// Settings for chunked hashing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamConfig {
    /// Bytes read per step; cancellation is checked once per chunk
    pub chunk_size: usize,
}

impl StreamConfig {
    /// Config with an explicit chunk size (validated on use)
    pub const fn with_chunk_size(chunk_size: usize) -> Self {
        Self { chunk_size }
    }

    /// Rejects a zero chunk size
    pub fn validate(&self) -> StreamResult<()> {
        if self.chunk_size == 0 {
            return Err(StreamError::InvalidChunkSize);
        }
        Ok(())
    }

    /// Read buffer of `chunk_size` bytes, wiped on drop whatever the exit path
    pub(crate) fn chunk_buffer(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(vec![0u8; self.chunk_size])
    }
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}
