// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Async entry points. The engine is synchronous; these only move work off
//! the async executor or interleave file reads with hashing.
//!
//! All functions must be called from within a Tokio runtime.

use std::io::ErrorKind;
use std::path::Path;

use sha384_core::{Digest, Sha384, sha384};
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::{debug, instrument, trace};

use crate::cancel::CancellationFlag;
use crate::config::StreamConfig;
use crate::error::{StreamError, StreamResult};

/// Hashes an owned buffer on Tokio's blocking pool.
///
/// # Errors
/// [`StreamError::Join`] if the blocking task panicked or was cancelled.
pub async fn sha384_async(data: Vec<u8>) -> StreamResult<Digest> {
    let len = data.len();
    let digest = tokio::task::spawn_blocking(move || sha384(&data)).await?;
    debug!(bytes_hashed = len, "buffer hashed on blocking pool");

    Ok(digest)
}

/// Async counterpart of [`hash_reader`](crate::hash_reader).
///
/// Same cancellation and `Interrupted` retry rules as the blocking version.
///
/// Each chunk is hashed inline between reads; a chunk is at most
/// `config.chunk_size` bytes, which bounds the time spent off the executor.
pub async fn hash_reader_async<R>(
    mut reader: R,
    config: &StreamConfig,
    cancel: Option<&CancellationFlag>,
) -> StreamResult<Digest>
where
    R: AsyncRead + Unpin,
{
    config.validate()?;

    let mut engine = Sha384::new();
    let mut buf = config.chunk_buffer();

    loop {
        if cancel.is_some_and(CancellationFlag::is_cancelled) {
            debug!(bytes_hashed = %engine.bytes_hashed(), "hashing cancelled");
            return Err(StreamError::Cancelled {
                bytes_hashed: engine.bytes_hashed(),
            });
        }

        let n = match reader.read(&mut buf).await {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };

        engine.update(&buf[..n])?;
        trace!(chunk_len = n, "chunk hashed");
    }

    Ok(engine.finalize())
}

/// Opens `path` with `tokio::fs` and hashes it chunk by chunk.
#[instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub async fn hash_file_async(
    path: &Path,
    config: &StreamConfig,
    cancel: Option<&CancellationFlag>,
) -> StreamResult<Digest> {
    let file = tokio::fs::File::open(path).await?;
    let digest = hash_reader_async(file, config, cancel).await?;
    debug!("file hashed");

    Ok(digest)
}
