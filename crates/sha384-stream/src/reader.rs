// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Blocking, chunked hashing of `Read` sources.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use sha384_core::{Digest, Sha384, sha384};
use tracing::{debug, instrument, trace};

use crate::cancel::CancellationFlag;
use crate::config::StreamConfig;
use crate::error::{StreamError, StreamResult};

/// Creates a fresh incremental engine.
pub fn new_hasher() -> Sha384 {
    Sha384::new()
}

/// Digest of the UTF-8 encoding of `text`
pub fn sha384_text(text: &str) -> Digest {
    sha384(text.as_bytes())
}

/// Hashes everything `reader` yields, `config.chunk_size` bytes at a time.
///
/// `cancel` is checked before every read. `Interrupted` reads are retried.
///
/// # Errors
/// - [`StreamError::InvalidChunkSize`] for a zero chunk size
/// - [`StreamError::Cancelled`] once `cancel` is raised
/// - [`StreamError::Io`] for any other read failure
pub fn hash_reader<R: Read>(
    mut reader: R,
    config: &StreamConfig,
    cancel: Option<&CancellationFlag>,
) -> StreamResult<Digest> {
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

        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };

        engine.update(&buf[..n])?;
        trace!(chunk_len = n, "chunk hashed");
    }

    let digest = engine.finalize();
    debug!(bytes_hashed = %engine.bytes_hashed(), "reader hashed");

    Ok(digest)
}

/// Opens `path` and hashes its contents with [`hash_reader`].
#[instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub fn hash_file(
    path: &Path,
    config: &StreamConfig,
    cancel: Option<&CancellationFlag>,
) -> StreamResult<Digest> {
    let file = File::open(path)?;
    hash_reader(file, config, cancel)
}
