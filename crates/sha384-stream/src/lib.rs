// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! I/O surface around the SHA-384 engine.
//!
//! - Blocking: [`hash_reader`], [`hash_file`] read in bounded chunks and poll
//!   a [`CancellationFlag`] between chunks.
//! - Async: [`sha384_async`] runs the one-shot digest on Tokio's blocking pool;
//!   [`hash_reader_async`] and [`hash_file_async`] interleave reads and hashing.
//! - Text: [`sha384_text`] always hashes the UTF-8 encoding.
//!
//! ```no_run
//! use std::path::Path;
//! use sha384_stream::{hash_file, StreamConfig};
//!
//! let digest = hash_file(Path::new("Cargo.toml"), &StreamConfig::default(), None)?;
//! println!("{digest}");
//! # Ok::<(), sha384_stream::StreamError>(())
//! ```

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod cancel;
mod config;
mod error;
mod reader;
mod task;

pub use cancel::CancellationFlag;
pub use config::{DEFAULT_CHUNK_SIZE, StreamConfig};
pub use error::{StreamError, StreamResult};
pub use reader::{hash_file, hash_reader, new_hasher, sha384_text};
pub use task::{hash_file_async, hash_reader_async, sha384_async};

pub use sha384_core::{Digest, Sha384};
