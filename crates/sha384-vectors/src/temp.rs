// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

/// Uniquely named file in the system temp dir, removed on drop.
///
/// Names combine the process id and a per-process counter, so tests running
/// in parallel (within one binary or across crates) never collide.
#[derive(Debug)]
pub struct TempFile {
    path: PathBuf,
}

impl TempFile {
    /// Creates the file with `contents`.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    pub fn with_contents(contents: &[u8]) -> Self {
        let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        let path = std::env::temp_dir().join(format!(
            "sha384-{}-{id}.bin",
            std::process::id()
        ));
        std::fs::write(&path, contents)
            .unwrap_or_else(|e| panic!("cannot write {}: {e}", path.display()));

        Self { path }
    }

    /// Absolute path of the file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path as UTF-8, for building checksum lines.
    ///
    /// # Panics
    ///
    /// Panics if the temp dir path is not valid UTF-8.
    pub fn path_str(&self) -> &str {
        self.path
            .to_str()
            .unwrap_or_else(|| panic!("non UTF-8 temp path: {}", self.path.display()))
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}
