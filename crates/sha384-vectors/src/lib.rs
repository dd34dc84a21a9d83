// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Known-answer vectors and test helpers for SHA-384 backends.
//!
//! Also hosts [`TempFile`], the throwaway file shared by the stream and CLI
//! test suites.
//!
//! Every backend (the engine itself, the stream layer, the CLI) checks itself
//! against the same table through [`check_known_answers`].
//!
//! References:
//! [1] FIPS 180-4: Secure Hash Standard (SHS), Appendix D / NIST examples
//!     <https://csrc.nist.gov/csrc/media/projects/cryptographic-standards-and-guidelines/documents/examples/SHA384.pdf>
//! [2] RFC 6234, Section 8.5 test vectors (TEST1, TEST2_2, TEST3)

mod chunking;
mod temp;
mod vectors;

pub use chunking::{SPLIT_SIZES, split_by_sizes};
pub use temp::TempFile;
pub use vectors::{KNOWN_ANSWERS, KnownAnswer, Message, pattern};

use std::fmt;

use hex::FromHex;

/// A vector whose computed digest differs from the expected one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    /// Vector name
    pub name: &'static str,
    /// Expected digest (hex)
    pub expected: &'static str,
    /// Computed digest (hex)
    pub got: String,
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: digest mismatch\n  expected: {}\n  got:      {}",
            self.name, self.expected, self.got
        )
    }
}

/// Decodes the expected digest of a vector.
///
/// # Panics
///
/// Panics if the table entry is not 96 hex digits (a broken table, not a
/// backend failure).
pub fn expected_bytes(vector: &KnownAnswer) -> [u8; 48] {
    <[u8; 48]>::from_hex(vector.digest)
        .unwrap_or_else(|_| panic!("{}: malformed expected digest", vector.name))
}

/// Runs every entry of [`KNOWN_ANSWERS`] through `hash` and collects mismatches.
pub fn check_known_answers<F>(mut hash: F) -> Vec<Failure>
where
    F: FnMut(&[u8]) -> [u8; 48],
{
    KNOWN_ANSWERS
        .iter()
        .filter_map(|vector| {
            let got = hash(&vector.message.bytes());
            if got == expected_bytes(vector) {
                None
            } else {
                Some(Failure {
                    name: vector.name,
                    expected: vector.digest,
                    got: hex::DisplayHex::to_lower_hex_string(&got[..]),
                })
            }
        })
        .collect()
}

/// Asserts that `hash` passes every known answer, printing all failures.
///
/// # Panics
///
/// Panics if any vector mismatches.
pub fn assert_known_answers<F>(hash: F)
where
    F: FnMut(&[u8]) -> [u8; 48],
{
    let failures = check_known_answers(hash);
    if !failures.is_empty() {
        for failure in &failures {
            eprintln!("{failure}");
        }
        panic!("{} of {} vectors failed", failures.len(), KNOWN_ANSWERS.len());
    }
}
