// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-384 digest engine with secure memory handling
//!
//! Implementation per FIPS 180-4 and RFC 6234 (SHA-384 is SHA-512 with its
//! own initial hash values and the output truncated to 48 bytes).
//! No hashing dependencies. All intermediate values are zeroized.
//!
//! ```
//! use sha384_core::{sha384, Sha384};
//!
//! let mut engine = Sha384::new();
//! engine.update(b"a").unwrap();
//! engine.update(b"bc").unwrap();
//!
//! assert_eq!(engine.finalize(), sha384(b"abc"));
//! assert_eq!(
//!     sha384(b"abc").to_hex(),
//!     "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed\
//!      8086072ba1e7cc2358baeca134c825a7"
//! );
//! ```
//!
//! References:
//! - FIPS 180-4: Secure Hash Standard (SHS)
//!   <https://nvlpubs.nist.gov/nistpubs/fips/nist.fips.180-4.pdf>
//! - RFC 6234: US Secure Hash Algorithms (SHA and SHA-based HMAC and HKDF)
//!   <https://datatracker.ietf.org/doc/html/rfc6234>

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod consts;
mod digest;
mod engine;
mod error;
#[cfg(feature = "std")]
mod io;
mod word;

pub use consts::{BLOCK_LEN, HASH_LEN};
pub use digest::Digest;
pub use engine::{Sha384, sha384};
pub use error::{DigestError, ParseDigestError};
