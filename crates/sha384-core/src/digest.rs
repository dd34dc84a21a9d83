// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! 48-byte SHA-384 output and its hex presentation.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use hex::{DisplayHex, FromHex};
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use crate::consts::HASH_LEN;
use crate::error::ParseDigestError;

/// Output of the SHA-384 hash function.
///
/// Raw bytes are canonical. `Display` and `LowerHex` render 96 lowercase hex
/// digits (high nibble first), `UpperHex` renders uppercase, and `FromStr`
/// accepts either case. Equality is evaluated in constant time.
#[derive(Clone, Copy, Zeroize)]
pub struct Digest([u8; HASH_LEN]);

impl Digest {
    /// Number of hex digits in the textual form
    pub const HEX_LEN: usize = HASH_LEN * 2;

    /// Wraps raw digest bytes
    pub const fn from_bytes(bytes: [u8; HASH_LEN]) -> Self {
        Self(bytes)
    }

    /// Borrows the raw digest bytes
    pub const fn as_bytes(&self) -> &[u8; HASH_LEN] {
        &self.0
    }

    /// Returns the raw digest bytes
    pub const fn to_bytes(self) -> [u8; HASH_LEN] {
        self.0
    }

    /// Lowercase hex string, 96 characters
    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; HASH_LEN]> for Digest {
    fn from(bytes: [u8; HASH_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Digest> for [u8; HASH_LEN] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl ConstantTimeEq for Digest {
    fn ct_eq(&self, other: &Self) -> subtle::Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}

impl PartialEq for Digest {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Digest {}

impl PartialEq<[u8; HASH_LEN]> for Digest {
    fn eq(&self, other: &[u8; HASH_LEN]) -> bool {
        self.0[..].ct_eq(&other[..]).into()
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0.as_slice().as_hex(), f)
    }
}

impl fmt::UpperHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0.as_slice().as_hex(), f)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({self:x})")
    }
}

impl FromStr for Digest {
    type Err = ParseDigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != Self::HEX_LEN {
            return Err(ParseDigestError::InvalidLength {
                expected: Self::HEX_LEN,
                actual: s.len(),
            });
        }

        <[u8; HASH_LEN]>::from_hex(s)
            .map(Self)
            .map_err(|_| ParseDigestError::InvalidHex)
    }
}
