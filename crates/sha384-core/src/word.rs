// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-512 family logical functions per RFC 6234 Section 5.2.
//!
//! All functions are branch-free over the word value, so their timing does
//! not depend on message contents.

/// Ch(x,y,z) = (x ∧ y) ⊕ (¬x ∧ z)
///
/// Computed as z ⊕ (x ∧ (y ⊕ z)), which saves the negation.
#[inline(always)]
pub(crate) fn ch(x: u64, y: u64, z: u64) -> u64 {
    z ^ (x & (y ^ z))
}

/// Maj(x,y,z) = (x ∧ y) ⊕ (x ∧ z) ⊕ (y ∧ z)
///
/// Optimized form: (x & y) ^ (z & (x ^ y))
#[inline(always)]
pub(crate) fn maj(x: u64, y: u64, z: u64) -> u64 {
    (x & y) ^ (z & (x ^ y))
}

/// Σ0(x) = ROTR^28(x) ⊕ ROTR^34(x) ⊕ ROTR^39(x)
#[inline(always)]
pub(crate) fn bsig0(x: u64) -> u64 {
    x.rotate_right(28) ^ x.rotate_right(34) ^ x.rotate_right(39)
}

/// Σ1(x) = ROTR^14(x) ⊕ ROTR^18(x) ⊕ ROTR^41(x)
#[inline(always)]
pub(crate) fn bsig1(x: u64) -> u64 {
    x.rotate_right(14) ^ x.rotate_right(18) ^ x.rotate_right(41)
}

/// σ0(x) = ROTR^1(x) ⊕ ROTR^8(x) ⊕ SHR^7(x)
#[inline(always)]
pub(crate) fn ssig0(x: u64) -> u64 {
    x.rotate_right(1) ^ x.rotate_right(8) ^ (x >> 7)
}

/// σ1(x) = ROTR^19(x) ⊕ ROTR^61(x) ⊕ SHR^6(x)
#[inline(always)]
pub(crate) fn ssig1(x: u64) -> u64 {
    x.rotate_right(19) ^ x.rotate_right(61) ^ (x >> 6)
}
