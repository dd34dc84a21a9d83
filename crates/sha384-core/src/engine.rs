// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-384 implementation per RFC 6234 Section 6.3 (SHA-512 compression,
//! SHA-384 initial values, output truncated to 384 bits).

use core::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::{BLOCK_LEN, H0, HASH_LEN, K, LENGTH_FIELD_LEN, ROUNDS};
use crate::digest::Digest;
use crate::error::DigestError;
use crate::word::{bsig0, bsig1, ch, maj, ssig0, ssig1};

/// Hash registers plus every per-block temporary.
///
/// Schedule and working variables live here rather than on the stack so a
/// single `zeroize()` wipes all of them.
#[derive(Clone, Zeroize)]
struct CompressionState {
    // Hash state H(i)
    h: [u64; 8],
    // Message schedule W[0..79]
    w: [u64; ROUNDS],
    // Working variables a..h
    wv: [u64; 8],
}

impl CompressionState {
    const fn new() -> Self {
        Self {
            h: H0,
            w: [0; ROUNDS],
            wv: [0; 8],
        }
    }

    /// Compress one block per RFC 6234 Section 6.4.2
    fn compress(&mut self, block: &[u8]) {
        debug_assert_eq!(block.len(), BLOCK_LEN);

        // Step 1: W[0..15] from block (big-endian)
        let mut word = [0u8; 8];
        for (wt, bytes) in self.w.iter_mut().zip(block.chunks_exact(8)) {
            word.copy_from_slice(bytes);
            *wt = u64::from_be_bytes(word);
        }
        word.zeroize();

        // W[16..79]: W[t] = σ1(W[t-2]) + W[t-7] + σ0(W[t-15]) + W[t-16]
        for t in 16..ROUNDS {
            self.w[t] = ssig1(self.w[t - 2])
                .wrapping_add(self.w[t - 7])
                .wrapping_add(ssig0(self.w[t - 15]))
                .wrapping_add(self.w[t - 16]);
        }

        // Step 2: working variables from H(i-1)
        self.wv = self.h;

        // Step 3: 80 rounds
        for (k, wt) in K.iter().zip(self.w.iter_mut()) {
            let [a, b, c, d, e, f, g, h] = self.wv;

            let t1 = h
                .wrapping_add(bsig1(e))
                .wrapping_add(ch(e, f, g))
                .wrapping_add(*k)
                .wrapping_add(*wt);
            let t2 = bsig0(a).wrapping_add(maj(a, b, c));

            self.wv = [t1.wrapping_add(t2), a, b, c, d.wrapping_add(t1), e, f, g];

            // W[t] no longer needed
            *wt = 0;
        }

        // Step 4: H(i) = H(i-1) + working variables
        for (h, v) in self.h.iter_mut().zip(self.wv.iter()) {
            *h = h.wrapping_add(*v);
        }
        self.wv.zeroize();
    }
}

/// SHA-384 streaming engine.
///
/// Feed input with [`update`](Self::update), then call
/// [`finalize`](Self::finalize). Splitting the input across any number of
/// `update` calls yields the same digest as a single call.
///
/// Finalization is idempotent: a second `finalize` returns the cached digest.
/// Once finalized, `update` fails with [`DigestError::InvalidState`] until
/// [`reset`](Self::reset) is called.
///
/// All intermediate state is zeroized on drop, and everything except the
/// cached digest is zeroized as soon as the engine is finalized.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Sha384 {
    state: CompressionState,
    /// Input buffer for partial blocks
    buffer: [u8; BLOCK_LEN],
    /// Bytes pending in `buffer`, always < BLOCK_LEN between calls
    buffer_len: usize,
    /// Total message length in bytes
    total_len: u128,
    /// Set once by `finalize`
    digest: Option<Digest>,
}

impl Sha384 {
    /// Creates an engine initialized with the SHA-384 H(0)
    pub const fn new() -> Self {
        Self {
            state: CompressionState::new(),
            buffer: [0u8; BLOCK_LEN],
            buffer_len: 0,
            total_len: 0,
            digest: None,
        }
    }

    /// Feeds `data` into the engine.
    ///
    /// # Errors
    /// Returns [`DigestError::InvalidState`] if the engine was already
    /// finalized. The engine is left untouched in that case.
    pub fn update(&mut self, data: &[u8]) -> Result<(), DigestError> {
        if self.digest.is_some() {
            return Err(DigestError::InvalidState);
        }

        self.absorb(data);
        Ok(())
    }

    /// Buffers input and compresses every completed block.
    pub(crate) fn absorb(&mut self, mut data: &[u8]) {
        self.total_len += data.len() as u128;

        // Fill buffer if partially filled
        if self.buffer_len > 0 {
            let copy_len = core::cmp::min(BLOCK_LEN - self.buffer_len, data.len());
            self.buffer[self.buffer_len..self.buffer_len + copy_len]
                .copy_from_slice(&data[..copy_len]);
            self.buffer_len += copy_len;
            data = &data[copy_len..];

            if self.buffer_len < BLOCK_LEN {
                return;
            }

            self.state.compress(&self.buffer);
            self.buffer.zeroize();
            self.buffer_len = 0;
        }

        // Process full blocks straight from the input
        let mut blocks = data.chunks_exact(BLOCK_LEN);
        for block in &mut blocks {
            self.state.compress(block);
        }

        // Buffer remaining
        let rest = blocks.remainder();
        self.buffer[..rest.len()].copy_from_slice(rest);
        self.buffer_len = rest.len();
    }

    /// Pads the message, compresses the final block(s) and returns the digest.
    ///
    /// Calling this again without [`reset`](Self::reset) returns the same
    /// digest without touching the state.
    pub fn finalize(&mut self) -> Digest {
        if let Some(digest) = self.digest {
            return digest;
        }

        // Padding per RFC 6234 Section 4.2
        let bit_len = self.total_len << 3;

        // Append 0x80 (1 bit followed by zeros)
        self.buffer[self.buffer_len] = 0x80;
        self.buffer_len += 1;

        // No room left for the 128-bit length: pad out and compress
        if self.buffer_len > BLOCK_LEN - LENGTH_FIELD_LEN {
            self.buffer[self.buffer_len..].fill(0);
            self.state.compress(&self.buffer);
            self.buffer_len = 0;
        }

        self.buffer[self.buffer_len..BLOCK_LEN - LENGTH_FIELD_LEN].fill(0);
        self.buffer[BLOCK_LEN - LENGTH_FIELD_LEN..].copy_from_slice(&bit_len.to_be_bytes());
        self.state.compress(&self.buffer);

        // H0..H5 big-endian; H6 and H7 are dropped
        let mut out = [0u8; HASH_LEN];
        for (bytes, word) in out.chunks_exact_mut(8).zip(self.state.h.iter()) {
            bytes.copy_from_slice(&word.to_be_bytes());
        }

        self.state.zeroize();
        self.buffer.zeroize();
        self.buffer_len = 0;

        let digest = Digest::from_bytes(out);
        out.zeroize();
        self.digest = Some(digest);

        digest
    }

    /// Finalizes into a caller-provided buffer
    pub fn finalize_into(&mut self, out: &mut [u8; HASH_LEN]) {
        out.copy_from_slice(self.finalize().as_bytes());
    }

    /// Finalizes, then resets the engine for the next message
    pub fn finalize_reset(&mut self) -> Digest {
        let digest = self.finalize();
        self.reset();
        digest
    }

    /// Returns the engine to its freshly constructed state.
    ///
    /// The previous state is zeroized on the way out.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Whether [`finalize`](Self::finalize) has been called since the last reset
    pub fn is_finalized(&self) -> bool {
        self.digest.is_some()
    }

    /// Total number of message bytes fed so far
    pub fn bytes_hashed(&self) -> u128 {
        self.total_len
    }

    /// Message length in bits, as encoded by padding (mod 2^128)
    pub fn bit_len(&self) -> u128 {
        self.total_len << 3
    }

    /// Runs a single compression over `block` starting from `h`, bypassing
    /// buffering and padding.
    #[cfg(test)]
    pub(crate) fn compress_block(h: &mut [u64; 8], block: &[u8; BLOCK_LEN]) {
        let mut state = CompressionState::new();
        state.h = *h;
        state.compress(block);
        *h = state.h;
        state.zeroize();
    }

    /// Schedule, working variables and block buffer are all zero
    #[cfg(test)]
    pub(crate) fn scratch_is_zeroized(&self) -> bool {
        self.state.w.iter().all(|&w| w == 0)
            && self.state.wv.iter().all(|&v| v == 0)
            && self.buffer.iter().all(|&b| b == 0)
    }

    /// Hash registers are all zero
    #[cfg(test)]
    pub(crate) fn registers_are_zeroized(&self) -> bool {
        self.state.h.iter().all(|&h| h == 0)
    }
}

impl Default for Sha384 {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Sha384 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sha384")
            .field("bytes_hashed", &self.total_len)
            .field("finalized", &self.is_finalized())
            .finish_non_exhaustive()
    }
}

/// Computes the SHA-384 digest of `data` in one call
pub fn sha384(data: &[u8]) -> Digest {
    let mut engine = Sha384::new();
    engine.absorb(data);
    engine.finalize()
}
