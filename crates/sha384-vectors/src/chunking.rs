// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Chunk sizes that straddle the 128-byte block boundary in every direction.
pub const SPLIT_SIZES: &[usize] = &[0, 1, 7, 63, 111, 112, 113, 127, 128, 129, 255, 4096];

/// Splits `data` into consecutive chunks whose lengths cycle through `sizes`.
///
/// Zero sizes produce empty chunks (which the engine must accept); the final
/// chunk is truncated to what is left. Concatenating the result yields `data`.
///
/// # Panics
///
/// Panics if `sizes` is empty or contains only zeros.
pub fn split_by_sizes<'a>(data: &'a [u8], sizes: &[usize]) -> Vec<&'a [u8]> {
    assert!(sizes.iter().any(|&s| s > 0), "split sizes must contain a non-zero entry");

    let mut chunks = Vec::new();
    let mut rest = data;

    for &size in sizes.iter().cycle() {
        if rest.is_empty() {
            break;
        }
        let (head, tail) = rest.split_at(size.min(rest.len()));
        chunks.push(head);
        rest = tail;
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern;

    #[test]
    fn test_split_concatenates_back() {
        let data = pattern(1000);
        let chunks = split_by_sizes(&data, SPLIT_SIZES);

        assert_eq!(chunks.concat(), data);
        assert!(chunks.iter().any(|c| c.is_empty()));
    }

    #[test]
    fn test_split_empty_input() {
        assert!(split_by_sizes(&[], &[3]).is_empty());
    }

    #[test]
    fn test_split_truncates_last_chunk() {
        let data = [1u8, 2, 3, 4, 5];
        let chunks = split_by_sizes(&data, &[2]);

        assert_eq!(chunks, vec![&[1u8, 2][..], &[3, 4][..], &[5][..]]);
    }

    #[test]
    #[should_panic]
    fn test_split_rejects_all_zero_sizes() {
        split_by_sizes(&[1, 2, 3], &[0, 0]);
    }
}
