// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;
use sha384_vectors::{pattern, split_by_sizes};

use crate::{Sha384, sha384};

fn streamed(chunks: &[&[u8]]) -> crate::Digest {
    let mut engine = Sha384::new();
    for chunk in chunks {
        engine.update(chunk).unwrap();
    }
    engine.finalize()
}

#[test]
fn test_two_way_split_at_every_offset() {
    let msg = pattern(300);
    let expected = sha384(&msg);

    for split in 0..=msg.len() {
        let (head, tail) = msg.split_at(split);
        assert_eq!(streamed(&[head, tail]), expected, "split at {split}");
    }
}

#[test]
fn test_empty_updates_are_neutral() {
    let msg = pattern(129);

    let mut engine = Sha384::new();
    engine.update(&[]).unwrap();
    engine.update(&msg[..64]).unwrap();
    engine.update(&[]).unwrap();
    engine.update(&msg[64..]).unwrap();
    engine.update(&[]).unwrap();

    assert_eq!(engine.finalize(), sha384(&msg));
}

#[test]
fn test_block_sized_chunks() {
    let msg = pattern(128 * 5);
    let chunks: Vec<&[u8]> = msg.chunks(128).collect();

    assert_eq!(streamed(&chunks), sha384(&msg));
}

#[test]
fn test_clone_forks_common_prefix() {
    let mut prefix = Sha384::new();
    prefix.update(b"common prefix ").unwrap();

    let mut left = prefix.clone();
    let mut right = prefix;
    left.update(b"left").unwrap();
    right.update(b"right").unwrap();

    assert_eq!(left.finalize(), sha384(b"common prefix left"));
    assert_eq!(right.finalize(), sha384(b"common prefix right"));
}

proptest! {
    #[test]
    fn prop_chunking_does_not_change_digest(
        data in prop::collection::vec(any::<u8>(), 0..1200),
        sizes in prop::collection::vec(0usize..300, 1..8),
    ) {
        prop_assume!(sizes.iter().any(|&s| s > 0));

        let chunks = split_by_sizes(&data, &sizes);
        prop_assert_eq!(streamed(&chunks), sha384(&data));
    }

    #[test]
    fn prop_concatenation_matches_sequential_updates(
        a in prop::collection::vec(any::<u8>(), 0..400),
        b in prop::collection::vec(any::<u8>(), 0..400),
    ) {
        let joined = [a.as_slice(), b.as_slice()].concat();
        prop_assert_eq!(streamed(&[a.as_slice(), b.as_slice()]), sha384(&joined));
    }
}
