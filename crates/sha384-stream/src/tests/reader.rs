// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::io::{self, Cursor};
use std::path::Path;

use sha384_core::sha384;
use sha384_vectors::{TempFile, assert_known_answers, pattern};

use super::support::{CancellingReader, FailingReader, InterruptingReader};
use crate::{
    CancellationFlag, StreamConfig, StreamError, hash_file, hash_reader, new_hasher, sha384_text,
};

#[test]
fn test_reader_known_answers_with_awkward_chunks() {
    for chunk_size in [111usize, 128, 4096] {
        let config = StreamConfig::with_chunk_size(chunk_size);
        assert_known_answers(|msg| hash_reader(msg, &config, None).unwrap().to_bytes());
    }
}

#[test]
fn test_reader_single_byte_chunks() {
    let data = pattern(300);
    let digest = hash_reader(Cursor::new(&data), &StreamConfig::with_chunk_size(1), None).unwrap();

    assert_eq!(digest, sha384(&data));
}

#[test]
fn test_reader_empty_source() {
    let digest = hash_reader(io::empty(), &StreamConfig::default(), None).unwrap();
    assert_eq!(digest, sha384(b""));
}

#[test]
fn test_reader_retries_interrupted() {
    let data = pattern(1000);
    let reader = InterruptingReader {
        inner: &data,
        interrupt_next: false,
    };

    let digest = hash_reader(reader, &StreamConfig::with_chunk_size(64), None).unwrap();

    assert_eq!(digest, sha384(&data));
}

#[test]
fn test_reader_propagates_io_errors() {
    let err = hash_reader(FailingReader { ok_reads: 2 }, &StreamConfig::default(), None)
        .unwrap_err();

    match err {
        StreamError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn test_reader_rejects_zero_chunk_size() {
    let err = hash_reader(io::empty(), &StreamConfig::with_chunk_size(0), None).unwrap_err();
    assert!(matches!(err, StreamError::InvalidChunkSize));
}

#[test]
fn test_reader_stops_when_cancelled() {
    let flag = CancellationFlag::new();
    let reader = CancellingReader {
        flag: flag.clone(),
        reads_before_cancel: 3,
    };

    let err = hash_reader(reader, &StreamConfig::with_chunk_size(100), Some(&flag)).unwrap_err();

    // Three plain reads plus the read that raised the flag
    match err {
        StreamError::Cancelled { bytes_hashed } => assert_eq!(bytes_hashed, 400),
        other => panic!("expected Cancelled, got {other:?}"),
    }
}

#[test]
fn test_reader_precancelled_reads_nothing() {
    let flag = CancellationFlag::new();
    flag.cancel();

    let err = hash_reader(FailingReader { ok_reads: 0 }, &StreamConfig::default(), Some(&flag))
        .unwrap_err();

    assert!(matches!(err, StreamError::Cancelled { bytes_hashed: 0 }));
}

#[test]
fn test_cancellation_flag_is_shared_by_clones() {
    let flag = CancellationFlag::new();
    let clone = flag.clone();
    assert!(!clone.is_cancelled());

    flag.cancel();

    assert!(clone.is_cancelled());
}

#[test]
fn test_hash_file() {
    let data = pattern(300_001);
    let file = TempFile::with_contents(&data);

    let digest = hash_file(file.path(), &StreamConfig::default(), None).unwrap();

    assert_eq!(digest, sha384(&data));
}

#[test]
fn test_hash_missing_file() {
    let err = hash_file(
        Path::new("/definitely/not/here.bin"),
        &StreamConfig::default(),
        None,
    )
    .unwrap_err();

    assert!(matches!(err, StreamError::Io(ref e) if e.kind() == io::ErrorKind::NotFound));
}

#[test]
fn test_text_is_utf8_encoded() {
    let text = "héllo wörld";

    assert_eq!(sha384_text(text), sha384(text.as_bytes()));
    assert_eq!(
        sha384_text(text).to_hex(),
        "0ae7fb364d4a1c32722e35dd2abe2eba049d63883e63b30cf1c510a6923c4967\
         6f41d1b6765c7c63a15f8c369289a313"
    );
}

#[test]
fn test_new_hasher_is_fresh() {
    let mut hasher = new_hasher();
    hasher.update(b"abc").unwrap();
    assert_eq!(hasher.finalize(), sha384(b"abc"));
}
