// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::io;
use std::path::Path;

use sha384_core::sha384;
use sha384_vectors::{KNOWN_ANSWERS, TempFile, pattern};

use super::support::InterruptingAsyncReader;

use crate::{
    CancellationFlag, StreamConfig, StreamError, hash_file, hash_file_async, hash_reader_async,
    sha384_async,
};

#[tokio::test]
async fn test_async_known_answers() {
    for vector in KNOWN_ANSWERS {
        let message = vector.message.bytes();
        let expected = sha384(&message);

        let digest = sha384_async(message).await.unwrap();

        assert_eq!(digest, expected, "{}", vector.name);
        assert_eq!(digest.to_hex(), vector.digest, "{}", vector.name);
    }
}

#[tokio::test]
async fn test_async_reader_matches_sync() {
    let data = pattern(70_000);
    let config = StreamConfig::with_chunk_size(1000);

    let digest = hash_reader_async(data.as_slice(), &config, None).await.unwrap();

    assert_eq!(digest, sha384(&data));
}

#[tokio::test]
async fn test_async_reader_retries_interrupted() {
    let data = pattern(5_000);
    let reader = InterruptingAsyncReader {
        inner: &data,
        interrupt_next: false,
    };

    let digest = hash_reader_async(reader, &StreamConfig::with_chunk_size(333), None)
        .await
        .unwrap();

    assert_eq!(digest, sha384(&data));
}

#[tokio::test]
async fn test_async_reader_cancelled_before_start() {
    let flag = CancellationFlag::new();
    flag.cancel();

    let err = hash_reader_async(&b"never read"[..], &StreamConfig::default(), Some(&flag))
        .await
        .unwrap_err();

    assert!(matches!(err, StreamError::Cancelled { bytes_hashed: 0 }));
}

#[tokio::test]
async fn test_async_reader_rejects_zero_chunk_size() {
    let err = hash_reader_async(&b""[..], &StreamConfig::with_chunk_size(0), None)
        .await
        .unwrap_err();

    assert!(matches!(err, StreamError::InvalidChunkSize));
}

#[tokio::test]
async fn test_hash_file_async_matches_sync() {
    let data = pattern(200_003);
    let file = TempFile::with_contents(&data);
    let config = StreamConfig::with_chunk_size(8192);

    let async_digest = hash_file_async(file.path(), &config, None).await.unwrap();
    let sync_digest = hash_file(file.path(), &config, None).unwrap();

    assert_eq!(async_digest, sync_digest);
    assert_eq!(async_digest, sha384(&data));
}

#[tokio::test]
async fn test_hash_file_async_missing_file() {
    let err = hash_file_async(Path::new("/definitely/not/here.bin"), &StreamConfig::default(), None)
        .await
        .unwrap_err();

    assert!(matches!(err, StreamError::Io(ref e) if e.kind() == io::ErrorKind::NotFound));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_concurrent_async_digests_are_independent() {
    let tasks: Vec<_> = (0u8..8)
        .map(|i| tokio::spawn(sha384_async(vec![i; 10_000])))
        .collect();

    for (i, task) in tasks.into_iter().enumerate() {
        let digest = task.await.unwrap().unwrap();
        assert_eq!(digest, sha384(&[i as u8; 10_000]));
    }
}
