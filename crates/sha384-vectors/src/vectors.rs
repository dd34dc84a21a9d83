// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// How a vector's message is produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Literal bytes
    Bytes(&'static [u8]),
    /// `byte` repeated `count` times
    Repeated {
        /// Byte value
        byte: u8,
        /// Repetitions
        count: usize,
    },
    /// [`pattern`] of the given length
    Pattern(usize),
}

impl Message {
    /// Message length in bytes
    pub fn len(&self) -> usize {
        match *self {
            Message::Bytes(bytes) => bytes.len(),
            Message::Repeated { count, .. } => count,
            Message::Pattern(len) => len,
        }
    }

    /// Whether the message is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Materializes the message
    pub fn bytes(&self) -> Vec<u8> {
        match *self {
            Message::Bytes(bytes) => bytes.to_vec(),
            Message::Repeated { byte, count } => vec![byte; count],
            Message::Pattern(len) => pattern(len),
        }
    }
}

/// Deterministic non-repeating-within-a-block filler: byte `i` is `31*i + 7 (mod 256)`.
pub fn pattern(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i.wrapping_mul(31).wrapping_add(7)) as u8).collect()
}

/// A single SHA-384 known answer
#[derive(Debug, Clone, Copy)]
pub struct KnownAnswer {
    /// Human-readable identifier
    pub name: &'static str,
    /// Input message
    pub message: Message,
    /// Expected digest (lowercase hex)
    pub digest: &'static str,
}

/// Known answers.
///
/// The first five come from FIPS 180-4 / RFC 6234. The pattern vectors were
/// computed with an independent SHA-384 implementation and pin the padding
/// edges: lengths congruent to 0, 111, 112 and 127 modulo the block size.
pub const KNOWN_ANSWERS: &[KnownAnswer] = &[
    KnownAnswer {
        name: "empty",
        message: Message::Bytes(b""),
        digest: "38b060a751ac96384cd9327eb1b1e36a21fdb71114be07434c0cc7bf63f6e1da274edebfe76f65fbd51ad2f14898b95b",
    },
    KnownAnswer {
        name: "abc",
        message: Message::Bytes(b"abc"),
        digest: "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed8086072ba1e7cc2358baeca134c825a7",
    },
    KnownAnswer {
        name: "448-bit",
        message: Message::Bytes(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq"),
        digest: "3391fdddfc8dc7393707a65b1b4709397cf8b1d162af05abfe8f450de5f36bc6b0455a8520bc4e6f5fe95b1fe3c8452b",
    },
    KnownAnswer {
        name: "896-bit",
        message: Message::Bytes(
            b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu",
        ),
        digest: "09330c33f71147e83d192fc782cd1b4753111b173b3b05d22fa08086e3b0f712fcc7c71a557e2db966c3e9fa91746039",
    },
    KnownAnswer {
        name: "million-a",
        message: Message::Repeated {
            byte: b'a',
            count: 1_000_000,
        },
        digest: "9d0e1809716474cb086e834e310a4a1ced149e9c00f248527972cec5704c2a5b07b8b3dc38ecc4ebae97ddd87f3d8985",
    },
    KnownAnswer {
        name: "quick-brown-fox",
        message: Message::Bytes(b"The quick brown fox jumps over the lazy dog"),
        digest: "ca737f1014a48f4c0b6dd43cb177b0afd9e5169367544c494011e3317dbf9a509cb1e5dc1e85a941bbee3d7f2afbc9b1",
    },
    KnownAnswer {
        name: "pattern-1",
        message: Message::Pattern(1),
        digest: "f12be95011fa37de81bf76bee4e73a992f431a7c69b60d2495c7383ae0545569842a0c019d89c208ae48f843562b56ff",
    },
    KnownAnswer {
        name: "pattern-111",
        message: Message::Pattern(111),
        digest: "5922d169e553267e1846ae2128a026407faf487dab98dfb383e751d3846f82f6edbe70b48b6202327516159d340c56a9",
    },
    KnownAnswer {
        name: "pattern-112",
        message: Message::Pattern(112),
        digest: "b42aff1d6d298152801480cb2b5851c32afe5e5fbae583b0a9b52fe955440c3f276fd812c0f4439cf94c3f9e03068a21",
    },
    KnownAnswer {
        name: "pattern-113",
        message: Message::Pattern(113),
        digest: "8cb479a9a1e2abe9e271a31f09534a46ea438842744703904558ca5849e7dc5ee7b62594e008962e4dac5da8b746bed6",
    },
    KnownAnswer {
        name: "pattern-127",
        message: Message::Pattern(127),
        digest: "e0cc0da38b3a32572851d199e9e485afe1e62f5c24ac1c7f0b6680a1ea9febbe49d02923617d02074dd2ad70b5671389",
    },
    KnownAnswer {
        name: "pattern-128",
        message: Message::Pattern(128),
        digest: "95ab88109cbf117548a8ad35909ffefa175d06a9c42614b9d359548cff5d550b30affb36ff638cd32aa5f5409066c68a",
    },
    KnownAnswer {
        name: "pattern-129",
        message: Message::Pattern(129),
        digest: "1d0599fa8c2d4e8d626778051da62b78a0ecc76cbfdc5687302048373d1f8a5e772f19aeaf7be25f68e0ccf4f0b7f8a8",
    },
    KnownAnswer {
        name: "pattern-239",
        message: Message::Pattern(239),
        digest: "b0e8d8a1df31886ebb4707fbfce9ae5873f3dabcf6e7563f3352c1d837a5923ad7eedfe6b8c6d4a813095a30c352eb30",
    },
    KnownAnswer {
        name: "pattern-240",
        message: Message::Pattern(240),
        digest: "62f145f55197394c113cdf35478b33900a179a2d2f7559f0584f914cc77dc49d631746abddd484e489ce7ab478a69d20",
    },
    KnownAnswer {
        name: "pattern-255",
        message: Message::Pattern(255),
        digest: "8d67a20eb619e87bd1083a1b616eb5406d77c8fc2b0894b7082e316d67e5b4d48fb45d3ca824fd204a8d47896a95368f",
    },
    KnownAnswer {
        name: "pattern-256",
        message: Message::Pattern(256),
        digest: "1309811305efc73654ede73c40aaff0f19353c321689dcbb04138ab3fff3a6eabbc5a65af08da09fe44766d9e223826e",
    },
    KnownAnswer {
        name: "pattern-1000",
        message: Message::Pattern(1000),
        digest: "4f33e6bdc22d2129245d832f3b149770b799aa9e63b4c79bd3073aca7e5afc8332c83cace1f5d81c22a256f09dcb3f98",
    },
    KnownAnswer {
        name: "pattern-3MiB+17",
        message: Message::Pattern(3 * 1024 * 1024 + 17),
        digest: "2c720a54508d0b2eb0db1ee33a20da13787c953515faf5e9adffbf3df55978036513bcfa22386e5209f675e0814d4c37",
    },
];
