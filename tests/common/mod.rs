//! Shared test utilities for lzw-codec integration tests.
//!
//! Sample builders are deterministic so failures reproduce exactly.

#![allow(dead_code)]

use lzw_codec::bits::BitReader;
use lzw_codec::Code;

/// Every byte value paired with a scrambled partner: 512 bytes in which no
/// two-byte sequence repeats, so each byte is emitted as its own literal.
pub fn distinct_pairs() -> Vec<u8> {
    (0..=255u8).flat_map(|a| [a, a.wrapping_mul(7)]).collect()
}

/// Repetitive English-like text.
pub fn text_corpus(len: usize) -> Vec<u8> {
    const WORDS: &[&str] = &[
        "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed",
        "do", "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna",
    ];
    let mut out = Vec::with_capacity(len + 16);
    let mut i = 0usize;
    while out.len() < len {
        out.extend_from_slice(WORDS[(i * 7 + i / 3) % WORDS.len()].as_bytes());
        out.push(if i % 11 == 10 { b'\n' } else { b' ' });
        i += 1;
    }
    out.truncate(len);
    out
}

/// Pseudo-random bytes from a fixed-seed xorshift generator.
pub fn pseudo_random(len: usize, seed: u64) -> Vec<u8> {
    let mut state = seed | 1;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state >> 24) as u8
        })
        .collect()
}

/// Pseudo-random bytes drawn from a small alphabet, which compress well.
pub fn low_entropy(len: usize, alphabet: u8, seed: u64) -> Vec<u8> {
    pseudo_random(len, seed)
        .into_iter()
        .map(|b| b'a' + b % alphabet)
        .collect()
}

/// Read `count` codes of `width` bits each.
pub fn read_codes(reader: &mut BitReader<'_>, count: usize, width: u8) -> Vec<Code> {
    (0..count)
        .map(|i| {
            reader
                .read(width)
                .unwrap_or_else(|| panic!("stream ended at code {i} of {count}"))
        })
        .collect()
}
