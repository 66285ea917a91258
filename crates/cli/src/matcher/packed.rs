// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Packed-word comparison keys.
//!
//! The first four bytes of a string are packed into a big-endian `u32`
//! so that most probes are decided by a single integer comparison. A
//! byte-wise comparison only runs when the packed words tie.

use std::cmp::Ordering;

/// Number of bytes covered by a packed word.
pub const WORD_BYTES: usize = 4;

/// The first (up to) four bytes of a string as a big-endian integer.
///
/// Strings shorter than four bytes are zero-padded on the right, so the
/// integer order of two words agrees with the byte order of their
/// prefixes regardless of host endianness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PackedWord(u32);

impl PackedWord {
    /// Pack the leading bytes of `bytes`.
    pub fn pack(bytes: &[u8]) -> Self {
        let mut window = [0u8; WORD_BYTES];
        let n = bytes.len().min(WORD_BYTES);
        window[..n].copy_from_slice(&bytes[..n]);
        Self(u32::from_be_bytes(window))
    }

    /// Keep only the bits selected by `mask`.
    pub fn masked(self, mask: u32) -> Self {
        Self(self.0 & mask)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

/// Mask selecting the high-order bytes that a token of `len` bytes fills.
///
/// Tokens of four bytes or more use every bit. Shorter tokens mask off
/// the padding so that `ab` ties with the word of `abc`.
pub fn mask_for_len(len: usize) -> u32 {
    match len {
        0 => 0,
        1..WORD_BYTES => !(u32::MAX >> (8 * len)),
        _ => u32::MAX,
    }
}

/// A search key built once per record.
#[derive(Debug, Clone, Copy)]
pub struct Key<'a> {
    bytes: &'a [u8],
    word: PackedWord,
    mask: u32,
}

impl<'a> Key<'a> {
    pub fn new(token: &'a [u8]) -> Self {
        let mask = mask_for_len(token.len());
        Self {
            bytes: token,
            word: PackedWord::pack(token).masked(mask),
            mask,
        }
    }

    /// Order of the key relative to `pattern`.
    ///
    /// Unequal packed words decide the order directly. On a tie the
    /// common prefix is compared byte-wise and, if that is equal too,
    /// the shorter string orders first.
    pub fn compare(&self, pattern: &[u8]) -> Ordering {
        let word = PackedWord::pack(pattern).masked(self.mask);
        match self.word.cmp(&word) {
            Ordering::Equal => self.bytes.cmp(pattern),
            ord => ord,
        }
    }
}

#[cfg(test)]
#[path = "packed_tests.rs"]
mod tests;
