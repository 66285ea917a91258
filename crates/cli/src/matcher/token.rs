// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Leading-token extraction.

use memchr::memchr;

/// Returns the leading token of a record.
///
/// The token ends at the first tab. Without a tab it ends at the first
/// space, then at the first newline, then at the end of the record.
/// Delimiters are tried in that priority order rather than by position,
/// so `b"abc def\tx"` yields `b"abc def"`.
pub fn leading_token(record: &[u8]) -> &[u8] {
    let end = memchr(b'\t', record)
        .or_else(|| memchr(b' ', record))
        .or_else(|| memchr(b'\n', record))
        .unwrap_or(record.len());
    &record[..end]
}

#[cfg(test)]
#[path = "token_tests.rs"]
mod tests;
