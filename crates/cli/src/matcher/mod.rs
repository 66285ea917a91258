// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Membership test of a record's leading token in a sorted pattern set.
//!
//! Lookup is a binary search in power-of-two steps (see [`probe`]) that
//! compares packed four-byte words before falling back to a byte-wise
//! comparison (see [`packed`]).
//!
//! The pattern set must be sorted by byte value and every pattern must be
//! at least [`MIN_PATTERN_LEN`] bytes long. [`SortedMatcher::build`] takes
//! that on trust; [`SortedMatcher::build_strict`] checks it.

pub mod packed;
pub mod probe;
pub mod token;

use packed::Key;
use probe::Probe;

pub use token::leading_token;

/// Shortest pattern the matcher is specified for.
pub const MIN_PATTERN_LEN: usize = 3;

/// A pattern set that breaks the matcher's input contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    /// Pattern sorts before its predecessor.
    #[error("pattern #{position} `{pattern}` is out of order (follows `{previous}`)")]
    Unsorted {
        /// 1-based position in the pattern list.
        position: usize,
        pattern: String,
        previous: String,
    },

    /// Pattern is shorter than [`MIN_PATTERN_LEN`].
    #[error("pattern #{position} `{pattern}` is shorter than 3 bytes")]
    TooShort { position: usize, pattern: String },
}

/// Borrowed view over a sorted pattern set.
#[derive(Debug, Clone, Copy)]
pub struct SortedMatcher<'p, P> {
    patterns: &'p [P],
}

impl<'p, P: AsRef<[u8]>> SortedMatcher<'p, P> {
    /// Build a matcher without checking the pattern contract.
    ///
    /// Unsorted or too-short patterns give unreliable answers rather than
    /// errors.
    pub fn build(patterns: &'p [P]) -> Self {
        Self { patterns }
    }

    /// Build a matcher, rejecting unsorted or too-short patterns.
    pub fn build_strict(patterns: &'p [P]) -> Result<Self, PatternError> {
        validate(patterns)?;
        Ok(Self::build(patterns))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Index of the pattern equal to the leading token of `record`.
    pub fn find(&self, record: &[u8]) -> Option<usize> {
        let key = Key::new(leading_token(record));
        let mut probe = Probe::start(self.patterns.len())?;
        loop {
            probe.narrow();
            let pattern = self.patterns.get(probe.position())?;
            let ord = key.compare(pattern.as_ref());
            if ord.is_eq() {
                return Some(probe.position());
            }
            if !probe.advance(ord) {
                return None;
            }
        }
    }

    /// Whether the leading token of `record` is in the pattern set.
    pub fn is_match(&self, record: &[u8]) -> bool {
        self.find(record).is_some()
    }
}

/// Check that `patterns` are byte-sorted and long enough.
///
/// Duplicates are allowed.
pub fn validate<P: AsRef<[u8]>>(patterns: &[P]) -> Result<(), PatternError> {
    let mut previous: Option<&[u8]> = None;
    for (i, pattern) in patterns.iter().enumerate() {
        let pattern: &[u8] = pattern.as_ref();
        if pattern.len() < MIN_PATTERN_LEN {
            return Err(PatternError::TooShort {
                position: i + 1,
                pattern: String::from_utf8_lossy(pattern).into_owned(),
            });
        }
        match previous {
            Some(prev) if prev > pattern => {
                return Err(PatternError::Unsorted {
                    position: i + 1,
                    pattern: String::from_utf8_lossy(pattern).into_owned(),
                    previous: String::from_utf8_lossy(prev).into_owned(),
                });
            }
            _ => {}
        }
        previous = Some(pattern);
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
