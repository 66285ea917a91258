// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Power-of-two probe stepping over a sorted array.
//!
//! The probe starts at `floor_pow2(len) - 1` and halves its step before
//! every comparison. When a move would land past the last index the probe
//! is repositioned relative to the last position known to be below the
//! key, so array lengths that are not a power of two need no padding.

use std::cmp::Ordering;

/// Largest power of two not above `n`, or zero when `n` is zero.
pub fn floor_pow2(n: usize) -> usize {
    match n {
        0 => 0,
        _ => 1 << (usize::BITS - 1 - n.leading_zeros()),
    }
}

/// Search position and step for one lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probe {
    pos: usize,
    step: usize,
    len: usize,
}

impl Probe {
    /// Start a probe over `len` sorted elements. Returns `None` when empty.
    pub fn start(len: usize) -> Option<Self> {
        let step = floor_pow2(len);
        if step == 0 {
            return None;
        }
        Some(Self {
            pos: step - 1,
            step,
            len,
        })
    }

    /// Current position to compare against.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn step(&self) -> usize {
        self.step
    }

    /// Halve the step ahead of the next comparison.
    pub fn narrow(&mut self) {
        self.step >>= 1;
    }

    /// Move by the current step in the direction of `ord`, the order of
    /// the key relative to the element at the current position.
    ///
    /// Returns `false` once the search is exhausted.
    pub fn advance(&mut self, ord: Ordering) -> bool {
        match ord {
            Ordering::Less => self.pos -= self.step,
            Ordering::Greater => self.pos += self.step,
            Ordering::Equal => {}
        }
        if self.pos >= self.len && self.step != 0 {
            self.reposition();
        }
        self.step != 0
    }

    /// Restart from the last position below the key after walking off the
    /// end of the array.
    fn reposition(&mut self) {
        let lower = self.pos - self.step;
        self.step = floor_pow2(self.len - 1 - lower);
        self.pos = lower + self.step;
    }
}

#[cfg(test)]
#[path = "probe_tests.rs"]
mod tests;
