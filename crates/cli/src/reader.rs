// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bounded record reading.
//!
//! Input is consumed as records of at most [`RECORD_CAPACITY`] content
//! bytes:
//! - A record normally ends after a newline, which is kept.
//! - At end of stream the remaining bytes form the last record.
//! - A longer line is cut at the capacity and its remainder is read as
//!   the following record(s).

use std::io::{self, BufRead};

use memchr::memchr;

/// Maximum content bytes in one record, excluding its newline.
pub const RECORD_CAPACITY: usize = 255;

/// How a record ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordEnd {
    /// Ended with a newline, which is part of the record.
    Newline,

    /// Last bytes of the stream, without a trailing newline.
    EndOfStream,

    /// Capacity reached mid-line; the line continues in the next record.
    Cut,
}

/// Reads capacity-bounded records from a buffered source.
pub struct RecordReader<R> {
    inner: R,
    capacity: usize,
}

impl<R: BufRead> RecordReader<R> {
    /// Create a reader with the default capacity.
    pub fn new(inner: R) -> Self {
        Self::with_capacity(inner, RECORD_CAPACITY)
    }

    /// Create a reader with a custom capacity.
    pub fn with_capacity(inner: R, capacity: usize) -> Self {
        Self { inner, capacity }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Read the next record into `buf`, replacing its contents.
    ///
    /// Returns `Ok(None)` at end of stream.
    pub fn next_record(&mut self, buf: &mut Vec<u8>) -> io::Result<Option<RecordEnd>> {
        buf.clear();

        while buf.len() < self.capacity {
            let room = self.capacity - buf.len();
            let available = self.fill()?;
            if available.is_empty() {
                return Ok(if buf.is_empty() {
                    None
                } else {
                    Some(RecordEnd::EndOfStream)
                });
            }

            let window = &available[..available.len().min(room)];
            let (used, newline) = match memchr(b'\n', window) {
                Some(i) => (i + 1, true),
                None => (window.len(), false),
            };
            buf.extend_from_slice(&window[..used]);
            self.inner.consume(used);

            if newline {
                return Ok(Some(RecordEnd::Newline));
            }
        }

        // Full record: a newline right at the boundary still belongs to it.
        let next = self.fill()?.first().copied();
        match next {
            None => Ok(Some(RecordEnd::EndOfStream)),
            Some(b'\n') => {
                buf.push(b'\n');
                self.inner.consume(1);
                Ok(Some(RecordEnd::Newline))
            }
            Some(_) => Ok(Some(RecordEnd::Cut)),
        }
    }

    /// `fill_buf`, retrying on interruption.
    fn fill(&mut self) -> io::Result<&[u8]> {
        loop {
            match self.inner.fill_buf() {
                Ok(_) => break,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        self.inner.fill_buf()
    }
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
