// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The record filter loop.
//!
//! Reads bounded records, tests each leading token against the matcher and
//! echoes the selected records verbatim. Reading stops quietly at end of
//! stream or on a read error; a closed output pipe also ends the run.

use std::io::{self, BufRead, Write};

use crate::error::{Error, Result};
use crate::matcher::SortedMatcher;
use crate::reader::{RecordEnd, RecordReader};

/// Run-wide filter settings.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FilterOptions {
    /// Echo records that do not match instead of those that do.
    pub invert: bool,

    /// Fail on lines longer than the record capacity instead of cutting them.
    pub strict: bool,
}

/// Counters for one filter run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FilterStats {
    /// Records read (a cut line counts once per record).
    pub records: u64,

    /// Records whose leading token matched.
    pub matched: u64,

    /// Records written to the output.
    pub emitted: u64,
}

/// Filter `input` into `output`.
///
/// Returns the run's counters. Read errors end the input like end of
/// stream does. Write errors other than a broken pipe are returned.
pub fn run_filter<P, R, W>(
    matcher: &SortedMatcher<'_, P>,
    options: FilterOptions,
    input: R,
    output: &mut W,
) -> Result<FilterStats>
where
    P: AsRef<[u8]>,
    R: BufRead,
    W: Write,
{
    let mut reader = RecordReader::new(input);
    let mut record = Vec::with_capacity(reader.capacity() + 1);
    let mut stats = FilterStats::default();
    let mut line: u64 = 1;

    loop {
        let end = match reader.next_record(&mut record) {
            Ok(Some(end)) => end,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, records = stats.records, "read failed, ending input");
                break;
            }
        };
        stats.records += 1;

        if end == RecordEnd::Cut {
            if options.strict {
                return Err(Error::LineTooLong {
                    line,
                    capacity: reader.capacity(),
                });
            }
            tracing::warn!(line, capacity = reader.capacity(), "line cut at capacity");
        }

        let matched = matcher.is_match(&record);
        if matched {
            stats.matched += 1;
        }
        if matched != options.invert {
            if !emit(output, &record)? {
                return Ok(stats);
            }
            stats.emitted += 1;
        }

        if end == RecordEnd::Newline {
            line += 1;
        }
    }

    match output.flush() {
        Err(e) if e.kind() != io::ErrorKind::BrokenPipe => return Err(Error::Output(e)),
        _ => {}
    }

    tracing::debug!(
        records = stats.records,
        matched = stats.matched,
        emitted = stats.emitted,
        "end of input"
    );
    Ok(stats)
}

/// Write one record. Returns `false` when the reader has gone away.
fn emit<W: Write>(output: &mut W, record: &[u8]) -> Result<bool> {
    match output.write_all(record) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            tracing::debug!("output closed");
            Ok(false)
        }
        Err(e) => Err(Error::Output(e)),
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
