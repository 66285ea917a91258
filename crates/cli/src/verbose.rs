// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Verbose output logger for run statistics.
//!
//! Writes `[verbose]` prefixed lines to stderr. Enabled with `--verbose`,
//! `verbose = true` in the config, or `QUICKFILTER_DEBUG=1`.

use crate::filter::FilterStats;

/// Verbose output logger. Writes to stderr with a `[verbose]` prefix.
/// All output is conditional on verbose mode being enabled.
pub struct VerboseLogger {
    enabled: bool,
}

impl VerboseLogger {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Print a verbose line to stderr.
    pub fn log(&self, msg: &str) {
        if self.enabled {
            eprintln!("[verbose] {}", msg);
        }
    }

    /// Print the end-of-run counters.
    pub fn summary(&self, stats: &FilterStats, patterns: usize) {
        for line in summary_lines(stats, patterns) {
            self.log(&line);
        }
    }
}

/// Summary lines for a finished run.
///
/// The first line counts every record looked up, matched or not.
pub fn summary_lines(stats: &FilterStats, patterns: usize) -> [String; 2] {
    [
        format!("Matched {} lines against {} symbols", stats.records, patterns),
        format!("Selected {}, wrote {}", stats.matched, stats.emitted),
    ]
}

#[cfg(test)]
#[path = "verbose_tests.rs"]
mod tests;
