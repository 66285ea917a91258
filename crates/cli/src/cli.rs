// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.
//!
//! Options must come before the first pattern. Everything from the first
//! pattern on is taken literally, so `quickfilter foo -v` looks up `-v`.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

/// Print lines whose first word is in a sorted list of strings
#[derive(Parser)]
#[command(name = "quickfilter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Print lines whose first word is not in the list
    #[arg(short = 'v', long = "invert-match")]
    pub invert: bool,

    /// Reject unsorted or short patterns and over-long lines
    #[arg(long)]
    pub strict: bool,

    /// Report line counts on stderr
    #[arg(long)]
    pub verbose: bool,

    /// Use specific config file
    #[arg(short = 'C', long = "config", env = "QUICKFILTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Byte-sorted strings to look up, each at least 3 bytes long
    #[arg(
        value_name = "PATTERN",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub patterns: Vec<OsString>,
}

impl Cli {
    /// Patterns as raw bytes, in argument order.
    pub fn pattern_bytes(&self) -> Vec<Vec<u8>> {
        self.patterns
            .iter()
            .map(|p| p.as_encoded_bytes().to_vec())
            .collect()
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
