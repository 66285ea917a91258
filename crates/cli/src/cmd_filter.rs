// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filter command implementation.

use std::io;

use quickfilter::cli::Cli;
use quickfilter::config::{self, FilterConfig};
use quickfilter::env;
use quickfilter::error::ExitCode;
use quickfilter::filter::{FilterOptions, run_filter};
use quickfilter::matcher::SortedMatcher;
use quickfilter::verbose::VerboseLogger;

/// Check if verbose output is enabled via QUICKFILTER_DEBUG env var.
fn debug_enabled() -> bool {
    env::flag_enabled(env::QUICKFILTER_DEBUG)
}

/// Run the filter over stdin.
pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let defaults = match &cli.config {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            config::load(path)?.filter
        }
        None => FilterConfig::default(),
    };

    let options = FilterOptions {
        invert: cli.invert || defaults.invert,
        strict: cli.strict || defaults.strict,
    };
    let verbose = VerboseLogger::new(cli.verbose || defaults.verbose || debug_enabled());

    let patterns = cli.pattern_bytes();
    let matcher = if options.strict {
        SortedMatcher::build_strict(&patterns).map_err(quickfilter::Error::from)?
    } else {
        SortedMatcher::build(&patterns)
    };
    tracing::debug!(
        patterns = matcher.len(),
        invert = options.invert,
        strict = options.strict,
        "matcher built"
    );

    let stdin = io::stdin().lock();
    let mut stdout = io::BufWriter::new(io::stdout().lock());
    let stats = run_filter(&matcher, options, stdin, &mut stdout)?;

    verbose.summary(&stats, matcher.len());
    Ok(ExitCode::Success)
}
