// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Build script that generates env var name constants for `env.rs`.

// Build scripts should panic on failure — there is no meaningful recovery.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set");
    let dest = Path::new(&out_dir).join("env_names.rs");

    let contents = r#"
/// Environment variable: path of the config file.
pub const QUICKFILTER_CONFIG: &str = "QUICKFILTER_CONFIG";
/// Environment variable: enables verbose output.
pub const QUICKFILTER_DEBUG: &str = "QUICKFILTER_DEBUG";
/// Environment variable: configures tracing log filter.
pub const QUICKFILTER_LOG: &str = "QUICKFILTER_LOG";
"#;

    fs::write(dest, contents).expect("failed to write env_names.rs");
}
