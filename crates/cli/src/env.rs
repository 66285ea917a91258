// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Environment variable names and lookups.

include!(concat!(env!("OUT_DIR"), "/env_names.rs"));

/// Whether a boolean-ish environment variable is switched on (`1` or `true`).
pub fn flag_enabled(name: &str) -> bool {
    std::env::var(name).is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true"))
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
